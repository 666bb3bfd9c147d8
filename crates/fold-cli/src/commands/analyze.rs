use super::resolve_sequence_input;
use crate::cli::AnalyzeArgs;
use crate::error::{CliError, Result};
use foldcast::core::composition;
use foldcast::core::sequence::Sequence;

pub fn run(args: AnalyzeArgs) -> Result<()> {
    let raw = resolve_sequence_input(args.sequence.as_deref(), args.input.as_deref(), args.example)?;
    let sequence = Sequence::parse(&raw)?;
    let metrics = composition::analyze(&sequence);

    if args.json {
        let json = serde_json::to_string_pretty(&metrics)
            .map_err(|e| CliError::Other(anyhow::anyhow!(e)))?;
        println!("{json}");
        return Ok(());
    }

    println!("Composition metrics");
    println!("  {:<26} {}", "Sequence length", metrics.length);
    println!("  {:<26} {:.2}", "Molecular weight (Da)", metrics.molecular_weight);
    println!("  {:<26} {}", "Hydrophobic residues", metrics.hydrophobic_residues);
    println!("  {:<26} {}", "Net charge (pH 7)", metrics.net_charge);
    Ok(())
}
