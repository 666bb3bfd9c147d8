use super::print_confidence_legend;
use crate::cli::InspectArgs;
use crate::error::{CliError, Result};
use foldcast::core::structure::confidence::{self, ConfidenceBand};
use foldcast::core::structure::pdb;
use tracing::info;

pub fn run(args: InspectArgs) -> Result<()> {
    let payload = std::fs::read_to_string(&args.input)?;
    let structure = pdb::parse_str(&payload)?;
    let score = confidence::mean_plddt(&structure)?;
    let band = ConfidenceBand::from_score(score);
    info!(
        "Inspected {:?}: {} residue(s), mean pLDDT {:.4}",
        &args.input,
        structure.residue_count(),
        score
    );

    if args.json {
        let json = serde_json::to_string_pretty(&serde_json::json!({
            "file": args.input.display().to_string(),
            "residues": structure.residue_count(),
            "atoms": structure.atom_count(),
            "mean_plddt": score,
            "band": band,
        }))
        .map_err(|e| CliError::Other(anyhow::anyhow!(e)))?;
        println!("{json}");
        return Ok(());
    }

    println!("Structure confidence");
    println!("  {:<26} {}", "File", args.input.display());
    println!("  {:<26} {}", "Residues", structure.residue_count());
    println!("  {:<26} {}", "Atoms", structure.atom_count());
    println!("  {:<26} {:.4} ({})", "Mean pLDDT", score, band);
    print_confidence_legend();
    Ok(())
}
