use super::{print_confidence_legend, resolve_sequence_input};
use crate::cli::PredictArgs;
use crate::config;
use crate::error::{CliError, Result};
use crate::progress::CliProgressHandler;
use foldcast::core::structure::confidence::ConfidenceBand;
use foldcast::engine::progress::ProgressReporter;
use foldcast::engine::session::PredictionOutcome;
use foldcast::workflows;
use tracing::info;

pub async fn run(args: PredictArgs) -> Result<()> {
    let sequence_text =
        resolve_sequence_input(args.sequence.as_deref(), args.input.as_deref(), args.example)?;
    let prediction_config = config::build_prediction_config(&args)?;

    let progress = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress.callback());

    let outcome = workflows::predict::run(&sequence_text, &prediction_config, &reporter).await;
    progress.finish();
    let outcome = outcome?;

    if !args.no_output {
        std::fs::write(&args.output, &outcome.payload)?;
        info!("Structure payload written to {:?}", &args.output);
        println!("Predicted structure written to {}", args.output.display());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&outcome)
            .map_err(|e| CliError::Other(anyhow::anyhow!(e)))?;
        println!("{json}");
        return Ok(());
    }

    if args.print_payload {
        println!("{}", outcome.payload);
    }

    print_property_table(&outcome);
    print_confidence_legend();
    Ok(())
}

fn print_property_table(outcome: &PredictionOutcome) {
    let band = ConfidenceBand::from_score(outcome.confidence);
    println!();
    println!("Protein properties");
    println!("  {:<26} {}", "Sequence length", outcome.composition.length);
    println!(
        "  {:<26} {:.2}",
        "Molecular weight (Da)", outcome.composition.molecular_weight
    );
    println!(
        "  {:<26} {}",
        "Hydrophobic residues", outcome.composition.hydrophobic_residues
    );
    println!(
        "  {:<26} {}",
        "Net charge (pH 7)", outcome.composition.net_charge
    );
    println!(
        "  {:<26} {:.4} ({})",
        "Mean pLDDT", outcome.confidence, band
    );
}
