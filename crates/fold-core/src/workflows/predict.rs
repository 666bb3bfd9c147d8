use crate::engine::client::EsmAtlasClient;
use crate::engine::config::PredictionConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::ProgressReporter;
use crate::engine::session::{PredictionOutcome, PredictionSession};
use tracing::{info, instrument};

/// Runs one sequence-to-structure prediction end to end: builds the real
/// remote client from `config`, drives a fresh session through validation,
/// the POST to the folding service, in-memory payload parsing, and metric
/// extraction, and returns the completed outcome.
///
/// Progress events are emitted through `reporter` so interactive callers
/// can surface the in-flight phases.
#[instrument(skip_all, name = "prediction_workflow")]
pub async fn run(
    raw_sequence: &str,
    config: &PredictionConfig,
    reporter: &ProgressReporter<'_>,
) -> Result<PredictionOutcome, EngineError> {
    let client = EsmAtlasClient::new(config)?;
    let mut session = PredictionSession::new();
    let outcome = session
        .predict(raw_sequence, &client, reporter)
        .await?
        .clone();
    info!(
        "Prediction complete: {} residue(s), mean pLDDT {:.4}",
        outcome.composition.length, outcome.confidence
    );
    Ok(outcome)
}
