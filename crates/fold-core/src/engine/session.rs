use crate::core::composition::{self, CompositionMetrics};
use crate::core::sequence::Sequence;
use crate::core::structure::{confidence, pdb};
use crate::engine::client::StructurePredictor;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use serde::Serialize;
use tracing::{debug, info};

/// Observable lifecycle of a session. Failures are not a state of their
/// own: a failed prediction surfaces its error to the caller and the
/// session settles back on whatever its stored outcome supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No prediction has completed yet.
    #[default]
    Idle,
    /// A request is in flight.
    Predicting,
    /// Payload, confidence score, and composition metrics are available.
    Ready,
}

/// Everything a completed prediction exposes for presentation and export.
///
/// Composition metrics are pinned to the sequence that was actually
/// submitted, so a later edit of the caller's input buffer cannot make the
/// displayed metrics and the displayed structure disagree.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionOutcome {
    pub sequence: Sequence,
    /// The structure payload verbatim, as returned by the service.
    pub payload: String,
    /// Mean per-residue pLDDT, rounded to 4 decimals.
    pub confidence: f64,
    pub composition: CompositionMetrics,
}

/// One logical user session: a state machine over repeated predict calls.
///
/// The stored outcome is mutated only by a successful prediction; any
/// failure leaves it untouched, so stale results are never mixed with a
/// fresh error. Sessions are meant to be created per logical user and
/// passed by reference through the call chain.
#[derive(Debug, Default)]
pub struct PredictionSession {
    state: SessionState,
    outcome: Option<PredictionOutcome>,
}

impl PredictionSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn outcome(&self) -> Option<&PredictionOutcome> {
        self.outcome.as_ref()
    }

    pub fn into_outcome(self) -> Option<PredictionOutcome> {
        self.outcome
    }

    /// Runs one full prediction: validate, submit, parse the returned
    /// payload in memory, extract the mean confidence, and compute
    /// composition metrics for the submitted sequence.
    ///
    /// Cancellation-safe: dropping the returned future while the request
    /// is in flight abandons the HTTP call and leaves the stored outcome
    /// untouched.
    pub async fn predict<P: StructurePredictor>(
        &mut self,
        raw_input: &str,
        client: &P,
        reporter: &ProgressReporter<'_>,
    ) -> Result<&PredictionOutcome, EngineError> {
        let result = self.run_prediction(raw_input, client, reporter).await;

        match result {
            Ok(outcome) => {
                self.state = SessionState::Ready;
                Ok(self.outcome.insert(outcome))
            }
            Err(e) => {
                self.state = if self.outcome.is_some() {
                    SessionState::Ready
                } else {
                    SessionState::Idle
                };
                Err(e)
            }
        }
    }

    async fn run_prediction<P: StructurePredictor>(
        &mut self,
        raw_input: &str,
        client: &P,
        reporter: &ProgressReporter<'_>,
    ) -> Result<PredictionOutcome, EngineError> {
        reporter.report(Progress::PhaseStart {
            name: "Validating sequence",
        });
        let sequence = Sequence::parse(raw_input)?;
        reporter.report(Progress::PhaseFinish);

        self.state = SessionState::Predicting;
        reporter.report(Progress::PhaseStart {
            name: "Predicting structure",
        });
        info!(
            "Submitting {} residue(s) for structure prediction",
            sequence.len()
        );
        let payload = client.predict(&sequence).await?;
        reporter.report(Progress::PhaseFinish);

        reporter.report(Progress::PhaseStart {
            name: "Extracting confidence",
        });
        let structure = pdb::parse_str(&payload)?;
        let score = confidence::mean_plddt(&structure)?;
        debug!(
            "Mean pLDDT {:.4} over {} residue(s)",
            score,
            structure.residue_count()
        );
        reporter.report(Progress::PhaseFinish);

        let metrics = composition::analyze(&sequence);

        Ok(PredictionOutcome {
            sequence,
            payload,
            confidence: score,
            composition: metrics,
        })
    }
}
