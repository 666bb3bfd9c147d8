use crate::core::sequence::SequenceError;
use crate::core::structure::confidence::ConfidenceError;
use crate::core::structure::pdb::PdbError;
use crate::engine::client::ClientError;
use crate::engine::config::ConfigError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input sequence: {0}")]
    Sequence(#[from] SequenceError),

    #[error("Structure prediction request failed: {0}")]
    Prediction(#[from] ClientError),

    #[error("Failed to parse the predicted structure payload: {0}")]
    Payload(#[from] PdbError),

    #[error("Confidence extraction failed: {0}")]
    Confidence(#[from] ConfidenceError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
