use foldcast::core::sequence::SequenceError;
use foldcast::core::structure::confidence::ConfidenceError;
use foldcast::core::structure::pdb::PdbError;
use foldcast::engine::error::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Invalid input sequence: {0}")]
    Sequence(#[from] SequenceError),

    #[error("Failed to parse structure file: {0}")]
    Structure(#[from] PdbError),

    #[error("Confidence extraction failed: {0}")]
    Confidence(#[from] ConfidenceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
