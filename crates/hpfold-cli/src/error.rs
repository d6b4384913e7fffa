use hpfold::core::models::monomer::SequenceParseError;
use hpfold::core::models::moves::MoveParseError;
use hpfold::engine::error::EngineError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Invalid sequence: {0}")]
    Sequence(#[from] SequenceParseError),

    #[error("Invalid move string: {0}")]
    Moves(#[from] MoveParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    Argument(String),

    #[error("Failed to write statistics: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
