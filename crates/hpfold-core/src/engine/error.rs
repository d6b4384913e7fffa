use thiserror::Error;

use super::config::ConfigError;
use super::utils::sampling::SamplingError;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },

    #[error("Initial fold sampling failed: {source}")]
    Sampling {
        #[from]
        source: SamplingError,
    },
}
