use thiserror::Error;

pub const DEFAULT_MAX_ITERATIONS: usize = 1000;
pub const DEFAULT_STALL_PATIENCE: usize = 100;
pub const DEFAULT_MAX_SAMPLE_ATTEMPTS: usize = 1_000_000;
pub const DEFAULT_TRIALS: usize = 30;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Parameter `{0}` must be greater than zero")]
    ZeroParameter(&'static str),
}

/// Parameters of one hill-climbing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Upper bound on search-loop iterations. A zero budget returns the
    /// initial random fold unchanged.
    pub max_iterations: usize,
    /// Consecutive non-improving proposals after which the run stops early.
    pub stall_patience: usize,
    /// Retry budget for drawing the initial self-avoiding walk.
    pub max_sample_attempts: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stall_patience: DEFAULT_STALL_PATIENCE,
            max_sample_attempts: DEFAULT_MAX_SAMPLE_ATTEMPTS,
        }
    }
}

#[derive(Default)]
pub struct SearchConfigBuilder {
    max_iterations: Option<usize>,
    stall_patience: Option<usize>,
    max_sample_attempts: Option<usize>,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = Some(iterations);
        self
    }
    pub fn stall_patience(mut self, patience: usize) -> Self {
        self.stall_patience = Some(patience);
        self
    }
    pub fn max_sample_attempts(mut self, attempts: usize) -> Self {
        self.max_sample_attempts = Some(attempts);
        self
    }

    pub fn build(self) -> Result<SearchConfig, ConfigError> {
        let defaults = SearchConfig::default();
        let config = SearchConfig {
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            stall_patience: self.stall_patience.unwrap_or(defaults.stall_patience),
            max_sample_attempts: self
                .max_sample_attempts
                .unwrap_or(defaults.max_sample_attempts),
        };
        if config.stall_patience == 0 {
            return Err(ConfigError::ZeroParameter("stall_patience"));
        }
        if config.max_sample_attempts == 0 {
            return Err(ConfigError::ZeroParameter("max_sample_attempts"));
        }
        Ok(config)
    }
}

/// Parameters of a batch of independent trials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub trials: usize,
    /// Base seed for reproducible trials; unseeded batches draw from OS
    /// entropy.
    pub seed: Option<u64>,
    pub search: SearchConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            search: SearchConfig::default(),
        }
    }
}
