use hpfold::engine::config::{
    DEFAULT_MAX_ITERATIONS, DEFAULT_MAX_SAMPLE_ATTEMPTS, DEFAULT_STALL_PATIENCE, DEFAULT_TRIALS,
};

pub struct DefaultsConfig {
    pub trials: usize,
    pub max_iterations: usize,
    pub stall_patience: usize,
    pub max_sample_attempts: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            stall_patience: DEFAULT_STALL_PATIENCE,
            max_sample_attempts: DEFAULT_MAX_SAMPLE_ATTEMPTS,
        }
    }
}
