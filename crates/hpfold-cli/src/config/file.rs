use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub sequence: Option<String>,
    pub search: Option<FileSearchConfig>,
    pub batch: Option<FileBatchConfig>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileSearchConfig {
    #[serde(rename = "max-iterations")]
    pub max_iterations: Option<usize>,
    #[serde(rename = "stall-patience")]
    pub stall_patience: Option<usize>,
    #[serde(rename = "max-sample-attempts")]
    pub max_sample_attempts: Option<usize>,
}

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct FileBatchConfig {
    pub trials: Option<usize>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration file from {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}
