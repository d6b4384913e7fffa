mod defaults;
mod file;

pub use file::FileConfig;

use crate::cli::FoldArgs;
use crate::error::{CliError, Result};
use defaults::DefaultsConfig;
use hpfold::core::models::monomer::HpSequence;
use hpfold::engine::config::{BatchConfig, SearchConfigBuilder};

/// Fully resolved inputs of a `fold` invocation.
pub struct AppConfig {
    pub sequence: HpSequence,
    pub batch: BatchConfig,
}

/// Merges CLI arguments over the config file over built-in defaults.
pub fn build_config(args: &FoldArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = match &args.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };
    let search_file = file_config.search.unwrap_or_default();
    let batch_file = file_config.batch.unwrap_or_default();

    let sequence_str = args
        .sequence
        .as_deref()
        .or(file_config.sequence.as_deref())
        .ok_or_else(|| {
            CliError::Argument(
                "A sequence is required; pass --sequence or set `sequence` in the config file"
                    .to_string(),
            )
        })?;
    let sequence: HpSequence = sequence_str.parse()?;

    let search = SearchConfigBuilder::new()
        .max_iterations(
            args.max_iterations
                .or(search_file.max_iterations)
                .unwrap_or(defaults.max_iterations),
        )
        .stall_patience(
            args.stall_patience
                .or(search_file.stall_patience)
                .unwrap_or(defaults.stall_patience),
        )
        .max_sample_attempts(
            args.max_sample_attempts
                .or(search_file.max_sample_attempts)
                .unwrap_or(defaults.max_sample_attempts),
        )
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let batch = BatchConfig {
        trials: args.trials.or(batch_file.trials).unwrap_or(defaults.trials),
        seed: args.seed.or(batch_file.seed),
        search,
    };

    Ok(AppConfig { sequence, batch })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn base_fold_args() -> FoldArgs {
        FoldArgs {
            sequence: None,
            config: None,
            trials: None,
            max_iterations: None,
            stall_patience: None,
            max_sample_attempts: None,
            seed: None,
            csv: None,
            svg: None,
        }
    }

    fn write_config(dir: &tempfile::TempDir, toml: &str) -> PathBuf {
        let path = dir.path().join("hpfold.toml");
        fs::write(&path, toml).unwrap();
        path
    }

    #[test]
    fn sequence_from_cli_with_defaults_for_the_rest() {
        let mut args = base_fold_args();
        args.sequence = Some("HPHP".to_string());

        let app = build_config(&args).expect("build ok");
        assert_eq!(app.sequence.to_string(), "HPHP");
        assert_eq!(app.batch.trials, DefaultsConfig::default().trials);
        assert_eq!(
            app.batch.search.max_iterations,
            DefaultsConfig::default().max_iterations
        );
        assert_eq!(
            app.batch.search.stall_patience,
            DefaultsConfig::default().stall_patience
        );
        assert_eq!(app.batch.seed, None);
    }

    #[test]
    fn config_file_supplies_everything() {
        let dir = tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            sequence = "HHHPPPPHPHPHPPHH"

            [search]
            max-iterations = 400
            stall-patience = 50
            max-sample-attempts = 5000

            [batch]
            trials = 12
            seed = 7
            "#,
        );

        let mut args = base_fold_args();
        args.config = Some(path);

        let app = build_config(&args).expect("build ok");
        assert_eq!(app.sequence.len(), 16);
        assert_eq!(app.batch.search.max_iterations, 400);
        assert_eq!(app.batch.search.stall_patience, 50);
        assert_eq!(app.batch.search.max_sample_attempts, 5000);
        assert_eq!(app.batch.trials, 12);
        assert_eq!(app.batch.seed, Some(7));
    }

    #[test]
    fn cli_overrides_file_values() {
        let dir = tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            sequence = "HPHP"

            [search]
            max-iterations = 400

            [batch]
            trials = 12
            "#,
        );

        let mut args = base_fold_args();
        args.config = Some(path);
        args.sequence = Some("HHPH".to_string());
        args.max_iterations = Some(250);
        args.trials = Some(3);
        args.seed = Some(1);

        let app = build_config(&args).expect("build ok");
        assert_eq!(app.sequence.to_string(), "HHPH");
        assert_eq!(app.batch.search.max_iterations, 250);
        assert_eq!(app.batch.trials, 3);
        assert_eq!(app.batch.seed, Some(1));
    }

    #[test]
    fn missing_sequence_everywhere_is_an_argument_error() {
        let args = base_fold_args();
        assert!(matches!(
            build_config(&args),
            Err(CliError::Argument(_))
        ));
    }

    #[test]
    fn malformed_sequence_is_a_parse_error() {
        let mut args = base_fold_args();
        args.sequence = Some("HPXZ".to_string());
        assert!(matches!(build_config(&args), Err(CliError::Sequence(_))));
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"
            sequence = "HPHP"
            unexpected-key = true
            "#,
        );

        let mut args = base_fold_args();
        args.config = Some(path);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }

    #[test]
    fn zero_stall_patience_is_rejected_at_merge_time() {
        let mut args = base_fold_args();
        args.sequence = Some("HPHP".to_string());
        args.stall_patience = Some(0);
        assert!(matches!(build_config(&args), Err(CliError::Config(_))));
    }
}
