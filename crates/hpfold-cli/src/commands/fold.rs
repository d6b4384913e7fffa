use crate::cli::FoldArgs;
use crate::config;
use crate::error::Result;
use crate::render;
use crate::utils::progress::CliProgressHandler;
use hpfold::core::models::monomer::HpSequence;
use hpfold::core::models::moves::format_moves;
use hpfold::engine::progress::ProgressReporter;
use hpfold::workflows;
use hpfold::workflows::fold::BatchResult;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: FoldArgs) -> Result<()> {
    let app = config::build_config(&args)?;
    info!(
        "Merged configuration: {} residues, {} trials, {} iterations per trial.",
        app.sequence.len(),
        app.batch.trials,
        app.batch.search.max_iterations
    );

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Folding {} ({} residues, {} trials)...",
        app.sequence,
        app.sequence.len(),
        app.batch.trials
    );
    info!("Invoking the batch folding workflow...");

    let result = workflows::fold::run_batch(&app.sequence, &app.batch, &reporter)?;

    for (trial, stats) in result.trials.iter().enumerate() {
        println!(
            "Trial {:>3}: energy {:>3}, stopped at iteration {:>4}, {:.4}s",
            trial,
            stats.energy,
            stats.iterations,
            stats.elapsed.as_secs_f64()
        );
    }

    println!();
    println!("Best energy: {}", result.best_energy);
    println!("Folds reaching it: {}", result.best_folds.len());
    for (index, fold) in result.best_folds.iter().enumerate() {
        println!("  {}: {}", index + 1, format_moves(&fold.moves));
    }
    println!("Average energy: {:.2}", result.mean_energy());
    println!("Average iterations: {:.1}", result.mean_iterations());
    println!(
        "Average runtime: {:.4}s",
        result.mean_runtime().as_secs_f64()
    );

    if let Some(path) = &args.csv {
        write_stats_csv(path, &result)?;
        println!("Trial statistics written to {}", path.display());
    }
    if let Some(path) = &args.svg {
        write_best_svgs(path, &app.sequence, &result)?;
    }

    Ok(())
}

fn write_stats_csv(path: &Path, result: &BatchResult) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["trial", "energy", "iterations", "runtime-s"])?;
    for (trial, stats) in result.trials.iter().enumerate() {
        writer.write_record(&[
            trial.to_string(),
            stats.energy.to_string(),
            stats.iterations.to_string(),
            format!("{:.6}", stats.elapsed.as_secs_f64()),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

fn write_best_svgs(template: &Path, sequence: &HpSequence, result: &BatchResult) -> Result<()> {
    for (index, fold) in result.best_folds.iter().enumerate() {
        let path = numbered_output_path(template, index + 1, result.best_folds.len());
        std::fs::write(&path, render::svg_lattice(sequence, &fold.walk))?;
        if index == 0 {
            println!(
                "✓ Best fold (energy {}) written to: {}",
                fold.energy,
                path.display()
            );
        } else {
            println!(
                "  Fold {} (energy {}) written to: {}",
                index + 1,
                fold.energy,
                path.display()
            );
        }
    }
    Ok(())
}

fn numbered_output_path(template: &Path, index: usize, total: usize) -> PathBuf {
    if total <= 1 {
        return template.to_path_buf();
    }
    let stem = template
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("fold");
    let extension = template
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("svg");
    template.with_file_name(format!("{stem}_{index}.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hpfold::core::energy::contact_energy;
    use hpfold::core::models::moves::parse_moves;
    use hpfold::core::walk::build_walk;
    use hpfold::engine::state::Fold;
    use hpfold::workflows::fold::TrialStats;
    use std::time::Duration;
    use tempfile::tempdir;

    fn square_result() -> (HpSequence, BatchResult) {
        let sequence: HpSequence = "HHPH".parse().unwrap();
        let moves = parse_moves("FLL").unwrap();
        let walk = build_walk(&moves).unwrap();
        let energy = contact_energy(&sequence, &walk);
        let fold = Fold {
            moves,
            walk,
            energy,
        };
        let result = BatchResult {
            best_energy: energy,
            best_folds: vec![fold.clone(), fold],
            trials: vec![
                TrialStats {
                    energy,
                    iterations: 120,
                    elapsed: Duration::from_millis(3),
                },
                TrialStats {
                    energy: 0,
                    iterations: 99,
                    elapsed: Duration::from_millis(2),
                },
            ],
        };
        (sequence, result)
    }

    #[test]
    fn csv_export_writes_one_row_per_trial() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stats.csv");
        let (_, result) = square_result();

        write_stats_csv(&path, &result).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "trial,energy,iterations,runtime-s");
        assert!(lines[1].starts_with("0,-1,120,"));
        assert!(lines[2].starts_with("1,0,99,"));
    }

    #[test]
    fn svg_export_numbers_tied_folds() {
        let dir = tempdir().unwrap();
        let template = dir.path().join("best.svg");
        let (sequence, result) = square_result();

        write_best_svgs(&template, &sequence, &result).unwrap();

        assert!(dir.path().join("best_1.svg").exists());
        assert!(dir.path().join("best_2.svg").exists());
        assert!(!template.exists());
    }

    #[test]
    fn single_fold_keeps_the_requested_path() {
        assert_eq!(
            numbered_output_path(Path::new("out/fold.svg"), 1, 1),
            PathBuf::from("out/fold.svg")
        );
        assert_eq!(
            numbered_output_path(Path::new("out/fold.svg"), 2, 3),
            PathBuf::from("out/fold_2.svg")
        );
    }
}
