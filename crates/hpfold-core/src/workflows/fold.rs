use crate::core::models::monomer::HpSequence;
use crate::engine::config::{BatchConfig, ConfigError, SearchConfig};
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::search;
use crate::engine::state::{Fold, SearchOutcome};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Duration;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Statistics of one independent trial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrialStats {
    pub energy: i32,
    /// Index of the search iteration at which the trial terminated.
    pub iterations: usize,
    pub elapsed: Duration,
}

/// Aggregate of a batch of independent trials: every trial's statistics, the
/// best (most negative) energy found, and every fold that reached it.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub best_energy: i32,
    pub best_folds: Vec<Fold>,
    pub trials: Vec<TrialStats>,
}

impl BatchResult {
    pub fn mean_energy(&self) -> f64 {
        let sum: i64 = self.trials.iter().map(|t| t.energy as i64).sum();
        sum as f64 / self.trials.len() as f64
    }

    pub fn mean_iterations(&self) -> f64 {
        let sum: u64 = self.trials.iter().map(|t| t.iterations as u64).sum();
        sum as f64 / self.trials.len() as f64
    }

    pub fn mean_runtime(&self) -> Duration {
        let total: Duration = self.trials.iter().map(|t| t.elapsed).sum();
        total / self.trials.len() as u32
    }
}

/// Accumulator for the best folds seen across trials, owned by the driver.
///
/// An energy of zero is the worst any fold can score, so the tracker starts
/// there and zero-energy folds still collect into the tie set.
#[derive(Debug, Default)]
struct BestTracker {
    best_energy: i32,
    folds: Vec<Fold>,
}

impl BestTracker {
    fn observe(&mut self, fold: Fold) {
        if fold.energy < self.best_energy {
            self.best_energy = fold.energy;
            self.folds = vec![fold];
        } else if fold.energy == self.best_energy {
            self.folds.push(fold);
        }
    }
}

/// Runs one independent folding search.
///
/// A seeded run is fully deterministic; unseeded runs draw from OS entropy.
#[instrument(skip_all, name = "fold_workflow", fields(chain_length = sequence.len()))]
pub fn run(
    sequence: &HpSequence,
    config: &SearchConfig,
    seed: Option<u64>,
) -> Result<SearchOutcome, EngineError> {
    let mut rng = trial_rng(seed, 0);
    search::run(sequence, config, &mut rng)
}

/// Runs `config.trials` independent searches and aggregates their results.
///
/// Trials share no state; with the `parallel` feature they execute on the
/// rayon thread pool. Each trial derives its own RNG stream from the base
/// seed, so seeded batches are reproducible in any execution order.
#[instrument(
    skip_all,
    name = "batch_workflow",
    fields(chain_length = sequence.len(), trials = config.trials)
)]
pub fn run_batch(
    sequence: &HpSequence,
    config: &BatchConfig,
    reporter: &ProgressReporter,
) -> Result<BatchResult, EngineError> {
    if config.trials == 0 {
        return Err(ConfigError::ZeroParameter("trials").into());
    }

    reporter.report(Progress::BatchStart {
        trials: config.trials as u64,
    });
    info!("Running {} independent folding trials.", config.trials);

    let run_trial = |trial: usize| -> Result<SearchOutcome, EngineError> {
        let mut rng = trial_rng(config.seed, trial as u64);
        let outcome = search::run(sequence, &config.search, &mut rng)?;
        reporter.report(Progress::TrialFinish {
            energy: outcome.fold.energy,
        });
        Ok(outcome)
    };

    #[cfg(feature = "parallel")]
    let outcomes = (0..config.trials)
        .into_par_iter()
        .map(run_trial)
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(not(feature = "parallel"))]
    let outcomes = (0..config.trials)
        .map(run_trial)
        .collect::<Result<Vec<_>, _>>()?;

    let mut tracker = BestTracker::default();
    let mut trials = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        trials.push(TrialStats {
            energy: outcome.fold.energy,
            iterations: outcome.iterations,
            elapsed: outcome.elapsed,
        });
        tracker.observe(outcome.fold);
    }

    reporter.report(Progress::BatchFinish);
    reporter.report(Progress::Message(format!(
        "best energy {} ({} fold(s))",
        tracker.best_energy,
        tracker.folds.len()
    )));
    info!(
        best_energy = tracker.best_energy,
        "Batch complete; {} fold(s) reached the best energy.",
        tracker.folds.len()
    );

    Ok(BatchResult {
        best_energy: tracker.best_energy,
        best_folds: tracker.folds,
        trials,
    })
}

fn trial_rng(seed: Option<u64>, stream: u64) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(stream)),
        None => StdRng::from_entropy(),
    }
}
