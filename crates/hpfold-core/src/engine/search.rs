use crate::core::models::monomer::HpSequence;
use crate::core::walk::build_walk;
use crate::engine::config::SearchConfig;
use crate::engine::error::EngineError;
use crate::engine::state::{Fold, SearchOutcome};
use crate::engine::utils::sampling;
use rand::Rng;
use std::time::Instant;
use tracing::{debug, instrument, trace};

/// Greedy hill climbing over single-move mutations.
///
/// Starting from a random valid fold, each iteration replaces one move with
/// one of the two other turn symbols and rebuilds the walk. Proposals that
/// fold the chain onto itself are discarded outright; valid proposals are
/// accepted only when strictly more stable. The run stops once
/// `stall_patience` consecutive valid proposals failed to improve, or when
/// the iteration budget is spent.
#[instrument(skip_all, name = "hill_climb", fields(chain_length = sequence.len()))]
pub(crate) fn run(
    sequence: &HpSequence,
    config: &SearchConfig,
    rng: &mut impl Rng,
) -> Result<SearchOutcome, EngineError> {
    let started = Instant::now();

    let (moves, walk) =
        sampling::sample_valid_walk(sequence.len() - 1, config.max_sample_attempts, rng)?;
    let mut current = Fold::from_walk(sequence, moves, walk);
    debug!(initial_energy = current.energy, "starting from a random fold");

    if current.moves.is_empty() {
        // A single-monomer chain has nothing to mutate.
        return Ok(SearchOutcome {
            fold: current,
            iterations: 0,
            elapsed: started.elapsed(),
        });
    }

    let mut stall = 0usize;
    let mut iteration = 0usize;
    for index in 0..config.max_iterations {
        iteration = index;

        let site = rng.gen_range(0..current.moves.len());
        let replacement = current.moves[site].others()[rng.gen_range(0..2)];
        let mut candidate_moves = current.moves.clone();
        candidate_moves[site] = replacement;

        let Some(candidate_walk) = build_walk(&candidate_moves) else {
            // Self-intersections are expected; they neither advance the
            // stall counter nor touch the current fold.
            continue;
        };
        let candidate = Fold::from_walk(sequence, candidate_moves, candidate_walk);

        if candidate.energy < current.energy {
            trace!(
                iteration = index,
                energy = candidate.energy,
                "accepted improving fold"
            );
            current = candidate;
            stall = 0;
        } else {
            // Equal energy counts toward the stall as well.
            stall += 1;
        }

        if stall == config.stall_patience {
            debug!(iteration = index, stall, "stall patience reached");
            break;
        }
    }

    Ok(SearchOutcome {
        fold: current,
        iterations: iteration,
        elapsed: started.elapsed(),
    })
}
