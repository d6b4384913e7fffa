use crate::core::models::lattice::Walk;
use crate::core::models::moves::Turn;
use crate::core::walk::build_walk;
use rand::Rng;
use thiserror::Error;
use tracing::{instrument, trace};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SamplingError {
    #[error("No self-avoiding walk of {length} moves found within {attempts} attempts")]
    Exhausted { length: usize, attempts: usize },
}

/// Draws uniformly random move sequences until one realizes a self-avoiding
/// walk, up to `max_attempts` tries.
///
/// Valid walks become vanishingly rare as chains grow, so the retry loop is
/// bounded and exhaustion is an explicit outcome rather than a hang.
#[instrument(level = "trace", skip(rng))]
pub fn sample_valid_walk(
    length: usize,
    max_attempts: usize,
    rng: &mut impl Rng,
) -> Result<(Vec<Turn>, Walk), SamplingError> {
    for attempt in 1..=max_attempts {
        let moves: Vec<Turn> = (0..length)
            .map(|_| Turn::ALPHABET[rng.gen_range(0..Turn::ALPHABET.len())])
            .collect();
        if let Some(walk) = build_walk(&moves) {
            trace!(attempt, "sampled a valid walk");
            return Ok((moves, walk));
        }
    }
    Err(SamplingError::Exhausted {
        length,
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn sampled_walks_are_valid_and_sized() {
        let mut rng = StdRng::seed_from_u64(3);
        let (moves, walk) = sample_valid_walk(15, 10_000, &mut rng).unwrap();
        assert_eq!(moves.len(), 15);
        assert_eq!(walk.len(), 16);
        let distinct: HashSet<_> = walk.iter().copied().collect();
        assert_eq!(distinct.len(), walk.len());
    }

    #[test]
    fn zero_length_sampling_returns_the_origin_walk() {
        let mut rng = StdRng::seed_from_u64(3);
        let (moves, walk) = sample_valid_walk(0, 1, &mut rng).unwrap();
        assert!(moves.is_empty());
        assert_eq!(walk.len(), 1);
    }

    #[test]
    fn exhaustion_is_reported_with_the_attempt_budget() {
        // One attempt at a long chain essentially never self-avoids.
        let mut rng = StdRng::seed_from_u64(0);
        let mut exhausted = false;
        for _ in 0..20 {
            if let Err(SamplingError::Exhausted { length, attempts }) =
                sample_valid_walk(60, 1, &mut rng)
            {
                assert_eq!(length, 60);
                assert_eq!(attempts, 1);
                exhausted = true;
                break;
            }
        }
        assert!(exhausted, "expected at least one exhausted attempt");
    }
}
