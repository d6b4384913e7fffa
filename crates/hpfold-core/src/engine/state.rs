use crate::core::energy::contact_energy;
use crate::core::models::lattice::Walk;
use crate::core::models::monomer::HpSequence;
use crate::core::models::moves::Turn;
use std::time::Duration;

/// A move sequence together with the walk it realizes and that fold's energy.
///
/// A `Fold` is only ever constructed from a walk that was validated against
/// the moves that produced it, so the three fields stay mutually consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    pub moves: Vec<Turn>,
    pub walk: Walk,
    pub energy: i32,
}

impl Fold {
    pub(crate) fn from_walk(sequence: &HpSequence, moves: Vec<Turn>, walk: Walk) -> Self {
        let energy = contact_energy(sequence, &walk);
        Self { moves, walk, energy }
    }
}

/// What one search run hands back to its caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub fold: Fold,
    /// Index of the search iteration at which the run terminated.
    pub iterations: usize,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::moves::parse_moves;
    use crate::core::walk::build_walk;

    #[test]
    fn from_walk_attaches_the_recomputed_energy() {
        let sequence: HpSequence = "HHPH".parse().unwrap();
        let moves = parse_moves("FLL").unwrap();
        let walk = build_walk(&moves).unwrap();
        let fold = Fold::from_walk(&sequence, moves.clone(), walk.clone());

        assert_eq!(fold.moves, moves);
        assert_eq!(fold.walk, walk);
        assert_eq!(fold.energy, -1);
    }
}
