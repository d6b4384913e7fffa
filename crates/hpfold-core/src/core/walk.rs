use crate::core::models::lattice::{LatticePoint, Walk};
use crate::core::models::moves::Turn;
use crate::core::utils::geometry::rotate;
use std::collections::HashSet;

/// Builds the absolute lattice walk realized by a sequence of relative turns.
///
/// The chain starts at the origin and is entered from the virtual point
/// (−1, 0), so the first move is interpreted against a left-to-right step.
/// Each turn rotates the incoming step vector and advances one site.
///
/// Returns `None` as soon as a move would revisit an occupied site; a
/// self-intersecting path is an expected outcome, not an error. On success
/// the walk holds exactly `moves.len() + 1` points.
pub fn build_walk(moves: &[Turn]) -> Option<Walk> {
    let origin = LatticePoint::new(0, 0);
    let mut walk = Vec::with_capacity(moves.len() + 1);
    let mut occupied = HashSet::with_capacity(moves.len() + 1);
    walk.push(origin);
    occupied.insert(origin);

    let mut previous = LatticePoint::new(-1, 0);
    let mut current = origin;
    for &turn in moves {
        let next = current + rotate(current - previous, turn);
        if !occupied.insert(next) {
            return None;
        }
        walk.push(next);
        previous = current;
        current = next;
    }

    Some(walk)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::moves::parse_moves;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn point(x: i32, y: i32) -> LatticePoint {
        LatticePoint::new(x, y)
    }

    #[test]
    fn all_forward_moves_walk_a_straight_line() {
        let moves = vec![Turn::Forward; 5];
        let walk = build_walk(&moves).unwrap();
        let expected: Vec<_> = (0..=5).map(|x| point(x, 0)).collect();
        assert_eq!(walk, expected);
    }

    #[test]
    fn empty_move_sequence_yields_just_the_origin() {
        assert_eq!(build_walk(&[]).unwrap(), vec![point(0, 0)]);
    }

    #[test]
    fn first_left_turn_steps_up_from_the_origin() {
        let walk = build_walk(&parse_moves("L").unwrap()).unwrap();
        assert_eq!(walk, vec![point(0, 0), point(0, 1)]);
    }

    #[test]
    fn square_spiral_traces_the_expected_sites() {
        let walk = build_walk(&parse_moves("FLL").unwrap()).unwrap();
        assert_eq!(
            walk,
            vec![point(0, 0), point(1, 0), point(1, 1), point(0, 1)]
        );
    }

    #[test]
    fn closing_the_square_onto_the_origin_is_rejected() {
        assert_eq!(build_walk(&parse_moves("FLLL").unwrap()), None);
    }

    #[test]
    fn mid_chain_collisions_are_caught_too() {
        // The last turn lands back on (1, 0), the second site of the chain.
        assert_eq!(build_walk(&parse_moves("FFLLL").unwrap()), None);
    }

    #[test]
    fn valid_walks_have_one_more_point_than_moves_and_no_repeats() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut accepted = 0;
        for _ in 0..200 {
            let moves: Vec<Turn> = (0..12)
                .map(|_| Turn::ALPHABET[rng.gen_range(0..Turn::ALPHABET.len())])
                .collect();
            if let Some(walk) = build_walk(&moves) {
                accepted += 1;
                assert_eq!(walk.len(), moves.len() + 1);
                let distinct: HashSet<_> = walk.iter().copied().collect();
                assert_eq!(distinct.len(), walk.len());
            }
        }
        assert!(accepted > 0, "expected some self-avoiding samples");
    }
}
