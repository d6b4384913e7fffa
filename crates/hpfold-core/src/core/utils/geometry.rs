use crate::core::models::lattice::{Direction, LatticePoint};
use crate::core::models::moves::Turn;
use nalgebra::Vector2;

pub const NEIGHBOR_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// Rotates a step vector by the given relative turn: `Left` is +90°, `Right`
/// is −90°, `Forward` leaves it unchanged.
pub fn rotate(direction: Direction, turn: Turn) -> Direction {
    match turn {
        Turn::Left => Vector2::new(-direction.y, direction.x),
        Turn::Forward => direction,
        Turn::Right => Vector2::new(direction.y, -direction.x),
    }
}

pub fn neighbors(point: LatticePoint) -> [LatticePoint; 4] {
    NEIGHBOR_OFFSETS.map(|(dx, dy)| LatticePoint::new(point.x + dx, point.y + dy))
}
