use nalgebra::{Point2, Vector2};

/// A site on the 2D square lattice.
pub type LatticePoint = Point2<i32>;

/// A step vector between lattice sites.
pub type Direction = Vector2<i32>;

/// The realized chain: one lattice site per monomer, in sequence order.
pub type Walk = Vec<LatticePoint>;
