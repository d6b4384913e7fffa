//! Stateless foundation: data models, lattice geometry, walk construction,
//! and the contact-counting energy model. Everything here is a pure function
//! of its inputs; no randomness and no search state.

pub mod energy;
pub mod models;
pub mod utils;
pub mod walk;
