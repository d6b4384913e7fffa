//! # Workflows Module
//!
//! The public, user-facing layer. It ties the `core` and `engine` layers
//! together into complete procedures: a single folding run, and a batch
//! driver that executes independent trials and aggregates their results.

pub mod fold;
