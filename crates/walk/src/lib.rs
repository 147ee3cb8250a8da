//! Simple symmetric random walks on the integers.
//!
//! A walk of length `N` starts at `0` and moves one unit up or down with equal
//! probability at every later time step. Randomness always comes from a
//! caller-supplied [`rand::Rng`], so seeded generators give reproducible walks.

mod error;
mod simple;

pub use error::Error;
pub use simple::SimpleRandomWalk;
