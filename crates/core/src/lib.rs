//! Core traits and types for iterating discrete maps.
//!
//! This crate defines the shared abstractions the generator crates build on:
//!
//! - [`Map`] — a pure step function from one state to the next
//! - [`Trajectory`] — a `(length, count)` array of states iterated in lockstep
//! - [`constraint`] — domain checks for parameters and initial conditions

pub mod constraint;

mod map;
mod trajectory;

pub use map::Map;
pub use trajectory::{Trajectory, TrajectoryError};
