//! Collatz sequences.
//!
//! The Collatz rule maps `n` to `3n + 1` when `n` is odd and to `n / 2` when
//! it is even. Every starting value tried so far eventually reaches `1`.
//!
//! - [`next`] and [`sequence`] apply the rule directly
//! - [`TransitionCache`] memoizes `n → next(n)` and never invalidates
//! - [`CollatzSequences`] resolves a whole range of starting values, splicing
//!   each walk onto an already-resolved sequence as soon as they meet, and
//!   exposes the cached transitions as a graph
//!
//! # Features
//!
//! - `serde` — derives `Serialize` and `Deserialize` for [`Config`].

mod cache;
mod config;
mod error;
mod rule;
mod sequences;

pub use cache::TransitionCache;
pub use config::Config;
pub use error::{Error, InputError};
pub use rule::{next, sequence};
pub use sequences::CollatzSequences;
