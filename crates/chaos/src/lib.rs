//! Logistic-map chaos.
//!
//! - [`logistic`] — the logistic recurrence and the [`LogisticMap`] generator,
//!   which keeps its trajectories, curve and cobweb in sync with its growth
//!   rate and initial values
//! - [`cobweb`] — the cobweb view of a single trajectory
//!
//! # Features
//!
//! - `serde` — derives `Serialize` and `Deserialize` for [`Config`].

pub mod cobweb;
pub mod logistic;

mod config;
mod error;

pub use config::Config;
pub use error::{Error, InputError};
pub use logistic::{LogisticMap, LogisticRule, logistic_map};
