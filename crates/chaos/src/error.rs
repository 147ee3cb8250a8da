use orbits_core::{TrajectoryError, constraint::ConstraintError};
use thiserror::Error;

/// Errors that can occur when building or mutating a [`LogisticMap`](crate::LogisticMap).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("invalid growth rate {value}: {source}")]
    InvalidParameter {
        value: f64,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid initial values: {0}")]
    InvalidInput(#[from] InputError),

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}

/// Reasons a set of initial values is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("at least one initial value is required")]
    Empty,

    #[error("expected {expected} values, got {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("value {value} at index {index} is outside [0, 1]: {source}")]
    OutOfDomain {
        index: usize,
        value: f64,
        #[source]
        source: ConstraintError,
    },
}

impl From<TrajectoryError> for Error {
    fn from(err: TrajectoryError) -> Self {
        match err {
            TrajectoryError::ZeroLength => Self::InvalidConfig {
                reason: "length must be at least 1",
            },
        }
    }
}
