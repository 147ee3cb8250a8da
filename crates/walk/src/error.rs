use thiserror::Error;

/// Errors that can occur when building a random walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("walk length must be at least 1")]
    ZeroLength,
}
