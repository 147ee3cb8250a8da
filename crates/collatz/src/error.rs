use thiserror::Error;

/// Errors that can occur while computing Collatz sequences.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("3n + 1 does not fit in u64 for n = {n}")]
    Overflow { n: u64 },

    #[error("transition cache is full ({limit} states)")]
    CacheLimit { limit: usize },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },
}

/// Reasons a starting value or range is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("starting values must be positive, got {start}")]
    NonPositiveStart { start: u64 },

    #[error("end ({end}) must be greater than start ({start})")]
    EmptyRange { start: u64, end: u64 },
}
