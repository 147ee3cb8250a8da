//! Domain constraints checked once at construction.
//!
//! Recurrence parameters and initial conditions each live in a closed
//! interval. Wrapping a value in [`Constrained<T, C>`] records that it has
//! already been checked against the marker `C`, so generators can store it
//! and never look at its bounds again.
//!
//! # Provided Constraints
//!
//! - [`UnitInterval`]: `0 ≤ x ≤ 1`, the state space of the logistic map
//! - [`GrowthRate`]: `0 ≤ r ≤ 4`, the growth rates that keep the logistic map
//!   inside the unit interval
//!
//! # Extending
//!
//! Other domains are expressed by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod growth_rate;
mod unit_interval;

use std::{cmp::Ordering, marker::PhantomData};

use thiserror::Error;

pub use growth_rate::GrowthRate;
pub use unit_interval::UnitInterval;

/// A trait for enforcing a value domain at construction time.
pub trait Constraint<T> {
    /// Checks that the given value lies in this domain.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value is outside the domain.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value known to satisfy the constraint `C`.
///
/// # Example
///
/// ```
/// use orbits_core::constraint::{Constrained, GrowthRate};
///
/// let r = Constrained::<_, GrowthRate>::new(3.2).unwrap();
/// assert_eq!(r.into_inner(), 3.2);
///
/// assert!(Constrained::<f64, GrowthRate>::new(4.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C: Constraint<T>> Constrained<T, C> {
    /// Returns a copy of the inner value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Checks `value` against the closed interval `[min, max]`.
fn check_closed(value: f64, min: f64, max: f64) -> Result<(), ConstraintError> {
    match (value.partial_cmp(&min), value.partial_cmp(&max)) {
        (None, _) | (_, None) => Err(ConstraintError::NotANumber),
        (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
        (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
        _ => Ok(()),
    }
}
