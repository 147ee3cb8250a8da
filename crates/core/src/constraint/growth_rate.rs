use crate::constraint::{Constrained, Constraint, ConstraintError, check_closed};

/// Marker type for logistic-map growth rates: `0 ≤ r ≤ 4`.
///
/// Within this range `r·x·(1 − x)` maps the unit interval into itself.
///
/// ```
/// use orbits_core::constraint::GrowthRate;
///
/// assert!(GrowthRate::new(3.57).is_ok());
/// assert!(GrowthRate::new(4.01).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowthRate;

impl GrowthRate {
    /// Largest growth rate that keeps the map closed on `[0, 1]`.
    pub const MAX: f64 = 4.0;

    /// Constructs `Constrained<f64, GrowthRate>` if `0 ≤ value ≤ 4`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if negative.
    /// - [`ConstraintError::AboveMaximum`] if greater than four.
    /// - [`ConstraintError::NotANumber`] if the value is NaN.
    pub fn new(value: f64) -> Result<Constrained<f64, GrowthRate>, ConstraintError> {
        Constrained::<f64, GrowthRate>::new(value)
    }
}

impl Constraint<f64> for GrowthRate {
    fn check(value: &f64) -> Result<(), ConstraintError> {
        check_closed(*value, 0.0, Self::MAX)
    }
}
