//! The logistic map `x ↦ r·x·(1 − x)`.
//!
//! [`LogisticMap`] holds a growth rate and a set of initial values and keeps
//! three derived views up to date:
//!
//! - the trajectories, a `(length, count)` [`Trajectory`]
//! - the logistic curve, sampled on an even grid over `[0, 1]`
//! - the [cobweb](crate::cobweb) of the first trajectory
//!
//! Every mutation recomputes the affected views in full. A failed mutation
//! leaves the generator untouched.
//!
//! # Example
//!
//! ```
//! use orbits_chaos::LogisticMap;
//!
//! let mut map = LogisticMap::new(2.5, vec![0.5, 0.1], 4).unwrap();
//! assert_eq!(map.trajectory().shape(), (4, 2));
//!
//! map.set_parameter(3.9).unwrap();
//! assert!(map.set_parameter(4.2).is_err());
//! assert_eq!(map.r(), 3.9);
//! ```


use std::fmt;

use ndarray::{Array1, Array2};
use orbits_core::{
    Map, Trajectory,
    constraint::{Constrained, GrowthRate, UnitInterval},
};
use rand::Rng;
use tracing::debug;

use crate::{Config, Error, InputError, cobweb::cobweb};

/// Returns `r·x·(1 − x)`.
///
/// For `r` in `[0, 4]` and `x` in `[0, 1]` the result lies in `[0, r/4]`.
#[must_use]
pub fn logistic_map(r: f64, x: f64) -> f64 {
    r * x * (1.0 - x)
}

/// The logistic recurrence for a fixed, validated growth rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticRule {
    r: Constrained<f64, GrowthRate>,
}

impl LogisticRule {
    /// Creates the rule for growth rate `r`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `r` is outside `[0, 4]`.
    pub fn new(r: f64) -> Result<Self, Error> {
        let r = GrowthRate::new(r)
            .map_err(|source| Error::InvalidParameter { value: r, source })?;
        Ok(Self { r })
    }

    /// Returns the growth rate.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.r.get()
    }
}

impl Map<f64> for LogisticRule {
    fn apply(&self, x: &f64) -> f64 {
        logistic_map(self.r(), *x)
    }
}

/// A set of logistic-map trajectories with its curve and cobweb.
#[derive(Debug, Clone)]
pub struct LogisticMap {
    rule: LogisticRule,
    initial: Vec<f64>,
    length: usize,
    curve_samples: usize,
    trajectory: Trajectory,
    curve: Array2<f64>,
    cobweb: Array2<f64>,
}

impl LogisticMap {
    /// Creates trajectories of `length` steps from the given initial values.
    ///
    /// The curve uses the default number of samples from [`Config`].
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidParameter`] if `r` is outside `[0, 4]`.
    /// - [`Error::InvalidInput`] if `initial` is empty or holds a value
    ///   outside `[0, 1]`.
    /// - [`Error::InvalidConfig`] if `length` is zero.
    pub fn new(r: f64, initial: Vec<f64>, length: usize) -> Result<Self, Error> {
        let config = Config {
            length,
            count: initial.len(),
            ..Config::default()
        };
        Self::build(r, initial, &config)
    }

    /// Creates `config.count` trajectories with initial values drawn
    /// uniformly from `[0, 1]`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfig`] if the config is invalid.
    /// - [`Error::InvalidParameter`] if `r` is outside `[0, 4]`.
    pub fn random<R: Rng + ?Sized>(r: f64, config: &Config, rng: &mut R) -> Result<Self, Error> {
        config
            .validate()
            .map_err(|reason| Error::InvalidConfig { reason })?;

        let initial = sample_unit_interval(rng, config.count);
        Self::build(r, initial, config)
    }

    fn build(r: f64, initial: Vec<f64>, config: &Config) -> Result<Self, Error> {
        let rule = LogisticRule::new(r)?;
        validate_initial(&initial, None)?;
        config
            .validate()
            .map_err(|reason| Error::InvalidConfig { reason })?;

        let trajectory = Trajectory::generate(&rule, &initial, config.length)?;
        let curve = sample_curve(&rule, config.curve_samples);
        let cobweb = cobweb(&rule, initial[0], config.length);

        debug!(
            target: "orbits::chaos",
            r,
            count = initial.len(),
            length = config.length,
            "built logistic map"
        );

        Ok(Self {
            rule,
            initial,
            length: config.length,
            curve_samples: config.curve_samples,
            trajectory,
            curve,
            cobweb,
        })
    }

    /// Returns the growth rate.
    #[must_use]
    pub fn r(&self) -> f64 {
        self.rule.r()
    }

    /// Returns the recurrence for the current growth rate.
    #[must_use]
    pub fn rule(&self) -> &LogisticRule {
        &self.rule
    }

    /// Returns the initial values, one per trajectory.
    #[must_use]
    pub fn initial_values(&self) -> &[f64] {
        &self.initial
    }

    /// Returns the number of time steps per trajectory.
    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    /// Returns the number of trajectories.
    #[must_use]
    pub fn count(&self) -> usize {
        self.initial.len()
    }

    /// Returns the `(length, count)` trajectories.
    #[must_use]
    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Returns the `(curve_samples, 2)` points `(x, r·x·(1 − x))`.
    #[must_use]
    pub fn curve(&self) -> &Array2<f64> {
        &self.curve
    }

    /// Returns the `(length, 2)` cobweb of the first trajectory.
    #[must_use]
    pub fn cobweb(&self) -> &Array2<f64> {
        &self.cobweb
    }

    /// Replaces the growth rate and recomputes every derived view.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `r` is outside `[0, 4]`.
    pub fn set_parameter(&mut self, r: f64) -> Result<(), Error> {
        let rule = LogisticRule::new(r)?;
        let trajectory = Trajectory::generate(&rule, &self.initial, self.length)?;

        self.curve = sample_curve(&rule, self.curve_samples);
        self.cobweb = cobweb(&rule, self.initial[0], self.length);
        self.trajectory = trajectory;
        self.rule = rule;

        debug!(target: "orbits::chaos", r, "recomputed logistic map for new growth rate");
        Ok(())
    }

    /// Replaces the initial values and recomputes the trajectories and cobweb.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `values` does not hold exactly
    /// [`count`](Self::count) values or any value is outside `[0, 1]`.
    pub fn set_initial_values(&mut self, values: Vec<f64>) -> Result<(), Error> {
        validate_initial(&values, Some(self.count()))?;
        self.replace_initial(values)
    }

    /// Draws new initial values uniformly from `[0, 1]` and recomputes.
    ///
    /// Keeps the current number of trajectories.
    ///
    /// # Errors
    ///
    /// Fails only under the same conditions as [`set_initial_values`](Self::set_initial_values),
    /// which uniform samples from `[0, 1]` never meet.
    pub fn resample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), Error> {
        let values = sample_unit_interval(rng, self.count());
        self.replace_initial(values)
    }

    fn replace_initial(&mut self, values: Vec<f64>) -> Result<(), Error> {
        let trajectory = Trajectory::generate(&self.rule, &values, self.length)?;

        self.cobweb = cobweb(&self.rule, values[0], self.length);
        self.trajectory = trajectory;
        self.initial = values;

        debug!(
            target: "orbits::chaos",
            r = self.r(),
            count = self.count(),
            "recomputed logistic map for new initial values"
        );
        Ok(())
    }
}

impl fmt::Display for LogisticMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LogisticMap(r={:.5}, x0={:.5})", self.r(), self.initial[0])
    }
}

/// Checks that `values` is non-empty, has the expected size and lies in `[0, 1]`.
fn validate_initial(values: &[f64], expected: Option<usize>) -> Result<(), InputError> {
    if values.is_empty() {
        return Err(InputError::Empty);
    }

    if let Some(expected) = expected
        && values.len() != expected
    {
        return Err(InputError::CountMismatch {
            expected,
            actual: values.len(),
        });
    }

    for (index, &value) in values.iter().enumerate() {
        UnitInterval::new(value).map_err(|source| InputError::OutOfDomain {
            index,
            value,
            source,
        })?;
    }

    Ok(())
}

fn sample_unit_interval<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<f64> {
    (0..count).map(|_| rng.gen_range(0.0..=1.0)).collect()
}

fn sample_curve(rule: &LogisticRule, samples: usize) -> Array2<f64> {
    let x = Array1::linspace(0.0, 1.0, samples);
    Array2::from_shape_fn((samples, 2), |(i, j)| {
        if j == 0 { x[i] } else { rule.apply(&x[i]) }
    })
}
