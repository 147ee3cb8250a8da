use ndarray::{Array2, ArrayView1, Axis};
use thiserror::Error;

use crate::Map;

/// Errors that can occur when generating a [`Trajectory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrajectoryError {
    #[error("trajectory length must be at least 1")]
    ZeroLength,
}

/// A set of trajectories iterated in lockstep from their initial states.
///
/// Values are indexed by `(time step, trajectory index)`, so the shape is
/// always `(length, count)` and row 0 holds the initial states.
///
/// # Example
///
/// ```
/// use orbits_core::Trajectory;
///
/// let halving = |x: &f64| x / 2.0;
/// let trajectory = Trajectory::generate(&halving, &[1.0, 0.5], 3).unwrap();
///
/// assert_eq!(trajectory.shape(), (3, 2));
/// assert_eq!(trajectory.series(0).to_vec(), vec![1.0, 0.5, 0.25]);
/// assert_eq!(trajectory.step(2).to_vec(), vec![0.25, 0.125]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<T = f64> {
    values: Array2<T>,
}

impl<T: Clone> Trajectory<T> {
    /// Iterates `map` from each initial state for `length` steps in total.
    ///
    /// Each time step applies the map to every trajectory before moving on to
    /// the next step. With `length == 1` the result holds only the initial
    /// states and the map is never called.
    ///
    /// # Errors
    ///
    /// Returns [`TrajectoryError::ZeroLength`] if `length` is zero.
    pub fn generate<M>(map: &M, initial: &[T], length: usize) -> Result<Self, TrajectoryError>
    where
        M: Map<T> + ?Sized,
    {
        if length == 0 {
            return Err(TrajectoryError::ZeroLength);
        }

        let count = initial.len();
        let mut values = Array2::from_shape_fn((length, count), |(_, i)| initial[i].clone());

        for t in 1..length {
            for i in 0..count {
                values[[t, i]] = map.apply(&values[[t - 1, i]]);
            }
        }

        Ok(Self { values })
    }
}

impl<T> Trajectory<T> {
    /// Returns `(length, count)`.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    /// Returns the number of time steps, including the initial one.
    #[must_use]
    pub fn length(&self) -> usize {
        self.values.nrows()
    }

    /// Returns the number of independent trajectories.
    #[must_use]
    pub fn count(&self) -> usize {
        self.values.ncols()
    }

    /// Returns every trajectory's value at time step `t`.
    ///
    /// # Panics
    ///
    /// Panics if `t >= self.length()`.
    #[must_use]
    pub fn step(&self, t: usize) -> ArrayView1<'_, T> {
        self.values.index_axis(Axis(0), t)
    }

    /// Returns the full history of trajectory `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.count()`.
    #[must_use]
    pub fn series(&self, index: usize) -> ArrayView1<'_, T> {
        self.values.index_axis(Axis(1), index)
    }

    /// Returns the value of trajectory `index` at time step `t`, if present.
    #[must_use]
    pub fn get(&self, t: usize, index: usize) -> Option<&T> {
        self.values.get([t, index])
    }

    /// Returns the underlying `(length, count)` array.
    #[must_use]
    pub fn as_array(&self) -> &Array2<T> {
        &self.values
    }

    /// Consumes the trajectory and returns the underlying array.
    pub fn into_inner(self) -> Array2<T> {
        self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn shape_matches_length_and_count() {
        let identity = |x: &f64| *x;
        let trajectory = Trajectory::generate(&identity, &[0.1, 0.2, 0.3], 7).unwrap();

        assert_eq!(trajectory.shape(), (7, 3));
        assert_eq!(trajectory.length(), 7);
        assert_eq!(trajectory.count(), 3);
    }

    #[test]
    fn single_step_holds_only_initial_values() {
        let never = |_: &f64| -> f64 { panic!("map must not be applied") };
        let trajectory = Trajectory::generate(&never, &[0.4, 0.6], 1).unwrap();

        assert_eq!(trajectory.shape(), (1, 2));
        assert_eq!(trajectory.step(0).to_vec(), vec![0.4, 0.6]);
    }

    #[test]
    fn zero_length_is_an_error() {
        let identity = |x: &f64| *x;
        assert_eq!(
            Trajectory::generate(&identity, &[0.5], 0),
            Err(TrajectoryError::ZeroLength)
        );
    }

    #[test]
    fn no_initial_values_gives_empty_columns() {
        let identity = |x: &f64| *x;
        let trajectory = Trajectory::generate(&identity, &[], 4).unwrap();
        assert_eq!(trajectory.shape(), (4, 0));
    }

    #[test]
    fn rows_follow_the_recurrence() {
        let affine = |x: &f64| 3.0 * x + 1.0;
        let trajectory = Trajectory::generate(&affine, &[0.0, 1.0], 4).unwrap();

        assert_eq!(trajectory.series(0).to_vec(), vec![0.0, 1.0, 4.0, 13.0]);
        assert_eq!(trajectory.series(1).to_vec(), vec![1.0, 4.0, 13.0, 40.0]);
        assert_relative_eq!(*trajectory.get(3, 1).unwrap(), 40.0);
        assert!(trajectory.get(4, 0).is_none());
    }

    #[test]
    fn integer_states() {
        let step = |n: &i64| if n % 2 == 0 { n / 2 } else { 3 * n + 1 };
        let trajectory = Trajectory::generate(&step, &[6_i64], 9).unwrap();

        assert_eq!(
            trajectory.into_inner().column(0).to_vec(),
            vec![6, 3, 10, 5, 16, 8, 4, 2, 1]
        );
    }
}
