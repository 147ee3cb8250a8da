use std::fmt;

use ndarray::Array1;
use rand::Rng;
use tracing::debug;

use crate::Error;

/// A simple symmetric random walk.
///
/// - `times` is `0, 1, …, length − 1`
/// - `steps[0]` is `0` and every later step is `-1` or `+1`
/// - `positions` is the running sum of `steps`, so `positions[0] == 0`
///
/// # Example
///
/// ```
/// use orbits_walk::SimpleRandomWalk;
/// use rand::{SeedableRng, rngs::StdRng};
///
/// let walk = SimpleRandomWalk::new(5, &mut StdRng::seed_from_u64(1)).unwrap();
///
/// assert_eq!(walk.times().to_vec(), vec![0, 1, 2, 3, 4]);
/// assert_eq!(walk.positions()[0], 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRandomWalk {
    times: Array1<usize>,
    steps: Array1<i64>,
    positions: Array1<i64>,
}

impl SimpleRandomWalk {
    /// Draws a walk of `length` time steps.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroLength`] if `length` is zero.
    pub fn new<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Result<Self, Error> {
        if length == 0 {
            return Err(Error::ZeroLength);
        }

        let steps = draw_steps(length, rng);
        let positions = accumulate(&steps);

        debug!(target: "orbits::walk", length, "drew random walk");

        Ok(Self {
            times: Array1::from_iter(0..length),
            steps,
            positions,
        })
    }

    /// Redraws every step, keeping the length.
    pub fn resample<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.steps = draw_steps(self.length(), rng);
        self.positions = accumulate(&self.steps);

        debug!(target: "orbits::walk", length = self.length(), "redrew random walk");
    }

    /// Returns the number of time steps.
    #[must_use]
    pub fn length(&self) -> usize {
        self.times.len()
    }

    /// Returns the time indices `0..length`.
    #[must_use]
    pub fn times(&self) -> &Array1<usize> {
        &self.times
    }

    /// Returns the increments, with a zero first entry.
    #[must_use]
    pub fn steps(&self) -> &Array1<i64> {
        &self.steps
    }

    /// Returns the position at every time step.
    #[must_use]
    pub fn positions(&self) -> &Array1<i64> {
        &self.positions
    }
}

impl fmt::Display for SimpleRandomWalk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SimpleRandomWalk (length={})", self.length())
    }
}

fn draw_steps<R: Rng + ?Sized>(length: usize, rng: &mut R) -> Array1<i64> {
    Array1::from_shape_fn(length, |t| {
        if t == 0 {
            0
        } else if rng.gen_bool(0.5) {
            1
        } else {
            -1
        }
    })
}

fn accumulate(steps: &Array1<i64>) -> Array1<i64> {
    let mut position = 0;
    steps.mapv(|step| {
        position += step;
        position
    })
}
