/// Sizes used when building a [`LogisticMap`](crate::LogisticMap).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Number of time steps per trajectory, including the initial value.
    pub length: usize,
    /// Number of independent trajectories when sampling initial values.
    pub count: usize,
    /// Number of evenly spaced points on the logistic curve.
    pub curve_samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            length: 60,
            count: 100,
            curve_samples: 100,
        }
    }
}

impl Config {
    /// Validates that every size is at least one.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first size that is zero.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.length == 0 {
            return Err("length must be at least 1");
        }
        if self.count == 0 {
            return Err("count must be at least 1");
        }
        if self.curve_samples == 0 {
            return Err("curve_samples must be at least 1");
        }
        Ok(())
    }
}
