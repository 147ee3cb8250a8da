/// Limits for a [`CollatzSequences`](crate::CollatzSequences) session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Maximum number of states held by the transition cache.
    ///
    /// Only the cache is bounded. Resolved sequences are stored in full and
    /// grow with the width of the range regardless of this limit.
    pub max_states: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_states: 1 << 24,
        }
    }
}

impl Config {
    /// Validates that the cache can hold at least the `1 → 4 → 2 → 1` cycle.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_states` is below three.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.max_states < 3 {
            return Err("max_states must be at least 3");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(Config::default().validate(), Ok(()));
    }

    #[test]
    fn too_small_cache_is_rejected() {
        let config = Config { max_states: 2 };
        assert_eq!(config.validate(), Err("max_states must be at least 3"));
    }
}
