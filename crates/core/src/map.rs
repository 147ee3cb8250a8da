/// A pure discrete-time step function.
///
/// Implementing this trait lets [`Trajectory::generate`] iterate the map from
/// any number of initial states. Implementations must be deterministic: the
/// same state always maps to the same successor.
///
/// Closures of the form `Fn(&T) -> T` implement `Map<T>` automatically.
///
/// [`Trajectory::generate`]: crate::Trajectory::generate
pub trait Map<T> {
    /// Returns the successor of `state`.
    fn apply(&self, state: &T) -> T;
}

/// Blanket implementation for step closures.
impl<T, F> Map<T> for F
where
    F: Fn(&T) -> T,
{
    fn apply(&self, state: &T) -> T {
        self(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Doubling;

    impl Map<i64> for Doubling {
        fn apply(&self, state: &i64) -> i64 {
            state * 2
        }
    }

    #[test]
    fn struct_map() {
        assert_eq!(Doubling.apply(&21), 42);
    }

    #[test]
    fn closure_map() {
        let shift = |x: &f64| x + 0.5;
        assert!((shift.apply(&1.0) - 1.5).abs() < f64::EPSILON);
    }
}
