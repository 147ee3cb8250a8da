//! Cobweb diagrams.
//!
//! A cobweb traces a trajectory of a one-dimensional map as a polyline that
//! alternates between the map's curve and the diagonal `y = x`:
//!
//! ```text
//! (x0, 0) → (x0, x1) → (x1, x1) → (x1, x2) → (x2, x2) → …
//! ```
//!
//! Each vertical segment lands on the curve and each horizontal segment
//! carries the new value back to the diagonal.

use ndarray::Array2;
use orbits_core::Map;

/// Returns the `(length, 2)` cobweb points of `map` starting from `x0`.
///
/// Point 0 is `(x0, 0)`. Points are then filled in vertical/horizontal pairs
/// while a full pair still fits, so an even `length` leaves the last point at
/// the origin. The result always holds exactly `length` points.
///
/// # Example
///
/// ```
/// use orbits_chaos::cobweb::cobweb;
///
/// let doubling = |x: &f64| 2.0 * x;
/// let points = cobweb(&doubling, 1.0, 5);
///
/// assert_eq!(points.row(0).to_vec(), vec![1.0, 0.0]);
/// assert_eq!(points.row(1).to_vec(), vec![1.0, 2.0]);
/// assert_eq!(points.row(2).to_vec(), vec![2.0, 2.0]);
/// assert_eq!(points.row(4).to_vec(), vec![4.0, 4.0]);
/// ```
pub fn cobweb<M>(map: &M, x0: f64, length: usize) -> Array2<f64>
where
    M: Map<f64> + ?Sized,
{
    let mut points = Array2::zeros((length, 2));
    if length == 0 {
        return points;
    }

    points[[0, 0]] = x0;

    let mut n = 1;
    while n + 1 < length {
        let x = points[[n - 1, 0]];
        let y = map.apply(&x);

        points[[n, 0]] = x;
        points[[n, 1]] = y;
        points[[n + 1, 0]] = y;
        points[[n + 1, 1]] = y;

        n += 2;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    use crate::LogisticRule;

    fn doubling(x: &f64) -> f64 {
        2.0 * x
    }

    #[test]
    fn doubling_odd_length() {
        let points = cobweb(&doubling, 1.0, 5);
        let expected = array![[1.0, 0.0], [1.0, 2.0], [2.0, 2.0], [2.0, 4.0], [4.0, 4.0]];
        assert_eq!(points, expected);
    }

    #[test]
    fn doubling_short() {
        let points = cobweb(&doubling, 0.5, 3);
        assert_eq!(points, array![[0.5, 0.0], [0.5, 1.0], [1.0, 1.0]]);
    }

    #[test]
    fn fixed_point_at_zero() {
        let points = cobweb(&doubling, 0.0, 5);
        assert_eq!(points, Array2::<f64>::zeros((5, 2)));
    }

    #[test]
    fn even_length_leaves_last_point_at_origin() {
        let rule = LogisticRule::new(0.2).unwrap();
        let points = cobweb(&rule, 0.927_486_003_713_418_3, 4);

        assert_relative_eq!(points[[0, 0]], 0.927_486, epsilon = 1e-6);
        assert_relative_eq!(points[[0, 1]], 0.0);
        assert_relative_eq!(points[[1, 0]], 0.927_486, epsilon = 1e-6);
        assert_relative_eq!(points[[1, 1]], 0.013_451_14, epsilon = 1e-7);
        assert_relative_eq!(points[[2, 0]], 0.013_451_14, epsilon = 1e-7);
        assert_relative_eq!(points[[2, 1]], 0.013_451_14, epsilon = 1e-7);
        assert_eq!(points.row(3).to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn chaotic_rate() {
        let rule = LogisticRule::new(3.6).unwrap();
        let points = cobweb(&rule, 0.770_320_266_791_203_2, 4);

        assert_relative_eq!(points[[1, 0]], 0.770_320_27, epsilon = 1e-7);
        assert_relative_eq!(points[[1, 1]], 0.636_937_03, epsilon = 1e-7);
        assert_relative_eq!(points[[2, 0]], 0.636_937_03, epsilon = 1e-7);
    }

    #[test]
    fn point_count_equals_length() {
        let rule = LogisticRule::new(3.9).unwrap();
        for length in 0..12 {
            assert_eq!(cobweb(&rule, 0.3, length).nrows(), length);
        }
    }

    #[test]
    fn single_point() {
        let points = cobweb(&doubling, 0.7, 1);
        assert_eq!(points, array![[0.7, 0.0]]);
    }
}
