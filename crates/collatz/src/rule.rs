use crate::{Error, InputError};

/// Applies the Collatz rule once: `3n + 1` if `n` is odd, `n / 2` otherwise.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if `3n + 1` does not fit in a `u64`.
///
/// # Example
///
/// ```
/// use orbits_collatz::next;
///
/// assert_eq!(next(7).unwrap(), 22);
/// assert_eq!(next(22).unwrap(), 11);
/// ```
pub fn next(n: u64) -> Result<u64, Error> {
    if n % 2 == 0 {
        Ok(n / 2)
    } else {
        n.checked_mul(3)
            .and_then(|m| m.checked_add(1))
            .ok_or(Error::Overflow { n })
    }
}

/// Returns the full sequence from `start` down to `1`, without any caching.
///
/// # Errors
///
/// - [`Error::InvalidInput`] if `start` is zero.
/// - [`Error::Overflow`] if an intermediate value overflows.
pub fn sequence(start: u64) -> Result<Vec<u64>, Error> {
    if start == 0 {
        return Err(InputError::NonPositiveStart { start }.into());
    }

    let mut n = start;
    let mut values = vec![n];
    while n != 1 {
        n = next(n)?;
        values.push(n);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_branches_on_parity() {
        assert_eq!(next(1), Ok(4));
        assert_eq!(next(4), Ok(2));
        assert_eq!(next(2), Ok(1));
        assert_eq!(next(27), Ok(82));
    }

    #[test]
    fn overflow_is_reported() {
        assert_eq!(next(u64::MAX), Err(Error::Overflow { n: u64::MAX }));
        assert_eq!(next(u64::MAX - 1), Ok(u64::MAX / 2));
    }

    #[test]
    fn sequence_of_nine() {
        let expected = vec![
            9, 28, 14, 7, 22, 11, 34, 17, 52, 26, 13, 40, 20, 10, 5, 16, 8, 4, 2, 1,
        ];
        assert_eq!(sequence(9), Ok(expected));
    }

    #[test]
    fn sequence_of_one_is_trivial() {
        assert_eq!(sequence(1), Ok(vec![1]));
    }

    #[test]
    fn zero_has_no_sequence() {
        assert_eq!(
            sequence(0),
            Err(Error::InvalidInput(InputError::NonPositiveStart { start: 0 }))
        );
    }

    #[test]
    fn sequences_reach_one() {
        for start in 1..2_000 {
            let values = sequence(start).expect("small starts converge");
            assert_eq!(values.first(), Some(&start));
            assert_eq!(values.last(), Some(&1));
        }
    }
}
