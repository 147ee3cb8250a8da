use std::collections::HashMap;

use crate::{Config, Error, next};

/// Memoized Collatz transitions `n → next(n)`.
///
/// The rule is pure, so an entry never changes once inserted and the cache
/// never needs invalidating. It starts out holding the terminal cycle
/// `1 → 4 → 2 → 1` and grows as walks visit new states, up to a fixed limit.
#[derive(Debug, Clone)]
pub struct TransitionCache {
    next: HashMap<u64, u64>,
    limit: usize,
}

impl TransitionCache {
    /// Creates a cache with the default state limit.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limit(Config::default().max_states)
    }

    /// Creates a cache that holds at most `limit` states.
    ///
    /// The terminal cycle is always present, even when `limit` is below three.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            next: HashMap::from([(1, 4), (4, 2), (2, 1)]),
            limit,
        }
    }

    /// Returns the cached successor of `n`, if any.
    #[must_use]
    pub fn get(&self, n: u64) -> Option<u64> {
        self.next.get(&n).copied()
    }

    /// Returns `true` if the successor of `n` is cached.
    #[must_use]
    pub fn contains(&self, n: u64) -> bool {
        self.next.contains_key(&n)
    }

    /// Returns the successor of `n`, computing and caching it on a miss.
    ///
    /// # Errors
    ///
    /// - [`Error::CacheLimit`] if `n` is not cached and the cache is full.
    /// - [`Error::Overflow`] if the successor does not fit in a `u64`.
    pub fn successor(&mut self, n: u64) -> Result<u64, Error> {
        if let Some(successor) = self.get(n) {
            return Ok(successor);
        }

        if self.next.len() >= self.limit {
            return Err(Error::CacheLimit { limit: self.limit });
        }

        let successor = next(n)?;
        self.next.insert(n, successor);
        Ok(successor)
    }

    /// Returns the number of cached states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.next.len()
    }

    /// Returns `true` if no state is cached.
    ///
    /// Always `false` in practice, since the terminal cycle is seeded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    /// Returns the maximum number of states.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Returns every cached transition as `(n, next(n))`, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.next.iter().map(|(&n, &successor)| (n, successor))
    }
}

impl Default for TransitionCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_with_terminal_cycle() {
        let cache = TransitionCache::new();

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(1), Some(4));
        assert_eq!(cache.get(4), Some(2));
        assert_eq!(cache.get(2), Some(1));
        assert!(!cache.contains(3));
    }

    #[test]
    fn successor_fills_on_miss() {
        let mut cache = TransitionCache::new();

        assert_eq!(cache.successor(3), Ok(10));
        assert!(cache.contains(3));
        assert_eq!(cache.len(), 4);

        // A hit does not grow the cache.
        assert_eq!(cache.successor(3), Ok(10));
        assert_eq!(cache.len(), 4);
    }

    #[test]
    fn full_cache_still_answers_hits() {
        let mut cache = TransitionCache::with_limit(4);

        assert_eq!(cache.successor(3), Ok(10));
        assert_eq!(cache.successor(10), Err(Error::CacheLimit { limit: 4 }));
        assert_eq!(cache.successor(3), Ok(10));
        assert_eq!(cache.successor(1), Ok(4));
    }

    #[test]
    fn overflow_is_not_cached() {
        let mut cache = TransitionCache::new();

        assert_eq!(
            cache.successor(u64::MAX),
            Err(Error::Overflow { n: u64::MAX })
        );
        assert!(!cache.contains(u64::MAX));
    }

    #[test]
    fn edges_match_entries() {
        let mut cache = TransitionCache::new();
        cache.successor(6).unwrap();

        let mut edges: Vec<_> = cache.edges().collect();
        edges.sort_unstable();

        assert_eq!(edges, vec![(1, 4), (2, 1), (4, 2), (6, 3)]);
    }
}
