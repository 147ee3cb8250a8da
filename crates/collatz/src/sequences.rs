use std::{cell::OnceCell, collections::BTreeMap, ops::Range};

use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::{Config, Error, InputError, TransitionCache};

/// Collatz sequences for a half-open range of starting values.
///
/// Starting values are resolved in ascending order. Each walk follows the
/// [`TransitionCache`] and stops as soon as it reaches a starting value whose
/// sequence is already resolved, then appends that sequence instead of
/// walking the shared suffix again. The cache outlives range changes.
///
/// # Example
///
/// ```
/// use orbits_collatz::CollatzSequences;
///
/// let collatz = CollatzSequences::new(1, 10).unwrap();
///
/// assert_eq!(collatz.sequence(6), Some(&[6, 3, 10, 5, 16, 8, 4, 2, 1][..]));
/// assert!(collatz.graph().contains_edge(7, 22));
/// ```
#[derive(Debug, Clone)]
pub struct CollatzSequences {
    range: Range<u64>,
    cache: TransitionCache,
    sequences: BTreeMap<u64, Vec<u64>>,
    graph: OnceCell<DiGraphMap<u64, ()>>,
}

impl CollatzSequences {
    /// Resolves the sequences for every starting value in `start..end`.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if `start` is zero or `end <= start`.
    /// - [`Error::CacheLimit`] if the walks visit more states than the
    ///   default limit allows.
    /// - [`Error::Overflow`] if an intermediate value overflows.
    pub fn new(start: u64, end: u64) -> Result<Self, Error> {
        Self::with_config(start, end, &Config::default())
    }

    /// Like [`new`](Self::new), with explicit limits.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new), plus [`Error::InvalidConfig`] if the config is
    /// invalid.
    pub fn with_config(start: u64, end: u64, config: &Config) -> Result<Self, Error> {
        config
            .validate()
            .map_err(|reason| Error::InvalidConfig { reason })?;

        let mut collatz = Self {
            range: start..start,
            cache: TransitionCache::with_limit(config.max_states),
            sequences: BTreeMap::new(),
            graph: OnceCell::new(),
        };
        collatz.set_range(start, end)?;
        Ok(collatz)
    }

    /// Replaces the range and resolves its sequences again.
    ///
    /// The transition cache is kept, so states visited by earlier ranges are
    /// not recomputed. On error the previous sequences are kept, although the
    /// cache may have grown and the graph is rebuilt to match it.
    ///
    /// # Errors
    ///
    /// As [`new`](Self::new).
    pub fn set_range(&mut self, start: u64, end: u64) -> Result<(), Error> {
        validate_range(start, end)?;

        let cached_before = self.cache.len();
        let mut sequences = BTreeMap::new();
        let resolved = (start..end).try_for_each(|initial| {
            let sequence = resolve(initial, &mut self.cache, &sequences)?;
            sequences.insert(initial, sequence);
            Ok::<_, Error>(())
        });

        // States visited before a failure stay cached, so the graph is stale
        // on both paths.
        if self.cache.len() != cached_before {
            self.graph = OnceCell::new();
        }
        resolved?;

        self.range = start..end;
        self.sequences = sequences;

        debug!(
            target: "orbits::collatz",
            start,
            end,
            cached = self.cache.len(),
            new_states = self.cache.len() - cached_before,
            "resolved collatz sequences"
        );
        Ok(())
    }

    /// Returns the current range of starting values.
    #[must_use]
    pub fn range(&self) -> Range<u64> {
        self.range.clone()
    }

    /// Returns every resolved sequence, keyed by starting value.
    #[must_use]
    pub fn sequences(&self) -> &BTreeMap<u64, Vec<u64>> {
        &self.sequences
    }

    /// Returns the sequence for `start`, if it lies in the current range.
    #[must_use]
    pub fn sequence(&self, start: u64) -> Option<&[u64]> {
        self.sequences.get(&start).map(Vec::as_slice)
    }

    /// Returns the shared transition cache.
    #[must_use]
    pub fn cache(&self) -> &TransitionCache {
        &self.cache
    }

    /// Returns every cached transition as a directed graph.
    ///
    /// The graph is built on first use and rebuilt only after the cache grows.
    pub fn graph(&self) -> &DiGraphMap<u64, ()> {
        self.graph.get_or_init(|| {
            let mut graph = DiGraphMap::with_capacity(self.cache.len(), self.cache.len());
            for (n, successor) in self.cache.edges() {
                graph.add_edge(n, successor, ());
            }
            graph
        })
    }
}

fn validate_range(start: u64, end: u64) -> Result<(), InputError> {
    if start == 0 {
        return Err(InputError::NonPositiveStart { start });
    }
    if end <= start {
        return Err(InputError::EmptyRange { start, end });
    }
    Ok(())
}

/// Walks from `initial` until it reaches `1` or a resolved starting value.
fn resolve(
    initial: u64,
    cache: &mut TransitionCache,
    resolved: &BTreeMap<u64, Vec<u64>>,
) -> Result<Vec<u64>, Error> {
    let mut n = initial;
    let mut sequence = vec![n];

    while n != 1 {
        n = cache.successor(n)?;
        if let Some(suffix) = resolved.get(&n) {
            sequence.extend_from_slice(suffix);
            return Ok(sequence);
        }
        sequence.push(n);
    }

    Ok(sequence)
}
