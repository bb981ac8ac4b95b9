//! Lazy sequence pipelines
//!
//! Provides filtering, mapping, flattening, deduplication, and terminal
//! reductions over ordered element sequences. Pipelines are pull-based:
//! intermediate adapters compose lazily and nothing is evaluated until a
//! terminal operation consumes the sequence.
//!
//! A [`Sequence`] is single-pass. Re-running a pipeline means rebuilding
//! it from its source; [`Sequence::iterate`] in particular is restartable
//! only by reinvoking it with the same seed.

pub mod aggregate;

pub use aggregate::{Accumulator, Counting, MaxByKey, MinByKey, SumBy, ToSet, ToVec};

use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;
use std::iter;
use tracing::debug;

/// Whether a sequence is known to terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    /// The sequence yields finitely many elements.
    Bounded,
    /// The sequence may yield elements forever.
    Unbounded,
}

/// A lazy, single-pass pipeline of elements.
///
/// Adapters preserve source order. The bound flag tracks finiteness
/// through the pipeline: [`Sequence::iterate`] starts unbounded and only
/// [`Sequence::limit`] converts an unbounded sequence back to bounded.
/// Fully-consuming terminals refuse to run on an unbounded sequence and
/// return [`Error::UnboundedSequence`] instead of looping forever.
pub struct Sequence<T> {
    iter: Box<dyn Iterator<Item = T>>,
    bound: Bound,
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence")
            .field("bound", &self.bound)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Sequence<T> {
    /// Create a bounded sequence from a vector, in order.
    pub fn from_vec(items: Vec<T>) -> Sequence<T> {
        Sequence {
            iter: Box::new(items.into_iter()),
            bound: Bound::Bounded,
        }
    }

    /// Create a bounded sequence from any iterable (slices, ranges, maps).
    pub fn from_iter<I>(source: I) -> Sequence<T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'static,
    {
        Sequence {
            iter: Box::new(source.into_iter()),
            bound: Bound::Bounded,
        }
    }

    /// A sequence holding a single element.
    pub fn of(item: T) -> Sequence<T> {
        Sequence {
            iter: Box::new(iter::once(item)),
            bound: Bound::Bounded,
        }
    }

    /// A bounded sequence with no elements.
    pub fn empty() -> Sequence<T> {
        Sequence {
            iter: Box::new(iter::empty()),
            bound: Bound::Bounded,
        }
    }

    /// Produce the infinite sequence `seed, f(seed), f(f(seed)), ...`
    /// lazily. The result is flagged unbounded; pair it with
    /// [`Sequence::limit`] before applying a fully-consuming terminal.
    pub fn iterate<F>(seed: T, mut next: F) -> Sequence<T>
    where
        F: FnMut(&T) -> T + 'static,
    {
        Sequence {
            iter: Box::new(iter::successors(Some(seed), move |prev| Some(next(prev)))),
            bound: Bound::Unbounded,
        }
    }

    /// The finiteness flag for this sequence.
    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// Retain elements satisfying the predicate, preserving order.
    pub fn filter<P>(self, predicate: P) -> Sequence<T>
    where
        P: FnMut(&T) -> bool + 'static,
    {
        Sequence {
            iter: Box::new(self.iter.filter(predicate)),
            bound: self.bound,
        }
    }

    /// Transform each element, preserving order and count.
    pub fn map<U, F>(self, transform: F) -> Sequence<U>
    where
        U: 'static,
        F: FnMut(T) -> U + 'static,
    {
        Sequence {
            iter: Box::new(self.iter.map(transform)),
            bound: self.bound,
        }
    }

    /// Map each element to a sub-sequence and concatenate the results in
    /// source order. Sub-sequences are assumed finite; the outer bound
    /// flag carries through.
    pub fn flat_map<U, F>(self, mut transform: F) -> Sequence<U>
    where
        U: 'static,
        F: FnMut(T) -> Sequence<U> + 'static,
    {
        Sequence {
            iter: Box::new(self.iter.flat_map(move |item| transform(item).iter)),
            bound: self.bound,
        }
    }

    /// Drop duplicate elements, keeping the first occurrence of each.
    pub fn distinct(self) -> Sequence<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen = HashSet::new();
        Sequence {
            iter: Box::new(self.iter.filter(move |item| seen.insert(item.clone()))),
            bound: self.bound,
        }
    }

    /// Truncate to at most `n` elements. The result is always bounded,
    /// which makes this the gateway from [`Sequence::iterate`] to the
    /// fully-consuming terminals.
    pub fn limit(self, n: usize) -> Sequence<T> {
        Sequence {
            iter: Box::new(self.iter.take(n)),
            bound: Bound::Bounded,
        }
    }

    /// Drop the first `n` elements.
    pub fn skip(self, n: usize) -> Sequence<T> {
        Sequence {
            iter: Box::new(self.iter.skip(n)),
            bound: self.bound,
        }
    }

    /// Materialize the sequence in order.
    pub fn collect(self) -> Result<Vec<T>> {
        self.require_bounded("collect")?;
        let items: Vec<T> = self.iter.collect();
        debug!("collected {} items", items.len());
        Ok(items)
    }

    /// Feed every element into the given accumulator and return its
    /// aggregate.
    pub fn collect_with<A>(self, mut accumulator: A) -> Result<A::Output>
    where
        A: Accumulator<T>,
    {
        self.require_bounded("collect_with")?;
        for item in self.iter {
            accumulator.push(item);
        }
        Ok(accumulator.finish())
    }

    /// Count the elements.
    pub fn count(self) -> Result<usize> {
        self.require_bounded("count")?;
        Ok(self.iter.count())
    }

    /// The minimum element under the comparator. Empty sequences yield
    /// [`Error::EmptySequence`].
    pub fn min_by<F>(self, compare: F) -> Result<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.require_bounded("min_by")?;
        self.iter
            .min_by(compare)
            .ok_or_else(|| Error::EmptySequence("min_by on an empty sequence".to_string()))
    }

    /// The maximum element under the comparator. Empty sequences yield
    /// [`Error::EmptySequence`].
    pub fn max_by<F>(self, compare: F) -> Result<T>
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        self.require_bounded("max_by")?;
        self.iter
            .max_by(compare)
            .ok_or_else(|| Error::EmptySequence("max_by on an empty sequence".to_string()))
    }

    /// Left-to-right fold of adjacent elements. An empty sequence reduces
    /// to `None`, not an error.
    pub fn reduce<F>(self, op: F) -> Result<Option<T>>
    where
        F: FnMut(T, T) -> T,
    {
        self.require_bounded("reduce")?;
        Ok(self.iter.reduce(op))
    }

    /// Partition elements by key, feeding each group its own accumulator
    /// built by `make_accumulator`. Iteration order over the returned
    /// groups is unspecified.
    pub fn group_by<K, A, KF, AF>(
        self,
        mut key_fn: KF,
        make_accumulator: AF,
    ) -> Result<HashMap<K, A::Output>>
    where
        K: Eq + Hash,
        A: Accumulator<T>,
        KF: FnMut(&T) -> K,
        AF: Fn() -> A,
    {
        self.require_bounded("group_by")?;
        let mut groups: HashMap<K, A> = HashMap::new();
        for item in self.iter {
            groups
                .entry(key_fn(&item))
                .or_insert_with(&make_accumulator)
                .push(item);
        }
        debug!("grouped into {} buckets", groups.len());
        Ok(groups
            .into_iter()
            .map(|(key, accumulator)| (key, accumulator.finish()))
            .collect())
    }

    /// Sum a numeric projection over all elements. Empty input sums to
    /// the numeric zero.
    pub fn sum_by<N, F>(self, projection: F) -> Result<N>
    where
        N: iter::Sum,
        F: FnMut(T) -> N,
    {
        self.require_bounded("sum_by")?;
        Ok(self.iter.map(projection).sum())
    }

    /// Arithmetic mean of a numeric projection. Empty sequences yield
    /// [`Error::EmptySequence`].
    pub fn average_by<F>(self, mut projection: F) -> Result<f64>
    where
        F: FnMut(T) -> f64,
    {
        self.require_bounded("average_by")?;
        let mut total = 0.0;
        let mut count = 0u64;
        for item in self.iter {
            total += projection(item);
            count += 1;
        }
        if count == 0 {
            return Err(Error::EmptySequence(
                "average_by on an empty sequence".to_string(),
            ));
        }
        Ok(total / count as f64)
    }

    /// Concatenate string projections with `separator` between elements
    /// and no trailing delimiter.
    pub fn join_with(self, separator: &str) -> Result<String>
    where
        T: AsRef<str>,
    {
        self.require_bounded("join_with")?;
        let mut joined = String::new();
        for (index, item) in self.iter.enumerate() {
            if index > 0 {
                joined.push_str(separator);
            }
            joined.push_str(item.as_ref());
        }
        Ok(joined)
    }

    /// The first element satisfying the predicate. Short-circuits, so it
    /// is permitted on unbounded sequences; if no element of an infinite
    /// sequence ever matches, this never returns.
    pub fn find_first<P>(mut self, predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.iter.find(predicate)
    }

    /// Consume the sequence, applying `f` to every element in order.
    pub fn for_each<F>(self, f: F) -> Result<()>
    where
        F: FnMut(T),
    {
        self.require_bounded("for_each")?;
        self.iter.for_each(f);
        Ok(())
    }

    fn require_bounded(&self, operation: &str) -> Result<()> {
        if self.bound == Bound::Unbounded {
            return Err(Error::UnboundedSequence(format!(
                "{operation} requires a bounded sequence; apply limit() first"
            )));
        }
        Ok(())
    }
}
