use super::Position;
use log::*;
use std::{cell::OnceCell, ops::Range};

/// Lazily computed facts about the constituents of a composite collection.
///
/// Everything here is a pure function of the constituents, so mutation of
/// any constituent must be followed by `invalidate`.
#[derive(Clone, Debug)]
pub struct Cache<P, const N: usize> {
    counts: OnceCell<[usize; N]>,
    strides: OnceCell<[usize; N]>,
    ranges: RangeTable<N>,
    first: OnceCell<Position<P>>,
    last: OnceCell<Position<P>>,
}

impl<P, const N: usize> Cache<P, N> {
    pub fn new() -> Self {
        Self {
            counts: OnceCell::new(),
            strides: OnceCell::new(),
            ranges: RangeTable::new(),
            first: OnceCell::new(),
            last: OnceCell::new(),
        }
    }

    pub fn invalidate(&mut self) {
        trace!("Invalidating cache of {} constituents", N);
        *self = Self::new();
    }

    /// Counts of constituents.
    pub fn counts(&self, compute: impl FnOnce() -> [usize; N]) -> &[usize; N] {
        self.counts.get_or_init(|| {
            let counts = compute();
            trace!("Cached constituent counts {:?}", counts);
            counts
        })
    }

    /// Mixed radix strides of constituents.
    pub fn strides(&self, compute: impl FnOnce() -> [usize; N]) -> &[usize; N] {
        self.strides.get_or_init(|| {
            let strides = compute();
            trace!("Cached constituent strides {:?}", strides);
            strides
        })
    }

    pub fn ranges(&self) -> &RangeTable<N> {
        &self.ranges
    }

    /// Position of the first element, or end.
    pub fn first(&self, compute: impl FnOnce() -> Position<P>) -> &Position<P> {
        self.first.get_or_init(|| {
            trace!("Caching first position");
            compute()
        })
    }

    /// Position of the last element, or end.
    pub fn last(&self, compute: impl FnOnce() -> Position<P>) -> &Position<P> {
        self.last.get_or_init(|| {
            trace!("Caching final position");
            compute()
        })
    }
}

impl<P, const N: usize> Default for Cache<P, N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Ranges of constituents in linear index space of a concatenation.
///
/// Range of constituent k starts where the range of k-1 ends. Each end is
/// computed on first use from the end before it.
#[derive(Clone, Debug)]
pub struct RangeTable<const N: usize> {
    ends: [OnceCell<usize>; N],
}

impl<const N: usize> RangeTable<N> {
    pub fn new() -> Self {
        Self {
            ends: std::array::from_fn(|_| OnceCell::new()),
        }
    }

    /// Range of constituent k, given counts of constituents.
    pub fn range(&self, k: usize, count_of: &impl Fn(usize) -> usize) -> Range<usize> {
        let start = if k == 0 { 0 } else { self.end(k - 1, count_of) };
        start..self.end(k, count_of)
    }

    /// Linear end of all constituents.
    pub fn total(&self, count_of: &impl Fn(usize) -> usize) -> usize {
        if N == 0 {
            0
        } else {
            self.end(N - 1, count_of)
        }
    }

    fn end(&self, k: usize, count_of: &impl Fn(usize) -> usize) -> usize {
        if let Some(&end) = self.ends[k].get() {
            return end;
        }
        let start = if k == 0 { 0 } else { self.end(k - 1, count_of) };
        let end = start
            .checked_add(count_of(k))
            .unwrap_or_else(|| fail!("Count of concatenation overflows usize"));
        trace!("Cached range {}..{} of constituent {}", start, end, k);
        *self.ends[k].get_or_init(|| end)
    }
}

impl<const N: usize> Default for RangeTable<N> {
    fn default() -> Self {
        Self::new()
    }
}
