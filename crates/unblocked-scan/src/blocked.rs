// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Normalized sets of blocked ranges.
//!
//! `BlockedRanges<T>` turns an arbitrary list of inclusive `(low, high)`
//! pairs into a canonical form: sorted by `low`, with every overlapping or
//! adjacent pair coalesced. In that form each gap between consecutive
//! ranges is exactly a run of unblocked values, which makes point queries a
//! binary search and the lowest unblocked value a lookup on the first range.
//! Construction validates its input and never touches the caller's slice;
//! sorting happens on an owned buffer that can be reused via `rebuild`.

use crate::{error::RangeError, num::ScanNumeric};
use unblocked_core::math::interval::ClosedInterval;

/// Checks whether the given intervals are sorted by `low` and pairwise
/// separated by at least one unblocked value.
#[inline(always)]
fn are_disjoint_and_sorted<T>(intervals: &[ClosedInterval<T>]) -> bool
where
    T: ScanNumeric,
{
    intervals
        .windows(2)
        .all(|w| w[0].high() < w[1].low() && w[0].disjoint(w[1]))
}

/// Binary search for the number of intervals whose `low` is `<= key`.
///
/// The interval that may contain `key` is the one just before the returned
/// index.
///
/// # Invariants
///
/// - `intervals` must be sorted by `low` in ascending order.
#[inline(always)]
fn upper_bound_low<T>(intervals: &[ClosedInterval<T>], key: T) -> usize
where
    T: ScanNumeric,
{
    debug_assert!(
        are_disjoint_and_sorted(intervals),
        "called `upper_bound_low` with intervals that are not disjoint and sorted"
    );

    let mut lo: usize = 0;
    let mut hi: usize = intervals.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        if intervals[mid].low() <= key {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Merges a list of closed intervals in place, coalescing overlaps and adjacency.
///
/// Sorts by `low`, then performs a linear, in-place compaction. The output is
/// sorted and no two entries touch.
///
/// Complexity:
/// - O(N log N) for sorting + O(N) for compaction.
fn merge_intervals_in_place<T>(intervals: &mut Vec<ClosedInterval<T>>)
where
    T: ScanNumeric,
{
    if intervals.is_empty() {
        return;
    }

    intervals.sort_unstable_by_key(|iv| iv.low());

    let mut write_index = 0;
    for read_index in 1..intervals.len() {
        let current = intervals[write_index];
        let next = intervals[read_index];

        if let Some(merged) = current.union(next) {
            intervals[write_index] = merged;
        } else {
            write_index += 1;
            intervals[write_index] = next;
        }
    }
    intervals.truncate(write_index + 1);

    debug_assert!(
        are_disjoint_and_sorted(intervals),
        "`merge_intervals_in_place` output is not disjoint and sorted"
    );
}

/// Validates a raw `(low, high)` pair taken from position `index` of the input.
#[inline]
pub(crate) fn validate_range<T>(
    index: usize,
    low: T,
    high: T,
) -> Result<ClosedInterval<T>, RangeError<T>>
where
    T: ScanNumeric,
{
    let Some(interval) = ClosedInterval::try_new(low, high) else {
        return Err(RangeError::InvertedRange { index, low, high });
    };
    if low < T::zero() {
        return Err(RangeError::NegativeRange { index, low, high });
    }
    Ok(interval)
}

/// A sorted, coalesced set of blocked ranges over the non-negative integers.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockedRanges<T>
where
    T: ScanNumeric,
{
    ranges: Vec<ClosedInterval<T>>, // sorted by low, pairwise non-touching
}

impl<T> BlockedRanges<T>
where
    T: ScanNumeric,
{
    /// Creates an empty set where nothing is blocked.
    #[inline]
    pub fn new() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Creates an empty set with room for `capacity` raw ranges.
    #[inline]
    pub fn preallocated(capacity: usize) -> Self {
        Self {
            ranges: Vec::with_capacity(capacity),
        }
    }

    /// Validates and normalizes raw `(low, high)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::InvertedRange` for a pair with `low > high` and
    /// `RangeError::NegativeRange` for a pair with `low < 0`, reporting the
    /// first offending position.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_scan::blocked::BlockedRanges;
    /// # use unblocked_core::math::interval::ClosedInterval;
    ///
    /// let blocked = BlockedRanges::from_pairs(&[(3, 9), (0, 0), (8, 8), (1, 2)]).unwrap();
    /// assert_eq!(blocked.as_slice(), &[ClosedInterval::new(0, 9)]);
    /// ```
    pub fn from_pairs(pairs: &[(T, T)]) -> Result<Self, RangeError<T>> {
        let mut blocked = Self::preallocated(pairs.len());
        blocked.rebuild(pairs)?;
        Ok(blocked)
    }

    /// Validates and normalizes already-constructed intervals.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::NegativeRange` if an interval reaches below zero.
    pub fn from_intervals<I>(intervals: I) -> Result<Self, RangeError<T>>
    where
        I: IntoIterator<Item = ClosedInterval<T>>,
    {
        let mut ranges = Vec::new();
        for (index, interval) in intervals.into_iter().enumerate() {
            ranges.push(validate_range(index, interval.low(), interval.high())?);
        }
        merge_intervals_in_place(&mut ranges);
        Ok(Self { ranges })
    }

    /// Replaces the contents with the normalized form of `pairs`, reusing
    /// the existing allocation.
    ///
    /// On error the set is left empty.
    pub fn rebuild(&mut self, pairs: &[(T, T)]) -> Result<(), RangeError<T>> {
        self.ranges.clear();
        self.ranges.reserve(pairs.len());

        for (index, &(low, high)) in pairs.iter().enumerate() {
            match validate_range(index, low, high) {
                Ok(interval) => self.ranges.push(interval),
                Err(e) => {
                    self.ranges.clear();
                    return Err(e);
                }
            }
        }

        let raw_len = self.ranges.len();
        merge_intervals_in_place(&mut self.ranges);
        log::trace!(
            "normalized {} blocked ranges into {} disjoint ranges",
            raw_len,
            self.ranges.len()
        );
        Ok(())
    }

    /// Returns the number of disjoint ranges after normalization.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Returns `true` if nothing is blocked.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Returns the normalized ranges, sorted by `low`.
    #[inline]
    pub fn as_slice(&self) -> &[ClosedInterval<T>] {
        &self.ranges
    }

    /// Iterates over the normalized ranges in ascending order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ClosedInterval<T>> {
        self.ranges.iter()
    }

    /// Returns the normalized range containing `value`, if any.
    #[inline]
    pub fn covering(&self, value: T) -> Option<ClosedInterval<T>> {
        let upper = upper_bound_low(&self.ranges, value);
        if upper == 0 {
            return None;
        }
        let candidate = self.ranges[upper - 1];
        if candidate.contains_point(value) {
            Some(candidate)
        } else {
            None
        }
    }

    /// Returns `true` if `value` lies in some blocked range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_scan::blocked::BlockedRanges;
    ///
    /// let blocked = BlockedRanges::from_pairs(&[(0, 3), (8, 8)]).unwrap();
    /// assert!(blocked.is_blocked(3));
    /// assert!(!blocked.is_blocked(4));
    /// assert!(blocked.is_blocked(8));
    /// ```
    #[inline]
    pub fn is_blocked(&self, value: T) -> bool {
        self.covering(value).is_some()
    }

    /// Finds the smallest unblocked value `>= start`.
    ///
    /// Because ranges never touch after normalization, the value right after
    /// the covering range is always free. Returns `None` only when that value
    /// would exceed `T::max_value()`.
    pub fn first_unblocked_from(&self, start: T) -> Option<T> {
        match self.covering(start) {
            Some(range) => range.high().checked_add(&T::one()),
            None => Some(start),
        }
    }

    /// Returns the maximal unblocked windows inside `[0, bound]`, in ascending order.
    ///
    /// A negative `bound` yields no windows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_scan::blocked::BlockedRanges;
    /// # use unblocked_core::math::interval::ClosedInterval;
    ///
    /// let blocked = BlockedRanges::from_pairs(&[(1, 2), (5, 6)]).unwrap();
    /// assert_eq!(
    ///     blocked.free_intervals(8),
    ///     vec![
    ///         ClosedInterval::point(0),
    ///         ClosedInterval::new(3, 4),
    ///         ClosedInterval::new(7, 8),
    ///     ]
    /// );
    /// ```
    pub fn free_intervals(&self, bound: T) -> Vec<ClosedInterval<T>> {
        let mut output = Vec::new();
        let Some(window) = ClosedInterval::try_new(T::zero(), bound) else {
            return output;
        };

        let mut remaining = Some(window);
        for &blocked in &self.ranges {
            let Some(current) = remaining else {
                break;
            };
            if blocked.low() > current.high() {
                break;
            }
            if !current.intersects(blocked) {
                continue;
            }

            remaining = None;
            for piece in current.difference(blocked) {
                if piece.high() < blocked.low() {
                    output.push(piece);
                } else {
                    remaining = Some(piece);
                }
            }
        }

        if let Some(rest) = remaining {
            output.push(rest);
        }
        output
    }

    /// Counts the blocked values inside `[0, bound]`.
    ///
    /// Returns `None` if the count does not fit in `T`.
    pub fn total_blocked(&self, bound: T) -> Option<T> {
        let Some(window) = ClosedInterval::try_new(T::zero(), bound) else {
            return Some(T::zero());
        };

        let mut total = T::zero();
        for range in &self.ranges {
            if range.low() > bound {
                break;
            }
            if let Some(clipped) = range.intersection(window) {
                total = total.checked_add(&clipped.len()?)?;
            }
        }
        Some(total)
    }
}

impl<'a, T> IntoIterator for &'a BlockedRanges<T>
where
    T: ScanNumeric,
{
    type Item = &'a ClosedInterval<T>;
    type IntoIter = std::slice::Iter<'a, ClosedInterval<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
