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

use num_traits::PrimInt;
use smallvec::{SmallVec, smallvec};
use std::{
    cmp::{max, min},
    iter::FusedIterator,
    ops::RangeInclusive,
};

/// A closed interval `[low, high]` where both bounds are inclusive.
///
/// This struct represents a contiguous, non-empty set of integers. Because both
/// bounds are inclusive, an interval may reach `T::max_value()` and every
/// operation that steps past a bound (`high + 1`, `low - 1`) is written so it
/// never overflows.
///
/// # Invariants
/// `low` must always be less than or equal to `high`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClosedInterval<T>
where
    T: PrimInt,
{
    low: T,
    high: T,
}

/// An iterator over the integer points contained within a `ClosedInterval`.
///
/// # Examples
///
/// ```rust
/// # use unblocked_core::math::interval::ClosedInterval;
///
/// let iv = ClosedInterval::new(1, 4);
/// let points: Vec<_> = iv.iter().collect();
/// assert_eq!(points, vec![1, 2, 3, 4]);
/// ```
pub struct ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    front: T,
    back: T,
    exhausted: bool,
}

impl<T> Iterator for ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.front;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.front = self.front + T::one();
        }
        Some(result)
    }
}

impl<T> DoubleEndedIterator for ClosedIntervalIterator<T>
where
    T: PrimInt,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        let result = self.back;
        if self.front == self.back {
            self.exhausted = true;
        } else {
            self.back = self.back - T::one();
        }
        Some(result)
    }
}

impl<T> FusedIterator for ClosedIntervalIterator<T> where T: PrimInt {}

impl<T> ClosedInterval<T>
where
    T: PrimInt,
{
    /// Creates a new `ClosedInterval`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(0, 9);
    /// assert_eq!(iv.len(), Some(10));
    /// ```
    #[inline]
    pub fn new(low: T, high: T) -> Self {
        assert!(
            low <= high,
            "Invalid interval: low must be less than or equal to high"
        );
        Self { low, high }
    }

    /// Creates a new `ClosedInterval` if the inputs are valid.
    ///
    /// Returns `None` if `low > high`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_core::math::interval::ClosedInterval;
    ///
    /// assert!(ClosedInterval::try_new(0, 10).is_some());
    /// assert!(ClosedInterval::try_new(3, 3).is_some());
    /// assert!(ClosedInterval::try_new(10, 0).is_none());
    /// ```
    #[inline]
    pub fn try_new(low: T, high: T) -> Option<Self> {
        if low <= high {
            Some(Self { low, high })
        } else {
            None
        }
    }

    /// Creates a new `ClosedInterval` without checking invariants in release builds.
    ///
    /// The caller must ensure `low <= high`. A `debug_assert!` catches
    /// violations during development.
    #[inline]
    pub fn new_unchecked(low: T, high: T) -> Self {
        debug_assert!(
            low <= high,
            "Invalid interval: low must be less than or equal to high"
        );
        Self { low, high }
    }

    /// Creates the single-point interval `[value, value]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::point(8);
    /// assert_eq!(iv.low(), 8);
    /// assert_eq!(iv.high(), 8);
    /// ```
    #[inline]
    pub fn point(value: T) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Returns the inclusive lower bound of the interval.
    #[inline]
    pub const fn low(&self) -> T {
        self.low
    }

    /// Returns the inclusive upper bound of the interval.
    #[inline]
    pub const fn high(&self) -> T {
        self.high
    }

    /// Returns `true` if `value` lies in `[low, high]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_core::math::interval::ClosedInterval;
    ///
    /// let iv = ClosedInterval::new(3, 9);
    /// assert!(iv.contains_point(3));
    /// assert!(iv.contains_point(9));
    /// assert!(!iv.contains_point(10));
    /// ```
    #[inline]
    pub fn contains_point(&self, value: T) -> bool {
        self.low <= value && value <= self.high
    }

    /// Returns `true` if `other` lies entirely within `self`.
    #[inline]
    pub fn contains_interval(&self, other: Self) -> bool {
        self.low <= other.low && other.high <= self.high
    }

    /// Returns `true` if the two intervals share at least one point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 3);
    /// assert!(a.intersects(ClosedInterval::new(3, 9)));
    /// assert!(!a.intersects(ClosedInterval::new(4, 9))); // Adjacent
    /// ```
    #[inline]
    pub fn intersects(&self, other: Self) -> bool {
        self.low <= other.high && other.low <= self.high
    }

    /// Returns `true` if the intervals touch without sharing a point,
    /// i.e. one ends exactly one step before the other begins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 2);
    /// assert!(a.adjacent(ClosedInterval::new(3, 9)));
    /// assert!(a.adjacent(ClosedInterval::new(0, 0)));
    /// assert!(!a.adjacent(ClosedInterval::new(2, 9)));
    /// ```
    #[inline]
    pub fn adjacent(&self, other: Self) -> bool {
        // `a.high < b.low` rules out `a.high == T::max_value()`, so the step cannot overflow.
        (self.high < other.low && self.high + T::one() == other.low)
            || (other.high < self.low && other.high + T::one() == self.low)
    }

    /// Returns `true` if the intervals are disjoint (neither intersecting nor adjacent).
    #[inline]
    pub fn disjoint(&self, other: Self) -> bool {
        !self.intersects_or_adjacent(other)
    }

    /// Returns `true` if the intervals either intersect or are adjacent.
    ///
    /// This is the condition under which two intervals can be merged into a
    /// single contiguous interval.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 3);
    /// assert!(a.intersects_or_adjacent(ClosedInterval::new(4, 8)));  // Adjacent
    /// assert!(a.intersects_or_adjacent(ClosedInterval::new(2, 8)));  // Intersects
    /// assert!(!a.intersects_or_adjacent(ClosedInterval::new(5, 8))); // Gap at 4
    /// ```
    #[inline]
    pub fn intersects_or_adjacent(&self, other: Self) -> bool {
        self.intersects(other) || self.adjacent(other)
    }

    /// Returns the number of points in the interval (`high - low + 1`).
    ///
    /// Returns `None` if the count is not representable in `T`, e.g. for
    /// `[0, i32::MAX]` or `[i64::MIN, -1]`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_core::math::interval::ClosedInterval;
    ///
    /// assert_eq!(ClosedInterval::new(3, 9).len(), Some(7));
    /// assert_eq!(ClosedInterval::new(0u8, 255).len(), None);
    /// ```
    #[inline]
    pub fn len(&self) -> Option<T> {
        self.high
            .checked_sub(&self.low)
            .and_then(|span| span.checked_add(&T::one()))
    }

    /// Calculates the intersection of two intervals.
    ///
    /// Returns `None` if the intervals share no point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(0, 10);
    /// let b = ClosedInterval::new(5, 15);
    /// assert_eq!(a.intersection(b), Some(ClosedInterval::new(5, 10)));
    /// ```
    #[inline]
    pub fn intersection(&self, other: Self) -> Option<Self> {
        let low = max(self.low, other.low);
        let high = min(self.high, other.high);

        if low <= high {
            Some(Self::new_unchecked(low, high))
        } else {
            None
        }
    }

    /// Calculates the union of two intervals.
    ///
    /// Returns `Some(union)` if the intervals overlap or are adjacent, and
    /// `None` if a gap separates them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_core::math::interval::ClosedInterval;
    ///
    /// let a = ClosedInterval::new(1, 2);
    /// let b = ClosedInterval::new(3, 9);
    /// assert_eq!(a.union(b), Some(ClosedInterval::new(1, 9)));
    /// ```
    #[inline]
    pub fn union(&self, other: Self) -> Option<Self> {
        if self.intersects_or_adjacent(other) {
            Some(Self {
                low: min(self.low, other.low),
                high: max(self.high, other.high),
            })
        } else {
            None
        }
    }

    /// Calculates the set difference `self - other`.
    ///
    /// # Returns
    ///
    /// * 0 intervals: if `other` covers `self`.
    /// * 1 interval: if `other` clips one side of `self` or misses it entirely.
    /// * 2 intervals: if `other` lies strictly inside `self`, splitting it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_core::math::interval::ClosedInterval;
    ///
    /// let window = ClosedInterval::new(0, 15);
    /// let diff = window.difference(ClosedInterval::new(3, 9));
    /// assert_eq!(diff.as_slice(), &[ClosedInterval::new(0, 2), ClosedInterval::new(10, 15)]);
    /// ```
    pub fn difference(&self, other: Self) -> SmallVec<[Self; 2]> {
        if !self.intersects(other) {
            return smallvec![*self];
        }

        let mut result = SmallVec::new();
        if self.low < other.low {
            result.push(Self::new_unchecked(self.low, other.low - T::one()));
        }
        if self.high > other.high {
            result.push(Self::new_unchecked(other.high + T::one(), self.high));
        }
        result
    }

    /// Creates an iterator over the points in the interval, both bounds included.
    #[inline]
    pub fn iter(&self) -> ClosedIntervalIterator<T> {
        ClosedIntervalIterator {
            front: self.low,
            back: self.high,
            exhausted: false,
        }
    }
}

impl<T> std::fmt::Debug for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClosedInterval")
            .field("low", &self.low)
            .field("high", &self.high)
            .finish()
    }
}

impl<T> std::fmt::Display for ClosedInterval<T>
where
    T: PrimInt + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}

impl<T> std::ops::RangeBounds<T> for ClosedInterval<T>
where
    T: PrimInt,
{
    fn start_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.low)
    }

    fn end_bound(&self) -> std::ops::Bound<&T> {
        std::ops::Bound::Included(&self.high)
    }
}

impl<T> IntoIterator for ClosedInterval<T>
where
    T: PrimInt,
{
    type Item = T;
    type IntoIter = ClosedIntervalIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> From<RangeInclusive<T>> for ClosedInterval<T>
where
    T: PrimInt,
{
    /// # Panics
    ///
    /// Panics if the range is empty (`start > end`).
    #[inline]
    fn from(range: RangeInclusive<T>) -> Self {
        let (low, high) = range.into_inner();
        Self::new(low, high)
    }
}

impl<T> From<ClosedInterval<T>> for RangeInclusive<T>
where
    T: PrimInt,
{
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        iv.low..=iv.high
    }
}

impl<T> From<ClosedInterval<T>> for (T, T)
where
    T: PrimInt,
{
    #[inline]
    fn from(iv: ClosedInterval<T>) -> Self {
        (iv.low, iv.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::{Bound, RangeBounds};

    #[test]
    fn test_construction_valid() {
        let iv = ClosedInterval::new(3, 9);
        assert_eq!(iv.low(), 3);
        assert_eq!(iv.high(), 9);
        assert_eq!(iv.len(), Some(7));
    }

    #[test]
    fn test_construction_point() {
        let iv = ClosedInterval::new(8, 8);
        assert_eq!(iv, ClosedInterval::point(8));
        assert_eq!(iv.len(), Some(1));
    }

    #[test]
    fn test_try_new() {
        assert!(ClosedInterval::try_new(5, 10).is_some());
        assert!(ClosedInterval::try_new(5, 5).is_some());
        assert!(ClosedInterval::try_new(10, 5).is_none());
    }

    #[test]
    #[should_panic(expected = "Invalid interval")]
    fn test_new_panic() {
        ClosedInterval::new(10, 5);
    }

    #[test]
    fn test_len_overflow() {
        assert_eq!(ClosedInterval::new(0i32, i32::MAX).len(), None);
        assert_eq!(ClosedInterval::new(1i32, i32::MAX).len(), Some(i32::MAX));
        assert_eq!(ClosedInterval::new(i64::MIN, i64::MAX).len(), None);
    }

    #[test]
    fn test_intersects() {
        let a = ClosedInterval::new(0, 10);

        // Touching at a shared endpoint counts for closed intervals
        assert!(a.intersects(ClosedInterval::new(10, 15)));
        assert!(a.intersects(ClosedInterval::new(-5, 0)));
        // Contained
        assert!(a.intersects(ClosedInterval::new(2, 8)));
        // Adjacent, no shared point
        assert!(!a.intersects(ClosedInterval::new(11, 15)));
        assert!(!a.intersects(ClosedInterval::new(-5, -1)));
    }

    #[test]
    fn test_adjacent() {
        let a = ClosedInterval::new(0, 10);
        assert!(a.adjacent(ClosedInterval::new(11, 15)));
        assert!(a.adjacent(ClosedInterval::new(-5, -1)));
        assert!(!a.adjacent(ClosedInterval::new(10, 15)));
        assert!(!a.adjacent(ClosedInterval::new(12, 15)));
    }

    #[test]
    fn test_adjacent_at_type_bounds() {
        let top = ClosedInterval::new(250u8, 255);
        assert!(!top.adjacent(ClosedInterval::new(0, 10)));
        assert!(top.adjacent(ClosedInterval::new(0, 249)));
        assert!(top.disjoint(ClosedInterval::new(0, 248)));
    }

    #[test]
    fn test_intersects_or_adjacent() {
        let a = ClosedInterval::new(0, 3);
        assert!(a.intersects_or_adjacent(ClosedInterval::new(3, 9)));
        assert!(a.intersects_or_adjacent(ClosedInterval::new(4, 9)));
        assert!(!a.intersects_or_adjacent(ClosedInterval::new(5, 9)));
        assert!(a.disjoint(ClosedInterval::new(5, 9)));
    }

    #[test]
    fn test_contains() {
        let a = ClosedInterval::new(0, 10);
        assert!(a.contains_point(0));
        assert!(a.contains_point(10));
        assert!(!a.contains_point(11));
        assert!(!a.contains_point(-1));

        assert!(a.contains_interval(ClosedInterval::new(0, 10)));
        assert!(a.contains_interval(ClosedInterval::new(2, 8)));
        assert!(!a.contains_interval(ClosedInterval::new(5, 11)));
    }

    #[test]
    fn test_intersection() {
        let a = ClosedInterval::new(0, 10);
        assert_eq!(
            a.intersection(ClosedInterval::new(10, 20)),
            Some(ClosedInterval::point(10))
        );
        assert_eq!(a.intersection(ClosedInterval::new(11, 20)), None);
        assert_eq!(
            a.intersection(ClosedInterval::new(2, 8)),
            Some(ClosedInterval::new(2, 8))
        );
    }

    #[test]
    fn test_union() {
        let a = ClosedInterval::new(0, 3);
        assert_eq!(
            a.union(ClosedInterval::new(1, 2)),
            Some(ClosedInterval::new(0, 3))
        );
        assert_eq!(
            a.union(ClosedInterval::new(4, 9)),
            Some(ClosedInterval::new(0, 9))
        );
        assert_eq!(a.union(ClosedInterval::new(5, 9)), None);
    }

    #[test]
    fn test_difference() {
        let base = ClosedInterval::new(0, 10);

        // 1. Disjoint
        let diff = base.difference(ClosedInterval::new(12, 15));
        assert_eq!(diff.as_slice(), &[base]);

        // 2. Full cover
        let diff = base.difference(ClosedInterval::new(-5, 15));
        assert!(diff.is_empty());

        // 3. Clip right
        let diff = base.difference(ClosedInterval::new(8, 15));
        assert_eq!(diff.as_slice(), &[ClosedInterval::new(0, 7)]);

        // 4. Clip left
        let diff = base.difference(ClosedInterval::new(-5, 2));
        assert_eq!(diff.as_slice(), &[ClosedInterval::new(3, 10)]);

        // 5. Split
        let diff = base.difference(ClosedInterval::new(4, 6));
        assert_eq!(
            diff.as_slice(),
            &[ClosedInterval::new(0, 3), ClosedInterval::new(7, 10)]
        );
    }

    #[test]
    fn test_difference_at_type_bounds() {
        let full = ClosedInterval::new(u8::MIN, u8::MAX);
        let diff = full.difference(ClosedInterval::new(0, 254));
        assert_eq!(diff.as_slice(), &[ClosedInterval::point(255)]);
    }

    #[test]
    fn test_iterator() {
        let collected: Vec<i32> = ClosedInterval::new(1, 4).iter().collect();
        assert_eq!(collected, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_iterator_reaches_type_max() {
        let collected: Vec<u8> = ClosedInterval::new(253u8, 255).into_iter().collect();
        assert_eq!(collected, vec![253, 254, 255]);
    }

    #[test]
    fn test_double_ended_iterator() {
        let mut iter = ClosedInterval::new(1, 4).iter();
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.next_back(), Some(3));
        assert_eq!(iter.next(), Some(2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_traits_display_debug() {
        let a = ClosedInterval::new(3, 9);
        assert_eq!(format!("{}", a), "[3, 9]");
        assert_eq!(format!("{:?}", a), "ClosedInterval { low: 3, high: 9 }");
    }

    #[test]
    fn test_conversions() {
        let iv = ClosedInterval::from(3..=9);
        assert_eq!(iv, ClosedInterval::new(3, 9));
        let range: RangeInclusive<i32> = iv.into();
        assert_eq!(range, 3..=9);
        let pair: (i32, i32) = iv.into();
        assert_eq!(pair, (3, 9));
    }

    #[test]
    fn test_range_bounds() {
        let iv = ClosedInterval::new(5, 10);

        match iv.start_bound() {
            Bound::Included(&x) => assert_eq!(x, 5),
            _ => panic!("Wrong start bound"),
        }

        match iv.end_bound() {
            Bound::Included(&x) => assert_eq!(x, 10),
            _ => panic!("Wrong end bound"),
        }
    }
}
