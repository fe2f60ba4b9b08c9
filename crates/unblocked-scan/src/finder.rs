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

//! The minimum-unblocked-value finder.
//!
//! Given a bound and a list of inclusive blocked ranges, `UnblockedFinder`
//! returns the smallest value in `[0, bound]` that no range covers. The
//! caller's slice is never reordered; both strategies work on buffers owned
//! by the finder, which keep their capacity across calls so repeated scans
//! do not allocate.
//!
//! "Every value is blocked" is an ordinary outcome and comes back as
//! `Ok(None)`. Only malformed input (a negative bound, an inverted range, a
//! range reaching below zero) is an error. Callers that want the classic
//! `-1` encoding can use `find_sentinel` or `min_unblocked_value_or_sentinel`.

use crate::{
    blocked::{BlockedRanges, validate_range},
    error::{RangeError, validate_bound},
    num::ScanNumeric,
    sweep::{ScanStrategy, forward_sweep, merged_sweep},
    value::UnblockedValue,
};
use num_traits::Signed;
use unblocked_core::{math::interval::ClosedInterval, num::constants::MinusOne};

/// A reusable scanner for the lowest unblocked value.
#[derive(Clone, Debug, Default)]
pub struct UnblockedFinder<T>
where
    T: ScanNumeric,
{
    strategy: ScanStrategy,
    blocked: BlockedRanges<T>,
    sorted: Vec<ClosedInterval<T>>,
}

impl<T> UnblockedFinder<T>
where
    T: ScanNumeric,
{
    /// Creates a finder using the default `Merged` strategy.
    #[inline]
    pub fn new() -> Self {
        Self {
            strategy: ScanStrategy::default(),
            blocked: BlockedRanges::new(),
            sorted: Vec::new(),
        }
    }

    /// Creates a finder with scratch space for `num_ranges` ranges.
    #[inline]
    pub fn preallocated(num_ranges: usize) -> Self {
        Self {
            strategy: ScanStrategy::default(),
            blocked: BlockedRanges::preallocated(num_ranges),
            sorted: Vec::with_capacity(num_ranges),
        }
    }

    /// Sets the strategy used by subsequent scans.
    #[inline]
    pub fn with_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the strategy used by `find`.
    #[inline]
    pub fn strategy(&self) -> ScanStrategy {
        self.strategy
    }

    /// Changes the strategy used by subsequent scans.
    #[inline]
    pub fn set_strategy(&mut self, strategy: ScanStrategy) {
        self.strategy = strategy;
    }

    /// Finds the smallest value in `[0, bound]` not covered by any of `ranges`.
    ///
    /// Returns `Ok(None)` if every value in `[0, bound]` is blocked.
    ///
    /// # Errors
    ///
    /// Returns a `RangeError` if `bound` is negative or any range is inverted
    /// or reaches below zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_scan::finder::UnblockedFinder;
    ///
    /// let mut finder = UnblockedFinder::<i64>::new();
    /// assert_eq!(finder.find(15, &[(0, 0), (1, 2), (3, 9), (8, 8)]), Ok(Some(10)));
    /// assert_eq!(finder.find(8, &[(0, 3), (1, 2), (3, 9), (8, 8)]), Ok(None));
    /// ```
    pub fn find(&mut self, bound: T, ranges: &[(T, T)]) -> Result<Option<T>, RangeError<T>> {
        let bound = validate_bound(bound)?;

        let result = match self.strategy {
            ScanStrategy::Merged => {
                self.blocked.rebuild(ranges)?;
                merged_sweep(&self.blocked, bound)
            }
            ScanStrategy::Forward => {
                self.sorted.clear();
                for (index, &(low, high)) in ranges.iter().enumerate() {
                    self.sorted.push(validate_range(index, low, high)?);
                }
                self.sorted.sort_unstable_by_key(|iv| iv.low());
                forward_sweep(&self.sorted, bound)
            }
        };

        match result {
            Some(value) => log::debug!(
                "{} scan over {} ranges with bound {}: lowest unblocked value is {}",
                self.strategy,
                ranges.len(),
                bound,
                value
            ),
            None => log::debug!(
                "{} scan over {} ranges with bound {}: every value is blocked",
                self.strategy,
                ranges.len(),
                bound
            ),
        }

        Ok(result)
    }

    /// Like `find`, but encodes "every value is blocked" as the `-1` sentinel.
    ///
    /// # Errors
    ///
    /// Same as `find`.
    pub fn find_sentinel(
        &mut self,
        bound: T,
        ranges: &[(T, T)],
    ) -> Result<UnblockedValue<T>, RangeError<T>>
    where
        T: Signed + MinusOne,
    {
        self.find(bound, ranges).map(UnblockedValue::from_option)
    }
}

/// Finds the smallest value in `[0, bound]` not covered by any of `ranges`,
/// using the default strategy.
///
/// Returns `Ok(None)` if every value in `[0, bound]` is blocked.
///
/// # Errors
///
/// Returns a `RangeError` for a negative bound or a malformed range.
///
/// # Examples
///
/// ```rust
/// # use unblocked_scan::min_unblocked_value;
///
/// assert_eq!(min_unblocked_value(5, &[]), Ok(Some(0)));
/// assert_eq!(min_unblocked_value(5, &[(0, 5)]), Ok(None));
/// assert!(min_unblocked_value(5, &[(4, 1)]).is_err());
/// ```
pub fn min_unblocked_value<T>(bound: T, ranges: &[(T, T)]) -> Result<Option<T>, RangeError<T>>
where
    T: ScanNumeric,
{
    UnblockedFinder::preallocated(ranges.len()).find(bound, ranges)
}

/// Sentinel-encoded variant of [`min_unblocked_value`]: an exhausted range
/// yields `UnblockedValue::none()`, whose raw value is `-1`.
///
/// # Errors
///
/// Returns a `RangeError` for a negative bound or a malformed range.
///
/// # Examples
///
/// ```rust
/// # use unblocked_scan::min_unblocked_value_or_sentinel;
///
/// let value = min_unblocked_value_or_sentinel(8i64, &[(0, 3), (1, 2), (3, 9), (8, 8)]).unwrap();
/// assert_eq!(value.raw(), -1);
/// ```
pub fn min_unblocked_value_or_sentinel<T>(
    bound: T,
    ranges: &[(T, T)],
) -> Result<UnblockedValue<T>, RangeError<T>>
where
    T: ScanNumeric + Signed + MinusOne,
{
    UnblockedFinder::preallocated(ranges.len()).find_sentinel(bound, ranges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    type IntegerType = i64;

    fn finders() -> Vec<UnblockedFinder<IntegerType>> {
        ScanStrategy::ALL
            .into_iter()
            .map(|strategy| UnblockedFinder::new().with_strategy(strategy))
            .collect()
    }

    /// Point-by-point reference answer.
    fn is_covered(ranges: &[(IntegerType, IntegerType)], v: IntegerType) -> bool {
        ranges.iter().any(|&(low, high)| low <= v && v <= high)
    }

    fn brute_force(
        bound: IntegerType,
        ranges: &[(IntegerType, IntegerType)],
    ) -> Option<IntegerType> {
        (0..=bound).find(|&v| !is_covered(ranges, v))
    }

    fn random_ranges(
        rng: &mut StdRng,
        max_len: usize,
        max_value: IntegerType,
    ) -> Vec<(IntegerType, IntegerType)> {
        let len = rng.random_range(0..=max_len);
        (0..len)
            .map(|_| {
                let low = rng.random_range(0..=max_value);
                let width = rng.random_range(0..=max_value / 4);
                (low, low + width)
            })
            .collect()
    }

    #[test]
    fn test_sample_scenarios() {
        for mut finder in finders() {
            let strategy = finder.strategy();
            assert_eq!(
                finder.find(8, &[(0, 3), (1, 2), (3, 9), (8, 8)]),
                Ok(None),
                "{strategy}"
            );
            assert_eq!(
                finder.find(15, &[(0, 0), (1, 2), (3, 9), (8, 8)]),
                Ok(Some(10)),
                "{strategy}"
            );
            assert_eq!(finder.find(5, &[]), Ok(Some(0)), "{strategy}");
            assert_eq!(finder.find(5, &[(0, 5)]), Ok(None), "{strategy}");
        }
    }

    #[test]
    fn test_empty_ranges_yield_zero() {
        for mut finder in finders() {
            for bound in [0, 1, 7, 1_000_000, IntegerType::MAX] {
                assert_eq!(finder.find(bound, &[]), Ok(Some(0)));
            }
        }
    }

    #[test]
    fn test_zero_bound() {
        for mut finder in finders() {
            assert_eq!(finder.find(0, &[(1, 4)]), Ok(Some(0)));
            assert_eq!(finder.find(0, &[(0, 0)]), Ok(None));
        }
    }

    #[test]
    fn test_ranges_above_bound_are_ignored() {
        for mut finder in finders() {
            assert_eq!(finder.find(3, &[(0, 2), (10, 20), (4, 9)]), Ok(Some(3)));
            assert_eq!(finder.find(3, &[(0, 2), (3, 3), (10, 20)]), Ok(None));
        }
    }

    #[test]
    fn test_answer_equal_to_bound() {
        for mut finder in finders() {
            assert_eq!(finder.find(10, &[(0, 9)]), Ok(Some(10)));
        }
    }

    #[test]
    fn test_range_reaching_type_max() {
        for mut finder in finders() {
            assert_eq!(finder.find(IntegerType::MAX, &[(0, IntegerType::MAX)]), Ok(None));
            assert_eq!(
                finder.find(IntegerType::MAX, &[(0, IntegerType::MAX - 1)]),
                Ok(Some(IntegerType::MAX))
            );
        }
    }

    #[test]
    fn test_unsigned_types() {
        let mut finder = UnblockedFinder::<u8>::new().with_strategy(ScanStrategy::Forward);
        assert_eq!(finder.find(255, &[(0, 254)]), Ok(Some(255)));
        assert_eq!(finder.find(255, &[(0, 255)]), Ok(None));
        assert_eq!(min_unblocked_value(10u32, &[(0, 4), (5, 6)]), Ok(Some(7)));
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        for mut finder in finders() {
            assert_eq!(
                finder.find(-1, &[]),
                Err(RangeError::NegativeBound { bound: -1 })
            );
            assert_eq!(
                finder.find(10, &[(0, 1), (5, 3)]),
                Err(RangeError::InvertedRange {
                    index: 1,
                    low: 5,
                    high: 3
                })
            );
            assert_eq!(
                finder.find(10, &[(-2, 3)]),
                Err(RangeError::NegativeRange {
                    index: 0,
                    low: -2,
                    high: 3
                })
            );
        }
    }

    #[test]
    fn test_caller_slice_is_untouched() {
        let ranges: Vec<(IntegerType, IntegerType)> = vec![(8, 8), (3, 9), (1, 2), (0, 0)];
        let snapshot = ranges.clone();
        for mut finder in finders() {
            assert_eq!(finder.find(15, &ranges), Ok(Some(10)));
            assert_eq!(ranges, snapshot);
        }
    }

    #[test]
    fn test_order_independence() {
        let mut ranges: Vec<(IntegerType, IntegerType)> =
            vec![(0, 0), (1, 2), (3, 9), (8, 8), (11, 14), (10, 10)];
        let mut rng = StdRng::seed_from_u64(42);
        let expected = min_unblocked_value(20, &ranges);
        for _ in 0..20 {
            use rand::seq::SliceRandom;
            ranges.shuffle(&mut rng);
            for mut finder in finders() {
                assert_eq!(finder.find(20, &ranges), expected);
            }
        }
        assert_eq!(expected, Ok(Some(15)));
    }

    #[test]
    fn test_finder_reuse_across_calls() {
        let mut finder = UnblockedFinder::<IntegerType>::preallocated(8);
        assert_eq!(finder.find(15, &[(0, 0), (1, 2), (3, 9), (8, 8)]), Ok(Some(10)));
        assert!(finder.find(15, &[(4, 2)]).is_err());
        assert_eq!(finder.find(15, &[(1, 1)]), Ok(Some(0)));

        finder.set_strategy(ScanStrategy::Forward);
        assert_eq!(finder.strategy(), ScanStrategy::Forward);
        assert_eq!(finder.find(15, &[(0, 0), (1, 2), (3, 9), (8, 8)]), Ok(Some(10)));
        assert_eq!(finder.find(15, &[(1, 1)]), Ok(Some(0)));
    }

    #[test]
    fn test_sentinel_encoding() {
        let mut finder = UnblockedFinder::<IntegerType>::new();
        let raw = |value: Result<UnblockedValue<IntegerType>, _>| value.map(|v| v.raw());

        assert_eq!(raw(finder.find_sentinel(15, &[(0, 0), (1, 2), (3, 9), (8, 8)])), Ok(10));
        assert_eq!(raw(finder.find_sentinel(8, &[(0, 3), (1, 2), (3, 9), (8, 8)])), Ok(-1));
        assert_eq!(raw(min_unblocked_value_or_sentinel(5, &[(0, 5)])), Ok(-1));
        assert_eq!(raw(min_unblocked_value_or_sentinel(5, &[])), Ok(0));
    }

    #[test]
    fn test_strategies_agree_with_brute_force() {
        let mut rng = StdRng::seed_from_u64(0xDEADBEEF);
        let mut merged = UnblockedFinder::<IntegerType>::new();
        let mut forward =
            UnblockedFinder::<IntegerType>::new().with_strategy(ScanStrategy::Forward);

        for _ in 0..2_000 {
            let bound = rng.random_range(0..=60);
            let ranges = random_ranges(&mut rng, 12, 64);

            let expected = brute_force(bound, &ranges);
            assert_eq!(
                merged.find(bound, &ranges),
                Ok(expected),
                "merged: bound={bound} ranges={ranges:?}"
            );
            assert_eq!(
                forward.find(bound, &ranges),
                Ok(expected),
                "forward: bound={bound} ranges={ranges:?}"
            );
        }
    }

    #[test]
    fn test_result_properties() {
        let mut rng = StdRng::seed_from_u64(123456);
        let mut finder = UnblockedFinder::<IntegerType>::new();

        for _ in 0..500 {
            let bound = rng.random_range(0..=40);
            let ranges = random_ranges(&mut rng, 8, 48);

            match finder.find(bound, &ranges).unwrap() {
                Some(v) => {
                    assert!((0..=bound).contains(&v));
                    assert!(!is_covered(&ranges, v));
                    // Everything below the answer is blocked
                    assert!((0..v).all(|u| is_covered(&ranges, u)));
                }
                None => {
                    assert!((0..=bound).all(|u| is_covered(&ranges, u)));
                }
            }
        }
    }
}
