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

//! Sweep strategies for locating the lowest unblocked value.
//!
//! Two sweeps are provided and must agree on every input:
//!
//! - **Forward** walks the raw ranges once, sorted by `low` only, pushing the
//!   candidate past every range that covers it. Overlapping, nested and
//!   duplicated ranges are tolerated because a range that ends below the
//!   candidate can never cover it again, and a range that starts above the
//!   candidate means no later range can cover it either.
//! - **Merged** first coalesces the ranges into a `BlockedRanges` set and then
//!   walks the merged set. After coalescing only the first range can contain
//!   zero, so the walk stops after at most one step.
//!
//! A candidate that would step past `T::max_value()` has run beyond every
//! admissible bound, so both sweeps report "no value" instead of wrapping.

use crate::{blocked::BlockedRanges, num::ScanNumeric};
use unblocked_core::math::interval::ClosedInterval;

/// Selects how a scan walks the blocked ranges.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ScanStrategy {
    /// Coalesce into a normalized set, then sweep the merged ranges.
    #[default]
    Merged,
    /// Single pass over the ranges sorted by lower bound.
    Forward,
}

impl ScanStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [ScanStrategy; 2] = [ScanStrategy::Merged, ScanStrategy::Forward];

    /// Returns the lowercase name used on the command line.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            ScanStrategy::Merged => "merged",
            ScanStrategy::Forward => "forward",
        }
    }
}

impl std::fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseScanStrategyError {
    /// The name that did not match any strategy.
    pub name: String,
}

impl std::fmt::Display for ParseScanStrategyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown scan strategy '{}', expected 'merged' or 'forward'",
            self.name
        )
    }
}

impl std::error::Error for ParseScanStrategyError {}

impl std::str::FromStr for ScanStrategy {
    type Err = ParseScanStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScanStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseScanStrategyError {
                name: s.to_string(),
            })
    }
}

/// Single-pass sweep over ranges sorted by `low`.
///
/// # Panics
///
/// In debug builds, this function will panic if `sorted` is not ordered by `low`.
///
/// # Invariants
///
/// - `sorted` must be ordered by `low` in ascending order.
/// - `bound` must be non-negative.
pub(crate) fn forward_sweep<T>(sorted: &[ClosedInterval<T>], bound: T) -> Option<T>
where
    T: ScanNumeric,
{
    debug_assert!(
        sorted.windows(2).all(|w| w[0].low() <= w[1].low()),
        "called `forward_sweep` with ranges not sorted by low"
    );
    debug_assert!(bound >= T::zero());

    let mut candidate = T::zero();
    for range in sorted {
        if range.contains_point(candidate) {
            let Some(next) = range.high().checked_add(&T::one()) else {
                log::trace!("forward sweep: {} runs to the type maximum", range);
                return None;
            };
            log::trace!("forward sweep: {} pushes candidate {} -> {}", range, candidate, next);
            candidate = next;
        }

        if candidate > bound {
            return None;
        }
    }

    Some(candidate)
}

/// Sweep over a normalized, coalesced set of ranges.
///
/// # Invariants
///
/// - `bound` must be non-negative.
pub(crate) fn merged_sweep<T>(blocked: &BlockedRanges<T>, bound: T) -> Option<T>
where
    T: ScanNumeric,
{
    debug_assert!(bound >= T::zero());

    let mut candidate = T::zero();
    for range in blocked {
        if range.low() > candidate {
            break;
        }
        if range.high() >= candidate {
            candidate = range.high().checked_add(&T::one())?;
            log::trace!("merged sweep: {} pushes candidate to {}", range, candidate);
        }
    }

    if candidate > bound { None } else { Some(candidate) }
}
