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

//! Input validation errors.
//!
//! Block lists are plain integer pairs coming from callers, so nothing
//! guarantees `low <= high` or that values are non-negative. `RangeError`
//! reports the first offending entry by its position in the caller's input.

use crate::num::ScanNumeric;
use std::fmt::Display;

/// The error type for rejected scanner input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError<T> {
    /// The search bound is negative.
    NegativeBound {
        /// The rejected bound.
        bound: T,
    },
    /// A range has its lower bound above its upper bound.
    InvertedRange {
        /// Position of the range in the input.
        index: usize,
        low: T,
        high: T,
    },
    /// A range reaches below zero.
    NegativeRange {
        /// Position of the range in the input.
        index: usize,
        low: T,
        high: T,
    },
}

impl<T> RangeError<T> {
    /// Returns the input position of the offending range, if the error is about a range.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::NegativeBound { .. } => None,
            Self::InvertedRange { index, .. } | Self::NegativeRange { index, .. } => Some(*index),
        }
    }
}

impl<T> Display for RangeError<T>
where
    T: Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeBound { bound } => {
                write!(f, "Bound must be non-negative, got {}", bound)
            }
            Self::InvertedRange { index, low, high } => write!(
                f,
                "Range #{} ({}, {}) has its low bound above its high bound",
                index, low, high
            ),
            Self::NegativeRange { index, low, high } => write!(
                f,
                "Range #{} ({}, {}) reaches below zero",
                index, low, high
            ),
        }
    }
}

impl<T> std::error::Error for RangeError<T> where T: std::fmt::Debug + Display {}

/// Rejects a negative search bound.
#[inline]
pub(crate) fn validate_bound<T>(bound: T) -> Result<T, RangeError<T>>
where
    T: ScanNumeric,
{
    if bound < T::zero() {
        return Err(RangeError::NegativeBound { bound });
    }
    Ok(bound)
}
