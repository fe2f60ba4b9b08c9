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

use num_traits::Signed;
use unblocked_core::num::constants::MinusOne;

/// The lowest unblocked value of a scan, or its absence.
///
/// Instead of `Option<T>`, this type reserves a sentinel so that the result
/// stays a single machine word and can be printed or handed across a
/// boundary as a plain integer.
///
/// Encoding:
/// - Non-negative values (>= 0) are the unblocked value itself.
/// - Negative values (<= -1) mean every value up to the bound is blocked.
///
/// Scan results are never negative, so the sentinel cannot collide with a
/// real answer.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnblockedValue<T>(T)
where
    T: Signed;

impl<T> UnblockedValue<T>
where
    T: Copy + Signed + PartialOrd + MinusOne,
{
    const NONE_SENTINEL: T = T::MINUS_ONE;

    /// Creates an `UnblockedValue` from an `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_scan::value::UnblockedValue;
    ///
    /// let found = UnblockedValue::from_option(Some(10i64));
    /// assert!(found.is_some());
    /// assert_eq!(found.raw(), 10);
    ///
    /// let exhausted = UnblockedValue::<i64>::from_option(None);
    /// assert_eq!(exhausted.raw(), -1);
    /// ```
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => UnblockedValue(v),
            None => UnblockedValue(Self::NONE_SENTINEL),
        }
    }

    /// Creates an `UnblockedValue` from a raw integer.
    /// Any negative value is treated as `None`.
    #[inline]
    pub const fn from_raw(value: T) -> Self {
        UnblockedValue(value)
    }

    /// Creates an `UnblockedValue` holding `value`.
    ///
    /// # Panics
    ///
    /// This function will panic if `value` is negative.
    pub fn some(value: T) -> Self
    where
        T: std::fmt::Display,
    {
        assert!(
            value > Self::NONE_SENTINEL,
            "called `UnblockedValue::some` with a negative value: {}",
            value
        );

        UnblockedValue(value)
    }

    /// Creates an `UnblockedValue` representing "no unblocked value".
    #[inline]
    pub fn none() -> Self {
        UnblockedValue(Self::NONE_SENTINEL)
    }

    /// Returns `true` if every value in range was blocked.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.0 <= Self::NONE_SENTINEL
    }

    /// Returns `true` if an unblocked value was found.
    #[inline]
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Returns the raw value, including the sentinel if present.
    #[inline]
    pub fn raw(&self) -> T {
        self.0
    }

    /// Converts back into an `Option<T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use unblocked_scan::value::UnblockedValue;
    ///
    /// assert_eq!(UnblockedValue::some(4i32).into_option(), Some(4));
    /// assert_eq!(UnblockedValue::<i32>::none().into_option(), None);
    /// ```
    #[inline]
    pub fn into_option(&self) -> Option<T> {
        if self.is_none() { None } else { Some(self.0) }
    }

    /// Unwraps the value, panicking if it is `None`.
    ///
    /// # Panics
    ///
    /// This function will panic if every value in range was blocked.
    pub fn unwrap(&self) -> T {
        if self.is_none() {
            panic!("called `UnblockedValue::unwrap()` on a `None` value")
        }
        self.0
    }

    /// Unwraps the value, returning `default` if it is `None`.
    #[inline]
    pub fn unwrap_or(&self, default: T) -> T {
        if self.is_none() { default } else { self.0 }
    }
}

impl<T> std::fmt::Debug for UnblockedValue<T>
where
    T: Copy + Signed + PartialOrd + MinusOne + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "UnblockedValue(None)")
        } else {
            write!(f, "UnblockedValue(Some({:?}))", self.0)
        }
    }
}

/// Prints the raw encoding, so exhausted scans show up as `-1`.
impl<T> std::fmt::Display for UnblockedValue<T>
where
    T: Copy + Signed + PartialOrd + MinusOne + std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "{}", Self::NONE_SENTINEL)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl<T> From<Option<T>> for UnblockedValue<T>
where
    T: Copy + Signed + PartialOrd + MinusOne,
{
    #[inline]
    fn from(value: Option<T>) -> Self {
        UnblockedValue::from_option(value)
    }
}

impl<T> From<UnblockedValue<T>> for Option<T>
where
    T: Copy + Signed + PartialOrd + MinusOne,
{
    #[inline]
    fn from(value: UnblockedValue<T>) -> Self {
        value.into_option()
    }
}
