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

//! # Scan Numeric Trait
//!
//! Collects the integer bounds the scanner needs into one trait so that
//! generic signatures stay short. On top of `PrimInt`, values must be
//! printable (the scanner logs the ranges and candidates it inspects) and
//! shareable across threads.
//!
//! Both signed and unsigned primitives qualify. Sentinel-encoded results
//! (`UnblockedValue`) additionally need `Signed + MinusOne`.

use num_traits::PrimInt;

/// A trait alias for integer types the scanner can operate on.
pub trait ScanNumeric:
    PrimInt + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static
{
}

macro_rules! impl_scan_numeric {
    ($($t:ty),* $(,)?) => {
        $(impl ScanNumeric for $t {})*
    };
}

impl_scan_numeric!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
