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

//! # Unblocked Core
//!
//! Foundational integer primitives for the Unblocked workspace. This crate
//! holds the building blocks the scanner is written against, kept generic
//! over `num_traits::PrimInt` so callers can pick the integer width that
//! matches their data.
//!
//! ## Modules
//!
//! - `math`: The inclusive `[low, high]` interval type with validation,
//!   set operations (intersection/union/difference), overflow-aware
//!   measurements, iteration, and conversions to/from `RangeInclusive`.
//! - `num`: Associated-constant traits (`MinusOne`) used for sentinel
//!   encodings.

pub mod math;
pub mod num;
