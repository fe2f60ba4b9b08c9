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

//! # Unblocked Scan
//!
//! **Finds the lowest value that no blocked range covers.**
//!
//! Given a bound and a list of inclusive `(low, high)` block ranges, the scan
//! returns the smallest integer in `[0, bound]` outside every range, or
//! reports that the whole window is blocked.
//!
//! ```rust
//! # use unblocked_scan::min_unblocked_value;
//! let ranges = [(0, 0), (1, 2), (3, 9), (8, 8)];
//! assert_eq!(min_unblocked_value(15, &ranges), Ok(Some(10)));
//! assert_eq!(min_unblocked_value(8, &ranges), Ok(None));
//! ```
//!
//! ## Modules
//!
//! * **`blocked`**: `BlockedRanges`, the validated, sorted and coalesced form of a
//!   block list, with point queries and free-window extraction.
//! * **`sweep`**: The `Merged` and `Forward` sweep strategies.
//! * **`finder`**: `UnblockedFinder`, a reusable scanner, plus the free functions
//!   `min_unblocked_value` and `min_unblocked_value_or_sentinel`.
//! * **`value`**: `UnblockedValue`, a sentinel-encoded result where `-1` means
//!   "everything is blocked".
//! * **`error`**: `RangeError`, returned for negative bounds and malformed ranges.
//! * **`num`**: The `ScanNumeric` bound shared by all generic code.
//!
//! ## Design Notes
//!
//! 1.  **Caller data is read-only**: ranges are copied into scanner-owned buffers before sorting.
//! 2.  **Exhaustion is not an error**: a fully blocked window is `Ok(None)`; errors are
//!     reserved for input that breaks the `0 <= low <= high` contract.
//! 3.  **No wrap-around**: a range ending at `T::max_value()` exhausts the scan instead of
//!     overflowing the candidate.

pub mod blocked;
pub mod error;
pub mod finder;
pub mod num;
pub mod sweep;
pub mod value;

pub use finder::{UnblockedFinder, min_unblocked_value, min_unblocked_value_or_sentinel};
