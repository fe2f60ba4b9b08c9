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

//! `unblocked` demo binary.
//!
//! Scans a block list for the lowest value in `[0, BOUND]` outside every
//! range and prints it, or `-1` when the whole window is blocked. Without
//! arguments it runs the built-in sample (bound 15, ranges
//! `(0,0) (1,2) (3,9) (8,8)`), which prints `10`.
//!
//! Set `RUST_LOG=debug` (or pass `--debug`) to see the sweep decisions.

mod args;

use anyhow::Context;
use std::io::Write;
use unblocked_scan::{blocked::BlockedRanges, finder::UnblockedFinder};

use crate::args::{Out, opts};

fn main() -> anyhow::Result<()> {
    let opts = opts().run();

    let mut logger = env_logger::Builder::from_default_env();
    if opts.debug {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let stdout = std::io::stdout();
    run(&opts, &mut stdout.lock())
}

/// Runs one scan and writes the report to `out`.
fn run<W: Write>(opts: &Out, out: &mut W) -> anyhow::Result<()> {
    let ranges = opts.ranges_or_sample();
    log::debug!(
        "scanning {} ranges with bound {} using the {} strategy",
        ranges.len(),
        opts.bound,
        opts.strategy
    );

    let mut finder = UnblockedFinder::preallocated(ranges.len()).with_strategy(opts.strategy);
    let value = finder
        .find_sentinel(opts.bound, &ranges)
        .context("invalid scan input")?;
    writeln!(out, "{}", value)?;

    if opts.free {
        let blocked = BlockedRanges::from_pairs(&ranges).context("invalid scan input")?;
        for window in blocked.free_intervals(opts.bound) {
            writeln!(out, "free {}", window)?;
        }
    }

    Ok(())
}
