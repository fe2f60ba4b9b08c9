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

//! Argument parsing for the `unblocked` demo binary.

use bpaf::{OptionParser, Parser, construct, long, short};
use unblocked_scan::sweep::ScanStrategy;

/// Bound used when `--bound` is not given.
pub(crate) const DEFAULT_BOUND: i64 = 15;

/// Block list used when no `--range` is given.
pub(crate) const SAMPLE_RANGES: [(i64, i64); 4] = [(0, 0), (1, 2), (3, 9), (8, 8)];

#[derive(Debug, Clone)]
pub(crate) struct Out {
    pub(crate) debug: bool,
    pub(crate) bound: i64,
    pub(crate) ranges: Vec<(i64, i64)>,
    pub(crate) strategy: ScanStrategy,
    pub(crate) free: bool,
}

impl Out {
    /// The ranges to scan, falling back to the built-in sample.
    pub(crate) fn ranges_or_sample(&self) -> Vec<(i64, i64)> {
        if self.ranges.is_empty() {
            SAMPLE_RANGES.to_vec()
        } else {
            self.ranges.clone()
        }
    }
}

/// Set up bpaf argument parsing.
pub(crate) fn opts() -> OptionParser<Out> {
    let debug = short('d').long("debug").help("Print debug messages").switch();

    let bound = long("bound")
        .help("Largest admissible value (inclusive). Default is 15")
        .argument::<i64>("BOUND")
        .fallback(DEFAULT_BOUND);

    let ranges = short('r')
        .long("range")
        .help("Blocked range as LOW,HIGH (inclusive). Repeatable; defaults to a built-in sample")
        .argument::<String>("LOW,HIGH")
        .parse(|input| parse_range(&input))
        .many();

    let strategy = long("strategy")
        .help("Sweep strategy: merged or forward. Default is merged")
        .argument::<ScanStrategy>("STRATEGY")
        .fallback(ScanStrategy::default());

    let free = long("free")
        .help("Also print the unblocked windows inside [0, BOUND]")
        .switch();

    construct!(Out {
        debug,
        bound,
        ranges,
        strategy,
        free,
    })
    .to_options()
    .descr("unblocked: find the lowest value in [0, BOUND] outside every blocked range")
}

/// Parse a range written as `LOW,HIGH`.
pub(crate) fn parse_range(input: &str) -> Result<(i64, i64), String> {
    let Some((low, high)) = input.split_once(',') else {
        return Err(format!("Range '{}' must be in the format LOW,HIGH", input));
    };
    let low = low
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("Invalid range low bound '{}': {}", low.trim(), e))?;
    let high = high
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("Invalid range high bound '{}': {}", high.trim(), e))?;
    Ok((low, high))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Out {
        opts()
            .run_inner(args)
            .unwrap_or_else(|e| panic!("failed to parse {:?}: {:?}", args, e))
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_range("3,9"), Ok((3, 9)));
        assert_eq!(parse_range(" 0 , 0 "), Ok((0, 0)));
        assert_eq!(parse_range("-2,3"), Ok((-2, 3)));
        assert!(parse_range("3").is_err());
        assert!(parse_range("a,9").is_err());
        assert!(parse_range("3,").is_err());
    }

    #[test]
    fn test_defaults() {
        let out = parse(&[]);
        assert!(!out.debug);
        assert!(!out.free);
        assert_eq!(out.bound, DEFAULT_BOUND);
        assert_eq!(out.strategy, ScanStrategy::Merged);
        assert!(out.ranges.is_empty());
        assert_eq!(out.ranges_or_sample(), SAMPLE_RANGES.to_vec());
    }

    #[test]
    fn test_explicit_arguments() {
        let out = parse(&[
            "--bound", "8", "-r", "0,3", "--range", "3,9", "--strategy", "forward", "--free",
        ]);
        assert_eq!(out.bound, 8);
        assert_eq!(out.ranges, vec![(0, 3), (3, 9)]);
        assert_eq!(out.ranges_or_sample(), vec![(0, 3), (3, 9)]);
        assert_eq!(out.strategy, ScanStrategy::Forward);
        assert!(out.free);
    }

    #[test]
    fn test_rejects_unknown_strategy() {
        assert!(opts().run_inner(&["--strategy", "greedy"]).is_err());
    }
}
