// framebench - Dataframe Engine Benchmark Harness
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Free text with a `Summary:` block.
//!
//! ```text
//! Running groupby suite...
//! Summary:
//! ----------
//! Q1: 2.45ms
//! Q2: 10.1ms
//! ```
//!
//! Only lines after the first line reading exactly `Summary:` (surrounding
//! whitespace aside) are considered.

use super::result_set::{MetricRecord, ResultSet};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Marker that opens the summary block.
pub const SUMMARY_MARKER: &str = "Summary:";

static ENTRY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(q\d+):\s*([0-9]+(?:\.[0-9]+)?)\s*ms\b").expect("valid summary entry pattern")
});

/// Returns true for the line that opens the summary block.
pub fn is_marker_line(line: &str) -> bool {
    line.trim() == SUMMARY_MARKER
}

/// Parses the summary block of `raw`; empty when there is no marker line.
pub fn parse_summary(raw: &str) -> ResultSet {
    let mut lines = raw.lines();
    if !lines.by_ref().any(is_marker_line) {
        debug!("no summary marker line found");
        return ResultSet::new();
    }

    lines
        .map(str::trim)
        .filter(|line| !line.is_empty() && !is_separator(line))
        .filter_map(|line| {
            let parsed = parse_entry(line);
            if parsed.is_none() {
                debug!(line, "skipping summary line");
            }
            parsed
        })
        .collect()
}

fn parse_entry(line: &str) -> Option<MetricRecord> {
    let caps = ENTRY_PATTERN.captures(line)?;
    let query = caps.get(1)?.as_str().parse().ok()?;
    let millis: f64 = caps.get(2)?.as_str().parse().ok()?;
    Some(MetricRecord::new(query, millis / 1e3))
}

fn is_separator(line: &str) -> bool {
    line.chars().all(|c| matches!(c, '-' | '=' | '_' | '*' | '#' | ' '))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::QueryId;

    #[test]
    fn test_block_with_separators() {
        let raw = "\
Loading data...
Q9: 99ms
Summary:
========
Q1: 2.45ms
--------
Q2: 10ms
q10: 0.5 ms
Total: 13ms
";
        let set = parse_summary(raw);
        assert_eq!(set.len(), 3);
        assert!((set.get(QueryId::new(1)).unwrap().elapsed_secs - 0.00245).abs() < 1e-12);
        assert!((set.get(QueryId::new(2)).unwrap().elapsed_secs - 0.010).abs() < 1e-12);
        assert!((set.get(QueryId::new(10)).unwrap().elapsed_secs - 0.0005).abs() < 1e-12);
        assert!(!set.contains(QueryId::new(9)));
    }

    #[test]
    fn test_no_marker() {
        assert!(parse_summary("Q1: 2.45ms\n").is_empty());
    }

    #[test]
    fn test_marker_inside_a_line_is_ignored() {
        let raw = "Test Summary: all passed\nQ1: 2.45ms\n";
        assert!(parse_summary(raw).is_empty());

        let raw = "Run Summary: ok\nQ1: 9ms\n  Summary:  \nQ2: 1ms\n";
        let set = parse_summary(raw);
        assert_eq!(set.len(), 1);
        assert!(set.contains(QueryId::new(2)));
    }

    #[test]
    fn test_marker_line_detection() {
        assert!(is_marker_line("Summary:"));
        assert!(is_marker_line("   Summary:\t"));
        assert!(!is_marker_line("Summary: 3 queries"));
        assert!(!is_marker_line("Test Summary:"));
    }

    #[test]
    fn test_garbage_values_skipped() {
        let set = parse_summary("Summary:\nQ1: fast\nQ2: 3.0ms\nQ3: 1.2.3ms\n");
        assert_eq!(set.len(), 1);
        assert!(set.contains(QueryId::new(2)));
    }

    #[test]
    fn test_separator_detection() {
        assert!(is_separator("-----"));
        assert!(is_separator("== == =="));
        assert!(!is_separator("Q1: 1ms"));
    }
}
