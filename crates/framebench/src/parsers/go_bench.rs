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

//! Go `testing` benchmark output.
//!
//! ```text
//! BenchmarkGroupByQ3_Medium-8    5    1200000 ns/op    2048 B/op    12 allocs/op
//! ```
//!
//! Nanoseconds per operation become seconds; `B/op` becomes memory.

use super::result_set::{MetricRecord, ResultSet};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

static LINE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^BenchmarkGroupBy(q\d+)_\w+?(?:-\d+)?\s+\d+\s+(\d+(?:\.\d+)?)\s+ns/op(?:\s+(\d+)\s+B/op)?",
    )
    .expect("valid go benchmark pattern")
});

/// Parses one benchmark line, or `None` when it does not match.
pub fn parse_line(line: &str) -> Option<MetricRecord> {
    let caps = LINE_PATTERN.captures(line.trim())?;
    let query = caps.get(1)?.as_str().parse().ok()?;
    let nanos: f64 = caps.get(2)?.as_str().parse().ok()?;

    let record = MetricRecord::new(query, nanos / 1e9);
    match caps.get(3).and_then(|m| m.as_str().parse::<u64>().ok()) {
        Some(bytes) => Some(record.with_memory(bytes)),
        None => Some(record),
    }
}

/// Parses Go benchmark output, skipping lines that are not groupby results.
pub fn parse_go_bench(raw: &str) -> ResultSet {
    raw.lines()
        .filter_map(|line| {
            let record = parse_line(line);
            if record.is_none() && line.trim_start().starts_with("Benchmark") {
                debug!(line, "skipping unrecognized benchmark line");
            }
            record
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::QueryId;

    #[test]
    fn test_line_with_memory() {
        let record = parse_line("BenchmarkGroupByQ3_Medium-8  5  1200000 ns/op  2048 B/op").unwrap();
        assert_eq!(record.query, QueryId::new(3));
        assert!((record.elapsed_secs - 0.0012).abs() < 1e-12);
        assert_eq!(record.memory_bytes, Some(2048));
    }

    #[test]
    fn test_line_without_memory_or_cpu_suffix() {
        let record = parse_line("BenchmarkGroupByQ1_Small 100 350.5 ns/op").unwrap();
        assert_eq!(record.query, QueryId::new(1));
        assert!((record.elapsed_secs - 3.505e-7).abs() < 1e-15);
        assert_eq!(record.memory_bytes, None);
    }

    #[test]
    fn test_mixed_output() {
        let raw = "\
goos: linux
goarch: amd64
BenchmarkGroupByQ3_Medium-8    5    1200000 ns/op    2048 B/op    12 allocs/op
BenchmarkSortInt64-8    10    5000 ns/op
garbage line
BenchmarkGroupByQx_Medium-8    5    100 ns/op
PASS
ok      example.com/bench   3.2s
";
        let set = parse_go_bench(raw);
        assert_eq!(set.len(), 1);
        let record = set.get(QueryId::new(3)).unwrap();
        assert!((record.elapsed_secs - 0.0012).abs() < 1e-12);
        assert_eq!(record.memory_bytes, Some(2048));
    }

    #[test]
    fn test_ids_are_lowercased() {
        let set = parse_go_bench("BenchmarkGroupByQ10_Large-16 1 42000000000 ns/op");
        let ids: Vec<String> = set.ids().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["q10"]);
        assert_eq!(set.get(QueryId::new(10)).unwrap().elapsed_secs, 42.0);
    }
}
