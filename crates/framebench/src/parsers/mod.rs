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

//! Result parsers.
//!
//! Each supported benchmark output format has one extraction function that
//! turns raw text into a canonical [`ResultSet`]. Parsers are tolerant:
//! input they do not recognize is skipped, never an error. Only failing to
//! read the source file is fatal.
//!
//! - **benchmark_json**: pytest-benchmark style JSON
//! - **go_bench**: Go `testing` benchmark lines
//! - **summary**: a `Summary:` block of millisecond timings
//! - **suite_json**: suite runner JSON

pub mod benchmark_json;
pub mod go_bench;
pub mod result_set;
pub mod suite_json;
pub mod summary;

pub use benchmark_json::parse_benchmark_json;
pub use go_bench::parse_go_bench;
pub use result_set::{MetricRecord, ResultSet};
pub use suite_json::{parse_suite_json, suite_data_digest, SuiteOutput, SuiteResult};
pub use summary::parse_summary;

use crate::error::{BenchError, Result};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::debug;

/// Benchmark output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceFormat {
    /// `{"benchmarks": [{"name", "stats": {"median"}}]}`.
    BenchmarkJson,
    /// `BenchmarkGroupByQ<n>_<label>-<N> <iters> <ns> ns/op [<bytes> B/op]`.
    GoBench,
    /// A `Summary:` line followed by `Q<n>: <float>ms` lines.
    SummaryBlock,
    /// `{"results": [{"name", "ms", "rows"}]}`.
    SuiteJson,
    /// Pick one from the content.
    #[default]
    Auto,
}

impl SourceFormat {
    /// Guesses the format of `raw`. Never returns [`SourceFormat::Auto`].
    pub fn detect(raw: &str) -> SourceFormat {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(raw) {
            if value.get("benchmarks").is_some() {
                return SourceFormat::BenchmarkJson;
            }
            if value.get("results").is_some() {
                return SourceFormat::SuiteJson;
            }
        }
        if raw.lines().any(summary::is_marker_line) {
            return SourceFormat::SummaryBlock;
        }
        SourceFormat::GoBench
    }

    /// Canonical name, accepted by `FromStr`.
    pub fn name(&self) -> &'static str {
        match self {
            SourceFormat::BenchmarkJson => "benchmark-json",
            SourceFormat::GoBench => "gobench",
            SourceFormat::SummaryBlock => "summary",
            SourceFormat::SuiteJson => "suite-json",
            SourceFormat::Auto => "auto",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SourceFormat {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pytest" | "benchmark-json" | "benchmark_json" => Ok(SourceFormat::BenchmarkJson),
            "go" | "gobench" | "go-bench" => Ok(SourceFormat::GoBench),
            "summary" => Ok(SourceFormat::SummaryBlock),
            "suite" | "suite-json" | "suite_json" => Ok(SourceFormat::SuiteJson),
            "auto" => Ok(SourceFormat::Auto),
            other => Err(BenchError::invalid_config(
                "format",
                format!(
                    "unknown format '{}' (expected pytest, go, summary, suite or auto)",
                    other
                ),
            )),
        }
    }
}

/// Parses raw benchmark output.
///
/// # Examples
///
/// ```
/// use framebench::parsers::{parse, SourceFormat};
///
/// let set = parse("Summary:\nQ1: 2.5ms\n", SourceFormat::Auto);
/// assert_eq!(set.len(), 1);
/// ```
pub fn parse(raw: &str, format: SourceFormat) -> ResultSet {
    let format = match format {
        SourceFormat::Auto => {
            let detected = SourceFormat::detect(raw);
            debug!(format = %detected, "detected result format");
            detected
        }
        explicit => explicit,
    };

    match format {
        SourceFormat::BenchmarkJson => parse_benchmark_json(raw),
        SourceFormat::GoBench => parse_go_bench(raw),
        SourceFormat::SummaryBlock => parse_summary(raw),
        SourceFormat::SuiteJson => parse_suite_json(raw),
        SourceFormat::Auto => ResultSet::new(),
    }
}

/// Reads and parses a result file.
///
/// # Errors
///
/// [`BenchError::NotFound`] when the file does not exist and
/// [`BenchError::Io`] when it cannot be read.
pub fn parse_file(path: &Path, format: SourceFormat) -> Result<ResultSet> {
    let raw = std::fs::read_to_string(path).map_err(|e| BenchError::from_io(path, e))?;
    let set = parse(&raw, format);
    debug!(path = %path.display(), records = set.len(), "parsed result file");
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::QueryId;

    #[test]
    fn test_detect() {
        assert_eq!(
            SourceFormat::detect(r#"{"benchmarks": []}"#),
            SourceFormat::BenchmarkJson
        );
        assert_eq!(
            SourceFormat::detect(r#"{"engine": "x", "results": []}"#),
            SourceFormat::SuiteJson
        );
        assert_eq!(
            SourceFormat::detect("run\nSummary:\nQ1: 1ms"),
            SourceFormat::SummaryBlock
        );
        assert_eq!(
            SourceFormat::detect("BenchmarkGroupByQ1_Small-8 1 100 ns/op"),
            SourceFormat::GoBench
        );
        assert_eq!(
            SourceFormat::detect("Test Summary: 3 passed\nBenchmarkGroupByQ1_Small-8 1 100 ns/op"),
            SourceFormat::GoBench
        );
    }

    #[test]
    fn test_format_names() {
        assert_eq!("pytest".parse::<SourceFormat>().unwrap(), SourceFormat::BenchmarkJson);
        assert_eq!("go".parse::<SourceFormat>().unwrap(), SourceFormat::GoBench);
        assert_eq!("Suite".parse::<SourceFormat>().unwrap(), SourceFormat::SuiteJson);
        assert!("xml".parse::<SourceFormat>().is_err());
        for format in [
            SourceFormat::BenchmarkJson,
            SourceFormat::GoBench,
            SourceFormat::SummaryBlock,
            SourceFormat::SuiteJson,
            SourceFormat::Auto,
        ] {
            assert_eq!(format.name().parse::<SourceFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_explicit_format_not_detected() {
        let set = parse("Summary:\nQ1: 1ms", SourceFormat::GoBench);
        assert!(set.is_empty());
    }

    #[test]
    fn test_parse_file_missing() {
        let err = parse_file(Path::new("/no/such/results.json"), SourceFormat::Auto).unwrap_err();
        assert!(matches!(err, BenchError::NotFound { .. }));
    }

    #[test]
    fn test_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("b.txt");
        std::fs::write(&path, "BenchmarkGroupByQ2_Small-4 10 5000000 ns/op\n").unwrap();
        let set = parse_file(&path, SourceFormat::Auto).unwrap();
        assert_eq!(set.get(QueryId::new(2)).unwrap().elapsed_secs, 0.005);
    }
}
