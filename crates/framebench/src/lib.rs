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

//! framebench: Dataframe Engine Benchmark Harness
//!
//! Measures two tabular-data engines on the same battery of aggregation
//! queries and reports how the engine under evaluation (B) fares against
//! the baseline (A).
//!
//! ## Features
//!
//! - **Dataset generators**: Deterministic grouping, wide and join datasets,
//!   with optional null masks and key sorting
//! - **Timing harness**: Warmup + iteration measurement with failure isolation
//! - **Result parsers**: pytest-benchmark JSON, Go benchmark text, summary
//!   blocks and suite JSON, all normalized to seconds
//! - **Comparison**: Per-query ratios, status buckets and totals
//! - **Reporters**: Console table, JSON and Markdown export
//!
//! ## Usage
//!
//! ```
//! use framebench::{compare, parse, render_table, ReportLabels, SourceFormat};
//!
//! let a = parse(r#"{"benchmarks": [{"name": "test_groupby_h2oai_q1", "stats": {"median": 0.002}}]}"#,
//!               SourceFormat::Auto);
//! let b = parse("BenchmarkGroupByQ1_Small-8  100  3000000 ns/op  2048 B/op", SourceFormat::Auto);
//!
//! let comparison = compare(&a, &b).unwrap();
//! println!("{}", render_table(&comparison, &ReportLabels::new("polars", "golars")));
//! ```

pub mod core;
pub mod error;
pub mod fixtures;
pub mod generators;
pub mod harness;
pub mod parsers;
pub mod reporters;

// Re-export key types for convenience
pub use crate::core::{BenchConfig, DataSource, QueryId, QuerySelector, Timing};
pub use error::{validate_dataset_size, BenchError, Result, MAX_DATASET_SIZE};
pub use generators::{generate, generate_with, ColumnProfile, Dataset, DatasetSize, GeneratorConfig};
pub use harness::{compare, compare_selected, Comparison, Engine, Status, SuiteRunner};
pub use parsers::{parse, parse_file, MetricRecord, ResultSet, SourceFormat};
pub use reporters::{render_table, ComparisonReport, ReportLabels};
