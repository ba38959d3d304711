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

//! Structured benchmark JSON (pytest-benchmark style).
//!
//! ```json
//! {"benchmarks": [{"name": "test_groupby_h2oai_q1", "stats": {"median": 0.0042}}]}
//! ```
//!
//! The median, in seconds, becomes the elapsed time. Entries whose name
//! carries no `_h2oai_q<n>` token are ignored.

use super::result_set::{MetricRecord, ResultSet};
use crate::core::query::QueryId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, warn};

static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)_h2oai_(q\d+)").expect("valid benchmark name pattern"));

/// Extracts the query id from a benchmark entry name.
pub fn query_from_name(name: &str) -> Option<QueryId> {
    NAME_PATTERN
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parses a benchmark JSON document.
pub fn parse_benchmark_json(raw: &str) -> ResultSet {
    let document: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "benchmark document is not valid JSON; no results taken");
            return ResultSet::new();
        }
    };

    let Some(entries) = document.get("benchmarks").and_then(Value::as_array) else {
        warn!("benchmark document has no 'benchmarks' list");
        return ResultSet::new();
    };

    entries.iter().filter_map(parse_entry).collect()
}

fn parse_entry(entry: &Value) -> Option<MetricRecord> {
    let name = entry.get("name").and_then(Value::as_str)?;
    let Some(query) = query_from_name(name) else {
        debug!(name, "skipping benchmark without a query id");
        return None;
    };

    let median = entry
        .get("stats")
        .and_then(|stats| stats.get("median"))
        .and_then(Value::as_f64)
        .filter(|m| m.is_finite() && *m >= 0.0);

    match median {
        Some(secs) => Some(MetricRecord::new(query, secs)),
        None => {
            debug!(name, "skipping benchmark without a usable median");
            None
        }
    }
}
