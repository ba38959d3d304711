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

//! Suite runner JSON.
//!
//! The document written by [`crate::harness::SuiteRun::to_output`] and by
//! external suite runners:
//!
//! ```json
//! {"engine": "b", "dataset": "small", "data_sha256": "ab12...",
//!  "results": [{"name": "groupby_q1", "ms": 2.5, "rows": 100}]}
//! ```

use super::result_set::{MetricRecord, ResultSet};
use crate::core::query::QueryId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

static QUERY_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:^|[^a-z0-9])(q\d+)(?:[^0-9]|$)").expect("valid query token pattern")
});

/// One timed query in a suite document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteResult {
    /// Query name; must contain a `q<n>` token to be recognized.
    pub name: String,
    /// Mean milliseconds per run.
    pub ms: f64,
    /// Result row count.
    #[serde(default)]
    pub rows: usize,
}

/// A suite document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuiteOutput {
    /// Engine name.
    pub engine: String,
    /// Dataset label.
    pub dataset: String,
    /// Dataset file, when one was loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,
    /// Hex SHA-256 of the dataset file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_sha256: Option<String>,
    /// Per-query results.
    pub results: Vec<SuiteResult>,
}

/// Finds a standalone `q<n>` token in a query name.
pub fn query_from_name(name: &str) -> Option<QueryId> {
    QUERY_TOKEN
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Returns the `data_sha256` of a suite document, if it has one.
pub fn suite_data_digest(raw: &str) -> Option<String> {
    let document: Value = serde_json::from_str(raw).ok()?;
    document
        .get("data_sha256")
        .and_then(Value::as_str)
        .filter(|digest| !digest.is_empty())
        .map(str::to_ascii_lowercase)
}

/// Parses a suite document. Entries that do not deserialize or carry no
/// query token are skipped.
pub fn parse_suite_json(raw: &str) -> ResultSet {
    let document: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "suite document is not valid JSON; no results taken");
            return ResultSet::new();
        }
    };

    let Some(entries) = document.get("results").and_then(Value::as_array) else {
        warn!("suite document has no 'results' list");
        return ResultSet::new();
    };

    entries
        .iter()
        .filter_map(|entry| match SuiteResult::deserialize(entry) {
            Ok(result) => Some(result),
            Err(e) => {
                debug!(error = %e, "skipping malformed suite entry");
                None
            }
        })
        .filter_map(|result| {
            let query = query_from_name(&result.name);
            if query.is_none() {
                debug!(name = %result.name, "skipping suite entry without a query id");
            }
            query
                .filter(|_| result.ms.is_finite() && result.ms >= 0.0)
                .map(|q| MetricRecord::new(q, result.ms / 1e3))
        })
        .collect()
}
