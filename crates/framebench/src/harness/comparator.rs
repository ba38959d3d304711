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

//! Side-by-side comparison of two result sets.
//!
//! Rows cover every query either side reported, in ascending query order.
//! A query only one side reported gets a row with the other side blank and
//! no ratio. Totals only sum queries both sides reported.

use crate::core::query::{QueryId, QuerySelector};
use crate::error::{BenchError, Result};
use crate::parsers::ResultSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Ratio bucket of engine B relative to engine A.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// Ratio below 2.0.
    Good,
    /// Ratio in `[2.0, 5.0)`.
    Ok,
    /// Ratio of 5.0 or more.
    Slow,
}

impl Status {
    /// Lowest ratio classified [`Status::Ok`].
    pub const OK_THRESHOLD: f64 = 2.0;

    /// Lowest ratio classified [`Status::Slow`].
    pub const SLOW_THRESHOLD: f64 = 5.0;

    /// Classifies a B/A ratio.
    pub fn classify(ratio: f64) -> Status {
        if ratio < Self::OK_THRESHOLD {
            Status::Good
        } else if ratio < Self::SLOW_THRESHOLD {
            Status::Ok
        } else {
            Status::Slow
        }
    }

    /// Lowercase label.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Good => "good",
            Status::Ok => "ok",
            Status::Slow => "slow",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One query of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Query id.
    pub query: QueryId,
    /// Engine A seconds.
    pub time_a: Option<f64>,
    /// Engine B seconds.
    pub time_b: Option<f64>,
    /// `time_b / time_a`, when both are present and A is non-zero.
    pub ratio: Option<f64>,
    /// Bucket of `ratio`.
    pub status: Option<Status>,
    /// Engine B bytes per operation.
    pub memory_b: Option<u64>,
}

impl ComparisonRow {
    /// Returns true when both sides reported the query.
    pub fn is_paired(&self) -> bool {
        self.time_a.is_some() && self.time_b.is_some()
    }
}

/// Sums over the queries both sides reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    /// Number of queries summed.
    pub queries: usize,
    /// Engine A seconds.
    pub sum_a: f64,
    /// Engine B seconds.
    pub sum_b: f64,
    /// `sum_b / sum_a`, when `sum_a` is non-zero.
    pub ratio: Option<f64>,
    /// Bucket of `ratio`.
    pub status: Option<Status>,
}

/// A full comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    /// Rows in ascending query order.
    pub rows: Vec<ComparisonRow>,
    /// Totals over paired rows.
    pub totals: Totals,
}

impl Comparison {
    /// Returns true when any row carries an engine B memory figure.
    pub fn has_memory(&self) -> bool {
        self.rows.iter().any(|row| row.memory_b.is_some())
    }

    /// Looks up the row of a query.
    pub fn row(&self, query: QueryId) -> Option<&ComparisonRow> {
        self.rows.iter().find(|row| row.query == query)
    }
}

fn ratio_of(a: f64, b: f64) -> Option<f64> {
    (a > 0.0).then(|| b / a)
}

/// Compares engine B against engine A.
///
/// # Arguments
///
/// * `a` - Baseline results
/// * `b` - Results under evaluation
///
/// # Errors
///
/// Returns [`BenchError::EmptyOverlap`] when no query appears in both sets.
pub fn compare(a: &ResultSet, b: &ResultSet) -> Result<Comparison> {
    let ids: BTreeSet<QueryId> = a.ids().chain(b.ids()).collect();

    let mut rows = Vec::with_capacity(ids.len());
    let mut totals = Totals {
        queries: 0,
        sum_a: 0.0,
        sum_b: 0.0,
        ratio: None,
        status: None,
    };

    for query in ids {
        let rec_a = a.get(query);
        let rec_b = b.get(query);
        let time_a = rec_a.map(|r| r.elapsed_secs);
        let time_b = rec_b.map(|r| r.elapsed_secs);

        let ratio = match (time_a, time_b) {
            (Some(ta), Some(tb)) => {
                totals.queries += 1;
                totals.sum_a += ta;
                totals.sum_b += tb;
                ratio_of(ta, tb)
            }
            _ => None,
        };

        rows.push(ComparisonRow {
            query,
            time_a,
            time_b,
            ratio,
            status: ratio.map(Status::classify),
            memory_b: rec_b.and_then(|r| r.memory_bytes),
        });
    }

    if totals.queries == 0 {
        return Err(BenchError::EmptyOverlap);
    }

    totals.ratio = ratio_of(totals.sum_a, totals.sum_b);
    totals.status = totals.ratio.map(Status::classify);

    Ok(Comparison { rows, totals })
}

/// Compares only the queries the selector covers.
pub fn compare_selected(a: &ResultSet, b: &ResultSet, selector: &QuerySelector) -> Result<Comparison> {
    let mut a = a.clone();
    let mut b = b.clone();
    a.retain_selected(selector);
    b.retain_selected(selector);
    compare(&a, &b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::MetricRecord;

    fn set(records: &[(u32, f64)]) -> ResultSet {
        records
            .iter()
            .map(|&(n, secs)| MetricRecord::new(QueryId::new(n), secs))
            .collect()
    }

    #[test]
    fn test_status_boundaries() {
        assert_eq!(Status::classify(1.99), Status::Good);
        assert_eq!(Status::classify(2.0), Status::Ok);
        assert_eq!(Status::classify(4.99), Status::Ok);
        assert_eq!(Status::classify(5.0), Status::Slow);
        assert_eq!(Status::classify(0.1), Status::Good);
    }

    #[test]
    fn test_totals_skip_one_sided() {
        let a = set(&[(1, 1.0), (2, 3.0)]);
        let b = set(&[(1, 1.5)]);
        let cmp = compare(&a, &b).unwrap();

        assert_eq!(cmp.rows.len(), 2);
        assert_eq!(cmp.totals.queries, 1);
        assert_eq!(cmp.totals.sum_a, 1.0);
        assert_eq!(cmp.totals.sum_b, 1.5);
        assert_eq!(cmp.totals.ratio, Some(1.5));
        assert_eq!(cmp.totals.status, Some(Status::Good));

        let lonely = cmp.row(QueryId::new(2)).unwrap();
        assert_eq!(lonely.time_a, Some(3.0));
        assert_eq!(lonely.time_b, None);
        assert_eq!(lonely.ratio, None);
        assert_eq!(lonely.status, None);
        assert!(!lonely.is_paired());
    }

    #[test]
    fn test_rows_in_numeric_order() {
        let a = set(&[(10, 1.0), (2, 1.0)]);
        let b = set(&[(1, 1.0), (10, 2.0)]);
        let cmp = compare(&a, &b).unwrap();
        let ids: Vec<String> = cmp.rows.iter().map(|r| r.query.to_string()).collect();
        assert_eq!(ids, vec!["q1", "q2", "q10"]);
    }

    #[test]
    fn test_ratio_and_status() {
        let a = set(&[(1, 0.5), (2, 1.0)]);
        let b = set(&[(1, 1.0), (2, 6.0)]);
        let cmp = compare(&a, &b).unwrap();
        assert_eq!(cmp.row(QueryId::new(1)).unwrap().ratio, Some(2.0));
        assert_eq!(cmp.row(QueryId::new(1)).unwrap().status, Some(Status::Ok));
        assert_eq!(cmp.row(QueryId::new(2)).unwrap().status, Some(Status::Slow));
        assert_eq!(cmp.totals.ratio, Some(7.0 / 1.5));
    }

    #[test]
    fn test_zero_baseline_has_no_ratio() {
        let a = set(&[(1, 0.0)]);
        let b = set(&[(1, 1.0)]);
        let cmp = compare(&a, &b).unwrap();
        assert_eq!(cmp.rows[0].ratio, None);
        assert_eq!(cmp.totals.ratio, None);
    }

    #[test]
    fn test_empty_overlap() {
        let a = set(&[(1, 1.0)]);
        let b = set(&[(2, 1.0)]);
        assert_eq!(compare(&a, &b).unwrap_err(), BenchError::EmptyOverlap);
        assert_eq!(
            compare(&ResultSet::new(), &ResultSet::new()).unwrap_err(),
            BenchError::EmptyOverlap
        );
    }

    #[test]
    fn test_memory_from_b_only() {
        let a: ResultSet = [MetricRecord::new(QueryId::new(1), 1.0).with_memory(1)]
            .into_iter()
            .collect();
        let b = set(&[(1, 1.0)]);
        let cmp = compare(&a, &b).unwrap();
        assert!(!cmp.has_memory());

        let b: ResultSet = [MetricRecord::new(QueryId::new(1), 1.0).with_memory(4096)]
            .into_iter()
            .collect();
        let cmp = compare(&a, &b).unwrap();
        assert!(cmp.has_memory());
        assert_eq!(cmp.rows[0].memory_b, Some(4096));
    }

    #[test]
    fn test_compare_selected() {
        let a = set(&[(1, 1.0), (2, 1.0), (7, 1.0)]);
        let b = set(&[(1, 2.0), (2, 2.0), (7, 2.0)]);
        let cmp = compare_selected(&a, &b, &QuerySelector::default()).unwrap();
        assert_eq!(cmp.rows.len(), 2);

        let only_seven = compare_selected(&a, &b, &"q7".parse().unwrap()).unwrap();
        assert_eq!(only_seven.rows.len(), 1);
        assert!(compare_selected(&a, &b, &"q3-q6".parse().unwrap()).is_err());
    }
}
