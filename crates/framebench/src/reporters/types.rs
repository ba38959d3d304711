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

//! Report types and structures.

use crate::harness::comparator::{Comparison, Status};
use serde::{Deserialize, Serialize};

/// Display names of the two engines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLabels {
    /// Baseline engine.
    pub engine_a: String,
    /// Engine under evaluation.
    pub engine_b: String,
}

impl ReportLabels {
    /// Creates labels.
    pub fn new(engine_a: impl Into<String>, engine_b: impl Into<String>) -> Self {
        Self {
            engine_a: engine_a.into(),
            engine_b: engine_b.into(),
        }
    }
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self::new("A", "B")
    }
}

/// The notes every comparison carries: ratio direction, status buckets and
/// how totals are computed.
pub fn standard_notes(labels: &ReportLabels) -> Vec<String> {
    vec![
        format!(
            "Ratio: {} time / {} time (higher is worse for {})",
            labels.engine_b, labels.engine_a, labels.engine_b
        ),
        format!(
            "Status: {} below {:.1}x, {} below {:.1}x, {} otherwise",
            Status::Good,
            Status::OK_THRESHOLD,
            Status::Ok,
            Status::SLOW_THRESHOLD,
            Status::Slow
        ),
        "TOTAL only sums queries reported by both engines".to_string(),
    ]
}

/// A comparison with its presentation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Report title.
    pub title: String,
    /// Report timestamp (RFC 3339).
    pub timestamp: String,
    /// Engine labels.
    pub labels: ReportLabels,
    /// The comparison itself.
    pub comparison: Comparison,
    /// Notes, starting with [`standard_notes`].
    pub notes: Vec<String>,
}

impl ComparisonReport {
    /// Creates a report stamped with the current time.
    pub fn new(title: impl Into<String>, labels: ReportLabels, comparison: Comparison) -> Self {
        let notes = standard_notes(&labels);
        Self {
            title: title.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            labels,
            comparison,
            notes,
        }
    }

    /// Adds a note.
    pub fn add_note(&mut self, note: impl Into<String>) {
        self.notes.push(note.into());
    }

    /// Number of compared queries.
    pub fn query_count(&self) -> usize {
        self.comparison.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::QueryId;
    use crate::harness::compare;
    use crate::parsers::{MetricRecord, ResultSet};

    fn comparison() -> Comparison {
        let a: ResultSet = [MetricRecord::new(QueryId::new(1), 1.0)].into_iter().collect();
        let b: ResultSet = [MetricRecord::new(QueryId::new(1), 3.0)].into_iter().collect();
        compare(&a, &b).unwrap()
    }

    #[test]
    fn test_standard_notes_name_engines() {
        let notes = standard_notes(&ReportLabels::new("polars", "golars"));
        assert_eq!(notes.len(), 3);
        assert!(notes[0].contains("golars time / polars time"));
        assert!(notes[1].contains("2.0x"));
        assert!(notes[1].contains("5.0x"));
    }

    #[test]
    fn test_report_creation() {
        let mut report = ComparisonReport::new("Groupby", ReportLabels::default(), comparison());
        report.add_note("q4 failed on B");

        assert_eq!(report.title, "Groupby");
        assert_eq!(report.query_count(), 1);
        assert_eq!(report.notes.len(), 4);
        assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
    }
}
