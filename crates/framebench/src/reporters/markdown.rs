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

//! Markdown export for comparison reports.

use crate::error::{BenchError, Result};
use crate::reporters::console::megabytes;
use crate::reporters::types::ComparisonReport;
use std::fs;
use std::path::Path;

fn cell_secs(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.6}", v))
        .unwrap_or_else(|| "N/A".to_string())
}

fn cell_ratio(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}x", v))
        .unwrap_or_else(|| "N/A".to_string())
}

/// Renders a report as Markdown.
pub fn to_markdown(report: &ComparisonReport) -> String {
    let labels = &report.labels;
    let comparison = &report.comparison;
    let memory = comparison.has_memory();
    let mut md = String::new();

    md.push_str(&format!("# {}\n\n", report.title));
    md.push_str(&format!("**Timestamp:** {}\n\n", report.timestamp));

    md.push_str("## Results\n\n");
    md.push_str(&format!(
        "| Query | {} (s) | {} (s) | Ratio | Status |",
        labels.engine_a, labels.engine_b
    ));
    md.push_str(if memory { " Memory (MB) |\n" } else { "\n" });
    md.push_str("|-------|--------|--------|-------|--------|");
    md.push_str(if memory { "-------------|\n" } else { "\n" });

    for row in &comparison.rows {
        md.push_str(&format!(
            "| {} | {} | {} | {} | {} |",
            row.query,
            cell_secs(row.time_a),
            cell_secs(row.time_b),
            cell_ratio(row.ratio),
            row.status.map(|s| s.label()).unwrap_or("N/A"),
        ));
        if memory {
            let mb = row.memory_b.map(megabytes).unwrap_or_else(|| "N/A".to_string());
            md.push_str(&format!(" {} |", mb));
        }
        md.push('\n');
    }

    let totals = &comparison.totals;
    md.push_str(&format!(
        "| **TOTAL** | {} | {} | {} | {} |",
        cell_secs(Some(totals.sum_a)),
        cell_secs(Some(totals.sum_b)),
        cell_ratio(totals.ratio),
        totals.status.map(|s| s.label()).unwrap_or("N/A"),
    ));
    md.push_str(if memory { "  |\n" } else { "\n" });

    if !report.notes.is_empty() {
        md.push_str("\n## Notes\n\n");
        for note in &report.notes {
            md.push_str(&format!("- {}\n", note));
        }
    }

    md
}

/// Exports a comparison report as Markdown.
///
/// # Arguments
///
/// * `report` - The report to export
/// * `path` - Output file path
pub fn export_markdown(report: &ComparisonReport, path: &Path) -> Result<()> {
    fs::write(path, to_markdown(report)).map_err(|e| BenchError::from_io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::QueryId;
    use crate::harness::compare;
    use crate::parsers::{MetricRecord, ResultSet};
    use crate::reporters::types::ReportLabels;
    use tempfile::NamedTempFile;

    #[test]
    fn test_export_markdown() {
        let a: ResultSet = [(1, 1.0), (2, 1.0)]
            .into_iter()
            .map(|(n, s)| MetricRecord::new(QueryId::new(n), s))
            .collect();
        let b: ResultSet = [MetricRecord::new(QueryId::new(1), 2.5)].into_iter().collect();
        let report = ComparisonReport::new("Test", ReportLabels::default(), compare(&a, &b).unwrap());
        let temp = NamedTempFile::new().unwrap();

        export_markdown(&report, temp.path()).unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert!(content.contains("# Test"));
        assert!(content.contains("| Query | A (s) | B (s) | Ratio | Status |"));
        assert!(content.contains("| q1 | 1.000000 | 2.500000 | 2.50x | ok |"));
        assert!(content.contains("| q2 | 1.000000 | N/A | N/A | N/A |"));
        assert!(content.contains("| **TOTAL** | 1.000000 | 2.500000 | 2.50x | ok |"));
        assert!(content.contains("## Notes"));
        assert!(!content.contains("Memory"));
    }
}
