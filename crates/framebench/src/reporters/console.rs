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

//! Console reporter for comparisons.
//!
//! Renders a fixed-width table; widths grow to fit long engine labels.

use crate::harness::comparator::{Comparison, ComparisonRow, Status};
use crate::reporters::types::{standard_notes, ComparisonReport, ReportLabels};
use std::fmt::Write;

const NOT_AVAILABLE: &str = "N/A";
const QUERY_WIDTH: usize = 10;
const TIME_WIDTH: usize = 15;
const RATIO_WIDTH: usize = 10;
const STATUS_WIDTH: usize = 8;
const MEMORY_WIDTH: usize = 12;
const RULE_WIDTH: usize = 80;

struct Layout {
    header_a: String,
    header_b: String,
    width_a: usize,
    width_b: usize,
    memory: bool,
}

impl Layout {
    fn new(comparison: &Comparison, labels: &ReportLabels) -> Self {
        let header_a = format!("{} (s)", labels.engine_a);
        let header_b = format!("{} (s)", labels.engine_b);
        Self {
            width_a: TIME_WIDTH.max(header_a.len() + 1),
            width_b: TIME_WIDTH.max(header_b.len() + 1),
            header_a,
            header_b,
            memory: comparison.has_memory(),
        }
    }

    fn rule_width(&self) -> usize {
        let width = QUERY_WIDTH
            + self.width_a
            + self.width_b
            + RATIO_WIDTH
            + STATUS_WIDTH
            + if self.memory { MEMORY_WIDTH } else { 0 };
        width.max(RULE_WIDTH)
    }

    /// Cells: query, A, B, ratio, status, memory.
    fn line(&self, out: &mut String, cells: [&str; 6]) {
        let [query, a, b, ratio, status, memory] = cells;
        let mut line = format!(
            "{:<qw$}{:<aw$}{:<bw$}{:<rw$}{:<sw$}",
            query,
            a,
            b,
            ratio,
            status,
            qw = QUERY_WIDTH,
            aw = self.width_a,
            bw = self.width_b,
            rw = RATIO_WIDTH,
            sw = STATUS_WIDTH,
        );
        if self.memory {
            line.push_str(&format!("{:<mw$}", memory, mw = MEMORY_WIDTH));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
}

fn seconds(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.6}", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn ratio(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}x", v))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn status(value: Option<Status>) -> String {
    value
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Formats bytes as mebibytes with two decimals.
pub fn megabytes(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0 / 1024.0)
}

fn memory(row: &ComparisonRow) -> String {
    row.memory_b
        .map(megabytes)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn render_rows(comparison: &Comparison, labels: &ReportLabels) -> String {
    let layout = Layout::new(comparison, labels);
    let mut out = String::new();

    layout.line(
        &mut out,
        [
            "Query",
            &layout.header_a,
            &layout.header_b,
            "Ratio",
            "Status",
            "Memory (MB)",
        ],
    );
    out.push_str(&"-".repeat(layout.rule_width()));
    out.push('\n');

    for row in &comparison.rows {
        layout.line(
            &mut out,
            [
                &row.query.to_string(),
                &seconds(row.time_a),
                &seconds(row.time_b),
                &ratio(row.ratio),
                &status(row.status),
                &memory(row),
            ],
        );
    }

    let totals = &comparison.totals;
    out.push_str(&"-".repeat(layout.rule_width()));
    out.push('\n');
    layout.line(
        &mut out,
        [
            "TOTAL",
            &seconds(Some(totals.sum_a)),
            &seconds(Some(totals.sum_b)),
            &ratio(totals.ratio),
            &status(totals.status),
            "",
        ],
    );

    out
}

fn render_notes(out: &mut String, notes: &[String]) {
    out.push_str("\nNotes:\n");
    for note in notes {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "- {}", note);
    }
}

/// Renders the comparison table followed by the standard notes.
///
/// # Examples
///
/// ```
/// use framebench::core::QueryId;
/// use framebench::harness::compare;
/// use framebench::parsers::{MetricRecord, ResultSet};
/// use framebench::reporters::{render_table, ReportLabels};
///
/// let a: ResultSet = [MetricRecord::new(QueryId::new(1), 1.0)].into_iter().collect();
/// let b: ResultSet = [MetricRecord::new(QueryId::new(1), 1.5)].into_iter().collect();
/// let table = render_table(&compare(&a, &b).unwrap(), &ReportLabels::default());
/// assert!(table.contains("1.50x"));
/// ```
pub fn render_table(comparison: &Comparison, labels: &ReportLabels) -> String {
    let mut out = render_rows(comparison, labels);
    render_notes(&mut out, &standard_notes(labels));
    out
}

/// Renders a full report: banner, table and the report's notes.
pub fn render_report(report: &ComparisonReport) -> String {
    let mut out = String::new();
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    let _ = writeln!(
        out,
        "{}: {} vs {}",
        report.title, report.labels.engine_b, report.labels.engine_a
    );
    out.push_str(&"=".repeat(RULE_WIDTH));
    out.push('\n');
    out.push_str(&render_rows(&report.comparison, &report.labels));
    render_notes(&mut out, &report.notes);
    out
}

/// Prints the full report to stdout.
pub fn print_report(report: &ComparisonReport) {
    println!();
    print!("{}", render_report(report));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::query::QueryId;
    use crate::harness::compare;
    use crate::parsers::{MetricRecord, ResultSet};

    fn comparison(with_memory: bool) -> Comparison {
        let a: ResultSet = [(1, 1.0), (2, 3.0), (10, 0.5)]
            .into_iter()
            .map(|(n, s)| MetricRecord::new(QueryId::new(n), s))
            .collect();
        let b: ResultSet = [(1, 1.5), (10, 3.0)]
            .into_iter()
            .map(|(n, s)| {
                let record = MetricRecord::new(QueryId::new(n), s);
                if with_memory {
                    record.with_memory(2 * 1024 * 1024)
                } else {
                    record
                }
            })
            .collect();
        compare(&a, &b).unwrap()
    }

    #[test]
    fn test_table_layout() {
        let table = render_table(&comparison(false), &ReportLabels::new("polars", "golars"));
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[0].starts_with("Query"));
        assert!(lines[0].contains("polars (s)"));
        assert!(lines[0].contains("golars (s)"));
        assert!(lines[0].contains("Status"));
        assert!(!lines[0].contains("Memory"));

        assert!(lines[2].starts_with("q1 "));
        assert!(lines[3].starts_with("q2 "));
        assert!(lines[4].starts_with("q10"));
        assert!(lines[2].contains("1.50x") && lines[2].contains("good"));
        assert!(lines[3].contains("N/A"));
        assert!(lines[4].contains("6.00x") && lines[4].contains("slow"));
    }

    #[test]
    fn test_total_row() {
        let table = render_table(&comparison(false), &ReportLabels::default());
        let total = table.lines().find(|l| l.starts_with("TOTAL")).unwrap();
        assert!(total.contains("1.500000"));
        assert!(total.contains("4.500000"));
        assert!(total.contains("3.00x"));
        assert!(total.contains("ok"));
    }

    #[test]
    fn test_memory_column() {
        let table = render_table(&comparison(true), &ReportLabels::default());
        assert!(table.lines().next().unwrap().contains("Memory (MB)"));
        assert!(table.contains("2.00"));
    }

    #[test]
    fn test_notes_block() {
        let table = render_table(&comparison(false), &ReportLabels::new("A", "B"));
        assert!(table.contains("Notes:"));
        assert!(table.contains("B time / A time"));
    }

    #[test]
    fn test_render_report() {
        let mut report =
            ComparisonReport::new("Groupby", ReportLabels::default(), comparison(false));
        report.add_note("extra");
        let text = render_report(&report);
        assert!(text.starts_with(&"=".repeat(80)));
        assert!(text.contains("Groupby: B vs A"));
        assert!(text.contains("- extra"));
    }

    #[test]
    fn test_megabytes() {
        assert_eq!(megabytes(1024 * 1024), "1.00");
        assert_eq!(megabytes(0), "0.00");
    }
}
