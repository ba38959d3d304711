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

//! Compare command - offline comparison of two result files

use super::write_stdout;
use crate::error::CliError;
use framebench::fixtures::{latest_results_file, results_file_for_size, DEFAULT_RESULTS_DIR};
use framebench::harness::{compare as compare_sets, compare_selected};
use framebench::parsers::{parse_file, suite_data_digest, ResultSet, SourceFormat};
use framebench::reporters::{
    export_json, export_markdown, render_report, ComparisonReport, ReportLabels,
};
use framebench::{BenchError, DatasetSize, QuerySelector};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Inputs of a comparison run.
///
/// Explicit paths win. Otherwise `size` selects `<engine>_<tier>` files in
/// `results_dir`, and without a size the newest file of each engine is
/// taken. Engine names are the lowercased labels.
#[derive(Debug, Clone)]
pub struct CompareOptions {
    /// Engine A (baseline) results.
    pub a: Option<PathBuf>,
    /// Engine B results.
    pub b: Option<PathBuf>,
    /// Selects the result files of this size from `results_dir`.
    pub size: Option<DatasetSize>,
    /// Directory searched when no paths are given.
    pub results_dir: PathBuf,
    /// Format of `a`.
    pub format_a: SourceFormat,
    /// Format of `b`.
    pub format_b: SourceFormat,
    /// Engine labels for the table.
    pub labels: ReportLabels,
    /// Restricts the comparison to these queries.
    pub queries: Option<QuerySelector>,
    /// Report title.
    pub title: String,
    /// Also write the report as JSON here.
    pub json: Option<PathBuf>,
    /// Also write the report as Markdown here.
    pub markdown: Option<PathBuf>,
}

impl CompareOptions {
    /// Options comparing `a` against `b` with auto-detected formats.
    pub fn new(a: impl Into<PathBuf>, b: impl Into<PathBuf>) -> Self {
        Self {
            a: Some(a.into()),
            b: Some(b.into()),
            ..Self::discover(DEFAULT_RESULTS_DIR)
        }
    }

    /// Options that locate both result files in `results_dir`.
    pub fn discover(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            a: None,
            b: None,
            size: None,
            results_dir: results_dir.into(),
            format_a: SourceFormat::Auto,
            format_b: SourceFormat::Auto,
            labels: ReportLabels::default(),
            queries: None,
            title: "Groupby comparison".to_string(),
            json: None,
            markdown: None,
        }
    }
}

fn engine_name(label: &str) -> String {
    label.trim().to_lowercase()
}

fn resolve_one(
    options: &CompareOptions,
    explicit: Option<&PathBuf>,
    label: &str,
) -> Result<PathBuf, BenchError> {
    if let Some(path) = explicit {
        return Ok(path.clone());
    }
    let engine = engine_name(label);
    let path = match options.size {
        Some(size) => results_file_for_size(&options.results_dir, &engine, size),
        None => latest_results_file(&options.results_dir, &engine)?,
    };
    debug!(engine = %engine, path = %path.display(), "resolved result file");
    Ok(path)
}

/// Result files to compare, A first.
///
/// # Errors
///
/// [`BenchError::NotFound`] when discovery finds no file for an engine.
pub fn resolve_inputs(options: &CompareOptions) -> Result<(PathBuf, PathBuf), BenchError> {
    let a = resolve_one(options, options.a.as_ref(), &options.labels.engine_a)?;
    let b = resolve_one(options, options.b.as_ref(), &options.labels.engine_b)?;
    Ok((a, b))
}

fn load_pair(
    a_path: &Path,
    b_path: &Path,
    options: &CompareOptions,
) -> Result<(ResultSet, ResultSet), BenchError> {
    let a = parse_file(a_path, options.format_a)?;
    let b = parse_file(b_path, options.format_b)?;
    info!(
        a = %a_path.display(),
        b = %b_path.display(),
        queries_a = a.len(),
        queries_b = b.len(),
        "loaded result files"
    );
    Ok((a, b))
}

fn data_digest(path: &Path) -> Option<String> {
    std::fs::read_to_string(path)
        .ok()
        .and_then(|raw| suite_data_digest(&raw))
}

/// Note for two suite runs recorded against different data files.
fn digest_note(a_path: &Path, b_path: &Path) -> Option<String> {
    match (data_digest(a_path), data_digest(b_path)) {
        (Some(a), Some(b)) if a != b => Some(format!(
            "Inputs were measured on different data (sha256 {} vs {})",
            &a[..a.len().min(12)],
            &b[..b.len().min(12)]
        )),
        _ => None,
    }
}

/// Compare two result files and print the table.
///
/// A missing input file or two files without a common query end the command
/// with a diagnostic on stderr and no table; both return `Ok(None)`.
///
/// # Errors
///
/// Returns `Err` for unreadable inputs and failed exports.
pub fn compare(options: &CompareOptions) -> Result<Option<ComparisonReport>, CliError> {
    let outcome = resolve_inputs(options).and_then(|(a_path, b_path)| {
        let (a, b) = load_pair(&a_path, &b_path, options)?;
        let comparison = match &options.queries {
            Some(selector) => compare_selected(&a, &b, selector)?,
            None => compare_sets(&a, &b)?,
        };
        Ok((comparison, digest_note(&a_path, &b_path)))
    });

    let (comparison, data_note) = match outcome {
        Ok(outcome) => outcome,
        Err(err) if err.is_clean_abort() => {
            warn!(error = %err, "comparison skipped");
            eprintln!("{}", err);
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };

    let mut report = ComparisonReport::new(options.title.clone(), options.labels.clone(), comparison);
    if let Some(selector) = &options.queries {
        report.add_note(format!("Queries restricted to {}", selector));
    }
    if let Some(note) = data_note {
        warn!(note = %note, "result files disagree on the data file");
        report.add_note(note);
    }

    write_stdout("\n")?;
    write_stdout(&render_report(&report))?;

    if let Some(path) = &options.json {
        export_json(&report, path)?;
        info!(path = %path.display(), "wrote JSON report");
    }
    if let Some(path) = &options.markdown {
        export_markdown(&report, path)?;
        info!(path = %path.display(), "wrote Markdown report");
    }

    Ok(Some(report))
}
