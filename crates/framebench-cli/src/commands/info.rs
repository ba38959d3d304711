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

//! Info command - size presets and dataset schema

use super::write_stdout;
use crate::error::CliError;
use framebench::generators::{generate_grouping, JoinKeyKind, WidthPreset, GROUPING_COLUMNS};
use framebench::{BenchConfig, DatasetSize};
use serde_json::{json, Value};
use std::fmt::Write;

/// Value domain of each grouping column, `K` groups over `N` rows.
const GROUPING_DOMAINS: [&str; 9] = [
    "id001..idK",
    "id001..idK",
    "id0000000001..N/K",
    "1..=K",
    "1..=K",
    "1..=N/K",
    "1..=5",
    "1..=15",
    "[0, 100), 6 digits",
];

fn column_kinds() -> Result<Vec<&'static str>, CliError> {
    let sample = generate_grouping(1, 1, 0)?;
    Ok(sample.columns().iter().map(|c| c.data.kind()).collect())
}

fn render() -> Result<String, CliError> {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = writeln!(out, "Dataset sizes:");
    let _ = writeln!(out, "  {:<14}{:>12}{:>10}{:>8}", "Size", "Rows", "Groups", "Warmup");
    for size in DatasetSize::all() {
        let _ = writeln!(
            out,
            "  {:<14}{:>12}{:>10}{:>8}",
            size.label(),
            size.rows(),
            size.groups(),
            BenchConfig::default_warmup_for_rows(size.rows())
        );
    }

    let _ = writeln!(out, "\nGrouping schema:");
    let _ = writeln!(out, "  {:<8}{:<16}{}", "Column", "Type", "Values");
    for ((name, kind), domain) in GROUPING_COLUMNS.iter().zip(column_kinds()?).zip(GROUPING_DOMAINS) {
        let _ = writeln!(out, "  {:<8}{:<16}{}", name, kind, domain);
    }

    let _ = writeln!(out, "\nWidth presets (str, int, float):");
    for preset in WidthPreset::all() {
        let (s, i, f) = preset.widths();
        let _ = writeln!(out, "  {:<14}{}, {}, {}", preset.name(), s, i, f);
    }

    let _ = writeln!(out, "\nJoin key kinds:");
    for kind in JoinKeyKind::all() {
        let _ = writeln!(out, "  {:<14}{}", kind.to_string(), kind.key_columns().join(", "));
    }

    Ok(out)
}

/// The same information as [`info`], as a JSON document.
pub fn info_json() -> Result<Value, CliError> {
    let sizes: Vec<Value> = DatasetSize::all()
        .iter()
        .map(|size| {
            json!({
                "label": size.label(),
                "rows": size.rows(),
                "groups": size.groups(),
                "warmup": BenchConfig::default_warmup_for_rows(size.rows()),
            })
        })
        .collect();

    let schema: Vec<Value> = GROUPING_COLUMNS
        .iter()
        .zip(column_kinds()?)
        .zip(GROUPING_DOMAINS)
        .map(|((name, kind), domain)| json!({ "name": name, "kind": kind, "values": domain }))
        .collect();

    let presets: Vec<Value> = WidthPreset::all()
        .iter()
        .map(|preset| {
            let (strings, integers, floats) = preset.widths();
            json!({
                "name": preset.name(),
                "strings": strings,
                "integers": integers,
                "floats": floats,
            })
        })
        .collect();

    Ok(json!({ "sizes": sizes, "grouping_schema": schema, "width_presets": presets }))
}

/// Print the size table and the grouping schema.
///
/// # Errors
///
/// Returns `Err` if writing to stdout fails.
pub fn info(as_json: bool) -> Result<(), CliError> {
    if as_json {
        let mut text = serde_json::to_string_pretty(&info_json()?)?;
        text.push('\n');
        write_stdout(&text)
    } else {
        write_stdout(&render()?)
    }
}
