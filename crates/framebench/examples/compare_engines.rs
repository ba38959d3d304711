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

//! Minimal in-process comparison of two engines.
//!
//! This example demonstrates:
//! - Implementing the `Engine` trait
//! - Running the query battery with `SuiteRunner`
//! - Printing and exporting the comparison report
//!
//! Run with:
//! ```bash
//! cargo run --package framebench --example compare_engines
//! ```

use framebench::generators::ColumnData;
use framebench::harness::EngineError;
use framebench::reporters::{export_markdown, print_report};
use framebench::{
    generate, BenchConfig, ColumnProfile, ComparisonReport, Dataset, DatasetSize, Engine, QueryId,
    ReportLabels, SuiteRunner,
};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Sums `v1` by a string key column.
struct KeyedSum<const ORDERED: bool>;

impl<const ORDERED: bool> KeyedSum<ORDERED> {
    fn key(query: QueryId) -> Result<&'static str, EngineError> {
        match query.number() {
            1 => Ok("id1"),
            2 => Ok("id2"),
            3 => Ok("id3"),
            _ => Err(format!("{} is not implemented", query).into()),
        }
    }
}

impl<const ORDERED: bool> Engine for KeyedSum<ORDERED> {
    fn name(&self) -> &str {
        if ORDERED {
            "btree"
        } else {
            "hash"
        }
    }

    fn run_query(&self, dataset: &Dataset, query: QueryId) -> Result<usize, EngineError> {
        let keys = match &dataset.column(Self::key(query)?).ok_or("missing key")?.data {
            ColumnData::GroupingStr(keys) => keys,
            _ => return Err("key column is not a string column".into()),
        };
        let values = match &dataset.column("v1").ok_or("missing v1")?.data {
            ColumnData::IntValue(values) => values,
            _ => return Err("v1 is not an integer column".into()),
        };

        if ORDERED {
            let mut sums: BTreeMap<&str, i64> = BTreeMap::new();
            for (key, value) in keys.iter().zip(values) {
                *sums.entry(key.as_str()).or_default() += value;
            }
            Ok(sums.len())
        } else {
            let mut sums: HashMap<&str, i64> = HashMap::new();
            for (key, value) in keys.iter().zip(values) {
                *sums.entry(key.as_str()).or_default() += value;
            }
            Ok(sums.len())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== In-process Comparison Example ===\n");

    // 1. Generate the small grouping dataset
    let size = DatasetSize::Small;
    let dataset = generate(size.rows(), size.groups(), ColumnProfile::Grouping, 0)?;
    println!("Generated {} rows x {} columns", dataset.rows(), dataset.columns().len());

    // 2. Run q1..q4 on both engines; q4 fails on both and is reported as such
    let config = BenchConfig::new(size).with_queries("q1-q4".parse()?);
    let runner = SuiteRunner::new(config);
    let (run_a, run_b, comparison) = runner.run_pair(&KeyedSum::<true>, &KeyedSum::<false>, &dataset)?;

    for (query, reason) in run_a.failures().into_iter().chain(run_b.failures()) {
        println!("{} failed: {}", query, reason);
    }

    // 3. Print and export
    let report = ComparisonReport::new("Keyed sum", ReportLabels::new("btree", "hash"), comparison);
    print_report(&report);

    let path = Path::new("target/demo/compare_engines.md");
    std::fs::create_dir_all("target/demo")?;
    export_markdown(&report, path)?;
    println!("\nMarkdown: {}", path.display());
    Ok(())
}
