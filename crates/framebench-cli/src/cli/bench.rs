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

//! Benchmark commands: comparison and presets.

use crate::commands::{self, CompareOptions};
use crate::error::CliError;
use clap::Subcommand;
use framebench::fixtures::DEFAULT_RESULTS_DIR;
use framebench::reporters::ReportLabels;
use framebench::{DatasetSize, QuerySelector, SourceFormat};
use std::path::PathBuf;

/// Benchmark commands.
#[derive(Subcommand)]
pub enum BenchCommands {
    /// Compare two engines' result files
    ///
    /// Reads each file (pytest-benchmark JSON, Go benchmark text, a
    /// `Summary:` block or suite JSON), normalizes the timings and prints a
    /// side-by-side table of B against A. Without --a/--b the files are
    /// taken from --results-dir: `<label>_<tier>` for --size, else the
    /// newest file of each label. A missing file or two files without a
    /// common query print a diagnostic and no table.
    Compare {
        /// Engine A (baseline) result file
        #[arg(long, value_name = "FILE", requires = "b")]
        a: Option<PathBuf>,

        /// Engine B result file
        #[arg(long, value_name = "FILE", requires = "a")]
        b: Option<PathBuf>,

        /// Compare the result files of this size preset
        #[arg(short, long, conflicts_with_all = ["a", "b"])]
        size: Option<DatasetSize>,

        /// Directory holding `<engine>_<tier>` result files
        #[arg(long, value_name = "DIR", default_value = DEFAULT_RESULTS_DIR)]
        results_dir: PathBuf,

        /// Format of A (auto, pytest, go, summary, suite)
        #[arg(long, default_value = "auto")]
        format_a: SourceFormat,

        /// Format of B (auto, pytest, go, summary, suite)
        #[arg(long, default_value = "auto")]
        format_b: SourceFormat,

        /// Display name of engine A
        #[arg(long, default_value = "A")]
        label_a: String,

        /// Display name of engine B
        #[arg(long, default_value = "B")]
        label_b: String,

        /// Only compare these queries (q3, 1-6, q1..q6)
        #[arg(short, long)]
        queries: Option<QuerySelector>,

        /// Report title
        #[arg(long, default_value = "Groupby comparison")]
        title: String,

        /// Also write the report as JSON
        #[arg(long, value_name = "PATH")]
        json: Option<PathBuf>,

        /// Also write the report as Markdown
        #[arg(long, value_name = "PATH")]
        markdown: Option<PathBuf>,
    },

    /// Show size presets and the dataset schema
    Info {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

impl BenchCommands {
    /// Execute the benchmark command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            BenchCommands::Compare {
                a,
                b,
                size,
                results_dir,
                format_a,
                format_b,
                label_a,
                label_b,
                queries,
                title,
                json,
                markdown,
            } => {
                let options = CompareOptions {
                    a,
                    b,
                    size,
                    results_dir,
                    format_a,
                    format_b,
                    labels: ReportLabels::new(label_a, label_b),
                    queries,
                    title,
                    json,
                    markdown,
                };
                commands::compare(&options).map(|_| ())
            }
            BenchCommands::Info { json } => commands::info(json),
        }
    }
}
