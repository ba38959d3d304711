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

//! Data commands: dataset generation and data file digests.

use crate::commands::{self, GenerateOptions};
use crate::error::CliError;
use clap::Subcommand;
use framebench::generators::DEFAULT_NULL_RATIO;
use framebench::{ColumnProfile, DatasetSize};
use std::path::PathBuf;

/// Data commands.
#[derive(Subcommand)]
pub enum DataCommands {
    /// Generate a synthetic dataset as CSV
    ///
    /// Output is deterministic for a given size, profile, seed, null ratio
    /// and sort flag. Without --output the file lands in --data-dir, then
    /// $FRAMEBENCH_DATA_DIR, then the working directory. Overriding --rows
    /// or --groups puts the counts in the file name.
    Generate {
        /// Size preset (small, medium-safe, medium, large, xlarge)
        #[arg(short, long, default_value = "small")]
        size: DatasetSize,

        /// Column profile (grouping, narrow, medium, wide, very_wide)
        #[arg(short, long, default_value = "grouping")]
        profile: ColumnProfile,

        /// Generator seed
        #[arg(long, default_value_t = 0)]
        seed: u32,

        /// Override the preset's row count
        #[arg(long)]
        rows: Option<usize>,

        /// Override the preset's group count
        #[arg(long)]
        groups: Option<usize>,

        /// Fraction of keys and measure rows written as empty cells
        #[arg(long = "null", value_name = "RATIO", default_value_t = DEFAULT_NULL_RATIO)]
        null_ratio: f64,

        /// Sort rows by the grouping columns
        #[arg(long)]
        sort: bool,

        /// Output file path
        #[arg(short, long, value_name = "PATH", conflicts_with = "data_dir")]
        output: Option<PathBuf>,

        /// Output directory
        #[arg(long, value_name = "DIR")]
        data_dir: Option<PathBuf>,
    },

    /// Print the SHA-256 of data files
    ///
    /// The digest matches the `data_sha256` that suite runs record for the
    /// file they loaded.
    Hash {
        /// Files to hash
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },
}

impl DataCommands {
    /// Execute the data command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command execution fails.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            DataCommands::Generate {
                size,
                profile,
                seed,
                rows,
                groups,
                null_ratio,
                sort,
                output,
                data_dir,
            } => {
                let options = GenerateOptions {
                    size,
                    profile,
                    seed,
                    rows,
                    groups,
                    null_ratio,
                    sort,
                    output,
                    data_dir,
                };
                commands::generate(&options).map(|_| ())
            }
            DataCommands::Hash { files } => commands::hash(&files).map(|_| ()),
        }
    }
}
