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

//! CLI command definitions and argument parsing.
//!
//! Commands are organized into the following modules:
//!
//! - [`bench`]: Benchmark commands (compare, info)
//! - [`data`]: Data commands (generate, hash)

mod bench;
mod data;

use crate::error::CliError;
use clap::{ArgAction, Parser, Subcommand};

pub use bench::BenchCommands;
pub use data::DataCommands;

/// framebench - dataframe engine benchmark harness
///
/// Generates deterministic datasets and compares the timing results of two
/// engines.
///
/// # Examples
///
/// ```bash
/// # Write the small grouping dataset to ./data
/// framebench generate --size small --data-dir data
///
/// # Compare pytest-benchmark output against Go benchmark output
/// framebench compare --a polars.json --b golars.txt --label-a polars --label-b golars
///
/// # Compare results/polars_light.txt against results/golars_light.txt
/// framebench compare --size small --label-a polars --label-b golars
/// ```
#[derive(Parser)]
#[command(name = "framebench")]
#[command(author, version, about = "framebench - dataframe engine benchmark harness", long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log directive for the requested verbosity.
    pub fn log_directive(&self) -> &'static str {
        match self.verbose {
            0 => "framebench=warn",
            1 => "framebench=info",
            _ => "framebench=debug",
        }
    }
}

/// Top-level CLI commands enum.
///
/// ```text
/// Commands
/// ├── Bench (compare, info)
/// └── Data (generate, hash)
/// ```
#[derive(Subcommand)]
pub enum Commands {
    // Benchmark commands - flattened to appear at top level
    #[command(flatten)]
    Bench(BenchCommands),

    // Data commands - flattened to appear at top level
    #[command(flatten)]
    Data(DataCommands),
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the command fails; see the individual commands.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Bench(cmd) => cmd.execute(),
            Commands::Data(cmd) => cmd.execute(),
        }
    }
}
