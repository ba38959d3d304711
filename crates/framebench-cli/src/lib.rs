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

//! framebench CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **compare**: Compare two engines' result files and print the table
//! - **info**: Show size presets, warmup counts and the dataset schema
//! - **generate**: Write a deterministic synthetic dataset as CSV
//! - **hash**: Print the SHA-256 of data files
//!
//! # Exit status
//!
//! `compare` exits 0 after a missing input file, when `--results-dir` holds
//! no file for an engine, or when the two files share no query; it prints a diagnostic on stderr and no table. Every other
//! failure prints `Error: ...` and exits 1.
//!
//! # Examples
//!
//! ```no_run
//! use framebench_cli::commands::{compare, CompareOptions};
//!
//! # fn main() -> Result<(), framebench_cli::error::CliError> {
//! let report = compare(&CompareOptions::new("polars.json", "golars.txt"))?;
//! if let Some(report) = report {
//!     println!("{} queries compared", report.query_count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
