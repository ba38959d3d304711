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

//! CLI command implementations

mod compare;
mod generate;
mod hash;
mod info;

pub use compare::{compare, resolve_inputs, CompareOptions};
pub use generate::{default_output_path, generate, GenerateOptions};
pub use hash::hash;
pub use info::{info, info_json};

use crate::error::CliError;
use std::io::{self, Write};

/// Write content to stdout.
///
/// # Errors
///
/// Returns `Err` if writing to stdout fails.
pub fn write_stdout(content: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|e| CliError::io_error("<stdout>", e))
}
