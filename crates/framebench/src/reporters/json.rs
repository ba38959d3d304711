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

//! JSON export for comparison reports.

use crate::error::{BenchError, Result};
use crate::reporters::types::ComparisonReport;
use std::fs;
use std::path::Path;

/// Serializes a report as pretty JSON.
pub fn to_json(report: &ComparisonReport) -> Result<String> {
    serde_json::to_string_pretty(report).map_err(|e| BenchError::Serialization(e.to_string()))
}

/// Exports a comparison report as JSON.
///
/// # Arguments
///
/// * `report` - The report to export
/// * `path` - Output file path
pub fn export_json(report: &ComparisonReport, path: &Path) -> Result<()> {
    let json = to_json(report)?;
    fs::write(path, json).map_err(|e| BenchError::from_io(path, e))
}
