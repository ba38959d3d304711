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

//! Comparison reporters.
//!
//! # Modules
//!
//! - `types`: Report data structures
//! - `console`: Fixed-width table rendering
//! - `json`: JSON export
//! - `markdown`: Markdown export

pub mod console;
pub mod json;
pub mod markdown;
pub mod types;

// Re-export commonly used types
pub use console::{print_report, render_report, render_table};
pub use json::{export_json, to_json};
pub use markdown::{export_markdown, to_markdown};
pub use types::{standard_notes, ComparisonReport, ReportLabels};
