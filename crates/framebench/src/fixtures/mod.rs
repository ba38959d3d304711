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

//! Dataset fixtures.
//!
//! - **csv_file**: CSV persistence with type inference on read
//! - **loader**: External-directory loading with generation fallback
//! - **results**: Locating engine result files by size or recency

pub mod csv_file;
pub mod loader;
pub mod results;

// Re-export commonly used types and functions
pub use csv_file::{read_csv, read_dataset, write_csv, write_dataset};
pub use loader::{dataset_file_name, dataset_path, file_sha256, load_or_generate, LoadedDataset};
pub use results::{latest_results_file, results_file_for_size, DEFAULT_RESULTS_DIR};
