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

//! Nine-column grouping dataset.
//!
//! Layout follows the H2O.ai db-benchmark groupby table: three string keys,
//! three integer keys and three measures. With `K` groups and `N` rows:
//!
//! | column | values |
//! |--------|--------|
//! | `id1`, `id2` | `id001..idK` |
//! | `id3` | `id0000000001..` over `N / K` tokens |
//! | `id4`, `id5` | `1..=K` |
//! | `id6` | `1..=N / K` |
//! | `v1` | `1..=5` |
//! | `v2` | `1..=15` |
//! | `v3` | `[0, 100)`, 6 digits |

use super::dataset::Dataset;
use super::{float_column, int_column, token_column};
use crate::error::{validate_dataset_size, BenchError, Result};
use tracing::debug;

/// Column names of the grouping profile, in order.
pub const GROUPING_COLUMNS: [&str; 9] = ["id1", "id2", "id3", "id4", "id5", "id6", "v1", "v2", "v3"];

/// Generates the grouping dataset.
///
/// # Arguments
///
/// * `rows` - Number of rows (max: [`crate::error::MAX_DATASET_SIZE`])
/// * `groups` - Grouping-key cardinality, `1..=rows`
/// * `seed` - Dataset seed
///
/// # Errors
///
/// Returns [`BenchError::DatasetTooLarge`] above the row limit and
/// [`BenchError::InvalidConfig`] for a group count outside `1..=rows`.
pub fn generate_grouping(rows: usize, groups: usize, seed: u32) -> Result<Dataset> {
    validate_dataset_size(rows)?;
    if groups == 0 || groups > rows {
        return Err(BenchError::invalid_config(
            "groups",
            format!("must be between 1 and the row count {}, got {}", rows, groups),
        ));
    }

    let per_group = rows / groups;
    debug!(rows, groups, seed, "generating grouping dataset");

    let columns = vec![
        token_column("id1", seed, 0, rows, groups, |i| format!("id{:03}", i)),
        token_column("id2", seed, 1, rows, groups, |i| format!("id{:03}", i)),
        token_column("id3", seed, 2, rows, per_group, |i| format!("id{:010}", i)),
        int_column("id4", seed, 3, rows, 1, groups, true),
        int_column("id5", seed, 4, rows, 1, groups, true),
        int_column("id6", seed, 5, rows, 1, per_group, true),
        int_column("v1", seed, 6, rows, 1, 5, false),
        int_column("v2", seed, 7, rows, 1, 15, false),
        float_column("v3", seed, 8, rows, 100.0),
    ];

    Dataset::new(columns)
}
