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

//! Deterministic synthetic data generation.
//!
//! Organized by workload shape:
//!
//! - **lcg**: the seeded sequence generator
//! - **dataset**: column and dataset types
//! - **groupby**: the nine-column grouping schema
//! - **wide**: configurable-width tables
//! - **join**: left/right join pairs
//! - **nulls**: validity masks for generated columns
//! - **config**: size presets and column profiles
//!
//! Every column owns a generator seeded from the dataset seed and the
//! column's position, so the same `(rows, groups, profile, seed)` always
//! yields the same dataset. [`generate`] produces fully valid data;
//! [`generate_with`] adds the null masking and key sorting of the H2O.ai
//! generator.

pub mod config;
pub mod dataset;
pub mod groupby;
pub mod join;
pub mod lcg;
pub mod nulls;
pub mod wide;

// Re-export commonly used types
pub use config::{ColumnProfile, DatasetSize, WidthPreset};
pub use dataset::{Column, ColumnData, Dataset};
pub use groupby::{generate_grouping, GROUPING_COLUMNS};
pub use join::{generate_join_pair, JoinKeyKind, JoinSpec, JoinTables};
pub use lcg::{column_seed, Lcg};
pub use nulls::DEFAULT_NULL_RATIO;
pub use wide::generate_wide;

use crate::error::{BenchError, Result};
use lcg::round6;
use tracing::debug;

/// Generates a dataset for the given profile.
///
/// # Arguments
///
/// * `rows` - Number of rows
/// * `groups` - Grouping-key cardinality
/// * `profile` - Column layout
/// * `seed` - Dataset seed
///
/// # Errors
///
/// See [`generate_grouping`] and [`generate_wide`].
///
/// # Examples
///
/// ```
/// use framebench::generators::{generate, ColumnProfile};
///
/// let a = generate(1_000, 10, ColumnProfile::Grouping, 42).unwrap();
/// let b = generate(1_000, 10, ColumnProfile::Grouping, 42).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn generate(rows: usize, groups: usize, profile: ColumnProfile, seed: u32) -> Result<Dataset> {
    match profile {
        ColumnProfile::Grouping => generate_grouping(rows, groups, seed),
        ColumnProfile::Wide {
            strings,
            integers,
            floats,
        } => generate_wide(rows, groups, strings, integers, floats, seed),
    }
}

/// Generates the dataset of a size preset.
pub fn generate_sized(size: DatasetSize, profile: ColumnProfile, seed: u32) -> Result<Dataset> {
    generate(size.rows(), size.groups(), profile, seed)
}

/// Full generator configuration.
///
/// # Example
///
/// ```
/// use framebench::generators::{generate_with, DatasetSize, GeneratorConfig};
///
/// let config = GeneratorConfig::sized(DatasetSize::Small)
///     .with_rows(1_000)
///     .with_groups(20)
///     .with_sort(true);
/// let dataset = generate_with(&config).unwrap();
/// assert!(dataset.null_count() > 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Number of rows.
    pub rows: usize,
    /// Grouping-key cardinality.
    pub groups: usize,
    /// Column layout.
    pub profile: ColumnProfile,
    /// Dataset seed.
    pub seed: u32,
    /// Fraction of distinct keys (grouping columns) or rows (measures)
    /// nulled, in `[0, 1]`.
    pub null_ratio: f64,
    /// Sort rows by the grouping columns.
    pub sort: bool,
}

impl GeneratorConfig {
    /// Grouping layout of a size preset, seed 0, [`DEFAULT_NULL_RATIO`],
    /// unsorted.
    pub fn sized(size: DatasetSize) -> Self {
        Self {
            rows: size.rows(),
            groups: size.groups(),
            profile: ColumnProfile::Grouping,
            seed: 0,
            null_ratio: DEFAULT_NULL_RATIO,
            sort: false,
        }
    }

    /// Sets the row count.
    pub fn with_rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }

    /// Sets the group count.
    pub fn with_groups(mut self, groups: usize) -> Self {
        self.groups = groups;
        self
    }

    /// Sets the column layout.
    pub fn with_profile(mut self, profile: ColumnProfile) -> Self {
        self.profile = profile;
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the null ratio.
    pub fn with_null_ratio(mut self, ratio: f64) -> Self {
        self.null_ratio = ratio;
        self
    }

    /// Enables or disables sorting by the grouping columns.
    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }
}

/// Generates a dataset with null masking and optional key sorting.
///
/// Values are drawn exactly as by [`generate`]; masks come from separate
/// streams, so a zero ratio without sorting reproduces [`generate`].
///
/// # Errors
///
/// [`BenchError::InvalidConfig`] for a null ratio outside `[0, 1]`, plus
/// the errors of [`generate`].
pub fn generate_with(config: &GeneratorConfig) -> Result<Dataset> {
    if !(0.0..=1.0).contains(&config.null_ratio) {
        return Err(BenchError::invalid_config(
            "null_ratio",
            format!("must be between 0 and 1, got {}", config.null_ratio),
        ));
    }

    let dataset = generate(config.rows, config.groups, config.profile, config.seed)?;
    let columns = dataset
        .columns()
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, column)| nulls::mask_column(column, config.seed, index, config.null_ratio))
        .collect();
    let dataset = Dataset::new(columns)?;
    debug!(nulls = dataset.null_count(), sort = config.sort, "applied null masks");

    Ok(if config.sort {
        dataset.sorted_by_keys()
    } else {
        dataset
    })
}

// Cardinalities are bounded by MAX_DATASET_SIZE, well inside u32.
fn bound(cardinality: usize) -> u32 {
    u32::try_from(cardinality.max(1)).unwrap_or(u32::MAX)
}

/// String column of 1-based tokens drawn from `cardinality` values.
pub(crate) fn token_column(
    name: &str,
    seed: u32,
    index: usize,
    rows: usize,
    cardinality: usize,
    token: impl Fn(u32) -> String,
) -> Column {
    let mut rng = Lcg::new(column_seed(seed, index));
    let card = bound(cardinality);
    let values = (0..rows).map(|_| token(rng.next_below(card) + 1)).collect();
    Column::new(name, ColumnData::GroupingStr(values))
}

/// Integer column with values in `low..low + cardinality`.
pub(crate) fn int_column(
    name: &str,
    seed: u32,
    index: usize,
    rows: usize,
    low: i64,
    cardinality: usize,
    grouping: bool,
) -> Column {
    let mut rng = Lcg::new(column_seed(seed, index));
    let card = bound(cardinality);
    let values: Vec<i64> = (0..rows)
        .map(|_| low + i64::from(rng.next_below(card)))
        .collect();
    let data = if grouping {
        ColumnData::GroupingInt(values)
    } else {
        ColumnData::IntValue(values)
    };
    Column::new(name, data)
}

/// Float column in `[0, scale)` rounded to 6 fractional digits.
pub(crate) fn float_column(name: &str, seed: u32, index: usize, rows: usize, scale: f64) -> Column {
    let mut rng = Lcg::new(column_seed(seed, index));
    let ceiling = scale - 1e-6;
    let values = (0..rows)
        .map(|_| round6(rng.next_unit() * scale).min(ceiling))
        .collect();
    Column::new(name, ColumnData::FloatValue(values))
}
