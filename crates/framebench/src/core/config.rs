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

//! Centralized benchmark configuration.
//!
//! Provides the option set of a comparison run: dataset size, query
//! selection, where the dataset comes from, and iteration/warmup counts.

use crate::core::query::QuerySelector;
use crate::error::{BenchError, Result};
use crate::generators::DatasetSize;
use std::path::{Path, PathBuf};

/// Environment variable naming a directory of pre-generated datasets.
pub const DATA_DIR_ENV: &str = "FRAMEBENCH_DATA_DIR";

/// Default number of measured iterations per query.
pub const DEFAULT_ITERATIONS: u64 = 3;

/// Warmup count for datasets up to 10,000 rows.
pub const DEFAULT_WARMUP_SMALL: u64 = 5;

/// Warmup count for datasets up to 1,000,000 rows.
pub const DEFAULT_WARMUP_MEDIUM: u64 = 2;

/// Warmup count for anything larger.
pub const DEFAULT_WARMUP_LARGE: u64 = 1;

/// Default generator seed.
pub const DEFAULT_SEED: u32 = 0;

/// Where the dataset for an in-process run comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Load `h2oai_<size>.csv` from this directory.
    Directory(PathBuf),
    /// Generate the dataset in-process.
    Generated,
}

/// Centralized benchmark configuration.
///
/// # Example
///
/// ```
/// use framebench::core::config::BenchConfig;
/// use framebench::generators::DatasetSize;
///
/// let config = BenchConfig::new(DatasetSize::Small)
///     .with_iterations(5)
///     .with_queries("q1-q3".parse().unwrap());
/// assert_eq!(config.warmup_iterations(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Dataset size preset.
    pub size: DatasetSize,
    /// Queries to run.
    pub queries: QuerySelector,
    /// Explicit external-data directory (takes precedence over the env var).
    pub data_dir: Option<PathBuf>,
    /// Measured iterations per query.
    pub iterations: u64,
    /// Warmup override; `None` uses the size-dependent default.
    pub warmup: Option<u64>,
    /// Generator seed for in-process datasets.
    pub seed: u32,
}

impl BenchConfig {
    /// Creates a configuration for the given size with default settings.
    pub fn new(size: DatasetSize) -> Self {
        Self {
            size,
            queries: QuerySelector::default(),
            data_dir: None,
            iterations: DEFAULT_ITERATIONS,
            warmup: None,
            seed: DEFAULT_SEED,
        }
    }

    /// Returns the default warmup count for a dataset of `rows` rows.
    ///
    /// Scales inversely with row count so that total harness time stays
    /// bounded on the large presets.
    pub fn default_warmup_for_rows(rows: usize) -> u64 {
        match rows {
            r if r <= 10_000 => DEFAULT_WARMUP_SMALL,
            r if r <= 1_000_000 => DEFAULT_WARMUP_MEDIUM,
            _ => DEFAULT_WARMUP_LARGE,
        }
    }

    /// Sets the query selector.
    pub fn with_queries(mut self, queries: QuerySelector) -> Self {
        self.queries = queries;
        self
    }

    /// Sets an explicit external-data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(dir.into());
        self
    }

    /// Sets the measured iteration count.
    pub fn with_iterations(mut self, iterations: u64) -> Self {
        self.iterations = iterations;
        self
    }

    /// Overrides the warmup count.
    pub fn with_warmup(mut self, warmup: u64) -> Self {
        self.warmup = Some(warmup);
        self
    }

    /// Sets the generator seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Gets the warmup count in effect.
    pub fn warmup_iterations(&self) -> u64 {
        self.warmup
            .unwrap_or_else(|| Self::default_warmup_for_rows(self.size.rows()))
    }

    /// Checks the configuration for values the harness cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(BenchError::invalid_config(
                "iterations",
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Resolves the dataset source: explicit directory, then
    /// [`DATA_DIR_ENV`], then in-process generation.
    pub fn data_source(&self) -> DataSource {
        resolve_data_source(
            self.data_dir.as_deref(),
            std::env::var(DATA_DIR_ENV).ok(),
        )
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::new(DatasetSize::Small)
    }
}

/// Resolves a data source from an explicit path and an environment value.
pub fn resolve_data_source(explicit: Option<&Path>, env_value: Option<String>) -> DataSource {
    if let Some(dir) = explicit {
        return DataSource::Directory(dir.to_path_buf());
    }
    match env_value {
        Some(value) if !value.trim().is_empty() => {
            DataSource::Directory(PathBuf::from(value.trim()))
        }
        _ => DataSource::Generated,
    }
}
