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

//! Generate command - write a synthetic dataset to CSV

use super::write_stdout;
use crate::error::CliError;
use framebench::core::{resolve_data_source, DataSource, DATA_DIR_ENV};
use framebench::fixtures::{dataset_file_name, write_csv};
use framebench::generators::DEFAULT_NULL_RATIO;
use framebench::{generate_with, ColumnProfile, DatasetSize, GeneratorConfig};
use std::path::{Path, PathBuf};
use tracing::info;

/// Inputs of the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Size preset.
    pub size: DatasetSize,
    /// Column layout.
    pub profile: ColumnProfile,
    /// Generator seed.
    pub seed: u32,
    /// Overrides the preset's row count.
    pub rows: Option<usize>,
    /// Overrides the preset's group count.
    pub groups: Option<usize>,
    /// Fraction of keys (grouping columns) or rows (measures) nulled.
    pub null_ratio: f64,
    /// Sort rows by the grouping columns.
    pub sort: bool,
    /// Exact output file.
    pub output: Option<PathBuf>,
    /// Output directory; the file name follows the size preset.
    pub data_dir: Option<PathBuf>,
}

impl GenerateOptions {
    /// Grouping dataset of the given size with seed 0.
    pub fn new(size: DatasetSize) -> Self {
        Self {
            size,
            profile: ColumnProfile::Grouping,
            seed: 0,
            rows: None,
            groups: None,
            null_ratio: DEFAULT_NULL_RATIO,
            sort: false,
            output: None,
            data_dir: None,
        }
    }

    /// Effective row and group counts. Only the preset's group count is
    /// clamped to the row count; an explicit `--groups` is passed through.
    pub fn shape(&self) -> (usize, usize) {
        let rows = self.rows.unwrap_or_else(|| self.size.rows());
        let groups = self
            .groups
            .unwrap_or_else(|| self.size.groups().min(rows.max(1)));
        (rows, groups)
    }

    /// Returns true when `--rows` or `--groups` departs from the preset.
    pub fn is_custom_shape(&self) -> bool {
        self.shape() != (self.size.rows(), self.size.groups())
    }

    /// Default file name: the preset name, or the row and group counts when
    /// they were overridden, so a custom shape never shadows a preset file.
    pub fn file_name(&self) -> String {
        let (rows, groups) = self.shape();
        match (self.profile, self.is_custom_shape()) {
            (ColumnProfile::Grouping, false) => dataset_file_name(self.size),
            (ColumnProfile::Grouping, true) => format!("h2oai_{}_{}.csv", rows, groups),
            (profile, false) => {
                format!("wide_{}_{}.csv", profile.column_count(), self.size.label())
            }
            (profile, true) => {
                format!("wide_{}_{}_{}.csv", profile.column_count(), rows, groups)
            }
        }
    }

    /// Generator configuration for these options.
    pub fn generator_config(&self) -> GeneratorConfig {
        let (rows, groups) = self.shape();
        GeneratorConfig::sized(self.size)
            .with_rows(rows)
            .with_groups(groups)
            .with_profile(self.profile)
            .with_seed(self.seed)
            .with_null_ratio(self.null_ratio)
            .with_sort(self.sort)
    }
}

/// Default output path: `--data-dir`, else the data directory variable,
/// else the working directory.
pub fn default_output_path(
    options: &GenerateOptions,
    data_dir: Option<&Path>,
    env_value: Option<String>,
) -> PathBuf {
    let dir = match resolve_data_source(data_dir, env_value) {
        DataSource::Directory(dir) => dir,
        DataSource::Generated => PathBuf::from("."),
    };
    dir.join(options.file_name())
}

/// Generate a dataset and write it as CSV.
///
/// # Returns
///
/// The path written.
///
/// # Errors
///
/// Returns `Err` for invalid row/group counts and failed writes.
pub fn generate(options: &GenerateOptions) -> Result<PathBuf, CliError> {
    let config = options.generator_config();
    let path = match &options.output {
        Some(path) => path.clone(),
        None => default_output_path(
            options,
            options.data_dir.as_deref(),
            std::env::var(DATA_DIR_ENV).ok(),
        ),
    };

    info!(
        rows = config.rows,
        groups = config.groups,
        seed = config.seed,
        null_ratio = config.null_ratio,
        sort = config.sort,
        "generating dataset"
    );
    let dataset = generate_with(&config)?;
    write_csv(&dataset, &path)?;

    write_stdout(&format!(
        "Wrote {} rows x {} columns ({} nulls) to {}\n",
        dataset.rows(),
        dataset.columns().len(),
        dataset.null_count(),
        path.display()
    ))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use framebench::fixtures::read_csv;
    use framebench::generators::WidthPreset;
    use framebench::BenchError;

    #[test]
    fn test_default_path() {
        let small = GenerateOptions::new(DatasetSize::Small);
        assert_eq!(
            default_output_path(&small, Some(Path::new("/data")), None),
            PathBuf::from("/data/h2oai_small.csv")
        );
        assert_eq!(
            default_output_path(
                &GenerateOptions::new(DatasetSize::Large),
                None,
                Some("/env".to_string())
            ),
            PathBuf::from("/env/h2oai_large.csv")
        );
        assert_eq!(
            default_output_path(&GenerateOptions::new(DatasetSize::Medium), None, None),
            PathBuf::from("./h2oai_medium.csv")
        );

        let mut wide = GenerateOptions::new(DatasetSize::Small);
        wide.profile = WidthPreset::Narrow.into();
        assert_eq!(
            default_output_path(&wide, None, None),
            PathBuf::from("./wide_3_small.csv")
        );
    }

    #[test]
    fn test_custom_shape_names_the_file() {
        let mut options = GenerateOptions::new(DatasetSize::Small);
        options.rows = Some(500);
        assert_eq!(options.shape(), (500, 100));
        assert_eq!(options.file_name(), "h2oai_500_100.csv");

        options.groups = Some(10);
        assert_eq!(options.file_name(), "h2oai_500_10.csv");

        options.profile = WidthPreset::Narrow.into();
        assert_eq!(options.file_name(), "wide_3_500_10.csv");

        // Restating the preset shape keeps the preset name.
        let mut same = GenerateOptions::new(DatasetSize::Small);
        same.rows = Some(10_000);
        same.groups = Some(100);
        assert_eq!(same.file_name(), "h2oai_small.csv");
    }

    #[test]
    fn test_only_preset_groups_are_clamped() {
        let mut options = GenerateOptions::new(DatasetSize::Small);
        options.rows = Some(50);
        assert_eq!(options.shape(), (50, 50));

        options.groups = Some(80);
        assert_eq!(options.shape(), (50, 80));
        options.output = Some(tempfile::tempdir().unwrap().path().join("x.csv"));
        assert!(matches!(
            generate(&options),
            Err(CliError::Bench(BenchError::InvalidConfig { .. }))
        ));
    }

    #[test]
    fn test_generate_to_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = GenerateOptions::new(DatasetSize::Small);
        options.rows = Some(100);
        options.groups = Some(5);
        options.seed = 9;
        options.data_dir = Some(dir.path().to_path_buf());

        let path = generate(&options).unwrap();
        assert_eq!(path, dir.path().join("h2oai_100_5.csv"));
        let dataset = read_csv(&path).unwrap();
        assert_eq!(dataset.rows(), 100);
        assert_eq!(dataset.column_names()[0], "id1");
        assert_eq!(dataset, generate_with(&options.generator_config()).unwrap());
    }

    #[test]
    fn test_generate_without_nulls_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = GenerateOptions::new(DatasetSize::Small);
        options.rows = Some(200);
        options.groups = Some(10);
        options.null_ratio = 0.0;
        options.sort = true;
        options.output = Some(dir.path().join("sorted.csv"));

        let dataset = read_csv(&generate(&options).unwrap()).unwrap();
        assert_eq!(dataset.null_count(), 0);
        let id1 = dataset.column("id1").unwrap();
        let keys: Vec<String> = (0..dataset.rows()).filter_map(|r| id1.render(r)).collect();
        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_generate_rejects_oversized() {
        let dir = tempfile::tempdir().unwrap();
        let mut options = GenerateOptions::new(DatasetSize::Small);
        options.rows = Some(framebench::MAX_DATASET_SIZE + 1);
        options.output = Some(dir.path().join("x.csv"));

        let result = generate(&options);
        assert!(matches!(
            result,
            Err(CliError::Bench(BenchError::DatasetTooLarge { .. }))
        ));
        assert!(!dir.path().join("x.csv").exists());
    }
}
