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

//! Dataset loading with fallback to in-process generation.

use crate::core::config::{BenchConfig, DataSource};
use crate::error::{BenchError, Result};
use crate::fixtures::csv_file::read_csv;
use crate::generators::{generate_sized, ColumnProfile, Dataset, DatasetSize};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// A dataset together with the file it came from, if any.
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    /// The dataset.
    pub dataset: Dataset,
    /// Source file; `None` when generated in-process.
    pub path: Option<PathBuf>,
    /// Lowercase hex SHA-256 of the source file.
    pub sha256: Option<String>,
}

/// Computes the lowercase hex SHA-256 of a file's bytes.
///
/// Suite outputs carry this digest so that two engines' results can be
/// checked against the same dataset file.
pub fn file_sha256(path: &Path) -> Result<String> {
    let file = File::open(path).map_err(|e| BenchError::from_io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        let read = reader
            .read(&mut buffer)
            .map_err(|e| BenchError::from_io(path, e))?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// File name of a size preset's grouping dataset: `h2oai_<label>.csv`.
pub fn dataset_file_name(size: DatasetSize) -> String {
    format!("h2oai_{}.csv", size.label())
}

/// Path of a size preset's grouping dataset inside `dir`.
pub fn dataset_path(dir: &Path, size: DatasetSize) -> PathBuf {
    dir.join(dataset_file_name(size))
}

/// Loads the grouping dataset the configuration asks for.
///
/// With an external-data directory the file `h2oai_<size>.csv` is read from
/// it; otherwise the dataset is generated from the configured seed.
///
/// # Errors
///
/// [`crate::BenchError::NotFound`] when the directory lacks the file,
/// [`crate::BenchError::Csv`] when it cannot be parsed.
pub fn load_or_generate(config: &BenchConfig) -> Result<LoadedDataset> {
    match config.data_source() {
        DataSource::Directory(dir) => {
            let path = dataset_path(&dir, config.size);
            info!(path = %path.display(), "loading dataset");
            let dataset = read_csv(&path)?;
            let sha256 = file_sha256(&path)?;
            Ok(LoadedDataset {
                dataset,
                path: Some(path),
                sha256: Some(sha256),
            })
        }
        DataSource::Generated => {
            info!(
                size = config.size.label(),
                seed = config.seed,
                "generating dataset"
            );
            let dataset = generate_sized(config.size, ColumnProfile::Grouping, config.seed)?;
            Ok(LoadedDataset {
                dataset,
                path: None,
                sha256: None,
            })
        }
    }
}
