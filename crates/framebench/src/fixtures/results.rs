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

//! Locating engine result files.
//!
//! Result files live in one directory and are named `<engine>_<tier>.<ext>`,
//! where the tier is [`DatasetSize::results_tier`]. Without a size, the most
//! recently modified file of each engine is taken.

use crate::error::{BenchError, Result};
use crate::generators::DatasetSize;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

/// Default result directory, relative to the working directory.
pub const DEFAULT_RESULTS_DIR: &str = "results";

/// Extensions tried for a sized result file, in order.
const RESULT_EXTENSIONS: [&str; 2] = ["txt", "json"];

/// Path of `engine`'s results for `size` inside `dir`.
///
/// Returns the first existing `<engine>_<tier>.txt` or `.json`; when
/// neither exists the `.txt` path is returned so that reading it reports
/// the expected name.
pub fn results_file_for_size(dir: &Path, engine: &str, size: DatasetSize) -> PathBuf {
    let stem = format!("{}_{}", engine, size.results_tier());
    RESULT_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{}.{}", stem, ext)))
        .find(|path| path.is_file())
        .unwrap_or_else(|| dir.join(format!("{}.{}", stem, RESULT_EXTENSIONS[0])))
}

/// Most recently modified `<engine>_*` file in `dir`.
///
/// Ties on modification time go to the lexically greatest name.
///
/// # Errors
///
/// [`BenchError::NotFound`] when the directory does not exist or holds no
/// file for `engine`.
pub fn latest_results_file(dir: &Path, engine: &str) -> Result<PathBuf> {
    let prefix = format!("{}_", engine);
    let entries = std::fs::read_dir(dir).map_err(|e| BenchError::from_io(dir, e))?;

    let mut best: Option<(SystemTime, PathBuf)> = None;
    for entry in entries.flatten() {
        let path = entry.path();
        let matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with(&prefix));
        if !matches || !path.is_file() {
            continue;
        }

        let modified = entry
            .metadata()
            .and_then(|meta| meta.modified())
            .unwrap_or(SystemTime::UNIX_EPOCH);
        let newer = match &best {
            Some((time, current)) => (modified, &path) > (*time, current),
            None => true,
        };
        if newer {
            best = Some((modified, path));
        }
    }

    match best {
        Some((_, path)) => {
            debug!(engine, path = %path.display(), "selected most recent results");
            Ok(path)
        }
        None => Err(BenchError::NotFound {
            path: dir.join(format!("{}*", prefix)),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::time::Duration;

    #[test]
    fn test_sized_path_uses_tier() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            results_file_for_size(dir.path(), "golars", DatasetSize::Small),
            dir.path().join("golars_light.txt")
        );

        fs::write(dir.path().join("polars_full.json"), "{}").unwrap();
        assert_eq!(
            results_file_for_size(dir.path(), "polars", DatasetSize::Medium),
            dir.path().join("polars_full.json")
        );
        assert_eq!(
            results_file_for_size(dir.path(), "polars", DatasetSize::XLarge),
            dir.path().join("polars_xlarge.txt")
        );
    }

    #[test]
    fn test_latest_by_modification_time() {
        let dir = tempfile::tempdir().unwrap();
        let old = dir.path().join("golars_light.txt");
        let new = dir.path().join("golars_full.txt");
        fs::write(&old, "old").unwrap();
        fs::write(&new, "new").unwrap();
        fs::write(dir.path().join("polars_heavy.json"), "{}").unwrap();

        let past = SystemTime::now() - Duration::from_secs(3_600);
        File::options()
            .write(true)
            .open(&old)
            .unwrap()
            .set_modified(past)
            .unwrap();

        assert_eq!(latest_results_file(dir.path(), "golars").unwrap(), new);
        assert_eq!(
            latest_results_file(dir.path(), "polars").unwrap(),
            dir.path().join("polars_heavy.json")
        );
    }

    #[test]
    fn test_no_matching_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        let err = latest_results_file(dir.path(), "golars").unwrap_err();
        assert!(matches!(err, BenchError::NotFound { .. }));
        assert!(err.to_string().contains("golars_*"));
    }

    #[test]
    fn test_missing_directory() {
        let err = latest_results_file(Path::new("/no/such/results"), "golars").unwrap_err();
        assert!(err.is_clean_abort());
    }
}
