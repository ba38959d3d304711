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

//! Hash command - SHA-256 digests of data files

use super::write_stdout;
use crate::error::CliError;
use framebench::fixtures::file_sha256;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One `sha256sum`-style line.
fn digest_line(digest: &str, path: &Path) -> String {
    format!("{}  {}\n", digest, path.display())
}

/// Print the SHA-256 of each file, in argument order.
///
/// # Errors
///
/// Returns `Err` on the first file that cannot be read.
pub fn hash(files: &[PathBuf]) -> Result<Vec<String>, CliError> {
    let mut digests = Vec::with_capacity(files.len());
    for path in files {
        let digest = file_sha256(path)?;
        debug!(path = %path.display(), digest = %digest, "hashed data file");
        write_stdout(&digest_line(&digest, path))?;
        digests.push(digest);
    }
    Ok(digests)
}

#[cfg(test)]
mod tests {
    use super::*;
    use framebench::BenchError;
    use std::fs;

    #[test]
    fn test_hash_files() {
        let dir = tempfile::tempdir().unwrap();
        let abc = dir.path().join("abc.csv");
        let empty = dir.path().join("empty.csv");
        fs::write(&abc, "abc").unwrap();
        fs::write(&empty, "").unwrap();

        let digests = hash(&[abc, empty]).unwrap();
        assert_eq!(
            digests,
            vec![
                "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad".to_string(),
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855".to_string(),
            ]
        );
    }

    #[test]
    fn test_digest_line_format() {
        assert_eq!(digest_line("00ff", Path::new("data/x.csv")), "00ff  data/x.csv\n");
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = hash(&[dir.path().join("missing.csv")]);
        assert!(matches!(result, Err(CliError::Bench(BenchError::NotFound { .. }))));
    }
}
