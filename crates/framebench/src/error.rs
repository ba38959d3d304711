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

//! Error types for benchmark generation, measurement and comparison.
//!
//! File-level problems (a result file that does not exist, a dataset that
//! cannot be written) are fatal to the requested operation. Line-level and
//! entry-level problems inside result files are never represented here: the
//! parsers skip such input and keep going.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Maximum dataset size (100 million rows).
///
/// Matches the largest preset.
pub const MAX_DATASET_SIZE: usize = 100_000_000;

/// Result type for benchmarking operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur during benchmarking operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BenchError {
    /// A required input file does not exist.
    #[error("File not found: {}", path.display())]
    NotFound {
        /// The missing path
        path: PathBuf,
    },

    /// A file exists but could not be read or written.
    #[error("I/O error for '{}': {message}", path.display())]
    Io {
        /// The path being accessed
        path: PathBuf,
        /// The underlying error message
        message: String,
    },

    /// A measured workload returned an error.
    #[error("Workload for {query} failed: {reason}")]
    WorkloadFailure {
        /// Query id being measured
        query: String,
        /// Error reported by the engine
        reason: String,
    },

    /// The two result sets have no query id in common.
    #[error("No overlapping query ids between the two result sets")]
    EmptyOverlap,

    /// Dataset size exceeds maximum allowed limit
    #[error("Dataset size {requested} exceeds maximum allowed limit of {max}")]
    DatasetTooLarge {
        /// Requested size
        requested: usize,
        /// Maximum allowed size
        max: usize,
    },

    /// Invalid configuration parameter
    #[error("Invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },

    /// CSV encoding or decoding failed.
    #[error("CSV error: {0}")]
    Csv(String),

    /// JSON serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BenchError {
    /// Builds an error for a failed file operation, mapping a missing file
    /// to [`BenchError::NotFound`].
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            BenchError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            BenchError::Io {
                path: path.to_path_buf(),
                message: err.to_string(),
            }
        }
    }

    /// Shorthand for [`BenchError::InvalidConfig`].
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        BenchError::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Returns true for the conditions that end a comparison without a table
    /// but are not crashes: a missing input file or no shared query ids.
    pub fn is_clean_abort(&self) -> bool {
        matches!(self, BenchError::NotFound { .. } | BenchError::EmptyOverlap)
    }
}

/// Validate that a dataset size is within acceptable limits
///
/// # Examples
///
/// ```
/// use framebench::error::{validate_dataset_size, MAX_DATASET_SIZE};
///
/// assert!(validate_dataset_size(1000).is_ok());
/// assert!(validate_dataset_size(MAX_DATASET_SIZE + 1).is_err());
/// ```
#[inline]
pub fn validate_dataset_size(size: usize) -> Result<()> {
    if size > MAX_DATASET_SIZE {
        Err(BenchError::DatasetTooLarge {
            requested: size,
            max: MAX_DATASET_SIZE,
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_dataset_size_success() {
        assert!(validate_dataset_size(100).is_ok());
        assert!(validate_dataset_size(10_000).is_ok());
        assert!(validate_dataset_size(MAX_DATASET_SIZE).is_ok());
    }

    #[test]
    fn test_validate_dataset_size_failure() {
        let result = validate_dataset_size(MAX_DATASET_SIZE + 1);

        if let Err(BenchError::DatasetTooLarge { requested, max }) = result {
            assert_eq!(requested, MAX_DATASET_SIZE + 1);
            assert_eq!(max, MAX_DATASET_SIZE);
        } else {
            panic!("Expected DatasetTooLarge error");
        }
    }

    #[test]
    fn test_error_display() {
        let err = BenchError::DatasetTooLarge {
            requested: 200_000_000,
            max: MAX_DATASET_SIZE,
        };
        let msg = err.to_string();
        assert!(msg.contains("200000000"));
        assert!(msg.contains("100000000"));

        let err = BenchError::invalid_config("queries", "empty range");
        let msg = err.to_string();
        assert!(msg.contains("queries"));
        assert!(msg.contains("empty range"));

        let err = BenchError::NotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        assert!(err.to_string().contains("/tmp/missing.json"));
    }

    #[test]
    fn test_from_io_maps_not_found() {
        let path = Path::new("/definitely/not/here.txt");
        let io_err = std::fs::read_to_string(path).unwrap_err();
        let err = BenchError::from_io(path, io_err);
        assert_eq!(
            err,
            BenchError::NotFound {
                path: path.to_path_buf()
            }
        );
        assert!(err.is_clean_abort());
    }

    #[test]
    fn test_from_io_other_kind() {
        let path = Path::new("results.txt");
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = BenchError::from_io(path, io_err);
        assert!(matches!(err, BenchError::Io { .. }));
        assert!(!err.is_clean_abort());
    }

    #[test]
    fn test_error_equality() {
        let err1 = BenchError::DatasetTooLarge {
            requested: 100,
            max: 10,
        };
        let err2 = BenchError::DatasetTooLarge {
            requested: 100,
            max: 10,
        };
        let err3 = BenchError::EmptyOverlap;

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
