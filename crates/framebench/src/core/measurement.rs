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

//! Measurement primitives.
//!
//! A workload is executed `warmup` times without timing, then `iterations`
//! times with one monotonic-clock sample per call. The harness never looks
//! at the workload's inputs; the row count of the result is kept only for
//! sanity printing.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::{Duration, Instant};

/// Samples reserved up front; larger runs grow the buffer as they go.
const MAX_PREALLOCATED_SAMPLES: u64 = 4_096;

/// Anything a workload returns whose size can be printed.
pub trait RowCount {
    /// Number of rows in the workload result.
    fn row_count(&self) -> usize;
}

impl RowCount for usize {
    fn row_count(&self) -> usize {
        *self
    }
}

impl<T> RowCount for Vec<T> {
    fn row_count(&self) -> usize {
        self.len()
    }
}

/// Summary of the measured samples of one workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    /// One wall-clock sample per measured iteration.
    pub samples: Vec<Duration>,
    /// Mean of the samples.
    pub mean: Duration,
    /// Fastest sample.
    pub min: Duration,
    /// Slowest sample.
    pub max: Duration,
    /// Median sample.
    pub median: Duration,
    /// Row count of the last result.
    pub rows: usize,
    /// Resident memory growth over the measured window, where the platform
    /// reports it.
    pub memory: Option<u64>,
}

impl Timing {
    /// Mean sample in seconds.
    pub fn mean_secs(&self) -> f64 {
        self.mean.as_secs_f64()
    }

    /// Mean sample in milliseconds.
    pub fn mean_ms(&self) -> f64 {
        self.mean.as_secs_f64() * 1_000.0
    }
}

/// Statistics from a set of samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    /// Mean duration.
    pub mean: Duration,
    /// Minimum duration.
    pub min: Duration,
    /// Maximum duration.
    pub max: Duration,
    /// Median duration.
    pub median: Duration,
}

/// Computes statistics from a slice of samples.
///
/// An empty slice yields all-zero statistics.
pub fn compute_statistics(samples: &[Duration]) -> Statistics {
    if samples.is_empty() {
        return Statistics {
            mean: Duration::ZERO,
            min: Duration::ZERO,
            max: Duration::ZERO,
            median: Duration::ZERO,
        };
    }

    let mut sorted = samples.to_vec();
    sorted.sort();

    let total: Duration = sorted.iter().sum();
    let mean = total / sorted.len() as u32;

    let mid = sorted.len() / 2;
    let median = if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2
    } else {
        sorted[mid]
    };

    Statistics {
        mean,
        min: sorted[0],
        max: sorted[sorted.len() - 1],
        median,
    }
}

/// Measures a workload under the warmup + iteration protocol.
///
/// `iterations` below 1 is treated as 1.
///
/// # Errors
///
/// If any call (warmup or measured) fails, measurement stops and
/// [`BenchError::WorkloadFailure`] is returned, carrying `name`.
///
/// # Example
///
/// ```
/// use framebench::core::measurement::measure;
///
/// let timing = measure("q1", 3, 1, || Ok::<usize, String>(42)).unwrap();
/// assert_eq!(timing.samples.len(), 3);
/// assert_eq!(timing.rows, 42);
/// ```
pub fn measure<F, W, E>(name: &str, iterations: u64, warmup: u64, mut workload: F) -> Result<Timing>
where
    F: FnMut() -> std::result::Result<W, E>,
    W: RowCount,
    E: Display,
{
    let fail = |err: E| BenchError::WorkloadFailure {
        query: name.to_string(),
        reason: err.to_string(),
    };

    for _ in 0..warmup {
        workload().map_err(fail)?;
    }

    let iterations = iterations.max(1);
    let mut samples = Vec::with_capacity(iterations.min(MAX_PREALLOCATED_SAMPLES) as usize);
    let mut rows = 0;
    let baseline = current_memory_usage();

    for _ in 0..iterations {
        let start = Instant::now();
        let result = workload().map_err(fail)?;
        samples.push(start.elapsed());
        rows = result.row_count();
    }

    let memory = baseline.and_then(|before| {
        current_memory_usage().map(|after| after.saturating_sub(before))
    });

    let stats = compute_statistics(&samples);
    Ok(Timing {
        samples,
        mean: stats.mean,
        min: stats.min,
        max: stats.max,
        median: stats.median,
        rows,
        memory,
    })
}

/// Returns current resident memory in bytes.
///
/// This is a platform-specific approximation; `None` where unsupported.
fn current_memory_usage() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        // Read from /proc/self/statm
        if let Ok(contents) = std::fs::read_to_string("/proc/self/statm") {
            if let Some(resident) = contents.split_whitespace().nth(1) {
                if let Ok(pages) = resident.parse::<u64>() {
                    // Convert pages to bytes (assuming 4KB pages)
                    return Some(pages * 4096);
                }
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::thread;

    #[test]
    fn test_warmup_and_iterations_counted() {
        let calls = Cell::new(0u32);
        let timing = measure("q1", 3, 2, || {
            calls.set(calls.get() + 1);
            Ok::<usize, String>(7)
        })
        .unwrap();

        assert_eq!(calls.get(), 5);
        assert_eq!(timing.samples.len(), 3);
        assert_eq!(timing.rows, 7);
    }

    #[test]
    fn test_zero_iterations_runs_once() {
        let timing = measure("q1", 0, 0, || Ok::<usize, String>(1)).unwrap();
        assert_eq!(timing.samples.len(), 1);
    }

    #[test]
    fn test_huge_iteration_count_does_not_preallocate() {
        let calls = Cell::new(0u64);
        let result = measure("q1", u64::MAX, 0, || {
            calls.set(calls.get() + 1);
            if calls.get() > 3 {
                Err("stop")
            } else {
                Ok(0usize)
            }
        });
        assert!(matches!(result, Err(BenchError::WorkloadFailure { .. })));
        assert_eq!(calls.get(), 4);
    }

    #[test]
    fn test_samples_reflect_work() {
        let timing = measure("sleep", 3, 0, || {
            thread::sleep(Duration::from_millis(2));
            Ok::<usize, String>(0)
        })
        .unwrap();

        assert!(timing.min >= Duration::from_millis(2));
        assert!(timing.min <= timing.mean && timing.mean <= timing.max);
        assert!(timing.mean_ms() >= 2.0);
    }

    #[test]
    fn test_failure_aborts_measurement() {
        let calls = Cell::new(0u32);
        let result = measure("q4", 5, 1, || {
            calls.set(calls.get() + 1);
            if calls.get() == 3 {
                Err("engine exploded")
            } else {
                Ok(1usize)
            }
        });

        match result {
            Err(BenchError::WorkloadFailure { query, reason }) => {
                assert_eq!(query, "q4");
                assert_eq!(reason, "engine exploded");
            }
            other => panic!("Expected WorkloadFailure, got {:?}", other),
        }
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_failure_during_warmup() {
        let result = measure("q2", 3, 2, || Err::<usize, _>("not ready"));
        assert!(matches!(result, Err(BenchError::WorkloadFailure { .. })));
    }

    #[test]
    fn test_compute_statistics() {
        let samples = vec![
            Duration::from_millis(30),
            Duration::from_millis(10),
            Duration::from_millis(20),
        ];

        let stats = compute_statistics(&samples);
        assert_eq!(stats.mean, Duration::from_millis(20));
        assert_eq!(stats.min, Duration::from_millis(10));
        assert_eq!(stats.max, Duration::from_millis(30));
        assert_eq!(stats.median, Duration::from_millis(20));
    }

    #[test]
    fn test_even_median_is_midpoint() {
        let samples = vec![
            Duration::from_millis(10),
            Duration::from_millis(20),
            Duration::from_millis(30),
            Duration::from_millis(40),
        ];
        assert_eq!(compute_statistics(&samples).median, Duration::from_millis(25));
    }

    #[test]
    fn test_empty_statistics() {
        let stats = compute_statistics(&[]);
        assert_eq!(stats.mean, Duration::ZERO);
        assert_eq!(stats.median, Duration::ZERO);
    }

    #[test]
    fn test_vec_row_count() {
        let timing = measure("rows", 1, 0, || Ok::<Vec<u8>, String>(vec![1, 2, 3])).unwrap();
        assert_eq!(timing.rows, 3);
    }
}
