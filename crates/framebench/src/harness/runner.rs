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

//! In-process suite runner.
//!
//! Runs the selected queries of the battery against one engine, one query at
//! a time. Each query goes through its full warmup + measured cycle before
//! the next one starts. A query whose engine call fails is recorded as
//! failed and the rest of the battery still runs.

use crate::core::config::BenchConfig;
use crate::core::measurement::{measure, Timing};
use crate::core::query::QueryId;
use crate::error::{BenchError, Result};
use crate::fixtures::LoadedDataset;
use crate::generators::Dataset;
use crate::harness::comparator::{compare, Comparison};
use crate::parsers::{MetricRecord, ResultSet, SuiteOutput, SuiteResult};
use tracing::{info, warn};

/// Error type engines report query failures with.
pub type EngineError = Box<dyn std::error::Error + Send + Sync>;

/// An engine under test.
///
/// Implementations execute one query of the battery against a dataset and
/// return the result's row count. Query semantics belong to the engine.
pub trait Engine {
    /// Display name used in reports.
    fn name(&self) -> &str;

    /// Runs `query` against `dataset`, returning the result row count.
    fn run_query(&self, dataset: &Dataset, query: QueryId) -> std::result::Result<usize, EngineError>;
}

/// Outcome of one query.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// Measured successfully.
    Measured {
        /// Query id.
        query: QueryId,
        /// Timing summary.
        timing: Timing,
    },
    /// The engine failed during warmup or measurement.
    Failed {
        /// Query id.
        query: QueryId,
        /// Engine error message.
        reason: String,
    },
}

impl QueryOutcome {
    /// Query id of the outcome.
    pub fn query(&self) -> QueryId {
        match self {
            QueryOutcome::Measured { query, .. } | QueryOutcome::Failed { query, .. } => *query,
        }
    }
}

/// Results of running the battery against one engine.
#[derive(Debug, Clone, PartialEq)]
pub struct SuiteRun {
    /// Engine name.
    pub engine: String,
    /// Dataset label.
    pub dataset: String,
    /// Dataset file, when the dataset was loaded from disk.
    pub data_path: Option<String>,
    /// Hex SHA-256 of the dataset file.
    pub data_sha256: Option<String>,
    /// Outcomes in execution order.
    pub outcomes: Vec<QueryOutcome>,
}

impl SuiteRun {
    /// Records the dataset file the run used.
    pub fn with_data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = Some(path.into());
        self
    }

    /// Records the digest of the dataset file the run used.
    pub fn with_data_sha256(mut self, digest: impl Into<String>) -> Self {
        self.data_sha256 = Some(digest.into());
        self
    }

    /// Records where a loaded dataset came from. Generated datasets leave
    /// both fields empty.
    pub fn with_source(mut self, loaded: &LoadedDataset) -> Self {
        self.data_path = loaded.path.as_ref().map(|p| p.display().to_string());
        self.data_sha256 = loaded.sha256.clone();
        self
    }

    /// Canonical results of the measured queries, using mean seconds.
    pub fn result_set(&self) -> ResultSet {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                QueryOutcome::Measured { query, timing } => {
                    let record = MetricRecord::new(*query, timing.mean_secs());
                    Some(match timing.memory.filter(|bytes| *bytes > 0) {
                        Some(bytes) => record.with_memory(bytes),
                        None => record,
                    })
                }
                QueryOutcome::Failed { .. } => None,
            })
            .collect()
    }

    /// Failed queries with their reasons.
    pub fn failures(&self) -> Vec<(QueryId, &str)> {
        self.outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                QueryOutcome::Failed { query, reason } => Some((*query, reason.as_str())),
                QueryOutcome::Measured { .. } => None,
            })
            .collect()
    }

    /// Converts the run to the suite document read by the suite parser.
    /// Failed queries are omitted.
    pub fn to_output(&self) -> SuiteOutput {
        let results = self
            .outcomes
            .iter()
            .filter_map(|outcome| match outcome {
                QueryOutcome::Measured { query, timing } => Some(SuiteResult {
                    name: query.to_string(),
                    ms: timing.mean_ms(),
                    rows: timing.rows,
                }),
                QueryOutcome::Failed { .. } => None,
            })
            .collect();

        SuiteOutput {
            engine: self.engine.clone(),
            dataset: self.dataset.clone(),
            data_path: self.data_path.clone(),
            data_sha256: self.data_sha256.clone(),
            results,
        }
    }

    /// Serializes [`SuiteRun::to_output`] as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_output())
            .map_err(|e| BenchError::Serialization(e.to_string()))
    }
}

/// Runs query batteries with a shared configuration.
pub struct SuiteRunner {
    config: BenchConfig,
}

impl SuiteRunner {
    /// Creates a runner with the specified configuration.
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs every selected query against `engine`.
    pub fn run(&self, engine: &dyn Engine, dataset: &Dataset) -> SuiteRun {
        let iterations = self.config.iterations;
        let warmup = self.config.warmup_iterations();
        let mut outcomes = Vec::new();

        for query in self.config.queries.ids() {
            let label = query.to_string();
            let result = measure(&label, iterations, warmup, || engine.run_query(dataset, query));

            match result {
                Ok(timing) => {
                    info!(
                        engine = engine.name(),
                        query = %query,
                        mean_ms = timing.mean_ms(),
                        rows = timing.rows,
                        "query measured"
                    );
                    outcomes.push(QueryOutcome::Measured { query, timing });
                }
                Err(BenchError::WorkloadFailure { reason, .. }) => {
                    warn!(engine = engine.name(), query = %query, %reason, "query failed");
                    outcomes.push(QueryOutcome::Failed { query, reason });
                }
                Err(other) => {
                    warn!(engine = engine.name(), query = %query, error = %other, "query failed");
                    outcomes.push(QueryOutcome::Failed {
                        query,
                        reason: other.to_string(),
                    });
                }
            }
        }

        SuiteRun {
            engine: engine.name().to_string(),
            dataset: self.config.size.label().to_string(),
            data_path: None,
            data_sha256: None,
            outcomes,
        }
    }

    /// Runs both engines over the same dataset and compares B against A.
    ///
    /// # Errors
    ///
    /// [`BenchError::EmptyOverlap`] when no query succeeded on both engines.
    pub fn run_pair(
        &self,
        a: &dyn Engine,
        b: &dyn Engine,
        dataset: &Dataset,
    ) -> Result<(SuiteRun, SuiteRun, Comparison)> {
        let run_a = self.run(a, dataset);
        let run_b = self.run(b, dataset);
        let comparison = compare(&run_a.result_set(), &run_b.result_set())?;
        Ok((run_a, run_b, comparison))
    }
}
