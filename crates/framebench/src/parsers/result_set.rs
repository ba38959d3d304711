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

//! Canonical per-query metrics.

use crate::core::query::{QueryId, QuerySelector};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Elapsed time and optional memory of one query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// Query id.
    pub query: QueryId,
    /// Elapsed wall-clock seconds per operation.
    pub elapsed_secs: f64,
    /// Bytes allocated per operation, where the source reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory_bytes: Option<u64>,
}

impl MetricRecord {
    /// Creates a record without memory.
    pub fn new(query: QueryId, elapsed_secs: f64) -> Self {
        Self {
            query,
            elapsed_secs,
            memory_bytes: None,
        }
    }

    /// Attaches a memory figure.
    pub fn with_memory(mut self, bytes: u64) -> Self {
        self.memory_bytes = Some(bytes);
        self
    }
}

/// Query id → metric mapping, iterated in ascending query order.
///
/// Inserting an id that is already present replaces the earlier record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: BTreeMap<QueryId, MetricRecord>,
}

impl ResultSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, returning the one it replaced.
    pub fn insert(&mut self, record: MetricRecord) -> Option<MetricRecord> {
        self.records.insert(record.query, record)
    }

    /// Looks up a query.
    pub fn get(&self, query: QueryId) -> Option<&MetricRecord> {
        self.records.get(&query)
    }

    /// Returns whether the set has a record for `query`.
    pub fn contains(&self, query: QueryId) -> bool {
        self.records.contains_key(&query)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Query ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = QueryId> + '_ {
        self.records.keys().copied()
    }

    /// Records in ascending query order.
    pub fn iter(&self) -> impl Iterator<Item = &MetricRecord> {
        self.records.values()
    }

    /// Keeps only the records the selector covers.
    pub fn retain_selected(&mut self, selector: &QuerySelector) {
        self.records.retain(|id, _| selector.contains(*id));
    }
}

impl FromIterator<MetricRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = MetricRecord>>(iter: I) -> Self {
        let mut set = ResultSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<MetricRecord> for ResultSet {
    fn extend<I: IntoIterator<Item = MetricRecord>>(&mut self, iter: I) {
        for record in iter {
            self.insert(record);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: u32) -> QueryId {
        QueryId::new(n)
    }

    #[test]
    fn test_last_write_wins() {
        let mut set = ResultSet::new();
        assert!(set.insert(MetricRecord::new(q(1), 1.0)).is_none());
        let replaced = set.insert(MetricRecord::new(q(1), 2.0)).unwrap();
        assert_eq!(replaced.elapsed_secs, 1.0);
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(q(1)).unwrap().elapsed_secs, 2.0);
    }

    #[test]
    fn test_ascending_iteration() {
        let set: ResultSet = [10, 2, 1]
            .into_iter()
            .map(|n| MetricRecord::new(q(n), 0.1))
            .collect();
        let ids: Vec<String> = set.ids().map(|id| id.to_string()).collect();
        assert_eq!(ids, vec!["q1", "q2", "q10"]);
    }

    #[test]
    fn test_retain_selected() {
        let mut set: ResultSet = (1..=8).map(|n| MetricRecord::new(q(n), 0.1)).collect();
        set.retain_selected(&"q2-q4".parse().unwrap());
        assert_eq!(set.len(), 3);
        assert!(set.contains(q(2)) && set.contains(q(4)));
        assert!(!set.contains(q(5)));
    }

    #[test]
    fn test_serializes_as_map() {
        let set: ResultSet = [MetricRecord::new(q(3), 0.5).with_memory(2048)]
            .into_iter()
            .collect();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json["q3"]["elapsed_secs"], 0.5);
        assert_eq!(json["q3"]["memory_bytes"], 2048);
    }
}
