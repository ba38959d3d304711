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

//! Query identifiers and query selection.
//!
//! Every workload in the battery is named by a `q<digits>` token. Ids are
//! compared by their numeric suffix so that `q2` sorts before `q10`.

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of queries covered by the default selector.
pub const DEFAULT_QUERY_COUNT: u32 = 6;

/// A query identifier such as `q1` or `Q10`.
///
/// Parsing is case-insensitive and the canonical form is lowercase, giving
/// one key space across every result source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct QueryId(u32);

impl QueryId {
    /// Creates a query id from its numeric suffix.
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// Returns the numeric suffix.
    pub const fn number(self) -> u32 {
        self.0
    }
}

impl FromStr for QueryId {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('q')
            .or_else(|| trimmed.strip_prefix('Q'))
            .unwrap_or(trimmed);

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BenchError::invalid_config(
                "query",
                format!("'{}' is not a q<digits> token", s),
            ));
        }

        digits
            .parse::<u32>()
            .map(QueryId)
            .map_err(|e| BenchError::invalid_config("query", format!("'{}': {}", s, e)))
    }
}

impl TryFrom<String> for QueryId {
    type Error = BenchError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<QueryId> for String {
    fn from(id: QueryId) -> Self {
        id.to_string()
    }
}

impl fmt::Display for QueryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

/// Selects which queries of the battery to run or report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuerySelector {
    /// A single query.
    Single(QueryId),
    /// An inclusive range of queries.
    Range {
        /// First query in the range.
        start: QueryId,
        /// Last query in the range (inclusive).
        end: QueryId,
    },
}

impl QuerySelector {
    /// Creates an inclusive range selector.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] when `start` is after `end`.
    pub fn range(start: u32, end: u32) -> Result<Self> {
        if start > end {
            return Err(BenchError::invalid_config(
                "queries",
                format!("range start q{} is after end q{}", start, end),
            ));
        }
        Ok(QuerySelector::Range {
            start: QueryId::new(start),
            end: QueryId::new(end),
        })
    }

    /// Returns whether the selector covers `id`.
    pub fn contains(&self, id: QueryId) -> bool {
        match *self {
            QuerySelector::Single(only) => only == id,
            QuerySelector::Range { start, end } => start <= id && id <= end,
        }
    }

    /// First and last selected id.
    pub fn bounds(&self) -> (QueryId, QueryId) {
        match *self {
            QuerySelector::Single(only) => (only, only),
            QuerySelector::Range { start, end } => (start, end),
        }
    }

    /// Iterates the selected ids in ascending order without materializing
    /// the range.
    pub fn ids(&self) -> impl Iterator<Item = QueryId> {
        let (start, end) = self.bounds();
        (start.number()..=end.number()).map(QueryId::new)
    }
}

impl Default for QuerySelector {
    fn default() -> Self {
        QuerySelector::Range {
            start: QueryId::new(1),
            end: QueryId::new(DEFAULT_QUERY_COUNT),
        }
    }
}

impl FromStr for QuerySelector {
    type Err = BenchError;

    /// Accepts `q3`, `3`, `1-6`, `q1-q6`, `q1..q6` and `q1..=q6`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let bounds = s
            .split_once("..=")
            .or_else(|| s.split_once(".."))
            .or_else(|| s.split_once('-'));

        match bounds {
            Some((start, end)) => {
                let start: QueryId = start.parse()?;
                let end: QueryId = end.parse()?;
                QuerySelector::range(start.number(), end.number())
            }
            None => Ok(QuerySelector::Single(s.parse()?)),
        }
    }
}

impl fmt::Display for QuerySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuerySelector::Single(id) => write!(f, "{}", id),
            QuerySelector::Range { start, end } => write!(f, "{}..{}", start, end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_id() {
        assert_eq!("q3".parse::<QueryId>().unwrap(), QueryId::new(3));
        assert_eq!("Q10".parse::<QueryId>().unwrap(), QueryId::new(10));
        assert_eq!(" q07 ".parse::<QueryId>().unwrap(), QueryId::new(7));
        assert_eq!("4".parse::<QueryId>().unwrap(), QueryId::new(4));
    }

    #[test]
    fn test_parse_query_id_rejects_garbage() {
        assert!("q".parse::<QueryId>().is_err());
        assert!("qx1".parse::<QueryId>().is_err());
        assert!("query1".parse::<QueryId>().is_err());
        assert!("".parse::<QueryId>().is_err());
    }

    #[test]
    fn test_display_is_lowercase() {
        let id: QueryId = "Q12".parse().unwrap();
        assert_eq!(id.to_string(), "q12");
    }

    #[test]
    fn test_numeric_ordering() {
        let mut ids: Vec<QueryId> = ["q10", "q2", "q1"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        ids.sort();
        let names: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
        assert_eq!(names, vec!["q1", "q2", "q10"]);
    }

    #[test]
    fn test_serde_as_string() {
        let id = QueryId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"q5\"");
        let back: QueryId = serde_json::from_str("\"Q5\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_default_selector_covers_first_six() {
        let selector = QuerySelector::default();
        assert_eq!(selector.ids().count(), 6);
        assert!(selector.contains(QueryId::new(1)));
        assert!(selector.contains(QueryId::new(6)));
        assert!(!selector.contains(QueryId::new(7)));
    }

    #[test]
    fn test_selector_forms() {
        assert_eq!(
            "q3".parse::<QuerySelector>().unwrap(),
            QuerySelector::Single(QueryId::new(3))
        );
        for form in ["1-6", "q1-q6", "q1..q6", "q1..=q6", "Q1..Q6"] {
            assert_eq!(
                form.parse::<QuerySelector>().unwrap(),
                QuerySelector::range(1, 6).unwrap(),
                "form {}",
                form
            );
        }
    }

    #[test]
    fn test_huge_range_is_lazy() {
        let selector: QuerySelector = "q0-q4000000000".parse().unwrap();
        let first: Vec<QueryId> = selector.ids().take(3).collect();
        assert_eq!(first, vec![QueryId::new(0), QueryId::new(1), QueryId::new(2)]);
        assert_eq!(selector.bounds(), (QueryId::new(0), QueryId::new(4_000_000_000)));
        assert!(selector.contains(QueryId::new(3_999_999_999)));
    }

    #[test]
    fn test_selector_rejects_reversed_range() {
        assert!("q6-q1".parse::<QuerySelector>().is_err());
        assert!(QuerySelector::range(4, 2).is_err());
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(QuerySelector::default().to_string(), "q1..q6");
        assert_eq!(QuerySelector::Single(QueryId::new(9)).to_string(), "q9");
    }
}
