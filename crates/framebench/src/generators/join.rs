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

//! Join table pairs.
//!
//! Both sides draw keys from the universe `0..groups` with their own
//! generator states, so keys overlap while rows stay independent. Keys and
//! values are interleaved on the same stream: each row consumes one value
//! for the key and the next for the measure.

use super::dataset::{Column, ColumnData, Dataset};
use super::lcg::Lcg;
use crate::error::{validate_dataset_size, BenchError, Result};
use std::fmt;
use std::str::FromStr;

/// Left-side rows of the micro join.
pub const MICRO_LEFT_ROWS: usize = 50_000;

/// Right-side rows of the micro join.
pub const MICRO_RIGHT_ROWS: usize = 5_000;

/// Key universe of the micro join.
pub const MICRO_GROUPS: usize = 1_000;

/// Join key layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKeyKind {
    /// Integer key column `id`.
    Int,
    /// String key column `id` formatted `k%04d`.
    Str,
    /// Composite string keys `id1`, `id2` from two generators.
    StrPair,
}

impl JoinKeyKind {
    /// Returns all key kinds.
    pub fn all() -> &'static [JoinKeyKind] {
        &[Self::Int, Self::Str, Self::StrPair]
    }

    /// Key column names for this kind.
    pub fn key_columns(&self) -> &'static [&'static str] {
        match self {
            Self::Int | Self::Str => &["id"],
            Self::StrPair => &["id1", "id2"],
        }
    }
}

impl fmt::Display for JoinKeyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::Str => "str",
            Self::StrPair => "str-pair",
        })
    }
}

impl FromStr for JoinKeyKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "int" | "int64" => Ok(Self::Int),
            "str" | "string" => Ok(Self::Str),
            "str-pair" | "str_pair" | "str2" => Ok(Self::StrPair),
            other => Err(BenchError::invalid_config(
                "join",
                format!("unknown key kind '{}'", other),
            )),
        }
    }
}

/// Parameters of a join table pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinSpec {
    /// Key layout.
    pub kind: JoinKeyKind,
    /// Rows in the left table.
    pub left_rows: usize,
    /// Rows in the right table.
    pub right_rows: usize,
    /// Key universe size.
    pub groups: usize,
    /// Left seeds; the second is only used by [`JoinKeyKind::StrPair`].
    pub left_seeds: (u32, u32),
    /// Right seeds; the second is only used by [`JoinKeyKind::StrPair`].
    pub right_seeds: (u32, u32),
}

impl JoinSpec {
    /// The micro-join pair: 50,000 left rows, 5,000 right rows, 1,000 keys.
    pub fn micro(kind: JoinKeyKind) -> Self {
        let (left_seeds, right_seeds) = match kind {
            JoinKeyKind::Int => ((1, 0), (2, 0)),
            JoinKeyKind::Str => ((3, 0), (4, 0)),
            JoinKeyKind::StrPair => ((5, 6), (7, 8)),
        };
        Self {
            kind,
            left_rows: MICRO_LEFT_ROWS,
            right_rows: MICRO_RIGHT_ROWS,
            groups: MICRO_GROUPS,
            left_seeds,
            right_seeds,
        }
    }

    /// Overrides the row counts.
    pub fn with_rows(mut self, left_rows: usize, right_rows: usize) -> Self {
        self.left_rows = left_rows;
        self.right_rows = right_rows;
        self
    }

    /// Overrides the key universe size.
    pub fn with_groups(mut self, groups: usize) -> Self {
        self.groups = groups;
        self
    }
}

/// A generated left/right pair.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinTables {
    /// Left table; measure column `v`.
    pub left: Dataset,
    /// Right table; measure column `w`.
    pub right: Dataset,
}

/// Generates a join table pair.
///
/// # Errors
///
/// Returns [`BenchError::DatasetTooLarge`] when either side exceeds the row
/// limit and [`BenchError::InvalidConfig`] when `groups` is zero or does not
/// fit the generator's 32-bit range.
pub fn generate_join_pair(spec: &JoinSpec) -> Result<JoinTables> {
    validate_dataset_size(spec.left_rows)?;
    validate_dataset_size(spec.right_rows)?;
    let groups = u32::try_from(spec.groups)
        .ok()
        .filter(|g| *g > 0)
        .ok_or_else(|| {
            BenchError::invalid_config(
                "groups",
                format!("must be between 1 and {}, got {}", u32::MAX, spec.groups),
            )
        })?;

    Ok(JoinTables {
        left: join_side(spec.kind, spec.left_rows, groups, spec.left_seeds, "v")?,
        right: join_side(spec.kind, spec.right_rows, groups, spec.right_seeds, "w")?,
    })
}

fn join_side(
    kind: JoinKeyKind,
    rows: usize,
    groups: u32,
    seeds: (u32, u32),
    value_name: &str,
) -> Result<Dataset> {
    let mut rng = Lcg::new(seeds.0);
    let mut values = Vec::with_capacity(rows);

    let mut columns = match kind {
        JoinKeyKind::Int => {
            let mut keys = Vec::with_capacity(rows);
            for _ in 0..rows {
                keys.push(i64::from(rng.next_below(groups)));
                values.push(i64::from(rng.next_u32()));
            }
            vec![Column::new("id", ColumnData::GroupingInt(keys))]
        }
        JoinKeyKind::Str => {
            let mut keys = Vec::with_capacity(rows);
            for _ in 0..rows {
                keys.push(format!("k{:04}", rng.next_below(groups)));
                values.push(i64::from(rng.next_u32()));
            }
            vec![Column::new("id", ColumnData::GroupingStr(keys))]
        }
        JoinKeyKind::StrPair => {
            let mut rng_b = Lcg::new(seeds.1);
            let mut keys_a = Vec::with_capacity(rows);
            let mut keys_b = Vec::with_capacity(rows);
            for _ in 0..rows {
                keys_a.push(format!("k{:04}", rng.next_below(groups)));
                keys_b.push(format!("k{:04}", rng_b.next_below(groups)));
                values.push(i64::from(rng.next_u32()));
            }
            vec![
                Column::new("id1", ColumnData::GroupingStr(keys_a)),
                Column::new("id2", ColumnData::GroupingStr(keys_b)),
            ]
        }
    };

    columns.push(Column::new(value_name, ColumnData::IntValue(values)));
    Dataset::new(columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(kind: JoinKeyKind) -> JoinSpec {
        JoinSpec::micro(kind).with_rows(500, 50).with_groups(20)
    }

    #[test]
    fn test_micro_defaults() {
        let spec = JoinSpec::micro(JoinKeyKind::StrPair);
        assert_eq!(spec.left_rows, 50_000);
        assert_eq!(spec.right_rows, 5_000);
        assert_eq!(spec.groups, 1_000);
        assert_eq!(spec.left_seeds, (5, 6));
        assert_eq!(spec.right_seeds, (7, 8));
    }

    #[test]
    fn test_int_pair_layout() {
        let tables = generate_join_pair(&small(JoinKeyKind::Int)).unwrap();
        assert_eq!(tables.left.column_names(), vec!["id", "v"]);
        assert_eq!(tables.right.column_names(), vec!["id", "w"]);
        assert_eq!(tables.left.rows(), 500);
        assert_eq!(tables.right.rows(), 50);

        match &tables.left.column("id").unwrap().data {
            ColumnData::GroupingInt(keys) => assert!(keys.iter().all(|k| (0..20).contains(k))),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_keys_and_values_interleave() {
        let tables = generate_join_pair(&small(JoinKeyKind::Int)).unwrap();
        let mut rng = Lcg::new(1);
        let first_key = i64::from(rng.next_u32() % 20);
        let first_value = i64::from(rng.next_u32());

        match (
            &tables.left.column("id").unwrap().data,
            &tables.left.column("v").unwrap().data,
        ) {
            (ColumnData::GroupingInt(keys), ColumnData::IntValue(values)) => {
                assert_eq!(keys[0], first_key);
                assert_eq!(values[0], first_value);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_str_keys_formatted() {
        let tables = generate_join_pair(&small(JoinKeyKind::Str)).unwrap();
        match &tables.right.column("id").unwrap().data {
            ColumnData::GroupingStr(keys) => {
                assert!(keys.iter().all(|k| k.len() == 5 && k.starts_with('k')))
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_pair_sides_differ() {
        let tables = generate_join_pair(&small(JoinKeyKind::StrPair)).unwrap();
        assert_eq!(tables.left.column_names(), vec!["id1", "id2", "v"]);
        assert_ne!(
            tables.left.column("id1").unwrap().data,
            tables.left.column("id2").unwrap().data
        );
    }

    #[test]
    fn test_deterministic() {
        let spec = small(JoinKeyKind::StrPair);
        assert_eq!(
            generate_join_pair(&spec).unwrap(),
            generate_join_pair(&spec).unwrap()
        );
    }

    #[test]
    fn test_zero_groups_rejected() {
        let spec = small(JoinKeyKind::Int).with_groups(0);
        assert!(matches!(
            generate_join_pair(&spec),
            Err(BenchError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("str2".parse::<JoinKeyKind>().unwrap(), JoinKeyKind::StrPair);
        assert_eq!(JoinKeyKind::StrPair.to_string(), "str-pair");
        assert_eq!(JoinKeyKind::StrPair.key_columns(), &["id1", "id2"]);
    }
}
