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

//! Wide datasets with configurable column counts.

use super::dataset::Dataset;
use super::{float_column, int_column, token_column};
use crate::error::{validate_dataset_size, BenchError, Result};
use tracing::debug;

/// Exclusive upper bound of `int_<i>` values.
pub const WIDE_INT_CARDINALITY: usize = 1_000;

/// Exclusive upper bound of `flt_<i>` values.
pub const WIDE_FLOAT_SCALE: f64 = 1_000.0;

/// Generates a wide dataset: `str_<i>` columns first, then `int_<i>`, then
/// `flt_<i>`, each family numbered from zero.
pub fn generate_wide(
    rows: usize,
    groups: usize,
    strings: usize,
    integers: usize,
    floats: usize,
    seed: u32,
) -> Result<Dataset> {
    validate_dataset_size(rows)?;
    if groups == 0 {
        return Err(BenchError::invalid_config("groups", "must be at least 1"));
    }

    debug!(rows, groups, strings, integers, floats, seed, "generating wide dataset");

    let mut columns = Vec::with_capacity(strings + integers + floats);
    let mut index = 0;

    for c in 0..strings {
        columns.push(token_column(
            &format!("str_{}", c),
            seed,
            index,
            rows,
            groups,
            |i| format!("id{:06}", i),
        ));
        index += 1;
    }
    for c in 0..integers {
        columns.push(int_column(
            &format!("int_{}", c),
            seed,
            index,
            rows,
            0,
            WIDE_INT_CARDINALITY,
            false,
        ));
        index += 1;
    }
    for c in 0..floats {
        columns.push(float_column(
            &format!("flt_{}", c),
            seed,
            index,
            rows,
            WIDE_FLOAT_SCALE,
        ));
        index += 1;
    }

    Dataset::new(columns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::ColumnData;

    #[test]
    fn test_column_naming() {
        let ds = generate_wide(10, 5, 1, 2, 1, 0).unwrap();
        assert_eq!(ds.column_names(), vec!["str_0", "int_0", "int_1", "flt_0"]);
    }

    #[test]
    fn test_ranges() {
        let ds = generate_wide(500, 7, 1, 1, 1, 11).unwrap();
        match &ds.column("int_0").unwrap().data {
            ColumnData::IntValue(values) => assert!(values.iter().all(|v| (0..1000).contains(v))),
            other => panic!("unexpected {:?}", other),
        }
        match &ds.column("flt_0").unwrap().data {
            ColumnData::FloatValue(values) => {
                assert!(values.iter().all(|v| (0.0..1000.0).contains(v)))
            }
            other => panic!("unexpected {:?}", other),
        }
        match &ds.column("str_0").unwrap().data {
            ColumnData::GroupingStr(values) => {
                assert!(values.iter().all(|v| v.len() == 8));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_string_cardinality() {
        let groups = 12;
        let ds = generate_wide(600, groups, 2, 0, 0, 4).unwrap();
        for column in ds.columns() {
            match &column.data {
                ColumnData::GroupingStr(values) => {
                    let keys: std::collections::BTreeSet<u64> = values
                        .iter()
                        .map(|v| v.strip_prefix("id").unwrap().parse().unwrap())
                        .collect();
                    assert!(keys.iter().all(|k| (1..=groups as u64).contains(k)));
                    assert_eq!(keys.len(), groups);
                }
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn test_columns_are_independent() {
        let ds = generate_wide(100, 50, 0, 2, 0, 3).unwrap();
        assert_ne!(ds.columns()[0].data, ds.columns()[1].data);
    }

    #[test]
    fn test_zero_groups_rejected() {
        assert!(generate_wide(10, 0, 1, 0, 0, 0).is_err());
    }
}
