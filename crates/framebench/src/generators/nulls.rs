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

//! Null masks for generated columns.
//!
//! Grouping keys are nulled by value: a fraction of the distinct keys is
//! chosen and every row holding one of them becomes null, so a null group
//! disappears as a whole. Measures are nulled row by row.

use super::dataset::{Column, ColumnData};
use super::lcg::{mask_seed, Lcg};
use std::collections::{BTreeSet, HashSet};

/// Null ratio of the H2O.ai presets.
pub const DEFAULT_NULL_RATIO: f64 = 0.05;

/// Applies a null mask to `column`, the `index`-th column of its dataset.
///
/// A ratio of zero or less leaves the column untouched.
pub fn mask_column(column: Column, seed: u32, index: usize, ratio: f64) -> Column {
    if ratio <= 0.0 {
        return column;
    }
    let mut rng = Lcg::new(mask_seed(seed, index));
    let validity = match &column.data {
        ColumnData::GroupingStr(values) => group_mask(values, ratio, &mut rng),
        ColumnData::GroupingInt(values) => group_mask(values, ratio, &mut rng),
        ColumnData::IntValue(values) => row_mask(values.len(), ratio, &mut rng),
        ColumnData::FloatValue(values) => row_mask(values.len(), ratio, &mut rng),
    };
    column.with_validity(validity)
}

fn row_mask(rows: usize, ratio: f64, rng: &mut Lcg) -> Vec<bool> {
    (0..rows).map(|_| rng.next_unit() >= ratio).collect()
}

fn group_mask<T: Ord + std::hash::Hash + Clone>(values: &[T], ratio: f64, rng: &mut Lcg) -> Vec<bool> {
    let mut distinct: Vec<T> = values.iter().cloned().collect::<BTreeSet<_>>().into_iter().collect();
    let nulls = (distinct.len() as f64 * ratio) as usize;
    if nulls == 0 {
        return vec![true; values.len()];
    }

    // Fisher-Yates over the sorted distinct keys.
    for i in (1..distinct.len()).rev() {
        let j = rng.next_below(i as u32 + 1) as usize;
        distinct.swap(i, j);
    }
    let null_keys: HashSet<&T> = distinct[..nulls.min(distinct.len())].iter().collect();

    values.iter().map(|v| !null_keys.contains(v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(n: i64, groups: i64) -> Column {
        Column::new(
            "id4",
            ColumnData::GroupingInt((0..n).map(|i| i % groups + 1).collect()),
        )
    }

    #[test]
    fn test_zero_ratio_is_identity() {
        let column = keys(100, 10);
        assert_eq!(mask_column(column.clone(), 0, 3, 0.0), column);
    }

    #[test]
    fn test_group_mask_nulls_whole_groups() {
        let column = mask_column(keys(1_000, 100), 0, 3, 0.05);
        let ColumnData::GroupingInt(values) = &column.data else {
            panic!("unexpected {:?}", column.data);
        };

        let original = keys(1_000, 100);
        let ColumnData::GroupingInt(before) = &original.data else {
            unreachable!()
        };
        let nulled: BTreeSet<i64> = (0..1_000)
            .filter(|row| !column.is_valid(*row))
            .map(|row| before[row])
            .collect();

        assert_eq!(nulled.len(), 5);
        assert_eq!(column.null_count(), 50);
        assert!((0..1_000).all(|row| column.is_valid(row) || values[row] == 0));
    }

    #[test]
    fn test_row_mask_ratio() {
        let column = Column::new("v3", ColumnData::FloatValue(vec![1.5; 10_000]));
        let masked = mask_column(column, 9, 8, 0.05);
        let nulls = masked.null_count();
        assert!((300..700).contains(&nulls), "{} nulls", nulls);
    }

    #[test]
    fn test_mask_is_deterministic() {
        let a = mask_column(keys(500, 50), 4, 0, 0.1);
        let b = mask_column(keys(500, 50), 4, 0, 0.1);
        assert_eq!(a, b);
        let c = mask_column(keys(500, 50), 5, 0, 0.1);
        assert_ne!(a.validity, c.validity);
    }

    #[test]
    fn test_too_few_groups_for_a_null() {
        let column = mask_column(keys(100, 10), 0, 0, 0.05);
        assert!(column.validity.is_none());
    }
}
