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

//! In-memory synthetic datasets.
//!
//! A [`Dataset`] is an ordered list of named, equal-length columns. It is
//! immutable once built; engines receive it by shared reference.
//!
//! A column may carry a validity mask. Slots marked invalid are nulls and
//! always hold the default value of the column type (`""`, `0` or `0.0`).

use crate::error::{BenchError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Values of one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum ColumnData {
    /// String grouping keys drawn from a bounded token set.
    GroupingStr(Vec<String>),
    /// Integer grouping keys drawn from a bounded range.
    GroupingInt(Vec<i64>),
    /// Integer measures.
    IntValue(Vec<i64>),
    /// Float measures, rounded to 6 fractional digits.
    FloatValue(Vec<f64>),
}

impl ColumnData {
    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            ColumnData::GroupingStr(v) => v.len(),
            ColumnData::GroupingInt(v) | ColumnData::IntValue(v) => v.len(),
            ColumnData::FloatValue(v) => v.len(),
        }
    }

    /// Returns true when the column holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Short type name, as shown by `info`.
    pub fn kind(&self) -> &'static str {
        match self {
            ColumnData::GroupingStr(_) => "grouping str",
            ColumnData::GroupingInt(_) => "grouping int",
            ColumnData::IntValue(_) => "int value",
            ColumnData::FloatValue(_) => "float value",
        }
    }

    /// Renders the value at `row` as text, or `None` past the end.
    ///
    /// Floats always keep a decimal point or exponent so they read back as
    /// floats.
    pub fn render(&self, row: usize) -> Option<String> {
        match self {
            ColumnData::GroupingStr(v) => v.get(row).cloned(),
            ColumnData::GroupingInt(v) | ColumnData::IntValue(v) => {
                v.get(row).map(|x| x.to_string())
            }
            ColumnData::FloatValue(v) => v.get(row).map(|x| format!("{:?}", x)),
        }
    }

    /// Returns true for the two grouping-key kinds.
    pub fn is_grouping(&self) -> bool {
        matches!(self, ColumnData::GroupingStr(_) | ColumnData::GroupingInt(_))
    }

    /// Overwrites the value at `row` with the type default.
    pub(crate) fn clear(&mut self, row: usize) {
        match self {
            ColumnData::GroupingStr(v) => v[row].clear(),
            ColumnData::GroupingInt(v) | ColumnData::IntValue(v) => v[row] = 0,
            ColumnData::FloatValue(v) => v[row] = 0.0,
        }
    }

    /// Orders two rows of this column by value.
    pub(crate) fn cmp_rows(&self, a: usize, b: usize) -> Ordering {
        match self {
            ColumnData::GroupingStr(v) => v[a].cmp(&v[b]),
            ColumnData::GroupingInt(v) | ColumnData::IntValue(v) => v[a].cmp(&v[b]),
            ColumnData::FloatValue(v) => v[a].total_cmp(&v[b]),
        }
    }

    /// Reorders the values so that new row `i` is old row `order[i]`.
    pub(crate) fn permute(&mut self, order: &[usize]) {
        fn take<T: Clone>(values: &[T], order: &[usize]) -> Vec<T> {
            order.iter().map(|&i| values[i].clone()).collect()
        }
        match self {
            ColumnData::GroupingStr(v) => *v = take(v, order),
            ColumnData::GroupingInt(v) | ColumnData::IntValue(v) => *v = take(v, order),
            ColumnData::FloatValue(v) => *v = take(v, order),
        }
    }
}

/// A named column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name, unique within its dataset.
    pub name: String,
    /// Column values.
    pub data: ColumnData,
    /// Per-row validity; `None` means every value is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validity: Option<Vec<bool>>,
}

impl Column {
    /// Creates a column without nulls.
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
            validity: None,
        }
    }

    /// Applies a validity mask. Invalid slots are reset to the type default;
    /// a mask without any `false` is dropped.
    pub fn with_validity(mut self, validity: Vec<bool>) -> Self {
        if validity.iter().all(|valid| *valid) {
            self.validity = None;
            return self;
        }
        for (row, valid) in validity.iter().enumerate() {
            if !valid && row < self.data.len() {
                self.data.clear(row);
            }
        }
        self.validity = Some(validity);
        self
    }

    /// Returns false when the value at `row` is null.
    pub fn is_valid(&self, row: usize) -> bool {
        self.validity
            .as_ref()
            .map_or(true, |mask| mask.get(row).copied().unwrap_or(true))
    }

    /// Number of null slots.
    pub fn null_count(&self) -> usize {
        self.validity
            .as_ref()
            .map_or(0, |mask| mask.iter().filter(|valid| !**valid).count())
    }

    /// Renders the value at `row`; nulls render as an empty string.
    pub fn render(&self, row: usize) -> Option<String> {
        if !self.is_valid(row) {
            return (row < self.data.len()).then(String::new);
        }
        self.data.render(row)
    }

    /// Orders two rows by this column, nulls last.
    pub(crate) fn cmp_rows(&self, a: usize, b: usize) -> Ordering {
        match (self.is_valid(a), self.is_valid(b)) {
            (true, true) => self.data.cmp_rows(a, b),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        }
    }

    pub(crate) fn permute(&mut self, order: &[usize]) {
        self.data.permute(order);
        if let Some(mask) = &mut self.validity {
            *mask = order.iter().map(|&i| mask[i]).collect();
        }
    }
}

/// An ordered collection of equal-length named columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    /// Builds a dataset from columns.
    ///
    /// # Errors
    ///
    /// Returns [`BenchError::InvalidConfig`] when column lengths differ or
    /// a column name repeats.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let rows = columns.first().map(|c| c.data.len()).unwrap_or(0);
        let mut seen = HashSet::with_capacity(columns.len());

        for column in &columns {
            if !seen.insert(column.name.as_str()) {
                return Err(BenchError::invalid_config(
                    "columns",
                    format!("duplicate column name '{}'", column.name),
                ));
            }
            if let Some(mask) = &column.validity {
                if mask.len() != rows {
                    return Err(BenchError::invalid_config(
                        "columns",
                        format!(
                            "validity of column '{}' has {} entries, expected {}",
                            column.name,
                            mask.len(),
                            rows
                        ),
                    ));
                }
            }
            if column.data.len() != rows {
                return Err(BenchError::invalid_config(
                    "columns",
                    format!(
                        "column '{}' has {} rows, expected {}",
                        column.name,
                        column.data.len(),
                        rows
                    ),
                ));
            }
        }

        Ok(Self { columns, rows })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Columns in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Total null slots across all columns.
    pub fn null_count(&self) -> usize {
        self.columns.iter().map(Column::null_count).sum()
    }

    /// Returns the dataset with rows ordered by its grouping columns, in
    /// column order, nulls last. The sort is stable.
    pub fn sorted_by_keys(mut self) -> Self {
        let keys: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, c)| c.data.is_grouping())
            .map(|(i, _)| i)
            .collect();
        if keys.is_empty() {
            return self;
        }

        let mut order: Vec<usize> = (0..self.rows).collect();
        order.sort_by(|&a, &b| {
            keys.iter()
                .map(|&k| self.columns[k].cmp_rows(a, b))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });

        for column in &mut self.columns {
            column.permute(&order);
        }
        self
    }
}
