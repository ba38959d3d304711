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

//! CSV persistence of datasets.
//!
//! Files carry a header row. Nulls are written as empty cells. Reading
//! infers column types from the non-empty cells: integer columns named
//! `id*` or `k*` are grouping keys, other integer columns are values, float
//! columns are values and anything else is a string grouping key.

use crate::error::{BenchError, Result};
use crate::generators::{Column, ColumnData, Dataset};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

fn csv_error(e: csv::Error) -> BenchError {
    BenchError::Csv(e.to_string())
}

/// Writes a dataset as CSV to any writer.
pub fn write_dataset<W: Write>(dataset: &Dataset, writer: W) -> Result<()> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(dataset.column_names()).map_err(csv_error)?;

    let mut record = Vec::with_capacity(dataset.columns().len());
    for row in 0..dataset.rows() {
        record.clear();
        for column in dataset.columns() {
            record.push(column.render(row).unwrap_or_default());
        }
        out.write_record(&record).map_err(csv_error)?;
    }

    out.flush()
        .map_err(|e| BenchError::Csv(e.to_string()))
}

/// Reads a CSV dataset from any reader.
pub fn read_dataset<R: Read>(reader: R) -> Result<Dataset> {
    let mut input = csv::Reader::from_reader(reader);
    let headers: Vec<String> = input
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(str::to_string)
        .collect();

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in input.records() {
        let record = record.map_err(csv_error)?;
        for (index, value) in record.iter().enumerate() {
            if let Some(column) = cells.get_mut(index) {
                column.push(value.to_string());
            }
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| {
            let validity: Vec<bool> = values.iter().map(|v| !v.is_empty()).collect();
            let data = infer_column(&name, values);
            Column::new(name, data).with_validity(validity)
        })
        .collect();

    Dataset::new(columns)
}

// Parses every non-empty cell; empty cells take the type default.
fn parse_cells<T: std::str::FromStr + Default>(values: &[String]) -> Option<Vec<T>> {
    values
        .iter()
        .map(|v| if v.is_empty() { Some(T::default()) } else { v.parse().ok() })
        .collect()
}

fn infer_column(name: &str, values: Vec<String>) -> ColumnData {
    if values.iter().all(|v| v.is_empty()) {
        return ColumnData::GroupingStr(values);
    }

    if let Some(ints) = parse_cells::<i64>(&values) {
        return if name.starts_with("id") || name.starts_with('k') {
            ColumnData::GroupingInt(ints)
        } else {
            ColumnData::IntValue(ints)
        };
    }

    match parse_cells::<f64>(&values) {
        Some(floats) => ColumnData::FloatValue(floats),
        None => ColumnData::GroupingStr(values),
    }
}

/// Writes a dataset to a CSV file, creating parent directories.
pub fn write_csv(dataset: &Dataset, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BenchError::from_io(parent, e))?;
    }
    let file = File::create(path).map_err(|e| BenchError::from_io(path, e))?;
    write_dataset(dataset, std::io::BufWriter::new(file))?;
    debug!(path = %path.display(), rows = dataset.rows(), "wrote dataset");
    Ok(())
}

/// Reads a dataset from a CSV file.
pub fn read_csv(path: &Path) -> Result<Dataset> {
    let file = File::open(path).map_err(|e| BenchError::from_io(path, e))?;
    let dataset = read_dataset(std::io::BufReader::new(file))?;
    debug!(path = %path.display(), rows = dataset.rows(), "read dataset");
    Ok(dataset)
}
