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

//! Generator configuration: dataset size presets, column profiles and
//! width presets.

use crate::error::{BenchError, Result};
use std::fmt;
use std::str::FromStr;

/// Named dataset size presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetSize {
    /// 10,000 rows, 100 groups.
    Small,
    /// 250,000 rows, 500 groups. For machines where `Medium` exhausts memory.
    MediumSafe,
    /// 1,000,000 rows, 1,000 groups.
    Medium,
    /// 10,000,000 rows, 10,000 groups.
    Large,
    /// 100,000,000 rows, 100,000 groups.
    XLarge,
}

impl DatasetSize {
    /// Returns the row count.
    pub fn rows(&self) -> usize {
        match self {
            Self::Small => 10_000,
            Self::MediumSafe => 250_000,
            Self::Medium => 1_000_000,
            Self::Large => 10_000_000,
            Self::XLarge => 100_000_000,
        }
    }

    /// Returns the group count (grouping-key cardinality).
    pub fn groups(&self) -> usize {
        match self {
            Self::Small => 100,
            Self::MediumSafe => 500,
            Self::Medium => 1_000,
            Self::Large => 10_000,
            Self::XLarge => 100_000,
        }
    }

    /// Returns the canonical label, used in dataset file names.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::MediumSafe => "medium-safe",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::XLarge => "xlarge",
        }
    }

    /// Tier name used in result file names (`<engine>_<tier>.txt`): the
    /// aliases `light`, `full` and `heavy`, else the label.
    pub fn results_tier(&self) -> &'static str {
        match self {
            Self::Small => "light",
            Self::Medium => "full",
            Self::Large => "heavy",
            other => other.label(),
        }
    }

    /// Returns all size presets, smallest first.
    pub fn all() -> &'static [DatasetSize] {
        &[
            Self::Small,
            Self::MediumSafe,
            Self::Medium,
            Self::Large,
            Self::XLarge,
        ]
    }
}

impl FromStr for DatasetSize {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" | "light" => Ok(Self::Small),
            "medium-safe" | "medium_safe" => Ok(Self::MediumSafe),
            "medium" | "full" => Ok(Self::Medium),
            "large" | "heavy" => Ok(Self::Large),
            "xlarge" | "x-large" => Ok(Self::XLarge),
            other => Err(BenchError::invalid_config(
                "size",
                format!(
                    "unknown size '{}' (expected small, medium-safe, medium, large or xlarge)",
                    other
                ),
            )),
        }
    }
}

impl fmt::Display for DatasetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Column layout of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnProfile {
    /// The nine-column grouping schema (`id1..id6`, `v1..v3`).
    Grouping,
    /// Configurable counts of string, integer and float columns.
    Wide {
        /// Number of `str_<i>` grouping columns.
        strings: usize,
        /// Number of `int_<i>` value columns.
        integers: usize,
        /// Number of `flt_<i>` value columns.
        floats: usize,
    },
}

impl ColumnProfile {
    /// Total number of columns the profile produces.
    pub fn column_count(&self) -> usize {
        match *self {
            ColumnProfile::Grouping => 9,
            ColumnProfile::Wide {
                strings,
                integers,
                floats,
            } => strings + integers + floats,
        }
    }
}

impl From<WidthPreset> for ColumnProfile {
    fn from(preset: WidthPreset) -> Self {
        let (strings, integers, floats) = preset.widths();
        ColumnProfile::Wide {
            strings,
            integers,
            floats,
        }
    }
}

impl FromStr for ColumnProfile {
    type Err = BenchError;

    /// Accepts `grouping` (alias `h2oai`) or any [`WidthPreset`] name.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grouping" | "h2oai" => Ok(ColumnProfile::Grouping),
            other => other.parse::<WidthPreset>().map(ColumnProfile::from),
        }
    }
}

/// Named column-width presets for the wide profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidthPreset {
    /// 1 string, 1 integer, 1 float column.
    Narrow,
    /// 3 string, 4 integer, 2 float columns.
    Medium,
    /// 10 string, 20 integer, 20 float columns.
    Wide,
    /// 50 string, 100 integer, 50 float columns.
    VeryWide,
}

impl WidthPreset {
    /// Returns `(strings, integers, floats)`.
    pub fn widths(&self) -> (usize, usize, usize) {
        match self {
            Self::Narrow => (1, 1, 1),
            Self::Medium => (3, 4, 2),
            Self::Wide => (10, 20, 20),
            Self::VeryWide => (50, 100, 50),
        }
    }

    /// Returns the preset name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Narrow => "narrow",
            Self::Medium => "medium",
            Self::Wide => "wide",
            Self::VeryWide => "very_wide",
        }
    }

    /// Returns all presets, narrowest first.
    pub fn all() -> &'static [WidthPreset] {
        &[Self::Narrow, Self::Medium, Self::Wide, Self::VeryWide]
    }
}

impl FromStr for WidthPreset {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.name() == s.trim().to_ascii_lowercase().replace('-', "_"))
            .ok_or_else(|| {
                BenchError::invalid_config(
                    "profile",
                    format!(
                        "unknown profile '{}' (expected grouping, narrow, medium, wide or very_wide)",
                        s
                    ),
                )
            })
    }
}
