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

//! Linear congruential sequence generator.
//!
//! The constants are the Numerical Recipes pair, so any implementation
//! using them produces the same stream for the same seed.

/// LCG multiplier.
pub const MULTIPLIER: u32 = 1_664_525;

/// LCG increment.
pub const INCREMENT: u32 = 1_013_904_223;

/// Golden-ratio increment used to derive per-column seeds.
pub const SEED_STRIDE: u32 = 0x9E37_79B9;

/// Salt separating null-mask streams from value streams.
pub const MASK_SALT: u32 = 0x2545_F491;

/// A 32-bit linear congruential generator.
///
/// `state = state * 1664525 + 1013904223 (mod 2^32)`. Each column or key
/// stream owns its own instance.
///
/// # Example
///
/// ```
/// use framebench::generators::Lcg;
///
/// let mut a = Lcg::new(42);
/// let mut b = Lcg::new(42);
/// assert_eq!(a.next_u32(), b.next_u32());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Creates a generator with the given seed as initial state.
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Returns the current state.
    pub const fn state(&self) -> u32 {
        self.state
    }

    /// Advances once, returning the successor generator and the emitted value.
    #[must_use]
    pub const fn advance(self) -> (Lcg, u32) {
        let next = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        (Lcg { state: next }, next)
    }

    /// Advances in place and returns the emitted value.
    pub fn next_u32(&mut self) -> u32 {
        let (next, value) = self.advance();
        *self = next;
        value
    }

    /// Returns a value in `0..bound`. `bound` must be non-zero.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        self.next_u32() % bound
    }

    /// Returns a value in `[0, 1)`.
    pub fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }
}

impl Iterator for Lcg {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        Some(self.next_u32())
    }
}

/// Murmur3 32-bit finalizer. A bijection on `u32` with full avalanche.
pub const fn fmix32(mut h: u32) -> u32 {
    h ^= h >> 16;
    h = h.wrapping_mul(0x85EB_CA6B);
    h ^= h >> 13;
    h = h.wrapping_mul(0xC2B2_AE35);
    h ^= h >> 16;
    h
}

/// Derives the seed of column `index` from the dataset seed.
///
/// The dataset seed is finalized before the column offset is applied, and
/// the sum is finalized again, so nearby dataset seeds never reproduce each
/// other's columns at shifted positions.
pub fn column_seed(seed: u32, index: usize) -> u32 {
    fmix32(fmix32(seed) ^ SEED_STRIDE.wrapping_mul(index as u32 + 1))
}

/// Derives the seed of the null-mask stream of column `index`.
pub fn mask_seed(seed: u32, index: usize) -> u32 {
    fmix32(column_seed(seed, index) ^ MASK_SALT)
}

/// Rounds to 6 fractional digits.
pub fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}
