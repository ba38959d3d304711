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

//! Generator and parser throughput benchmarks.
//!
//! Dataset generation dominates harness setup on the large presets, and the
//! parsers run over every result file a comparison reads.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use framebench::generators::{generate, generate_join_pair, ColumnProfile, JoinKeyKind, JoinSpec, WidthPreset};
use framebench::parsers::{parse, SourceFormat};

const ROW_COUNTS: [usize; 3] = [1_000, 10_000, 100_000];

fn bench_grouping(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_grouping");

    for &rows in &ROW_COUNTS {
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &rows, |b, &rows| {
            b.iter(|| generate(black_box(rows), rows / 100, ColumnProfile::Grouping, 0))
        });
    }

    group.finish();
}

fn bench_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_wide");
    let rows = 10_000;

    for preset in WidthPreset::all() {
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_function(preset.name(), |b| {
            b.iter(|| generate(black_box(rows), 100, (*preset).into(), 0))
        });
    }

    group.finish();
}

fn bench_join_pair(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_join_pair");

    for kind in JoinKeyKind::all() {
        let spec = JoinSpec::micro(*kind);
        group.bench_function(kind.to_string(), |b| {
            b.iter(|| generate_join_pair(black_box(&spec)))
        });
    }

    group.finish();
}

fn bench_parsers(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    let go_output: String = (1..=500)
        .map(|q| format!("BenchmarkGroupByQ{}_Medium-8\t10\t{}\tns/op\t2048 B/op\n", q, q * 1_000))
        .collect();
    let entries: Vec<String> = (1..=500)
        .map(|q| format!(r#"{{"name": "test_groupby_h2oai_q{}", "stats": {{"median": 0.01}}}}"#, q))
        .collect();
    let json_output = format!(r#"{{"benchmarks": [{}]}}"#, entries.join(","));

    group.bench_function("gobench", |b| {
        b.iter(|| parse(black_box(&go_output), SourceFormat::GoBench))
    });
    group.bench_function("benchmark_json", |b| {
        b.iter(|| parse(black_box(&json_output), SourceFormat::BenchmarkJson))
    });
    group.bench_function("auto_detect", |b| {
        b.iter(|| parse(black_box(&json_output), SourceFormat::Auto))
    });

    group.finish();
}

criterion_group!(benches, bench_grouping, bench_wide, bench_join_pair, bench_parsers);
criterion_main!(benches);
