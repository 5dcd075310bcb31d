// Dweve profview - Profile Explorer View State
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

//! Benchmarks for the query-string codec and explorer mutations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use profview_query::{parse, serialize, ProfileExplorer, QuerySelection, Side};

const COMPARE_QUERY: &str = "compare_a=true&expression_a=process_cpu%7Bjob%3D%22api%22%7D\
    &from_a=1650000000000&to_a=1650003600000&merge_a=false&time_selection_a=relative%3Ahour%7C1\
    &labels_a=job%3Dapi&labels_a=instance%3Dhost-1&time_a=1650000123000\
    &compare_b=true&expression_b=process_cpu&from_b=1650000000000&to_b=1650003600000\
    &merge_b=true&time_selection_b=relative%3Ahour%7C1";

fn bench_codec(c: &mut Criterion) {
    c.bench_function("parse_compare_query", |b| b.iter(|| parse(black_box(COMPARE_QUERY))));

    let params = parse(COMPARE_QUERY);
    c.bench_function("serialize_compare_query", |b| b.iter(|| serialize(black_box(&params))));
}

fn bench_explorer(c: &mut Criterion) {
    let explorer = ProfileExplorer::default();
    let params = parse(COMPARE_QUERY);
    let query = QuerySelection::new("up", 1, 2);

    c.bench_function("explorer_view", |b| b.iter(|| explorer.view(black_box(&params))));
    c.bench_function("explorer_select_query", |b| {
        b.iter(|| explorer.select_query(black_box(&params), Side::B, &query))
    });
    c.bench_function("explorer_close_a", |b| {
        b.iter(|| explorer.close_profile(black_box(&params), Side::A))
    });
}

criterion_group!(benches, bench_codec, bench_explorer);
criterion_main!(benches);
