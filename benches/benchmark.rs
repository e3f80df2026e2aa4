// Copyright 2021 CoD Technologies Corp.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! decimal-text benchmark

use bencher::{benchmark_group, benchmark_main, black_box, Bencher};
use decimal_text::{add_decimal_strings, is_valid_decimal_literal, Decimal};
use std::collections::hash_map::DefaultHasher;
use std::hash::Hash;

#[inline(always)]
fn parse(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn decimal_is_valid_literal(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = is_valid_decimal_literal(black_box("12345678901.23456789"));
        black_box(_n);
    })
}

fn decimal_parse(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = parse(black_box("12345678901.23456789"));
    })
}

fn decimal_to_string(bench: &mut Bencher) {
    let val = parse("12345678901.23456789");
    bench.iter(|| {
        let _n = black_box(&val).to_string();
    })
}

#[inline(always)]
fn add(x: &Decimal, y: &Decimal) -> Decimal {
    x + y
}

fn decimal_add(bench: &mut Bencher) {
    let x = parse("12345678901.23456789");
    let y = parse("123456.7890123456789");
    bench.iter(|| {
        let _n = add(black_box(&x), black_box(&y));
    })
}

fn decimal_add_mixed_sign(bench: &mut Bencher) {
    let x = parse("12345678901.23456789");
    let y = parse("-123456.7890123456789");
    bench.iter(|| {
        let _n = add(black_box(&x), black_box(&y));
    })
}

#[inline(always)]
fn sub(x: &Decimal, y: &Decimal) -> Decimal {
    x - y
}

fn decimal_sub(bench: &mut Bencher) {
    let x = parse("12345678901.23456789");
    let y = parse("123456.7890123456789");
    bench.iter(|| {
        let _n = sub(black_box(&x), black_box(&y));
    })
}

fn decimal_add_strings(bench: &mut Bencher) {
    bench.iter(|| {
        let _n = add_decimal_strings(black_box("12345678901.23456789"), black_box("-123.456")).unwrap();
    })
}

fn decimal_normalize(bench: &mut Bencher) {
    let x = parse("12345678901.234567890000");
    bench.iter(|| {
        let _n = black_box(&x).normalize();
    })
}

fn decimal_hash(bench: &mut Bencher) {
    let x = parse("12345678901.23456789");
    let mut hasher = DefaultHasher::new();
    bench.iter(|| {
        let _n = black_box(&x).hash(&mut hasher);
    })
}

fn decimal_cmp(bench: &mut Bencher) {
    let x = parse("12345678901.23456789");
    let y = parse("12345.67890123456789");
    bench.iter(|| {
        let _n = black_box(&x > &y);
        black_box(_n);
    })
}

benchmark_group!(
    decimal_benches,
    decimal_is_valid_literal,
    decimal_parse,
    decimal_to_string,
    decimal_add,
    decimal_add_mixed_sign,
    decimal_sub,
    decimal_add_strings,
    decimal_normalize,
    decimal_hash,
    decimal_cmp,
);

benchmark_main!(decimal_benches);
