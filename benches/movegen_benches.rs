// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate criterion;

use criterion::black_box;
use criterion::Criterion;
use roque::{Color, Position, Square};

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("pseudo legal moves start", |b| {
        let pos = Position::from_start_position();
        b.iter(|| black_box(&pos).pseudo_legal_moves().len())
    });

    c.bench_function("legal moves start", |b| {
        let pos = Position::from_start_position();
        b.iter(|| black_box(&pos).legal_moves().len())
    });

    c.bench_function("attackers of e4", |b| {
        let pos = Position::from_start_position();
        b.iter(|| black_box(&pos).attackers(Color::White, Square::E4).len())
    });

    c.bench_function("position clone", |b| {
        let pos = Position::from_start_position();
        b.iter(|| black_box(&pos).clone())
    });

    c.bench_function("zobrist hash start", |b| {
        let pos = Position::from_start_position();
        b.iter(|| black_box(&pos).zobrist_hash())
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
