#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use telegraph_morse::MorseEncoder;

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
eiusmod tempor incididunt ut labore et dolore magna aliqua.\n\nUt enim ad minim veniam, \
quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat: 1234567890.\n\n\
Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla \
pariatur! Excepteur sint occaecat cupidatat non proident, sunt in culpa qui officia deserunt \
mollit anim id est laborum.";

fn benchmark_encoding(c: &mut Criterion) {
    let encoder = MorseEncoder::new();
    let document = LOREM.repeat(64);

    c.bench_function("morse_encoding", |b| {
        b.iter(|| {
            black_box(encoder.encode(black_box(&document)));
        })
    });
}

criterion_group!(benches, benchmark_encoding);
criterion_main!(benches);
