//! Greeting benchmarks.
//!
//! ## Running benchmarks
//!
//! ```bash
//! cargo bench -p greeting-lib
//! cargo bench -p greeting-lib -- hello_world_andi   # one benchmark
//! cargo bench -p greeting-lib -- sub/               # sub-benchmarks
//! cargo bench -p greeting-lib -- table/Dio          # one table entry
//! ```

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use greeting_lib::hello_world;

fn bench_hello_world_andi(c: &mut Criterion) {
    c.bench_function("hello_world_andi", |b| {
        b.iter(|| hello_world(black_box("Andi")))
    });
}

fn bench_hello_world_budi(c: &mut Criterion) {
    c.bench_function("hello_world_budi", |b| {
        b.iter(|| hello_world(black_box("Budi")))
    });
}

fn bench_sub(c: &mut Criterion) {
    let mut group = c.benchmark_group("sub");

    group.bench_function("Andi", |b| b.iter(|| hello_world(black_box("Andi"))));
    group.bench_function("Budi", |b| b.iter(|| hello_world(black_box("Budi"))));

    group.finish();
}

/// (name, request) pairs benchmarked through one shared body.
const TABLE: &[(&str, &str)] = &[
    ("Asep", "Asep"),
    ("Dio", "Dio"),
    ("Jojo", "Jojo"),
    ("Johan", "Johan"),
];

fn bench_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("table");

    for &(name, request) in TABLE {
        group.bench_with_input(BenchmarkId::from_parameter(name), request, |b, request| {
            b.iter(|| hello_world(black_box(request)))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_hello_world_andi,
    bench_hello_world_budi,
    bench_sub,
    bench_table
);
criterion_main!(benches);
