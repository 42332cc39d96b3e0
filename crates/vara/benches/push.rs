//! Criterion micro-benchmarks for amortized push against a pre-reserved block.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vara::DynVec;

fn bench_push(c: &mut Criterion) {
    c.bench_function("push_1k_grow", |b| {
        b.iter(|| {
            let mut vec = DynVec::new();
            for i in 0..1024 {
                vec.push(black_box(i)).unwrap();
            }
            vec
        })
    });

    c.bench_function("push_1k_reserved", |b| {
        b.iter(|| {
            let mut vec = DynVec::with_capacity(1024).unwrap();
            for i in 0..1024 {
                vec.push(black_box(i)).unwrap();
            }
            vec
        })
    });
}

criterion_group!(benches, bench_push);
criterion_main!(benches);
