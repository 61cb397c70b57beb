//! Worker benchmarks
//!
//! Measures one reconciliation pass with output discarded.

use std::io;
use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use carpentry::{Board, Toolbox, Worker, starting_boards};

fn ci_criterion() -> Criterion {
    Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
}

fn bench_process_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("process_all");

    group.bench_function("starting_boards", |b| {
        b.iter(|| {
            let mut boards = starting_boards();
            let mut toolbox = Toolbox::standard();
            Worker
                .process_toolbox(&mut toolbox, black_box(&mut boards), &mut io::sink())
                .unwrap()
        })
    });

    group.bench_function("mixed_1000", |b| {
        let template: Vec<Board> = (0..1000i32).map(|i| Board::new(i % 13, i % 7)).collect();
        b.iter(|| {
            let mut boards = template.clone();
            let mut toolbox = Toolbox::standard();
            Worker
                .process_toolbox(&mut toolbox, black_box(&mut boards), &mut io::sink())
                .unwrap()
        })
    });

    group.finish();
}

criterion_group! {
    name = benches;
    config = ci_criterion();
    targets = bench_process_all
}
criterion_main!(benches);
