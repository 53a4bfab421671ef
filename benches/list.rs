//! Benchmarks for chore-list
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use chore_list::{Action, Entry, ReactiveList};
use std::cell::Cell;
use std::rc::Rc;

fn quiet_list() -> ReactiveList {
    ReactiveList::new(|_: Action, _: &[Rc<Entry>]| Ok(()))
}

fn filled(n: usize) -> ReactiveList {
    let list = quiet_list();
    list.push((0..n).map(|i| format!("chore {i}"))).unwrap();
    list
}

// =============================================================================
// INSERT / REMOVE
// =============================================================================

fn bench_push_pop(c: &mut Criterion) {
    let list = quiet_list();
    c.bench_function("push_pop", |b| {
        b.iter(|| {
            list.push([black_box("sweep")]).unwrap();
            black_box(list.pop().unwrap())
        })
    });
}

fn bench_push_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_batch");
    for size in [1usize, 10, 100] {
        let texts: Vec<String> = (0..size).map(|i| format!("chore {i}")).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &texts, |b, texts| {
            b.iter(|| {
                let list = quiet_list();
                black_box(list.push(texts.iter().cloned()).unwrap())
            })
        });
    }
    group.finish();
}

fn bench_pop_empty(c: &mut Criterion) {
    let list = quiet_list();
    c.bench_function("pop_empty", |b| b.iter(|| black_box(list.pop().unwrap())));
}

// =============================================================================
// SPLICE / TOGGLE
// =============================================================================

fn bench_splice_middle(c: &mut Criterion) {
    let mut group = c.benchmark_group("splice_middle");
    for size in [10usize, 100, 1000] {
        let list = filled(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| black_box(list.splice(size / 2, 1, ["replacement"]).unwrap()))
        });
    }
    group.finish();
}

fn bench_toggle(c: &mut Criterion) {
    let calls = Rc::new(Cell::new(0u64));
    let calls_clone = calls.clone();
    let list = ReactiveList::new(move |_: Action, _: &[Rc<Entry>]| {
        calls_clone.set(calls_clone.get() + 1);
        Ok(())
    });
    list.push(["a", "b", "c"]).unwrap();

    c.bench_function("toggle_complete", |b| {
        b.iter(|| black_box(list.toggle_complete(black_box(1)).unwrap()))
    });
    black_box(calls.get());
}

// =============================================================================
// READS
// =============================================================================

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");
    for size in [10usize, 100, 1000] {
        let list = filled(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &list, |b, list| {
            b.iter(|| black_box(list.snapshot()))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_push_batch,
    bench_pop_empty,
    bench_splice_middle,
    bench_toggle,
    bench_snapshot,
);
criterion_main!(benches);
