#![allow(unused)]
extern crate visitgraph;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use std::hint::black_box;
use visitgraph::{NodeGraph, NodeId, SearchQuery, VisitLogger};

/// Builds a complete tree with the given fan-out and depth, labelled in breadth-first order.
fn build_tree(fanout: usize, depth: u32) -> (NodeGraph<usize>, NodeId, usize) {
    let count: usize = (0..=depth).map(|level| fanout.pow(level)).sum();
    let mut graph = NodeGraph::with_capacity(count);
    for label in 0..count {
        graph.add_node(format!("n{label}"), label);
    }
    for parent in 0..count {
        for slot in 1..=fanout {
            let child = parent * fanout + slot;
            if child < count {
                graph
                    .add_child(NodeId::new(parent), NodeId::new(child))
                    .expect("handles are in range");
            }
        }
    }
    (graph, NodeId::new(0), count)
}

/// Benchmark a search for the last node of a tree, with and without an active logger
///
/// The graph is cloned per iteration so every search starts from clear visited flags.
fn bench_search(c: &mut Criterion) {
    let (graph, root, count) = build_tree(4, 7);
    let target = SearchQuery::by_content(count - 1);

    println!("Benchmarking search over {count} nodes");

    let mut group = c.benchmark_group("search_unlogged");
    group.throughput(Throughput::Elements(count as u64));
    group.bench_function("search_breadth_first", |b| {
        b.iter_batched(
            || graph.clone(),
            |mut graph| black_box(graph.search(root, black_box(&target)).unwrap()),
            BatchSize::LargeInput,
        );
    });
    group.finish();

    let mut group = c.benchmark_group("search_logged");
    group.throughput(Throughput::Elements(count as u64));
    group.bench_function("in_memory", |b| {
        let logger = VisitLogger::in_memory();
        b.iter_batched(
            || graph.clone(),
            |mut graph| {
                let found = logger.scope(|| graph.search(root, &target)).unwrap();
                black_box(logger.drain().unwrap());
                black_box(found)
            },
            BatchSize::LargeInput,
        );
    });
    group.bench_function("in_memory_full_template", |b| {
        let logger = VisitLogger::with_template("{id}: {content} ({visited})").unwrap();
        b.iter_batched(
            || graph.clone(),
            |mut graph| {
                let found = logger.scope(|| graph.search(root, &target)).unwrap();
                black_box(logger.drain().unwrap());
                black_box(found)
            },
            BatchSize::LargeInput,
        );
    });
    group.finish();
}

/// Benchmark the recursive reset against the arena-wide clear
fn bench_reset(c: &mut Criterion) {
    let (mut graph, root, count) = build_tree(4, 7);
    graph.search(root, &SearchQuery::new()).unwrap();

    let mut group = c.benchmark_group("reset");
    group.throughput(Throughput::Elements(count as u64));
    group.bench_function("reset_visited", |b| {
        b.iter(|| graph.reset_visited(black_box(root)).unwrap());
    });
    group.bench_function("clear_visited", |b| {
        b.iter(|| graph.clear_visited());
    });
    group.finish();
}

criterion_group!(benches, bench_search, bench_reset);
criterion_main!(benches);
