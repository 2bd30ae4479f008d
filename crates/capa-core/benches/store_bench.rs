//! # Store Benchmarks
//!
//! Performance benchmarks for capa-core store and codec operations.
//!
//! Run with: `cargo bench -p capa-core`

use capa_core::{Graph, MetaValue, Metadata, RelevanceFilter, decode};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Create a graph with N nodes and edges between consecutive nodes.
fn create_chain_graph(size: usize) -> Graph {
    let mut graph = Graph::new();
    let mut prev_node = None;

    for i in 0..size {
        let node = graph.add_node(format!("concept_{}", i));
        if let Some(prev) = prev_node {
            graph.add_edge(prev, node, 0.8).expect("edge");
        }
        prev_node = Some(node);
    }

    graph
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_node_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_insertion");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut graph = Graph::new();
                for i in 0..size {
                    let _ = graph.add_node(format!("concept_{}", i));
                }
                black_box(graph)
            });
        });
    }

    group.finish();
}

fn bench_edge_insertion(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_insertion");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| black_box(create_chain_graph(size)));
        });
    }

    group.finish();
}

fn bench_snapshot_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_encode");

    for size in [100, 1000, 10000].iter() {
        let graph = create_chain_graph(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, graph| {
            b.iter(|| black_box(graph.snapshot().to_bytes()));
        });
    }

    group.finish();
}

fn bench_snapshot_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot_decode");

    for size in [100, 1000, 10000].iter() {
        let bytes = create_chain_graph(*size)
            .snapshot()
            .to_bytes()
            .expect("encode");
        group.bench_with_input(BenchmarkId::from_parameter(size), &bytes, |b, bytes| {
            b.iter(|| black_box(decode(bytes)));
        });
    }

    group.finish();
}

fn bench_relevance_filter(c: &mut Criterion) {
    let filter = RelevanceFilter::default();
    let mut metadata = Metadata::new();
    metadata.insert("context".to_string(), MetaValue::from("a longer context string"));
    metadata.insert("count".to_string(), MetaValue::from(5i64));

    c.bench_function("relevance_filter", |b| {
        b.iter(|| black_box(filter.is_relevant("Ein wichtiger Gedanke", &metadata)));
    });
}

criterion_group!(
    benches,
    bench_node_insertion,
    bench_edge_insertion,
    bench_snapshot_encode,
    bench_snapshot_decode,
    bench_relevance_filter,
);
criterion_main!(benches);
