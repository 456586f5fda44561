//! Search pipeline benchmarks
//!
//! - Deep walk over a layered graph (expansion + seen-set cost)
//! - Selective filter after a wide walk (criteria evaluation cost)
//! - First-hit latency (laziness: a consumer taking one result)
//! - Traversal document parsing

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use entitygraph_search::{MemoryGraph, Node, Searcher, Traversal, F, T};

/// `layers` levels of `width` nodes, each node linked to every node below it
fn layered_graph(layers: usize, width: usize) -> MemoryGraph {
    let mut graph = MemoryGraph::new();
    for layer in 0..layers {
        for i in 0..width {
            graph.add_node(
                Node::new(format!("l{}_{}", layer, i), "ITEM")
                    .with_field("layer", layer as i64)
                    .with_field("name", format!("item {} {}", layer, i)),
            );
        }
    }
    for layer in 0..layers.saturating_sub(1) {
        for i in 0..width {
            for j in 0..width {
                graph.connect(
                    format!("l{}_{}", layer, i),
                    "next",
                    format!("l{}_{}", layer + 1, j),
                );
            }
        }
    }
    graph
}

fn bench_walk_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk_depth");
    let graph = layered_graph(6, 4);

    for max_hops in [1u32, 2, 3, 4] {
        let traversal = T::new().out_nodes(["next"], max_hops);
        group.bench_with_input(BenchmarkId::from_parameter(max_hops), &traversal, |b, t| {
            b.iter(|| {
                let count = Searcher::new(&graph).search(["l0_0"], t).unwrap().count();
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_selective_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("selective_filter");
    let graph = layered_graph(2, 2000);
    group.throughput(Throughput::Elements(2000));

    let traversal = T::new()
        .out_nodes(["next"], 1)
        .include([F::field("name").regex(r"item 1 19\d\d$")]);

    group.bench_function("regex", |b| {
        b.iter(|| {
            let count = Searcher::new(&graph)
                .search(["l0_0"], &traversal)
                .unwrap()
                .count();
            black_box(count)
        });
    });

    let traversal = T::new()
        .out_nodes(["next"], 1)
        .include([F::field("name").ends_with("99")]);

    group.bench_function("ends_with", |b| {
        b.iter(|| {
            let count = Searcher::new(&graph)
                .search(["l0_0"], &traversal)
                .unwrap()
                .count();
            black_box(count)
        });
    });

    group.finish();
}

fn bench_first_hit(c: &mut Criterion) {
    let graph = layered_graph(6, 6);
    let traversal = T::new()
        .out_nodes(["next"], 5)
        .include([F::field("layer").eq(5)]);

    c.bench_function("first_hit", |b| {
        b.iter(|| {
            let first = Searcher::new(&graph)
                .search(["l0_0"], &traversal)
                .unwrap()
                .next();
            black_box(first)
        });
    });
}

fn bench_document_parsing(c: &mut Criterion) {
    let yaml = r#"
steps:
  - type: walk
    verbs: [works_at]
    max_hops: 1
  - type: walk
    verbs: [works_at]
    directions: [in]
    max_hops: 1
  - type: filter
    exclude: true
    criteria:
      - type: field
        field: key
        value: ann
"#;

    c.bench_function("traversal_from_yaml", |b| {
        b.iter(|| black_box(Traversal::from_yaml(black_box(yaml)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_walk_depth,
    bench_selective_filter,
    bench_first_hit,
    bench_document_parsing
);
criterion_main!(benches);
