//! 遍历性能基准

use adjgraph::{Graph, TraversalOrder};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// 构建 side x side 的网格图
fn make_grid(side: u32) -> Graph<u32> {
    let mut graph = Graph::with_capacity((side * side) as usize);
    for row in 0..side {
        for col in 0..side {
            let v = row * side + col;
            graph.add_vertex(v);
            if col + 1 < side {
                graph.add_edge(v, v + 1);
            }
            if row + 1 < side {
                graph.add_edge(v, v + side);
            }
        }
    }
    graph
}

fn bench_traversal(c: &mut Criterion) {
    let graph = make_grid(100);

    c.bench_function("bfs_grid_100x100", |b| {
        b.iter(|| {
            let mut count = 0usize;
            graph
                .traverse(TraversalOrder::BreadthFirst, black_box(&0), |_| count += 1)
                .unwrap();
            count
        })
    });

    c.bench_function("dfs_grid_100x100", |b| {
        b.iter(|| {
            let mut count = 0usize;
            graph
                .traverse(TraversalOrder::DepthFirst, black_box(&0), |_| count += 1)
                .unwrap();
            count
        })
    });
}

fn bench_mutation(c: &mut Criterion) {
    c.bench_function("build_and_remove_grid_50x50", |b| {
        b.iter(|| {
            let mut graph = make_grid(50);
            for v in 0..2500u32 {
                graph.remove_vertex(&v);
            }
            graph.order()
        })
    });
}

criterion_group!(benches, bench_traversal, bench_mutation);
criterion_main!(benches);
