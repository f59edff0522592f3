use grin_core::rng::RngHandle;
use grin_core::GraphView;
use grin_graph::{closed_neighborhood, distances_from, gnp_random_graph, is_claw_free};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn queries_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(7);
    let graph = gnp_random_graph(500, 0.02, &mut rng).unwrap();
    let nodes: Vec<_> = graph.vertices().collect();

    c.bench_function("degree_queries", |b| {
        b.iter(|| {
            for node in &nodes {
                black_box(graph.degree(*node).unwrap());
            }
        });
    });

    c.bench_function("closed_neighborhood_pairs", |b| {
        b.iter(|| {
            for pair in nodes.chunks(2) {
                black_box(closed_neighborhood(&graph, pair).unwrap());
            }
        });
    });

    c.bench_function("bfs_from_first", |b| {
        b.iter(|| black_box(distances_from(&graph, nodes[0]).unwrap()));
    });

    let mut rng = RngHandle::from_seed(7);
    let small = gnp_random_graph(20, 0.3, &mut rng).unwrap();
    c.bench_function("claw_free_20", |b| {
        b.iter(|| black_box(is_claw_free(&small)));
    });
}

criterion_group!(benches, queries_bench);
criterion_main!(benches);
