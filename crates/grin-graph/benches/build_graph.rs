use grin_core::rng::RngHandle;
use grin_graph::{gnp_random_graph, graph_from_bytes, graph_to_bytes};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_graph_bench(c: &mut Criterion) {
    c.bench_function("gnp_random_graph_200", |b| {
        b.iter(|| {
            let mut rng = RngHandle::from_seed(42);
            black_box(gnp_random_graph(200, 0.05, &mut rng).unwrap());
        });
    });

    let mut rng = RngHandle::from_seed(42);
    let graph = gnp_random_graph(200, 0.05, &mut rng).unwrap();
    let bytes = graph_to_bytes(&graph).unwrap();
    c.bench_function("graph_from_bytes_200", |b| {
        b.iter(|| black_box(graph_from_bytes(&bytes).unwrap()));
    });
}

criterion_group!(benches, build_graph_bench);
criterion_main!(benches);
