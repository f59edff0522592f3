use grin_core::rng::RngHandle;
use grin_core::{GraphView, NodeId};
use grin_graph::{circular_ladder_graph, gnp_random_graph};
use grin_search::{closure, HavelHakimi};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn closure_bench(c: &mut Criterion) {
    let ladder = circular_ladder_graph(200);
    let seed = [NodeId::from_raw(0), NodeId::from_raw(1), NodeId::from_raw(200), NodeId::from_raw(201)];
    c.bench_function("ladder_zero_forcing_closure", |b| {
        b.iter(|| black_box(closure(&ladder, &seed, 1).unwrap()));
    });

    let mut rng = RngHandle::from_seed(11);
    let random = gnp_random_graph(300, 0.05, &mut rng).unwrap();
    let seed: Vec<NodeId> = random.vertices().take(30).collect();
    c.bench_function("random_two_forcing_closure", |b| {
        b.iter(|| black_box(closure(&random, &seed, 2).unwrap()));
    });

    c.bench_function("havel_hakimi_random_300", |b| {
        b.iter(|| black_box(HavelHakimi::from_graph(&random).unwrap()));
    });
}

criterion_group!(benches, closure_bench);
criterion_main!(benches);
