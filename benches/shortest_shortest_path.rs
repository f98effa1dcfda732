use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shortest_shortest_path::graph::generators::{generate_grid, generate_random_graph};
use shortest_shortest_path::{bfs_parents, ShortestPathAlgorithm, ShortestShortestPath};

fn bench_stale_skip(c: &mut Criterion) {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut group = c.benchmark_group("shortest_shortest_path");

    for &size in &[1_000usize, 10_000, 50_000] {
        let graph = generate_random_graph(size, 4.0, 20, size as u64);

        for (label, skip) in [("skip_stale", true), ("keep_stale", false)] {
            let algorithm = ShortestShortestPath::new()
                .with_stale_skip(skip)
                .with_predecessors(false);
            group.bench_with_input(BenchmarkId::new(label, size), &graph, |b, graph| {
                b.iter(|| algorithm.compute_shortest_paths(graph, black_box(&0usize)))
            });
        }
    }

    group.finish();
}

fn bench_grid(c: &mut Criterion) {
    // Unit weights: every frontier pop ties on weight
    let graph = generate_grid(200, 200);
    let algorithm = ShortestShortestPath::new();

    c.bench_function("grid_200x200", |b| {
        b.iter(|| algorithm.compute_shortest_paths(&graph, black_box(&0usize)))
    });
    c.bench_function("grid_200x200_bfs", |b| {
        b.iter(|| bfs_parents(&graph, black_box(&0usize)))
    });
}

criterion_group!(benches, bench_stale_skip, bench_grid);
criterion_main!(benches);
