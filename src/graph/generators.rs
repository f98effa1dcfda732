use crate::graph::{MutableGraph, UnweightedGraph, WeightedGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// The small unweighted graph used to illustrate breadth-first parents:
/// `s -> {a, b}`, `a -> {b}`, `b -> {c}`, `c -> {a, d}`, `d -> {}`
pub fn sample_graph() -> UnweightedGraph<char> {
    UnweightedGraph::from_adjacency([
        ('s', vec!['a', 'b']),
        ('a', vec!['b']),
        ('b', vec!['c']),
        ('c', vec!['a', 'd']),
        ('d', vec![]),
    ])
}

/// Generates a seeded random directed graph with about `edge_factor * n` edges.
///
/// Weights are whole numbers in `0..=max_weight`, so equal-weight paths with
/// different edge counts show up often.
pub fn generate_random_graph(
    n: usize,
    edge_factor: f64,
    max_weight: u32,
    seed: u64,
) -> WeightedGraph<usize, OrderedFloat<f64>> {
    let mut graph = WeightedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_vertex(v);
    }
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = OrderedFloat(rng.gen_range(0..=max_weight) as f64);
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width x height` grid with unit-weight edges between 4-connected cells.
/// Vertex ids are `y * width + x`.
pub fn generate_grid(width: usize, height: usize) -> WeightedGraph<usize, OrderedFloat<f64>> {
    let mut graph = WeightedGraph::with_capacity(width * height);

    for v in 0..(width * height) {
        graph.add_vertex(v);
    }

    for y in 0..height {
        for x in 0..width {
            let current = y * width + x;
            if x > 0 {
                graph.add_edge(current, current - 1, OrderedFloat(1.0));
            }
            if x + 1 < width {
                graph.add_edge(current, current + 1, OrderedFloat(1.0));
            }
            if y > 0 {
                graph.add_edge(current, current - width, OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(current, current + width, OrderedFloat(1.0));
            }
        }
    }

    graph
}
