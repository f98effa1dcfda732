#![allow(dead_code)]

use ordered_float::OrderedFloat;
use shortest_shortest_path::graph::{Graph, Vertex};
use shortest_shortest_path::PathCost;
use std::collections::{HashMap, HashSet};

pub type W = OrderedFloat<f64>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Lexicographic minimum `(weight, edges)` over every simple path from `source`.
/// Only usable on small graphs.
pub fn brute_force<V, G>(graph: &G, source: &V) -> HashMap<V, PathCost<W>>
where
    V: Vertex,
    G: Graph<V, W>,
{
    let mut best: HashMap<V, PathCost<W>> = graph
        .vertices()
        .map(|v| (v.clone(), PathCost::Unreachable))
        .collect();
    let mut on_path = HashSet::new();
    on_path.insert(source.clone());
    explore(graph, source, PathCost::zero(), &mut on_path, &mut best);
    best
}

fn explore<V, G>(
    graph: &G,
    vertex: &V,
    cost: PathCost<W>,
    on_path: &mut HashSet<V>,
    best: &mut HashMap<V, PathCost<W>>,
) where
    V: Vertex,
    G: Graph<V, W>,
{
    if let Some(current) = best.get_mut(vertex) {
        if cost.is_better_than(current) {
            *current = cost;
        }
    }

    let edges: Vec<(V, W)> = match graph.outgoing_edges(vertex) {
        Some(edges) => edges.collect(),
        None => return,
    };
    for (neighbor, weight) in edges {
        if on_path.insert(neighbor.clone()) {
            explore(graph, &neighbor, cost.extend(weight), on_path, best);
            on_path.remove(&neighbor);
        }
    }
}
