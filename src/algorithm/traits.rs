use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use log::warn;
use num_traits::{Float, NumCast, Zero};

use crate::graph::{Graph, Vertex};
use crate::Result;

/// Best known `(weight, edges)` pair for reaching a vertex.
///
/// Pairs compare lexicographically: weight first, edge count as tie-breaker.
/// `Unreachable` plays the role of `(inf, inf)` and compares greater than every
/// reached pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathCost<W> {
    /// Reached with this total weight using this many edges
    Reached { weight: W, edges: usize },
    /// No path from the source has been found
    Unreachable,
}

impl<W> PathCost<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Cost of the source itself: `(0, 0)`
    pub fn zero() -> Self {
        PathCost::Reached {
            weight: W::zero(),
            edges: 0,
        }
    }

    pub fn new(weight: W, edges: usize) -> Self {
        PathCost::Reached { weight, edges }
    }

    /// Total path weight, or positive infinity when unreachable
    pub fn weight(&self) -> W {
        match self {
            PathCost::Reached { weight, .. } => *weight,
            PathCost::Unreachable => W::infinity(),
        }
    }

    /// Number of edges on the path, `None` when unreachable
    pub fn edges(&self) -> Option<usize> {
        match self {
            PathCost::Reached { edges, .. } => Some(*edges),
            PathCost::Unreachable => None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        matches!(self, PathCost::Reached { .. })
    }

    /// Cost of following one more edge of the given weight
    pub fn extend(&self, weight: W) -> Self {
        match self {
            PathCost::Reached { weight: w, edges } => PathCost::Reached {
                weight: *w + weight,
                edges: edges + 1,
            },
            PathCost::Unreachable => PathCost::Unreachable,
        }
    }

    /// Strict lexicographic comparison: lower weight, or equal weight with fewer edges
    pub fn is_better_than(&self, other: &Self) -> bool {
        match (self, other) {
            (PathCost::Unreachable, _) => false,
            (PathCost::Reached { .. }, PathCost::Unreachable) => true,
            (
                PathCost::Reached { weight: a, edges: ea },
                PathCost::Reached { weight: b, edges: eb },
            ) => *a < *b || (*a == *b && ea < eb),
        }
    }

    /// The `(weight, edges)` pair with both components as `W`,
    /// `(inf, inf)` when unreachable
    pub fn to_pair(&self) -> (W, W) {
        match self {
            PathCost::Reached { weight, edges } => {
                let edges = <W as NumCast>::from(*edges).unwrap_or_else(W::infinity);
                (*weight, edges)
            }
            PathCost::Unreachable => (W::infinity(), W::infinity()),
        }
    }
}

/// Result of a single-source search
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Best `(weight, edges)` for every vertex of the graph
    pub costs: HashMap<V, PathCost<W>>,

    /// Predecessor of each reached vertex other than the source.
    /// Empty when predecessor tracking is disabled.
    pub predecessors: HashMap<V, V>,

    /// Source vertex
    pub source: V,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Cost recorded for a vertex, `None` if the vertex is not in the graph
    pub fn cost(&self, vertex: &V) -> Option<PathCost<W>> {
        self.costs.get(vertex).copied()
    }

    pub fn weight(&self, vertex: &V) -> Option<W> {
        self.cost(vertex).map(|cost| cost.weight())
    }

    pub fn edges(&self, vertex: &V) -> Option<usize> {
        self.cost(vertex).and_then(|cost| cost.edges())
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.cost(vertex).is_some_and(|cost| cost.is_reachable())
    }

    /// Number of vertices reached from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.costs.values().filter(|cost| cost.is_reachable()).count()
    }

    /// Every vertex mapped to its `(weight, edges)` pair, `(inf, inf)` for unreachable ones
    pub fn pairs(&self) -> HashMap<V, (W, W)> {
        self.costs
            .iter()
            .map(|(vertex, cost)| (vertex.clone(), cost.to_pair()))
            .collect()
    }

    /// Vertices from the source to `target`, both included.
    ///
    /// Returns `None` when the target is unreachable, or when predecessors were
    /// not recorded and the target is not the source.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target.clone();
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != self.source {
            if !visited.insert(current.clone()) {
                warn!("Cycle detected in path reconstruction at vertex {:?}", current);
                return None;
            }

            let pred = self.predecessors.get(&current)?;
            path.push(current);
            current = pred.clone();
        }

        path.push(self.source.clone());
        path.reverse();

        Some(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<V, W>, target: &V) -> Option<Vec<V>> {
        result.path_to(target)
    }
}
