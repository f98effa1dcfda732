use std::collections::HashMap;
use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};
use rayon::prelude::*;

use crate::algorithm::{PathCost, ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Vertex};
use crate::{describe, Error, Result};

/// Dijkstra's algorithm minimizing `(weight, edges)` lexicographically.
///
/// Among paths of equal minimum weight the one with the fewest edges wins.
/// Relaxed vertices are pushed onto the frontier again instead of having their
/// key decreased, so the frontier can hold several entries for one vertex.
#[derive(Debug, Clone, Copy)]
pub struct ShortestShortestPath {
    /// Skip popped entries that are worse than the vertex's current record
    skip_stale: bool,
    /// Record the predecessor of each relaxed vertex so paths can be rebuilt
    track_predecessors: bool,
}

/// Counters collected during one search
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Entries taken off the frontier
    pub pops: usize,
    /// Popped entries dropped because a better record already existed
    pub stale_skipped: usize,
    /// Successful relaxations
    pub relaxations: usize,
    /// Entries pushed onto the frontier, the initial source entry included
    pub pushes: usize,
}

impl ShortestShortestPath {
    /// Creates a new instance with stale-entry skipping and predecessor tracking enabled
    pub fn new() -> Self {
        ShortestShortestPath {
            skip_stale: true,
            track_predecessors: true,
        }
    }

    /// Enable or disable skipping of stale frontier entries.
    /// The output is the same either way.
    pub fn with_stale_skip(mut self, enabled: bool) -> Self {
        self.skip_stale = enabled;
        self
    }

    /// Enable or disable predecessor tracking
    pub fn with_predecessors(mut self, enabled: bool) -> Self {
        self.track_predecessors = enabled;
        self
    }

    /// Runs the search and also returns the frontier counters
    pub fn compute_with_stats<V, W, G>(
        &self,
        graph: &G,
        source: &V,
    ) -> Result<(ShortestPathResult<V, W>, SearchStats)>
    where
        V: Vertex,
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<V, W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(describe(source)));
        }

        debug!(
            "Starting search from {:?} over {} vertices and {} edges",
            source,
            graph.vertex_count(),
            graph.edge_count()
        );

        // Every vertex starts unreachable except the source
        let mut costs: HashMap<V, PathCost<W>> = graph
            .vertices()
            .map(|v| (v.clone(), PathCost::Unreachable))
            .collect();
        costs.insert(source.clone(), PathCost::zero());

        let mut predecessors = HashMap::new();
        let mut stats = SearchStats::default();

        let mut frontier = Frontier::new();
        frontier.push(W::zero(), 0, source.clone());
        stats.pushes += 1;

        while let Some((weight, edges, vertex)) = frontier.pop() {
            stats.pops += 1;
            let popped = PathCost::new(weight, edges);

            if self.skip_stale {
                if let Some(current) = costs.get(&vertex) {
                    if current.is_better_than(&popped) {
                        trace!("Skipping stale entry ({:?}, {}) for {:?}", weight, edges, vertex);
                        stats.stale_skipped += 1;
                        continue;
                    }
                }
            }

            let outgoing = graph
                .outgoing_edges(&vertex)
                .ok_or_else(|| Error::UnknownVertex(describe(&vertex)))?;

            for (neighbor, edge_weight) in outgoing {
                let candidate = popped.extend(edge_weight);
                let record = costs
                    .get_mut(&neighbor)
                    .ok_or_else(|| Error::UnknownVertex(describe(&neighbor)))?;

                if candidate.is_better_than(record) {
                    trace!("Relaxing {:?} -> {:?}: {:?}", vertex, neighbor, candidate);
                    *record = candidate;
                    stats.relaxations += 1;

                    if self.track_predecessors {
                        predecessors.insert(neighbor.clone(), vertex.clone());
                    }

                    frontier.push(weight + edge_weight, edges + 1, neighbor);
                    stats.pushes += 1;
                }
            }
        }

        let result = ShortestPathResult {
            costs,
            predecessors,
            source: source.clone(),
        };

        debug!(
            "Search from {:?} reached {} vertices ({:?})",
            source,
            result.reachable_count(),
            stats
        );

        Ok((result, stats))
    }

    /// Runs one independent search per source in parallel.
    /// Results come back in the order of `sources`.
    pub fn compute_from_sources<V, W, G>(
        &self,
        graph: &G,
        sources: &[V],
    ) -> Vec<Result<ShortestPathResult<V, W>>>
    where
        V: Vertex + Send + Sync,
        W: Float + Zero + Debug + Copy + Ord + Send + Sync,
        G: Graph<V, W> + Sync,
    {
        sources
            .par_iter()
            .map(|source| {
                self.compute_with_stats(graph, source)
                    .map(|(result, _stats)| result)
            })
            .collect()
    }
}

impl Default for ShortestShortestPath {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for ShortestShortestPath
where
    V: Vertex,
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "ShortestShortestPath"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        self.compute_with_stats(graph, source)
            .map(|(result, _stats)| result)
    }
}
