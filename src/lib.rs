//! Shortest Shortest Path - single-source shortest paths with a fewest-edges tie-break
//!
//! For a weighted directed graph with non-negative edge weights, the search computes
//! for every vertex the pair `(weight, edges)`: the minimum total path weight from the
//! source and, among all paths of that weight, the minimum number of edges.
//!
//! The crate also ships the unweighted companions used alongside it: breadth-first
//! parent trees and path reconstruction from those parent pointers.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bfs::{bfs_parents, get_path, path_string, ParentMap},
    shortest_shortest_path::{SearchStats, ShortestShortestPath},
    PathCost, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{UnweightedGraph, WeightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Source vertex not found in graph: {0}")]
    SourceNotFound(String),

    #[error("Vertex referenced but not present in graph: {0}")]
    UnknownVertex(String),

    #[error("Vertex was not reached from the source: {0}")]
    VertexNotReached(String),

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(String, String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Renders a vertex for inclusion in an [`Error`]
pub(crate) fn describe<V: std::fmt::Debug>(vertex: &V) -> String {
    format!("{:?}", vertex)
}
