use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::Result;

/// Vertex identifiers: any hashable, totally ordered token (strings, chars, integers...)
pub trait Vertex: Clone + Eq + Hash + Ord + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Ord + Debug {}

/// Trait representing a weighted directed graph keyed by vertex identifiers
pub trait Graph<V, W>: Debug
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over every vertex key of the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the outgoing edges from a vertex,
    /// or `None` if the vertex is not a key of the graph
    fn outgoing_edges(&self, vertex: &V) -> Option<Box<dyn Iterator<Item = (V, W)> + '_>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool;

    /// Gets the weight of an edge if it exists
    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Adds a vertex with no outgoing edges; returns false if it was already present
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Removes a vertex and every edge pointing at it
    fn remove_vertex(&mut self, vertex: &V) -> bool;

    /// Adds a directed edge between existing vertices with the given weight.
    /// An existing edge between the same vertices has its weight replaced.
    fn add_edge(&mut self, from: V, to: V, weight: W) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;

    /// Updates the weight of an existing edge
    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> bool;

    /// Like [`MutableGraph::add_edge`], but reports why the edge was rejected
    fn try_add_edge(&mut self, from: V, to: V, weight: W) -> Result<()>;
}

/// Unweighted view of a graph: the successors of each vertex
pub trait Successors<V: Vertex> {
    /// Returns the successors of a vertex, or `None` if it is not a key of the graph
    fn successors(&self, vertex: &V) -> Option<Box<dyn Iterator<Item = V> + '_>>;

    /// Returns true if the vertex exists in the graph
    fn contains(&self, vertex: &V) -> bool;
}
