use crate::graph::traits::{Successors, Vertex};
use std::collections::HashMap;

/// An unweighted directed graph: each vertex maps to its list of successors
#[derive(Debug, Clone)]
pub struct UnweightedGraph<V: Vertex> {
    successors: HashMap<V, Vec<V>>,
}

impl<V: Vertex> UnweightedGraph<V> {
    /// Creates a new empty graph
    pub fn new() -> Self {
        UnweightedGraph {
            successors: HashMap::new(),
        }
    }

    /// Builds a graph from an adjacency mapping, keeping successor order as given.
    /// Successors are not required to be keys themselves.
    pub fn from_adjacency<I, E>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, E)>,
        E: IntoIterator<Item = V>,
    {
        let successors = adjacency
            .into_iter()
            .map(|(vertex, next)| (vertex, next.into_iter().collect()))
            .collect();
        UnweightedGraph { successors }
    }

    /// Adds a vertex with no successors; returns false if it was already present
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.successors.contains_key(&vertex) {
            return false;
        }
        self.successors.insert(vertex, Vec::new());
        true
    }

    /// Adds an edge between two existing vertices, ignoring duplicates
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        if !self.successors.contains_key(&to) {
            return false;
        }
        match self.successors.get_mut(&from) {
            Some(next) if !next.contains(&to) => {
                next.push(to);
                true
            }
            _ => false,
        }
    }

    /// Returns the number of vertices in the graph
    pub fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    /// Returns the number of edges in the graph
    pub fn edge_count(&self) -> usize {
        self.successors.values().map(Vec::len).sum()
    }
}

impl<V: Vertex> Default for UnweightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Successors<V> for UnweightedGraph<V> {
    fn successors(&self, vertex: &V) -> Option<Box<dyn Iterator<Item = V> + '_>> {
        let next = self.successors.get(vertex)?;
        Some(Box::new(next.iter().cloned()))
    }

    fn contains(&self, vertex: &V) -> bool {
        self.successors.contains_key(vertex)
    }
}
