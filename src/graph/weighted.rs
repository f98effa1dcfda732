use crate::graph::traits::{Graph, MutableGraph, Successors, Vertex};
use crate::{describe, Error, Result};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// A weighted directed graph using adjacency lists keyed by vertex identifier
#[derive(Debug, Clone)]
pub struct WeightedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex -> [(target_vertex, weight)]
    outgoing_edges: HashMap<V, Vec<(V, W)>>,
}

impl<V, W> WeightedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        WeightedGraph {
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        WeightedGraph {
            outgoing_edges: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph directly from an adjacency mapping.
    ///
    /// No checks are made: neighbors need not be keys of the mapping and weights
    /// are taken as given. Searches over such a graph report the dangling
    /// neighbor as [`Error::UnknownVertex`].
    pub fn from_adjacency<I, E>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (V, E)>,
        E: IntoIterator<Item = (V, W)>,
    {
        let outgoing_edges = adjacency
            .into_iter()
            .map(|(vertex, edges)| (vertex, edges.into_iter().collect()))
            .collect();
        WeightedGraph { outgoing_edges }
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.check_non_negative().is_ok()
    }

    /// Returns the first negative weight found as an error
    pub fn check_non_negative(&self) -> Result<()> {
        for edges in self.outgoing_edges.values() {
            for (_target, weight) in edges {
                if *weight < W::zero() {
                    return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
                }
            }
        }
        Ok(())
    }
}

impl<V, W> Default for WeightedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V, W> for WeightedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.outgoing_edges.keys())
    }

    fn outgoing_edges(&self, vertex: &V) -> Option<Box<dyn Iterator<Item = (V, W)> + '_>> {
        let edges = self.outgoing_edges.get(vertex)?;
        Some(Box::new(edges.iter().cloned()))
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }

    fn has_edge(&self, from: &V, to: &V) -> bool {
        if let Some(edges) = self.outgoing_edges.get(from) {
            edges.iter().any(|(target, _)| target == to)
        } else {
            false
        }
    }

    fn get_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing_edges
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<V, W> MutableGraph<V, W> for WeightedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing_edges.contains_key(&vertex) {
            return false;
        }
        self.outgoing_edges.insert(vertex, Vec::new());
        true
    }

    fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.outgoing_edges.remove(vertex).is_none() {
            return false;
        }

        // Drop every edge that pointed at the removed vertex
        for edges in self.outgoing_edges.values_mut() {
            edges.retain(|(target, _)| target != vertex);
        }
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) -> bool {
        self.try_add_edge(from, to, weight).is_ok()
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }

    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> bool {
        if weight < W::zero() {
            return false;
        }

        if let Some(outgoing) = self.outgoing_edges.get_mut(from) {
            for edge in outgoing.iter_mut() {
                if &edge.0 == to {
                    edge.1 = weight;
                    return true;
                }
            }
        }
        false
    }

    fn try_add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        if !self.has_vertex(&from) || !self.has_vertex(&to) {
            return Err(Error::InvalidEdge(describe(&from), describe(&to)));
        }
        if weight < W::zero() {
            return Err(Error::NegativeWeight(weight.to_f64().unwrap_or(f64::NAN)));
        }

        let outgoing = self.outgoing_edges.entry(from).or_default();
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to, weight)),
        }
        Ok(())
    }
}

impl<V, W> Successors<V> for WeightedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn successors(&self, vertex: &V) -> Option<Box<dyn Iterator<Item = V> + '_>> {
        let edges = self.outgoing_edges.get(vertex)?;
        Some(Box::new(edges.iter().map(|(target, _)| target.clone())))
    }

    fn contains(&self, vertex: &V) -> bool {
        self.has_vertex(vertex)
    }
}
