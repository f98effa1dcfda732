use std::collections::{HashMap, VecDeque};
use std::fmt::Display;
use log::debug;

use crate::graph::{Successors, Vertex};
use crate::{describe, Error, Result};

/// Breadth-first parent pointers from a single source.
///
/// The source maps to `None`; every other discovered vertex maps to the vertex it
/// was first discovered from. Vertices that were not reached have no entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ParentMap<V: Vertex> {
    parents: HashMap<V, Option<V>>,
    source: V,
}

impl<V: Vertex> ParentMap<V> {
    pub fn source(&self) -> &V {
        &self.source
    }

    /// `Some(None)` for the source, `Some(Some(parent))` for other reached vertices,
    /// `None` for vertices that were not reached
    pub fn get(&self, vertex: &V) -> Option<Option<&V>> {
        self.parents.get(vertex).map(Option::as_ref)
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.parents.contains_key(vertex)
    }

    /// Number of reached vertices, the source included
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of edges between the source and a reached vertex
    pub fn depth(&self, vertex: &V) -> Option<usize> {
        get_path(self, vertex).ok().map(|path| path.len())
    }

    pub fn as_map(&self) -> &HashMap<V, Option<V>> {
        &self.parents
    }

    pub fn into_map(self) -> HashMap<V, Option<V>> {
        self.parents
    }
}

/// Breadth-first search from `source`, recording the parent of every reached vertex.
///
/// Fails with [`Error::SourceNotFound`] if the source is not a key of the graph and
/// with [`Error::UnknownVertex`] if a dequeued successor is not a key either.
pub fn bfs_parents<V, G>(graph: &G, source: &V) -> Result<ParentMap<V>>
where
    V: Vertex,
    G: Successors<V> + ?Sized,
{
    if !graph.contains(source) {
        return Err(Error::SourceNotFound(describe(source)));
    }

    let mut parents = HashMap::new();
    parents.insert(source.clone(), None);
    let mut queue = VecDeque::from([source.clone()]);

    while let Some(vertex) = queue.pop_front() {
        let successors = graph
            .successors(&vertex)
            .ok_or_else(|| Error::UnknownVertex(describe(&vertex)))?;

        for neighbor in successors {
            if !parents.contains_key(&neighbor) {
                parents.insert(neighbor.clone(), Some(vertex.clone()));
                queue.push_back(neighbor);
            }
        }
    }

    debug!("BFS from {:?} reached {} vertices", source, parents.len());

    Ok(ParentMap {
        parents,
        source: source.clone(),
    })
}

/// Vertices on the breadth-first path from the source to `destination`,
/// in source-to-destination order and excluding the destination itself.
///
/// Fails with [`Error::VertexNotReached`] if the destination has no entry.
pub fn get_path<V: Vertex>(parents: &ParentMap<V>, destination: &V) -> Result<Vec<V>> {
    let not_reached = |vertex: &V| Error::VertexNotReached(describe(vertex));

    let mut path = Vec::new();
    let mut current = destination;

    while let Some(parent) = parents.get(current).ok_or_else(|| not_reached(current))? {
        // A well-formed parent map has no cycles; stop rather than loop forever
        if path.len() >= parents.len() {
            return Err(not_reached(destination));
        }
        path.push(parent.clone());
        current = parent;
    }

    path.reverse();
    Ok(path)
}

/// [`get_path`] rendered as the concatenation of the vertex identifiers
pub fn path_string<V>(parents: &ParentMap<V>, destination: &V) -> Result<String>
where
    V: Vertex + Display,
{
    Ok(get_path(parents, destination)?
        .iter()
        .map(ToString::to_string)
        .collect())
}
