use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(weight, edges, vertex)` candidates.
///
/// Entries pop in ascending lexicographic order of the triple. There is no
/// decrease-key: an improved candidate is pushed again and the superseded entry
/// stays in the heap until popped.
#[derive(Debug)]
pub struct Frontier<V, W>
where
    V: Ord + Debug,
    W: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(W, usize, V)>>,
}

impl<V, W> Frontier<V, W>
where
    V: Ord + Debug,
    W: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a candidate reaching `vertex` with the given weight and edge count
    pub fn push(&mut self, weight: W, edges: usize, vertex: V) {
        self.heap.push(Reverse((weight, edges, vertex)));
    }

    /// Removes the smallest `(weight, edges, vertex)` entry
    pub fn pop(&mut self) -> Option<(W, usize, V)> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    /// Returns the smallest entry without removing it
    pub fn peek(&self) -> Option<&(W, usize, V)> {
        self.heap.peek().map(|Reverse(entry)| entry)
    }
}

impl<V, W> Default for Frontier<V, W>
where
    V: Ord + Debug,
    W: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
