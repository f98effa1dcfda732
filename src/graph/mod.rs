pub mod traits;
pub mod weighted;
pub mod unweighted;
pub mod generators;

pub use traits::{Graph, MutableGraph, Successors, Vertex};
pub use weighted::WeightedGraph;
pub use unweighted::UnweightedGraph;
