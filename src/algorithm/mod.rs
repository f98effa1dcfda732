pub mod traits;
pub mod shortest_shortest_path;
pub mod bfs;

pub use traits::{PathCost, ShortestPathAlgorithm, ShortestPathResult};
