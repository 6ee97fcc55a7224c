pub mod traits;
pub mod engine;
pub mod dijkstra;
pub mod brute_force;

pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
