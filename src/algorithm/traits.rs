use std::collections::HashSet;

use log::warn;

use crate::graph::{Graph, VertexId, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult {
    /// Distances from source to each vertex, `None` if unreachable
    pub distances: Vec<Option<Weight>>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Vec<Option<VertexId>>,

    /// Source vertex ID
    pub source: VertexId,
}

impl ShortestPathResult {
    /// Returns true if the target has a finite distance
    pub fn is_reachable(&self, target: VertexId) -> bool {
        matches!(self.distances.get(target), Some(Some(_)))
    }

    /// Number of vertices with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// The shortest path from the source to `target` as a sequence of vertices
    ///
    /// Returns `None` if the target is unreachable or the predecessor chain
    /// does not lead back to the source.
    pub fn path_to(&self, target: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = vec![target];
        let mut visited = HashSet::from([target]);
        let mut current = target;

        while current != self.source {
            match self.predecessors.get(current).copied().flatten() {
                Some(pred) => {
                    if !visited.insert(pred) {
                        warn!("Cycle detected in path reconstruction at vertex {}", pred);
                        return None;
                    }
                    path.push(pred);
                    current = pred;
                }
                None => {
                    warn!("Vertex {} has a distance but no predecessor", current);
                    return None;
                }
            }
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Graph,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult, target: VertexId) -> Option<Vec<VertexId>> {
        result.path_to(target)
    }
}
