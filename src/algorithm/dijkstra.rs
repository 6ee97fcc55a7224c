use crate::algorithm::engine::ShortestPathEngine;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, NamedGraph, VertexId};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm over any [`Graph`]
///
/// Each call copies the graph into a fresh [`ShortestPathEngine`], so the
/// caller's graph is never mutated and calls are independent of each other.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: Graph,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult> {
        let start = graph
            .vertex_name(source)
            .ok_or_else(|| Error::VertexNotFound(source.to_string()))?
            .to_string();

        let mut engine = ShortestPathEngine::with_graph(NamedGraph::copy_from(graph)?)?;
        engine.run(&start)?;
        engine.result()
    }
}
