use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, VertexId, Weight};
use crate::{Error, Result};

/// Exhaustive search over every simple path from the source
///
/// Runs in exponential time and is meant as a reference for checking other
/// algorithms on small graphs.
#[derive(Debug, Default)]
pub struct BruteForce;

impl BruteForce {
    pub fn new() -> Self {
        BruteForce
    }
}

struct Search<'a, G: Graph> {
    graph: &'a G,
    on_path: Vec<bool>,
    distances: Vec<Option<Weight>>,
    predecessors: Vec<Option<VertexId>>,
}

impl<G: Graph> Search<'_, G> {
    fn explore(&mut self, current: VertexId, distance: Weight) {
        let arcs: Vec<(VertexId, Weight)> = self.graph.outgoing_edges(current).collect();
        for (next, weight) in arcs {
            if self.on_path[next] {
                continue;
            }
            let Some(next_distance) = distance.checked_add(weight) else {
                continue;
            };
            if self.distances[next].map_or(true, |best| next_distance < best) {
                self.distances[next] = Some(next_distance);
                self.predecessors[next] = Some(current);
            }

            self.on_path[next] = true;
            self.explore(next, next_distance);
            self.on_path[next] = false;
        }
    }
}

impl<G> ShortestPathAlgorithm<G> for BruteForce
where
    G: Graph,
{
    fn name(&self) -> &'static str {
        "Brute force"
    }

    fn compute_shortest_paths(&self, graph: &G, source: VertexId) -> Result<ShortestPathResult> {
        if !graph.has_vertex(source) {
            return Err(Error::VertexNotFound(source.to_string()));
        }

        let n = graph.vertex_count();
        let mut search = Search {
            graph,
            on_path: vec![false; n],
            distances: vec![None; n],
            predecessors: vec![None; n],
        };
        search.distances[source] = Some(0);
        search.on_path[source] = true;
        search.explore(source, 0);

        Ok(ShortestPathResult {
            distances: search.distances,
            predecessors: search.predecessors,
            source,
        })
    }
}
