use std::collections::HashMap;

use log::{debug, trace, warn};

use crate::algorithm::ShortestPathResult;
use crate::data_structures::IndexedMinHeap;
use crate::graph::{Distance, Edge, EdgeId, Graph, GraphKind, NamedGraph, Vertex, VertexId};
use crate::{Error, Result};

/// Lifecycle of a [`ShortestPathEngine`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// The graph is being built; no distances exist yet
    Uninitialized,
    /// The relaxation loop is in progress
    Running,
    /// Every vertex has been extracted and results can be queried
    Terminated,
}

/// Dijkstra's algorithm over a graph of named vertices
///
/// The engine owns the graph and the priority queue. Vertices are added to
/// the queue as they are created; [`run`](Self::run) then repeatedly rebuilds
/// the heap, extracts the closest vertex and relaxes its outgoing edges until
/// the queue is empty. Distances live on the vertices themselves, so one
/// engine holds the results of one run at a time.
#[derive(Debug)]
pub struct ShortestPathEngine {
    graph: NamedGraph,

    /// Vertices not yet extracted, keyed by their current distance
    queue: IndexedMinHeap<VertexId>,

    /// Vertex name -> edge currently forming the best known link into it
    best_incoming: HashMap<String, EdgeId>,

    /// Extracted vertices in extraction order
    processed: Vec<VertexId>,

    start: Option<VertexId>,
    state: RunState,
}

impl ShortestPathEngine {
    /// Creates an engine with an empty graph
    pub fn new(kind: GraphKind) -> Self {
        ShortestPathEngine {
            graph: NamedGraph::new(kind),
            queue: IndexedMinHeap::new(),
            best_incoming: HashMap::new(),
            processed: Vec::new(),
            start: None,
            state: RunState::Uninitialized,
        }
    }

    /// Creates an engine for a directed graph
    pub fn directed() -> Self {
        ShortestPathEngine::new(GraphKind::Directed)
    }

    /// Creates an engine for an undirected graph
    pub fn undirected() -> Self {
        ShortestPathEngine::new(GraphKind::Undirected)
    }

    /// Creates an engine around an already built graph
    ///
    /// Any shortest-path state left on the graph is cleared.
    pub fn with_graph(graph: NamedGraph) -> Result<Self> {
        let mut engine = ShortestPathEngine::new(graph.kind());
        engine.graph = graph;
        engine.graph.clear_state();
        engine.requeue_all()?;
        Ok(engine)
    }

    pub fn kind(&self) -> GraphKind {
        self.graph.kind()
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// The graph, for enumerating vertices and edges
    pub fn graph(&self) -> &NamedGraph {
        &self.graph
    }

    /// The vertices still waiting to be extracted
    pub fn queue(&self) -> &IndexedMinHeap<VertexId> {
        &self.queue
    }

    /// Name of the start vertex of the current run
    pub fn start(&self) -> Option<&str> {
        self.start.and_then(|id| self.graph.vertex_name(id))
    }

    /// Adds a vertex with infinite distance and queues it
    pub fn add_vertex(&mut self, name: &str) -> Result<VertexId> {
        self.ensure_uninitialized()?;
        let id = self.graph.insert_vertex(name)?;
        self.queue.insert(id, &self.graph)?;
        Ok(id)
    }

    /// Connects two queued vertices
    ///
    /// In undirected mode a mirrored arc is added as well. Returns the id of
    /// the `from -> to` arc.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<EdgeId> {
        self.ensure_uninitialized()?;
        let from_id = self
            .queue
            .find_by_name(from)
            .ok_or_else(|| Error::VertexNotFound(from.to_string()))?;
        let to_id = self
            .queue
            .find_by_name(to)
            .ok_or_else(|| Error::VertexNotFound(to.to_string()))?;
        self.graph.connect(from_id, to_id, weight)
    }

    /// Computes shortest paths from `start` to every vertex
    pub fn run(&mut self, start: &str) -> Result<()> {
        if self.state != RunState::Uninitialized {
            return Err(Error::AlreadyRun);
        }
        let start_id = self
            .queue
            .find_by_name(start)
            .ok_or_else(|| Error::VertexNotFound(start.to_string()))?;

        if let Some(vertex) = self.graph.vertex_mut(start_id) {
            vertex.set_distance(Distance::Finite(0));
        }
        self.start = Some(start_id);
        self.state = RunState::Running;
        debug!(
            "Running Dijkstra from {} over {} vertices and {} arcs",
            start,
            self.graph.vertex_count(),
            self.graph.edge_count()
        );

        while !self.queue.is_empty() {
            self.queue.rebuild(&self.graph);
            let u = self.queue.extract_min(&self.graph)?;
            self.processed.push(u);
            self.relax_outgoing(u);
        }

        self.state = RunState::Terminated;
        debug!(
            "Finished run from {}: {} of {} vertices reachable",
            start,
            self.graph.vertices().iter().filter(|v| v.distance().is_finite()).count(),
            self.graph.vertex_count()
        );
        Ok(())
    }

    /// Forgets the last run so the graph can be changed or solved again
    pub fn reset(&mut self) -> Result<()> {
        self.graph.clear_state();
        self.best_incoming.clear();
        self.processed.clear();
        self.start = None;
        self.requeue_all()?;
        self.state = RunState::Uninitialized;
        Ok(())
    }

    /// Shortest distance from the start, `None` if unreachable
    pub fn distance(&self, name: &str) -> Result<Option<u64>> {
        self.ensure_terminated()?;
        Ok(self.lookup(name)?.distance().finite())
    }

    /// Name of the vertex preceding `name` on its shortest path
    pub fn predecessor(&self, name: &str) -> Result<Option<&str>> {
        self.ensure_terminated()?;
        Ok(self
            .lookup(name)?
            .predecessor()
            .and_then(|id| self.graph.vertex_name(id)))
    }

    /// The edge currently recorded as the best link into `name`
    pub fn best_incoming_edge(&self, name: &str) -> Result<Option<&Edge>> {
        self.ensure_terminated()?;
        let vertex = self.lookup(name)?;
        Ok(self
            .best_incoming
            .get(vertex.name())
            .and_then(|&id| self.graph.edge(id)))
    }

    /// Vertex names from the start to `name`, `None` if unreachable
    pub fn path_to(&self, name: &str) -> Result<Option<Vec<String>>> {
        self.ensure_terminated()?;
        let target = self.lookup(name)?;
        if !target.distance().is_finite() {
            return Ok(None);
        }

        let mut path = vec![target.name().to_string()];
        let mut current = target;
        while Some(current.id()) != self.start {
            let Some(pred) = current.predecessor().and_then(|id| self.graph.vertex(id)) else {
                warn!("Vertex {} has a distance but no predecessor", current.name());
                return Ok(None);
            };
            if path.len() > self.graph.vertex_count() {
                warn!("Predecessor chain from {} does not reach the start", name);
                return Ok(None);
            }
            path.push(pred.name().to_string());
            current = pred;
        }

        path.reverse();
        Ok(Some(path))
    }

    /// Edges on the shortest-path tree
    pub fn discovered_edges(&self) -> Result<Vec<&Edge>> {
        self.ensure_terminated()?;
        Ok(self
            .graph
            .edges()
            .iter()
            .filter(|edge| edge.is_discovered())
            .collect())
    }

    /// Vertices in the order they left the queue
    pub fn processed_order(&self) -> Result<&[VertexId]> {
        self.ensure_terminated()?;
        Ok(&self.processed)
    }

    /// Snapshot of every vertex's distance and predecessor
    pub fn result(&self) -> Result<ShortestPathResult> {
        self.ensure_terminated()?;
        let source = self.start.ok_or(Error::NotComputed)?;
        let vertices = self.graph.vertices();
        Ok(ShortestPathResult {
            distances: vertices.iter().map(|v| v.distance().finite()).collect(),
            predecessors: vertices.iter().map(Vertex::predecessor).collect(),
            source,
        })
    }

    fn relax_outgoing(&mut self, u: VertexId) {
        let Some(vertex) = self.graph.vertex(u) else {
            return;
        };
        let distance_u = vertex.distance();
        trace!("Extracted {} at distance {}", vertex.name(), distance_u);
        // Unreached vertices cannot improve anything
        if !distance_u.is_finite() {
            return;
        }

        let arcs: Vec<(EdgeId, VertexId, u64)> = self
            .graph
            .outgoing(u)
            .map(|edge| (edge.id(), edge.to(), edge.weight()))
            .collect();

        for (edge_id, v, weight) in arcs {
            let candidate = distance_u.extend(weight);
            let Some(target) = self.graph.vertex_mut(v) else {
                continue;
            };
            if candidate >= target.distance() {
                continue;
            }

            target.set_distance(candidate);
            target.set_predecessor(Some(u));
            trace!("Relaxed {} to {} via edge {}", target.name(), candidate, edge_id);

            let name = target.name().to_string();
            if let Some(previous) = self.best_incoming.insert(name, edge_id) {
                if let Some(edge) = self.graph.edge_mut(previous) {
                    edge.set_discovered(false);
                }
            }
            if let Some(edge) = self.graph.edge_mut(edge_id) {
                edge.set_discovered(true);
            }
        }
    }

    fn requeue_all(&mut self) -> Result<()> {
        self.queue.clear();
        for id in 0..self.graph.vertex_count() {
            self.queue.insert(id, &self.graph)?;
        }
        Ok(())
    }

    fn lookup(&self, name: &str) -> Result<&Vertex> {
        self.graph
            .find_vertex(name)
            .and_then(|id| self.graph.vertex(id))
            .ok_or_else(|| Error::VertexNotFound(name.to_string()))
    }

    fn ensure_uninitialized(&self) -> Result<()> {
        match self.state {
            RunState::Uninitialized => Ok(()),
            RunState::Running | RunState::Terminated => Err(Error::GraphFrozen),
        }
    }

    fn ensure_terminated(&self) -> Result<()> {
        match self.state {
            RunState::Terminated => Ok(()),
            RunState::Uninitialized | RunState::Running => Err(Error::NotComputed),
        }
    }
}
