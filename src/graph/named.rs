use std::collections::HashMap;

use log::debug;

use crate::data_structures::HeapKeys;
use crate::graph::traits::{Graph, MutableGraph};
use crate::graph::{Distance, Edge, EdgeId, Vertex, VertexId, Weight};
use crate::{Error, Result};

/// Whether edges are one-way arcs or mirrored connections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    Directed,
    Undirected,
}

/// A graph of named vertices stored in arenas
///
/// Edges refer to their endpoints by `VertexId` and vertices refer to their
/// outgoing edges by `EdgeId`, so the structure has no ownership cycles.
#[derive(Debug, Clone)]
pub struct NamedGraph {
    kind: GraphKind,

    /// Vertex arena, indexed by `VertexId`
    vertices: Vec<Vertex>,

    /// Edge arena, indexed by `EdgeId`
    edges: Vec<Edge>,

    /// Vertex name -> vertex id
    names: HashMap<String, VertexId>,
}

impl NamedGraph {
    /// Creates a new empty graph
    pub fn new(kind: GraphKind) -> Self {
        NamedGraph {
            kind,
            vertices: Vec::new(),
            edges: Vec::new(),
            names: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        NamedGraph::new(GraphKind::Directed)
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        NamedGraph::new(GraphKind::Undirected)
    }

    /// Creates a new empty graph with room for `vertices` vertices
    pub fn with_capacity(kind: GraphKind, vertices: usize) -> Self {
        NamedGraph {
            kind,
            vertices: Vec::with_capacity(vertices),
            edges: Vec::new(),
            names: HashMap::with_capacity(vertices),
        }
    }

    /// Copies the vertices and arcs of any graph into a new directed graph
    ///
    /// Vertex ids are preserved. Undirected sources contribute both arcs of
    /// every connection, so distances are unchanged.
    pub fn copy_from<G: Graph>(graph: &G) -> Result<Self> {
        let mut copy = NamedGraph::with_capacity(GraphKind::Directed, graph.vertex_count());
        for v in 0..graph.vertex_count() {
            let name = graph
                .vertex_name(v)
                .ok_or_else(|| Error::InvalidVertex(v.to_string()))?;
            copy.insert_vertex(name)?;
        }
        for u in 0..graph.vertex_count() {
            for (v, weight) in graph.outgoing_edges(u) {
                copy.push_edge(u, v, weight);
            }
        }
        Ok(copy)
    }

    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id)
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id)
    }

    /// All vertices in insertion order
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All arcs in insertion order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The arcs leaving a vertex
    pub fn outgoing(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.vertices
            .get(id)
            .map(|vertex| vertex.outgoing())
            .unwrap_or(&[])
            .iter()
            .map(move |&edge| &self.edges[edge])
    }

    pub(crate) fn vertex_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        self.vertices.get_mut(id)
    }

    pub(crate) fn edge_mut(&mut self, id: EdgeId) -> Option<&mut Edge> {
        self.edges.get_mut(id)
    }

    /// Validates and stores a new vertex
    pub(crate) fn insert_vertex(&mut self, name: &str) -> Result<VertexId> {
        if name.is_empty() {
            return Err(Error::EmptyVertexName);
        }
        if self.names.contains_key(name) {
            return Err(Error::DuplicateVertex(name.to_string()));
        }

        let id = self.vertices.len();
        self.vertices.push(Vertex::new(id, name.to_string()));
        self.names.insert(name.to_string(), id);
        Ok(id)
    }

    /// Connects two vertices, mirroring the arc in undirected graphs
    ///
    /// Returns the id of the `from -> to` arc. Nothing is stored unless both
    /// endpoints exist and the weight is non-negative.
    pub(crate) fn connect(&mut self, from: VertexId, to: VertexId, weight: i64) -> Result<EdgeId> {
        if !self.has_vertex(from) {
            return Err(Error::InvalidVertex(from.to_string()));
        }
        if !self.has_vertex(to) {
            return Err(Error::InvalidVertex(to.to_string()));
        }
        let weight = Weight::try_from(weight).map_err(|_| Error::NegativeWeight(weight))?;

        let forward = self.push_edge(from, to, weight);
        if self.kind == GraphKind::Undirected {
            let backward = self.push_edge(to, from, weight);
            // The marked half is skipped by renderers unless it is discovered
            self.edges[forward].mark_undirected();
            self.edges[forward].set_twin(backward);
            self.edges[backward].set_twin(forward);
        }
        debug!(
            "Connected {} -> {} (weight {}, {:?})",
            self.vertices[from].name(),
            self.vertices[to].name(),
            weight,
            self.kind
        );
        Ok(forward)
    }

    fn push_edge(&mut self, from: VertexId, to: VertexId, weight: Weight) -> EdgeId {
        let id = self.edges.len();
        self.edges.push(Edge::new(id, from, to, weight));
        self.vertices[from].attach(id);
        id
    }

    /// Clears distances, predecessors and discovered flags
    pub(crate) fn clear_state(&mut self) {
        for vertex in &mut self.vertices {
            vertex.clear_state();
        }
        for edge in &mut self.edges {
            edge.set_discovered(false);
        }
    }
}

impl Graph for NamedGraph {
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    fn vertex_name(&self, vertex: VertexId) -> Option<&str> {
        self.vertices.get(vertex).map(Vertex::name)
    }

    fn find_vertex(&self, name: &str) -> Option<VertexId> {
        self.names.get(name).copied()
    }

    fn outgoing_edges(
        &self,
        vertex: VertexId,
    ) -> Box<dyn Iterator<Item = (VertexId, Weight)> + '_> {
        Box::new(self.outgoing(vertex).map(|edge| (edge.to(), edge.weight())))
    }
}

impl MutableGraph for NamedGraph {
    fn add_vertex(&mut self, name: &str) -> Result<VertexId> {
        self.insert_vertex(name)
    }

    fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<()> {
        let from = self
            .find_vertex(from)
            .ok_or_else(|| Error::VertexNotFound(from.to_string()))?;
        let to = self
            .find_vertex(to)
            .ok_or_else(|| Error::VertexNotFound(to.to_string()))?;
        self.connect(from, to, weight).map(|_| ())
    }
}

impl HeapKeys<VertexId> for NamedGraph {
    type Priority = Distance;

    fn priority(&self, item: VertexId) -> Distance {
        self.vertices
            .get(item)
            .map(Vertex::distance)
            .unwrap_or(Distance::Infinite)
    }

    fn label(&self, item: VertexId) -> Option<&str> {
        self.vertex_name(item)
    }
}
