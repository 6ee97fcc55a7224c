use std::fmt::Debug;

use crate::graph::{VertexId, Weight};
use crate::Result;

/// Trait representing a weighted graph whose vertices carry unique names
///
/// Vertex ids are dense: a graph with `n` vertices uses ids `0..n`.
pub trait Graph: Debug {
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of directed arcs in the graph
    ///
    /// An undirected connection counts twice, once per direction.
    fn edge_count(&self) -> usize;

    /// Returns true if edges only run from their source to their target
    fn is_directed(&self) -> bool;

    /// Returns the name of a vertex
    fn vertex_name(&self, vertex: VertexId) -> Option<&str>;

    /// Looks a vertex up by name
    fn find_vertex(&self, name: &str) -> Option<VertexId>;

    /// Returns an iterator over the outgoing arcs from a vertex as `(target, weight)`
    fn outgoing_edges(&self, vertex: VertexId) -> Box<dyn Iterator<Item = (VertexId, Weight)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: VertexId) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's an arc between the two vertices
    fn has_edge(&self, from: VertexId, to: VertexId) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the lightest arc between two vertices if one exists
    fn get_edge_weight(&self, from: VertexId, to: VertexId) -> Option<Weight> {
        self.outgoing_edges(from)
            .filter(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}

/// Trait for building a graph by name
pub trait MutableGraph: Graph {
    /// Adds a vertex with a unique, non-empty name and returns its ID
    fn add_vertex(&mut self, name: &str) -> Result<VertexId>;

    /// Connects two existing vertices with a non-negative weight
    ///
    /// Undirected graphs store one arc per direction.
    fn add_edge(&mut self, from: &str, to: &str, weight: i64) -> Result<()>;
}
