//! Heap Dijkstra - Single-Source Shortest Paths over named graphs
//!
//! This library builds a weighted graph (directed or undirected) out of named
//! vertices, then runs Dijkstra's algorithm from a start vertex using an
//! array-backed binary min-heap that is rebuilt before every extraction.
//!
//! After a run every vertex reports its shortest distance from the start, its
//! predecessor on that path, and every edge reports whether it lies on the
//! shortest-path tree ("discovered"). Renderers, the JSON loader and the web
//! front end only consume that query surface.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod description;
pub mod graph;
pub mod render;
pub mod web;

pub use algorithm::{
    brute_force::BruteForce, dijkstra::Dijkstra, engine::RunState, engine::ShortestPathEngine,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{Distance, GraphKind, NamedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Vertex not found: {0}")]
    VertexNotFound(String),

    #[error("Duplicate vertex name: {0}")]
    DuplicateVertex(String),

    #[error("Vertex name must not be empty")]
    EmptyVertexName,

    #[error("Invalid vertex reference: {0}")]
    InvalidVertex(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(i64),

    #[error("The priority queue is empty")]
    EmptyQueue,

    #[error("Shortest paths have not been computed yet")]
    NotComputed,

    #[error("The graph cannot be modified once a run has started")]
    GraphFrozen,

    #[error("Shortest paths were already computed; reset the engine first")]
    AlreadyRun,

    #[error("No start vertex was given")]
    MissingStart,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Broad classification of [`Error`] values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced vertex does not exist
    NotFound,
    /// An operation received a value it cannot accept
    InvalidArgument,
    /// An operation was attempted in a state that does not allow it
    InvalidState,
    /// Reading or parsing external input failed
    Input,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::VertexNotFound(_) => ErrorKind::NotFound,
            Error::DuplicateVertex(_)
            | Error::EmptyVertexName
            | Error::InvalidVertex(_)
            | Error::NegativeWeight(_) => ErrorKind::InvalidArgument,
            Error::EmptyQueue | Error::NotComputed | Error::GraphFrozen | Error::AlreadyRun => {
                ErrorKind::InvalidState
            }
            Error::MissingStart | Error::Io(_) | Error::Json(_) => ErrorKind::Input,
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
