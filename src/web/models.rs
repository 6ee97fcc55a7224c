use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::algorithm::engine::ShortestPathEngine;
use crate::graph::Graph;
use crate::Result;

/// Represents a vertex of a solved graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebNode {
    pub id: usize,
    pub label: String,
    /// Shortest distance from the start, absent if unreachable
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predecessor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<String>>,
    #[serde(default)]
    pub is_start: bool,
}

/// Represents an arc of a solved graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebEdge {
    pub id: usize,
    pub source: usize,
    pub target: usize,
    pub weight: u64,
    /// True if the arc is on the shortest-path tree
    #[serde(default)]
    pub is_path: bool,
    /// True for the marked half of a mirrored undirected pair
    #[serde(default)]
    pub undirected: bool,
}

/// Represents a complete solved graph
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebGraph {
    pub directed: bool,
    pub nodes: Vec<WebNode>,
    pub links: Vec<WebEdge>,
}

impl WebGraph {
    /// Collects the query surface of a finished engine
    pub fn from_engine(engine: &ShortestPathEngine) -> Result<Self> {
        let graph = engine.graph();
        let start = engine.start();

        let mut nodes = Vec::with_capacity(graph.vertices().len());
        for vertex in graph.vertices() {
            let name = vertex.name();
            nodes.push(WebNode {
                id: vertex.id(),
                label: name.to_string(),
                distance: engine.distance(name)?,
                predecessor: engine.predecessor(name)?.map(str::to_string),
                path: engine.path_to(name)?,
                is_start: start == Some(name),
            });
        }

        let links = graph
            .edges()
            .iter()
            .map(|edge| WebEdge {
                id: edge.id(),
                source: edge.from(),
                target: edge.to(),
                weight: edge.weight(),
                is_path: edge.is_discovered(),
                undirected: edge.is_undirected(),
            })
            .collect();

        Ok(WebGraph {
            directed: graph.is_directed(),
            nodes,
            links,
        })
    }
}

/// Response of a shortest-path computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolveResponse {
    pub solution_id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub start: String,
    pub execution_time_ms: f64,
    pub reachable: usize,
    pub graph: WebGraph,
    /// Plain-text report, one line per vertex
    pub report: String,
    /// Graphviz rendering of the solved graph
    pub dot: String,
}

/// Health check payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub solutions_stored: usize,
}

/// Error response for API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
