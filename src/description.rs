use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::algorithm::engine::ShortestPathEngine;
use crate::graph::GraphKind;
use crate::Result;

/// A graph read from JSON, ready to be loaded into an engine
///
/// ```json
/// {
///   "directed": true,
///   "vertices": ["A", "B", "C"],
///   "edges": [{ "from": "A", "to": "B", "weight": 4 }],
///   "start": "A"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDescription {
    #[serde(default = "default_directed")]
    pub directed: bool,
    pub vertices: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

/// One edge of a [`GraphDescription`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeDescription {
    pub from: String,
    pub to: String,
    pub weight: i64,
}

fn default_directed() -> bool {
    true
}

impl GraphDescription {
    /// Parses a description from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a description from a JSON file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading graph description from {}", path.display());
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn kind(&self) -> GraphKind {
        if self.directed {
            GraphKind::Directed
        } else {
            GraphKind::Undirected
        }
    }

    /// Builds an engine holding every vertex and edge of the description
    ///
    /// Stops at the first invalid vertex or edge.
    pub fn build(&self) -> Result<ShortestPathEngine> {
        let mut engine = ShortestPathEngine::new(self.kind());
        for name in &self.vertices {
            engine.add_vertex(name)?;
        }
        for edge in &self.edges {
            engine.add_edge(&edge.from, &edge.to, edge.weight)?;
        }
        Ok(engine)
    }
}
