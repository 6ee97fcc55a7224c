use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, error};

use crate::algorithm::engine::ShortestPathEngine;
use crate::config::OutputConfig;
use crate::graph::GraphKind;
use crate::Result;

/// Renders the solved graph as a Graphviz document
///
/// Reachable vertices are labelled with their distance and edges on the
/// shortest-path tree are drawn red. In undirected graphs each mirrored pair
/// is drawn once: the half on the tree if there is one, otherwise the
/// unmarked half. A pair whose marked half is on the tree therefore does not
/// also get a plain edge for its unmarked half.
pub fn render_dot(engine: &ShortestPathEngine) -> Result<String> {
    let result = engine.result()?;
    let graph = engine.graph();
    let (header, connector) = match engine.kind() {
        GraphKind::Directed => ("digraph", "->"),
        GraphKind::Undirected => ("graph", "--"),
    };

    let mut out = String::new();
    let _ = writeln!(out, "{} {{", header);

    for vertex in graph.vertices() {
        let id = dot_id(vertex.name());
        let _ = match result.distances[vertex.id()] {
            Some(distance) => writeln!(
                out,
                "{} [label=\"{}\\ndist: {}\"];",
                id,
                escape(vertex.name()),
                distance
            ),
            None => writeln!(out, "{};", id),
        };

        for edge in graph.outgoing(vertex.id()) {
            if engine.kind() == GraphKind::Undirected && !edge.is_discovered() {
                let twin_discovered = edge
                    .twin()
                    .and_then(|twin| graph.edge(twin))
                    .is_some_and(|twin| twin.is_discovered());
                if edge.is_undirected() || twin_discovered {
                    continue;
                }
            }
            let to = graph
                .vertex(edge.to())
                .map(|v| dot_id(v.name()))
                .unwrap_or_default();
            let color = if edge.is_discovered() { ",color=red" } else { "" };
            let _ = writeln!(
                out,
                "{} {} {} [label={}{}];",
                id,
                connector,
                to,
                edge.weight(),
                color
            );
        }
    }

    out.push_str("}\n");
    Ok(out)
}

/// Writes numbered DOT files (`1digraph.dot`, `2digraph.dot`, ...)
///
/// A failed write is logged and skipped; it never aborts the caller.
#[derive(Debug, Clone)]
pub struct DotWriter {
    output_dir: PathBuf,
    next_number: usize,
}

impl DotWriter {
    pub fn new<P: Into<PathBuf>>(output_dir: P, first_number: usize) -> Self {
        DotWriter {
            output_dir: output_dir.into(),
            next_number: first_number,
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        DotWriter::new(config.output_dir.clone(), config.first_artifact_number)
    }

    /// Number the next file will get
    pub fn next_number(&self) -> usize {
        self.next_number
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Renders the engine into the next numbered file
    ///
    /// Returns the path written, or `None` if this output step failed.
    pub fn write(&mut self, engine: &ShortestPathEngine) -> Option<PathBuf> {
        let number = self.next_number;
        self.next_number += 1;

        let file_name = match engine.kind() {
            GraphKind::Directed => format!("{}digraph.dot", number),
            GraphKind::Undirected => format!("{}graph.dot", number),
        };
        let path = self.output_dir.join(file_name);

        let contents = match render_dot(engine) {
            Ok(contents) => contents,
            Err(err) => {
                error!("Cannot render '{}': {}", path.display(), err);
                return None;
            }
        };
        match fs::write(&path, contents) {
            Ok(()) => {
                debug!("Wrote {}", path.display());
                Some(path)
            }
            Err(err) => {
                error!("It was not possible to write the file '{}': {}", path.display(), err);
                None
            }
        }
    }
}

/// Graphviz keywords, which are case-insensitive and never plain identifiers
const KEYWORDS: [&str; 6] = ["node", "edge", "graph", "digraph", "subgraph", "strict"];

/// Quotes names that are not plain Graphviz identifiers
fn dot_id(name: &str) -> String {
    let plain_word = name.chars().next().is_some_and(|c| !c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
        && !KEYWORDS.contains(&name.to_ascii_lowercase().as_str());
    let numeral = !name.is_empty() && name.chars().all(|c| c.is_ascii_digit());

    if plain_word || numeral {
        name.to_string()
    } else {
        format!("\"{}\"", escape(name))
    }
}

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
