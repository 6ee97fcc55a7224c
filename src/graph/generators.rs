use rand::Rng;

use crate::graph::{GraphKind, NamedGraph, VertexId};

/// Name given to the `index`-th vertex of a generated graph
pub fn vertex_label(index: usize) -> String {
    format!("v{}", index)
}

/// Generates a random graph with vertices `v0..vN`
///
/// Every ordered pair (or unordered pair, for undirected graphs) of distinct
/// vertices is connected with probability `edge_probability`, using a weight
/// drawn uniformly from `0..=max_weight`.
pub fn random_graph<R: Rng + ?Sized>(
    rng: &mut R,
    vertices: usize,
    edge_probability: f64,
    max_weight: u32,
    kind: GraphKind,
) -> NamedGraph {
    let mut graph = NamedGraph::with_capacity(kind, vertices);

    for i in 0..vertices {
        // Generated labels are unique and non-empty
        let _ = graph.insert_vertex(&vertex_label(i));
    }

    let probability = edge_probability.clamp(0.0, 1.0);
    for u in 0..vertices {
        let targets: Box<dyn Iterator<Item = VertexId>> = match kind {
            GraphKind::Directed => Box::new(0..vertices),
            GraphKind::Undirected => Box::new(u + 1..vertices),
        };
        for v in targets {
            if u == v || !rng.gen_bool(probability) {
                continue;
            }
            let weight = rng.gen_range(0..=max_weight);
            let _ = graph.connect(u, v, i64::from(weight));
        }
    }

    graph
}

/// Generates an undirected 4-connected grid of `width * height` vertices
///
/// The vertex at column `x`, row `y` is named `r{y}c{x}` and has id
/// `y * width + x`. Every link has the same weight.
pub fn grid_graph(width: usize, height: usize, weight: u32) -> NamedGraph {
    let mut graph = NamedGraph::with_capacity(GraphKind::Undirected, width * height);

    for y in 0..height {
        for x in 0..width {
            let _ = graph.insert_vertex(&format!("r{}c{}", y, x));
        }
    }

    let get_index = |x: usize, y: usize| -> VertexId { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = get_index(x, y);
            if x + 1 < width {
                let _ = graph.connect(current, get_index(x + 1, y), i64::from(weight));
            }
            if y + 1 < height {
                let _ = graph.connect(current, get_index(x, y + 1), i64::from(weight));
            }
        }
    }

    graph
}
