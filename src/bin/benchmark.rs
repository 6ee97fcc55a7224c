use std::time::{Duration, Instant};

use heap_dijkstra::graph::generators::{random_graph, vertex_label};
use heap_dijkstra::graph::{Graph, GraphKind};
use heap_dijkstra::ShortestPathEngine;
use rand::rngs::StdRng;
use rand::SeedableRng;

// Function to benchmark one run on a graph
fn benchmark_run(kind: GraphKind, size: usize, edge_factor: f64, seed: u64) -> Duration {
    let mut rng = StdRng::seed_from_u64(seed);
    let probability = (edge_factor / size as f64).min(1.0);
    let graph = random_graph(&mut rng, size, probability, 100, kind);
    let arcs = graph.edge_count();

    let mut engine = ShortestPathEngine::with_graph(graph).unwrap();

    let start = Instant::now();
    engine.run(&vertex_label(0)).unwrap();
    let duration = start.elapsed();

    let reachable = engine
        .graph()
        .vertices()
        .iter()
        .filter(|v| v.distance().is_finite())
        .count();
    println!(
        "  {:?}: {} vertices, {} arcs, {} reachable in {:?}",
        kind, size, arcs, reachable, duration
    );

    duration
}

fn main() {
    env_logger::init();

    // The heap is rebuilt before every extraction, so runs are quadratic
    let graph_sizes = vec![100, 500, 1_000, 2_000, 4_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra with rebuild-before-extract heap");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut results = Vec::new();
    for &size in &graph_sizes {
        let directed = benchmark_run(GraphKind::Directed, size, edge_factor, size as u64);
        let undirected = benchmark_run(GraphKind::Undirected, size, edge_factor, size as u64);
        results.push((size, directed, undirected));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15} | {:<15}", "Vertices", "Directed (ms)", "Undirected (ms)");
    println!("-----------------------------------------------------");
    for (size, directed, undirected) in &results {
        println!(
            "{:<10} | {:<15.2} | {:<15.2}",
            size,
            directed.as_secs_f64() * 1000.0,
            undirected.as_secs_f64() * 1000.0
        );
    }
}
