use heap_dijkstra::algorithm::traits::ShortestPathAlgorithm;
use heap_dijkstra::graph::generators::{grid_graph, random_graph};
use heap_dijkstra::graph::{Graph, GraphKind, MutableGraph, NamedGraph};
use heap_dijkstra::{BruteForce, Dijkstra, ErrorKind, ShortestPathResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Checks that a path starts at the source, ends at the target, follows
// existing arcs and adds up to the reported distance
fn assert_valid_path<G: Graph>(graph: &G, result: &ShortestPathResult, target: usize) {
    let path = result.path_to(target).expect("reachable target should have a path");
    assert_eq!(path[0], result.source, "Path should start at source");
    assert_eq!(*path.last().unwrap(), target, "Path should end at target");

    let mut length = 0;
    for pair in path.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]), "Path uses a missing arc {:?}", pair);
        length += graph.get_edge_weight(pair[0], pair[1]).unwrap();
    }
    assert_eq!(Some(length), result.distances[target]);
}

#[test]
fn test_path_finding_simple_grid() {
    let (width, height) = (10, 10);
    let graph = grid_graph(width, height, 1);
    let source = 0;

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, source).unwrap();

    for y in 0..height {
        for x in 0..width {
            let target = y * width + x;
            // Manhattan distance on a unit grid
            assert_eq!(result.distances[target], Some((x + y) as u64));
        }
    }

    let target = width * height - 1;
    let path = <Dijkstra as ShortestPathAlgorithm<NamedGraph>>::get_path(&dijkstra, &result, target)
        .unwrap();
    assert_eq!(path.len(), width + height - 1);
    assert_valid_path(&graph, &result, target);
}

#[test]
fn test_matches_brute_force_on_random_directed_graphs() {
    let mut rng = StdRng::seed_from_u64(42);
    let dijkstra = Dijkstra::new();
    let brute_force = BruteForce::new();

    for _ in 0..25 {
        let graph = random_graph(&mut rng, 7, 0.35, 10, GraphKind::Directed);
        for source in 0..graph.vertex_count() {
            let expected = brute_force.compute_shortest_paths(&graph, source).unwrap();
            let actual = dijkstra.compute_shortest_paths(&graph, source).unwrap();

            assert_eq!(actual.distances, expected.distances);
            for target in 0..graph.vertex_count() {
                if actual.is_reachable(target) {
                    assert_valid_path(&graph, &actual, target);
                }
            }
        }
    }
}

#[test]
fn test_matches_brute_force_on_random_undirected_graphs() {
    let mut rng = StdRng::seed_from_u64(1234);
    let dijkstra = Dijkstra::new();
    let brute_force = BruteForce::new();

    for _ in 0..25 {
        let graph = random_graph(&mut rng, 6, 0.4, 10, GraphKind::Undirected);
        for source in 0..graph.vertex_count() {
            let expected = brute_force.compute_shortest_paths(&graph, source).unwrap();
            let actual = dijkstra.compute_shortest_paths(&graph, source).unwrap();
            assert_eq!(actual.distances, expected.distances);
        }
    }
}

#[test]
fn test_undirected_distances_are_symmetric() {
    let mut rng = StdRng::seed_from_u64(99);
    let graph = random_graph(&mut rng, 20, 0.2, 50, GraphKind::Undirected);
    let dijkstra = Dijkstra::new();

    let results: Vec<ShortestPathResult> = (0..graph.vertex_count())
        .map(|source| dijkstra.compute_shortest_paths(&graph, source).unwrap())
        .collect();

    for u in 0..graph.vertex_count() {
        for v in 0..graph.vertex_count() {
            assert_eq!(results[u].distances[v], results[v].distances[u]);
        }
    }
}

#[test]
fn test_caller_graph_is_not_modified() {
    let mut graph = NamedGraph::directed();
    graph.add_vertex("A").unwrap();
    graph.add_vertex("B").unwrap();
    graph.add_edge("A", "B", 7).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.distances, vec![Some(0), Some(7)]);
    assert_eq!(result.predecessors, vec![None, Some(0)]);

    assert!(graph.vertices().iter().all(|v| !v.distance().is_finite()));
    assert!(graph.edges().iter().all(|e| !e.is_discovered()));
}

#[test]
fn test_unknown_source_is_not_found() {
    let graph = grid_graph(2, 2, 1);

    let err = Dijkstra::new().compute_shortest_paths(&graph, 10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = BruteForce::new().compute_shortest_paths(&graph, 10).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_unreachable_targets_have_no_path() {
    let mut graph = NamedGraph::directed();
    for name in ["A", "B", "C"] {
        graph.add_vertex(name).unwrap();
    }
    graph.add_edge("B", "A", 1).unwrap();

    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(result.reachable_count(), 1);
    assert_eq!(result.path_to(0), Some(vec![0]));
    assert_eq!(result.path_to(1), None);
    assert_eq!(result.path_to(2), None);
}
