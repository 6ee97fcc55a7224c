use std::fs;
use std::path::PathBuf;

use heap_dijkstra::config::OutputConfig;
use heap_dijkstra::render::{render_dot, render_report, write_report, DotWriter};
use heap_dijkstra::{Error, ShortestPathEngine};
use uuid::Uuid;

fn solved_triangle() -> ShortestPathEngine {
    let mut engine = ShortestPathEngine::directed();
    for name in ["A", "B", "C"] {
        engine.add_vertex(name).unwrap();
    }
    engine.add_edge("A", "B", 4).unwrap();
    engine.add_edge("A", "C", 1).unwrap();
    engine.add_edge("C", "B", 1).unwrap();
    engine.run("A").unwrap();
    engine
}

fn solved_pair(start: &str) -> ShortestPathEngine {
    let mut engine = ShortestPathEngine::undirected();
    engine.add_vertex("A").unwrap();
    engine.add_vertex("B").unwrap();
    engine.add_edge("A", "B", 3).unwrap();
    engine.run(start).unwrap();
    engine
}

fn scratch_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!("heap_dijkstra_{}", Uuid::new_v4()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_report_lists_every_vertex() {
    let engine = solved_triangle();
    assert_eq!(
        render_report(&engine).unwrap(),
        "A -> A: best 0: A\nA -> B: best 2: A C B\nA -> C: best 1: A C\n"
    );

    let mut buffer = Vec::new();
    write_report(&engine, &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), render_report(&engine).unwrap());
}

#[test]
fn test_report_marks_unreachable_vertices() {
    let mut engine = ShortestPathEngine::directed();
    engine.add_vertex("A").unwrap();
    engine.add_vertex("B").unwrap();
    engine.add_edge("B", "A", 2).unwrap();
    engine.run("A").unwrap();

    assert_eq!(render_report(&engine).unwrap(), "A -> A: best 0: A\nA -> B: NO PATH\n");
}

#[test]
fn test_report_requires_a_run() {
    let mut engine = ShortestPathEngine::directed();
    engine.add_vertex("A").unwrap();

    assert!(matches!(render_report(&engine), Err(Error::NotComputed)));
    assert!(matches!(render_dot(&engine), Err(Error::NotComputed)));
}

#[test]
fn test_directed_dot_highlights_the_tree() {
    let engine = solved_triangle();
    let expected = "digraph {\n\
                    A [label=\"A\\ndist: 0\"];\n\
                    A -> B [label=4];\n\
                    A -> C [label=1,color=red];\n\
                    B [label=\"B\\ndist: 2\"];\n\
                    C [label=\"C\\ndist: 1\"];\n\
                    C -> B [label=1,color=red];\n\
                    }\n";
    assert_eq!(render_dot(&engine).unwrap(), expected);
}

#[test]
fn test_undirected_dot_draws_each_link_once() {
    let expected = "graph {\n\
                    A [label=\"A\\ndist: 0\"];\n\
                    A -- B [label=3,color=red];\n\
                    B [label=\"B\\ndist: 3\"];\n\
                    }\n";
    assert_eq!(render_dot(&solved_pair("A")).unwrap(), expected);

    // From B the discovered half is the mirrored arc
    let expected = "graph {\n\
                    A [label=\"A\\ndist: 3\"];\n\
                    B [label=\"B\\ndist: 0\"];\n\
                    B -- A [label=3,color=red];\n\
                    }\n";
    assert_eq!(render_dot(&solved_pair("B")).unwrap(), expected);
}

#[test]
fn test_dot_leaves_unreachable_vertices_bare() {
    let mut engine = ShortestPathEngine::undirected();
    for name in ["A", "B", "C", "D"] {
        engine.add_vertex(name).unwrap();
    }
    engine.add_edge("A", "B", 2).unwrap();
    engine.add_edge("C", "D", 5).unwrap();
    engine.run("A").unwrap();

    let dot = render_dot(&engine).unwrap();
    assert!(dot.contains("\nC;\n"));
    assert!(dot.contains("\nD;\n"));
    // Off the tree, the unmarked half of the pair is drawn
    assert!(dot.contains("\nD -- C [label=5];\n"));
    assert!(!dot.contains("C -- D"));
}

#[test]
fn test_dot_quotes_unusual_names() {
    let mut engine = ShortestPathEngine::directed();
    engine.add_vertex("New York").unwrap();
    engine.add_vertex("42").unwrap();
    engine.add_edge("New York", "42", 1).unwrap();
    engine.run("New York").unwrap();

    let dot = render_dot(&engine).unwrap();
    assert!(dot.contains("\"New York\" [label=\"New York\\ndist: 0\"];"));
    assert!(dot.contains("\"New York\" -> 42 [label=1,color=red];"));
    assert!(dot.contains("42 [label=\"42\\ndist: 1\"];"));
}

#[test]
fn test_dot_quotes_keyword_names() {
    let mut engine = ShortestPathEngine::directed();
    for name in ["node", "Graph", "edges"] {
        engine.add_vertex(name).unwrap();
    }
    engine.add_edge("node", "Graph", 2).unwrap();
    engine.add_edge("Graph", "edges", 1).unwrap();
    engine.run("node").unwrap();

    let dot = render_dot(&engine).unwrap();
    assert!(dot.contains("\n\"node\" [label=\"node\\ndist: 0\"];\n"));
    assert!(dot.contains("\n\"node\" -> \"Graph\" [label=2,color=red];\n"));
    // Keywords match case-insensitively; words merely containing one stay plain
    assert!(dot.contains("\n\"Graph\" -> edges [label=1,color=red];\n"));
    assert!(dot.contains("\nedges [label=\"edges\\ndist: 3\"];\n"));
}

#[test]
fn test_dot_writer_numbers_files() {
    let dir = scratch_dir();
    let mut writer = DotWriter::new(&dir, 1);
    assert_eq!(writer.output_dir(), dir.as_path());

    let first = writer.write(&solved_triangle()).unwrap();
    let second = writer.write(&solved_pair("A")).unwrap();

    assert_eq!(first, dir.join("1digraph.dot"));
    assert_eq!(second, dir.join("2graph.dot"));
    assert_eq!(writer.next_number(), 3);
    assert_eq!(
        fs::read_to_string(&first).unwrap(),
        render_dot(&solved_triangle()).unwrap()
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_dot_writer_skips_failed_writes() {
    let dir = scratch_dir();
    let config = OutputConfig {
        output_dir: dir.join("missing").join("nested"),
        first_artifact_number: 7,
        ..OutputConfig::default()
    };
    let mut writer = DotWriter::from_config(&config);

    assert_eq!(writer.write(&solved_triangle()), None);
    // The failed step still consumes its number
    assert_eq!(writer.next_number(), 8);
    assert!(!config.output_dir.exists());

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_dot_writer_skips_unsolved_engines() {
    let dir = scratch_dir();
    let mut writer = DotWriter::new(&dir, 1);
    let engine = ShortestPathEngine::directed();

    assert_eq!(writer.write(&engine), None);
    assert_eq!(writer.next_number(), 2);
    assert!(!dir.join("1digraph.dot").exists());

    fs::remove_dir_all(&dir).unwrap();
}
