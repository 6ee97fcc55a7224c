use std::fs;

use heap_dijkstra::config::OutputConfig;
use heap_dijkstra::description::{EdgeDescription, GraphDescription};
use heap_dijkstra::{Error, ErrorKind, GraphKind};
use uuid::Uuid;

const TRIANGLE: &str = r#"{
    "vertices": ["A", "B", "C"],
    "edges": [
        { "from": "A", "to": "B", "weight": 4 },
        { "from": "A", "to": "C", "weight": 1 },
        { "from": "C", "to": "B", "weight": 1 }
    ],
    "start": "A"
}"#;

#[test]
fn test_parse_with_defaults() {
    let description = GraphDescription::from_json(TRIANGLE).unwrap();

    assert!(description.directed);
    assert_eq!(description.kind(), GraphKind::Directed);
    assert_eq!(description.vertices, vec!["A", "B", "C"]);
    assert_eq!(description.start.as_deref(), Some("A"));
    assert_eq!(
        description.edges[2],
        EdgeDescription {
            from: "C".to_string(),
            to: "B".to_string(),
            weight: 1,
        }
    );

    let bare = GraphDescription::from_json(r#"{ "directed": false, "vertices": ["X"] }"#).unwrap();
    assert_eq!(bare.kind(), GraphKind::Undirected);
    assert!(bare.edges.is_empty());
    assert_eq!(bare.start, None);
}

#[test]
fn test_build_and_run() {
    let description = GraphDescription::from_json(TRIANGLE).unwrap();
    let mut engine = description.build().unwrap();

    assert_eq!(engine.graph().vertices().len(), 3);
    assert_eq!(engine.graph().edges().len(), 3);

    engine.run(description.start.as_deref().unwrap()).unwrap();
    assert_eq!(engine.distance("B").unwrap(), Some(2));
}

#[test]
fn test_undirected_build_mirrors_edges() {
    let json = r#"{
        "directed": false,
        "vertices": ["A", "B"],
        "edges": [{ "from": "A", "to": "B", "weight": 3 }]
    }"#;
    let mut engine = GraphDescription::from_json(json).unwrap().build().unwrap();
    assert_eq!(engine.graph().edges().len(), 2);

    engine.run("B").unwrap();
    assert_eq!(engine.distance("A").unwrap(), Some(3));
}

#[test]
fn test_malformed_json_is_an_input_error() {
    let err = GraphDescription::from_json("{ \"vertices\": [").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert_eq!(err.kind(), ErrorKind::Input);

    // Vertices are required
    let err = GraphDescription::from_json("{ \"directed\": true }").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Input);
}

#[test]
fn test_build_rejects_invalid_graphs() {
    let negative = r#"{
        "vertices": ["A", "B"],
        "edges": [{ "from": "A", "to": "B", "weight": -2 }]
    }"#;
    let err = GraphDescription::from_json(negative).unwrap().build().unwrap_err();
    assert!(matches!(err, Error::NegativeWeight(-2)));

    let dangling = r#"{
        "vertices": ["A"],
        "edges": [{ "from": "A", "to": "Q", "weight": 1 }]
    }"#;
    let err = GraphDescription::from_json(dangling).unwrap().build().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let duplicate = r#"{ "vertices": ["A", "A"] }"#;
    let err = GraphDescription::from_json(duplicate).unwrap().build().unwrap_err();
    assert!(matches!(err, Error::DuplicateVertex(_)));
}

#[test]
fn test_load_from_file() {
    let path = std::env::temp_dir().join(format!("heap_dijkstra_{}.json", Uuid::new_v4()));
    fs::write(&path, TRIANGLE).unwrap();

    let description = GraphDescription::from_path(&path).unwrap();
    assert_eq!(description, GraphDescription::from_json(TRIANGLE).unwrap());

    fs::remove_file(&path).unwrap();
}

#[test]
fn test_missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join(format!("heap_dijkstra_{}.json", Uuid::new_v4()));

    let err = GraphDescription::from_path(&path).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert_eq!(err.kind(), ErrorKind::Input);

    assert!(matches!(OutputConfig::from_path(&path), Err(Error::Io(_))));
}

#[test]
fn test_output_config_keeps_defaults_for_missing_fields() {
    let path = std::env::temp_dir().join(format!("heap_dijkstra_{}.json", Uuid::new_v4()));
    fs::write(&path, r#"{ "output_dir": "artifacts", "write_report": false }"#).unwrap();

    let config = OutputConfig::from_path(&path).unwrap();
    assert_eq!(config.output_dir, std::path::PathBuf::from("artifacts"));
    assert!(!config.write_report);
    assert!(config.write_dot);
    assert_eq!(config.first_artifact_number, 1);

    fs::remove_file(&path).unwrap();
}
