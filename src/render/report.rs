use std::fmt::Write as _;
use std::io;

use crate::algorithm::engine::ShortestPathEngine;
use crate::{Error, Result};

/// One line per vertex, in the order the vertices were added:
///
/// ```text
/// A -> A: best 0: A
/// A -> B: best 2: A C B
/// A -> D: NO PATH
/// ```
pub fn render_report(engine: &ShortestPathEngine) -> Result<String> {
    let start = engine.start().ok_or(Error::NotComputed)?;
    let mut out = String::new();

    for vertex in engine.graph().vertices() {
        let name = vertex.name();
        // Writing into a String cannot fail
        let _ = match (engine.distance(name)?, engine.path_to(name)?) {
            (Some(distance), Some(path)) => {
                writeln!(out, "{} -> {}: best {}: {}", start, name, distance, path.join(" "))
            }
            _ => writeln!(out, "{} -> {}: NO PATH", start, name),
        };
    }

    Ok(out)
}

/// Writes the report produced by [`render_report`]
pub fn write_report<W: io::Write>(engine: &ShortestPathEngine, mut out: W) -> Result<()> {
    out.write_all(render_report(engine)?.as_bytes())?;
    Ok(())
}
