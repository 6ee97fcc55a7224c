use std::env;
use std::io;

use heap_dijkstra::config::OutputConfig;
use heap_dijkstra::description::GraphDescription;
use heap_dijkstra::render::{write_report, DotWriter};
use heap_dijkstra::{Error, Result};
use log::{error, info};

const USAGE: &str = "usage: sssp <graph.json> [start] [--config <output.json>]";

struct Args {
    graph_path: String,
    start: Option<String>,
    config_path: Option<String>,
}

fn parse_args() -> Option<Args> {
    let mut positional = Vec::new();
    let mut config_path = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = Some(args.next()?);
        } else {
            positional.push(arg);
        }
    }

    let mut positional = positional.into_iter();
    let graph_path = positional.next()?;
    let start = positional.next();
    if positional.next().is_some() {
        return None;
    }
    Some(Args {
        graph_path,
        start,
        config_path,
    })
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config_path {
        Some(path) => OutputConfig::from_path(path)?,
        None => OutputConfig::default(),
    };

    let description = GraphDescription::from_path(&args.graph_path)?;
    let start = args
        .start
        .or_else(|| description.start.clone())
        .ok_or(Error::MissingStart)?;

    let mut engine = description.build()?;
    info!(
        "Loaded {} vertices and {} edges from {}",
        description.vertices.len(),
        description.edges.len(),
        args.graph_path
    );
    engine.run(&start)?;

    if config.write_report {
        write_report(&engine, io::stdout().lock())?;
    }
    if config.write_dot {
        // A failed DOT file is reported by the writer and does not fail the run
        let mut writer = DotWriter::from_config(&config);
        info!("Writing DOT files to {}", writer.output_dir().display());
        if let Some(path) = writer.write(&engine) {
            info!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let Some(args) = parse_args() else {
        eprintln!("{}", USAGE);
        return Err(USAGE.into());
    };

    run(args).map_err(|err| {
        error!("{}", err);
        err.into()
    })
}
