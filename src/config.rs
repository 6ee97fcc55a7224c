use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::Result;

/// Controls which artifacts the command-line front end produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving DOT files
    pub output_dir: PathBuf,
    /// Print the per-vertex report to stdout
    pub write_report: bool,
    /// Write a numbered DOT file after the run
    pub write_dot: bool,
    /// Number given to the first DOT file
    pub first_artifact_number: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            write_report: true,
            write_dot: true,
            first_artifact_number: 1,
        }
    }
}

impl OutputConfig {
    /// Reads a JSON config file; missing fields keep their defaults
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }
}
