//! Text and DOT output built from a finished engine's query surface

pub mod dot;
pub mod report;

pub use dot::{render_dot, DotWriter};
pub use report::{render_report, write_report};
