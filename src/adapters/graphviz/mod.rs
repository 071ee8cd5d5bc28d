//! Graphviz rendering adapter

mod dot;
mod renderer;

pub use dot::to_dot;
pub use renderer::{DEFAULT_ENGINE, GraphvizRenderer, OutputFormat};
