use super::dot::to_dot;
use crate::domain::graph::DependencyGraph;
use crate::domain::ports::GraphRenderer;
use anyhow::{Context, Result, bail};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::{debug, info};

pub const DEFAULT_ENGINE: &str = "dot";

/// Output document format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pdf,
    Png,
    Svg,
    /// DOT source only; Graphviz is not invoked
    Dot,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Pdf => "pdf",
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
            OutputFormat::Dot => "dot",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Renders through the Graphviz command-line engine.
///
/// The DOT source is written to the output path and the document next to it,
/// at `<output>.<format>`.
#[derive(Debug, Clone)]
pub struct GraphvizRenderer {
    format: OutputFormat,
    engine: String,
}

impl Default for GraphvizRenderer {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}

impl GraphvizRenderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            engine: DEFAULT_ENGINE.to_string(),
        }
    }

    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Path of the rendered document for a given source path
    pub fn rendered_path(&self, output: &Path) -> PathBuf {
        if self.format == OutputFormat::Dot {
            return output.to_path_buf();
        }
        let mut name = output.as_os_str().to_owned();
        name.push(".");
        name.push(self.format.extension());
        PathBuf::from(name)
    }
}

impl GraphRenderer for GraphvizRenderer {
    fn render(&self, graph: &DependencyGraph, output: &Path) -> Result<PathBuf> {
        std::fs::write(output, to_dot(graph))
            .with_context(|| format!("Failed to write graph source: {}", output.display()))?;
        debug!("Wrote DOT source to {}", output.display());

        let rendered = self.rendered_path(output);
        if self.format != OutputFormat::Dot {
            let result = Command::new(&self.engine)
                .arg(format!("-T{}", self.format.extension()))
                .arg("-o")
                .arg(&rendered)
                .arg(output)
                .output()
                .with_context(|| format!("Failed to run Graphviz engine `{}`", self.engine))?;
            if !result.status.success() {
                bail!(
                    "Graphviz engine `{}` failed ({}): {}",
                    self.engine,
                    result.status,
                    String::from_utf8_lossy(&result.stderr).trim()
                );
            }
        }

        info!("Rendered dependency graph to {}", rendered.display());
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendered_path_appends_extension() {
        let r = GraphvizRenderer::new(OutputFormat::Pdf);
        assert_eq!(r.rendered_path(Path::new("out/deps")), PathBuf::from("out/deps.pdf"));
        let r = GraphvizRenderer::new(OutputFormat::Svg);
        assert_eq!(r.rendered_path(Path::new("deps.gv")), PathBuf::from("deps.gv.svg"));
    }

    #[test]
    fn test_rendered_path_dot_is_source() {
        let r = GraphvizRenderer::new(OutputFormat::Dot);
        assert_eq!(r.rendered_path(Path::new("deps")), PathBuf::from("deps"));
    }

    #[test]
    fn test_default_is_pdf_with_dot_engine() {
        let r = GraphvizRenderer::default();
        assert_eq!(r.format(), OutputFormat::Pdf);
        assert_eq!(r.engine, DEFAULT_ENGINE);
        assert_eq!(OutputFormat::Png.to_string(), "png");
    }
}
