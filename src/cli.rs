use crate::adapters::github::GithubIssueSource;
use crate::adapters::graphviz::{GraphvizRenderer, OutputFormat};
use crate::config::{CrawlConfig, DEFAULT_API_BASE, ForgeConfig};
use crate::domain::crawler::DependencyCrawler;
use crate::domain::graph::DependencyGraph;
use crate::domain::issue::IssueNumber;
use crate::domain::ports::{GraphRenderer, IssueSource};
use anyhow::{Context as _, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Render a dependency graph for your GitHub issues.
///
/// Starting from the parent issue, every line of an issue body that says
/// "depends on" or "requires" is scanned for `#N` and issue links, and those
/// issues are followed in turn.
#[derive(Parser, Debug, Clone)]
#[command(name = "depender-render")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The GitHub user or organization
    #[arg(short, long)]
    pub user: String,

    /// The GitHub repository
    #[arg(short, long)]
    pub repo: String,

    /// The issue number to start the dependency graph from
    #[arg(long)]
    pub parent_issue: IssueNumber,

    /// Document format produced by Graphviz
    #[arg(long, value_enum, default_value_t = OutputFormat::Pdf)]
    pub format: OutputFormat,

    /// Base URL of the issue API
    #[arg(long, default_value = DEFAULT_API_BASE)]
    pub api_url: String,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// The output file (DOT source; the rendered document gets the format's extension)
    pub output: PathBuf,
}

impl Cli {
    pub fn crawl_config(&self) -> CrawlConfig {
        CrawlConfig::new(&self.user, &self.repo)
    }

    pub fn forge_config(&self) -> ForgeConfig {
        ForgeConfig::default().with_api_base(&self.api_url)
    }

    /// Crawl the forge and render the graph; returns the rendered document path.
    pub fn run(&self) -> Result<PathBuf> {
        let config = self.crawl_config();
        let source = GithubIssueSource::new(self.forge_config(), &self.user, &self.repo)?;
        let renderer = GraphvizRenderer::new(self.format);
        render_dependency_graph(&config, &source, &renderer, self.parent_issue, &self.output)
    }
}

/// Build the graph for `parent` as configured.
pub fn dependency_graph(
    config: &CrawlConfig,
    source: &dyn IssueSource,
    parent: IssueNumber,
) -> DependencyGraph {
    let extractor = config.extractor();
    DependencyCrawler::new(source, &extractor, config.max_depth).crawl(parent)
}

pub fn render_dependency_graph(
    config: &CrawlConfig,
    source: &dyn IssueSource,
    renderer: &dyn GraphRenderer,
    parent: IssueNumber,
    output: &Path,
) -> Result<PathBuf> {
    let graph = dependency_graph(config, source, parent);
    renderer
        .render(&graph, output)
        .with_context(|| format!("Failed to render dependency graph to {}", output.display()))
}
