use crate::domain::graph::DependencyGraph;
use crate::domain::issue::{Issue, IssueNumber};
use anyhow::Result;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Why an issue could not be fetched. Only used for the operator message;
/// every variant is handled the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("HTTP status {0}")]
    Status(u16),
    #[error("malformed issue payload: {0}")]
    Decode(String),
}

/// The single fetch-layer outcome: the issue is not available.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("issue {number} unavailable: {reason}")]
pub struct IssueUnavailable {
    pub number: IssueNumber,
    pub reason: FetchFailure,
}

/// Issue source port (implemented by Infrastructure)
pub trait IssueSource {
    fn fetch(&self, number: IssueNumber) -> Result<Issue, IssueUnavailable>;

    /// Fetch several issues in order, dropping the ones that are unavailable.
    fn fetch_many(&self, numbers: &[IssueNumber]) -> Vec<Issue> {
        numbers
            .iter()
            .filter_map(|&number| match self.fetch(number) {
                Ok(issue) => Some(issue),
                Err(e) => {
                    tracing::warn!("Error fetching issue {}: {}", number, e.reason);
                    None
                }
            })
            .collect()
    }
}

/// Graph renderer port
pub trait GraphRenderer {
    /// Materialise `graph` at `output`; returns the path of the rendered document.
    fn render(&self, graph: &DependencyGraph, output: &Path) -> Result<PathBuf>;
}
