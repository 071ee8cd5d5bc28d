//! Mock implementations for integration tests.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use depender_render::domain::graph::DependencyGraph;
use depender_render::domain::issue::{Issue, IssueNumber};
use depender_render::domain::ports::{FetchFailure, GraphRenderer, IssueSource, IssueUnavailable};

/// Mock IssueSource that serves issues from an in-memory map and records every fetch.
#[derive(Default)]
pub struct MockIssueSource {
    issues: HashMap<IssueNumber, Issue>,
    fetch_log: RefCell<Vec<IssueNumber>>,
}

impl MockIssueSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_issue(mut self, number: IssueNumber, title: &str, body: &str) -> Self {
        self.issues.insert(number, Issue::new(number, title, body));
        self
    }

    /// Issue numbers in the order they were requested, unavailable ones included.
    pub fn fetch_log(&self) -> Vec<IssueNumber> {
        self.fetch_log.borrow().clone()
    }

    pub fn fetch_count(&self, number: IssueNumber) -> usize {
        self.fetch_log.borrow().iter().filter(|&&n| n == number).count()
    }
}

impl IssueSource for MockIssueSource {
    fn fetch(&self, number: IssueNumber) -> Result<Issue, IssueUnavailable> {
        self.fetch_log.borrow_mut().push(number);
        self.issues.get(&number).cloned().ok_or(IssueUnavailable {
            number,
            reason: FetchFailure::Status(404),
        })
    }
}

/// Mock GraphRenderer that keeps the node and edge lists it was handed.
#[derive(Default)]
pub struct RecordingRenderer {
    pub rendered: RefCell<Vec<(Vec<IssueNumber>, Vec<(IssueNumber, IssueNumber)>)>>,
}

impl GraphRenderer for RecordingRenderer {
    fn render(&self, graph: &DependencyGraph, output: &Path) -> Result<PathBuf> {
        let nodes = graph.declared_nodes().map(|n| n.number).collect();
        let edges = graph.edges().collect();
        self.rendered.borrow_mut().push((nodes, edges));
        Ok(output.to_path_buf())
    }
}
