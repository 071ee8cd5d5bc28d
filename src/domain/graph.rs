use crate::domain::issue::IssueNumber;
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use std::collections::HashMap;

/// Graph node for one issue.
///
/// `title` is `None` for a bare node: one that only appeared as an edge target
/// and was never fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueNode {
    pub number: IssueNumber,
    pub title: Option<String>,
}

impl IssueNode {
    pub fn is_declared(&self) -> bool {
        self.title.is_some()
    }
}

/// Dependency Graph - issue -> dependency edges keyed by issue number
#[derive(Debug, Default)]
pub struct DependencyGraph {
    pub graph: DiGraph<IssueNode, ()>,

    /// Mapping from issue number to node index
    pub number_to_node: HashMap<IssueNumber, NodeIndex>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn get_or_create_node(&mut self, number: IssueNumber) -> NodeIndex {
        if let Some(&idx) = self.number_to_node.get(&number) {
            return idx;
        }
        let idx = self.graph.add_node(IssueNode {
            number,
            title: None,
        });
        self.number_to_node.insert(number, idx);
        idx
    }

    /// Declare an issue node. Adding the same number again only replaces its label.
    pub fn add_node(&mut self, number: IssueNumber, title: impl Into<String>) -> NodeIndex {
        let idx = self.get_or_create_node(number);
        self.graph[idx].title = Some(title.into());
        idx
    }

    /// Add `from -> to`. Endpoints that were never declared become bare nodes;
    /// an edge that already exists is left as is.
    pub fn add_edge(&mut self, from: IssueNumber, to: IssueNumber) {
        let source = self.get_or_create_node(from);
        let target = self.get_or_create_node(to);
        if self.graph.find_edge(source, target).is_none() {
            self.graph.add_edge(source, target, ());
        }
    }

    pub fn get_node_by_number(&self, number: IssueNumber) -> Option<NodeIndex> {
        self.number_to_node.get(&number).copied()
    }

    pub fn node(&self, idx: NodeIndex) -> &IssueNode {
        &self.graph[idx]
    }

    pub fn contains(&self, number: IssueNumber) -> bool {
        self.number_to_node.contains_key(&number)
    }

    /// Title of a declared node
    pub fn title(&self, number: IssueNumber) -> Option<&str> {
        let idx = self.get_node_by_number(number)?;
        self.graph[idx].title.as_deref()
    }

    pub fn has_edge(&self, from: IssueNumber, to: IssueNumber) -> bool {
        match (self.get_node_by_number(from), self.get_node_by_number(to)) {
            (Some(source), Some(target)) => self.graph.find_edge(source, target).is_some(),
            _ => false,
        }
    }

    /// Direct dependencies of `number`, ascending.
    pub fn dependencies_of(&self, number: IssueNumber) -> Vec<IssueNumber> {
        let Some(idx) = self.get_node_by_number(number) else {
            return Vec::new();
        };
        let mut deps: Vec<IssueNumber> = self
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|n| self.graph[n].number)
            .collect();
        deps.sort_unstable();
        deps
    }

    /// Nodes in insertion order, bare ones included.
    pub fn nodes(&self) -> impl Iterator<Item = &IssueNode> {
        self.graph.node_indices().map(move |idx| &self.graph[idx])
    }

    /// Nodes created by [`Self::add_node`], in insertion order.
    pub fn declared_nodes(&self) -> impl Iterator<Item = &IssueNode> {
        self.nodes().filter(|node| node.is_declared())
    }

    /// Edges as `(from, to)` in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (IssueNumber, IssueNumber)> + '_ {
        self.graph.edge_indices().filter_map(move |e| {
            let (source, target) = self.graph.edge_endpoints(e)?;
            Some((self.graph[source].number, self.graph[target].number))
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn declared_node_count(&self) -> usize {
        self.declared_nodes().count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
