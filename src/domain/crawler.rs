use crate::domain::graph::DependencyGraph;
use crate::domain::issue::IssueNumber;
use crate::domain::ports::IssueSource;
use crate::domain::reference::ReferenceExtractor;
use tracing::{debug, info, warn};

/// Pending work on the crawl stack.
#[derive(Debug, Clone, Copy)]
enum Step {
    /// Fetch an issue and expand its dependencies.
    Visit {
        number: IssueNumber,
        depth_remaining: usize,
    },
    /// Record `from -> to`, then visit `to` one level deeper.
    Link {
        from: IssueNumber,
        to: IssueNumber,
        depth_remaining: usize,
    },
}

/// Counters for one crawl
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CrawlStats {
    pub fetched: usize,
    pub unavailable: usize,
}

/// Dependency Crawler - builds a DependencyGraph by following dependency references
///
/// There is no visited set: an issue reachable along several paths is fetched
/// and expanded once per path. The depth cap bounds the longest chain, so cycles
/// terminate after `max_depth` hops.
pub struct DependencyCrawler<'a> {
    source: &'a dyn IssueSource,
    extractor: &'a ReferenceExtractor,
    max_depth: usize,
}

impl<'a> DependencyCrawler<'a> {
    pub fn new(
        source: &'a dyn IssueSource,
        extractor: &'a ReferenceExtractor,
        max_depth: usize,
    ) -> Self {
        Self {
            source,
            extractor,
            max_depth,
        }
    }

    pub fn crawl(&self, parent: IssueNumber) -> DependencyGraph {
        self.crawl_with_stats(parent).0
    }

    /// Depth-first crawl from `parent`, in the same order a recursive walk would take.
    pub fn crawl_with_stats(&self, parent: IssueNumber) -> (DependencyGraph, CrawlStats) {
        let mut graph = DependencyGraph::new();
        let mut stats = CrawlStats::default();
        let mut stack = vec![Step::Visit {
            number: parent,
            depth_remaining: self.max_depth,
        }];

        while let Some(step) = stack.pop() {
            match step {
                Step::Visit {
                    number,
                    depth_remaining,
                } => {
                    if depth_remaining == 0 {
                        continue;
                    }
                    let issue = match self.source.fetch(number) {
                        Ok(issue) => issue,
                        Err(e) => {
                            warn!("Error fetching issue {}: {}", number, e.reason);
                            stats.unavailable += 1;
                            continue;
                        }
                    };
                    stats.fetched += 1;
                    graph.add_node(issue.number, issue.title.as_str());

                    let deps = self.extractor.dependencies_in_issue(&issue);
                    debug!(
                        "Issue #{} depends on {:?} (depth remaining {})",
                        issue.number, deps, depth_remaining
                    );
                    // Reversed so the smallest dependency is linked and explored first.
                    stack.extend(deps.into_iter().rev().map(|to| Step::Link {
                        from: issue.number,
                        to,
                        depth_remaining,
                    }));
                }
                Step::Link {
                    from,
                    to,
                    depth_remaining,
                } => {
                    graph.add_edge(from, to);
                    stack.push(Step::Visit {
                        number: to,
                        depth_remaining: depth_remaining - 1,
                    });
                }
            }
        }

        info!(
            "Crawled from #{}: {} fetched, {} unavailable, {} nodes, {} edges",
            parent,
            stats.fetched,
            stats.unavailable,
            graph.declared_node_count(),
            graph.edge_count()
        );
        (graph, stats)
    }
}
