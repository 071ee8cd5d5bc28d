//! DependencyCrawler integration tests using the in-memory issue source.

mod common;

use depender_render::config::CrawlConfig;
use depender_render::domain::crawler::{CrawlStats, DependencyCrawler};
use depender_render::domain::issue::IssueNumber;
use depender_render::domain::ports::IssueSource;
use depender_render::domain::reference::ReferenceExtractor;

use common::mock::MockIssueSource;

fn extractor() -> ReferenceExtractor {
    CrawlConfig::new("acme", "widgets").extractor()
}

#[test]
fn test_depth_one_fetches_only_parent() {
    let source = MockIssueSource::new()
        .with_issue(1, "Parent", "depends on #2\nrequires acme/widgets/issues/3\nsee #4")
        .with_issue(2, "Two", "")
        .with_issue(3, "Three", "");
    let ex = extractor();
    let graph = DependencyCrawler::new(&source, &ex, 1).crawl(1);

    assert_eq!(source.fetch_log(), vec![1]);
    assert_eq!(graph.declared_node_count(), 1);
    assert_eq!(graph.title(1), Some("Parent"));
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(1, 2), (1, 3)]);
    assert_eq!(graph.title(2), None);
    assert_eq!(graph.title(3), None);
    assert!(!graph.contains(4), "plain mentions are not edges");
}

#[test]
fn test_missing_parent_gives_empty_graph() {
    let source = MockIssueSource::new();
    let ex = extractor();
    let (graph, stats) = DependencyCrawler::new(&source, &ex, 100).crawl_with_stats(7);

    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(source.fetch_log(), vec![7]);
    assert_eq!(
        stats,
        CrawlStats {
            fetched: 0,
            unavailable: 1
        }
    );
}

#[test]
fn test_zero_depth_fetches_nothing() {
    let source = MockIssueSource::new().with_issue(1, "Parent", "");
    let ex = extractor();
    let graph = DependencyCrawler::new(&source, &ex, 0).crawl(1);

    assert!(graph.is_empty());
    assert!(source.fetch_log().is_empty());
}

#[test]
fn test_two_cycle_terminates_at_depth_cap() {
    let source = MockIssueSource::new()
        .with_issue(1, "A", "depends on #2")
        .with_issue(2, "B", "depends on #1");
    let ex = extractor();
    let depth = 5;
    let graph = DependencyCrawler::new(&source, &ex, depth).crawl(1);

    assert_eq!(source.fetch_log(), vec![1, 2, 1, 2, 1]);
    assert!(source.fetch_count(1) <= depth);
    assert!(source.fetch_count(2) <= depth);
    assert_eq!(graph.node_count(), 2);
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(1, 2), (2, 1)]);
}

#[test]
fn test_self_reference_terminates() {
    let source = MockIssueSource::new().with_issue(1, "Loop", "requires #1");
    let ex = extractor();
    let graph = DependencyCrawler::new(&source, &ex, 100).crawl(1);

    assert_eq!(source.fetch_count(1), 100);
    assert_eq!(graph.node_count(), 1);
    assert!(graph.has_edge(1, 1));
}

#[test]
fn test_depth_first_order_matches_recursive_walk() {
    let source = MockIssueSource::new()
        .with_issue(1, "Root", "depends on #3 and #2")
        .with_issue(2, "Two", "requires #4")
        .with_issue(3, "Three", "")
        .with_issue(4, "Four", "");
    let ex = extractor();
    let graph = DependencyCrawler::new(&source, &ex, 100).crawl(1);

    assert_eq!(source.fetch_log(), vec![1, 2, 4, 3]);
    assert_eq!(
        graph.edges().collect::<Vec<_>>(),
        vec![(1, 2), (2, 4), (1, 3)]
    );
    let declared: Vec<IssueNumber> = graph.declared_nodes().map(|n| n.number).collect();
    assert_eq!(declared, vec![1, 2, 4, 3]);
}

#[test]
fn test_diamond_refetches_shared_dependency() {
    let source = MockIssueSource::new()
        .with_issue(1, "Top", "depends on #2\ndepends on #3")
        .with_issue(2, "Left", "requires #4")
        .with_issue(3, "Right", "requires #4")
        .with_issue(4, "Bottom", "");
    let ex = extractor();
    let graph = DependencyCrawler::new(&source, &ex, 100).crawl(1);

    assert_eq!(source.fetch_count(4), 2);
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.declared_node_count(), 4);
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.dependencies_of(1), vec![2, 3]);
}

#[test]
fn test_unavailable_dependency_leaves_dangling_edge() {
    let source = MockIssueSource::new()
        .with_issue(1, "Parent", "requires #2 and #3")
        .with_issue(3, "Three", "");
    let ex = extractor();
    let (graph, stats) = DependencyCrawler::new(&source, &ex, 100).crawl_with_stats(1);

    assert_eq!(stats.fetched, 2);
    assert_eq!(stats.unavailable, 1);
    assert!(graph.has_edge(1, 2));
    assert!(graph.has_edge(1, 3));
    assert_eq!(graph.title(2), None);
    assert_eq!(graph.title(3), Some("Three"));
}

#[test]
fn test_chain_depth_limits_longest_path() {
    let source = MockIssueSource::new()
        .with_issue(1, "One", "depends on #2")
        .with_issue(2, "Two", "depends on #3")
        .with_issue(3, "Three", "depends on #4")
        .with_issue(4, "Four", "");
    let ex = extractor();

    let graph = DependencyCrawler::new(&source, &ex, 3).crawl(1);
    assert_eq!(graph.declared_node_count(), 3);
    assert!(graph.has_edge(3, 4));
    assert_eq!(graph.title(4), None);
}

#[test]
fn test_custom_keywords() {
    let source = MockIssueSource::new()
        .with_issue(1, "Parent", "blocked by #2\nrequires #3")
        .with_issue(2, "Two", "")
        .with_issue(3, "Three", "");
    let ex = CrawlConfig::new("acme", "widgets")
        .with_dependency_keywords(["blocked by"])
        .extractor();
    let graph = DependencyCrawler::new(&source, &ex, 100).crawl(1);

    assert_eq!(source.fetch_log(), vec![1, 2]);
    assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(1, 2)]);
}

#[test]
fn test_fetch_many_skips_unavailable() {
    let source = MockIssueSource::new()
        .with_issue(1, "One", "")
        .with_issue(3, "Three", "");
    let issues = source.fetch_many(&[1, 2, 3]);

    let numbers: Vec<IssueNumber> = issues.iter().map(|i| i.number).collect();
    assert_eq!(numbers, vec![1, 3]);
    assert_eq!(source.fetch_log(), vec![1, 2, 3]);
}
