//! Issue reference extraction.
//!
//! A reference is either a `#123` mention or an issue link whose path contains
//! `<account>/<repository>/issues/123`. Dependency references are the subset
//! found on lines that contain one of the configured keywords.

use crate::domain::issue::{Issue, IssueNumber};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;
use tracing::debug;

fn hash_reference_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#([0-9]+)").expect("hash reference regex"))
}

/// Characters that end a line, in addition to `\r\n` as a pair.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\u{0b}', '\u{0c}', '\u{1c}', '\u{1d}', '\u{1e}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split `text` into lines at every Unicode line boundary; `\r\n` counts once.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !LINE_BREAKS.contains(&c) {
            continue;
        }
        lines.push(&text[start..i]);
        start = i + c.len_utf8();
        if c == '\r' && chars.peek().is_some_and(|&(_, next)| next == '\n') {
            chars.next();
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Extracts issue numbers from issue text for one repository.
#[derive(Debug, Clone)]
pub struct ReferenceExtractor {
    // Unanchored: any text containing `<account>/<repository>/issues/<n>` counts,
    // whatever the scheme or host in front of it.
    link_regex: Regex,
    keywords: Vec<String>,
}

impl ReferenceExtractor {
    pub fn new<K, S>(account: &str, repository: &str, keywords: K) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pattern = format!(
            r"{}/{}/issues/([0-9]+)",
            regex::escape(account),
            regex::escape(repository)
        );
        Self {
            link_regex: Regex::new(&pattern).expect("escaped link pattern is always valid"),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Every issue number mentioned anywhere in `text`.
    pub fn all_references(&self, text: &str) -> BTreeSet<IssueNumber> {
        let mut numbers = BTreeSet::new();
        collect_numbers(hash_reference_regex(), text, &mut numbers);
        collect_numbers(&self.link_regex, text, &mut numbers);
        numbers
    }

    /// Issue numbers mentioned on lines containing a dependency keyword.
    pub fn dependency_references(&self, text: &str) -> BTreeSet<IssueNumber> {
        let mut numbers = BTreeSet::new();
        for line in split_lines(text) {
            if self.is_dependency_line(line) {
                numbers.extend(self.all_references(line));
            }
        }
        numbers
    }

    /// Plain substring test; an empty keyword matches every line.
    fn is_dependency_line(&self, line: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| line.contains(keyword.as_str()))
    }

    pub fn references_in_issue(&self, issue: &Issue) -> BTreeSet<IssueNumber> {
        self.all_references(&issue.body)
    }

    pub fn dependencies_in_issue(&self, issue: &Issue) -> BTreeSet<IssueNumber> {
        self.dependency_references(&issue.body)
    }

    /// Union of [`Self::references_in_issue`] over `issues`.
    pub fn references_in_issues(&self, issues: &[Issue]) -> BTreeSet<IssueNumber> {
        issues
            .iter()
            .flat_map(|issue| self.references_in_issue(issue))
            .collect()
    }

    /// Union of [`Self::dependencies_in_issue`] over `issues`.
    pub fn dependencies_in_issues(&self, issues: &[Issue]) -> BTreeSet<IssueNumber> {
        issues
            .iter()
            .flat_map(|issue| self.dependencies_in_issue(issue))
            .collect()
    }
}

fn collect_numbers(re: &Regex, text: &str, out: &mut BTreeSet<IssueNumber>) {
    for cap in re.captures_iter(text) {
        let Some(digits) = cap.get(1) else { continue };
        match digits.as_str().parse::<IssueNumber>() {
            Ok(n) => {
                out.insert(n);
            }
            Err(e) => debug!("Skipping reference {:?}: {}", digits.as_str(), e),
        }
    }
}
