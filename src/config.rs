//! Crawl and forge configuration.
//!
//! The CLI only sets the repository coordinates and the API base; depth cap and
//! dependency keywords keep their defaults there but can be changed by library callers.

use crate::domain::reference::ReferenceExtractor;

pub const DEFAULT_MAX_DEPTH: usize = 100;
pub const DEFAULT_DEPENDENCY_KEYWORDS: [&str; 2] = ["depends on", "requires"];
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// What to crawl and how far
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    pub account: String,
    pub repository: String,
    pub max_depth: usize,
    pub dependency_keywords: Vec<String>,
}

impl CrawlConfig {
    pub fn new(account: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            repository: repository.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            dependency_keywords: DEFAULT_DEPENDENCY_KEYWORDS
                .iter()
                .map(|k| k.to_string())
                .collect(),
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_dependency_keywords<K, S>(mut self, keywords: K) -> Self
    where
        K: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependency_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn extractor(&self) -> ReferenceExtractor {
        ReferenceExtractor::new(
            &self.account,
            &self.repository,
            self.dependency_keywords.iter().cloned(),
        )
    }
}

/// Where the issue API lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    pub api_base: String,
    pub user_agent: String,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ForgeConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// `{api_base}/repos/{account}/{repository}/issues/{number}`
    pub fn issue_url(&self, account: &str, repository: &str, number: u64) -> String {
        format!(
            "{}/repos/{}/{}/issues/{}",
            self.api_base.trim_end_matches('/'),
            account,
            repository,
            number
        )
    }
}
