use crate::config::ForgeConfig;
use crate::domain::issue::{Issue, IssueNumber};
use crate::domain::ports::{FetchFailure, IssueSource, IssueUnavailable};
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::debug;

const GITHUB_JSON: &str = "application/vnd.github+json";

/// Issue source backed by the forge's REST issue API
pub struct GithubIssueSource {
    forge: ForgeConfig,
    account: String,
    repository: String,
    client: Client,
}

impl GithubIssueSource {
    pub fn new(
        forge: ForgeConfig,
        account: impl Into<String>,
        repository: impl Into<String>,
    ) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_JSON));
        let client = Client::builder()
            .user_agent(forge.user_agent.clone())
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            forge,
            account: account.into(),
            repository: repository.into(),
            client,
        })
    }

    pub fn issue_url(&self, number: IssueNumber) -> String {
        self.forge
            .issue_url(&self.account, &self.repository, number)
    }

    fn get(&self, number: IssueNumber) -> Result<Issue, FetchFailure> {
        let url = self.issue_url(number);
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchFailure::Status(status.as_u16()));
        }

        let payload = response
            .text()
            .map_err(|e| FetchFailure::Transport(e.to_string()))?;
        parse_issue(&payload)
    }
}

impl IssueSource for GithubIssueSource {
    fn fetch(&self, number: IssueNumber) -> Result<Issue, IssueUnavailable> {
        self.get(number)
            .map_err(|reason| IssueUnavailable { number, reason })
    }
}

/// Decode one issue payload.
pub fn parse_issue(payload: &str) -> Result<Issue, FetchFailure> {
    serde_json::from_str(payload).map_err(|e| FetchFailure::Decode(e.to_string()))
}
