//! Forge issue API adapter

mod source;

pub use source::{GithubIssueSource, parse_issue};
