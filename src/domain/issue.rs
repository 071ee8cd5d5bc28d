use serde::{Deserialize, Deserializer};
use std::fmt;

/// Issue number within a single repository
pub type IssueNumber = u64;

/// Issue record as returned by the forge's issue API.
///
/// Only the fields the crawler needs are decoded; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Issue {
    pub number: IssueNumber,
    pub title: String,
    /// Free text; the forge sends `null` for issues created without a description.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub body: String,
}

impl Issue {
    pub fn new(number: IssueNumber, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            number,
            title: title.into(),
            body: body.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {}", self.number, self.title)
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
