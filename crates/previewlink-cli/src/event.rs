//! GitHub `issue_comment` event payload.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// The parts of the triggering event previewlink reads.
#[derive(Debug, Clone, Deserialize)]
pub struct CommentEvent {
    #[serde(default)]
    pub issue: Option<EventIssue>,
}

/// Issue (or pull request) the comment was posted on.
#[derive(Debug, Clone, Deserialize)]
pub struct EventIssue {
    pub number: u64,
    #[serde(default)]
    pub title: Option<String>,
    /// Present only when the issue is a pull request
    #[serde(default)]
    pub pull_request: Option<serde_json::Value>,
}

impl EventIssue {
    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

impl CommentEvent {
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event payload {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse event payload {}", path.display()))
    }
}
