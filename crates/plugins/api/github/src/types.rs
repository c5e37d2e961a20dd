//! GitHub API response types.
//!
//! These types represent the raw JSON responses from GitHub API.
//! They are deserialized and then mapped to unified types.

use serde::{Deserialize, Serialize};

// =============================================================================
// User
// =============================================================================

/// GitHub user representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubUser {
    pub id: u64,
    pub login: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

// =============================================================================
// Pull Request
// =============================================================================

/// GitHub pull request representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubPullRequest {
    pub id: u64,
    pub number: u64,
    pub title: String,
    pub state: String,
    pub html_url: String,
    pub head: GitHubBranchRef,
}

/// GitHub branch reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubBranchRef {
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub sha: String,
}

// =============================================================================
// Comments
// =============================================================================

/// GitHub issue/PR comment (general comments, not code review).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubComment {
    pub id: u64,
    /// Absent for comments whose body was removed
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub user: Option<GitHubUser>,
    pub created_at: String,
}

// =============================================================================
// Deployments
// =============================================================================

/// GitHub deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubDeployment {
    pub id: u64,
    pub sha: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default)]
    pub creator: Option<GitHubUser>,
}

/// GitHub deployment status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubDeploymentStatus {
    pub id: u64,
    /// error, failure, inactive, in_progress, queued, pending, success
    pub state: String,
    #[serde(default)]
    pub environment_url: Option<String>,
    #[serde(default)]
    pub creator: Option<GitHubUser>,
}
