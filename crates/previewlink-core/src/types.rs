//! Common types shared by the code host, the issue tracker and the resolver.

use std::fmt;

use serde::{Deserialize, Serialize};

// =============================================================================
// Code host
// =============================================================================

/// Account that authored a comment or a deployment status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub login: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Comment on a pull request, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(default)]
    pub author: Option<User>,
    pub body: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Comment {
    /// Login of the comment author, if the account still exists.
    pub fn author_login(&self) -> Option<&str> {
        self.author.as_ref().map(|u| u.login.as_str())
    }

    /// Avatar of the comment author.
    pub fn author_avatar(&self) -> Option<&str> {
        self.author.as_ref().and_then(|u| u.avatar_url.as_deref())
    }

    /// Whether the comment was written by `login`.
    pub fn is_authored_by(&self, login: &str) -> bool {
        self.author_login() == Some(login)
    }
}

/// Pull request summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub head_sha: String,
    pub html_url: String,
}

/// Deployment created for a commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: u64,
    pub sha: String,
    #[serde(default)]
    pub environment: Option<String>,
}

/// Status reported for a deployment. Statuses are listed newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentStatus {
    pub state: String,
    #[serde(default)]
    pub environment_url: Option<String>,
    #[serde(default)]
    pub creator: Option<User>,
}

// =============================================================================
// Preview
// =============================================================================

/// Resolved preview of a pull request.
///
/// The url is never blank; use [`PreviewRecord::new`] to build one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreviewRecord {
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl PreviewRecord {
    /// Build a record, returning `None` when the url is blank.
    pub fn new(url: impl Into<String>, avatar: Option<String>) -> Option<Self> {
        let url = url.into();
        if url.trim().is_empty() {
            return None;
        }
        Some(Self { url, avatar })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }
}

/// Why a lookup came back empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundReason {
    /// No comment from the expected bot
    NoAuthorComment { author: String },
    /// The bot commented but no URL matched the expected shape
    UrlNotInComment { author: String },
    /// No deployment exists for the commit
    NoDeployment,
    /// More than one deployment exists for the commit
    AmbiguousDeployment { count: usize },
    /// The deployment has no status yet
    NoDeploymentStatus,
    /// The newest deployment status is not `success`
    DeploymentNotSuccessful { state: String },
    /// The successful status carries no environment URL
    NoEnvironmentUrl,
    /// Neither a bot comment nor a deployment identified a provider
    NoProviderDetected,
    /// No comment from the issue tracker bot
    NoTicketComment,
    /// The issue tracker bot commented without a ticket link
    NoTicketLink,
    /// The triggering comment is on a plain issue
    NotAPullRequest,
}

impl fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoAuthorComment { author } => write!(f, "no comment from {}", author),
            Self::UrlNotInComment { author } => {
                write!(f, "no preview link found in the comment from {}", author)
            }
            Self::NoDeployment => write!(f, "no deployment found for the ref"),
            Self::AmbiguousDeployment { count } => {
                write!(f, "{} deployments found for the same ref", count)
            }
            Self::NoDeploymentStatus => write!(f, "no deployment status found"),
            Self::DeploymentNotSuccessful { state } => {
                write!(f, "deployment status is '{}', not 'success'", state)
            }
            Self::NoEnvironmentUrl => write!(f, "no environment URL on the deployment status"),
            Self::NoProviderDetected => write!(f, "no preview provider detected"),
            Self::NoTicketComment => write!(f, "no issue tracker comment on the pull request"),
            Self::NoTicketLink => write!(f, "no ticket link in the issue tracker comment"),
            Self::NotAPullRequest => write!(f, "comment is not on a pull request"),
        }
    }
}

/// Outcome of a lookup that may legitimately find nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup<T> {
    Found(T),
    NotFound(NotFoundReason),
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Discard the reason.
    pub fn found(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound(_) => None,
        }
    }

    pub fn reason(&self) -> Option<&NotFoundReason> {
        match self {
            Lookup::Found(_) => None,
            Lookup::NotFound(reason) => Some(reason),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Lookup<U> {
        match self {
            Lookup::Found(value) => Lookup::Found(f(value)),
            Lookup::NotFound(reason) => Lookup::NotFound(reason),
        }
    }
}

// =============================================================================
// Issue tracker
// =============================================================================

/// Ticket in the issue tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketIssue {
    /// Internal id used by mutations
    pub id: String,
    /// Human-readable key, e.g. `PRE-7`
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Link to attach to a ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttachmentInput {
    pub issue_id: String,
    pub url: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub icon_url: Option<String>,
}

/// Attachment as stored by the issue tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    pub id: String,
    pub url: String,
    pub title: String,
}
