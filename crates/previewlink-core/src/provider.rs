//! Collaborator traits for the code host and the issue tracker.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{
    Attachment, AttachmentInput, Comment, Deployment, DeploymentStatus, PullRequest, TicketIssue,
};

/// Code hosting service holding the pull request, its comments and deployments.
#[async_trait]
pub trait CodeHost: Send + Sync {
    /// All comments on the pull request, in creation order.
    async fn get_comments(&self, number: u64) -> Result<Vec<Comment>>;

    /// Pull request by number.
    async fn get_pull_request(&self, number: u64) -> Result<PullRequest>;

    /// Deployments created for a commit SHA.
    async fn get_deployments(&self, sha: &str) -> Result<Vec<Deployment>>;

    /// Statuses of a deployment, newest first.
    async fn get_deployment_statuses(&self, deployment_id: u64) -> Result<Vec<DeploymentStatus>>;

    /// Get the provider name (e.g., "github")
    fn provider_name(&self) -> &'static str;
}

/// Issue tracker holding the ticket the preview gets attached to.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Ticket by its human-readable identifier (e.g. `PRE-7`).
    async fn get_issue(&self, identifier: &str) -> Result<TicketIssue>;

    /// Attach a link to a ticket.
    async fn create_attachment(&self, input: AttachmentInput) -> Result<Attachment>;

    /// Get the provider name (e.g., "linear")
    fn provider_name(&self) -> &'static str;
}
