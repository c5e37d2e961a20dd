//! GitHub API client implementation.

use async_trait::async_trait;
use previewlink_core::{
    CodeHost, Comment, Deployment, DeploymentStatus, Error, PullRequest, Result, User,
};
use tracing::{debug, warn};

use crate::types::{
    GitHubComment, GitHubDeployment, GitHubDeploymentStatus, GitHubPullRequest, GitHubUser,
};
use crate::DEFAULT_GITHUB_URL;

/// Maximum page size accepted by the GitHub REST API.
const PAGE_SIZE: usize = 100;

/// GitHub API client.
pub struct GitHubClient {
    base_url: String,
    owner: String,
    repo: String,
    token: String,
    client: reqwest::Client,
}

impl GitHubClient {
    /// Create a new GitHub client.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self::with_base_url(DEFAULT_GITHUB_URL, owner, repo, token)
    }

    /// Create a new GitHub client with a custom base URL.
    pub fn with_base_url(
        base_url: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            owner: owner.into(),
            repo: repo.into(),
            token: token.into(),
            client: reqwest::Client::builder()
                .user_agent("previewlink")
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    fn repo_url(&self, endpoint: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.base_url, self.owner, self.repo, endpoint
        )
    }

    /// Make an authenticated GET request and decode the JSON body.
    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        debug!(url = url, "GitHub GET request");

        let response = self
            .client
            .get(url)
            .query(query)
            .header("Authorization", format!("Bearer {}", self.token))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let status_code = status.as_u16();
            let message = response.text().await.unwrap_or_default();
            warn!(
                status = status_code,
                message = message,
                "GitHub API error response"
            );
            return Err(Error::from_status(status_code, message));
        }

        response
            .json()
            .await
            .map_err(|e| Error::InvalidData(format!("Failed to parse response: {}", e)))
    }
}

// =============================================================================
// Mapping functions: GitHub types -> Unified types
// =============================================================================

fn map_user(user: &GitHubUser) -> User {
    User {
        login: user.login.clone(),
        avatar_url: user.avatar_url.clone(),
    }
}

fn map_comment(comment: GitHubComment) -> Comment {
    Comment {
        id: comment.id,
        author: comment.user.as_ref().map(map_user),
        body: comment.body.unwrap_or_default(),
        created_at: Some(comment.created_at),
    }
}

fn map_pull_request(pr: GitHubPullRequest) -> PullRequest {
    PullRequest {
        number: pr.number,
        title: pr.title,
        head_sha: pr.head.sha,
        html_url: pr.html_url,
    }
}

fn map_deployment(deployment: GitHubDeployment) -> Deployment {
    Deployment {
        id: deployment.id,
        sha: deployment.sha,
        environment: deployment.environment,
    }
}

fn map_deployment_status(status: GitHubDeploymentStatus) -> DeploymentStatus {
    DeploymentStatus {
        state: status.state,
        environment_url: status.environment_url,
        creator: status.creator.as_ref().map(map_user),
    }
}

#[async_trait]
impl CodeHost for GitHubClient {
    async fn get_comments(&self, number: u64) -> Result<Vec<Comment>> {
        let url = self.repo_url(&format!("issues/{}/comments", number));
        let mut comments = Vec::new();
        let mut page = 1u32;

        loop {
            let batch: Vec<GitHubComment> = self
                .get(
                    &url,
                    &[("per_page", PAGE_SIZE.to_string()), ("page", page.to_string())],
                )
                .await?;
            let done = batch.len() < PAGE_SIZE;
            comments.extend(batch.into_iter().map(map_comment));
            if done {
                break;
            }
            page += 1;
        }

        debug!(number = number, count = comments.len(), "Fetched comments");
        Ok(comments)
    }

    async fn get_pull_request(&self, number: u64) -> Result<PullRequest> {
        let url = self.repo_url(&format!("pulls/{}", number));
        let pr: GitHubPullRequest = self.get(&url, &[]).await?;
        debug!(number = number, head_sha = %pr.head.sha, "Fetched pull request");
        Ok(map_pull_request(pr))
    }

    async fn get_deployments(&self, sha: &str) -> Result<Vec<Deployment>> {
        let url = self.repo_url("deployments");
        let deployments: Vec<GitHubDeployment> =
            self.get(&url, &[("ref", sha.to_string())]).await?;
        debug!(sha = sha, count = deployments.len(), "Fetched deployments");
        Ok(deployments.into_iter().map(map_deployment).collect())
    }

    async fn get_deployment_statuses(&self, deployment_id: u64) -> Result<Vec<DeploymentStatus>> {
        let url = self.repo_url(&format!("deployments/{}/statuses", deployment_id));
        let statuses: Vec<GitHubDeploymentStatus> = self.get(&url, &[]).await?;
        Ok(statuses.into_iter().map(map_deployment_status).collect())
    }

    fn provider_name(&self) -> &'static str {
        "github"
    }
}

// =============================================================================
// Tests
// =============================================================================
