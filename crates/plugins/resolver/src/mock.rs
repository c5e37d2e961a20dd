//! Mock collaborators for resolver tests.

use async_trait::async_trait;
use mockall::mock;
use previewlink_core::{
    Attachment, AttachmentInput, CodeHost, Comment, Deployment, DeploymentStatus, IssueTracker,
    PullRequest, Result, TicketIssue, User,
};

mock! {
    pub Host {}

    #[async_trait]
    impl CodeHost for Host {
        async fn get_comments(&self, number: u64) -> Result<Vec<Comment>>;
        async fn get_pull_request(&self, number: u64) -> Result<PullRequest>;
        async fn get_deployments(&self, sha: &str) -> Result<Vec<Deployment>>;
        async fn get_deployment_statuses(&self, deployment_id: u64) -> Result<Vec<DeploymentStatus>>;
        fn provider_name(&self) -> &'static str;
    }
}

mock! {
    pub Tracker {}

    #[async_trait]
    impl IssueTracker for Tracker {
        async fn get_issue(&self, identifier: &str) -> Result<TicketIssue>;
        async fn create_attachment(&self, input: AttachmentInput) -> Result<Attachment>;
        fn provider_name(&self) -> &'static str;
    }
}

pub const HEAD_SHA: &str = "d069c322e5abf65998019f7561867a0786e4793e";

pub fn pull_request(number: u64) -> PullRequest {
    PullRequest {
        number,
        title: "Add preview linking".to_string(),
        head_sha: HEAD_SHA.to_string(),
        html_url: format!("https://github.com/acme/site/pull/{}", number),
    }
}

pub fn deployment(id: u64) -> Deployment {
    Deployment {
        id,
        sha: HEAD_SHA.to_string(),
        environment: Some("Preview".to_string()),
    }
}

pub fn status(state: &str, environment_url: Option<&str>) -> DeploymentStatus {
    DeploymentStatus {
        state: state.to_string(),
        environment_url: environment_url.map(str::to_string),
        creator: Some(User {
            login: "deployer".to_string(),
            avatar_url: Some("https://avatars.example.com/deployer".to_string()),
        }),
    }
}

/// Host whose head commit has one successful deployment at `url`.
pub fn host_with_deployment(url: &'static str) -> MockHost {
    let mut host = MockHost::new();
    host.expect_get_pull_request()
        .returning(|number| Ok(pull_request(number)));
    host.expect_get_deployments()
        .returning(|_| Ok(vec![deployment(42)]));
    host.expect_get_deployment_statuses()
        .returning(move |_| Ok(vec![status("success", Some(url))]));
    host
}
