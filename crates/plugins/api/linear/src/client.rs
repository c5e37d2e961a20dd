//! Linear API client implementation.

use async_trait::async_trait;
use previewlink_core::{Attachment, AttachmentInput, Error, IssueTracker, Result, TicketIssue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::types::{
    AttachmentCreateInput, AttachmentData, AttachmentVariables, GraphQlRequest, GraphQlResponse,
    IssueData, IssueVariables,
};
use crate::DEFAULT_LINEAR_URL;

const ISSUE_QUERY: &str = "query Issue($id: String!) { \
    issue(id: $id) { id identifier title url } }";

const ATTACHMENT_CREATE_MUTATION: &str = "mutation AttachmentCreate($input: AttachmentCreateInput!) { \
    attachmentCreate(input: $input) { success attachment { id url title } } }";

/// Linear API client.
pub struct LinearClient {
    endpoint: String,
    api_key: String,
    client: reqwest::Client,
}

impl LinearClient {
    /// Create a new Linear client.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_LINEAR_URL, api_key)
    }

    /// Create a new Linear client with a custom GraphQL endpoint (for testing).
    pub fn with_base_url(endpoint: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: reqwest::Client::builder()
                .user_agent("previewlink")
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Execute a GraphQL operation and return its `data`.
    async fn execute<V: Serialize, T: DeserializeOwned>(
        &self,
        query: &'static str,
        variables: V,
    ) -> Result<T> {
        debug!(endpoint = %self.endpoint, "Linear GraphQL request");

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&GraphQlRequest { query, variables })
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
                "Linear API error response"
            );
            return Err(Error::from_status(status_code, message));
        }

        let body: GraphQlResponse<T> = response
            .json()
            .await
            .map_err(|e| Error::InvalidData(format!("Failed to parse response: {}", e)))?;

        if !body.errors.is_empty() {
            let message = body
                .errors
                .iter()
                .map(|e| e.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(message = message, "Linear GraphQL errors");
            return Err(Error::Api {
                status: status.as_u16(),
                message,
            });
        }

        body.data
            .ok_or_else(|| Error::InvalidData("GraphQL response without data".to_string()))
    }
}

#[async_trait]
impl IssueTracker for LinearClient {
    async fn get_issue(&self, identifier: &str) -> Result<TicketIssue> {
        let data: IssueData = self
            .execute(ISSUE_QUERY, IssueVariables { id: identifier })
            .await?;

        let issue = data
            .issue
            .ok_or_else(|| Error::NotFound(format!("Linear issue {}", identifier)))?;

        debug!(identifier = identifier, id = %issue.id, "Resolved Linear issue");
        Ok(TicketIssue {
            id: issue.id,
            identifier: issue.identifier,
            title: issue.title,
            url: issue.url,
        })
    }

    async fn create_attachment(&self, input: AttachmentInput) -> Result<Attachment> {
        let variables = AttachmentVariables {
            input: AttachmentCreateInput {
                issue_id: input.issue_id,
                url: input.url,
                title: input.title,
                subtitle: input.subtitle,
                icon_url: input.icon_url,
            },
        };

        let data: AttachmentData = self.execute(ATTACHMENT_CREATE_MUTATION, variables).await?;
        let payload = data.attachment_create;

        let attachment = match (payload.success, payload.attachment) {
            (true, Some(attachment)) => attachment,
            _ => {
                return Err(Error::InvalidData(
                    "attachmentCreate did not succeed".to_string(),
                ))
            }
        };

        info!(id = %attachment.id, url = %attachment.url, "Created Linear attachment");
        Ok(Attachment {
            id: attachment.id,
            url: attachment.url,
            title: attachment.title,
        })
    }

    fn provider_name(&self) -> &'static str {
        "linear"
    }
}

// =============================================================================
// Tests
// =============================================================================
