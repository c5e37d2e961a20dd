//! Linear GraphQL request and response types.

use serde::{Deserialize, Serialize};

// =============================================================================
// Envelope
// =============================================================================

/// GraphQL request body.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<V> {
    pub query: &'static str,
    pub variables: V,
}

/// GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// Single GraphQL error.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

// =============================================================================
// Issue
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct IssueVariables<'a> {
    pub id: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IssueData {
    #[serde(default)]
    pub issue: Option<LinearIssue>,
}

/// Linear issue.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearIssue {
    pub id: String,
    pub identifier: String,
    pub title: String,
    #[serde(default)]
    pub url: Option<String>,
}

// =============================================================================
// Attachment
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AttachmentVariables {
    pub input: AttachmentCreateInput,
}

/// Input of the `attachmentCreate` mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentCreateInput {
    pub issue_id: String,
    pub url: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentData {
    pub attachment_create: AttachmentPayload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttachmentPayload {
    pub success: bool,
    #[serde(default)]
    pub attachment: Option<LinearAttachment>,
}

/// Linear attachment.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearAttachment {
    pub id: String,
    pub url: String,
    pub title: String,
}
