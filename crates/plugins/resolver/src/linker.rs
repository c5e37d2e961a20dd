//! End-to-end run: find the ticket, resolve the preview, attach it.

use previewlink_core::{
    Attachment, AttachmentInput, CodeHost, IssueTracker, Lookup, NotFoundReason, PreviewRecord,
    Result,
};
use tracing::info;

use crate::registry::PreviewProvider;
use crate::resolver::PreviewResolver;
use crate::ticket::find_ticket_reference;

/// Pull request to link.
#[derive(Debug, Clone)]
pub struct LinkRequest {
    pub number: u64,
    /// Provider to use; detected when `None`
    pub provider: Option<PreviewProvider>,
    /// Pull request title, shown as the attachment subtitle
    pub title: Option<String>,
}

/// Result of a link run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOutcome {
    Linked {
        ticket: String,
        preview: PreviewRecord,
        attachment: Attachment,
    },
    /// Nothing to link; the run ends without touching the tracker.
    Skipped(NotFoundReason),
}

/// Links pull request previews to issue tracker tickets.
pub struct PreviewLinker<'a> {
    host: &'a dyn CodeHost,
    tracker: &'a dyn IssueTracker,
}

impl<'a> PreviewLinker<'a> {
    pub fn new(host: &'a dyn CodeHost, tracker: &'a dyn IssueTracker) -> Self {
        Self { host, tracker }
    }

    pub async fn link(&self, request: &LinkRequest) -> Result<LinkOutcome> {
        let comments = self.host.get_comments(request.number).await?;

        let ticket = match find_ticket_reference(&comments) {
            Lookup::Found(ticket) => ticket,
            Lookup::NotFound(reason) => return Ok(skip(reason)),
        };

        let preview = match PreviewResolver::new(self.host)
            .resolve_with_comments(request.number, request.provider, &comments)
            .await?
        {
            Lookup::Found(preview) => preview,
            Lookup::NotFound(reason) => return Ok(skip(reason)),
        };

        let issue = self.tracker.get_issue(&ticket).await?;

        let attachment = self
            .tracker
            .create_attachment(AttachmentInput {
                issue_id: issue.id,
                url: preview.url().to_string(),
                title: format!("Preview of PR #{}", request.number),
                subtitle: request.title.clone(),
                icon_url: preview.avatar().map(str::to_string),
            })
            .await?;

        info!(
            ticket = %ticket,
            tracker = self.tracker.provider_name(),
            attachment_id = %attachment.id,
            "Added preview attachment"
        );

        Ok(LinkOutcome::Linked {
            ticket,
            preview,
            attachment,
        })
    }
}

fn skip(reason: NotFoundReason) -> LinkOutcome {
    info!(reason = %reason, "Skipping");
    LinkOutcome::Skipped(reason)
}
