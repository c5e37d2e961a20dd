//! Ticket reference lookup in the issue tracker bot's comment.

use std::sync::LazyLock;

use previewlink_core::{Comment, Lookup, NotFoundReason};
use regex::Regex;
use tracing::debug;

/// Login of the Linear integration.
pub const LINEAR_BOT: &str = "linear[bot]";

/// `https://linear.app/<team>/issue/<IDENTIFIER>/<slug>`
static LINEAR_ISSUE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https://linear\.app/[^/\s"'<>)\]]+/issue/([^/\s"'<>)\]]+)"#)
        .expect("valid regex")
});

/// Identifier of the ticket linked to the pull request, e.g. `PRE-7`.
///
/// Read from the first comment of the Linear bot.
pub fn find_ticket_reference(comments: &[Comment]) -> Lookup<String> {
    let Some(comment) = comments.iter().find(|c| c.is_authored_by(LINEAR_BOT)) else {
        debug!("No Linear bot comment");
        return Lookup::NotFound(NotFoundReason::NoTicketComment);
    };

    match LINEAR_ISSUE_LINK
        .captures(&comment.body)
        .and_then(|captures| captures.get(1))
    {
        Some(identifier) => {
            debug!(identifier = identifier.as_str(), "Found ticket reference");
            Lookup::Found(identifier.as_str().to_string())
        }
        None => Lookup::NotFound(NotFoundReason::NoTicketLink),
    }
}
