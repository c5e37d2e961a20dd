//! Preview URL extraction from bot comments.

use previewlink_core::{Comment, Lookup, NotFoundReason, PreviewRecord};
use tracing::debug;

use crate::registry::CommentSource;

/// Extract the preview URL from the first comment written by the source's bot.
///
/// Only that first comment is considered, even when the bot commented more
/// than once. Returns [`NotFoundReason::NoAuthorComment`] when the bot never
/// commented and [`NotFoundReason::UrlNotInComment`] when its comment holds
/// no URL of the expected shape.
pub fn match_comments(comments: &[Comment], source: &CommentSource) -> Lookup<PreviewRecord> {
    let author = source.author();

    let Some(comment) = comments.iter().find(|c| c.is_authored_by(author)) else {
        debug!(author = author, "No comment from author");
        return Lookup::NotFound(NotFoundReason::NoAuthorComment {
            author: author.to_string(),
        });
    };

    let record = source
        .pattern()
        .captures(&comment.body)
        .and_then(|captures| captures.get(1))
        .and_then(|url| {
            PreviewRecord::new(url.as_str(), comment.author_avatar().map(str::to_string))
        });

    match record {
        Some(record) => {
            debug!(author = author, url = record.url(), "Found preview link");
            Lookup::Found(record)
        }
        None => {
            debug!(author = author, comment_id = comment.id, "No preview link in comment");
            Lookup::NotFound(NotFoundReason::UrlNotInComment {
                author: author.to_string(),
            })
        }
    }
}
