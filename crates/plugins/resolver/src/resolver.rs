//! Preview resolution: route a provider to its strategy.

use previewlink_core::{CodeHost, Comment, Lookup, PreviewRecord, Result};
use tracing::{debug, info};

use crate::deployment::deployment_preview;
use crate::detector::detect_provider;
use crate::matcher::match_comments;
use crate::registry::{PreviewProvider, Strategy};

/// Resolves pull request previews against a code host.
pub struct PreviewResolver<'a> {
    host: &'a dyn CodeHost,
}

impl<'a> PreviewResolver<'a> {
    pub fn new(host: &'a dyn CodeHost) -> Self {
        Self { host }
    }

    /// Preview of pull request `number` as published by `provider`.
    pub async fn resolve(
        &self,
        provider: PreviewProvider,
        number: u64,
        comments: &[Comment],
    ) -> Result<Lookup<PreviewRecord>> {
        debug!(provider = %provider, number = number, "Resolving preview");

        match provider.strategy() {
            Strategy::Comment(source) => Ok(match_comments(comments, &source)),
            Strategy::Deployment => {
                let head_sha = self.host.get_pull_request(number).await?.head_sha;
                deployment_preview(self.host, &head_sha).await
            }
        }
    }

    /// Preview of pull request `number`, detecting the provider unless one is given.
    pub async fn resolve_preview(
        &self,
        number: u64,
        provider: Option<PreviewProvider>,
    ) -> Result<Lookup<PreviewRecord>> {
        let comments = self.host.get_comments(number).await?;
        self.resolve_with_comments(number, provider, &comments).await
    }

    /// Same as [`resolve_preview`](Self::resolve_preview) over already fetched comments.
    pub async fn resolve_with_comments(
        &self,
        number: u64,
        provider: Option<PreviewProvider>,
        comments: &[Comment],
    ) -> Result<Lookup<PreviewRecord>> {
        let provider = match provider {
            Some(provider) => provider,
            None => match detect_provider(self.host, comments, number).await? {
                Lookup::Found(provider) => provider,
                Lookup::NotFound(reason) => return Ok(Lookup::NotFound(reason)),
            },
        };

        let lookup = self.resolve(provider, number, comments).await?;
        if let Lookup::Found(record) = &lookup {
            info!(provider = %provider, url = record.url(), "Resolved preview");
        }
        Ok(lookup)
    }
}
