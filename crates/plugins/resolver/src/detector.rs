//! Preview provider detection for pull requests with no configured provider.

use previewlink_core::{CodeHost, Comment, Lookup, NotFoundReason, Result};
use tracing::{debug, info};

use crate::deployment::deployment_preview;
use crate::registry::PreviewProvider;

/// Infer the preview provider of pull request `number`.
///
/// The first comment posted by a known provider bot decides. Without one,
/// a successful deployment of the head commit means `github-deployments`.
pub async fn detect_provider(
    host: &dyn CodeHost,
    comments: &[Comment],
    number: u64,
) -> Result<Lookup<PreviewProvider>> {
    let from_comments = comments
        .iter()
        .filter_map(Comment::author_login)
        .find_map(PreviewProvider::from_bot_login);

    if let Some(provider) = from_comments {
        info!(provider = %provider, "Auto-detected provider from bot comment");
        return Ok(Lookup::Found(provider));
    }

    let head_sha = host.get_pull_request(number).await?.head_sha;
    match deployment_preview(host, &head_sha).await? {
        Lookup::Found(_) => {
            info!(
                provider = %PreviewProvider::GithubDeployments,
                "Auto-detected provider from deployment API"
            );
            Ok(Lookup::Found(PreviewProvider::GithubDeployments))
        }
        Lookup::NotFound(reason) => {
            debug!(reason = %reason, "Deployment lookup found no preview");
            Ok(Lookup::NotFound(NotFoundReason::NoProviderDetected))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{bot_comment, CLOUDFLARE_BODY, LINEAR_BODY, NETLIFY_BODY, VERCEL_BODY};
    use crate::mock::{deployment, host_with_deployment, pull_request, MockHost};

    #[tokio::test]
    async fn test_detects_each_bot() {
        let cases = [
            ("netlify[bot]", NETLIFY_BODY, PreviewProvider::Netlify),
            (
                "cloudflare-workers-and-pages[bot]",
                CLOUDFLARE_BODY,
                PreviewProvider::Cloudflare,
            ),
            ("vercel[bot]", VERCEL_BODY, PreviewProvider::Vercel),
        ];

        for (login, body, expected) in cases {
            let mut host = MockHost::new();
            host.expect_get_pull_request().never();

            let comments = [
                bot_comment(1, "linear[bot]", LINEAR_BODY),
                bot_comment(2, login, body),
            ];

            let lookup = detect_provider(&host, &comments, 3).await.unwrap();
            assert_eq!(lookup, Lookup::Found(expected));
        }
    }

    #[tokio::test]
    async fn test_first_bot_comment_wins() {
        let host = MockHost::new();
        let comments = [
            bot_comment(1, "cloudflare-workers-and-pages[bot]", CLOUDFLARE_BODY),
            bot_comment(2, "netlify[bot]", NETLIFY_BODY),
        ];

        let lookup = detect_provider(&host, &comments, 3).await.unwrap();

        assert_eq!(lookup, Lookup::Found(PreviewProvider::Cloudflare));
    }

    #[tokio::test]
    async fn test_comment_wins_over_deployment() {
        // A successful deployment exists, but it must never be consulted.
        let mut host = MockHost::new();
        host.expect_get_pull_request()
            .never()
            .returning(|number| Ok(pull_request(number)));
        host.expect_get_deployments()
            .never()
            .returning(|_| Ok(vec![deployment(42)]));

        let comments = [bot_comment(1, "netlify[bot]", NETLIFY_BODY)];

        let lookup = detect_provider(&host, &comments, 3).await.unwrap();

        assert_eq!(lookup, Lookup::Found(PreviewProvider::Netlify));
    }

    #[tokio::test]
    async fn test_falls_back_to_deployments() {
        let host = host_with_deployment("https://site.fly.dev");
        let comments = [bot_comment(1, "linear[bot]", LINEAR_BODY)];

        let lookup = detect_provider(&host, &comments, 3).await.unwrap();

        assert_eq!(lookup, Lookup::Found(PreviewProvider::GithubDeployments));
    }

    #[tokio::test]
    async fn test_nothing_detected() {
        let mut host = MockHost::new();
        host.expect_get_pull_request()
            .returning(|number| Ok(pull_request(number)));
        host.expect_get_deployments().returning(|_| Ok(vec![]));

        let lookup = detect_provider(&host, &[], 3).await.unwrap();

        assert_eq!(
            lookup,
            Lookup::NotFound(NotFoundReason::NoProviderDetected)
        );
    }
}
