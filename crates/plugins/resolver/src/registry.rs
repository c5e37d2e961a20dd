//! Supported preview providers and how each one is resolved.
//!
//! Comment-driven providers carry the bot login that posts the preview
//! comment and a pattern whose single capture group is the preview URL.
//! The patterns insist on the text that labels the preview link, so a bare
//! mention of the hosting domain never matches.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use previewlink_core::Error;
use regex::Regex;

/// "Deploy Preview" row of the Netlify table, same line. When the URL is a
/// markdown link, the link target is taken, not the link text.
static NETLIFY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Deploy Preview[^\n]*?(?:\[[^\]\n]*\]\()?(https://[^\s)\]|]+\.netlify\.app)(?:[\s)\]|]|$)",
    )
    .expect("valid regex")
});

/// Link in the "Branch Preview URL" row; the plain "Preview URL" row is a
/// per-commit URL and must not be picked.
static CLOUDFLARE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"Branch Preview URL[\s\S]*?href=['"](https://[^'"\s]+\.pages\.dev)['"]"#)
        .expect("valid regex")
});

/// `[Preview](...)` cell of the Vercel table.
static VERCEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[Preview\]\((https://[^\s)]+\.vercel\.app)\)").expect("valid regex")
});

/// Hosting provider that produced a pull request preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreviewProvider {
    Vercel,
    Netlify,
    Cloudflare,
    GithubDeployments,
    Fly,
}

/// Bot login and URL pattern of a comment-driven provider.
#[derive(Debug, Clone, Copy)]
pub struct CommentSource {
    author: &'static str,
    pattern: &'static LazyLock<Regex>,
}

impl CommentSource {
    /// Login of the bot that posts the preview comment.
    pub fn author(&self) -> &'static str {
        self.author
    }

    /// Pattern with exactly one capture group holding the URL.
    pub fn pattern(&self) -> &'static Regex {
        self.pattern
    }
}

static NETLIFY: CommentSource = CommentSource {
    author: "netlify[bot]",
    pattern: &NETLIFY_PATTERN,
};

static CLOUDFLARE: CommentSource = CommentSource {
    author: "cloudflare-workers-and-pages[bot]",
    pattern: &CLOUDFLARE_PATTERN,
};

static VERCEL: CommentSource = CommentSource {
    author: "vercel[bot]",
    pattern: &VERCEL_PATTERN,
};

/// How a provider's preview URL is obtained.
#[derive(Debug, Clone, Copy)]
pub enum Strategy {
    /// Parse the provider bot's comment
    Comment(CommentSource),
    /// Ask the code host for the deployment of the head commit
    Deployment,
}

impl PreviewProvider {
    /// Every supported provider.
    pub const ALL: [PreviewProvider; 5] = [
        PreviewProvider::Vercel,
        PreviewProvider::Netlify,
        PreviewProvider::Cloudflare,
        PreviewProvider::GithubDeployments,
        PreviewProvider::Fly,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Vercel => "vercel",
            Self::Netlify => "netlify",
            Self::Cloudflare => "cloudflare",
            Self::GithubDeployments => "github-deployments",
            Self::Fly => "fly",
        }
    }

    /// Bot comment this provider posts, if it posts a parseable one.
    pub fn comment_source(self) -> Option<CommentSource> {
        match self {
            Self::Netlify => Some(NETLIFY),
            Self::Cloudflare => Some(CLOUDFLARE),
            Self::Vercel => Some(VERCEL),
            Self::GithubDeployments | Self::Fly => None,
        }
    }

    /// Resolution strategy.
    ///
    /// Vercel also reports through GitHub deployments, which carry the
    /// creator avatar, so its comment is only used for detection.
    pub fn strategy(self) -> Strategy {
        match self {
            Self::Netlify => Strategy::Comment(NETLIFY),
            Self::Cloudflare => Strategy::Comment(CLOUDFLARE),
            Self::Vercel | Self::GithubDeployments | Self::Fly => Strategy::Deployment,
        }
    }

    /// Provider whose bot posts comments as `login`.
    pub fn from_bot_login(login: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|provider| {
            provider
                .comment_source()
                .is_some_and(|source| source.author == login)
        })
    }
}

impl fmt::Display for PreviewProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|provider| provider.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                Error::UnsupportedProvider(format!(
                    "'{}' (expected one of: {})",
                    s,
                    Self::ALL.map(|p| p.as_str()).join(", ")
                ))
            })
    }
}
