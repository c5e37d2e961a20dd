//! GitHub code host implementation for previewlink.
//!
//! This crate provides the pull request, comment and deployment calls
//! previewlink needs from the GitHub REST API.

mod client;
mod types;

pub use client::GitHubClient;
pub use types::*;

/// Default GitHub API URL.
pub const DEFAULT_GITHUB_URL: &str = "https://api.github.com";
