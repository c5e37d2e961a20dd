//! Linear issue tracker implementation for previewlink.
//!
//! This crate talks to the Linear GraphQL API to look up tickets and
//! attach preview links to them.

mod client;
mod types;

pub use client::LinearClient;
pub use types::*;

/// Default Linear GraphQL endpoint.
pub const DEFAULT_LINEAR_URL: &str = "https://api.linear.app/graphql";
