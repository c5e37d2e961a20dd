//! Preview detection and resolution for previewlink.
//!
//! Given the comments of a pull request, this crate figures out which
//! hosting provider published a preview, extracts the preview URL and links
//! it to the ticket referenced by the issue tracker bot:
//!
//! - **Registry**: supported providers, their bot logins and URL patterns
//! - **Matcher**: URL extraction from a provider bot's comment
//! - **Detector**: provider inference from bot comments, then deployments
//! - **Resolver**: dispatch to comment matching or deployment lookup
//! - **Linker**: ticket lookup and attachment creation
//!
//! # Example
//!
//! ```ignore
//! use previewlink_resolver::{PreviewResolver, PreviewProvider};
//!
//! let resolver = PreviewResolver::new(&github);
//! let preview = resolver.resolve_preview(3, Some(PreviewProvider::Netlify)).await?;
//! ```

pub mod deployment;
pub mod detector;
pub mod linker;
pub mod matcher;
pub mod registry;
pub mod resolver;
pub mod ticket;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod mock;

pub use deployment::deployment_preview;
pub use detector::detect_provider;
pub use linker::{LinkOutcome, LinkRequest, PreviewLinker};
pub use matcher::match_comments;
pub use registry::{CommentSource, PreviewProvider, Strategy};
pub use resolver::PreviewResolver;
pub use ticket::find_ticket_reference;
