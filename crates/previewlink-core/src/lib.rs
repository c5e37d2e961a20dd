//! Core traits, types, and error handling for previewlink.
//!
//! This crate provides the foundational abstractions used across all previewlink components.

pub mod config;
pub mod error;
pub mod provider;
pub mod types;

pub use config::Config;
pub use error::{Error, Result};
pub use provider::{CodeHost, IssueTracker};
pub use types::*;
