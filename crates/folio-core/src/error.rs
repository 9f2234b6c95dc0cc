//! Typed errors for content lookups

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("unknown project: {0}")]
    UnknownProject(String),

    #[error("unknown blog post: {0}")]
    UnknownPost(String),
}
