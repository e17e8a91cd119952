//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `RescueError` as one
//! variant where they need to surface a core failure.

use thiserror::Error;

use crate::{AgentId, NodeId};

/// The top-level error type for `rescue-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum RescueError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("node {0} not found")]
    NodeNotFound(NodeId),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `rescue-core`.
pub type RescueResult<T> = Result<T, RescueError>;
