//! Graph-subsystem error type.
//!
//! Every variant is an *invalid scenario*: it is raised by
//! [`FloodGraphBuilder::build`][crate::FloodGraphBuilder::build] before any
//! simulation turn can run.

use thiserror::Error;

use rescue_core::NodeId;

/// Errors produced by `rescue-graph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("edge {from} -> {to} references a node that does not exist")]
    UnknownNode { from: NodeId, to: NodeId },

    #[error("edge {from} -> {to} has invalid base cost {cost} (must be finite and positive)")]
    InvalidCost { from: NodeId, to: NodeId, cost: f64 },

    #[error("edge {from} -> {to} declared twice with conflicting attributes")]
    ConflictingEdge { from: NodeId, to: NodeId },

    #[error("node label {0:?} used more than once")]
    DuplicateLabel(String),
}

pub type GraphResult<T> = Result<T, GraphError>;
