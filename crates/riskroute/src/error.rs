//! Error types for routing operations.
//!
//! Only structurally unusable input is a hard error. "No route found" and
//! "degenerate route geometry" are first-class search outcomes, reported
//! per policy through [`crate::orchestrate::PolicyOutcome`], never through
//! this enum. Bad edges encountered during graph load are dropped and
//! counted, not raised.

use thiserror::Error;

use crate::model::NodeId;

/// Result type alias for routing operations.
pub type RouteResult<T> = Result<T, RouteError>;

/// Error type for routing operations.
#[derive(Error, Debug)]
pub enum RouteError {
    /// Input data cannot form a usable graph (duplicate ids and the like).
    /// Edges with unknown endpoints or non-positive length do NOT raise
    /// this; they are dropped and counted in
    /// [`crate::model::LoadReport`].
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// A start or end node id does not exist in the graph. Surfaced to the
    /// caller, not retried.
    #[error("unknown endpoint node {0}")]
    UnknownEndpoint(NodeId),

    /// Nearest-node resolution was attempted against a graph with no nodes.
    #[error("graph contains no nodes")]
    EmptyGraph,

    /// Configuration parameter outside its documented range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
