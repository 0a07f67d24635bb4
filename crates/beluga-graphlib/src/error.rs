//! Invariant-violation errors raised by the graph container.
//!
//! Every variant is a broken precondition on the caller's side (identity
//! reuse, dangling endpoint, unknown lookup). None of these are retryable:
//! the same input fails identically on every attempt.

use crate::graph::VertexLabel;

pub type Result<T> = std::result::Result<T, GraphError>;

#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("vertex identity already present in graph: {id}")]
    DuplicateVertex { id: String },

    #[error("edge identity already present in graph: {id}")]
    DuplicateEdge { id: String },

    #[error("unknown vertex identity: {id}")]
    UnknownVertex { id: String },

    #[error("edge {edge} references vertex {vertex} which is not in the graph")]
    EndpointMissing { edge: String, vertex: String },

    #[error("no vertex holds the {0} label")]
    MissingLabel(VertexLabel),
}
