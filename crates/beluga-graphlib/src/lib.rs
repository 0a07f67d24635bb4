#![forbid(unsafe_code)]

//! Graph container and generic graph machinery used by `beluga`.
//!
//! Identity-based directed multigraphs with opaque payloads, an iterative
//! observer-driven depth-first traversal, a post-order DAG fold, and the
//! disjoint-set/dense-index helpers connectivity clustering builds on.

pub mod dictionary;
pub mod error;
pub mod eval;
pub mod graph;
pub mod traverse;
pub mod union_find;

pub use dictionary::Dictionary;
pub use error::{GraphError, Result};
pub use eval::evaluate_dag;
pub use graph::{EdgeEntry, Graph, VertexEntry, VertexLabel};
pub use traverse::{DfsObserver, depth_first_search};
pub use union_find::UnionFind;
