#![forbid(unsafe_code)]

//! Dependency-graph analytics and layered layout for distributed retrieval
//! plans.
//!
//! A query execution plan arrives as a directed acyclic multigraph whose
//! vertices are retrievals and whose two labeled sentinels mark the global
//! entry and exit. Everything here is a pure transformation of such a
//! graph: selection filtering with sentinel re-augmentation, critical-path
//! scoring, connectivity clustering, fast-vertex condensation, and a
//! four-phase hierarchical layout. Inputs are never mutated; derived graphs
//! and maps come back as new values.

pub use beluga_graphlib as graphlib;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cluster;
pub mod condense;
pub mod critical_path;
pub mod error;
pub mod filter;
pub mod layout;
pub mod model;

pub use cluster::cluster_components;
pub use condense::{CondenseOptions, condense};
pub use critical_path::{CriticalPath, critical_path};
pub use error::{Error, Result};
pub use filter::{FilteredPair, filter_and_invert};
pub use layout::{LayoutOptions, layout};
pub use model::{
    CondensedRetrieval, Layout, Point, Retrieval, RetrievalTiming, vertex_weight,
};
