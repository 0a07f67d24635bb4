//! Retrieval metadata payloads and the drawable layout model.
//!
//! Algorithms stay generic over vertex metadata; the two timing-reading ones
//! (critical path, condensation) see it only through [`RetrievalTiming`] /
//! [`CondensedRetrieval`]. [`Retrieval`] is the concrete record a plan
//! builder deserializes per vertex, kept `Clone`-friendly for deterministic
//! tests.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Timing window algorithms get into vertex metadata.
///
/// Both arrays are per-partition: entry `j` describes the retrieval's
/// execution on partition `j`. Either array may be absent (sentinels,
/// never-executed retrievals).
pub trait RetrievalTiming {
    fn elapsed_times(&self) -> Option<&[f64]>;
    fn start_times(&self) -> Option<&[f64]>;
}

/// Metadata that can stand in for a group of condensed retrievals.
pub trait CondensedRetrieval: RetrievalTiming + Sized {
    /// Synthetic payload covering `members`, spanning `start..start + elapsed`.
    fn condensed(start: f64, elapsed: f64, members: Vec<String>) -> Self;

    /// Underlying vertex identities when this payload is synthetic.
    fn members(&self) -> Option<&[String]>;
}

/// Per-vertex payload of a retrieval plan.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retrieval {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_times: Option<Vec<f64>>,
    #[serde(default)]
    pub elapsed_times: Option<Vec<f64>>,
    /// Identities folded into this vertex by condensation.
    #[serde(default)]
    pub condensed_members: Option<Vec<String>>,
    /// Free-form plan attributes, passed through untouched.
    #[serde(default)]
    pub attributes: Value,
}

impl Retrieval {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_elapsed(name: impl Into<String>, elapsed_times: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            elapsed_times: Some(elapsed_times),
            ..Self::default()
        }
    }

    pub fn with_times(
        name: impl Into<String>,
        start_times: Vec<f64>,
        elapsed_times: Vec<f64>,
    ) -> Self {
        Self {
            name: name.into(),
            start_times: Some(start_times),
            elapsed_times: Some(elapsed_times),
            ..Self::default()
        }
    }
}

impl RetrievalTiming for Retrieval {
    fn elapsed_times(&self) -> Option<&[f64]> {
        self.elapsed_times.as_deref()
    }

    fn start_times(&self) -> Option<&[f64]> {
        self.start_times.as_deref()
    }
}

impl CondensedRetrieval for Retrieval {
    fn condensed(start: f64, elapsed: f64, members: Vec<String>) -> Self {
        Self {
            name: format!("{} retrievals", members.len()),
            start_times: Some(vec![start]),
            elapsed_times: Some(vec![elapsed]),
            condensed_members: Some(members),
            attributes: Value::Null,
        }
    }

    fn members(&self) -> Option<&[String]> {
        self.condensed_members.as_deref()
    }
}

/// Slowest partition of a retrieval, 0.0 when timing is absent.
pub fn vertex_weight<V: RetrievalTiming>(data: &V) -> f64 {
    data.elapsed_times()
        .map(|ts| ts.iter().copied().fold(0.0, f64::max))
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Drawable coordinates for one graph.
///
/// `vertices` covers every input vertex; `edge_bends` holds the interior
/// bend points of edges that span more than one layer, keyed by edge
/// identity, in begin-to-end order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub vertices: FxHashMap<String, Point>,
    pub edge_bends: FxHashMap<String, Vec<Point>>,
}
