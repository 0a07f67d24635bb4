//! Four-phase hierarchical layout over an acyclic graph.
//!
//! Layer assignment bounds layer width, normalization rewrites long edges
//! into chains of layer-adjacent short edges, crossing minimization runs
//! bounded barycenter sweeps, and coordinate assignment spreads each layer
//! across a drawing width set by the widest layer. The pipeline assumes an
//! acyclic input; cycle removal is the plan builder's problem.

pub mod layering;
pub mod normalize;
pub mod ordering;
pub mod position;

use crate::error::Result;
use crate::model::Layout;
use beluga_graphlib::Graph;

pub use layering::{LayerAssignment, assign_layers};
pub use normalize::{LongEdge, NormalizedLayers, normalize};
pub use ordering::minimize_crossings;
pub use position::assign_coordinates;

/// Tunables for [`layout`].
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    /// Soft cap on vertices per layer.
    pub recommended_layer_max_width: usize,
    /// A layer also closes once the layer above it would exceed
    /// `max_width_multiplier * recommended_layer_max_width` dangling edges.
    pub max_width_multiplier: f64,
    /// Upper bound on crossing-minimization passes; each pass is one
    /// top-to-bottom and one bottom-to-top sweep.
    pub max_ordering_passes: usize,
    /// Horizontal slot width per vertex of the widest layer.
    pub min_vertex_width: f64,
    /// Vertical distance between consecutive layers.
    pub layer_height: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            recommended_layer_max_width: 10,
            max_width_multiplier: 4.0,
            max_ordering_passes: 8,
            min_vertex_width: 120.0,
            layer_height: 100.0,
        }
    }
}

/// Computes drawable coordinates for every vertex of `graph`.
///
/// Every original vertex gets a point; edges spanning more than one layer
/// additionally get ordered bend points where their chain crosses the
/// intermediate layers. Fails with [`crate::Error::CyclicInput`] when the
/// input is not acyclic.
pub fn layout<V, E>(graph: &Graph<V, E>, options: &LayoutOptions) -> Result<Layout> {
    let layers = assign_layers(graph, options)?;
    tracing::debug!(layers = layers.layers.len(), "assigned layers");

    let mut normalized = normalize(graph, layers);
    tracing::debug!(
        synthetic = normalized.synthetic.len(),
        long_edges = normalized.long_edges.len(),
        "normalized long edges"
    );

    let passes = minimize_crossings(&mut normalized, options.max_ordering_passes);
    tracing::debug!(passes, "minimized crossings");

    Ok(assign_coordinates(&normalized, options))
}
