//! Coordinate assignment.
//!
//! Every layer is spread evenly over a drawing width sized by the widest
//! layer, each vertex centered in its slot. Synthetic vertices get
//! coordinates like real ones but only surface through the bend points of
//! the long edges they belong to.

use super::LayoutOptions;
use super::normalize::NormalizedLayers;
use crate::model::{Layout, Point};
use rustc_hash::FxHashMap;

pub fn assign_coordinates(normalized: &NormalizedLayers, options: &LayoutOptions) -> Layout {
    let widest = normalized.layers.iter().map(Vec::len).max().unwrap_or(0);
    let width = widest as f64 * options.min_vertex_width;

    let mut all: FxHashMap<&str, Point> = FxHashMap::default();
    for (i, layer) in normalized.layers.iter().enumerate() {
        let slot = width / layer.len() as f64;
        for (j, id) in layer.iter().enumerate() {
            all.insert(
                id.as_str(),
                Point {
                    x: slot * (j as f64 + 0.5),
                    y: i as f64 * options.layer_height,
                },
            );
        }
    }

    let mut vertices = FxHashMap::default();
    for layer in &normalized.layers {
        for id in layer {
            if !normalized.synthetic.contains(id) {
                if let Some(p) = all.get(id.as_str()) {
                    vertices.insert(id.clone(), *p);
                }
            }
        }
    }

    let mut edge_bends = FxHashMap::default();
    for long_edge in &normalized.long_edges {
        let bends: Vec<Point> = long_edge
            .chain
            .iter()
            .filter_map(|s| all.get(s.as_str()).copied())
            .collect();
        edge_bends.insert(long_edge.edge.clone(), bends);
    }

    Layout {
        vertices,
        edge_bends,
    }
}
