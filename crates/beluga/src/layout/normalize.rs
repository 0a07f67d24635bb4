//! Long-edge normalization.
//!
//! Crossing minimization and coordinate assignment only reason about
//! neighbors in adjacent layers, so every edge spanning more than one layer
//! is rewritten into a chain of layer-adjacent short edges through synthetic
//! vertices. The original edge identity survives in a [`LongEdge`] so the
//! chain's coordinates can be folded back into bend points.

use super::layering::LayerAssignment;
use beluga_graphlib::Graph;
use rustc_hash::{FxHashMap, FxHashSet};

/// One normalized multi-layer edge: the original identity plus its
/// synthetic chain, ordered from the begin side to the end side.
#[derive(Debug, Clone)]
pub struct LongEdge {
    pub edge: String,
    pub chain: Vec<String>,
}

/// Layered structure after normalization. `succ`/`pred` hold only
/// layer-adjacent links; synthetic vertices appear in `layers` and
/// `layer_of` like real ones.
#[derive(Debug, Clone, Default)]
pub struct NormalizedLayers {
    pub layers: Vec<Vec<String>>,
    pub layer_of: FxHashMap<String, usize>,
    pub succ: FxHashMap<String, Vec<String>>,
    pub pred: FxHashMap<String, Vec<String>>,
    pub long_edges: Vec<LongEdge>,
    pub synthetic: FxHashSet<String>,
}

fn push_link(
    succ: &mut FxHashMap<String, Vec<String>>,
    pred: &mut FxHashMap<String, Vec<String>>,
    a: &str,
    b: &str,
) {
    succ.entry(a.to_string()).or_default().push(b.to_string());
    pred.entry(b.to_string()).or_default().push(a.to_string());
}

/// Probes `_d`, `_d1`, `_d2`, ... for an identity free in both the input
/// graph and the synthetics created so far.
fn fresh_synthetic<V, E>(
    graph: &Graph<V, E>,
    synthetic: &FxHashSet<String>,
    counter: &mut usize,
) -> String {
    loop {
        let id = if *counter == 0 {
            "_d".to_string()
        } else {
            format!("_d{counter}")
        };
        *counter += 1;
        if !graph.contains_vertex(&id) && !synthetic.contains(&id) {
            return id;
        }
    }
}

/// Rewrites every multi-layer edge of `graph` into a short-edge chain.
pub fn normalize<V, E>(graph: &Graph<V, E>, assignment: LayerAssignment) -> NormalizedLayers {
    let LayerAssignment {
        mut layers,
        mut layer_of,
    } = assignment;
    let mut succ: FxHashMap<String, Vec<String>> = FxHashMap::default();
    let mut pred: FxHashMap<String, Vec<String>> = FxHashMap::default();
    let mut long_edges = Vec::new();
    let mut synthetic = FxHashSet::default();
    let mut counter = 0usize;

    for e in graph.edges() {
        let (Some(&bi), Some(&ei)) = (layer_of.get(e.begin()), layer_of.get(e.end())) else {
            continue;
        };
        if ei <= bi + 1 {
            push_link(&mut succ, &mut pred, e.begin(), e.end());
            continue;
        }
        let mut prev = e.begin().to_string();
        let mut chain = Vec::with_capacity(ei - bi - 1);
        for layer in bi + 1..ei {
            let id = fresh_synthetic(graph, &synthetic, &mut counter);
            synthetic.insert(id.clone());
            layers[layer].push(id.clone());
            layer_of.insert(id.clone(), layer);
            push_link(&mut succ, &mut pred, &prev, &id);
            chain.push(id.clone());
            prev = id;
        }
        push_link(&mut succ, &mut pred, &prev, e.end());
        long_edges.push(LongEdge {
            edge: e.id().to_string(),
            chain,
        });
    }

    NormalizedLayers {
        layers,
        layer_of,
        succ,
        pred,
        long_edges,
        synthetic,
    }
}
