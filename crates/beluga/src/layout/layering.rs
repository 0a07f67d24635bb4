//! Min-width layer assignment.
//!
//! Layers are built bottom-up: a vertex becomes placeable once every
//! successor sits in a strictly lower (already closed) layer, and among the
//! placeable ones the largest out-degree goes first. Two running widths
//! bound layer size: the current layer's own fill and the dangling edges
//! the layer above will have to absorb. The finished stack is flipped so
//! index 0 is the top layer and every edge points from a smaller to a
//! strictly larger layer index.

use super::LayoutOptions;
use crate::error::{Error, Result};
use beluga_graphlib::Graph;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct LayerAssignment {
    /// Layer index 0 is the top; within a layer, placement order.
    pub layers: Vec<Vec<String>>,
    pub layer_of: FxHashMap<String, usize>,
}

/// Assigns every vertex of `graph` to a layer.
///
/// Fails with [`Error::CyclicInput`] when placement stalls, which on a
/// finite graph only a cycle can cause.
pub fn assign_layers<V, E>(graph: &Graph<V, E>, options: &LayoutOptions) -> Result<LayerAssignment> {
    let ids = graph.vertex_ids();
    let n = ids.len();
    let index: FxHashMap<&str, usize> = ids
        .iter()
        .enumerate()
        .map(|(i, id)| (id.as_str(), i))
        .collect();
    let mut succs: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut preds: Vec<Vec<usize>> = vec![Vec::new(); n];
    for e in graph.edges() {
        let b = index[e.begin()];
        let w = index[e.end()];
        succs[b].push(w);
        preds[w].push(b);
    }

    let mut state = Layering {
        preds,
        // Successors not yet in a closed layer; 0 means placeable.
        pending: succs.iter().map(Vec::len).collect(),
        ready: Vec::new(),
        bottom_up: Vec::new(),
        current: Vec::new(),
        current_width: 0.0,
        next_width: 0.0,
    };
    state.ready = (0..n).filter(|&v| state.pending[v] == 0).collect();

    let max_current = options.recommended_layer_max_width as f64;
    let max_next = options.max_width_multiplier * max_current;
    let mut placed = 0usize;

    while placed < n {
        // First vertex with the largest out-degree wins.
        let mut pick: Option<usize> = None;
        let mut best = 0usize;
        for (pos, &v) in state.ready.iter().enumerate() {
            if pick.is_none() || succs[v].len() > best {
                pick = Some(pos);
                best = succs[v].len();
            }
        }
        match pick {
            Some(pos) => {
                let v = state.ready.remove(pos);
                state.current.push(v);
                placed += 1;
                state.current_width += 1.0 - succs[v].len() as f64;
                state.next_width += state.preds[v].len() as f64;
                if state.current_width >= max_current || state.next_width >= max_next {
                    state.close_layer();
                }
            }
            None => {
                if state.current.is_empty() {
                    return Err(Error::CyclicInput {
                        unplaced: n - placed,
                    });
                }
                state.close_layer();
            }
        }
    }
    if !state.current.is_empty() {
        state.close_layer();
    }

    let layers: Vec<Vec<String>> = state
        .bottom_up
        .into_iter()
        .rev()
        .map(|layer| layer.into_iter().map(|v| ids[v].clone()).collect())
        .collect();
    let mut layer_of = FxHashMap::default();
    for (i, layer) in layers.iter().enumerate() {
        for id in layer {
            layer_of.insert(id.clone(), i);
        }
    }
    Ok(LayerAssignment { layers, layer_of })
}

struct Layering {
    preds: Vec<Vec<usize>>,
    pending: Vec<usize>,
    ready: Vec<usize>,
    bottom_up: Vec<Vec<usize>>,
    current: Vec<usize>,
    current_width: f64,
    next_width: f64,
}

impl Layering {
    /// Seals the layer under construction. Predecessors of its vertices
    /// lose one pending successor each and become placeable at zero; the
    /// dangling-edge count rolls over as the new current width.
    fn close_layer(&mut self) {
        for &v in &self.current {
            for &p in &self.preds[v] {
                self.pending[p] -= 1;
                if self.pending[p] == 0 {
                    self.ready.push(p);
                }
            }
        }
        self.bottom_up.push(std::mem::take(&mut self.current));
        self.current_width = self.next_width;
        self.next_width = 0.0;
    }
}
