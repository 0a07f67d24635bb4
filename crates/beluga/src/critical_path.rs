//! Longest-weighted-path annotation over a filtered selection.
//!
//! The score of a vertex is its own weight plus the best score among its
//! successors, so the virtual source ends up scoring the full critical
//! path and every vertex records which outgoing branch realizes it.

use crate::error::Result;
use crate::filter::filter_and_invert;
use crate::model::{RetrievalTiming, vertex_weight};
use beluga_graphlib::{Graph, VertexLabel, evaluate_dag};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;

/// Critical-path annotation for one selection.
#[derive(Debug, Clone, Serialize)]
pub struct CriticalPath {
    /// Total critical-path score, as seen from the virtual source.
    pub score: f64,
    /// Per-vertex scores, covering everything reachable from the source.
    pub scores: FxHashMap<String, f64>,
    /// Path vertices from the virtual source to the virtual target.
    pub vertices: Vec<String>,
    /// Identities of the filtered-subgraph edges on the path.
    pub edges: FxHashSet<String>,
}

/// Scores the subgraph induced by `selection` and extracts its critical path.
///
/// Vertex weight is the slowest partition's elapsed time, 0.0 for vertices
/// without timing (both sentinels included). Ties between equally scored
/// successors resolve to the first outgoing edge in insertion order.
pub fn critical_path<V, E>(
    graph: &Graph<V, E>,
    selection: &FxHashSet<String>,
) -> Result<CriticalPath>
where
    V: RetrievalTiming + Clone,
    E: Clone + Default,
{
    let pair = filter_and_invert(graph, selection)?;
    let filtered = pair.filtered;
    let source_id = filtered
        .labeled_vertex(VertexLabel::VirtualSource)?
        .id()
        .to_string();

    // Value per vertex: (score, successor realizing it).
    let values = evaluate_dag(&filtered, &source_id, |id, successors, computed| {
        let weight = filtered.vertex_data(id).map_or(0.0, vertex_weight);
        let mut best: Option<(String, f64)> = None;
        for s in successors {
            let score = computed.get(s).map_or(0.0, |v: &(f64, Option<String>)| v.0);
            let better = match &best {
                None => true,
                Some((_, b)) => score > *b,
            };
            if better {
                best = Some((s.clone(), score));
            }
        }
        match best {
            Some((link, score)) => (weight + score.max(0.0), Some(link)),
            None => (weight, None),
        }
    })?;

    let mut vertices = vec![source_id.clone()];
    let mut edges = FxHashSet::default();
    let mut current = source_id.clone();
    while let Some(next) = values.get(&current).and_then(|v| v.1.clone()) {
        if let Some(edge) = filtered
            .outgoing_edges(&current)
            .into_iter()
            .find(|e| e.end() == next)
        {
            edges.insert(edge.id().to_string());
        }
        vertices.push(next.clone());
        current = next;
    }

    let scores: FxHashMap<String, f64> = values.iter().map(|(id, v)| (id.clone(), v.0)).collect();
    let score = scores.get(&source_id).copied().unwrap_or(0.0);
    tracing::debug!(score, path_len = vertices.len(), "scored critical path");

    Ok(CriticalPath {
        score,
        scores,
        vertices,
        edges,
    })
}
