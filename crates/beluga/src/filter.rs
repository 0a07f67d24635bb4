//! Selection filtering with sentinel re-augmentation.
//!
//! The UI hands over an arbitrary set of vertex identities. The induced
//! subgraph over that set is usually neither single-source nor single-sink,
//! so both sentinels are re-attached and wired to the subgraph's boundary
//! vertices. Downstream algorithms (critical path, clustering) rely on the
//! result having exactly one global entry and one global exit.

use crate::error::Result;
use beluga_graphlib::{Graph, VertexLabel};
use rustc_hash::FxHashSet;

/// A filtered graph and its edge-reversed twin.
///
/// The twin shares vertex and edge identities with `filtered`; only edge
/// directions differ.
#[derive(Debug, Clone)]
pub struct FilteredPair<V, E> {
    pub filtered: Graph<V, E>,
    pub inverted: Graph<V, E>,
}

/// Builds the single-source/single-sink subgraph induced by `selection`.
///
/// Sentinels are excluded from the induced subgraph regardless of the
/// selection, then re-added: every vertex without incoming edges gains a
/// connector from `virtualSource`, every vertex without outgoing edges a
/// connector to `virtualTarget`. Connector edges use the derived identity
/// `begin->end` and default metadata. Selection entries naming identities
/// outside the graph select nothing.
pub fn filter_and_invert<V, E>(
    graph: &Graph<V, E>,
    selection: &FxHashSet<String>,
) -> Result<FilteredPair<V, E>>
where
    V: Clone,
    E: Clone + Default,
{
    let source = graph.labeled_vertex(VertexLabel::VirtualSource)?;
    let target = graph.labeled_vertex(VertexLabel::VirtualTarget)?;
    let source_id = source.id().to_string();
    let target_id = target.id().to_string();
    let source_data = source.data.clone();
    let target_data = target.data.clone();

    let core = graph.filter_vertices(|v| {
        v.id() != source_id && v.id() != target_id && selection.contains(v.id())
    });
    let entry_ids: Vec<String> = core.sources().iter().map(|v| v.to_string()).collect();
    let exit_ids: Vec<String> = core.sinks().iter().map(|v| v.to_string()).collect();

    let mut filtered = core;
    filtered.add_vertex(source_id.clone(), source_data)?;
    filtered.add_vertex(target_id.clone(), target_data)?;
    for v in entry_ids {
        filtered.add_edge(
            format!("{source_id}->{v}"),
            source_id.clone(),
            v,
            E::default(),
        )?;
    }
    for v in exit_ids {
        filtered.add_edge(
            format!("{v}->{target_id}"),
            v,
            target_id.clone(),
            E::default(),
        )?;
    }
    filtered.label_vertex(VertexLabel::VirtualSource, &source_id)?;
    filtered.label_vertex(VertexLabel::VirtualTarget, &target_id)?;

    tracing::debug!(
        vertices = filtered.vertex_count(),
        edges = filtered.edge_count(),
        "filtered selection into bounded subgraph"
    );

    let inverted = filtered.inverse();
    Ok(FilteredPair { filtered, inverted })
}
