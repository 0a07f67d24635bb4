//! Connected-component clustering of a filtered selection.
//!
//! Components are computed on the inverted twin of the filtered subgraph.
//! Sentinel connector edges are left out of the union pass: every component
//! touches both sentinels by construction, so following them would always
//! collapse the partition into one cluster.

use crate::error::Result;
use crate::filter::filter_and_invert;
use beluga_graphlib::{Dictionary, Graph, UnionFind, VertexLabel};
use rustc_hash::{FxHashMap, FxHashSet};

/// Maps every selected vertex to a dense cluster index.
///
/// Two vertices share an index exactly when the filtered subgraph connects
/// them without passing through a sentinel. Indices start at 0 and follow
/// vertex insertion order, so equal inputs cluster identically.
pub fn cluster_components<V, E>(
    graph: &Graph<V, E>,
    selection: &FxHashSet<String>,
) -> Result<FxHashMap<String, usize>>
where
    V: Clone,
    E: Clone + Default,
{
    let pair = filter_and_invert(graph, selection)?;
    let inverted = pair.inverted;
    let source_id = inverted
        .labeled_vertex(VertexLabel::VirtualSource)?
        .id()
        .to_string();
    let target_id = inverted
        .labeled_vertex(VertexLabel::VirtualTarget)?
        .id()
        .to_string();
    let sentinel = |id: &str| id == source_id || id == target_id;

    let mut slots = Dictionary::new();
    let mut sets = UnionFind::new();
    for e in inverted.edges() {
        if sentinel(e.begin()) || sentinel(e.end()) {
            continue;
        }
        let a = slots.index_of(e.begin().to_string());
        let b = slots.index_of(e.end().to_string());
        sets.union(a, b);
    }

    let mut clusters = Dictionary::new();
    let mut out = FxHashMap::default();
    for v in inverted.vertices() {
        if sentinel(v.id()) {
            continue;
        }
        // Isolated vertices get a slot here and stay singletons.
        let slot = slots.index_of(v.id().to_string());
        let representative = sets.find(slot);
        out.insert(v.id().to_string(), clusters.index_of(representative));
    }

    tracing::debug!(
        vertices = out.len(),
        clusters = clusters.len(),
        "clustered selection"
    );
    Ok(out)
}
