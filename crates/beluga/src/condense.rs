//! Fast-vertex condensation.
//!
//! Plans with thousands of sub-threshold retrievals drown the slow ones.
//! Condensation folds runs of fast vertices into one synthetic vertex per
//! group, where a group is the set of fast vertices visible from exactly the
//! same set of fast roots. Two fast vertices reachable from different root
//! sets stay separate; merging them would hide genuinely distinct execution
//! branches behind one box.

use crate::error::Result;
use crate::model::{CondensedRetrieval, RetrievalTiming};
use beluga_graphlib::{Graph, VertexLabel};
use rustc_hash::{FxHashMap, FxHashSet};

/// Tunables for [`condense`].
#[derive(Debug, Clone, Copy)]
pub struct CondenseOptions {
    /// Highest per-partition elapsed time a vertex may report and still be
    /// considered fast.
    pub threshold: f64,
}

impl Default for CondenseOptions {
    fn default() -> Self {
        Self { threshold: 20.0 }
    }
}

/// Derived identity of the synthetic vertex covering `roots`.
fn group_id(key: &str) -> String {
    format!("condensed#{key}")
}

fn is_fast<V: RetrievalTiming>(data: &V, threshold: f64) -> bool {
    match data.elapsed_times() {
        Some(ts) if !ts.is_empty() => {
            ts.iter().copied().fold(f64::NEG_INFINITY, f64::max) <= threshold
        }
        _ => false,
    }
}

/// Latest `start + elapsed` over the partitions of one vertex. Partitions
/// without a recorded start count from 0.
fn max_end<V: RetrievalTiming>(data: &V) -> Option<f64> {
    let elapsed = data.elapsed_times()?;
    let starts = data.start_times().unwrap_or(&[]);
    let mut end: Option<f64> = None;
    for (j, &e) in elapsed.iter().enumerate() {
        let candidate = starts.get(j).copied().unwrap_or(0.0) + e;
        end = Some(end.map_or(candidate, |c| c.max(candidate)));
    }
    end
}

/// Collapses groups of fast vertices into synthetic condensed vertices.
///
/// A vertex is fast when its slowest partition finished within
/// `options.threshold`; vertices without timing (sentinels included) are
/// never fast. Fast roots are the fast vertices first reachable from the
/// non-fast part of the plan; every fast vertex is grouped by the exact set
/// of fast roots that reach it through fast-only paths. Size-1 groups keep
/// their original vertex. Larger groups materialize one synthetic vertex
/// spanning the group's earliest start to its latest end, at the position
/// of the group's first member.
///
/// Edges are remapped through the grouping, self-loops dropped, and
/// surviving endpoint pairs deduplicated into edges with derived
/// `begin->end` identities and default metadata. Sentinel labels carry over
/// to the rebuilt graph; a graph without both labels is rejected up front.
pub fn condense<V, E>(graph: &Graph<V, E>, options: &CondenseOptions) -> Result<Graph<V, E>>
where
    V: CondensedRetrieval + Clone,
    E: Clone + Default,
{
    let source_id = graph
        .labeled_vertex(VertexLabel::VirtualSource)?
        .id()
        .to_string();
    let target_id = graph
        .labeled_vertex(VertexLabel::VirtualTarget)?
        .id()
        .to_string();

    let mut fast = FxHashSet::default();
    for v in graph.vertices() {
        if is_fast(&v.data, options.threshold) {
            fast.insert(v.id().to_string());
        }
    }

    // Fast roots: fast vertices entered from outside the fast region.
    let mut roots = Vec::new();
    for v in graph.vertices() {
        if !fast.contains(v.id()) {
            continue;
        }
        let preds = graph.predecessors(v.id());
        if preds.is_empty() || preds.iter().any(|p| !fast.contains(*p)) {
            roots.push(v.id().to_string());
        }
    }

    // Visible fast roots per fast vertex. Each walk stays inside the fast
    // region and visits every vertex once, so a vertex's list holds each
    // root at most once.
    let mut visible: FxHashMap<String, Vec<String>> = FxHashMap::default();
    for root in &roots {
        let mut seen = FxHashSet::default();
        seen.insert(root.clone());
        let mut stack = vec![root.clone()];
        while let Some(v) = stack.pop() {
            visible.entry(v.clone()).or_default().push(root.clone());
            for e in graph.outgoing_edges(&v) {
                if fast.contains(e.end()) && seen.insert(e.end().to_string()) {
                    stack.push(e.end().to_string());
                }
            }
        }
    }

    // Group by canonical visible-root key, members in insertion order.
    let mut groups: FxHashMap<String, Vec<String>> = FxHashMap::default();
    for v in graph.vertices() {
        if let Some(seen_roots) = visible.get(v.id()) {
            let mut key_roots = seen_roots.clone();
            key_roots.sort();
            groups.entry(key_roots.join("+")).or_default().push(v.id().to_string());
        }
    }

    let mut member_of: FxHashMap<String, String> = FxHashMap::default();
    let mut payloads: FxHashMap<String, V> = FxHashMap::default();
    let mut condensed_groups = 0usize;
    for (key, members) in &groups {
        if members.len() < 2 {
            continue;
        }
        condensed_groups += 1;
        let id = group_id(key);
        let mut min_start: Option<f64> = None;
        let mut group_end: Option<f64> = None;
        for m in members {
            let Some(data) = graph.vertex_data(m) else {
                continue;
            };
            if let Some(starts) = data.start_times() {
                for &s in starts {
                    min_start = Some(min_start.map_or(s, |c| c.min(s)));
                }
            }
            if let Some(end) = max_end(data) {
                group_end = Some(group_end.map_or(end, |c| c.max(end)));
            }
        }
        let start = min_start.unwrap_or(0.0);
        let end = group_end.unwrap_or(start);
        payloads.insert(id.clone(), V::condensed(start, end - start, members.clone()));
        for m in members {
            member_of.insert(m.clone(), id.clone());
        }
    }
    tracing::debug!(
        fast = fast.len(),
        roots = roots.len(),
        groups = condensed_groups,
        "condensed fast vertices"
    );

    // Rebuild: synthetic vertices materialize at their first member's
    // position, everything else copies through in insertion order.
    let mut out = Graph::new();
    for v in graph.vertices() {
        match member_of.get(v.id()) {
            Some(gid) => {
                if let Some(payload) = payloads.remove(gid) {
                    out.add_vertex(gid.clone(), payload)?;
                }
            }
            None => out.add_vertex(v.id().to_string(), v.data.clone())?,
        }
    }
    let mut pairs: FxHashSet<(String, String)> = FxHashSet::default();
    for e in graph.edges() {
        let begin = member_of.get(e.begin()).cloned().unwrap_or_else(|| e.begin().to_string());
        let end = member_of.get(e.end()).cloned().unwrap_or_else(|| e.end().to_string());
        if begin == end {
            continue;
        }
        if pairs.insert((begin.clone(), end.clone())) {
            out.add_edge(format!("{begin}->{end}"), begin, end, E::default())?;
        }
    }
    out.label_vertex(VertexLabel::VirtualSource, &source_id)?;
    out.label_vertex(VertexLabel::VirtualTarget, &target_id)?;
    Ok(out)
}
