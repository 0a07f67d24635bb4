//! Identity-based directed multigraph container.
//!
//! Vertices and edges carry globally unique string identities plus opaque
//! caller-defined payloads. The container never interprets payloads; it only
//! maintains identity indices, insertion order, per-vertex adjacency in both
//! directions, and the sentinel label map. Graph-producing operations
//! (`filter_vertices`, `inverse`) return new graphs and leave the input
//! untouched, so built graphs can be shared by reference across algorithms.

use crate::error::{GraphError, Result};
use rustc_hash::FxBuildHasher;
use std::fmt;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Well-known vertex labels.
///
/// A retrieval graph carries exactly two labeled vertices: the synthetic
/// global entry and exit points. Keeping the label set closed (instead of
/// free-form strings) lets the container guarantee at most one holder per
/// label by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexLabel {
    VirtualSource,
    VirtualTarget,
}

impl VertexLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            VertexLabel::VirtualSource => "virtualSource",
            VertexLabel::VirtualTarget => "virtualTarget",
        }
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct VertexEntry<V> {
    id: String,
    pub data: V,
}

impl<V> VertexEntry<V> {
    pub fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct EdgeEntry<E> {
    id: String,
    begin: String,
    end: String,
    pub data: E,
}

impl<E> EdgeEntry<E> {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Identity of the vertex this edge leaves.
    pub fn begin(&self) -> &str {
        &self.begin
    }

    /// Identity of the vertex this edge points at.
    pub fn end(&self) -> &str {
        &self.end
    }
}

#[derive(Debug, Clone)]
pub struct Graph<V, E> {
    vertices: Vec<VertexEntry<V>>,
    vertex_index: HashMap<String, usize>,

    edges: Vec<EdgeEntry<E>>,
    edge_index: HashMap<String, usize>,

    // Outgoing/incoming edge indices per vertex, in edge insertion order.
    // Parallel edges between the same endpoints are kept; algorithms that
    // need a set of endpoint pairs deduplicate on their side.
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,

    labels: HashMap<VertexLabel, String>,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph<V, E> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            vertex_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
            outgoing: Vec::new(),
            incoming: Vec::new(),
            labels: HashMap::default(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertex_index.contains_key(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edge_index.contains_key(id)
    }

    pub fn add_vertex(&mut self, id: impl Into<String>, data: V) -> Result<()> {
        let id = id.into();
        if self.vertex_index.contains_key(&id) {
            return Err(GraphError::DuplicateVertex { id });
        }
        let idx = self.vertices.len();
        self.vertex_index.insert(id.clone(), idx);
        self.vertices.push(VertexEntry { id, data });
        self.outgoing.push(Vec::new());
        self.incoming.push(Vec::new());
        Ok(())
    }

    /// Adds a directed edge. Both endpoints must already be present.
    pub fn add_edge(
        &mut self,
        id: impl Into<String>,
        begin: impl Into<String>,
        end: impl Into<String>,
        data: E,
    ) -> Result<()> {
        let id = id.into();
        let begin = begin.into();
        let end = end.into();
        if self.edge_index.contains_key(&id) {
            return Err(GraphError::DuplicateEdge { id });
        }
        let Some(&begin_idx) = self.vertex_index.get(begin.as_str()) else {
            return Err(GraphError::EndpointMissing {
                edge: id,
                vertex: begin,
            });
        };
        let Some(&end_idx) = self.vertex_index.get(end.as_str()) else {
            return Err(GraphError::EndpointMissing {
                edge: id,
                vertex: end,
            });
        };
        let idx = self.edges.len();
        self.edge_index.insert(id.clone(), idx);
        self.edges.push(EdgeEntry {
            id,
            begin,
            end,
            data,
        });
        self.outgoing[begin_idx].push(idx);
        self.incoming[end_idx].push(idx);
        Ok(())
    }

    /// Vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &VertexEntry<V>> {
        self.vertices.iter()
    }

    pub fn vertex_ids(&self) -> Vec<String> {
        self.vertices.iter().map(|v| v.id.clone()).collect()
    }

    pub fn vertex(&self, id: &str) -> Option<&VertexEntry<V>> {
        self.vertex_index.get(id).map(|&idx| &self.vertices[idx])
    }

    pub fn vertex_data(&self, id: &str) -> Option<&V> {
        self.vertex(id).map(|v| &v.data)
    }

    pub fn vertex_data_mut(&mut self, id: &str) -> Option<&mut V> {
        self.vertex_index
            .get(id)
            .copied()
            .map(move |idx| &mut self.vertices[idx].data)
    }

    /// Edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = &EdgeEntry<E>> {
        self.edges.iter()
    }

    pub fn edge(&self, id: &str) -> Option<&EdgeEntry<E>> {
        self.edge_index.get(id).map(|&idx| &self.edges[idx])
    }

    /// Outgoing edges of `id` in insertion order. Unknown identities yield
    /// an empty list; lookups where absence is an invariant violation go
    /// through [`Graph::vertex`] and fail on `None` instead.
    pub fn outgoing_edges(&self, id: &str) -> Vec<&EdgeEntry<E>> {
        let Some(&idx) = self.vertex_index.get(id) else {
            return Vec::new();
        };
        self.outgoing[idx].iter().map(|&e| &self.edges[e]).collect()
    }

    /// Incoming edges of `id` in insertion order.
    pub fn incoming_edges(&self, id: &str) -> Vec<&EdgeEntry<E>> {
        let Some(&idx) = self.vertex_index.get(id) else {
            return Vec::new();
        };
        self.incoming[idx].iter().map(|&e| &self.edges[e]).collect()
    }

    pub fn out_degree(&self, id: &str) -> usize {
        self.vertex_index
            .get(id)
            .map(|&idx| self.outgoing[idx].len())
            .unwrap_or(0)
    }

    pub fn in_degree(&self, id: &str) -> usize {
        self.vertex_index
            .get(id)
            .map(|&idx| self.incoming[idx].len())
            .unwrap_or(0)
    }

    /// End vertices of the outgoing edges of `id`, one entry per edge.
    pub fn successors(&self, id: &str) -> Vec<&str> {
        self.outgoing_edges(id)
            .into_iter()
            .map(|e| e.end.as_str())
            .collect()
    }

    /// Begin vertices of the incoming edges of `id`, one entry per edge.
    pub fn predecessors(&self, id: &str) -> Vec<&str> {
        self.incoming_edges(id)
            .into_iter()
            .map(|e| e.begin.as_str())
            .collect()
    }

    /// Vertices with no outgoing edge, in insertion order.
    pub fn sinks(&self) -> Vec<&str> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.outgoing[*idx].is_empty())
            .map(|(_, v)| v.id.as_str())
            .collect()
    }

    /// Vertices with no incoming edge, in insertion order.
    pub fn sources(&self) -> Vec<&str> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(idx, _)| self.incoming[*idx].is_empty())
            .map(|(_, v)| v.id.as_str())
            .collect()
    }

    /// Marks `id` as the holder of `label`, displacing any previous holder.
    pub fn label_vertex(&mut self, label: VertexLabel, id: &str) -> Result<()> {
        if !self.vertex_index.contains_key(id) {
            return Err(GraphError::UnknownVertex { id: id.to_string() });
        }
        self.labels.insert(label, id.to_string());
        Ok(())
    }

    pub fn vertex_by_label(&self, label: VertexLabel) -> Option<&str> {
        self.labels.get(&label).map(|id| id.as_str())
    }

    /// The entry holding `label`, or [`GraphError::MissingLabel`] when no
    /// vertex does.
    pub fn labeled_vertex(&self, label: VertexLabel) -> Result<&VertexEntry<V>> {
        let id = self
            .vertex_by_label(label)
            .ok_or(GraphError::MissingLabel(label))?;
        // The label map only ever points at present vertices.
        Ok(&self.vertices[self.vertex_index[id]])
    }

    pub fn label_of(&self, id: &str) -> Option<VertexLabel> {
        self.labels
            .iter()
            .find(|(_, holder)| holder.as_str() == id)
            .map(|(&label, _)| label)
    }

    /// Induced subgraph over the vertices satisfying `predicate`: only edges
    /// with both endpoints surviving are kept, labels are carried over when
    /// their holder survives. Identities and insertion order are preserved.
    pub fn filter_vertices(&self, predicate: impl Fn(&VertexEntry<V>) -> bool) -> Graph<V, E>
    where
        V: Clone,
        E: Clone,
    {
        let mut out = Graph::new();
        for v in &self.vertices {
            if predicate(v) {
                // Identities are unique in `self`, so re-adding cannot fail.
                let _ = out.add_vertex(v.id.clone(), v.data.clone());
            }
        }
        for e in &self.edges {
            if out.contains_vertex(&e.begin) && out.contains_vertex(&e.end) {
                let _ = out.add_edge(e.id.clone(), e.begin.clone(), e.end.clone(), e.data.clone());
            }
        }
        for (&label, holder) in &self.labels {
            if out.contains_vertex(holder) {
                let _ = out.label_vertex(label, holder);
            }
        }
        out
    }

    /// Edge-reversed twin: same vertices, same identities, every edge's
    /// begin/end swapped, metadata cloned, labels carried over.
    pub fn inverse(&self) -> Graph<V, E>
    where
        V: Clone,
        E: Clone,
    {
        let mut out = Graph::new();
        for v in &self.vertices {
            let _ = out.add_vertex(v.id.clone(), v.data.clone());
        }
        for e in &self.edges {
            let _ = out.add_edge(e.id.clone(), e.end.clone(), e.begin.clone(), e.data.clone());
        }
        for (&label, holder) in &self.labels {
            let _ = out.label_vertex(label, holder);
        }
        out
    }

    /// Deterministic DOT-like dump for diagnostics: vertices in insertion
    /// order (labeled ones carry a `label=` attribute), then one
    /// `"a" -> "b";` line per edge in insertion order.
    pub fn dumps(&self) -> String {
        let mut out = String::from("digraph {\n");
        for v in &self.vertices {
            match self.label_of(&v.id) {
                Some(label) => {
                    out.push_str(&format!(
                        "  \"{}\" [label={}];\n",
                        escape(&v.id),
                        label.as_str()
                    ));
                }
                None => out.push_str(&format!("  \"{}\";\n", escape(&v.id))),
            }
        }
        for e in &self.edges {
            out.push_str(&format!(
                "  \"{}\" -> \"{}\";\n",
                escape(&e.begin),
                escape(&e.end)
            ));
        }
        out.push_str("}\n");
        out
    }

    pub(crate) fn vertex_index_of(&self, id: &str) -> Option<usize> {
        self.vertex_index.get(id).copied()
    }

    pub(crate) fn vertex_id_at(&self, idx: usize) -> &str {
        &self.vertices[idx].id
    }

    pub(crate) fn outgoing_at(&self, idx: usize) -> &[usize] {
        &self.outgoing[idx]
    }

    pub(crate) fn edge_at(&self, idx: usize) -> &EdgeEntry<E> {
        &self.edges[idx]
    }
}

fn escape(id: &str) -> String {
    id.replace('\\', "\\\\").replace('"', "\\\"")
}
