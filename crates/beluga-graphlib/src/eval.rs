//! Generic post-order fold over an acyclic graph.
//!
//! Built on [`depth_first_search`]: an observer records each vertex's
//! direct successors as its outgoing edges are discovered (every edge, so a
//! successor first reached through another path still counts), and the
//! reducer runs on vertex exit. On a DAG every successor has exited, and
//! therefore holds a computed value, before its predecessor's reducer runs.
//!
//! Acyclicity is a precondition, not a checked property: the search visits
//! each vertex at most once, so a cyclic input terminates but hands the
//! reducer incomplete successor values.

use crate::error::Result;
use crate::graph::{EdgeEntry, Graph};
use crate::traverse::{DfsObserver, depth_first_search};
use rustc_hash::FxHashMap;

struct EvalObserver<F, T> {
    successors: FxHashMap<String, Vec<String>>,
    values: FxHashMap<String, T>,
    reducer: F,
}

impl<E, F, T> DfsObserver<E> for EvalObserver<F, T>
where
    F: FnMut(&str, &[String], &FxHashMap<String, T>) -> T,
{
    fn on_edge_discover(&mut self, edge: &EdgeEntry<E>) {
        self.successors
            .entry(edge.begin().to_string())
            .or_default()
            .push(edge.end().to_string());
    }

    fn on_vertex_exit(&mut self, id: &str) {
        let successors = self.successors.remove(id).unwrap_or_default();
        let value = (self.reducer)(id, &successors, &self.values);
        self.values.insert(id.to_string(), value);
    }
}

/// Computes one value per vertex reachable from `root`.
///
/// When `reducer` runs for a vertex it receives the vertex identity, the
/// identities of its direct successors (one entry per outgoing edge), and
/// the values already computed for them.
pub fn evaluate_dag<V, E, T, F>(
    graph: &Graph<V, E>,
    root: &str,
    reducer: F,
) -> Result<FxHashMap<String, T>>
where
    F: FnMut(&str, &[String], &FxHashMap<String, T>) -> T,
{
    let mut observer = EvalObserver {
        successors: FxHashMap::default(),
        values: FxHashMap::default(),
        reducer,
    };
    depth_first_search(graph, &[root.to_string()], &mut observer)?;
    Ok(observer.values)
}
