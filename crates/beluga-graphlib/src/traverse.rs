//! Iterative multi-root depth-first search driven by an observer.
//!
//! The explicit frame stack is mandatory: retrieval graphs can run to
//! thousands of vertices and call-stack recursion would risk exhaustion.
//! Observer hooks fire as follows:
//!
//! - `on_vertex_discover` the first time a vertex is encountered,
//! - `on_vertex_enter` when its frame starts expanding outgoing edges,
//! - `on_edge_discover` once per outgoing edge, in edge insertion order,
//! - `on_vertex_exit` once all edges are expanded and every vertex first
//!   discovered through this one has exited (post-order completion).
//!
//! Roots are processed in the given order; a root reached through an
//! earlier root is skipped.

use crate::error::{GraphError, Result};
use crate::graph::{EdgeEntry, Graph};

/// Search observer. All hooks default to no-ops so implementors only
/// override what they consume.
pub trait DfsObserver<E> {
    fn on_begin_search(&mut self) {}
    fn on_vertex_discover(&mut self, _id: &str) {}
    fn on_vertex_enter(&mut self, _id: &str) {}
    fn on_edge_discover(&mut self, _edge: &EdgeEntry<E>) {}
    fn on_vertex_exit(&mut self, _id: &str) {}
    fn on_end_search(&mut self) {}
}

struct Frame {
    vertex: usize,
    cursor: usize,
}

/// Runs a depth-first search over `graph` from `roots`, firing `observer`
/// hooks. Fails fast on a root identity that is not in the graph.
pub fn depth_first_search<V, E, O>(
    graph: &Graph<V, E>,
    roots: &[String],
    observer: &mut O,
) -> Result<()>
where
    O: DfsObserver<E>,
{
    observer.on_begin_search();

    let mut discovered = vec![false; graph.vertex_count()];
    let mut stack: Vec<Frame> = Vec::new();

    for root in roots {
        let Some(root_idx) = graph.vertex_index_of(root) else {
            return Err(GraphError::UnknownVertex { id: root.clone() });
        };
        if discovered[root_idx] {
            continue;
        }
        discovered[root_idx] = true;
        observer.on_vertex_discover(graph.vertex_id_at(root_idx));
        stack.push(Frame {
            vertex: root_idx,
            cursor: 0,
        });

        while !stack.is_empty() {
            let top = stack.len() - 1;
            let vertex = stack[top].vertex;
            let cursor = stack[top].cursor;
            if cursor == 0 {
                observer.on_vertex_enter(graph.vertex_id_at(vertex));
            }
            let out = graph.outgoing_at(vertex);
            if cursor < out.len() {
                let edge_idx = out[cursor];
                stack[top].cursor += 1;
                let edge = graph.edge_at(edge_idx);
                observer.on_edge_discover(edge);
                // Endpoints are validated at insertion, so the end vertex
                // is always indexable.
                if let Some(end_idx) = graph.vertex_index_of(edge.end()) {
                    if !discovered[end_idx] {
                        discovered[end_idx] = true;
                        observer.on_vertex_discover(graph.vertex_id_at(end_idx));
                        stack.push(Frame {
                            vertex: end_idx,
                            cursor: 0,
                        });
                    }
                }
            } else {
                observer.on_vertex_exit(graph.vertex_id_at(vertex));
                stack.pop();
            }
        }
    }

    observer.on_end_search();
    Ok(())
}
