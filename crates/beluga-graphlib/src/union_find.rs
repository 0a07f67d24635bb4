//! Disjoint-set arena over dense indices.
//!
//! Connectivity clustering maps vertex identities to dense indices first,
//! then merges components here. Union by depth with path compression; the
//! arena grows on demand so callers never size it up front.

#[derive(Debug, Clone, Default)]
pub struct UnionFind {
    parent: Vec<usize>,
    depth: Vec<u32>,
}

impl UnionFind {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Grows the arena so indices `0..n` are valid, each new element its
    /// own singleton set.
    pub fn ensure(&mut self, n: usize) {
        while self.parent.len() < n {
            self.parent.push(self.parent.len());
            self.depth.push(0);
        }
    }

    /// Representative of `x`'s set. Compresses the walked path so repeated
    /// lookups flatten the tree.
    pub fn find(&mut self, x: usize) -> usize {
        self.ensure(x + 1);
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != node {
            let parent = self.parent[node];
            self.parent[node] = root;
            node = parent;
        }
        root
    }

    /// Merges the sets of `a` and `b`, attaching the shallower tree under
    /// the deeper root. Returns the surviving representative.
    pub fn union(&mut self, a: usize, b: usize) -> usize {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return a;
        }
        if self.depth[a] < self.depth[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        if self.depth[a] == self.depth[b] {
            self.depth[a] += 1;
        }
        a
    }
}
