//! Union–Find with elder-rule merging, the 0-dimensional persistence
//! shortcut (§4.10).
//!
//! The disjoint-set skeleton (parent array, `find` with path
//! compression) is grounded in the general shape of `examples/
//! rrricharrrd-persistence/src/union_find.rs`, whose path compression
//! was left as an unfinished `TODO` there; it is completed here, and
//! the merge rule is generalized from that repo's union-by-size to the
//! age-based elder rule spec.md §4.10 requires: the *younger* root
//! (the one with the larger birth index) always attaches beneath the
//! *older* one, regardless of subtree size.

#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    /// `birth[r]` is meaningful only while `r` is a root: the
    /// filtration index at which that component's surviving vertex was
    /// born (the smallest vertex index ever merged into it).
    birth: Vec<usize>,
}

impl UnionFind {
    /// One singleton component per vertex `0 ..n`, each born at its
    /// own index.
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
            birth: (0..n).collect(),
        }
    }

    /// The root of `v`'s component, with path compression.
    pub fn find(&mut self, v: usize) -> usize {
        if self.parent[v] != v {
            self.parent[v] = self.find(self.parent[v]);
        }
        self.parent[v]
    }

    /// The birth index of `v`'s component (the index of its oldest
    /// member).
    pub fn birth_of(&mut self, v: usize) -> usize {
        let root = self.find(v);
        self.birth[root]
    }

    /// Merge the components of `u` and `v`, connected by an edge of
    /// filtration index `edge_index`. If they are already the same
    /// component, returns `None` (no persistence pair: the edge is a
    /// cycle-closing edge, not a merge). Otherwise returns `Some((
    /// younger_birth, edge_index))` — the (birth, death) pair for the
    /// component that just died, per the elder rule: the root with the
    /// larger (younger) birth index is attached beneath the root with
    /// the smaller (older) one.
    pub fn union(&mut self, u: usize, v: usize, edge_index: usize) -> Option<(usize, usize)> {
        let ru = self.find(u);
        let rv = self.find(v);
        if ru == rv {
            return None;
        }

        let (older, younger) = if self.birth[ru] <= self.birth[rv] {
            (ru, rv)
        } else {
            (rv, ru)
        };
        let younger_birth = self.birth[younger];

        self.parent[younger] = older;
        // `older`'s birth is already the minimum of the two by
        // construction, so it needs no update.

        Some((younger_birth, edge_index))
    }

    /// The number of distinct components remaining.
    pub fn num_components(&mut self) -> usize {
        let n = self.parent.len();
        let mut roots: Vec<usize> = (0..n).map(|v| self.find(v)).collect();
        roots.sort_unstable();
        roots.dedup();
        roots.len()
    }

    /// Every surviving root's birth index — each contributes an
    /// unpaired point `(root_birth, +infinity)` once all edges are
    /// consumed (§4.10).
    pub fn surviving_roots(&mut self) -> Vec<usize> {
        let n = self.parent.len();
        let mut roots: Vec<usize> = (0..n)
            .filter(|&v| self.find(v) == v)
            .map(|r| self.birth[r])
            .collect();
        roots.sort_unstable();
        roots
    }
}

/// Compute 0-dimensional persistence pairs directly from a sequence of
/// weighted edges, without building a boundary matrix. `edges` must be
/// given in filtration order as `(u, v)` vertex-index pairs;
/// `num_vertices` is the total vertex count (each vertex born at its
/// own index, consistent with a complex whose 0-simplices precede all
/// 1-simplices).
pub fn zero_dimensional_pairing(num_vertices: usize, edges: &[(usize, usize)]) -> (Vec<(usize, usize)>, Vec<usize>) {
    let mut uf = UnionFind::new(num_vertices);
    let mut pairs = Vec::new();

    for (edge_index, &(u, v)) in edges.iter().enumerate() {
        if let Some(pair) = uf.union(u, v, num_vertices + edge_index) {
            pairs.push(pair);
        }
    }

    pairs.sort_unstable();
    (pairs, uf.surviving_roots())
}
