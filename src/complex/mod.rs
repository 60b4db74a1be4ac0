//! The filtered simplicial complex (§4.2): simplices kept in filtration
//! order, plus a lookup view keyed by vertex list.
//!
//! The dual order-view/lookup-view structure is grounded directly on
//! the teacher's `BiMapSequential<T>`
//! (`utilities/sequences_and_ordinals.rs`: `ord_to_val: Vec<T>` next to
//! `val_to_ord: HashMap<T, usize>`), generalized here to key the lookup
//! map on the simplex's vertex list alone (equality/hash ignore
//! weight, per §4.1) and to support the mutating operations (`push`,
//! `close`, `sort`) that `BiMapSequential` itself, built for a single
//! up-front `from_vec`, does not need.

pub mod cliques;
pub mod subdivision;

use crate::error::{Error, Result};
use crate::simplex::Simplex;
use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// A container maintaining simplices in filtration order, with O(1)
/// average lookup by vertex list.
#[derive(Debug, Clone, Default)]
pub struct FilteredSimplicialComplex<W> {
    order: Vec<Simplex<W>>,
    lookup: FxHashMap<Vec<usize>, usize>,
}

impl<W> FilteredSimplicialComplex<W> {
    pub fn new() -> Self {
        FilteredSimplicialComplex {
            order: Vec::new(),
            lookup: FxHashMap::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Append `s`, amortized O(1). If a simplex with the same vertex
    /// list is already present, its weight is overwritten in place
    /// rather than appending a second copy to the order view.
    pub fn push(&mut self, s: Simplex<W>) {
        if let Some(&i) = self.lookup.get(s.vertices()) {
            self.order[i] = s;
        } else {
            let i = self.order.len();
            self.lookup.insert(s.vertices().to_vec(), i);
            self.order.push(s);
        }
    }

    pub fn index_of(&self, vertices: &[usize]) -> Option<usize> {
        self.lookup.get(vertices).copied()
    }

    pub fn at(&self, i: usize) -> &Simplex<W> {
        &self.order[i]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Simplex<W>> {
        self.order.iter()
    }

    /// Deduplicated set of vertex identifiers appearing in the complex.
    pub fn vertices(&self) -> Vec<usize> {
        let mut v: Vec<usize> = self
            .order
            .iter()
            .flat_map(|s| s.vertices().iter().copied())
            .collect();
        v.sort_unstable();
        v.dedup();
        v
    }

    /// Restrict to simplices of dimension at most `k`, preserving the
    /// original filtration order. Grounded directly on Aleph's
    /// `aleph::topology::Skeleton` functor
    /// (`include/aleph/topology/Skeleton.hh`): a single filtering pass
    /// that keeps relative order.
    pub fn skeleton(&self, k: usize) -> Self
    where
        W: Clone,
    {
        let mut result = FilteredSimplicialComplex::new();
        for s in &self.order {
            if s.dim() <= k {
                result.push(s.clone());
            }
        }
        result
    }

    /// Ensure every face of every simplex is present, inserting missing
    /// faces with a weight derived from `combiner` applied to the
    /// weights of the known cofaces that contain it. `combiner` must be
    /// order-independent: the set of coface weights seen for a given
    /// face must determine its derived weight regardless of visitation
    /// order (§4.2). `combiner` returning `None` means it declined to
    /// derive a weight for that particular set of coface weights (e.g.
    /// it only agrees to average cofaces that already agree); `close`
    /// then fails with [`Error::UnknownFaceDuringClose`] rather than
    /// inventing one.
    pub fn close(&mut self, combiner: impl Fn(&[W]) -> Option<W>) -> Result<()>
    where
        W: Clone,
    {
        // Repeat until a full pass introduces no new simplex: newly
        // inserted faces may themselves have missing faces (e.g.
        // closing a tetrahedron's sole 3-simplex needs the 2-faces
        // before it can derive the 1-faces' weights from them).
        loop {
            let mut coface_weights: FxHashMap<Vec<usize>, Vec<W>> = FxHashMap::default();
            for s in &self.order {
                for face in s.boundary() {
                    coface_weights
                        .entry(face.vertices().to_vec())
                        .or_insert_with(Vec::new)
                        .push(s.weight().clone());
                }
            }

            let mut missing: Vec<(Vec<usize>, W)> = Vec::new();
            for (face_vertices, weights) in coface_weights.iter() {
                if self.lookup.get(face_vertices).is_none() {
                    let weight = combiner(weights)
                        .ok_or_else(|| Error::UnknownFaceDuringClose(face_vertices.clone()))?;
                    missing.push((face_vertices.clone(), weight));
                }
            }

            if missing.is_empty() {
                return Ok(());
            }

            for (vertices, weight) in missing {
                if self.lookup.get(&vertices).is_none() {
                    self.push(Simplex::new(vertices, weight)?);
                }
            }
        }
    }

    /// Stable sort by `cmp`. On completion, face-before-coface must
    /// hold; if `cmp` would place a coface before one of its faces (as
    /// can happen with a purely value-based descending comparator at
    /// equal weights), an automatic ascending-dimension tie-breaker is
    /// appended, per §4.2 and the §9 design note on superlevel
    /// filtrations.
    pub fn sort(&mut self, cmp: impl Fn(&Simplex<W>, &Simplex<W>) -> Ordering) -> Result<()>
    where
        W: Clone,
    {
        self.order.sort_by(|a, b| {
            cmp(a, b).then_with(|| a.dim().cmp(&b.dim()))
        });
        self.reindex();
        self.verify_face_before_coface()
    }

    fn reindex(&mut self) {
        self.lookup.clear();
        for (i, s) in self.order.iter().enumerate() {
            self.lookup.insert(s.vertices().to_vec(), i);
        }
    }

    fn verify_face_before_coface(&self) -> Result<()>
    where
        W: Clone,
    {
        for (j, s) in self.order.iter().enumerate() {
            for face in s.boundary() {
                if let Some(&i) = self.lookup.get(face.vertices()) {
                    if i >= j {
                        return Err(Error::CyclicFiltrationOrder);
                    }
                }
            }
        }
        Ok(())
    }
}
