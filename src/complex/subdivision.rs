//! Barycentric subdivision (§4.2 `subdivide()`).
//!
//! Grounded directly on Aleph's `aleph::topology::BarycentricSubdivision`
//! functor (`include/aleph/topology/BarycentricSubdivision.hh`): a new
//! vertex is introduced for every simplex of dimension ≥ 1, and each
//! d-simplex is replaced by the cone of its boundary's subdivision over
//! its own barycentre, carrying the parent's weight forward onto every
//! piece of the cone — exactly Aleph's `cone.emplace_back(Simplex(
//! vertices, s.data()))`.

use super::FilteredSimplicialComplex;
use crate::error::Result;
use crate::simplex::Simplex;
use rustc_hash::FxHashMap;

impl<W: Clone> FilteredSimplicialComplex<W> {
    /// Barycentric subdivision: every simplex of dimension ≥ 1 gets a
    /// fresh barycentre vertex (numbered upward from one past the
    /// current maximum vertex id), and is replaced by the cone of its
    /// subdivided boundary over that barycentre. 0-simplices are kept
    /// as-is. Weights of new simplices inherit from the parent whose
    /// cone they belong to.
    ///
    /// The cone construction above only emits a piece's top face (the
    /// subdivided boundary pieces themselves, plus each with the
    /// barycentre appended) — for a parent of dimension ≥ 2 this skips
    /// the intermediate "spoke" faces (e.g. a subdivided triangle's
    /// barycentre-to-original-vertex edges), which are genuine faces of
    /// the cone but never get pushed directly. A single trailing
    /// `close()` fills exactly those: every missing spoke face's
    /// cofaces all descend from one controlling parent simplex (the
    /// unique original simplex whose barycentre the face contains), so
    /// they always carry the same weight and any combiner that simply
    /// picks one is order-independent here. `close()` appends those
    /// faces at the end of filtration order rather than splicing them
    /// into place, so the result is not yet face-before-coface; call
    /// `sort()` before converting it to a boundary matrix.
    pub fn subdivide(&self) -> Result<Self> {
        if self.is_empty() {
            return Ok(FilteredSimplicialComplex::new());
        }

        let mut next_vertex = self.vertices().into_iter().max().unwrap() + 1;

        // subdivision[parent_vertices] = set of simplices (by vertex
        // list) making up the subdivided image of that parent, in the
        // parent's own filtration order so iterating it later yields a
        // deterministic result.
        let mut subdivision: FxHashMap<Vec<usize>, Vec<Vec<usize>>> = FxHashMap::default();
        let mut result = FilteredSimplicialComplex::new();

        for parent in self.iter() {
            if parent.dim() == 0 {
                subdivision.insert(parent.vertices().to_vec(), vec![parent.vertices().to_vec()]);
                result.push(Simplex::new(parent.vertices().to_vec(), parent.weight().clone()).unwrap());
                continue;
            }

            let barycentre = next_vertex;
            next_vertex += 1;

            // The barycentre is itself a new vertex of the subdivided
            // complex, inheriting the parent's weight (Aleph's
            // `L.push_back(Simplex(barycentreVertex, s.data()))`).
            result.push(Simplex::new(vec![barycentre], parent.weight().clone()).unwrap());

            let mut subdivided_boundary: Vec<Vec<usize>> = Vec::new();
            for face in parent.boundary() {
                let pieces = subdivision
                    .get(face.vertices())
                    .expect("face must have been subdivided before its coface (filtration order guarantees this)");
                subdivided_boundary.extend(pieces.iter().cloned());
            }

            let mut cone: Vec<Vec<usize>> = Vec::with_capacity(subdivided_boundary.len());
            for piece in &subdivided_boundary {
                let mut vertices = piece.clone();
                vertices.push(barycentre);
                vertices.sort_unstable();
                cone.push(vertices);
            }

            for vertices in &cone {
                result.push(Simplex::new(vertices.clone(), parent.weight().clone()).unwrap());
            }
            subdivision.insert(parent.vertices().to_vec(), cone);
        }

        result.close(|weights| Some(weights[0].clone()))?;
        Ok(result)
    }
}
