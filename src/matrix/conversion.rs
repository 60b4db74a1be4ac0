//! Converting a filtered simplicial complex into a boundary matrix
//! (§4.4), and back out into dimension-tagged column data.
//!
//! Grounded on Aleph's free function
//! `aleph::topology::io::makeBoundaryMatrix` pattern used throughout
//! the `persistenceDiagrams` drivers in `original_source`: walk the
//! complex once in filtration order, for each simplex look up the
//! filtration index of each of its codimension-1 faces via the
//! complex's own lookup map, and write the sorted index list as the
//! matrix column. The optional `max_index` truncation is the
//! conversion-side half of intersection-homology partitioning (§4.8):
//! a column whose simplex's index exceeds `max_index` is still present
//! (so row lookups into it remain valid) but is cleared, matching
//! Aleph's `PhiPersistence` restriction of the boundary operator to a
//! sub-partition before reduction.

use super::{BoundaryMatrix, ColumnRepresentation};
use crate::complex::FilteredSimplicialComplex;
use crate::error::{Error, Result};

impl<R: ColumnRepresentation> BoundaryMatrix<R> {
    /// Build the boundary matrix of `complex`, one column per simplex
    /// in filtration order. If `max_index` is `Some(m)`, every column
    /// whose own index exceeds `m` is cleared (kept empty) instead of
    /// populated — used to restrict reduction to a sub-partition
    /// (spec.md §4.8).
    ///
    /// Returns [`Error::NotClosed`] if some simplex's codimension-1
    /// face is absent from `complex` — conversion never silently drops
    /// a face (§4.4).
    pub fn from_complex<W>(complex: &FilteredSimplicialComplex<W>, max_index: Option<usize>) -> Result<Self> {
        let n = complex.len();
        let mut matrix = BoundaryMatrix::new(n);

        for (j, simplex) in complex.iter().enumerate() {
            matrix.set_dimension(j, simplex.dim());

            if let Some(m) = max_index {
                if j > m {
                    continue;
                }
            }

            let mut entries: Vec<usize> = Vec::with_capacity(simplex.dim() + 1);
            for face in simplex.boundary() {
                let idx = complex.index_of(face.vertices()).ok_or_else(|| Error::NotClosed {
                    child: j,
                    face: face.vertices().to_vec(),
                })?;
                entries.push(idx);
            }
            entries.sort_unstable();
            matrix.set_column(j, entries);
        }

        Ok(matrix)
    }
}
