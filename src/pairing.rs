//! The pairing extractor (§4.6): read a reduced boundary matrix into a
//! persistence pairing.
//!
//! Grounded directly on Aleph's `calculatePersistencePairing`
//! (`include/aleph/persistentHomology/Calculation.hh`, retrieved in
//! full) and `aleph::PersistencePairing<Index>`
//! (`include/aleph/persistentHomology/PersistencePairing.hh`, retrieved
//! in full). Aleph represents "no partner yet" with an `Index::MAX`
//! sentinel threaded through the pairing vector; this port instead
//! keeps an explicit `unpaired: Vec<usize>` alongside `pairs: Vec<
//! (usize, usize)>`, matching how the rest of this crate avoids
//! sentinel encodings in favour of `Option`/separate collections. The
//! dualization remap `(i, j) -> (n-1-j, n-1-i)` is carried over
//! verbatim from Aleph's own comment: "Yes, this is correct!".

use crate::matrix::{BoundaryMatrix, ColumnRepresentation};
use rustc_hash::FxHashSet;

/// A persistence pairing: (creator, destroyer) index pairs, plus the
/// creators that never found a destroyer (essential classes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pairing {
    pairs: Vec<(usize, usize)>,
    unpaired: Vec<usize>,
}

impl Pairing {
    /// Assemble a pairing directly from its parts, bypassing matrix
    /// reduction. Used by the diagram builder's tests, which only
    /// need a pairing's *shape* and have no reason to construct and
    /// reduce a throwaway matrix just to get one.
    pub(crate) fn from_parts(pairs: Vec<(usize, usize)>, unpaired: Vec<usize>) -> Self {
        Pairing { pairs, unpaired }
    }

    pub fn pairs(&self) -> &[(usize, usize)] {
        &self.pairs
    }

    pub fn unpaired(&self) -> &[usize] {
        &self.unpaired
    }

    /// Total count of creators and destroyers, which must equal the
    /// number of columns in the matrix the pairing was read from
    /// (spec.md §8).
    pub fn len(&self) -> usize {
        2 * self.pairs.len() + self.unpaired.len()
    }
}

/// Read the persistence pairing off `matrix`, which must already be
/// reduced (pivot-unique columns). `include_all_unpaired` resolves the
/// spec's open question on top-dimensional unpaired creators: when
/// `false` (the default a caller should reach for first), a creator in
/// the matrix's topmost dimension (or, for dualized input, dimension
/// 0) is discarded rather than reported as unpaired, since by
/// construction it can never be destroyed and is usually filtration
/// noise the caller did not ask to see; `true` keeps it.
pub fn extract_pairing<R: ColumnRepresentation>(
    matrix: &mut BoundaryMatrix<R>,
    include_all_unpaired: bool,
) -> Pairing {
    let n = matrix.num_columns();
    let top_dim = matrix.dimension();
    let dualized = matrix.is_dualized();

    let mut pairs: Vec<(usize, usize)> = Vec::new();
    let mut candidates: FxHashSet<usize> = FxHashSet::default();

    for j in 0..n {
        match matrix.max_index(j) {
            Some(i) => {
                let pair = if dualized {
                    (n - 1 - j, n - 1 - i)
                } else {
                    (i, j)
                };
                pairs.push(pair);
                candidates.remove(&i);
            }
            None => {
                let dim_j = matrix.dimension_of(j);
                let is_noise_dimension = if dualized { dim_j == 0 } else { dim_j == top_dim };
                if !is_noise_dimension || include_all_unpaired {
                    candidates.insert(j);
                }
            }
        }
    }

    pairs.sort_unstable_by_key(|&(b, d)| (b, d));
    let mut unpaired: Vec<usize> = candidates.into_iter().collect();
    unpaired.sort_unstable();

    Pairing { pairs, unpaired }
}
