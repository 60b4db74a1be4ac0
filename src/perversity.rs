//! Perversity functions and the partition step for persistent
//! intersection homology (§4.8).
//!
//! `partition()` is grounded directly in Aleph's `aleph::partition`
//! (`include/aleph/persistentHomology/PhiPersistence.hh`, retrieved in
//! full): two passes over the complex, the first collecting simplices
//! passing `phi`, the second those failing it, each pass preserving
//! relative order. `Perversity` itself is a **supplement**:
//! `PhiPersistence.hh` takes a caller-supplied `phi` closure and has no
//! perversity value type of its own; this validated newtype is built
//! fresh, styled on the teacher's small validated-newtype pattern for
//! `MajorDimension` (`matrices/matrix_oracle.rs`).
//!
//! `allowable()` and `persistent_intersection_homology()` are grounded
//! on the worked examples in `original_source/examples/
//! persistent_intersection_homology.cc` and `original_source/tests/
//! test_persistent_intersection_homology.cc`: both call
//! `aleph::calculateIntersectionHomology(complex, skeleta, perversity)`
//! against a barycentrically subdivided complex ("to ensure that the
//! resulting complex is flaglike"), with the last entry of `skeleta`
//! equal to the whole complex. This crate takes `X_c` to be the
//! complex's own `c`-skeleton throughout (spec.md's "filtration by
//! skeleta `X_0 ⊆ X_1 ⊆ … ⊆ X_D = complex`"), which lets `allowable()`
//! work from `perversity` alone rather than threading an explicit
//! skeleta list through the call.

use crate::complex::FilteredSimplicialComplex;
use crate::diagram::{build_diagrams, Diagram};
use crate::error::{Error, Result};
use crate::matrix::{BoundaryMatrix, ColumnRepresentation};
use crate::pairing::extract_pairing;
use crate::reduction::{reduce, ReductionAlgorithm};
use crate::simplex::Simplex;
use num_traits::Float;
use std::cmp::Ordering;

/// A perversity 𝑝: {1, …, D} → ℤ with 𝑝(1) ∈ {−1, 0} and 𝑝(k+1) ∈
/// {𝑝(k), 𝑝(k)+1}. Values supplied out of range are clamped back into
/// range on construction (§3, §7: "clamp and continue", never a hard
/// failure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Perversity {
    values: Vec<i64>,
    /// Any clamps applied during construction, recorded for a caller
    /// who wants an audit trail (§7: `OutOfRangePerversity` exists as
    /// an informational variant, not a returned error).
    clamps: Vec<Error>,
}

impl Perversity {
    /// Build a perversity from raw values `p(1), p(2), …, p(D)`,
    /// clamping each entry into the admissible range as it goes:
    /// `p(1)` into `{-1, 0}`, and every later `p(k+1)` into `{p(k),
    /// p(k)+1}`.
    pub fn new(raw: &[i64]) -> Self {
        let mut values = Vec::with_capacity(raw.len());
        let mut clamps = Vec::new();

        for (level, &value) in raw.iter().enumerate() {
            let (lo, hi) = if level == 0 {
                (-1, 0)
            } else {
                let prev = values[level - 1];
                (prev, prev + 1)
            };
            let clamped = value.clamp(lo, hi);
            if clamped != value {
                clamps.push(Error::OutOfRangePerversity {
                    level: level + 1,
                    value,
                    clamped,
                });
            }
            values.push(clamped);
        }

        Perversity { values, clamps }
    }

    /// `p(k)` for `k` in `1 ..= self.len()`; panics if `k` is out of
    /// range (a caller iterating `1..=dimension` never hits this).
    pub fn at(&self, k: usize) -> i64 {
        self.values[k - 1]
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Out-of-range values that were clamped during construction, if
    /// any.
    pub fn clamps(&self) -> &[Error] {
        &self.clamps
    }
}

/// Partition `complex` into allowable simplices (those for which
/// `phi` returns `true`) followed by the rest, each group preserving
/// its original relative filtration order. The returned complex's
/// first `k` simplices (where `k` is the number of allowable
/// simplices) form the allowable sub-chain-complex; `k` is returned
/// alongside so the caller can truncate conversion at `max_index = k
/// - 1` (§4.4, §4.8).
pub fn partition<W: Clone>(
    complex: &FilteredSimplicialComplex<W>,
    phi: impl Fn(&crate::simplex::Simplex<W>) -> bool,
) -> (FilteredSimplicialComplex<W>, usize) {
    let mut result = FilteredSimplicialComplex::new();
    let mut allowable_count = 0;

    for s in complex.iter() {
        if phi(s) {
            result.push(s.clone());
            allowable_count += 1;
        }
    }
    for s in complex.iter() {
        if !phi(s) {
            result.push(s.clone());
        }
    }

    (result, allowable_count)
}

/// Whether a simplex of dimension `dim_sigma` is allowable under
/// `perversity`'s formula (§4.8): `dim(σ ∩ X_c) ≤ s − c + 𝑝(c)` for
/// every stratum `c ∈ {1, …, D}`, `D = perversity.len()`, against the
/// skeleta filtration `X_0 ⊆ X_1 ⊆ … ⊆ X_D = complex`. `X_c` is the
/// complex's own `c`-skeleton, so `dim(σ ∩ X_c) = min(s, c)`: once
/// `c ≥ s`, σ sits wholly inside `X_c`; below that, only σ's own
/// `c`-skeleton survives the intersection.
///
/// A valid perversity satisfies `𝑝(c) ≤ c − 1` for every `c` (by
/// induction from `𝑝(1) ≤ 0` and `𝑝(k+1) ≤ 𝑝(k) + 1`), so the `c = s`
/// term is unsatisfiable whenever `s ≤ D` — only simplices of
/// dimension greater than `D` can ever be allowable. Choosing `D`
/// below the complex's top dimension is how a caller selects which
/// top-dimensional simplices survive the partition.
pub fn allowable(dim_sigma: usize, perversity: &Perversity) -> bool {
    (1..=perversity.len()).all(|c| {
        let intersection_dim = dim_sigma.min(c) as i64;
        intersection_dim <= dim_sigma as i64 - c as i64 + perversity.at(c)
    })
}

/// Persistent intersection homology (§4.8), end to end: subdivide
/// (the allowability formula above assumes the flaglike structure a
/// barycentric subdivision guarantees), re-sort the subdivided complex
/// into filtration order, partition it into the allowable prefix,
/// convert with truncation at the partition size, reduce, pair, and
/// build one diagram per dimension.
///
/// `filtration_cmp` re-establishes filtration order on the subdivided
/// complex (`subdivide()` appends its closure faces at the end of
/// order, out of place); ties are broken by ascending dimension
/// automatically (`FilteredSimplicialComplex::sort`).
pub fn persistent_intersection_homology<W, R>(
    complex: &FilteredSimplicialComplex<W>,
    perversity: &Perversity,
    filtration_cmp: impl Fn(&Simplex<W>, &Simplex<W>) -> Ordering,
    algorithm: ReductionAlgorithm,
    include_all_unpaired: bool,
    skip_nan_points: bool,
) -> Result<Vec<Diagram<W>>>
where
    W: Clone + Float,
    R: ColumnRepresentation,
{
    let mut subdivided = complex.subdivide()?;
    subdivided.sort(filtration_cmp)?;

    let max_dim = subdivided.iter().map(|s| s.dim()).max().unwrap_or(0);
    let (partitioned, s_count) = partition(&subdivided, |s| allowable(s.dim(), perversity));

    let mut matrix = if s_count == 0 {
        // No simplex is allowable: every column is cleared, so build
        // the dimension-tagged shell directly rather than subtracting
        // 1 from a zero `s_count` for `from_complex`'s `max_index`.
        let mut m = BoundaryMatrix::<R>::new(partitioned.len());
        for (j, s) in partitioned.iter().enumerate() {
            m.set_dimension(j, s.dim());
        }
        m
    } else {
        BoundaryMatrix::<R>::from_complex(&partitioned, Some(s_count - 1))?
    };

    reduce(&mut matrix, algorithm);
    let pairing = extract_pairing(&mut matrix, include_all_unpaired);

    build_diagrams(
        &pairing,
        max_dim,
        |i| partitioned.at(i).weight().clone(),
        |i| partitioned.at(i).dim(),
        skip_nan_points,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::Simplex;

    #[test]
    fn construction_clamps_first_level_to_minus_one_or_zero() {
        let p = Perversity::new(&[5]);
        assert_eq!(p.at(1), 0);
        assert_eq!(p.clamps().len(), 1);

        let p = Perversity::new(&[-7]);
        assert_eq!(p.at(1), -1);
    }

    #[test]
    fn construction_clamps_later_levels_to_prev_or_prev_plus_one() {
        let p = Perversity::new(&[0, 10, -10]);
        assert_eq!(p.at(1), 0);
        assert_eq!(p.at(2), 1); // clamped from 10 down to p(1)+1
        assert_eq!(p.at(3), 1); // clamped from -10 up to p(2)
        assert_eq!(p.clamps().len(), 2);
    }

    #[test]
    fn valid_perversity_passes_through_unclamped() {
        let p = Perversity::new(&[0, 1, 1, 2]);
        assert!(p.clamps().is_empty());
        assert_eq!(p.at(4), 2);
    }

    #[test]
    fn partition_moves_allowable_simplices_first_preserving_order() {
        let mut k = FilteredSimplicialComplex::new();
        k.push(Simplex::new(vec![0], 0.0).unwrap());
        k.push(Simplex::new(vec![1], 0.0).unwrap());
        k.push(Simplex::new(vec![0, 1], 1.0).unwrap());

        let (partitioned, count) = partition(&k, |s| s.dim() == 0);
        assert_eq!(count, 2);
        assert_eq!(partitioned.at(0).vertices(), &[0]);
        assert_eq!(partitioned.at(1).vertices(), &[1]);
        assert_eq!(partitioned.at(2).vertices(), &[0, 1]);
    }
}
