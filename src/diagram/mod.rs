//! Persistence diagrams (§4.7, §4.9): per-dimension point sets, norms,
//! and the builder that attaches filtration weights to a pairing.
//!
//! Grounded directly on Aleph's `calculatePersistenceDiagram(s)`
//! (`Calculation.hh`, retrieved in full) and `aleph::
//! PersistenceDiagram<DataType>` (`include/aleph/persistenceDiagrams/
//! PersistenceDiagram.hh`, retrieved in full): `Point` stores `(x,
//! y)`, `isUnpaired()` checks `y == infinity`, `removeDiagonal()`/
//! `removeUnpaired()` filter in place, `betti()` counts unpaired
//! points. `total_persistence`/`p_norm`/`infinity_norm` are grounded in
//! Aleph's `totalPersistence`/`pNorm`/`infinityNorm`
//! (`include/aleph/persistenceDiagrams/Norms.hh`, retrieved in full),
//! which already specify Kahan-compensated summation.

pub mod io;

use crate::error::{Error, Result};
use crate::pairing::Pairing;
use crate::utilities::kahan::KahanSum;
use num_traits::{Float, One, Zero};

/// A single point of a persistence diagram: `(birth, death)` with
/// `birth <= death`. `death` is `+infinity` for an essential
/// (unpaired) class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    pub birth: T,
    pub death: T,
}

impl<T: Float> Point<T> {
    pub fn paired(birth: T, death: T) -> Self {
        Point { birth, death }
    }

    pub fn unpaired(birth: T) -> Self {
        Point {
            birth,
            death: T::infinity(),
        }
    }

    pub fn is_unpaired(&self) -> bool {
        self.death.is_infinite()
    }

    pub fn is_diagonal(&self) -> bool {
        self.birth == self.death
    }

    pub fn persistence(&self) -> T {
        self.death - self.birth
    }
}

/// The persistence diagram of a single homological dimension: a
/// multiset of `Point`s plus the dimension tag they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagram<T> {
    dimension: usize,
    points: Vec<Point<T>>,
}

impl<T: Float> Diagram<T> {
    pub fn new(dimension: usize) -> Self {
        Diagram {
            dimension,
            points: Vec::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn points(&self) -> &[Point<T>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn add_unpaired(&mut self, birth: T) {
        self.points.push(Point::unpaired(birth));
    }

    pub fn add_paired(&mut self, birth: T, death: T) {
        self.points.push(Point::paired(birth, death));
    }

    /// Drop every point with `birth == death`.
    pub fn remove_diagonal(&mut self) {
        self.points.retain(|p| !p.is_diagonal());
    }

    /// Drop every essential (unpaired, `death == +infinity`) point.
    pub fn remove_unpaired(&mut self) {
        self.points.retain(|p| !p.is_unpaired());
    }

    /// Number of essential (unpaired) points — the dimension's Betti
    /// number at the end of the filtration.
    pub fn betti(&self) -> usize {
        self.points.iter().filter(|p| p.is_unpaired()).count()
    }

    /// `max |death - birth|` over finite points; essential points
    /// contribute `+infinity` if present.
    pub fn infinity_norm(&self) -> T {
        self.points
            .iter()
            .map(|p| p.persistence().abs())
            .fold(T::zero(), |acc, v| if v > acc { v } else { acc })
    }

    /// `sum |death - birth|^p` (or `birth * |death - birth|^p` when
    /// `weighted`), via Kahan-compensated summation. Essential points
    /// contribute `+infinity` and propagate it to the total.
    pub fn total_persistence(&self, p: T, weighted: bool) -> T {
        let mut acc = KahanSum::new();
        for point in &self.points {
            let term = point.persistence().abs().powf(p);
            acc.add(if weighted { point.birth * term } else { term });
        }
        acc.total()
    }

    /// `total_persistence(p, false)^(1/p)`. Fails with `ZeroExponent`
    /// when `p == 0`.
    pub fn p_norm(&self, p: T) -> Result<T> {
        if p.is_zero() {
            return Err(Error::ZeroExponent);
        }
        Ok(self.total_persistence(p, false).powf(T::one() / p))
    }
}

/// Build one diagram per homological dimension `0 ..= max_dim` from a
/// pairing and a per-index weight function. `dim_of(i)` must return
/// the homological dimension of the creator at index `i` (the
/// dimension tag routes a pair to exactly one output diagram, per the
/// creator's dimension).
///
/// A point is skipped (when `skip_nan_points` is `true`) or causes a
/// `NaNInWeights` failure (when `false`, the default a caller should
/// reach for first) if either of its coordinates is NaN — e.g. when
/// `weight_of` reads from an externally supplied, possibly incomplete
/// vector of function values (§6) rather than the always-finite
/// weights a complex's own simplices carry.
pub fn build_diagrams<T: Float>(
    pairing: &Pairing,
    max_dim: usize,
    weight_of: impl Fn(usize) -> T,
    dim_of: impl Fn(usize) -> usize,
    skip_nan_points: bool,
) -> Result<Vec<Diagram<T>>> {
    let mut diagrams: Vec<Diagram<T>> = (0..=max_dim).map(Diagram::new).collect();

    for &(b, d) in pairing.pairs() {
        let (wb, wd) = (weight_of(b), weight_of(d));
        if wb.is_nan() || wd.is_nan() {
            if skip_nan_points {
                continue;
            }
            return Err(Error::NaNInWeights);
        }
        diagrams[dim_of(b)].add_paired(wb, wd);
    }
    for &b in pairing.unpaired() {
        let wb = weight_of(b);
        if wb.is_nan() {
            if skip_nan_points {
                continue;
            }
            return Err(Error::NaNInWeights);
        }
        diagrams[dim_of(b)].add_unpaired(wb);
    }

    Ok(diagrams)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairing_from(pairs: Vec<(usize, usize)>, unpaired: Vec<usize>) -> Pairing {
        Pairing::from_parts(pairs, unpaired)
    }

    #[test]
    fn betti_counts_unpaired_points() {
        let pairing = pairing_from(vec![(0, 1)], vec![2]);
        let diagrams = build_diagrams(&pairing, 0, |i| i as f64, |_| 0, false).unwrap();
        assert_eq!(diagrams[0].betti(), 1);
        assert_eq!(diagrams[0].len(), 2);
    }

    #[test]
    fn nan_weight_fails_fast_by_default_but_can_be_skipped() {
        let pairing = pairing_from(vec![(0, 1)], vec![2]);
        let weight_of = |i: usize| if i == 1 { f64::NAN } else { i as f64 };

        assert!(matches!(
            build_diagrams(&pairing, 0, weight_of, |_| 0, false),
            Err(Error::NaNInWeights)
        ));

        let diagrams = build_diagrams(&pairing, 0, weight_of, |_| 0, true).unwrap();
        assert_eq!(diagrams[0].len(), 1); // the NaN-tainted pair is dropped, the unpaired point survives
    }

    #[test]
    fn infinity_norm_and_total_persistence_on_finite_points() {
        let mut d: Diagram<f64> = Diagram::new(0);
        d.add_paired(0.0, 1.0);
        d.add_paired(1.0, 4.0);
        assert_eq!(d.infinity_norm(), 3.0);
        assert_eq!(d.total_persistence(1.0, false), 4.0);
        assert_eq!(d.p_norm(1.0).unwrap(), 4.0);
    }

    #[test]
    fn p_norm_rejects_zero_exponent() {
        let d: Diagram<f64> = Diagram::new(0);
        assert!(matches!(d.p_norm(0.0), Err(Error::ZeroExponent)));
    }

    #[test]
    fn remove_diagonal_and_remove_unpaired() {
        let mut d: Diagram<f64> = Diagram::new(0);
        d.add_paired(1.0, 1.0);
        d.add_paired(0.0, 2.0);
        d.add_unpaired(0.0);
        d.remove_diagonal();
        assert_eq!(d.len(), 2);
        d.remove_unpaired();
        assert_eq!(d.len(), 1);
    }
}
