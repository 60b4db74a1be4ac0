//! End-to-end exercise of the §4.8 partition pipeline: partition a
//! complex into an allowable prefix and the rest, convert with
//! `max_index` truncation, reduce, and check the invariant truncation
//! exists to provide: a column beyond the allowable prefix stays
//! empty through reduction, so nothing from outside the allowable
//! prefix leaks back in.

use persistap::matrix::{BoundaryMatrix, IndexList};
use persistap::perversity::{allowable, partition, Perversity};
use persistap::reduction::{reduce, ReductionAlgorithm};
use persistap::simplex::Simplex;
use persistap::FilteredSimplicialComplex;

fn s(vertices: Vec<usize>, weight: f64) -> Simplex<f64> {
    Simplex::new(vertices, weight).unwrap()
}

fn filled_triangle() -> FilteredSimplicialComplex<f64> {
    let mut k = FilteredSimplicialComplex::new();
    k.push(s(vec![0], 0.0));
    k.push(s(vec![1], 0.0));
    k.push(s(vec![2], 0.0));
    k.push(s(vec![0, 1], 1.0));
    k.push(s(vec![0, 2], 1.0));
    k.push(s(vec![1, 2], 1.0));
    k.push(s(vec![0, 1, 2], 2.0));
    k
}

/// A perversity of length `D = 1` (a single value `p(1) = 0`, the
/// maximum admissible) makes `allowable()` accept only simplices of
/// dimension greater than `D`: a valid perversity always satisfies
/// `p(c) <= c - 1`, so the `c = s` term of the allowability formula is
/// unsatisfiable for any simplex with `s <= D`. On the filled
/// triangle, that leaves just the lone 2-face allowable (`s = 1`).
///
/// That singleton prefix is not itself boundary-closed (the 2-face's
/// own edges are not allowable), so its column still references rows
/// outside the prefix after conversion — truncation only promises
/// that simplices *outside* the prefix stay cleared, not that an
/// allowable simplex's own boundary is confined to the prefix.
#[test]
fn partition_then_truncated_conversion_keeps_outside_columns_cleared() {
    let k = filled_triangle();
    let perversity = Perversity::new(&[0]);
    assert!(perversity.clamps().is_empty());

    let (partitioned, s_count) = partition(&k, |simplex| allowable(simplex.dim(), &perversity));
    assert_eq!(s_count, 1);
    assert_eq!(partitioned.at(0).vertices(), &[0, 1, 2]);

    let mut matrix = BoundaryMatrix::<IndexList>::from_complex(&partitioned, Some(s_count - 1)).unwrap();
    reduce(&mut matrix, ReductionAlgorithm::Twist);

    // The lone allowable column (the 2-face) survives reduction with
    // nothing to cancel against, referencing its three edges (now at
    // indices 4, 5, 6 after partitioning moves the 2-face to index 0).
    assert_eq!(matrix.max_index(0), Some(6));

    // Every truncated column (the six vertices/edges, now indices 1..7)
    // was cleared by conversion and stays empty through reduction.
    for j in 1..matrix.num_columns() {
        assert!(matrix.max_index(j).is_none());
    }
}

/// A swept family of perversities for a small simplicial dimension,
/// mirroring the "wicked triangulations" style sweep the design notes
/// call out (§9): every valid `p(k+1) in {p(k), p(k)+1}` step is
/// enumerated and each produces a perversity with no clamps recorded.
#[test]
fn sweep_of_valid_perversities_has_no_clamps() {
    let dimension = 3;
    let mut frontier = vec![vec![-1i64], vec![0i64]];
    let mut all_valid = Vec::new();

    for _ in 1..dimension {
        let mut next = Vec::new();
        for p in &frontier {
            let last = *p.last().unwrap();
            for candidate in [last, last + 1] {
                let mut extended = p.clone();
                extended.push(candidate);
                next.push(extended);
            }
        }
        all_valid.extend(frontier.drain(..));
        frontier = next;
    }
    all_valid.extend(frontier);

    for raw in &all_valid {
        let p = Perversity::new(raw);
        assert!(p.clamps().is_empty(), "valid perversity {:?} was unexpectedly clamped", raw);
        assert_eq!(p.len(), raw.len());
    }
}
