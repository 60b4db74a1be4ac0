//! End-to-end seed scenarios exercising the whole pipeline: complex
//! construction, conversion, reduction, pairing extraction, and
//! diagram building, on a handful of small filtered complexes and
//! graphs with known answers.
//!
//! Placed under `tests/` rather than inline `#[cfg(test)]` modules
//! because each scenario here drives every layer of the crate at once
//! (the altitude `aj-alonso-filtration_domination` and `rrricharrrd-
//! persistence` both use their own `tests/` directories for
//! end-to-end scenarios, rather than unit-testing a single module in
//! isolation).

use persistap::matrix::{BoundaryMatrix, IndexList};
use persistap::pairing::extract_pairing;
use persistap::reduction::{reduce, ReductionAlgorithm};
use persistap::simplex::Simplex;
use persistap::union_find::zero_dimensional_pairing;
use persistap::{build_diagrams, FilteredSimplicialComplex};

fn s(vertices: Vec<usize>, weight: f64) -> Simplex<f64> {
    Simplex::new(vertices, weight).unwrap()
}

fn run_pipeline(
    complex: &FilteredSimplicialComplex<f64>,
    algorithm: ReductionAlgorithm,
    include_all_unpaired: bool,
) -> Vec<persistap::Diagram<f64>> {
    let mut matrix = BoundaryMatrix::<IndexList>::from_complex(complex, None).unwrap();
    reduce(&mut matrix, algorithm);
    let pairing = extract_pairing(&mut matrix, include_all_unpaired);
    let max_dim = complex.iter().map(|sx| sx.dim()).max().unwrap_or(0);
    build_diagrams(
        &pairing,
        max_dim,
        |i| *complex.at(i).weight(),
        |i| complex.at(i).dim(),
        false,
    )
    .unwrap()
}

/// Scenario 1: triangle with filled interior.
#[test]
fn triangle_with_filled_interior() {
    let _ = env_logger::try_init();
    let mut k = FilteredSimplicialComplex::new();
    k.push(s(vec![0], 0.0));
    k.push(s(vec![1], 0.0));
    k.push(s(vec![2], 0.0));
    k.push(s(vec![0, 1], 1.0));
    k.push(s(vec![0, 2], 1.0));
    k.push(s(vec![1, 2], 1.0));
    k.push(s(vec![0, 1, 2], 2.0));

    for algorithm in [ReductionAlgorithm::Standard, ReductionAlgorithm::Twist] {
        let diagrams = run_pipeline(&k, algorithm, true);

        let mut dim0: Vec<(f64, f64)> = diagrams[0].points().iter().map(|p| (p.birth, p.death)).collect();
        dim0.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(dim0.len(), 3);
        assert_eq!(dim0[0], (0.0, 1.0));
        assert_eq!(dim0[1], (0.0, 1.0));
        assert_eq!(dim0[2].0, 0.0);
        assert!(dim0[2].1.is_infinite());

        assert_eq!(diagrams[1].points().len(), 1);
        assert_eq!(diagrams[1].points()[0], persistap::Point { birth: 1.0, death: 2.0 });
    }
}

/// Scenario 2: hollow triangle — drop the 2-face, leaving an
/// essential loop.
#[test]
fn hollow_triangle_leaves_essential_loop() {
    let mut k = FilteredSimplicialComplex::new();
    k.push(s(vec![0], 0.0));
    k.push(s(vec![1], 0.0));
    k.push(s(vec![2], 0.0));
    k.push(s(vec![0, 1], 1.0));
    k.push(s(vec![0, 2], 1.0));
    k.push(s(vec![1, 2], 1.0));

    let diagrams = run_pipeline(&k, ReductionAlgorithm::Twist, true);

    let mut dim0: Vec<(f64, f64)> = diagrams[0].points().iter().map(|p| (p.birth, p.death)).collect();
    dim0.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(dim0.len(), 3);
    assert_eq!(dim0[0], (0.0, 1.0));
    assert_eq!(dim0[1], (0.0, 1.0));
    assert!(dim0[2].1.is_infinite());

    assert_eq!(diagrams[1].points().len(), 1);
    let loop_point = diagrams[1].points()[0];
    assert_eq!(loop_point.birth, 1.0);
    assert!(loop_point.death.is_infinite());
}

/// Scenario 3: wedge of two circles sharing vertex 0. Loop A =
/// triangle {0,1,2} with its cycle-closing edge last; loop B =
/// triangle {0,3,4}, likewise. Each loop's essential class is born at
/// the maximum edge weight within that loop.
#[test]
fn wedge_of_two_circles() {
    let mut k = FilteredSimplicialComplex::new();
    for v in 0..5 {
        k.push(s(vec![v], 0.0));
    }
    k.push(s(vec![0, 1], 1.0));
    k.push(s(vec![0, 2], 2.0));
    k.push(s(vec![0, 3], 3.0));
    k.push(s(vec![0, 4], 4.0));
    k.push(s(vec![1, 2], 5.0)); // closes loop A, max edge weight 5
    k.push(s(vec![3, 4], 6.0)); // closes loop B, max edge weight 6

    let diagrams = run_pipeline(&k, ReductionAlgorithm::Twist, true);

    // Betti numbers: one connected component, two independent loops —
    // the essential (unpaired) points are what spec.md's scenario
    // description highlights; the finite spanning-tree pairs are also
    // present but not called out there.
    assert_eq!(diagrams[0].betti(), 1);
    let mut essential_births: Vec<f64> = diagrams[1]
        .points()
        .iter()
        .filter(|p| p.is_unpaired())
        .map(|p| p.birth)
        .collect();
    essential_births.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(essential_births, vec![5.0, 6.0]);
    assert_eq!(diagrams[1].betti(), 2);
}

/// Union-Find and matrix reduction must agree on 0-dimensional
/// persistence (spec.md §9 design note: "the test suite must
/// cross-check that both agree on 0-dim output").
#[test]
fn union_find_matches_matrix_reduction_on_zero_dim() {
    let num_vertices = 5;
    let edges = [(0usize, 1usize), (0, 2), (0, 3), (0, 4), (1, 2), (3, 4)];

    let mut k = FilteredSimplicialComplex::new();
    for v in 0..num_vertices {
        k.push(s(vec![v], 0.0));
    }
    for &(u, v) in &edges {
        k.push(s(vec![u.min(v), u.max(v)], 0.0));
    }

    let mut matrix = BoundaryMatrix::<IndexList>::from_complex(&k, None).unwrap();
    reduce(&mut matrix, ReductionAlgorithm::Twist);
    let pairing = extract_pairing(&mut matrix, true);

    let mut matrix_dim0_pairs: Vec<(usize, usize)> = pairing
        .pairs()
        .iter()
        .copied()
        .filter(|&(b, _)| k.at(b).dim() == 0)
        .collect();
    matrix_dim0_pairs.sort_unstable();
    let mut matrix_dim0_unpaired: Vec<usize> = pairing
        .unpaired()
        .iter()
        .copied()
        .filter(|&b| k.at(b).dim() == 0)
        .collect();
    matrix_dim0_unpaired.sort_unstable();

    let (mut uf_pairs, mut uf_unpaired) = zero_dimensional_pairing(num_vertices, &edges);
    uf_pairs.sort_unstable();
    uf_unpaired.sort_unstable();

    assert_eq!(matrix_dim0_pairs, uf_pairs);
    assert_eq!(matrix_dim0_unpaired, uf_unpaired);
}

/// Scenario 4: a stratified bipartite graph with parts of size 2, 3,
/// 1: A–B complete bipartite plus B–C complete bipartite, 6 vertices,
/// 2·3 + 3·1 = 9 edges, one connected component.
#[test]
fn random_stratified_graph() {
    let a = [0usize, 1];
    let b = [2usize, 3, 4];
    let c = [5usize];

    let mut edges = Vec::new();
    for &x in &a {
        for &y in &b {
            edges.push((x, y));
        }
    }
    for &x in &b {
        for &y in &c {
            edges.push((x, y));
        }
    }
    assert_eq!(edges.len(), 9);

    let num_vertices = a.len() + b.len() + c.len();
    assert_eq!(num_vertices, 6);

    let (pairs, unpaired) = zero_dimensional_pairing(num_vertices, &edges);
    assert_eq!(unpaired.len(), 1); // beta_0 == 1
    assert_eq!(pairs.len() + unpaired.len(), num_vertices);
}

/// Scenario 5: Erdős–Rényi graph with n = 10, p = 1.0 — the complete
/// graph K10: 10 vertices, 45 edges.
#[test]
fn erdos_renyi_p_one_is_the_complete_graph() {
    let n = 10;
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            edges.push((i, j));
        }
    }
    assert_eq!(edges.len(), 45);

    let (pairs, unpaired) = zero_dimensional_pairing(n, &edges);
    assert_eq!(unpaired.len(), 1);
    assert_eq!(pairs.len(), n - 1);
}

/// Scenario 6: an adjacency-matrix loader. The matrix is read as an
/// external collaborator would (diagonal ignored, upper triangle taken
/// as edge weights) — this loader logic is a throwaway test
/// constructor, not part of the core's public surface, since format
/// loaders are explicitly out of scope (spec.md §1).
#[test]
fn adjacency_matrix_loader_example() {
    let matrix = [[0.0, 1.0, 3.0], [1.0, 7.0, 5.0], [3.0, 5.0, 9.0]];
    let n = matrix.len();

    let mut k = FilteredSimplicialComplex::new();
    for v in 0..n {
        k.push(s(vec![v], 0.0));
    }
    let mut weights = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            k.push(s(vec![i, j], matrix[i][j]));
            weights.push(matrix[i][j]);
        }
    }

    assert_eq!(k.vertices().len(), 3);
    assert_eq!(weights.len(), 3);
    assert_eq!(weights.iter().cloned().fold(f64::INFINITY, f64::min), 1.0);
    assert_eq!(weights.iter().cloned().fold(f64::NEG_INFINITY, f64::max), 5.0);
}
