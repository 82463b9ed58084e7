//! Integration tests for the dense elimination kernels
//!
//! Exercises the solver, factorizer, reconstructor, and pivoted factorizer
//! together through the public API: round trips, residual checks against the
//! original system, permutation validity, and the degenerate inputs the
//! unpivoted path cannot handle.

use approx::assert_relative_eq;
use math_dense_solvers::support::{
    frobenius_norm_dist, is_permutation, matrix_times_vector, norm_dist, permute_rows,
    random_matrix,
};
use math_dense_solvers::{
    gauss_solve_in_place, lu_in_place, lu_reconstruct_in_place, plu_in_place, LuFactors,
    SolverError,
};
use ndarray::{array, Array1, Array2};
use rand::rngs::StdRng;
use rand::SeedableRng;

const EPS: f64 = 1e-6;

fn sample_3x3() -> (Array2<f64>, Array1<f64>) {
    let a = array![[2.0, 3.0, -1.0], [4.0, 1.0, 2.0], [-2.0, 7.0, 2.0]];
    let b = array![5.0, 6.0, 3.0];
    (a, b)
}

fn sample_5x5() -> Array2<f64> {
    // Strictly diagonally dominant, so the unpivoted kernels are safe on it.
    array![
        [10.0, 1.0, 2.0, 0.0, 1.0],
        [2.0, 9.0, 1.0, 3.0, 1.0],
        [1.0, 2.0, 11.0, 1.0, 0.0],
        [3.0, 1.0, 2.0, 12.0, 1.0],
        [0.0, 2.0, 1.0, 3.0, 8.0]
    ]
}

/// Random matrix with a boosted diagonal; non-singular with margin, safe for
/// the unpivoted round trip.
fn random_dominant(n: usize, seed: u64) -> Array2<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut a = random_matrix(n, &mut rng);
    for i in 0..n {
        a[[i, i]] += n as f64;
    }
    a
}

#[test]
fn solve_concrete_scenario() {
    let (a0, b0) = sample_3x3();
    let mut a = a0.clone();
    let mut x = b0.clone();

    gauss_solve_in_place(&mut a, &mut x).expect("solve should succeed");

    // Verified by substitution into the system.
    assert_relative_eq!(x[0], 1.3, epsilon = EPS);
    assert_relative_eq!(x[1], 0.8, epsilon = EPS);
    assert_relative_eq!(x[2], 0.0, epsilon = EPS);

    let y = matrix_times_vector(&a0, &x);
    assert!(norm_dist(&y, &b0) < EPS);
}

#[test]
fn solve_residual_on_dominant_system() {
    let n = 16;
    let a0 = random_dominant(n, 7);
    let b0 = Array1::from_iter((0..n).map(|i| (i as f64) - 3.0));

    let mut a = a0.clone();
    let mut x = b0.clone();
    gauss_solve_in_place(&mut a, &mut x).expect("solve should succeed");

    let y = matrix_times_vector(&a0, &x);
    assert!(norm_dist(&y, &b0) < EPS);
}

#[test]
fn solve_is_scale_invariant() {
    let (a0, b0) = sample_3x3();

    let mut a = a0.clone();
    let mut x = b0.clone();
    gauss_solve_in_place(&mut a, &mut x).expect("solve should succeed");

    // Doubling A and b leaves the solution unchanged.
    let mut a2 = a0.mapv(|v| 2.0 * v);
    let mut x2 = b0.mapv(|v| 2.0 * v);
    gauss_solve_in_place(&mut a2, &mut x2).expect("solve should succeed");

    assert!(norm_dist(&x, &x2) < EPS);
}

#[test]
fn factor_reconstruct_round_trip_3x3() {
    let (a0, _) = sample_3x3();
    let mut a = a0.clone();

    lu_in_place(&mut a).expect("factorization should succeed");
    lu_reconstruct_in_place(&mut a).expect("reconstruction should succeed");

    assert!(frobenius_norm_dist(&a, &a0) < EPS);
}

#[test]
fn factor_reconstruct_round_trip_5x5() {
    let a0 = sample_5x5();
    let mut a = a0.clone();

    lu_in_place(&mut a).expect("factorization should succeed");
    lu_reconstruct_in_place(&mut a).expect("reconstruction should succeed");

    assert!(frobenius_norm_dist(&a, &a0) < EPS);
}

#[test]
fn factor_reconstruct_round_trip_random() {
    let a0 = random_dominant(32, 42);
    let mut a = a0.clone();

    lu_in_place(&mut a).expect("factorization should succeed");
    lu_reconstruct_in_place(&mut a).expect("reconstruction should succeed");

    assert!(frobenius_norm_dist(&a, &a0) < EPS);
}

#[test]
fn plu_matches_permuted_input() {
    let (a0, _) = sample_3x3();
    let mut a = a0.clone();
    let mut perm = vec![0usize; 3];

    plu_in_place(&mut a, &mut perm).expect("factorization should succeed");
    assert!(is_permutation(&perm));

    let product = LuFactors::new(&a).product();
    let pa0 = permute_rows(&perm, &a0);
    assert!(frobenius_norm_dist(&product, &pa0) < EPS);
}

#[test]
fn plu_handles_zero_leading_entry() {
    let a0 = array![[0.0, 3.0, -1.0], [4.0, 1.0, 2.0], [-2.0, 7.0, 2.0]];

    // The unpivoted path rejects this input outright.
    let mut unpivoted = a0.clone();
    assert_eq!(
        lu_in_place(&mut unpivoted),
        Err(SolverError::SingularPivot { column: 0 })
    );

    let mut a = a0.clone();
    let mut perm = vec![0usize; 3];
    plu_in_place(&mut a, &mut perm).expect("pivoted factorization should succeed");
    assert!(is_permutation(&perm));

    let product = LuFactors::new(&a).product();
    let pa0 = permute_rows(&perm, &a0);
    assert!(frobenius_norm_dist(&product, &pa0) < EPS);
}

#[test]
fn plu_reconstruct_yields_permuted_input() {
    // After pivoting, the combined factors encode P·A; reconstructing in
    // place must therefore produce the permuted original.
    let mut rng = StdRng::seed_from_u64(11);
    let a0 = random_matrix(12, &mut rng);
    let mut a = a0.clone();
    let mut perm = vec![0usize; 12];

    plu_in_place(&mut a, &mut perm).expect("factorization should succeed");
    lu_reconstruct_in_place(&mut a).expect("reconstruction should succeed");

    let pa0 = permute_rows(&perm, &a0);
    assert!(frobenius_norm_dist(&a, &pa0) < EPS);
}

#[test]
fn plu_pivots_dominate_their_columns() {
    // Partial pivoting bounds every stored multiplier by 1 in magnitude;
    // that is the observable form of per-column pivot dominance.
    for seed in [1u64, 2, 3] {
        let mut rng = StdRng::seed_from_u64(seed);
        let n = 10;
        let mut a = random_matrix(n, &mut rng);
        let mut perm = vec![0usize; n];

        plu_in_place(&mut a, &mut perm).expect("factorization should succeed");
        assert!(is_permutation(&perm));

        for i in 0..n {
            for j in 0..i {
                assert!(a[[i, j]].abs() <= 1.0 + 1e-12);
            }
        }
    }
}

#[test]
fn singular_inputs_are_reported_not_poisoned() {
    // Rank-deficient input: row 2 = 2 * row 0.
    let a0 = array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [2.0, 4.0, 6.0]];

    let mut a = a0.clone();
    let mut b = array![1.0, 2.0, 3.0];
    assert!(matches!(
        gauss_solve_in_place(&mut a, &mut b),
        Err(SolverError::SingularPivot { .. })
    ));

    let mut a = a0.clone();
    let mut perm = vec![0usize; 3];
    assert!(matches!(
        plu_in_place(&mut a, &mut perm),
        Err(SolverError::SingularPivot { .. })
    ));
    assert!(is_permutation(&perm));
}
