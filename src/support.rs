//! Support collaborators for the elimination kernels
//!
//! Verification and driver-side helpers: matrix-vector products, distance
//! metrics, random stress input, row permutation, and triangular formatting.
//! The kernels themselves never call into this module; it exists for callers
//! that want to check a solution or inspect a factorization.

use crate::direct::LuFactors;
use crate::traits::RealField;
use ndarray::{Array1, Array2};
use num_traits::Zero;
use rand::Rng;
use std::fmt::Write;

/// Compute y = A·x.
#[inline]
pub fn matrix_times_vector<T: RealField>(a: &Array2<T>, x: &Array1<T>) -> Array1<T> {
    assert_eq!(
        a.ncols(),
        x.len(),
        "Vector length must match matrix columns"
    );
    let mut y = Array1::from_elem(a.nrows(), T::zero());
    for i in 0..a.nrows() {
        let mut sum = T::zero();
        for j in 0..a.ncols() {
            sum += a[[i, j]] * x[j];
        }
        y[i] = sum;
    }
    y
}

/// Euclidean distance between two vectors: ||x − y||₂.
#[inline]
pub fn norm_dist<T: RealField>(x: &Array1<T>, y: &Array1<T>) -> T {
    assert_eq!(x.len(), y.len(), "Vector lengths must match");
    let mut sum = T::zero();
    for (xi, yi) in x.iter().zip(y.iter()) {
        let d = *xi - *yi;
        sum += d * d;
    }
    sum.sqrt()
}

/// Frobenius-norm distance between two matrices.
#[inline]
pub fn frobenius_norm_dist<T: RealField>(a: &Array2<T>, b: &Array2<T>) -> T {
    assert_eq!(a.dim(), b.dim(), "Matrix shapes must match");
    let mut sum = T::zero();
    for (ai, bi) in a.iter().zip(b.iter()) {
        let d = *ai - *bi;
        sum += d * d;
    }
    sum.sqrt()
}

/// Generate an n×n matrix with entries uniform in [−1, 1), for stress and
/// benchmark input.
pub fn random_matrix<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Array2<f64> {
    Array2::from_shape_fn((n, n), |_| rng.random_range(-1.0..1.0))
}

/// Build `P·A` from a permutation record: row i of the result is row
/// `perm[i]` of `a`.
pub fn permute_rows<T: RealField>(perm: &[usize], a: &Array2<T>) -> Array2<T> {
    assert_eq!(perm.len(), a.nrows(), "Permutation length must match rows");
    Array2::from_shape_fn(a.dim(), |(i, j)| a[[perm[i], j]])
}

/// Check that a slice is a permutation of `[0, n)`: every index present,
/// none duplicated.
pub fn is_permutation(perm: &[usize]) -> bool {
    let n = perm.len();
    let mut seen = vec![false; n];
    for &p in perm {
        if p >= n || seen[p] {
            return false;
        }
        seen[p] = true;
    }
    true
}

/// Which part of a matrix to format.
///
/// `Lower` and `Upper` interpret the matrix as a combined L/U encoding and
/// format the corresponding factor, unit diagonal and zero fill included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixPart {
    Lower,
    Upper,
    Whole,
}

/// Format a matrix (or one triangular factor of a combined L/U encoding)
/// as fixed-width rows, one line per row.
pub fn format_matrix<T: RealField>(a: &Array2<T>, part: MatrixPart) -> String {
    assert_eq!(a.nrows(), a.ncols(), "Matrix must be square");
    let n = a.nrows();
    let mut out = String::new();

    let entry = |i: usize, j: usize| -> T {
        match part {
            MatrixPart::Whole => a[[i, j]],
            MatrixPart::Lower => LuFactors::new(a).lower(i, j),
            MatrixPart::Upper => LuFactors::new(a).upper(i, j),
        }
    };

    for i in 0..n {
        for j in 0..n {
            let v = entry(i, j).to_f64().unwrap_or(f64::NAN);
            let _ = write!(out, "{:8.4} ", v);
        }
        out.push('\n');
    }
    out
}
