//! Gaussian elimination with back-substitution
//!
//! Solves `A·x = b` in place: forward elimination zeroes the sub-diagonal
//! column by column, storing each multiplier in the slot it just vacated,
//! then back-substitution runs from the last row upward. On return `b` holds
//! the solution and `a` holds the combined L/U encoding of the eliminated
//! matrix. No row reordering is performed; for matrices with small or zero
//! leading pivots use [`plu_in_place`](super::plu_in_place) instead.

use crate::error::SolverError;
use crate::traits::RealField;
use ndarray::{Array1, Array2};

use super::square_dim;

/// Solve `A·x = b` in place, leaving the solution in `b`.
///
/// `a` is overwritten with the combined L/U encoding (multipliers below the
/// diagonal, the eliminated upper triangle on and above it). Callers who need
/// the original matrix or right-hand side afterwards must keep their own
/// copies.
///
/// Returns [`SolverError::SingularPivot`] when a diagonal pivot falls below
/// the singularity threshold; the storage is left partially eliminated in
/// that case.
pub fn gauss_solve_in_place<T: RealField>(
    a: &mut Array2<T>,
    b: &mut Array1<T>,
) -> Result<(), SolverError> {
    let n = square_dim(a)?;
    if b.len() != n {
        return Err(SolverError::DimensionMismatch {
            expected: n,
            got: b.len(),
        });
    }

    let threshold = T::singular_threshold();

    for k in 0..n {
        // Row k is final at this point; its diagonal entry is U[k][k].
        let pivot = a[[k, k]];
        if pivot.abs() < threshold {
            log::debug!("gauss_solve_in_place: singular pivot at column {}", k);
            return Err(SolverError::SingularPivot { column: k });
        }

        for i in (k + 1)..n {
            let mult = a[[i, k]] / pivot;
            a[[i, k]] = mult;

            for j in (k + 1)..n {
                let update = mult * a[[k, j]];
                a[[i, j]] -= update;
            }
            let update = mult * b[k];
            b[i] -= update;
        }
    }

    back_substitute(n, a, b);
    Ok(())
}

/// Unguarded variant of [`gauss_solve_in_place`].
///
/// Performs no pivot tests: a zero or near-zero diagonal produces Inf/NaN
/// under IEEE 754 semantics, which then propagate silently through the rest
/// of the elimination. Shape preconditions are only checked in debug builds.
pub fn gauss_solve_in_place_unchecked<T: RealField>(a: &mut Array2<T>, b: &mut Array1<T>) {
    debug_assert_eq!(a.nrows(), a.ncols(), "matrix must be square");
    debug_assert_eq!(a.nrows(), b.len(), "vector length must match dimension");
    let n = a.nrows();

    for k in 0..n {
        let pivot = a[[k, k]];
        for i in (k + 1)..n {
            let mult = a[[i, k]] / pivot;
            a[[i, k]] = mult;

            for j in (k + 1)..n {
                let update = mult * a[[k, j]];
                a[[i, j]] -= update;
            }
            let update = mult * b[k];
            b[i] -= update;
        }
    }

    back_substitute(n, a, b);
}

/// Back-substitution over the upper triangle left by forward elimination.
fn back_substitute<T: RealField>(n: usize, a: &Array2<T>, b: &mut Array1<T>) {
    for i in (0..n).rev() {
        for j in (i + 1)..n {
            let update = a[[i, j]] * b[j];
            b[i] -= update;
        }
        b[i] /= a[[i, i]];
    }
}
