//! In-place LU factorization with partial pivoting
//!
//! At each elimination step the row with the largest absolute value in the
//! pivot column is swapped into the pivot position, which bounds every stored
//! multiplier by 1 in magnitude and avoids the zero-pivot failure mode of the
//! unpivoted kernel. The row swaps are recorded in a caller-supplied
//! permutation so that `P·A_original = L·U`.

use crate::error::SolverError;
use crate::traits::RealField;
use ndarray::Array2;

use super::square_dim;

/// Factor `A` in place with partial pivoting, filling `perm` such that
/// `P·A_original = L·U` (row i of the output came from original row
/// `perm[i]`).
///
/// `perm` must be caller-allocated with length n; it is reset to the identity
/// before elimination starts and mutated only by whole-element swaps, so it
/// is a valid permutation of `[0, n)` on every return, error included.
///
/// Returns [`SolverError::SingularPivot`] when the largest remaining entry of
/// a pivot column is below the singularity threshold, which means the matrix
/// is singular; partial pivoting cannot remove that failure mode, only the
/// avoidable small-pivot instability.
pub fn plu_in_place<T: RealField>(
    a: &mut Array2<T>,
    perm: &mut [usize],
) -> Result<(), SolverError> {
    let n = square_dim(a)?;
    if perm.len() != n {
        return Err(SolverError::PermutationLength {
            expected: n,
            got: perm.len(),
        });
    }

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    let threshold = T::singular_threshold();

    for k in 0..n {
        let max_row = pivot_row(a, n, k);

        if a[[max_row, k]].abs() < threshold {
            log::debug!("plu_in_place: singular pivot at column {}", k);
            return Err(SolverError::SingularPivot { column: k });
        }

        if max_row != k {
            log::trace!("plu_in_place: swapping rows {} and {} for column {}", k, max_row, k);
            swap_rows(a, n, k, max_row);
            perm.swap(k, max_row);
        }

        eliminate_below(a, n, k);
    }
    Ok(())
}

/// Unguarded variant of [`plu_in_place`].
///
/// Pivot rows are still selected and swapped, but no singularity test is
/// made: an all-zero remaining column divides through under IEEE semantics.
/// Shape preconditions are only checked in debug builds.
pub fn plu_in_place_unchecked<T: RealField>(a: &mut Array2<T>, perm: &mut [usize]) {
    debug_assert_eq!(a.nrows(), a.ncols(), "matrix must be square");
    debug_assert_eq!(a.nrows(), perm.len(), "permutation length must match dimension");
    let n = a.nrows();

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    for k in 0..n {
        let max_row = pivot_row(a, n, k);
        if max_row != k {
            swap_rows(a, n, k, max_row);
            perm.swap(k, max_row);
        }
        eliminate_below(a, n, k);
    }
}

/// Row in k..n with the largest absolute value in column k. The strict `>`
/// comparison keeps the first occurrence on ties.
fn pivot_row<T: RealField>(a: &Array2<T>, n: usize, k: usize) -> usize {
    let mut max_row = k;
    let mut max_val = a[[k, k]].abs();
    for i in (k + 1)..n {
        let val = a[[i, k]].abs();
        if val > max_val {
            max_val = val;
            max_row = i;
        }
    }
    max_row
}

fn swap_rows<T: RealField>(a: &mut Array2<T>, n: usize, r1: usize, r2: usize) {
    for j in 0..n {
        let tmp = a[[r1, j]];
        a[[r1, j]] = a[[r2, j]];
        a[[r2, j]] = tmp;
    }
}

/// Standard elimination below pivot row k, storing multipliers in place.
fn eliminate_below<T: RealField>(a: &mut Array2<T>, n: usize, k: usize) {
    let pivot = a[[k, k]];
    for i in (k + 1)..n {
        let mult = a[[i, k]] / pivot;
        a[[i, k]] = mult;
        for j in (k + 1)..n {
            let update = mult * a[[k, j]];
            a[[i, j]] -= update;
        }
    }
}
