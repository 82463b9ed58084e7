//! Unpivoted in-place LU factorization and its inverse
//!
//! [`lu_in_place`] overwrites a square matrix with its combined L/U encoding:
//! cell (i, j) holds `U[i][j]` for `i <= j` and `L[i][j]` for `i > j`, with
//! L's unit diagonal implicit. [`lu_reconstruct_in_place`] undoes the
//! factorization by computing `L·U` in place. [`LuFactors`] is the one place
//! that knows the packing convention; reads of an individual factor go
//! through it.
//!
//! No pivoting is performed here: a zero pivot on the diagonal makes the
//! factorization fail (checked variant) or poisons the output with Inf/NaN
//! (unchecked variant). Prefer [`plu_in_place`](super::plu_in_place) for
//! input that is not known to be safely factorable.

use crate::error::SolverError;
use crate::traits::RealField;
use ndarray::Array2;

use super::square_dim;

/// Factor `A` in place into the combined L/U encoding, `L·U = A_original`.
///
/// For each pivot column k this computes row k of U from previously finished
/// entries, then column k of L divided by the fresh `U[k][k]`.
///
/// Returns [`SolverError::SingularPivot`] when `U[k][k]` falls below the
/// singularity threshold; the storage is left partially factored in that
/// case.
pub fn lu_in_place<T: RealField>(a: &mut Array2<T>) -> Result<(), SolverError> {
    let n = square_dim(a)?;
    let threshold = T::singular_threshold();

    for k in 0..n {
        // Row k of U, columns k..n.
        for i in k..n {
            for j in 0..k {
                let update = a[[k, j]] * a[[j, i]];
                a[[k, i]] -= update;
            }
        }

        let pivot = a[[k, k]];
        if pivot.abs() < threshold {
            log::debug!("lu_in_place: singular pivot at column {}", k);
            return Err(SolverError::SingularPivot { column: k });
        }

        // Column k of L, rows k+1..n.
        for i in (k + 1)..n {
            for j in 0..k {
                let update = a[[i, j]] * a[[j, k]];
                a[[i, k]] -= update;
            }
            a[[i, k]] /= pivot;
        }
    }
    Ok(())
}

/// Unguarded variant of [`lu_in_place`].
///
/// No pivot tests; a zero `U[k][k]` divides through under IEEE semantics and
/// the Inf/NaN results propagate. Squareness is only checked in debug builds.
pub fn lu_in_place_unchecked<T: RealField>(a: &mut Array2<T>) {
    debug_assert_eq!(a.nrows(), a.ncols(), "matrix must be square");
    let n = a.nrows();

    for k in 0..n {
        for i in k..n {
            for j in 0..k {
                let update = a[[k, j]] * a[[j, i]];
                a[[k, i]] -= update;
            }
        }
        let pivot = a[[k, k]];
        for i in (k + 1)..n {
            for j in 0..k {
                let update = a[[i, j]] * a[[j, k]];
                a[[i, k]] -= update;
            }
            a[[i, k]] /= pivot;
        }
    }
}

/// Overwrite a combined L/U encoding with the product `L·U`, recovering the
/// matrix that was factored.
///
/// The traversal runs k from n−1 down to 0, the exact reverse of the
/// factorization order; forward traversal would read entries that have
/// already been overwritten.
pub fn lu_reconstruct_in_place<T: RealField>(a: &mut Array2<T>) -> Result<(), SolverError> {
    let n = square_dim(a)?;
    reconstruct_core(n, a);
    Ok(())
}

/// Variant of [`lu_reconstruct_in_place`] that checks squareness only in
/// debug builds. The reconstruction itself divides by nothing and cannot
/// fail numerically.
pub fn lu_reconstruct_in_place_unchecked<T: RealField>(a: &mut Array2<T>) {
    debug_assert_eq!(a.nrows(), a.ncols(), "matrix must be square");
    reconstruct_core(a.nrows(), a);
}

fn reconstruct_core<T: RealField>(n: usize, a: &mut Array2<T>) {
    for k in (0..n).rev() {
        // Column k below the diagonal: undo the division by the pivot and
        // add back the eliminated cross terms.
        for i in (k + 1)..n {
            let diag = a[[k, k]];
            a[[i, k]] *= diag;
            for j in 0..k {
                let update = a[[i, j]] * a[[j, k]];
                a[[i, k]] += update;
            }
        }
        // Row k on and above the diagonal.
        for i in k..n {
            for j in 0..k {
                let update = a[[k, j]] * a[[j, i]];
                a[[k, i]] += update;
            }
        }
    }
}

/// Read-only view over a matrix holding the combined L/U encoding.
///
/// The packing stores both triangular factors in one grid; this accessor is
/// the single owner of that convention. [`lower`](Self::lower) supplies the
/// implicit unit diagonal, [`upper`](Self::upper) the zeros below it, and
/// [`unpack`](Self::unpack) materializes the two factors as full matrices.
#[derive(Debug, Clone, Copy)]
pub struct LuFactors<'a, T> {
    lu: &'a Array2<T>,
    n: usize,
}

impl<'a, T: RealField> LuFactors<'a, T> {
    /// Wrap a factored matrix. Panics if the matrix is not square.
    pub fn new(lu: &'a Array2<T>) -> Self {
        assert_eq!(lu.nrows(), lu.ncols(), "factored matrix must be square");
        Self { lu, n: lu.nrows() }
    }

    /// Matrix dimension.
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Entry (i, j) of the unit-lower-triangular factor L.
    #[inline]
    pub fn lower(&self, i: usize, j: usize) -> T {
        if i > j {
            self.lu[[i, j]]
        } else if i == j {
            T::one()
        } else {
            T::zero()
        }
    }

    /// Entry (i, j) of the upper-triangular factor U.
    #[inline]
    pub fn upper(&self, i: usize, j: usize) -> T {
        if i <= j {
            self.lu[[i, j]]
        } else {
            T::zero()
        }
    }

    /// Materialize (L, U) as separate full matrices.
    pub fn unpack(&self) -> (Array2<T>, Array2<T>) {
        let l = Array2::from_shape_fn((self.n, self.n), |(i, j)| self.lower(i, j));
        let u = Array2::from_shape_fn((self.n, self.n), |(i, j)| self.upper(i, j));
        (l, u)
    }

    /// Compute the product `L·U` as a new matrix.
    ///
    /// Allocates; for the in-place equivalent use
    /// [`lu_reconstruct_in_place`].
    pub fn product(&self) -> Array2<T> {
        let mut out = Array2::from_elem((self.n, self.n), T::zero());
        for i in 0..self.n {
            for j in 0..self.n {
                let mut sum = T::zero();
                for k in 0..self.n {
                    sum += self.lower(i, k) * self.upper(k, j);
                }
                out[[i, j]] = sum;
            }
        }
        out
    }
}
