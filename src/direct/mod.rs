//! Direct in-place solvers and factorizations for dense systems
//!
//! This module provides the four elimination kernels:
//! - [`gauss_solve_in_place`]: Gaussian elimination with back-substitution
//! - [`lu_in_place`]: unpivoted LU factorization
//! - [`lu_reconstruct_in_place`]: inverse of the factorization
//! - [`plu_in_place`]: LU factorization with partial pivoting
//!
//! Every kernel mutates caller-owned storage and allocates nothing. Each has
//! an `*_unchecked` twin that skips shape validation and pivot tests.

mod gauss;
mod lu;
mod plu;

pub use gauss::{gauss_solve_in_place, gauss_solve_in_place_unchecked};
pub use lu::{
    lu_in_place, lu_in_place_unchecked, lu_reconstruct_in_place, lu_reconstruct_in_place_unchecked,
    LuFactors,
};
pub use plu::{plu_in_place, plu_in_place_unchecked};

use crate::error::SolverError;
use ndarray::Array2;

/// Validate that a matrix is square and return its dimension.
pub(crate) fn square_dim<T>(a: &Array2<T>) -> Result<usize, SolverError> {
    let (rows, cols) = a.dim();
    if rows != cols {
        return Err(SolverError::NotSquare { rows, cols });
    }
    Ok(rows)
}
