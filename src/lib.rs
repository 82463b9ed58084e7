//! Dense direct solvers: Gaussian elimination and in-place LU factorization
//!
//! This crate provides the classical O(n³) elimination kernels over dense,
//! row-major, real-valued square matrices:
//!
//! - **Solver**: Gaussian elimination with back-substitution, [`gauss_solve_in_place`]
//! - **Factorizer**: unpivoted in-place LU, [`lu_in_place`]
//! - **Reconstructor**: recover A from its factors, [`lu_reconstruct_in_place`]
//! - **Pivoted Factorizer**: partial-pivoting LU with a permutation record, [`plu_in_place`]
//!
//! All kernels mutate caller-owned `ndarray` storage in place and allocate
//! nothing; callers who need the input afterwards keep their own copy. Both
//! triangular factors live in one grid (the combined L/U encoding) and are
//! read through the [`LuFactors`] accessor.
//!
//! Each kernel has a checked form returning `Result` (a singular pivot is
//! reported as [`SolverError::SingularPivot`] with the offending column) and
//! an `*_unchecked` form that keeps the raw IEEE fast path, where a zero
//! pivot silently propagates Inf/NaN.
//!
//! The kernels are synchronous and single-threaded; matrices under
//! elimination are not safe for concurrent access, and callers serialize or
//! partition work across independent instances.
//!
//! # Example
//!
//! ```
//! use math_dense_solvers::{gauss_solve_in_place, support};
//! use ndarray::array;
//!
//! let a0 = array![[2.0, 3.0, -1.0], [4.0, 1.0, 2.0], [-2.0, 7.0, 2.0]];
//! let b0 = array![5.0, 6.0, 3.0];
//!
//! // The kernels destroy their input, so work on copies.
//! let mut a = a0.clone();
//! let mut x = b0.clone();
//! gauss_solve_in_place(&mut a, &mut x)?;
//!
//! let residual = support::norm_dist(&support::matrix_times_vector(&a0, &x), &b0);
//! assert!(residual < 1e-6);
//! # Ok::<(), math_dense_solvers::SolverError>(())
//! ```

pub mod direct;
pub mod error;
pub mod support;
pub mod traits;

// Re-export the kernels and their companions
pub use direct::{
    gauss_solve_in_place, gauss_solve_in_place_unchecked, lu_in_place, lu_in_place_unchecked,
    lu_reconstruct_in_place, lu_reconstruct_in_place_unchecked, plu_in_place,
    plu_in_place_unchecked, LuFactors,
};
pub use error::SolverError;
pub use traits::RealField;
