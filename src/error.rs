//! Error types for the checked solver variants
//!
//! The in-place kernels come in checked and unchecked flavors. The checked
//! ones validate shapes up front and test every pivot before dividing by it;
//! this module defines the error they report. The `*_unchecked` variants
//! never construct these errors and let IEEE arithmetic propagate Inf/NaN
//! instead.

use thiserror::Error;

/// Errors reported by the checked solver and factorization kernels
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The pivot selected for a column is zero or below the singularity
    /// threshold. For the pivoted factorization this means the entire
    /// remaining column was (near-)zero, i.e. the matrix is singular.
    #[error("Singular pivot at column {column}")]
    SingularPivot { column: usize },

    /// The matrix is not square.
    #[error("Matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    /// A vector length does not match the matrix dimension.
    #[error("Dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// The caller-supplied permutation slice has the wrong length.
    #[error("Permutation length mismatch: expected {expected}, got {got}")]
    PermutationLength { expected: usize, got: usize },
}
