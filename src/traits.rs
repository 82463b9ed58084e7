//! Scalar trait for the dense solver kernels
//!
//! This module defines [`RealField`], the abstraction over the scalar type
//! used by every kernel in the crate. The solvers operate on real numbers
//! only; `f64` is the primary type, `f32` is provided for memory-constrained
//! applications.

use num_traits::{Float, FromPrimitive, NumAssign, ToPrimitive};
use std::fmt::Debug;

/// Trait for real scalar types usable in the dense kernels.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default, matches double-precision elimination)
/// - `f32` (for memory-constrained applications)
pub trait RealField:
    Float + NumAssign + FromPrimitive + ToPrimitive + Send + Sync + Debug + 'static
{
    /// Threshold below which a pivot magnitude is treated as singular
    /// by the checked kernel variants.
    #[inline]
    fn singular_threshold() -> Self {
        Self::from_f64(1e-30).unwrap()
    }
}

impl RealField for f64 {}

impl RealField for f32 {}
