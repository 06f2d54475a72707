//! Scalar fallback implementations for SIMD-dispatched operations.
//!
//! Used for non-`f32` element types, on architectures without a vector
//! unit, and on x86_64 CPUs lacking SSE4.1. The 4-lane strategy emulations
//! reproduce the exact addition order of the instruction sequences they
//! stand in for.

use crate::traits::Scalar;
use crate::vector::Vector3Aligned;

/// Element-wise addition: out[i] = a[i] + b[i].
#[inline]
pub fn add_slices<T: Scalar>(a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    for i in 0..a.len() {
        out[i] = a[i] + b[i];
    }
}

/// Squared lengths from three parallel component slices:
/// out[i] = x[i]² + y[i]² + z[i]².
#[inline]
pub fn dot3_lanes(x: &[f32], y: &[f32], z: &[f32], out: &mut [f32]) {
    debug_assert_eq!(x.len(), out.len());
    debug_assert_eq!(y.len(), out.len());
    debug_assert_eq!(z.len(), out.len());
    for i in 0..out.len() {
        out[i] = x[i] * x[i] + y[i] * y[i] + z[i] * z[i];
    }
}

/// Pairwise fold of the masked lane products: `(xx + yy) + (zz + 0)`.
///
/// This is the order produced by two `hadd` passes and by `dpps`.
#[inline]
pub fn dp3_pairwise(v: &Vector3Aligned) -> f32 {
    let [x, y, z, _] = *v.as_array();
    (x * x + y * y) + (z * z + 0.0)
}

/// Shuffle-and-add fold: `xx + (yy + zz)`.
#[inline]
pub fn dp3_shuffle(v: &Vector3Aligned) -> f32 {
    let [x, y, z, _] = *v.as_array();
    x * x + (y * y + z * z)
}

/// Batch form of [`dp3_pairwise`].
#[inline]
pub fn squared_lengths_pairwise(src: &[Vector3Aligned], out: &mut [f32]) {
    debug_assert_eq!(src.len(), out.len());
    for (o, v) in out.iter_mut().zip(src) {
        *o = dp3_pairwise(v);
    }
}

/// Batch form of [`dp3_shuffle`].
#[inline]
pub fn squared_lengths_shuffle(src: &[Vector3Aligned], out: &mut [f32]) {
    debug_assert_eq!(src.len(), out.len());
    for (o, v) in out.iter_mut().zip(src) {
        *o = dp3_shuffle(v);
    }
}
