//! SIMD kernels with runtime architecture dispatch.
//!
//! This module is private. The public kernels in [`reduce`](crate::reduce)
//! and [`dot`](crate::dot) route through the `*_dispatch` functions here.
//!
//! ## Dispatch strategy
//!
//! Element-generic entry points use TypeId-based dispatch at monomorphization
//! time: for `f32` the compiler selects SIMD kernels and dead-code-eliminates
//! the fallback; every other element type takes the scalar path.
//!
//! Instruction-set selection happens at runtime through
//! [`simd_level`](crate::lanes::simd_level): AVX > SSE2 for streaming
//! kernels, SSE4.1 for the 4-lane dot-product strategies. Without the `std`
//! feature the probe reads compile-time target features instead.
//!
//! ## Architecture support
//!
//! | Arch      | Streaming kernels | 4-lane dot strategies        |
//! |-----------|-------------------|------------------------------|
//! | `aarch64` | NEON (4 lanes)    | NEON `faddp` / `addv` / `ext`|
//! | `x86_64`  | SSE2 / AVX        | SSE4.1, scalar if absent     |
//! | other     | scalar            | scalar                       |

pub(crate) mod scalar;

#[cfg(target_arch = "aarch64")]
pub(crate) mod f32_neon;

#[cfg(target_arch = "x86_64")]
pub(crate) mod f32_avx;
#[cfg(target_arch = "x86_64")]
pub(crate) mod f32_sse2;
#[cfg(target_arch = "x86_64")]
pub(crate) mod f32_sse41;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
use core::any::TypeId;

#[cfg(target_arch = "x86_64")]
use crate::lanes::simd_level;
use crate::traits::Scalar;
use crate::vector::Vector3Aligned;

/// Dispatch element-wise addition to SIMD or scalar fallback.
///
/// Each output lane depends on one `a[i]` and one `b[i]` only, so the SIMD
/// paths are bit-identical to the scalar loop.
#[inline]
pub(crate) fn add_slices_dispatch<T: Scalar>(a: &[T], b: &[T], out: &mut [T]) {
    #[cfg(target_arch = "aarch64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            f32_neon::add_slices(a, b, out);
            return;
        }
    }
    #[cfg(target_arch = "x86_64")]
    {
        if TypeId::of::<T>() == TypeId::of::<f32>() {
            let a = unsafe { &*(a as *const [T] as *const [f32]) };
            let b = unsafe { &*(b as *const [T] as *const [f32]) };
            let out = unsafe { &mut *(out as *mut [T] as *mut [f32]) };
            if simd_level().has_avx() {
                unsafe { f32_avx::add_slices(a, b, out) };
            } else {
                f32_sse2::add_slices(a, b, out);
            }
            return;
        }
    }
    scalar::add_slices(a, b, out);
}

/// Dispatch the SoA squared-length kernel: out[i] = x[i]² + y[i]² + z[i]².
#[inline]
pub(crate) fn dot3_lanes_dispatch(x: &[f32], y: &[f32], z: &[f32], out: &mut [f32]) {
    #[cfg(target_arch = "aarch64")]
    {
        f32_neon::dot3_lanes(x, y, z, out);
        return;
    }
    #[cfg(target_arch = "x86_64")]
    {
        if simd_level().has_avx() {
            unsafe { f32_avx::dot3_lanes(x, y, z, out) };
        } else {
            f32_sse2::dot3_lanes(x, y, z, out);
        }
        return;
    }
    #[allow(unreachable_code)]
    scalar::dot3_lanes(x, y, z, out);
}

/// Dispatch the two-pass horizontal-add strategy.
#[inline]
pub(crate) fn hadd_dispatch(src: &[Vector3Aligned], out: &mut [f32]) {
    #[cfg(target_arch = "aarch64")]
    {
        f32_neon::squared_lengths_hadd(src, out);
        return;
    }
    #[cfg(target_arch = "x86_64")]
    {
        if simd_level().has_sse41() {
            unsafe { f32_sse41::squared_lengths_hadd(src, out) };
            return;
        }
    }
    #[allow(unreachable_code)]
    scalar::squared_lengths_pairwise(src, out);
}

/// Dispatch the single-instruction dot-product strategy.
#[inline]
pub(crate) fn dpps_dispatch(src: &[Vector3Aligned], out: &mut [f32]) {
    #[cfg(target_arch = "aarch64")]
    {
        f32_neon::squared_lengths_dpps(src, out);
        return;
    }
    #[cfg(target_arch = "x86_64")]
    {
        if simd_level().has_sse41() {
            unsafe { f32_sse41::squared_lengths_dpps(src, out) };
            return;
        }
    }
    #[allow(unreachable_code)]
    scalar::squared_lengths_pairwise(src, out);
}

/// Dispatch the shuffle-and-add strategy.
#[inline]
pub(crate) fn shuffle_dispatch(src: &[Vector3Aligned], out: &mut [f32]) {
    #[cfg(target_arch = "aarch64")]
    {
        f32_neon::squared_lengths_shuffle(src, out);
        return;
    }
    #[cfg(target_arch = "x86_64")]
    {
        if simd_level().has_sse41() {
            unsafe { f32_sse41::squared_lengths_shuffle(src, out) };
            return;
        }
    }
    #[allow(unreachable_code)]
    scalar::squared_lengths_shuffle(src, out);
}
