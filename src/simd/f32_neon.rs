//! NEON-accelerated f32 kernels for aarch64.
//!
//! NEON provides 128-bit registers → 4×f32 lanes. NEON has no dot-product
//! instruction for f32, so the "fused" strategy uses the across-vector add
//! `vaddvq_f32` on the masked products instead.

use core::arch::aarch64::*;

use crate::vector::Vector3Aligned;

/// Element-wise addition: out[i] = a[i] + b[i].
#[inline]
pub fn add_slices(a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 4;

    unsafe {
        for i in 0..chunks {
            let offset = i * 4;
            let va = vld1q_f32(a.as_ptr().add(offset));
            let vb = vld1q_f32(b.as_ptr().add(offset));
            vst1q_f32(out.as_mut_ptr().add(offset), vaddq_f32(va, vb));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        out[i] = a[i] + b[i];
    }
}

/// Squared lengths of 4 vectors per iteration from SoA component slices.
///
/// Uses separate multiply and add (no `vfmaq`) to match the scalar rounding.
#[inline]
pub fn dot3_lanes(x: &[f32], y: &[f32], z: &[f32], out: &mut [f32]) {
    debug_assert_eq!(x.len(), out.len());
    debug_assert_eq!(y.len(), out.len());
    debug_assert_eq!(z.len(), out.len());
    let n = out.len();
    let chunks = n / 4;

    unsafe {
        for i in 0..chunks {
            let offset = i * 4;
            let vx = vld1q_f32(x.as_ptr().add(offset));
            let vy = vld1q_f32(y.as_ptr().add(offset));
            let vz = vld1q_f32(z.as_ptr().add(offset));
            let xy = vaddq_f32(vmulq_f32(vx, vx), vmulq_f32(vy, vy));
            vst1q_f32(out.as_mut_ptr().add(offset), vaddq_f32(xy, vmulq_f32(vz, vz)));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        out[i] = x[i] * x[i] + y[i] * y[i] + z[i] * z[i];
    }
}

/// `v * v` with lane 3 cleared.
#[inline(always)]
unsafe fn masked_square(v: &Vector3Aligned) -> float32x4_t {
    unsafe {
        let r = vld1q_f32(v.as_ptr());
        vsetq_lane_f32::<3>(0.0, vmulq_f32(r, r))
    }
}

/// Two pairwise adds (`faddp`) fold 4 lanes to lane 0.
#[inline]
pub fn squared_lengths_hadd(src: &[Vector3Aligned], out: &mut [f32]) {
    debug_assert_eq!(src.len(), out.len());
    for (o, v) in out.iter_mut().zip(src) {
        unsafe {
            let sq = masked_square(v);
            let pair = vpaddq_f32(sq, sq);
            *o = vgetq_lane_f32::<0>(vpaddq_f32(pair, pair));
        }
    }
}

/// Single across-vector add of the masked products.
#[inline]
pub fn squared_lengths_dpps(src: &[Vector3Aligned], out: &mut [f32]) {
    debug_assert_eq!(src.len(), out.len());
    for (o, v) in out.iter_mut().zip(src) {
        unsafe {
            *o = vaddvq_f32(masked_square(v));
        }
    }
}

/// Rotate y and z into lane 0 with `ext`, then `x + (y + z)`.
#[inline]
pub fn squared_lengths_shuffle(src: &[Vector3Aligned], out: &mut [f32]) {
    debug_assert_eq!(src.len(), out.len());
    for (o, v) in out.iter_mut().zip(src) {
        unsafe {
            let r = vld1q_f32(v.as_ptr());
            let sq = vmulq_f32(r, r);
            let y = vextq_f32::<1>(sq, sq);
            let z = vextq_f32::<2>(sq, sq);
            *o = vgetq_lane_f32::<0>(vaddq_f32(sq, vaddq_f32(y, z)));
        }
    }
}
