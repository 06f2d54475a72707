//! SSE2-accelerated f32 kernels for x86_64.
//!
//! SSE2 provides 128-bit registers → 4×f32 lanes and is part of the x86_64
//! baseline, so these kernels need no runtime check.

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

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
            let va = _mm_loadu_ps(a.as_ptr().add(offset));
            let vb = _mm_loadu_ps(b.as_ptr().add(offset));
            _mm_storeu_ps(out.as_mut_ptr().add(offset), _mm_add_ps(va, vb));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        out[i] = a[i] + b[i];
    }
}

/// Squared lengths of 4 vectors per iteration from SoA component slices.
///
/// Lane `i` computes `(x*x + y*y) + z*z`, the same order as the scalar
/// kernel, so results are bit-identical to it.
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
            let vx = _mm_loadu_ps(x.as_ptr().add(offset));
            let vy = _mm_loadu_ps(y.as_ptr().add(offset));
            let vz = _mm_loadu_ps(z.as_ptr().add(offset));
            let xy = _mm_add_ps(_mm_mul_ps(vx, vx), _mm_mul_ps(vy, vy));
            _mm_storeu_ps(out.as_mut_ptr().add(offset), _mm_add_ps(xy, _mm_mul_ps(vz, vz)));
        }
    }

    let tail = chunks * 4;
    for i in tail..n {
        out[i] = x[i] * x[i] + y[i] * y[i] + z[i] * z[i];
    }
}
