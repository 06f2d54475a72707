//! AVX-accelerated f32 kernels for x86_64.
//!
//! AVX provides 256-bit registers → 8×f32 lanes. Functions are compiled with
//! `target_feature(enable = "avx")` and dispatched only after the runtime
//! probe reported AVX.

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

/// Element-wise addition: out[i] = a[i] + b[i].
#[target_feature(enable = "avx")]
pub unsafe fn add_slices(a: &[f32], b: &[f32], out: &mut [f32]) {
    debug_assert_eq!(a.len(), b.len());
    debug_assert_eq!(a.len(), out.len());
    let n = a.len();
    let chunks = n / 8;

    unsafe {
        for i in 0..chunks {
            let offset = i * 8;
            let va = _mm256_loadu_ps(a.as_ptr().add(offset));
            let vb = _mm256_loadu_ps(b.as_ptr().add(offset));
            _mm256_storeu_ps(out.as_mut_ptr().add(offset), _mm256_add_ps(va, vb));
        }
    }

    let tail = chunks * 8;
    for i in tail..n {
        out[i] = a[i] + b[i];
    }
}

/// Squared lengths of 8 vectors per iteration from SoA component slices.
#[target_feature(enable = "avx")]
pub unsafe fn dot3_lanes(x: &[f32], y: &[f32], z: &[f32], out: &mut [f32]) {
    debug_assert_eq!(x.len(), out.len());
    debug_assert_eq!(y.len(), out.len());
    debug_assert_eq!(z.len(), out.len());
    let n = out.len();
    let chunks = n / 8;

    unsafe {
        for i in 0..chunks {
            let offset = i * 8;
            let vx = _mm256_loadu_ps(x.as_ptr().add(offset));
            let vy = _mm256_loadu_ps(y.as_ptr().add(offset));
            let vz = _mm256_loadu_ps(z.as_ptr().add(offset));
            let xy = _mm256_add_ps(_mm256_mul_ps(vx, vx), _mm256_mul_ps(vy, vy));
            _mm256_storeu_ps(out.as_mut_ptr().add(offset), _mm256_add_ps(xy, _mm256_mul_ps(vz, vz)));
        }
    }

    let tail = chunks * 8;
    for i in tail..n {
        out[i] = x[i] * x[i] + y[i] * y[i] + z[i] * z[i];
    }
}
