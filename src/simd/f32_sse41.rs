//! SSE4.1 3-component dot products on aligned 4-lane vectors.
//!
//! Three ways of folding `v * v` down to lane 0:
//!
//! | Kernel    | Sequence                                          |
//! |-----------|---------------------------------------------------|
//! | `hadd`    | `mulps`, `insertps` (zero lane 3), `haddps` ×2    |
//! | `dpps`    | single `dpps` with mask `0x71`                    |
//! | `shuffle` | `mulps`, two `shufps` broadcasts, `addss` ×2      |
//!
//! Every function here is compiled with `target_feature(enable = "sse4.1")`
//! and must only be called after `SimdLevel::has_sse41()` returned true.

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;

use crate::vector::Vector3Aligned;

/// `insertps` control: no source lane copied, zero mask = lane 3.
const ZERO_W: i32 = 0x08;
/// `dpps` control: multiply lanes 0..3, write the sum to lane 0.
const DP3_TO_X: i32 = 0x71;
/// `shufps` control broadcasting lane 1 into lane 0.
const SHUF_Y: i32 = 0x01;
/// `shufps` control broadcasting lane 2 into lane 0.
const SHUF_Z: i32 = 0x02;

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn dp3_hadd(a: __m128, b: __m128) -> __m128 {
    let ab = _mm_mul_ps(a, b);
    let ab = _mm_insert_ps::<ZERO_W>(ab, ab);
    let pair = _mm_hadd_ps(ab, ab);
    _mm_hadd_ps(pair, pair)
}

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn dp3_dpps(a: __m128, b: __m128) -> __m128 {
    _mm_dp_ps::<DP3_TO_X>(a, b)
}

#[inline]
#[target_feature(enable = "sse4.1")]
unsafe fn dp3_shuffle(a: __m128, b: __m128) -> __m128 {
    let ab = _mm_mul_ps(a, b);
    let y = _mm_shuffle_ps::<SHUF_Y>(ab, ab);
    let z = _mm_shuffle_ps::<SHUF_Z>(ab, ab);
    _mm_add_ss(ab, _mm_add_ss(y, z))
}

/// Squared length of every vector via two horizontal adds.
#[target_feature(enable = "sse4.1")]
pub unsafe fn squared_lengths_hadd(src: &[Vector3Aligned], out: &mut [f32]) {
    debug_assert_eq!(src.len(), out.len());
    for (o, v) in out.iter_mut().zip(src) {
        unsafe {
            let r = _mm_load_ps(v.as_ptr());
            *o = _mm_cvtss_f32(dp3_hadd(r, r));
        }
    }
}

/// Squared length of every vector via the fused `dpps` instruction.
#[target_feature(enable = "sse4.1")]
pub unsafe fn squared_lengths_dpps(src: &[Vector3Aligned], out: &mut [f32]) {
    debug_assert_eq!(src.len(), out.len());
    for (o, v) in out.iter_mut().zip(src) {
        unsafe {
            let r = _mm_load_ps(v.as_ptr());
            *o = _mm_cvtss_f32(dp3_dpps(r, r));
        }
    }
}

/// Squared length of every vector via shuffles and scalar-lane adds.
#[target_feature(enable = "sse4.1")]
pub unsafe fn squared_lengths_shuffle(src: &[Vector3Aligned], out: &mut [f32]) {
    debug_assert_eq!(src.len(), out.len());
    for (o, v) in out.iter_mut().zip(src) {
        unsafe {
            let r = _mm_load_ps(v.as_ptr());
            *o = _mm_cvtss_f32(dp3_shuffle(r, r));
        }
    }
}
