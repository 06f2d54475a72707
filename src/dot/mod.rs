//! Self dot products (squared lengths) of 3-component vectors.
//!
//! Two kernel families compute `x² + y² + z²` for every vector of a
//! collection:
//!
//! - **Per-vector strategies** on [`Vector3Aligned`], behind the
//!   [`ReduceToScalar`] trait. Each strategy folds one 4-lane register to a
//!   scalar with a different instruction sequence: [`HorizontalAdd`],
//!   [`DotInstruction`], [`ShuffleAdd`], plus the plain [`ScalarReduce`].
//!   [`Strategy`] selects one at runtime.
//! - **Lane-width kernels** processing [`LaneWidth`] vectors per step:
//!   [`squared_lengths_aos_lanes`] gathers from unaligned records,
//!   [`squared_lengths_soa`] and [`squared_lengths_tiled`] read their
//!   layouts directly.
//!
//! [`squared_lengths_aos`] is the scalar baseline over unaligned
//! [`Vector3`] records.
//!
//! # Numerical agreement
//!
//! Float addition is not associative, so strategies that fold the lanes in
//! a different order may differ in the last bit. All of them agree with
//! [`ScalarReduce`] within a relative tolerance of `1e-5`.
//!
//! ```
//! use soakit::dot::{ReduceToScalar, Strategy};
//! use soakit::Vector3Aligned;
//!
//! let src = [Vector3Aligned::new(1.0, 2.0, 2.0), Vector3Aligned::new(1.0, 0.0, 0.0)];
//! for strategy in Strategy::ALL {
//!     let mut out = [0.0_f32; 2];
//!     strategy.squared_lengths(&mut out, &src, 2);
//!     assert_eq!(out, [9.0, 1.0], "{}", strategy.name());
//! }
//! ```

mod strategy;


pub use strategy::{DotInstruction, HorizontalAdd, ReduceToScalar, ScalarReduce, ShuffleAdd, Strategy};

use crate::lanes::LaneWidth;
use crate::simd;
use crate::vector::Vector3;

/// `out[i] = src[i].squared_length()` for `i` in `0..n`, scalar code.
///
/// # Panics
///
/// Panics if `out` or `src` is shorter than `n`.
#[inline]
pub fn squared_lengths_aos(out: &mut [f32], src: &[Vector3], n: usize) {
    for (o, v) in out[..n].iter_mut().zip(&src[..n]) {
        *o = v.squared_length();
    }
}

/// Squared lengths of unaligned records, `lanes` vectors per step.
///
/// Complete groups of `lanes` vectors are gathered into component blocks on
/// the stack and run through the vector kernel; the `n % lanes` remainder is
/// finished with scalar code. Results equal [`squared_lengths_aos`] exactly.
///
/// # Panics
///
/// Panics if `out` or `src` is shorter than `n`.
pub fn squared_lengths_aos_lanes(out: &mut [f32], src: &[Vector3], n: usize, lanes: LaneWidth) {
    const GATHER: usize = 64;

    let body = lanes.full_tiles(n) * lanes.get();
    let (src, out) = (&src[..n], &mut out[..n]);

    let (mut x, mut y, mut z) = ([0.0_f32; GATHER], [0.0_f32; GATHER], [0.0_f32; GATHER]);
    for (block, dst) in src[..body].chunks(GATHER).zip(out[..body].chunks_mut(GATHER)) {
        let len = block.len();
        for (i, v) in block.iter().enumerate() {
            x[i] = v.x;
            y[i] = v.y;
            z[i] = v.z;
        }
        simd::dot3_lanes_dispatch(&x[..len], &y[..len], &z[..len], dst);
    }
    squared_lengths_aos(&mut out[body..], &src[body..], n - body);
}

/// Squared lengths from a structure-of-arrays collection.
///
/// Runs `lanes` vectors per step through the widest available vector
/// kernel, then finishes the `n % lanes` remainder with scalar code.
///
/// # Panics
///
/// Panics if `out`, `x`, `y` or `z` is shorter than `n`.
pub fn squared_lengths_soa(out: &mut [f32], x: &[f32], y: &[f32], z: &[f32], n: usize, lanes: LaneWidth) {
    let width = lanes.get();
    let body = lanes.full_tiles(n) * width;
    let (x, y, z) = (&x[..n], &y[..n], &z[..n]);
    let out = &mut out[..n];

    simd::dot3_lanes_dispatch(&x[..body], &y[..body], &z[..body], &mut out[..body]);
    for i in body..n {
        out[i] = x[i] * x[i] + y[i] * y[i] + z[i] * z[i];
    }
}

/// Squared lengths from a tiled array-of-structures-of-arrays buffer.
///
/// `tiles` is laid out as produced by
/// [`aos_to_tiled`](crate::layout::aos_to_tiled): `lanes` x values, then
/// `lanes` y values, then `lanes` z values, per tile. Complete tiles go
/// through the vector kernel; the trailing partial tile, if any, is read with
/// scalar code and its padding slots are never touched.
///
/// # Panics
///
/// Panics if `out.len() < n` or `tiles.len() < lanes.tiled_len(n)`.
pub fn squared_lengths_tiled(out: &mut [f32], tiles: &[f32], n: usize, lanes: LaneWidth) {
    let width = lanes.get();
    let stride = 3 * width;
    let full = lanes.full_tiles(n);
    let tiles = &tiles[..lanes.tiled_len(n)];
    let out = &mut out[..n];

    for (tile, dst) in tiles.chunks_exact(stride).take(full).zip(out.chunks_exact_mut(width)) {
        let (x, rest) = tile.split_at(width);
        let (y, z) = rest.split_at(width);
        simd::dot3_lanes_dispatch(x, y, z, dst);
    }

    let rem = lanes.remainder(n);
    if rem > 0 {
        let tile = &tiles[full * stride..];
        let dst = &mut out[full * width..];
        for i in 0..rem {
            let (x, y, z) = (tile[i], tile[width + i], tile[2 * width + i]);
            dst[i] = x * x + y * y + z * z;
        }
    }
}
