//! Conversions between the three physical layouts of a vector collection.
//!
//! | Layout | Storage for `n` vectors |
//! |--------|-------------------------|
//! | [`Layout::ArrayOfStructures`] | `[Vector3]`, `x y z x y z ...` |
//! | [`Layout::StructureOfArrays`] | three `[f32]` of length `n` |
//! | [`Layout::TiledArrayOfStructuresOfArrays`] | one `[f32]` of `lanes.tiled_len(n)` |
//!
//! In the tiled layout each tile holds `lanes` vectors as `lanes` x values,
//! then `lanes` y values, then `lanes` z values, so a single vector load
//! gathers one component of a whole tile.
//!
//! # Partial tiles
//!
//! When `n` is not a multiple of the lane width, the last tile is padded:
//! its unused x, y and z slots are set to [`TILE_PAD`]. The tiled buffer
//! therefore always has room for [`LaneWidth::tiles`] complete tiles, no
//! vector is ever dropped, and [`tiled_to_aos`] reproduces the input
//! exactly for every `n`.
//!
//! ```
//! use soakit::layout::{TILE_PAD, aos_to_tiled, tiled_to_aos};
//! use soakit::{LaneWidth, Vector3};
//!
//! let lanes = LaneWidth::new(2).unwrap();
//! let src = [Vector3::new(1.0, 2.0, 3.0), Vector3::new(4.0, 5.0, 6.0), Vector3::new(7.0, 8.0, 9.0)];
//!
//! let mut tiles = [f32::NAN; 12];
//! aos_to_tiled(&src, &mut tiles, 3, lanes);
//! assert_eq!(tiles, [1.0, 4.0, 2.0, 5.0, 3.0, 6.0, 7.0, TILE_PAD, 8.0, TILE_PAD, 9.0, TILE_PAD]);
//!
//! let mut back = [Vector3::ZERO; 3];
//! tiled_to_aos(&tiles, &mut back, 3, lanes);
//! assert_eq!(back, src);
//! ```

#[cfg(test)]
mod tests;

use crate::lanes::LaneWidth;
use crate::vector::{Vector3, Vector3Aligned};

/// Filler written into the unused slots of a trailing partial tile.
///
/// Zero contributes nothing to a sum or dot product over the padding.
pub const TILE_PAD: f32 = 0.0;

/// Physical arrangement of a vector collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    ArrayOfStructures,
    StructureOfArrays,
    TiledArrayOfStructuresOfArrays,
}

impl Layout {
    /// Number of `f32` slots needed to store `n` vectors.
    ///
    /// `lanes` only matters for the tiled layout, which rounds up to whole
    /// tiles.
    #[inline]
    pub const fn scalars_required(self, n: usize, lanes: LaneWidth) -> usize {
        match self {
            Layout::ArrayOfStructures | Layout::StructureOfArrays => 3 * n,
            Layout::TiledArrayOfStructuresOfArrays => lanes.tiled_len(n),
        }
    }
}

/// De-interleave `src[0..n]` into three component slices.
///
/// # Panics
///
/// Panics if any buffer is shorter than `n`.
pub fn aos_to_soa(src: &[Vector3], x: &mut [f32], y: &mut [f32], z: &mut [f32], n: usize) {
    let (x, y, z) = (&mut x[..n], &mut y[..n], &mut z[..n]);
    for (i, v) in src[..n].iter().enumerate() {
        x[i] = v.x;
        y[i] = v.y;
        z[i] = v.z;
    }
}

/// Interleave three component slices back into `dst[0..n]`.
///
/// # Panics
///
/// Panics if any buffer is shorter than `n`.
pub fn soa_to_aos(x: &[f32], y: &[f32], z: &[f32], dst: &mut [Vector3], n: usize) {
    let (x, y, z) = (&x[..n], &y[..n], &z[..n]);
    for (i, v) in dst[..n].iter_mut().enumerate() {
        *v = Vector3::new(x[i], y[i], z[i]);
    }
}

/// Tile `src[0..n]` into `dst`, padding a trailing partial tile.
///
/// Writes exactly `lanes.tiled_len(n)` floats.
///
/// # Panics
///
/// Panics if `src.len() < n` or `dst.len() < lanes.tiled_len(n)`.
pub fn aos_to_tiled(src: &[Vector3], dst: &mut [f32], n: usize, lanes: LaneWidth) {
    let width = lanes.get();
    let dst = &mut dst[..lanes.tiled_len(n)];

    for (tile, vectors) in dst.chunks_exact_mut(3 * width).zip(src[..n].chunks(width)) {
        let (tx, rest) = tile.split_at_mut(width);
        let (ty, tz) = rest.split_at_mut(width);
        for (i, v) in vectors.iter().enumerate() {
            tx[i] = v.x;
            ty[i] = v.y;
            tz[i] = v.z;
        }
        for i in vectors.len()..width {
            tx[i] = TILE_PAD;
            ty[i] = TILE_PAD;
            tz[i] = TILE_PAD;
        }
    }
}

/// Untile the first `n` vectors of `src` into `dst[0..n]`.
///
/// Padding slots of a trailing partial tile are ignored.
///
/// # Panics
///
/// Panics if `dst.len() < n` or `src.len() < lanes.tiled_len(n)`.
pub fn tiled_to_aos(src: &[f32], dst: &mut [Vector3], n: usize, lanes: LaneWidth) {
    let width = lanes.get();
    let src = &src[..lanes.tiled_len(n)];

    for (tile, vectors) in src.chunks_exact(3 * width).zip(dst[..n].chunks_mut(width)) {
        for (i, v) in vectors.iter_mut().enumerate() {
            *v = Vector3::new(tile[i], tile[width + i], tile[2 * width + i]);
        }
    }
}

/// Copy `src[0..n]` into 16-byte aligned 4-lane vectors (`w = PAD_LANE`).
///
/// # Panics
///
/// Panics if either buffer is shorter than `n`.
pub fn aos_to_aligned(src: &[Vector3], dst: &mut [Vector3Aligned], n: usize) {
    for (d, &s) in dst[..n].iter_mut().zip(&src[..n]) {
        *d = Vector3Aligned::from(s);
    }
}

/// Drop the padding lane of `src[0..n]`.
///
/// # Panics
///
/// Panics if either buffer is shorter than `n`.
pub fn aligned_to_aos(src: &[Vector3Aligned], dst: &mut [Vector3], n: usize) {
    for (d, &s) in dst[..n].iter_mut().zip(&src[..n]) {
        *d = Vector3::from(s);
    }
}
