//! # soakit
//!
//! Data-parallel reduction and dot-product kernels over collections of
//! 3-component vectors, in the three classic memory layouts. `no_std`
//! compatible; the kernels never allocate and only read and write the
//! buffers they are handed.
//!
//! ## Quick start
//!
//! ```
//! use soakit::dot::{ReduceToScalar, Strategy, squared_lengths_tiled};
//! use soakit::layout::{aos_to_aligned, aos_to_tiled};
//! use soakit::{LaneWidth, Vector3, Vector3Aligned};
//!
//! let src = [Vector3::new(1.0, 2.0, 2.0); 5];
//!
//! // Tiled AoSoA, one tile per native vector width.
//! let lanes = LaneWidth::native();
//! let mut tiles = vec![0.0_f32; lanes.tiled_len(src.len())];
//! aos_to_tiled(&src, &mut tiles, src.len(), lanes);
//! let mut out = [0.0_f32; 5];
//! squared_lengths_tiled(&mut out, &tiles, src.len(), lanes);
//! assert_eq!(out, [9.0; 5]);
//!
//! // Aligned 4-lane vectors with the best strategy for this CPU.
//! let mut aligned = [Vector3Aligned::ZERO; 5];
//! aos_to_aligned(&src, &mut aligned, src.len());
//! Strategy::preferred().squared_lengths(&mut out, &aligned, src.len());
//! assert_eq!(out, [9.0; 5]);
//! ```
//!
//! ## Modules
//!
//! - [`reduce`]: `add_elements`, `sum`, `min`, `max`, `average` over flat
//!   slices, built on one generic in-order fold ([`reduce::Reducer`]).
//!   Sums accumulate strictly in index order.
//!
//! - [`vector`]: [`Vector3`] (packed `{x, y, z}`) and [`Vector3Aligned`]
//!   (16-byte aligned 4-lane register image, padding lane = `1.0`).
//!
//! - [`dot`]: squared lengths. Four interchangeable per-vector strategies
//!   behind [`dot::ReduceToScalar`] (scalar, horizontal add, dot
//!   instruction, shuffle-add), plus lane-width kernels reading the SoA and
//!   tiled layouts directly.
//!
//! - [`layout`]: AoS ⇄ SoA, AoS ⇄ tiled AoSoA and AoS ⇄ aligned
//!   conversions. A trailing partial tile is padded with
//!   [`layout::TILE_PAD`].
//!
//! - [`lanes`]: runtime SIMD probe ([`SimdLevel`]) and the [`LaneWidth`]
//!   that sizes tiles.
//!
//! - [`checked`]: `try_*` wrappers returning [`KernelError`] instead of
//!   panicking on short buffers or empty input.
//!
//! - [`traits`]: element bounds: [`Scalar`], [`OrderedScalar`],
//!   [`FloatScalar`].
//!
//! ## Concurrency
//!
//! All kernels are synchronous and stateless. Callers may run them from
//! several threads at once on non-overlapping sub-ranges, e.g. with
//! `chunks_mut`; the borrow checker rules out overlapping writes.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Runtime CPU feature detection, cached after first use |
//!
//! Without `std`, kernel selection follows the compile-time target
//! features (`-C target-cpu=native`, `-C target-feature=+avx` etc.).

#![cfg_attr(not(feature = "std"), no_std)]

pub mod checked;
pub mod dot;
pub mod lanes;
pub mod layout;
pub mod reduce;
mod simd;
pub mod traits;
pub mod vector;

pub use checked::KernelError;
pub use lanes::{LaneWidth, SimdLevel, simd_level};
pub use layout::Layout;
pub use traits::{FloatScalar, OrderedScalar, Scalar};
pub use vector::{Vector3, Vector3Aligned};
