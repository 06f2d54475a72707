//! Reductions over flat numeric sequences.
//!
//! Every kernel takes an explicit element count `n` and touches only the
//! first `n` elements of each buffer. Buffers shorter than `n` panic on the
//! slice bound; use [`checked`](crate::checked) to get an error instead.
//!
//! # Accumulation order
//!
//! [`sum`], [`min`], [`max`] and [`average`] fold strictly left to right
//! with a single accumulator. For floats this order fixes the rounding of
//! the result. The `*_lanewise` kernels ([`sum_lanewise`], [`min_lanewise`],
//! [`max_lanewise`], [`average_lanewise`]) trade it for independent per-lane
//! accumulators.
//!
//! # Examples
//!
//! ```
//! use soakit::reduce::{add_elements, average, max, min, sum};
//!
//! let a = [1.0_f32, 2.0, 3.0, 4.0];
//! assert_eq!(sum(&a, 4), 10.0);
//! assert_eq!(min(&a, 4), 1.0);
//! assert_eq!(max(&a, 4), 4.0);
//! assert_eq!(average(&a, 4), 2.5);
//!
//! let mut out = [0.0_f32; 4];
//! add_elements(&mut out, &a, &a, 4);
//! assert_eq!(out, [2.0, 4.0, 6.0, 8.0]);
//! ```


use crate::lanes::LaneWidth;
use crate::simd;
use crate::traits::{FloatScalar, OrderedScalar, Scalar};

/// A binary fold with an identity element.
///
/// Implementations are zero-sized markers so that [`fold_in_order`]
/// monomorphizes into the same loop a hand-written kernel would be.
pub trait Reducer<T: Copy> {
    /// Starting value of the accumulator.
    fn identity() -> T;

    /// Fold one more value into the accumulator.
    fn combine(acc: T, value: T) -> T;
}

/// Running sum, starting from zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Add;

/// Running minimum, starting from the largest finite value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

/// Running maximum, starting from the smallest finite value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

impl<T: Scalar> Reducer<T> for Add {
    #[inline(always)]
    fn identity() -> T {
        T::zero()
    }

    #[inline(always)]
    fn combine(acc: T, value: T) -> T {
        acc + value
    }
}

impl<T: OrderedScalar> Reducer<T> for Min {
    #[inline(always)]
    fn identity() -> T {
        T::max_value()
    }

    // Strict comparison keeps the first of equal values and skips NaN.
    #[inline(always)]
    fn combine(acc: T, value: T) -> T {
        if value < acc { value } else { acc }
    }
}

impl<T: OrderedScalar> Reducer<T> for Max {
    #[inline(always)]
    fn identity() -> T {
        T::min_value()
    }

    #[inline(always)]
    fn combine(acc: T, value: T) -> T {
        if value > acc { value } else { acc }
    }
}

/// Fold `a[0..n]` left to right with a single accumulator.
///
/// # Panics
///
/// Panics if `a.len() < n`.
#[inline]
pub fn fold_in_order<T: Copy, R: Reducer<T>>(a: &[T], n: usize) -> T {
    let mut acc = R::identity();
    for &value in &a[..n] {
        acc = R::combine(acc, value);
    }
    acc
}

/// Apply `f` element-wise: `out[i] = f(a[i], b[i])` for `i` in `0..n`.
///
/// # Panics
///
/// Panics if any buffer is shorter than `n`.
#[inline]
pub fn zip_map_into<T: Copy, F: Fn(T, T) -> T>(out: &mut [T], a: &[T], b: &[T], n: usize, f: F) {
    for ((o, &x), &y) in out[..n].iter_mut().zip(&a[..n]).zip(&b[..n]) {
        *o = f(x, y);
    }
}

/// `out[i] = a[i] + b[i]` for `i` in `0..n`.
///
/// Vectorized for `f32`; the result is identical to the scalar loop.
///
/// # Panics
///
/// Panics if any buffer is shorter than `n`.
#[inline]
pub fn add_elements<T: Scalar>(out: &mut [T], a: &[T], b: &[T], n: usize) {
    simd::add_slices_dispatch(&a[..n], &b[..n], &mut out[..n]);
}

/// `a[0] + a[1] + ... + a[n-1]`, accumulated in index order.
///
/// # Panics
///
/// Panics if `a.len() < n`.
#[inline]
pub fn sum<T: Scalar>(a: &[T], n: usize) -> T {
    fold_in_order::<T, Add>(a, n)
}

/// Smallest of `a[0..n]`; `T::max_value()` when `n == 0`.
///
/// NaN elements never compare smaller and are skipped.
///
/// # Panics
///
/// Panics if `a.len() < n`.
#[inline]
pub fn min<T: OrderedScalar>(a: &[T], n: usize) -> T {
    fold_in_order::<T, Min>(a, n)
}

/// Largest of `a[0..n]`; `T::min_value()` when `n == 0`.
///
/// # Panics
///
/// Panics if `a.len() < n`.
#[inline]
pub fn max<T: OrderedScalar>(a: &[T], n: usize) -> T {
    fold_in_order::<T, Max>(a, n)
}

/// `sum(a, n) / n`.
///
/// `n == 0` is not guarded: the result is `0 / 0`, i.e. NaN.
///
/// # Panics
///
/// Panics if `a.len() < n`.
#[inline]
pub fn average<T: FloatScalar>(a: &[T], n: usize) -> T {
    sum(a, n) / T::from_count(n)
}

/// Fold `a[0..n]` with `lanes` independent partial accumulators.
///
/// Element `i` goes to accumulator `i % lanes`; the partials are then folded
/// in lane order. This is the reduction shape of a `lanes`-wide vector loop.
/// Widths above 64 use 64 accumulators.
///
/// # Panics
///
/// Panics if `a.len() < n`.
pub fn fold_lanewise<T: Copy, R: Reducer<T>>(a: &[T], n: usize, lanes: LaneWidth) -> T {
    const MAX_PARTIALS: usize = 64;

    let a = &a[..n];
    let width = lanes.get().min(MAX_PARTIALS);
    let mut partials = [R::identity(); MAX_PARTIALS];
    let mut chunks = a.chunks_exact(width);
    for chunk in &mut chunks {
        for (p, &value) in partials.iter_mut().zip(chunk) {
            *p = R::combine(*p, value);
        }
    }
    for (p, &value) in partials.iter_mut().zip(chunks.remainder()) {
        *p = R::combine(*p, value);
    }
    fold_in_order::<T, R>(&partials, width)
}

/// Sum with `lanes` independent partial accumulators.
///
/// Does NOT reproduce the rounding of [`sum`].
///
/// # Panics
///
/// Panics if `a.len() < n`.
#[inline]
pub fn sum_lanewise<T: Scalar>(a: &[T], n: usize, lanes: LaneWidth) -> T {
    fold_lanewise::<T, Add>(a, n, lanes)
}

/// Minimum with `lanes` independent partial accumulators.
///
/// Same value as [`min`]; of two equal values (`-0.0` and `0.0`) either may
/// be returned.
///
/// # Panics
///
/// Panics if `a.len() < n`.
#[inline]
pub fn min_lanewise<T: OrderedScalar>(a: &[T], n: usize, lanes: LaneWidth) -> T {
    fold_lanewise::<T, Min>(a, n, lanes)
}

/// Maximum with `lanes` independent partial accumulators.
///
/// # Panics
///
/// Panics if `a.len() < n`.
#[inline]
pub fn max_lanewise<T: OrderedScalar>(a: &[T], n: usize, lanes: LaneWidth) -> T {
    fold_lanewise::<T, Max>(a, n, lanes)
}

/// `sum_lanewise(a, n, lanes) / n`. NaN when `n == 0`.
///
/// # Panics
///
/// Panics if `a.len() < n`.
#[inline]
pub fn average_lanewise<T: FloatScalar>(a: &[T], n: usize, lanes: LaneWidth) -> T {
    sum_lanewise(a, n, lanes) / T::from_count(n)
}
