//! Validating wrappers around the kernels.
//!
//! The kernels themselves treat buffer lengths as caller obligations and
//! panic on a short slice. The `try_*` functions here check every
//! precondition first and report a [`KernelError`] instead, then call the
//! unchecked kernel, so results are identical whenever they succeed.
//!
//! ```
//! use soakit::checked::{KernelError, try_average};
//!
//! assert_eq!(try_average(&[1.0_f32, 2.0], 2), Ok(1.5));
//! assert_eq!(try_average::<f32>(&[], 0), Err(KernelError::EmptyInput));
//! assert_eq!(
//!     try_average(&[1.0_f32], 2),
//!     Err(KernelError::LengthMismatch { needed: 2, actual: 1 })
//! );
//! ```

use crate::dot;
use crate::lanes::LaneWidth;
use crate::layout;
use crate::reduce;
use crate::traits::{FloatScalar, OrderedScalar, Scalar};
use crate::vector::Vector3;

/// Precondition violations detected by the `try_*` wrappers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// A buffer holds fewer elements than the operation needs.
    LengthMismatch { needed: usize, actual: usize },
    /// The operation is undefined for zero elements.
    EmptyInput,
}

impl core::fmt::Display for KernelError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            KernelError::LengthMismatch { needed, actual } => {
                write!(f, "buffer too short: need {needed} elements, got {actual}")
            }
            KernelError::EmptyInput => write!(f, "operation needs at least one element"),
        }
    }
}

#[inline]
fn require(actual: usize, needed: usize) -> Result<(), KernelError> {
    if actual < needed {
        Err(KernelError::LengthMismatch { needed, actual })
    } else {
        Ok(())
    }
}

/// Checked [`reduce::add_elements`].
pub fn try_add_elements<T: Scalar>(out: &mut [T], a: &[T], b: &[T], n: usize) -> Result<(), KernelError> {
    require(out.len(), n)?;
    require(a.len(), n)?;
    require(b.len(), n)?;
    reduce::add_elements(out, a, b, n);
    Ok(())
}

/// Checked [`reduce::sum`].
pub fn try_sum<T: Scalar>(a: &[T], n: usize) -> Result<T, KernelError> {
    require(a.len(), n)?;
    Ok(reduce::sum(a, n))
}

/// Checked [`reduce::min`]. Rejects `n == 0`, which has no minimum.
pub fn try_min<T: OrderedScalar>(a: &[T], n: usize) -> Result<T, KernelError> {
    if n == 0 {
        return Err(KernelError::EmptyInput);
    }
    require(a.len(), n)?;
    Ok(reduce::min(a, n))
}

/// Checked [`reduce::max`]. Rejects `n == 0`, which has no maximum.
pub fn try_max<T: OrderedScalar>(a: &[T], n: usize) -> Result<T, KernelError> {
    if n == 0 {
        return Err(KernelError::EmptyInput);
    }
    require(a.len(), n)?;
    Ok(reduce::max(a, n))
}

/// Checked [`reduce::average`]. Rejects `n == 0` instead of returning NaN.
pub fn try_average<T: FloatScalar>(a: &[T], n: usize) -> Result<T, KernelError> {
    if n == 0 {
        return Err(KernelError::EmptyInput);
    }
    require(a.len(), n)?;
    Ok(reduce::average(a, n))
}

/// Checked [`layout::aos_to_soa`].
pub fn try_aos_to_soa(
    src: &[Vector3],
    x: &mut [f32],
    y: &mut [f32],
    z: &mut [f32],
    n: usize,
) -> Result<(), KernelError> {
    require(src.len(), n)?;
    require(x.len(), n)?;
    require(y.len(), n)?;
    require(z.len(), n)?;
    layout::aos_to_soa(src, x, y, z, n);
    Ok(())
}

/// Checked [`layout::aos_to_tiled`]. `dst` must hold `lanes.tiled_len(n)`.
pub fn try_aos_to_tiled(src: &[Vector3], dst: &mut [f32], n: usize, lanes: LaneWidth) -> Result<(), KernelError> {
    require(src.len(), n)?;
    require(dst.len(), lanes.tiled_len(n))?;
    layout::aos_to_tiled(src, dst, n, lanes);
    Ok(())
}

/// Checked [`layout::tiled_to_aos`]. `src` must hold `lanes.tiled_len(n)`.
pub fn try_tiled_to_aos(src: &[f32], dst: &mut [Vector3], n: usize, lanes: LaneWidth) -> Result<(), KernelError> {
    require(src.len(), lanes.tiled_len(n))?;
    require(dst.len(), n)?;
    layout::tiled_to_aos(src, dst, n, lanes);
    Ok(())
}

/// Checked [`dot::squared_lengths_soa`].
pub fn try_squared_lengths_soa(
    out: &mut [f32],
    x: &[f32],
    y: &[f32],
    z: &[f32],
    n: usize,
    lanes: LaneWidth,
) -> Result<(), KernelError> {
    require(out.len(), n)?;
    require(x.len(), n)?;
    require(y.len(), n)?;
    require(z.len(), n)?;
    dot::squared_lengths_soa(out, x, y, z, n, lanes);
    Ok(())
}

/// Checked [`dot::squared_lengths_tiled`].
pub fn try_squared_lengths_tiled(out: &mut [f32], tiles: &[f32], n: usize, lanes: LaneWidth) -> Result<(), KernelError> {
    require(out.len(), n)?;
    require(tiles.len(), lanes.tiled_len(n))?;
    dot::squared_lengths_tiled(out, tiles, n, lanes);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_errors_report_sizes() {
        let mut out = [0.0_f32; 2];
        let err = try_add_elements(&mut out, &[1.0; 3], &[1.0; 3], 3).unwrap_err();
        assert_eq!(err, KernelError::LengthMismatch { needed: 3, actual: 2 });
        assert_eq!(try_sum(&[1_u32, 2], 3), Err(KernelError::LengthMismatch { needed: 3, actual: 2 }));
    }

    #[test]
    fn empty_inputs() {
        let empty: [f64; 0] = [];
        assert_eq!(try_min(&empty, 0), Err(KernelError::EmptyInput));
        assert_eq!(try_max(&empty, 0), Err(KernelError::EmptyInput));
        assert_eq!(try_average(&empty, 0), Err(KernelError::EmptyInput));
        assert_eq!(try_sum(&empty, 0), Ok(0.0));
    }

    #[test]
    fn success_matches_unchecked() {
        let a = [1.0_f32, 2.0, 3.0, 4.0];
        assert_eq!(try_sum(&a, 4), Ok(10.0));
        assert_eq!(try_min(&a, 4), Ok(1.0));
        assert_eq!(try_max(&a, 4), Ok(4.0));
        assert_eq!(try_average(&a, 4), Ok(2.5));

        let mut out = [0.0_f32; 4];
        try_add_elements(&mut out, &a, &a, 4).unwrap();
        assert_eq!(out, [2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn tiled_checks_padded_length() {
        let lanes = LaneWidth::new(4).unwrap();
        let src = [Vector3::new(1.0, 2.0, 3.0); 5];
        let mut short = [0.0_f32; 15];
        assert_eq!(
            try_aos_to_tiled(&src, &mut short, 5, lanes),
            Err(KernelError::LengthMismatch { needed: 24, actual: 15 })
        );

        let mut tiles = [0.0_f32; 24];
        try_aos_to_tiled(&src, &mut tiles, 5, lanes).unwrap();

        let mut lengths = [0.0_f32; 5];
        try_squared_lengths_tiled(&mut lengths, &tiles, 5, lanes).unwrap();
        assert_eq!(lengths, [14.0; 5]);
        assert!(try_squared_lengths_tiled(&mut lengths, &tiles[..20], 5, lanes).is_err());

        let mut back = [Vector3::ZERO; 5];
        try_tiled_to_aos(&tiles, &mut back, 5, lanes).unwrap();
        assert_eq!(back, src);
    }

    #[test]
    fn soa_checks_every_component() {
        let src = [Vector3::new(3.0, 4.0, 0.0); 4];
        let (mut x, mut y, mut z) = ([0.0; 4], [0.0; 4], [0.0; 3]);
        assert_eq!(
            try_aos_to_soa(&src, &mut x, &mut y, &mut z, 4),
            Err(KernelError::LengthMismatch { needed: 4, actual: 3 })
        );

        let mut z = [0.0; 4];
        try_aos_to_soa(&src, &mut x, &mut y, &mut z, 4).unwrap();
        let mut out = [0.0_f32; 4];
        try_squared_lengths_soa(&mut out, &x, &y, &z, 4, LaneWidth::native()).unwrap();
        assert_eq!(out, [25.0; 4]);
    }

    #[test]
    fn display_messages() {
        let e = KernelError::LengthMismatch { needed: 8, actual: 3 };
        assert_eq!(e.to_string(), "buffer too short: need 8 elements, got 3");
        assert_eq!(KernelError::EmptyInput.to_string(), "operation needs at least one element");
    }
}
