use crate::lanes::{SimdLevel, simd_level};
use crate::simd;
use crate::vector::Vector3Aligned;

/// Collapse a 4-lane vector to the scalar `x² + y² + z²`.
///
/// Implementors differ only in the instruction sequence used to fold the
/// lanes; the padding lane never contributes. The batch method performs any
/// capability check once per call rather than once per vector.
pub trait ReduceToScalar {
    /// Short identifier, e.g. for benchmark labels.
    fn name(&self) -> &'static str;

    /// `out[i] = x_i² + y_i² + z_i²` for `i` in `0..n`.
    ///
    /// # Panics
    ///
    /// Panics if `out` or `src` is shorter than `n`.
    fn squared_lengths(&self, out: &mut [f32], src: &[Vector3Aligned], n: usize);

    /// Squared length of a single vector.
    #[inline]
    fn reduce(&self, v: &Vector3Aligned) -> f32 {
        let mut out = [0.0_f32];
        self.squared_lengths(&mut out, core::slice::from_ref(v), 1);
        out[0]
    }
}

/// Plain multiply-add per component, no vector instructions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScalarReduce;

/// Multiply, clear lane 3, then two pairwise horizontal adds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HorizontalAdd;

/// One hardware dot-product instruction masked to lanes 0..3.
///
/// On aarch64, which lacks one, a single across-vector add of the masked
/// products stands in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DotInstruction;

/// Multiply, then shuffle y and z onto lane 0 and add.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShuffleAdd;

impl ReduceToScalar for ScalarReduce {
    fn name(&self) -> &'static str {
        "scalar"
    }

    #[inline]
    fn squared_lengths(&self, out: &mut [f32], src: &[Vector3Aligned], n: usize) {
        for (o, v) in out[..n].iter_mut().zip(&src[..n]) {
            *o = self.reduce(v);
        }
    }

    #[inline]
    fn reduce(&self, v: &Vector3Aligned) -> f32 {
        v.x() * v.x() + v.y() * v.y() + v.z() * v.z()
    }
}

impl ReduceToScalar for HorizontalAdd {
    fn name(&self) -> &'static str {
        "hadd"
    }

    #[inline]
    fn squared_lengths(&self, out: &mut [f32], src: &[Vector3Aligned], n: usize) {
        simd::hadd_dispatch(&src[..n], &mut out[..n]);
    }
}

impl ReduceToScalar for DotInstruction {
    fn name(&self) -> &'static str {
        "dpps"
    }

    #[inline]
    fn squared_lengths(&self, out: &mut [f32], src: &[Vector3Aligned], n: usize) {
        simd::dpps_dispatch(&src[..n], &mut out[..n]);
    }
}

impl ReduceToScalar for ShuffleAdd {
    fn name(&self) -> &'static str {
        "shuffle"
    }

    #[inline]
    fn squared_lengths(&self, out: &mut [f32], src: &[Vector3Aligned], n: usize) {
        simd::shuffle_dispatch(&src[..n], &mut out[..n]);
    }
}

/// Runtime-selectable reduction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    Scalar,
    HorizontalAdd,
    DotInstruction,
    ShuffleAdd,
}

impl Strategy {
    /// Every strategy, scalar first.
    pub const ALL: [Strategy; 4] = [
        Strategy::Scalar,
        Strategy::HorizontalAdd,
        Strategy::DotInstruction,
        Strategy::ShuffleAdd,
    ];

    /// Strategy best suited to the executing CPU.
    ///
    /// `dpps` where SSE4.1 is present, pairwise adds on NEON, scalar
    /// otherwise.
    pub fn preferred() -> Self {
        let level = simd_level();
        if level.has_sse41() {
            Strategy::DotInstruction
        } else if level == SimdLevel::Neon {
            Strategy::HorizontalAdd
        } else {
            Strategy::Scalar
        }
    }
}

impl ReduceToScalar for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::Scalar => ScalarReduce.name(),
            Strategy::HorizontalAdd => HorizontalAdd.name(),
            Strategy::DotInstruction => DotInstruction.name(),
            Strategy::ShuffleAdd => ShuffleAdd.name(),
        }
    }

    #[inline]
    fn squared_lengths(&self, out: &mut [f32], src: &[Vector3Aligned], n: usize) {
        match self {
            Strategy::Scalar => ScalarReduce.squared_lengths(out, src, n),
            Strategy::HorizontalAdd => HorizontalAdd.squared_lengths(out, src, n),
            Strategy::DotInstruction => DotInstruction.squared_lengths(out, src, n),
            Strategy::ShuffleAdd => ShuffleAdd.squared_lengths(out, src, n),
        }
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
