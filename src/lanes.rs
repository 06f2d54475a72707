//! Hardware vector width as a runtime capability.
//!
//! [`simd_level`] probes the executing CPU once (with the `std` feature) and
//! [`LaneWidth::native`] derives the tile size used by the tiled layout and
//! the lane-width kernels from it. Without `std` the probe reads the
//! compile-time target features instead.
//!
//! ```
//! use soakit::LaneWidth;
//!
//! let lanes = LaneWidth::new(4).unwrap();
//! assert_eq!(lanes.full_tiles(10), 2);
//! assert_eq!(lanes.tiles(10), 3);
//! assert_eq!(lanes.remainder(10), 2);
//! assert_eq!(lanes.tiled_len(10), 36);
//!
//! assert!(LaneWidth::native().get().is_power_of_two());
//! ```

/// Widest vector instruction set usable on the executing CPU.
///
/// Each x86 level is only reported when every narrower level below it is
/// present as well, so `Avx` implies SSE4.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimdLevel {
    /// AVX-512F (`x86_64` only).
    Avx512,
    /// AVX (`x86_64` only).
    Avx,
    /// SSE4.1, which brings `hadd`, `insertps` and `dpps` (`x86_64` only).
    Sse41,
    /// SSE2 baseline (`x86_64` only).
    Sse2,
    /// NEON (aarch64, always present).
    Neon,
    /// No vector unit in use.
    Scalar,
}

impl SimdLevel {
    /// Number of `f32` lanes in one native vector register.
    #[inline]
    pub const fn f32_lanes(self) -> usize {
        match self {
            SimdLevel::Avx512 => 16,
            SimdLevel::Avx => 8,
            SimdLevel::Sse41 | SimdLevel::Sse2 | SimdLevel::Neon => 4,
            SimdLevel::Scalar => 1,
        }
    }

    /// Whether the SSE4.1 dot-product kernels may run.
    #[inline]
    pub const fn has_sse41(self) -> bool {
        matches!(self, SimdLevel::Avx512 | SimdLevel::Avx | SimdLevel::Sse41)
    }

    /// Whether the 256-bit AVX kernels may run.
    #[inline]
    pub const fn has_avx(self) -> bool {
        matches!(self, SimdLevel::Avx512 | SimdLevel::Avx)
    }
}

#[cfg(feature = "std")]
static SIMD_LEVEL: std::sync::OnceLock<SimdLevel> = std::sync::OnceLock::new();

fn detect_simd_level() -> SimdLevel {
    #[cfg(all(target_arch = "x86_64", feature = "std"))]
    {
        if !std::is_x86_feature_detected!("sse4.1") {
            return SimdLevel::Sse2;
        }
        if !std::is_x86_feature_detected!("avx") {
            return SimdLevel::Sse41;
        }
        if std::is_x86_feature_detected!("avx512f") {
            return SimdLevel::Avx512;
        }
        return SimdLevel::Avx;
    }

    #[cfg(all(target_arch = "x86_64", not(feature = "std")))]
    {
        if !cfg!(target_feature = "sse4.1") {
            return SimdLevel::Sse2;
        }
        if !cfg!(target_feature = "avx") {
            return SimdLevel::Sse41;
        }
        if cfg!(target_feature = "avx512f") {
            return SimdLevel::Avx512;
        }
        return SimdLevel::Avx;
    }

    #[cfg(target_arch = "aarch64")]
    {
        return SimdLevel::Neon;
    }

    #[allow(unreachable_code)]
    SimdLevel::Scalar
}

/// The SIMD level of the executing CPU.
///
/// Probed once and cached when `std` is enabled.
#[inline]
pub fn simd_level() -> SimdLevel {
    #[cfg(feature = "std")]
    {
        *SIMD_LEVEL.get_or_init(detect_simd_level)
    }
    #[cfg(not(feature = "std"))]
    {
        detect_simd_level()
    }
}

/// Number of scalar lanes processed per vector operation.
///
/// Always a non-zero power of two. Determines the tile size of
/// [`Layout::TiledArrayOfStructuresOfArrays`](crate::Layout).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LaneWidth(usize);

impl LaneWidth {
    /// One lane: the tiled layout degenerates to array-of-structures.
    pub const SCALAR: Self = Self(1);

    /// Returns `None` unless `lanes` is a non-zero power of two.
    #[inline]
    pub const fn new(lanes: usize) -> Option<Self> {
        if lanes.is_power_of_two() {
            Some(Self(lanes))
        } else {
            None
        }
    }

    /// Lane width of the executing CPU's widest `f32` vector register.
    #[inline]
    pub fn native() -> Self {
        Self(simd_level().f32_lanes())
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of complete tiles in `n` vectors.
    #[inline]
    pub const fn full_tiles(self, n: usize) -> usize {
        n / self.0
    }

    /// Number of tiles needed to hold `n` vectors, counting a partial one.
    #[inline]
    pub const fn tiles(self, n: usize) -> usize {
        n.div_ceil(self.0)
    }

    /// Vectors left over after the complete tiles.
    #[inline]
    pub const fn remainder(self, n: usize) -> usize {
        n % self.0
    }

    /// Floats in a tiled buffer holding `n` vectors (partial tile padded).
    #[inline]
    pub const fn tiled_len(self, n: usize) -> usize {
        self.tiles(n) * 3 * self.0
    }
}

impl Default for LaneWidth {
    #[inline]
    fn default() -> Self {
        Self::native()
    }
}
