//! Three-component vector types.
//!
//! [`Vector3`] is the plain array-of-structures record: three packed `f32`
//! with no alignment beyond that of `f32`. [`Vector3Aligned`] is the
//! register-shaped variant used by the 4-lane dot-product strategies: four
//! lanes on a 16-byte boundary, with the last lane carrying [`PAD_LANE`].
//!
//! ```
//! use soakit::{Vector3, Vector3Aligned};
//!
//! let v = Vector3::new(1.0, 2.0, 2.0);
//! assert_eq!(v.squared_length(), 9.0);
//!
//! let a = Vector3Aligned::from(v);
//! assert_eq!(a.as_array(), &[1.0, 2.0, 2.0, 1.0]);
//! assert_eq!(Vector3::from(a), v);
//! ```

/// Value stored in the unused fourth lane of [`Vector3Aligned`].
pub const PAD_LANE: f32 = 1.0;

/// Unaligned `{x, y, z}` record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[repr(C)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Self dot product `x² + y² + z²`, accumulated left to right.
    #[inline]
    pub fn squared_length(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

impl From<[f32; 3]> for Vector3 {
    #[inline]
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3> for [f32; 3] {
    #[inline]
    fn from(v: Vector3) -> Self {
        [v.x, v.y, v.z]
    }
}

/// 16-byte aligned 4-lane vector: `[x, y, z, w]` with `w = PAD_LANE`.
///
/// The alignment is part of the type, so every `&Vector3Aligned` (and every
/// element of a `[Vector3Aligned]`) can be loaded with an aligned 128-bit
/// load.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C, align(16))]
pub struct Vector3Aligned {
    lanes: [f32; 4],
}

impl Vector3Aligned {
    /// The zero vector (padding lane still set).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { lanes: [x, y, z, PAD_LANE] }
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.lanes[0]
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.lanes[1]
    }

    #[inline]
    pub const fn z(&self) -> f32 {
        self.lanes[2]
    }

    /// The padding lane. Never contributes to a dot product.
    #[inline]
    pub const fn w(&self) -> f32 {
        self.lanes[3]
    }

    /// All four lanes, padding included.
    #[inline]
    pub const fn as_array(&self) -> &[f32; 4] {
        &self.lanes
    }

    /// Pointer to lane 0. Always 16-byte aligned.
    #[inline]
    pub(crate) fn as_ptr(&self) -> *const f32 {
        self.lanes.as_ptr()
    }
}

impl Default for Vector3Aligned {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<Vector3> for Vector3Aligned {
    #[inline]
    fn from(v: Vector3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3Aligned> for Vector3 {
    #[inline]
    fn from(v: Vector3Aligned) -> Self {
        Self::new(v.x(), v.y(), v.z())
    }
}
