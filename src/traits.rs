use core::fmt::Debug;
use num_traits::float::FloatCore;
use num_traits::{Bounded, Num, One, Zero};

/// Trait for types that can be fed to the reduction kernels.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num + 'static {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num + 'static> Scalar for T {}

/// Scalars with a total-enough order and finite extremes.
///
/// `Min` / `Max` start from `Bounded::max_value()` / `Bounded::min_value()`,
/// which for floats is the largest finite magnitude rather than infinity.
pub trait OrderedScalar: Scalar + PartialOrd + Bounded {}

impl<T: Scalar + PartialOrd + Bounded> OrderedScalar for T {}

/// Real floating-point scalars.
///
/// Required by `average`, which divides by the element count.
pub trait FloatScalar: OrderedScalar + FloatCore {
    /// Convert an element count into `Self`.
    fn from_count(n: usize) -> Self;
}

macro_rules! impl_float_scalar {
    ($($t:ty),*) => {
        $(
            impl FloatScalar for $t {
                #[inline] fn from_count(n: usize) -> $t { n as $t }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);
