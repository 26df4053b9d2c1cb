//! Element kinds for vectors and matrices.
//!
//! Every vector and matrix is generic over its element type. The four
//! supported kinds are:
//!
//! | kind | Rust type | suffix |
//! |------|-----------|--------|
//! | [`ElementKind::Float`]  | `f32` | `F` |
//! | [`ElementKind::Double`] | `f64` | `D` |
//! | [`ElementKind::Int`]    | `i32` | `I` |
//! | [`ElementKind::Long`]   | `i64` | `L` |
//!
//! [`Scalar`] is implemented by all four and carries the operations that
//! make sense everywhere (arithmetic, comparison, widening to `f64`).
//! [`Real`] is implemented by the floating point kinds only and unlocks
//! square roots, normalization and approximate comparison.
//!
//! # Widening
//!
//! Dot products and magnitudes are always computed in `f64`:
//!
//! ```rust
//! use tensors_core::Scalar;
//!
//! let big = i32::MAX;
//! // The product would overflow i32 but is fine once widened.
//! assert!(big.widen() * big.widen() > i32::MAX.widen());
//! ```

use std::fmt;
use std::ops::Neg;

use num_traits::{Float, Num, NumCast, WrappingAdd, WrappingMul, WrappingNeg, WrappingSub};

/// The four element kinds supported by the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// 32-bit IEEE-754 float.
    Float,
    /// 64-bit IEEE-754 float.
    Double,
    /// 32-bit signed integer.
    Int,
    /// 64-bit signed integer.
    Long,
}

impl ElementKind {
    /// Single-letter suffix used in type names (`F`, `D`, `I`, `L`).
    #[inline]
    pub const fn suffix(self) -> char {
        match self {
            Self::Float => 'F',
            Self::Double => 'D',
            Self::Int => 'I',
            Self::Long => 'L',
        }
    }

    /// Returns `true` for `Float` and `Double`.
    #[inline]
    pub const fn is_real(self) -> bool {
        matches!(self, Self::Float | Self::Double)
    }

    /// Size of one element in bytes.
    #[inline]
    pub const fn size_bytes(self) -> usize {
        match self {
            Self::Float | Self::Int => 4,
            Self::Double | Self::Long => 8,
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Float => "float",
            Self::Double => "double",
            Self::Int => "int",
            Self::Long => "long",
        };
        f.write_str(name)
    }
}

/// Trait for vector and matrix element types.
///
/// Implemented for `f32`, `f64`, `i32` and `i64`.
///
/// # Required Methods
///
/// - [`widen`](Scalar::widen) - Lossless (or nearest) conversion to `f64`
/// - [`narrow`](Scalar::narrow) - Conversion back from `f64`; integers
///   truncate toward zero and saturate
/// - [`absolute`](Scalar::absolute) - Absolute value
/// - [`lerp`](Scalar::lerp) - Linear interpolation, exact at `t = 0` and `t = 1`
///
/// Comparison helpers are named `min_of`/`max_of`/`clamp_to` so they never
/// collide with the inherent methods of the primitive types.
pub trait Scalar:
    Copy
    + Default
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + Send
    + Sync
    + Num
    + NumCast
    + Neg<Output = Self>
    + 'static
{
    /// Element kind tag.
    const KIND: ElementKind;

    /// Converts to `f64`.
    fn widen(self) -> f64;

    /// Converts from `f64`.
    ///
    /// For integers this truncates toward zero and saturates at the type
    /// bounds; NaN becomes zero.
    fn narrow(v: f64) -> Self;

    /// Absolute value.
    fn absolute(self) -> Self;

    /// Linear interpolation between `a` and `b`.
    ///
    /// `t = 0` returns `a` and `t = 1` returns `b`.
    fn lerp(a: Self, b: Self, t: f64) -> Self;

    /// Component sum. Wraps on integer overflow.
    fn add_elem(self, rhs: Self) -> Self;

    /// Component difference. Wraps on integer overflow.
    fn sub_elem(self, rhs: Self) -> Self;

    /// Component product. Wraps on integer overflow.
    fn mul_elem(self, rhs: Self) -> Self;

    /// Negation. `MIN` negates to itself for integers.
    fn neg_elem(self) -> Self;

    /// The smaller of two values.
    #[inline]
    fn min_of(self, other: Self) -> Self {
        if other < self { other } else { self }
    }

    /// The larger of two values.
    #[inline]
    fn max_of(self, other: Self) -> Self {
        if other > self { other } else { self }
    }

    /// Clamps to `[min, max]`.
    ///
    /// Assumes `min <= max`; otherwise `max` wins.
    #[inline]
    fn clamp_to(self, min: Self, max: Self) -> Self {
        self.max_of(min).min_of(max)
    }
}

/// Floating point element types.
///
/// Adds everything from [`num_traits::Float`] plus the `approx` comparison
/// traits used for almost-equal checks.
pub trait Real:
    Scalar + Float + approx::AbsDiffEq<Epsilon = Self> + approx::RelativeEq + approx::UlpsEq
{
}

impl Real for f32 {}
impl Real for f64 {}

impl Scalar for f32 {
    const KIND: ElementKind = ElementKind::Float;

    #[inline]
    fn widen(self) -> f64 {
        self as f64
    }

    #[inline]
    fn narrow(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn absolute(self) -> Self {
        self.abs()
    }

    #[inline]
    fn lerp(a: Self, b: Self, t: f64) -> Self {
        let t = t as f32;
        a * (1.0 - t) + b * t
    }

    #[inline]
    fn add_elem(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn sub_elem(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn mul_elem(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn neg_elem(self) -> Self {
        -self
    }
}

impl Scalar for f64 {
    const KIND: ElementKind = ElementKind::Double;

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn narrow(v: f64) -> Self {
        v
    }

    #[inline]
    fn absolute(self) -> Self {
        self.abs()
    }

    #[inline]
    fn lerp(a: Self, b: Self, t: f64) -> Self {
        a * (1.0 - t) + b * t
    }

    #[inline]
    fn add_elem(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn sub_elem(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn mul_elem(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn neg_elem(self) -> Self {
        -self
    }
}

impl Scalar for i32 {
    const KIND: ElementKind = ElementKind::Int;

    #[inline]
    fn widen(self) -> f64 {
        self as f64
    }

    #[inline]
    fn narrow(v: f64) -> Self {
        v as i32
    }

    #[inline]
    fn absolute(self) -> Self {
        self.wrapping_abs()
    }

    #[inline]
    fn lerp(a: Self, b: Self, t: f64) -> Self {
        Self::narrow(a.widen() * (1.0 - t) + b.widen() * t)
    }

    #[inline]
    fn add_elem(self, rhs: Self) -> Self {
        WrappingAdd::wrapping_add(&self, &rhs)
    }

    #[inline]
    fn sub_elem(self, rhs: Self) -> Self {
        WrappingSub::wrapping_sub(&self, &rhs)
    }

    #[inline]
    fn mul_elem(self, rhs: Self) -> Self {
        WrappingMul::wrapping_mul(&self, &rhs)
    }

    #[inline]
    fn neg_elem(self) -> Self {
        WrappingNeg::wrapping_neg(&self)
    }
}

impl Scalar for i64 {
    const KIND: ElementKind = ElementKind::Long;

    #[inline]
    fn widen(self) -> f64 {
        self as f64
    }

    #[inline]
    fn narrow(v: f64) -> Self {
        v as i64
    }

    #[inline]
    fn absolute(self) -> Self {
        self.wrapping_abs()
    }

    #[inline]
    fn lerp(a: Self, b: Self, t: f64) -> Self {
        // Endpoints are returned directly: i64 does not fit in f64 exactly.
        if t == 0.0 {
            a
        } else if t == 1.0 {
            b
        } else {
            Self::narrow(a.widen() * (1.0 - t) + b.widen() * t)
        }
    }

    #[inline]
    fn add_elem(self, rhs: Self) -> Self {
        WrappingAdd::wrapping_add(&self, &rhs)
    }

    #[inline]
    fn sub_elem(self, rhs: Self) -> Self {
        WrappingSub::wrapping_sub(&self, &rhs)
    }

    #[inline]
    fn mul_elem(self, rhs: Self) -> Self {
        WrappingMul::wrapping_mul(&self, &rhs)
    }

    #[inline]
    fn neg_elem(self) -> Self {
        WrappingNeg::wrapping_neg(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_suffixes() {
        assert_eq!(f32::KIND.suffix(), 'F');
        assert_eq!(f64::KIND.suffix(), 'D');
        assert_eq!(i32::KIND.suffix(), 'I');
        assert_eq!(i64::KIND.suffix(), 'L');
        assert!(f64::KIND.is_real());
        assert!(!i64::KIND.is_real());
        assert_eq!(i64::KIND.size_bytes(), 8);
        assert_eq!(ElementKind::Int.to_string(), "int");
    }

    #[test]
    fn test_narrow_truncates_and_saturates() {
        assert_eq!(i32::narrow(2.9), 2);
        assert_eq!(i32::narrow(-2.9), -2);
        assert_eq!(i32::narrow(1e20), i32::MAX);
        assert_eq!(i32::narrow(f64::NAN), 0);
    }

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(<f32 as Scalar>::lerp(0.1, 7.3, 0.0), 0.1);
        assert_eq!(<f32 as Scalar>::lerp(0.1, 7.3, 1.0), 7.3);
        assert_eq!(<f64 as Scalar>::lerp(-3.5, 1e10, 1.0), 1e10);
        assert_eq!(<i32 as Scalar>::lerp(-10, 10, 0.5), 0);
        assert_eq!(<i64 as Scalar>::lerp(i64::MIN, i64::MAX, 1.0), i64::MAX);
        assert_eq!(<i64 as Scalar>::lerp(i64::MIN + 1, 3, 0.0), i64::MIN + 1);
    }

    #[test]
    fn test_clamp_to() {
        assert_eq!(5i32.clamp_to(0, 3), 3);
        assert_eq!((-1.5f64).clamp_to(0.0, 1.0), 0.0);
        assert_eq!(2i64.min_of(-2), -2);
        assert_eq!(2.0f32.max_of(-2.0), 2.0);
    }

    #[test]
    fn test_integer_elements_wrap() {
        assert_eq!(i32::MAX.add_elem(1), i32::MIN);
        assert_eq!(i32::MIN.sub_elem(1), i32::MAX);
        assert_eq!(i64::MAX.mul_elem(2), -2);
        assert_eq!(i64::MIN.neg_elem(), i64::MIN);
        assert_eq!(1.5f32.add_elem(0.5), 2.0);
        assert_eq!(3.0f64.mul_elem(-2.0).neg_elem(), 6.0);
    }

    #[test]
    fn test_absolute() {
        assert_eq!((-3i32).absolute(), 3);
        assert_eq!((-0.25f32).absolute(), 0.25);
    }
}
