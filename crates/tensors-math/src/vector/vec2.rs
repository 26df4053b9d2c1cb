//! 2D vectors.

use tensors_core::{Real, Scalar};

use super::Vec3;

/// A 2D vector.
///
/// # Example
///
/// ```rust
/// use tensors_math::Vec2;
///
/// let a = Vec2::new(1.0f64, 0.0);
/// let b = Vec2::new(0.0f64, 2.0);
/// assert!((a.angle(b) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
}

impl_vector!(Vec2, 2, x => 0, y => 1);

impl<T: Scalar> Vec2<T> {
    /// Appends a Z component.
    #[inline]
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3::new(self.x, self.y, z)
    }
}

impl<T: Real> Vec2<T> {
    /// Unsigned angle between two vectors in radians, in `[0, pi]`.
    ///
    /// Computed as `acos(dot / (|a| |b|))` with the cosine clamped to
    /// `[-1, 1]`. A zero-length argument yields NaN.
    #[inline]
    pub fn angle(self, other: Self) -> T {
        let cos = self.dot(other) / (self.magnitude() * other.magnitude());
        T::narrow(cos.clamp(-1.0, 1.0).acos())
    }
}
