//! 4D (homogeneous) vectors.

use tensors_core::Scalar;

use super::{Vec2, Vec3};

/// A 4D vector.
///
/// The default value is `(0, 0, 0, 1)`, a homogeneous point at the origin.
///
/// # Example
///
/// ```rust
/// use tensors_math::Vec4;
///
/// let p: Vec4<f32> = Vec4::default();
/// assert_eq!(p, Vec4::new(0.0, 0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec4<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
    /// W component
    pub w: T,
}

impl_vector!(Vec4, 4, x => 0, y => 1, z => 2, w => 3);

impl<T: Scalar> Default for Vec4<T> {
    fn default() -> Self {
        Self::new(T::zero(), T::zero(), T::zero(), T::one())
    }
}

impl<T: Scalar> Vec4<T> {
    /// Drops the W component.
    #[inline]
    pub fn truncate(self) -> Vec3<T> {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Keeps only X and Y.
    #[inline]
    pub fn truncate2(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }
}
