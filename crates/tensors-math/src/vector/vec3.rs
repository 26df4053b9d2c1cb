//! 3D vectors.

use tensors_core::Scalar;

use super::{Vec2, Vec4};

/// A 3D vector.
///
/// # Example
///
/// ```rust
/// use tensors_math::Vec3;
///
/// let v = Vec3::new(3.0f32, 0.0, 4.0);
/// assert_eq!(v.magnitude(), 5.0);
/// assert_eq!(v.normalize(), Vec3::new(0.6, 0.0, 0.8));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3<T> {
    /// X component
    pub x: T,
    /// Y component
    pub y: T,
    /// Z component
    pub z: T,
}

impl_vector!(Vec3, 3, x => 0, y => 1, z => 2);

impl<T: Scalar> Vec3<T> {
    /// Cross product. Wraps on integer overflow.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y.mul_elem(other.z).sub_elem(self.z.mul_elem(other.y)),
            self.z.mul_elem(other.x).sub_elem(self.x.mul_elem(other.z)),
            self.x.mul_elem(other.y).sub_elem(self.y.mul_elem(other.x)),
        )
    }

    /// Drops the Z component.
    #[inline]
    pub fn truncate(self) -> Vec2<T> {
        Vec2::new(self.x, self.y)
    }

    /// Appends a W component.
    #[inline]
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }
}
