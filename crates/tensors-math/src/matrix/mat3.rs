//! 3x3 matrices.
//!
//! # Usage
//!
//! ```rust
//! use tensors_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([
//!     [1.0, 2.0, 3.0],
//!     [0.0, 1.0, 4.0],
//!     [5.0, 6.0, 0.0],
//! ]);
//!
//! let inv = m.inverse().unwrap();
//! let v = Vec3::new(1.0, 2.0, 3.0);
//! approx::assert_relative_eq!(inv * (m * v), v, epsilon = 1e-12);
//! ```

use tensors_core::Real;
use tracing::{debug, trace};

use crate::{Context3, Vec2, Vec3};

/// A 3x3 matrix.
///
/// Stored in row-major order. The default value is the identity matrix.
///
/// # Example
///
/// ```rust
/// use tensors_math::{Mat3, Vec3};
///
/// let identity = Mat3::<f32>::default();
/// let v = Vec3::new(1.0, 2.0, 3.0);
/// assert_eq!(identity * v, v);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3<T> {
    /// Matrix elements in row-major order: [row0, row1, row2]
    pub m: [[T; 3]; 3],
}

impl_matrix!(Mat3, Vec3, Context3, 3);

impl<T: Real> Mat3<T> {
    /// Creates a matrix from Vec3 rows.
    #[inline]
    pub fn from_row_vecs(r0: Vec3<T>, r1: Vec3<T>, r2: Vec3<T>) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array()])
    }

    /// Creates a matrix from Vec3 columns.
    #[inline]
    pub fn from_col_vecs(c0: Vec3<T>, c1: Vec3<T>, c2: Vec3<T>) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array()])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub fn diagonal(d0: T, d1: T, d2: T) -> Self {
        let z = T::zero();
        Self::from_rows([[d0, z, z], [z, d1, z], [z, z, d2]])
    }

    /// Creates a uniform scale matrix.
    #[inline]
    pub fn from_scale(s: T) -> Self {
        Self::diagonal(s, s, s)
    }

    /// Rotation of `angle` radians about `axis`.
    ///
    /// `axis` is expected to be unit length. Positive angles rotate
    /// counter-clockwise when looking down the axis towards the origin.
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        let (s, c) = angle.sin_cos();
        let t = T::one() - c;
        let Vec3 { x, y, z } = axis;
        Self::from_rows([
            [c + x * x * t, x * y * t - z * s, x * z * t + y * s],
            [y * x * t + z * s, c + y * y * t, y * z * t - x * s],
            [z * x * t - y * s, z * y * t + x * s, c + z * z * t],
        ])
    }

    /// Returns the first two components of row `i`.
    #[inline]
    pub fn row2(&self, i: usize) -> tensors_core::Result<Vec2<T>> {
        self.row(i).map(Vec3::truncate)
    }

    /// Computes the determinant.
    #[inline]
    pub fn determinant(&self) -> T {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverts `m` into `out` by cofactor expansion.
    ///
    /// Returns `false` and leaves `out` untouched when the determinant is
    /// zero or not finite.
    pub fn invert_with(context: &mut Context3<T>, m: &Self, out: &mut Self) -> bool {
        trace!("mat3::invert");
        let a = &m.m;
        let c = &mut context.cofactors.m;

        c[0][0] = a[1][1] * a[2][2] - a[1][2] * a[2][1];
        c[0][1] = a[1][2] * a[2][0] - a[1][0] * a[2][2];
        c[0][2] = a[1][0] * a[2][1] - a[1][1] * a[2][0];
        c[1][0] = a[0][2] * a[2][1] - a[0][1] * a[2][2];
        c[1][1] = a[0][0] * a[2][2] - a[0][2] * a[2][0];
        c[1][2] = a[0][1] * a[2][0] - a[0][0] * a[2][1];
        c[2][0] = a[0][1] * a[1][2] - a[0][2] * a[1][1];
        c[2][1] = a[0][2] * a[1][0] - a[0][0] * a[1][2];
        c[2][2] = a[0][0] * a[1][1] - a[0][1] * a[1][0];

        let det = a[0][0] * c[0][0] + a[0][1] * c[0][1] + a[0][2] * c[0][2];
        if det == T::zero() || !det.is_finite() {
            debug!(det = %det, "mat3 is singular");
            return false;
        }

        // Adjugate is the transposed cofactor matrix.
        let inv_det = T::one() / det;
        for r in 0..3 {
            for col in 0..3 {
                out.m[r][col] = c[col][r] * inv_det;
            }
        }
        true
    }
}
