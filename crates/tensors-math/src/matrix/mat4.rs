//! 4x4 matrices for homogeneous transforms.

use tensors_core::Real;
use tracing::{debug, trace};

use crate::{Context4, Mat3, Vec2, Vec3, Vec4};

/// A 4x4 matrix.
///
/// Stored in row-major order. The default value is the identity matrix.
/// Translations live in the last column, so `m * Vec4::new(x, y, z, 1)`
/// transforms a point.
///
/// # Example
///
/// ```rust
/// use tensors_math::{Mat4, Vec3, Vec4};
///
/// let t = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
/// let p = t * Vec4::new(0.0, 0.0, 0.0, 1.0);
/// assert_eq!(p, Vec4::new(1.0, 2.0, 3.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4<T> {
    /// Matrix elements in row-major order: [row0, row1, row2, row3]
    pub m: [[T; 4]; 4],
}

impl_matrix!(Mat4, Vec4, Context4, 4);

impl<T: Real> Mat4<T> {
    /// Creates a matrix from Vec4 rows.
    #[inline]
    pub fn from_row_vecs(r0: Vec4<T>, r1: Vec4<T>, r2: Vec4<T>, r3: Vec4<T>) -> Self {
        Self::from_rows([r0.to_array(), r1.to_array(), r2.to_array(), r3.to_array()])
    }

    /// Creates a matrix from Vec4 columns.
    #[inline]
    pub fn from_col_vecs(c0: Vec4<T>, c1: Vec4<T>, c2: Vec4<T>, c3: Vec4<T>) -> Self {
        Self::from_cols([c0.to_array(), c1.to_array(), c2.to_array(), c3.to_array()])
    }

    /// Creates a diagonal matrix.
    #[inline]
    pub fn diagonal(d0: T, d1: T, d2: T, d3: T) -> Self {
        let z = T::zero();
        Self::from_rows([
            [d0, z, z, z],
            [z, d1, z, z],
            [z, z, d2, z],
            [z, z, z, d3],
        ])
    }

    /// Creates a uniform scale matrix (all four diagonal elements set to `s`).
    #[inline]
    pub fn from_scale(s: T) -> Self {
        Self::diagonal(s, s, s, s)
    }

    /// Translation by `v`.
    #[inline]
    pub fn from_translation(v: Vec3<T>) -> Self {
        let mut m = Self::identity();
        m.m[0][3] = v.x;
        m.m[1][3] = v.y;
        m.m[2][3] = v.z;
        m
    }

    /// Embeds a 3x3 matrix in the upper-left corner of an identity matrix.
    #[inline]
    pub fn from_mat3(m3: &Mat3<T>) -> Self {
        let mut m = Self::identity();
        for (dst, src) in m.m.iter_mut().zip(m3.m.iter()) {
            dst[..3].copy_from_slice(src);
        }
        m
    }

    /// Rotation of `angle` radians about the unit vector `axis`.
    ///
    /// See [`Mat3::from_axis_angle`].
    #[inline]
    pub fn from_axis_angle(axis: Vec3<T>, angle: T) -> Self {
        Self::from_mat3(&Mat3::from_axis_angle(axis, angle))
    }

    /// The upper-left 3x3 block.
    #[inline]
    pub fn to_mat3(&self) -> Mat3<T> {
        Mat3::from_rows(std::array::from_fn(|r| [self.m[r][0], self.m[r][1], self.m[r][2]]))
    }

    /// Returns the first three components of row `i`.
    #[inline]
    pub fn row3(&self, i: usize) -> tensors_core::Result<Vec3<T>> {
        self.row(i).map(Vec4::truncate)
    }

    /// Returns the first two components of row `i`.
    #[inline]
    pub fn row2(&self, i: usize) -> tensors_core::Result<Vec2<T>> {
        self.row(i).map(Vec4::truncate2)
    }

    /// Writes the 3x3 minor that excludes `row` and `column` into `out`.
    fn minor_into(&self, row: usize, column: usize, out: &mut Mat3<T>) {
        let mut dr = 0;
        for r in (0..4).filter(|&r| r != row) {
            let mut dc = 0;
            for c in (0..4).filter(|&c| c != column) {
                out.m[dr][dc] = self.m[r][c];
                dc += 1;
            }
            dr += 1;
        }
    }

    #[inline]
    fn cofactor_sign(row: usize, column: usize) -> T {
        if (row + column) % 2 == 0 { T::one() } else { -T::one() }
    }

    /// Computes the determinant by cofactor expansion along row 0.
    pub fn determinant(&self) -> T {
        let mut minor = Mat3::zero();
        (0..4).fold(T::zero(), |acc, c| {
            self.minor_into(0, c, &mut minor);
            acc + self.m[0][c] * Self::cofactor_sign(0, c) * minor.determinant()
        })
    }

    /// Inverts `m` into `out` by cofactor expansion.
    ///
    /// Every cofactor is the signed determinant of a 3x3 minor assembled in
    /// the context. Returns `false` and leaves `out` untouched when the
    /// determinant is zero or not finite.
    pub fn invert_with(context: &mut Context4<T>, m: &Self, out: &mut Self) -> bool {
        trace!("mat4::invert");
        for r in 0..4 {
            for c in 0..4 {
                m.minor_into(r, c, &mut context.minor);
                context.cofactors.m[r][c] =
                    Self::cofactor_sign(r, c) * context.minor.determinant();
            }
        }

        let cof = &context.cofactors.m;
        let det = (0..4).fold(T::zero(), |acc, c| acc + m.m[0][c] * cof[0][c]);
        if det == T::zero() || !det.is_finite() {
            debug!(det = %det, "mat4 is singular");
            return false;
        }

        // Adjugate is the transposed cofactor matrix.
        let inv_det = T::one() / det;
        for r in 0..4 {
            for c in 0..4 {
                out.m[r][c] = cof[c][r] * inv_det;
            }
        }
        true
    }
}
