//! Conversions to and from [`glam`] types.
//!
//! Vectors convert component-wise. glam matrices are column-major while
//! ours are row-major, so matrix conversions transpose:
//!
//! ```rust
//! use tensors_math::{Mat3, Vec3};
//!
//! let m = Mat3::from_rows([[1.0f32, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
//! let g: glam::Mat3 = m.into();
//! assert_eq!(g.x_axis, glam::Vec3::new(1.0, 4.0, 7.0));
//!
//! let v = Vec3::new(1.0f32, 0.0, 0.0);
//! let gv: glam::Vec3 = v.into();
//! assert_eq!(Vec3::from(g * gv), m * v);
//! ```

use crate::{Mat3, Mat4, Vec2, Vec3, Vec4};

macro_rules! vec_interop {
    ($Vec:ident, $Glam:ty, $T:ty) => {
        impl From<$Glam> for $Vec<$T> {
            #[inline]
            fn from(v: $Glam) -> Self {
                Self::from_array(v.to_array())
            }
        }

        impl From<$Vec<$T>> for $Glam {
            #[inline]
            fn from(v: $Vec<$T>) -> Self {
                <$Glam>::from_array(v.to_array())
            }
        }
    };
}

vec_interop!(Vec2, glam::Vec2, f32);
vec_interop!(Vec3, glam::Vec3, f32);
vec_interop!(Vec4, glam::Vec4, f32);
vec_interop!(Vec2, glam::DVec2, f64);
vec_interop!(Vec3, glam::DVec3, f64);
vec_interop!(Vec4, glam::DVec4, f64);
vec_interop!(Vec2, glam::IVec2, i32);
vec_interop!(Vec3, glam::IVec3, i32);
vec_interop!(Vec4, glam::IVec4, i32);
vec_interop!(Vec2, glam::I64Vec2, i64);
vec_interop!(Vec3, glam::I64Vec3, i64);
vec_interop!(Vec4, glam::I64Vec4, i64);

macro_rules! mat_interop {
    ($Mat:ident, $Glam:ty, $T:ty) => {
        impl From<$Glam> for $Mat<$T> {
            #[inline]
            fn from(m: $Glam) -> Self {
                Self::from_cols(m.to_cols_array_2d())
            }
        }

        impl From<$Mat<$T>> for $Glam {
            #[inline]
            fn from(m: $Mat<$T>) -> Self {
                <$Glam>::from_cols_array_2d(&m.transpose().m)
            }
        }
    };
}

mat_interop!(Mat3, glam::Mat3, f32);
mat_interop!(Mat4, glam::Mat4, f32);
mat_interop!(Mat3, glam::DMat3, f64);
mat_interop!(Mat4, glam::DMat4, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec_roundtrip() {
        let v = Vec4::new(1, -2, 3, -4);
        let g: glam::IVec4 = v.into();
        assert_eq!(g, glam::IVec4::new(1, -2, 3, -4));
        assert_eq!(Vec4::from(g), v);

        let d = glam::DVec2::new(0.5, 1.5);
        assert_eq!(Vec2::from(d), Vec2::new(0.5, 1.5));

        let l: glam::I64Vec3 = Vec3::new(i64::MAX, 0, i64::MIN).into();
        assert_eq!(l.x, i64::MAX);
    }

    #[test]
    fn test_mat4_transposes() {
        let m = Mat4::from_translation(Vec3::new(1.0f32, 2.0, 3.0));
        let g: glam::Mat4 = m.into();
        assert_eq!(g.w_axis, glam::Vec4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Mat4::from(g), m);
    }

    #[test]
    fn test_inverse_matches_glam() {
        let m = Mat4::from_rows([
            [4.0, 0.0, 0.0, 1.0],
            [0.0, 3.0, 2.0, 0.0],
            [1.0, 0.0, 2.0, 0.0],
            [0.0, 1.0, 0.0, 5.0],
        ]);
        let ours = m.inverse().unwrap();
        let theirs = Mat4::from(glam::DMat4::from(m).inverse());
        assert_relative_eq!(ours, theirs, epsilon = 1e-12);
    }

    #[test]
    fn test_mat3_roundtrip() {
        let m = Mat3::from_axis_angle(Vec3::new(0.0, 1.0, 0.0), 0.3f64);
        let g: glam::DMat3 = m.into();
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_relative_eq!(Vec3::from(g * glam::DVec3::from(v)), m * v, epsilon = 1e-12);
    }
}
