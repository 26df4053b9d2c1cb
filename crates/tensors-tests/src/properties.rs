//! Algebraic properties checked over random inputs.

use approx::assert_relative_eq;
use proptest::prelude::*;
use tensors_math::Scalar;
use tensors_math::{Mat3, Mat4, Vec2, Vec3, Vec4};

fn real() -> impl Strategy<Value = f64> {
    -1.0e3f64..1.0e3
}

fn vec3() -> impl Strategy<Value = Vec3<f64>> {
    (real(), real(), real()).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn vec4_i32() -> impl Strategy<Value = Vec4<i32>> {
    prop::array::uniform4(-10_000i32..10_000).prop_map(Vec4::from_array)
}

fn mat4() -> impl Strategy<Value = Mat4<f64>> {
    prop::array::uniform4(prop::array::uniform4(real())).prop_map(Mat4::from_rows)
}

// Strictly diagonally dominant, so always comfortably invertible.
fn invertible_mat4() -> impl Strategy<Value = Mat4<f64>> {
    prop::array::uniform4(prop::array::uniform4(-1.0f64..1.0))
        .prop_map(|mut rows| {
            for (i, row) in rows.iter_mut().enumerate() {
                row[i] += 8.0;
            }
            Mat4::from_rows(rows)
        })
}

fn invertible_mat3() -> impl Strategy<Value = Mat3<f64>> {
    prop::array::uniform3(prop::array::uniform3(-1.0f64..1.0))
        .prop_map(|mut rows| {
            for (i, row) in rows.iter_mut().enumerate() {
                row[i] += 6.0;
            }
            Mat3::from_rows(rows)
        })
}

#[test]
fn test_proptest_smoke() {
    assert_eq!(Mat4::<f64>::default(), Mat4::identity());
    assert_eq!(Mat3::<f32>::default(), Mat3::identity());
}

proptest! {
    #[test]
    fn prop_identity_is_neutral(m in mat4()) {
        prop_assert_eq!(Mat4::identity() * m, m);
        prop_assert_eq!(m * Mat4::identity(), m);
    }

    #[test]
    fn prop_inverse_roundtrip(m in invertible_mat4()) {
        let inv = m.inverse().unwrap();
        assert_relative_eq!(m * inv, Mat4::identity(), epsilon = 1e-9);
        assert_relative_eq!(inv * m, Mat4::identity(), epsilon = 1e-9);
    }

    #[test]
    fn prop_inverse_roundtrip_mat3(m in invertible_mat3()) {
        let inv = m.inverse().unwrap();
        assert_relative_eq!(m * inv, Mat3::identity(), epsilon = 1e-9);
    }

    #[test]
    fn prop_transpose_is_involution(m in mat4()) {
        prop_assert_eq!(m.transpose().transpose(), m);
        prop_assert_eq!(m.transpose().row(1).unwrap(), m.column(1).unwrap());
    }

    #[test]
    fn prop_interpolate_endpoints_exact(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.interpolate_linear(b, 0.0), a);
        prop_assert_eq!(a.interpolate_linear(b, 1.0), b);
    }

    #[test]
    fn prop_interpolate_endpoints_exact_integers(a in vec4_i32(), b in vec4_i32()) {
        prop_assert_eq!(a.interpolate_linear(b, 0.0), a);
        prop_assert_eq!(a.interpolate_linear(b, 1.0), b);
    }

    #[test]
    fn prop_interpolate_endpoints_exact_i64(x in any::<i64>(), y in any::<i64>()) {
        let (a, b) = (Vec2::new(x, y), Vec2::new(y, x));
        prop_assert_eq!(a.interpolate_linear(b, 0.0), a);
        prop_assert_eq!(a.interpolate_linear(b, 1.0), b);
    }

    #[test]
    fn prop_scale_identities(v in vec3(), w in vec4_i32()) {
        prop_assert_eq!(v.scale(1.0), v);
        prop_assert_eq!(v.scale(0.0), Vec3::zero());
        prop_assert_eq!(w.scale(1), w);
        prop_assert_eq!(w.scale(0), Vec4::zero());
    }

    #[test]
    fn prop_dot_symmetric(a in vec3(), b in vec3()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
        prop_assert_eq!(a.dot(a), a.magnitude_squared());
    }

    #[test]
    fn prop_dot_symmetric_integers(a in vec4_i32(), b in vec4_i32()) {
        prop_assert_eq!(a.dot(b), b.dot(a));
        prop_assert_eq!(a.dot(a), a.magnitude_squared());
    }

    #[test]
    fn prop_clamp_within_bounds(v in vec3(), lo in -100.0f64..0.0, hi in 0.0f64..100.0) {
        let c = v.clamp(lo, hi);
        for x in c.to_array() {
            prop_assert!(lo <= x && x <= hi);
        }
    }

    #[test]
    fn prop_clamp_by_vector_within_bounds(v in vec4_i32(), lo in vec4_i32()) {
        let hi = lo + Vec4::splat(5_000);
        let c = v.clamp_by_vector(lo, hi);
        for i in 0..4 {
            prop_assert!(lo[i] <= c[i] && c[i] <= hi[i]);
        }
    }

    #[test]
    fn prop_normalize_unit_length(v in vec3()) {
        prop_assume!(v.magnitude() > 1e-3);
        assert_relative_eq!(v.normalize().magnitude(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn prop_cross_is_orthogonal(a in vec3(), b in vec3()) {
        let c = a.cross(b);
        let scale = a.magnitude() * b.magnitude() * (a.magnitude() + b.magnitude()) + 1.0;
        prop_assert!(c.dot(a).abs() / scale < 1e-12);
        prop_assert!(c.dot(b).abs() / scale < 1e-12);
    }

    #[test]
    fn prop_scalar_lerp_endpoints(a in real(), b in real()) {
        prop_assert_eq!(<f64 as Scalar>::lerp(a, b, 0.0), a);
        prop_assert_eq!(<f64 as Scalar>::lerp(a, b, 1.0), b);
    }

    #[test]
    fn prop_integer_add_sub_wrap_inverse(a in vec4_i32(), x in any::<i32>()) {
        let b = Vec4::splat(x) * 1_000;
        prop_assert_eq!((a + b) - b, a);
    }
}
