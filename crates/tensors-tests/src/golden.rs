//! Fixed inputs with known results.

use approx::assert_relative_eq;
use tensors_math::{Context4, ElementKind, Mat3, Mat4, Scalar, Tolerance, Vec2, Vec3, Vec4};

use crate::init_tracing;

fn counting() -> Mat4<f64> {
    Mat4::from_rows([
        [1.0, 2.0, 3.0, 4.0],
        [5.0, 6.0, 7.0, 8.0],
        [9.0, 10.0, 11.0, 12.0],
        [13.0, 14.0, 15.0, 16.0],
    ])
}

#[test]
fn test_counting_matrix_squared() {
    let p = counting() * counting();
    assert_eq!(p.row(0).unwrap(), Vec4::new(90.0, 100.0, 110.0, 120.0));
    assert_eq!(p.row(1).unwrap(), Vec4::new(202.0, 228.0, 254.0, 280.0));
    assert_eq!(p.row(2).unwrap(), Vec4::new(314.0, 356.0, 398.0, 440.0));
    assert_eq!(p.row(3).unwrap(), Vec4::new(426.0, 484.0, 542.0, 600.0));

    let f = Mat4::from_rows(counting().m.map(|r| r.map(|x| x as f32)));
    assert_eq!((f * f).row(0).unwrap(), Vec4::new(90.0, 100.0, 110.0, 120.0));
}

#[test]
fn test_diagonal_inverse() {
    init_tracing();
    let inv = Mat4::diagonal(2.0f64, 2.0, 2.0, 2.0).inverse().unwrap();
    assert_eq!(inv, Mat4::diagonal(0.5, 0.5, 0.5, 0.5));

    let inv = Mat3::diagonal(2.0f32, 2.0, 2.0).inverse().unwrap();
    assert_eq!(inv, Mat3::diagonal(0.5, 0.5, 0.5));
}

#[test]
fn test_singular_inputs() {
    init_tracing();
    assert!(Mat4::<f64>::zero().inverse().is_none());
    assert!(Mat3::<f32>::zero().inverse().is_none());
    assert!(counting().inverse().is_none());

    let mut nan = Mat4::<f64>::identity();
    nan.m[2][2] = f64::NAN;
    assert!(nan.inverse().is_none());

    let mut context = Context4::new();
    let mut out = Mat4::from_scale(3.0);
    assert!(!Mat4::invert_with(&mut context, &counting(), &mut out));
    assert_eq!(out, Mat4::from_scale(3.0));
}

#[test]
fn test_rigid_transform_inverse() {
    let model = Mat4::from_translation(Vec3::new(1.0, -2.0, 0.5))
        * Mat4::from_axis_angle(Vec3::new(0.0, 0.0, 1.0), std::f64::consts::FRAC_PI_2);
    let inv = model.inverse().unwrap();

    let p = Vec4::new(3.0, 4.0, 5.0, 1.0);
    let moved = model * p;
    assert_relative_eq!(moved, Vec4::new(-3.0, 1.0, 5.5, 1.0), epsilon = 1e-12);
    assert_relative_eq!(inv * moved, p, epsilon = 1e-12);
}

#[test]
fn test_cross_and_angle() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    assert_relative_eq!(
        Vec2::new(1.0, 0.0).angle(Vec2::new(0.0, 2.0)),
        std::f64::consts::FRAC_PI_2,
        epsilon = 1e-12
    );
}

#[test]
fn test_integer_dot_is_widened() {
    let v = Vec4::splat(i32::MAX);
    let x = i32::MAX as f64;
    assert_eq!(v.dot(v), x * x + x * x + x * x + x * x);

    let w = Vec2::new(i64::MAX, i64::MIN);
    assert!(w.magnitude_squared() > 1e37);
}

#[test]
fn test_element_kinds() {
    assert_eq!(<f32 as Scalar>::KIND, ElementKind::Float);
    assert_eq!(<f64 as Scalar>::KIND, ElementKind::Double);
    assert_eq!(<i32 as Scalar>::KIND, ElementKind::Int);
    assert_eq!(<i64 as Scalar>::KIND, ElementKind::Long);
}

#[test]
fn test_serde_roundtrip() {
    let m = counting();
    let json = serde_json::to_string(&m).unwrap();
    let back: Mat4<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, m);

    let v = Vec3::new(1, -2, 3);
    assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"x":1,"y":-2,"z":3}"#);

    let tol: Tolerance<f32> = serde_json::from_str(r#"{"epsilon":0.001,"max_relative":0.0}"#).unwrap();
    assert!(tol.almost_equal(&Vec2::new(1.0, 1.0), &Vec2::new(1.0005, 1.0)));
}
