//! Buffer views against the math types.

use proptest::prelude::*;
use tensors_core::Error;
use tensors_direct::{DirectMat3, DirectMat4, DirectVec2, DirectVec3, DirectVec4};
use tensors_math::{Mat3, Mat4, Vec2, Vec3, Vec4};

use crate::init_tracing;

#[test]
fn test_capacity_100_offset_100_fails_everything() {
    init_tracing();
    let mut data = vec![0.0f32; 100];

    let mut v2 = DirectVec2::<_, f32>::new(&mut data, 100);
    assert!(v2.get().is_err());
    assert!(v2.set(Vec2::splat(1.0)).is_err());
    assert!(v2.y().is_err());
    assert!(v2.set_x(1.0).is_err());

    let mut v3 = DirectVec3::<_, f32>::new(&mut data, 100);
    assert!(v3.get().is_err());
    assert!(v3.set(Vec3::splat(1.0)).is_err());
    assert!(v3.set_z(1.0).is_err());

    let mut v4 = DirectVec4::<_, f32>::new(&mut data, 100);
    assert!(v4.get().is_err());
    assert!(v4.set(Vec4::splat(1.0)).is_err());
    assert!(v4.w().is_err());
    assert!(v4.set_w(1.0).is_err());

    let mut m3 = DirectMat3::<_, f32>::new(&mut data, 100);
    assert!(m3.get().is_err());
    assert!(m3.set(Mat3::identity()).is_err());
    assert!(m3.set_rc(0, 0, 1.0).is_err());

    let mut m4 = DirectMat4::<_, f32>::new(&mut data, 100);
    assert!(m4.get().is_err());
    assert!(m4.set(Mat4::identity()).is_err());
    assert!(m4.get_rc(3, 3).is_err());

    assert!(data.iter().all(|&x| x == 0.0));
}

#[test]
fn test_offset_usize_max_fails_everything() {
    let mut data = [0i64; 16];

    let mut v = DirectVec4::<_, i64>::new(&mut data, usize::MAX);
    assert_eq!(
        v.get(),
        Err(Error::index_out_of_bounds(3, usize::MAX, 16))
    );
    assert!(v.x().is_err());
    assert!(v.set(Vec4::splat(1)).is_err());
    assert!(v.set_x(1).is_err());

    let mut f = [0.0f64; 16];
    let mut m = DirectMat4::<_, f64>::new(&mut f, usize::MAX);
    assert!(m.get().is_err());
    assert!(m.set(Mat4::identity()).is_err());
    assert!(m.row(0).is_err());

    assert_eq!(data, [0; 16]);
    assert_eq!(f, [0.0; 16]);
}

#[test]
fn test_interleaved_vertex_buffer() {
    // position (3) + uv (2) per vertex
    const STRIDE: usize = 5;
    let mut buffer = vec![0.0f32; STRIDE * 3];
    for i in 0..3 {
        let base = i * STRIDE;
        DirectVec3::<_, f32>::new(&mut buffer, base)
            .set(Vec3::new(i as f32, 0.0, -1.0))
            .unwrap();
        DirectVec2::<_, f32>::new(&mut buffer, base + 3)
            .set(Vec2::new(0.5, i as f32 * 0.25))
            .unwrap();
    }

    let positions: Vec<Vec3<f32>> = (0..3)
        .map(|i| DirectVec3::<_, f32>::new(&buffer, i * STRIDE).get().unwrap())
        .collect();
    assert_eq!(positions[2], Vec3::new(2.0, 0.0, -1.0));
    assert_eq!(
        DirectVec2::<_, f32>::new(&buffer, STRIDE + 3).get().unwrap(),
        Vec2::new(0.5, 0.25)
    );
}

#[test]
fn test_matrix_view_matches_glam_layout() {
    let m = Mat4::from_translation(Vec3::new(1.0f32, 2.0, 3.0));
    let mut data = [0.0f32; 16];
    DirectMat4::<_, f32>::new(&mut data, 0).set(m).unwrap();
    assert_eq!(data, glam::Mat4::from(m).to_cols_array());
}

proptest! {
    #[test]
    fn prop_vec3_access_iff_fits(capacity in 0usize..64, offset in 0usize..80) {
        let data = vec![1.5f64; capacity];
        let view = DirectVec3::<_, f64>::new(&data, offset);
        prop_assert_eq!(view.get().is_ok(), offset + 3 <= capacity);
        prop_assert_eq!(view.x().is_ok(), offset < capacity);
    }

    #[test]
    fn prop_failed_write_leaves_buffer(capacity in 0usize..32, offset in 0usize..40) {
        let mut data = vec![7i32; capacity];
        let before = data.clone();
        let mut view = DirectVec4::<_, i32>::new(&mut data, offset);
        if view.set(Vec4::new(1, 2, 3, 4)).is_err() {
            prop_assert_eq!(data, before);
        } else {
            prop_assert_eq!(&data[offset..offset + 4], &[1, 2, 3, 4]);
        }
    }

    #[test]
    fn prop_mat_roundtrip(rows in prop::array::uniform3(prop::array::uniform3(-100.0f64..100.0)), offset in 0usize..8) {
        let m = Mat3::from_rows(rows);
        let mut view = DirectMat3::<_, f64>::new(vec![0.0; 17], offset);
        view.set(m).unwrap();
        prop_assert_eq!(view.get().unwrap(), m);
        for i in 0..3 {
            prop_assert_eq!(view.row(i).unwrap(), m.row(i).unwrap());
            prop_assert_eq!(view.column(i).unwrap(), m.column(i).unwrap());
        }
    }
}
