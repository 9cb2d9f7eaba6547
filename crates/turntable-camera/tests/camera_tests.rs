// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use turntable_camera::{
    create_turntable_camera, destroy_turntable_camera, CameraCreateInfo, CameraError,
    ProjectionInfo, TurntableCamera, ViewInfo,
};
use turntable_math::{Mat4, Point3};

fn approx_eq16(a: &[f32; 16], b: &[f32; 16], tol: f32) {
    for i in 0..16 {
        assert!((a[i] - b[i]).abs() <= tol, "index {i}: {a:?} vs {b:?}");
    }
}

fn sample_info() -> CameraCreateInfo {
    CameraCreateInfo {
        look_at: Point3::new(0.0, 0.0, 0.0),
        look_from: Point3::new(0.0, 3.0, 4.0),
        vertical_fov_degrees: 60.0,
        aspect_ratio: 16.0 / 9.0,
        z_near: 0.1,
        z_far: 100.0,
    }
}

#[test]
fn factory_builds_view_and_projection() {
    let info = sample_info();
    let camera = create_turntable_camera(&info);

    let view = ViewInfo::new(info.look_at, info.look_from);
    let projection = ProjectionInfo::new(60.0, 16.0 / 9.0, 0.1, 100.0);
    assert_eq!(camera.view_matrix(), view.view_matrix().as_array());
    assert_eq!(camera.projection_matrix(), projection.projection_matrix().as_array());

    destroy_turntable_camera(camera);
}

#[test]
fn view_projection_is_projection_times_view() {
    let camera = TurntableCamera::new(&sample_info());
    let view = Mat4::from(*camera.view_matrix());
    let projection = Mat4::from(*camera.projection_matrix());
    assert_eq!(
        camera.view_projection_matrix(),
        projection.multiply(&view).as_array()
    );
    // The opposite order is a different matrix.
    assert_ne!(
        camera.view_projection_matrix(),
        view.multiply(&projection).as_array()
    );
}

#[test]
fn target_lands_in_the_middle_of_the_screen() {
    let camera = TurntableCamera::new(&sample_info());
    let ndc = camera.world_to_ndc(&Point3::ORIGIN);
    assert!(ndc.x.abs() < 1e-5 && ndc.y.abs() < 1e-5, "{ndc}");
    assert!(ndc.z > 0.0 && ndc.z < 1.0, "{ndc}");
}

#[test]
fn projection_info_keeps_parameters() {
    let camera = TurntableCamera::new(&sample_info());
    let p = camera.projection_info();
    assert_eq!(p.vertical_fov_degrees(), 60.0);
    assert_eq!(p.aspect_ratio(), 16.0 / 9.0);
    assert_eq!(p.z_near(), 0.1);
    assert_eq!(p.z_far(), 100.0);
    assert!(!p.is_infinite());
    assert_eq!(camera.view_info().look_at(), Point3::ORIGIN);
}

#[test]
fn negative_far_is_infinite() {
    let info = CameraCreateInfo {
        z_far: -1.0,
        ..sample_info()
    };
    let camera = TurntableCamera::try_new(&info).expect("infinite far plane is valid");
    assert!(camera.projection_info().is_infinite());
    let m = camera.projection_matrix();
    assert_eq!(m[10], -1.0);
    assert_eq!(m[11], -1.0);
    assert_eq!(m[14], -0.1);
}

#[test]
fn set_aspect_ratio_recomputes_projection_only() {
    let mut camera = TurntableCamera::new(&sample_info());
    let view_before = *camera.view_matrix();
    camera.set_aspect_ratio(1.0);

    assert_eq!(camera.view_matrix(), &view_before);
    let expected = ProjectionInfo::new(60.0, 1.0, 0.1, 100.0);
    approx_eq16(
        camera.projection_matrix(),
        expected.projection_matrix().as_array(),
        0.0,
    );
    let combined = expected
        .projection_matrix()
        .multiply(&Mat4::from(view_before));
    approx_eq16(camera.view_projection_matrix(), combined.as_array(), 1e-6);
}

#[test]
fn try_new_rejects_coincident_eye() {
    let info = CameraCreateInfo {
        look_from: Point3::ORIGIN,
        ..sample_info()
    };
    let err = TurntableCamera::try_new(&info).unwrap_err();
    assert!(matches!(err, CameraError::CoincidentEye { .. }), "{err}");
}

#[test]
fn try_new_accepts_valid_configuration() {
    let info = sample_info();
    let checked = TurntableCamera::try_new(&info).expect("valid configuration");
    assert_eq!(checked, TurntableCamera::new(&info));
}
