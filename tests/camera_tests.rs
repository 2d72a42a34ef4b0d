// Host-side tests for the shared scene camera.

#![allow(dead_code)]
#[path = "../src/core/constants.rs"]
mod constants;
#[path = "../src/core/state.rs"]
mod state;

use constants::{ABOUT_CAMERA_Z, CAMERA_FOVY_DEG, HERO_CAMERA_Z};
use glam::{Vec3, Vec4};
use state::Camera;

#[test]
fn camera_uses_the_page_projection() {
    let cam = Camera::at_z(HERO_CAMERA_Z, 1.0);
    assert_eq!(cam.eye, Vec3::new(0.0, 0.0, 5.0));
    assert_eq!(cam.target, Vec3::ZERO);
    assert!((cam.fovy_radians - CAMERA_FOVY_DEG.to_radians()).abs() < 1e-6);
}

#[test]
fn origin_projects_to_the_canvas_center() {
    for z in [HERO_CAMERA_Z, ABOUT_CAMERA_Z] {
        let cam = Camera::at_z(z, 400.0 / 400.0);
        let clip = cam.view_proj() * Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc_x = clip.x / clip.w;
        let ndc_y = clip.y / clip.w;
        assert!(ndc_x.abs() < 1e-5 && ndc_y.abs() < 1e-5);
    }
}

#[test]
fn aspect_updates_reject_degenerate_values() {
    let mut cam = Camera::at_z(HERO_CAMERA_Z, 2.0);
    cam.set_aspect(0.0);
    assert_eq!(cam.aspect, 2.0);
    cam.set_aspect(f32::NAN);
    assert_eq!(cam.aspect, 2.0);
    cam.set_aspect(1.5);
    assert_eq!(cam.aspect, 1.5);
}
