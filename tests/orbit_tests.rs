// Host-side tests for the orbiting camera.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod orbit {
    include!("../src/core/orbit.rs");
}

use constants::*;
use glam::Vec3;
use orbit::*;

fn horizontal_radius(p: Vec3) -> f32 {
    (p.x * p.x + p.z * p.z).sqrt()
}

#[test]
fn orbit_point_starts_on_positive_x() {
    let p = orbit_point(&OrbitParams::default(), 0.0);
    assert!((p - Vec3::new(CAMERA_ORBIT_RADIUS, CAMERA_HEIGHT, 0.0)).length() < 1e-5);
}

#[test]
fn orbit_point_stays_on_circle() {
    let params = OrbitParams::default();
    let mut t = 0.0_f64;
    while t < 60_000.0 {
        let p = orbit_point(&params, t);
        assert!((horizontal_radius(p) - 30.0).abs() < 1e-3, "t={t} p={p:?}");
        assert_eq!(p.y, CAMERA_HEIGHT);
        t += 137.0;
    }
}

#[test]
fn orbit_point_handles_epoch_timestamps() {
    let params = OrbitParams::default();
    // 2026-ish wall-clock milliseconds
    let t0 = 1.79e12_f64;
    for k in 0..50 {
        let p = orbit_point(&params, t0 + k as f64 * 16.0);
        assert!(p.is_finite());
        assert!((horizontal_radius(p) - 30.0).abs() < 1e-3);
    }
}

#[test]
fn orbit_quarter_turn() {
    let params = OrbitParams::default();
    let quarter_ms = std::f64::consts::FRAC_PI_2 / CAMERA_ORBIT_RATE;
    let p = orbit_point(&params, quarter_ms);
    assert!(p.x.abs() < 1e-3);
    assert!((p.z - 30.0).abs() < 1e-3);
}

#[test]
fn new_camera_sits_on_orbit_looking_at_origin() {
    let cam = OrbitCamera::new(OrbitParams::default(), 0.0);
    assert_eq!(cam.target, Vec3::ZERO);
    assert!((horizontal_radius(cam.position) - 30.0).abs() < 1e-4);
}

#[test]
fn update_blends_a_fixed_fraction_toward_goal() {
    let params = OrbitParams::default();
    let mut cam = OrbitCamera::new(params.clone(), 0.0);
    let start = cam.position;
    let t = 2_000.0;
    let goal = orbit_point(&params, t);
    cam.update(t);
    let expected = start + (goal - start) * CAMERA_BLEND;
    assert!((cam.position - expected).length() < 1e-4);
}

#[test]
fn repeated_updates_converge_to_goal() {
    let params = OrbitParams::default();
    let mut cam = OrbitCamera::new(params.clone(), 0.0);
    let t = 5_000.0;
    let goal = orbit_point(&params, t);
    let mut prev = (cam.position - goal).length();
    for _ in 0..500 {
        cam.update(t);
        let d = (cam.position - goal).length();
        assert!(d <= prev + 1e-5);
        prev = d;
    }
    assert!(prev < 0.01);
}

#[test]
fn view_proj_is_finite_for_common_aspects() {
    let cam = OrbitCamera::new(OrbitParams::default(), 1234.0);
    for aspect in [0.5_f32, 1.0, 16.0 / 9.0, 3.0] {
        let m = cam.view_proj(aspect);
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }
}

#[test]
fn origin_projects_to_screen_center() {
    let cam = OrbitCamera::new(OrbitParams::default(), 0.0);
    let clip = cam.view_proj(16.0 / 9.0) * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!(ndc.x.abs() < 1e-4 && ndc.y.abs() < 1e-4);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}
