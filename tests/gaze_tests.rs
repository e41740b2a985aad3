// Host-side tests for pupil geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod gaze {
    include!("../src/gaze.rs");
}

use glam::DVec2;
use gaze::*;

const EPS: f64 = 1e-9;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn short_pull_along_x_axis() {
    let off = pupil_offset(DVec2::new(130.0, 100.0), DVec2::new(100.0, 100.0));
    assert!(approx(off.x, 1.0), "x = {}", off.x);
    assert!(approx(off.y, 0.0), "y = {}", off.y);
}

#[test]
fn far_pointer_is_clamped_to_max_offset() {
    let off = pupil_offset(DVec2::new(300.0, 400.0), DVec2::ZERO);
    assert!((off.x - 4.8).abs() < 1e-6, "x = {}", off.x);
    assert!((off.y - 6.4).abs() < 1e-6, "y = {}", off.y);
    assert!(approx(off.length(), 8.0));
}

#[test]
fn coincident_pointer_and_center_is_zero() {
    let c = DVec2::new(42.5, -17.0);
    let off = pupil_offset(c, c);
    assert_eq!(off, DVec2::ZERO);
    assert!(!off.x.is_nan() && !off.y.is_nan());
}

#[test]
fn offset_magnitude_and_direction_over_grid() {
    let centers = [DVec2::ZERO, DVec2::new(100.0, 100.0), DVec2::new(-50.0, 320.0)];
    for c in centers {
        for px in (-600..=600).step_by(37) {
            for py in (-600..=600).step_by(41) {
                let p = DVec2::new(px as f64, py as f64);
                let off = pupil_offset(p, c);
                let d = p - c;

                let expected_len = (d.length() / 30.0).min(8.0);
                assert!(off.length() <= 8.0 + EPS);
                assert!(
                    (off.length() - expected_len).abs() < 1e-9,
                    "len mismatch at p={p:?} c={c:?}"
                );

                if off.length() > 1e-6 {
                    let want = d.y.atan2(d.x);
                    let got = off.y.atan2(off.x);
                    let diff = got - want;
                    assert!(
                        diff.sin().abs() < 1e-9 && diff.cos() > 0.0,
                        "angle mismatch at p={p:?} c={c:?}: {got} vs {want}"
                    );
                }
            }
        }
    }
}

#[test]
fn non_finite_input_yields_zero() {
    let c = DVec2::new(10.0, 10.0);
    assert_eq!(pupil_offset(DVec2::new(f64::NAN, 3.0), c), DVec2::ZERO);
    assert_eq!(pupil_offset(DVec2::new(f64::INFINITY, 3.0), c), DVec2::ZERO);
    assert_eq!(pupil_offset(c, DVec2::new(0.0, f64::NAN)), DVec2::ZERO);
}

#[test]
fn eye_rect_center_and_degeneracy() {
    let r = EyeRect::new(10.0, 20.0, 40.0, 60.0);
    assert_eq!(r.center(), DVec2::new(30.0, 50.0));
    assert!(!r.is_degenerate());

    assert!(EyeRect::new(10.0, 20.0, 0.0, 60.0).is_degenerate());
    assert!(EyeRect::new(10.0, 20.0, 40.0, 0.0).is_degenerate());
    assert!(EyeRect::new(10.0, 20.0, -1.0, 5.0).is_degenerate());
    assert!(EyeRect::new(f64::NAN, 20.0, 40.0, 60.0).is_degenerate());
    assert!(EyeRect::default().is_degenerate());
}

#[test]
fn degenerate_eye_keeps_pupil_centered() {
    let collapsed = EyeRect::new(100.0, 100.0, 0.0, 0.0);
    assert_eq!(offset_for_eye(DVec2::new(900.0, -300.0), &collapsed), DVec2::ZERO);
}

#[test]
fn offset_for_eye_uses_rect_center() {
    // center (100, 100)
    let eye = EyeRect::new(80.0, 90.0, 40.0, 20.0);
    let off = offset_for_eye(DVec2::new(100.0, 130.0), &eye);
    assert!(approx(off.x, 0.0), "x = {}", off.x);
    assert!(approx(off.y, 1.0), "y = {}", off.y);
}

#[test]
fn custom_params_change_reach_and_cap() {
    let params = GazeParams {
        max_offset_px: 3.0,
        distance_divisor: 10.0,
    };
    let near = params.offset(DVec2::new(20.0, 0.0), DVec2::ZERO);
    assert!(approx(near.x, 2.0));
    let far = params.offset(DVec2::new(0.0, -1000.0), DVec2::ZERO);
    assert!(approx(far.y, -3.0));
    assert!(approx(far.length(), 3.0));
}

#[test]
fn transform_css_wraps_offset_in_centering_translation() {
    assert_eq!(
        pupil_transform_css(DVec2::new(1.0, 0.0)),
        "translate(calc(-50% + 1px), calc(-50% + 0px))"
    );
    assert_eq!(
        pupil_transform_css(DVec2::new(-2.5, 3.0)),
        "translate(calc(-50% + -2.5px), calc(-50% + 3px))"
    );
}
