// Pupil geometry: where a pupil should sit given the pointer and its eye.
//
// Everything here is platform-free so it can be exercised on the host. The
// web layer feeds in viewport coordinates from `getBoundingClientRect` and
// `clientX/clientY`, which share the same origin.

use crate::constants::{POINTER_DISTANCE_DIVISOR, PUPIL_MAX_OFFSET_PX};
use glam::DVec2;

/// Bounding box of an eye in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EyeRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl EyeRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> DVec2 {
        DVec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// True for collapsed (zero/negative size) or non-finite boxes.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        let finite = self.left.is_finite()
            && self.top.is_finite()
            && self.width.is_finite()
            && self.height.is_finite();
        !finite || self.width <= 0.0 || self.height <= 0.0
    }
}

/// How far and how eagerly a pupil follows the pointer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GazeParams {
    pub max_offset_px: f64,
    pub distance_divisor: f64,
}

impl Default for GazeParams {
    fn default() -> Self {
        Self {
            max_offset_px: PUPIL_MAX_OFFSET_PX,
            distance_divisor: POINTER_DISTANCE_DIVISOR,
        }
    }
}

impl GazeParams {
    /// Pupil offset from the eye center toward `pointer`.
    ///
    /// The travel is the pointer distance divided by `distance_divisor`,
    /// capped at `max_offset_px`, along `atan2(dy, dx)`.
    pub fn offset(&self, pointer: DVec2, eye_center: DVec2) -> DVec2 {
        if !pointer.is_finite() || !eye_center.is_finite() || self.distance_divisor <= 0.0 {
            return DVec2::ZERO;
        }
        let delta = pointer - eye_center;
        let angle = delta.y.atan2(delta.x);
        let distance = (delta.length() / self.distance_divisor).min(self.max_offset_px);
        DVec2::new(angle.cos() * distance, angle.sin() * distance)
    }

    /// Offset for a live eye box; collapsed boxes keep the pupil centered.
    pub fn offset_for_eye(&self, pointer: DVec2, eye: &EyeRect) -> DVec2 {
        if eye.is_degenerate() {
            return DVec2::ZERO;
        }
        self.offset(pointer, eye.center())
    }
}

#[inline]
pub fn pupil_offset(pointer: DVec2, eye_center: DVec2) -> DVec2 {
    GazeParams::default().offset(pointer, eye_center)
}

#[inline]
pub fn offset_for_eye(pointer: DVec2, eye: &EyeRect) -> DVec2 {
    GazeParams::default().offset_for_eye(pointer, eye)
}

/// CSS transform placing the pupil's own center at `offset` from the eye
/// center. The -50% terms undo the pupil's size so it stays centered.
pub fn pupil_transform_css(offset: DVec2) -> String {
    format!(
        "translate(calc(-50% + {}px), calc(-50% + {}px))",
        offset.x, offset.y
    )
}
