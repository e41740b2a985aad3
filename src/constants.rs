// Tuning constants for the eye and character effects.
//
// These keep magic numbers out of the geometry and transform code; the
// runtime-adjustable copies live in `EffectParams`.

// Host-page selectors
pub const PUPIL_SELECTOR: &str = ".pupil";
pub const CHARACTER_SELECTOR: &str = ".character";

// Pupil tracking
pub const PUPIL_MAX_OFFSET_PX: f64 = 8.0; // furthest a pupil may travel from the eye center
pub const POINTER_DISTANCE_DIVISOR: f64 = 30.0; // viewport px of pointer distance per px of pupil travel

// Character hover
pub const HOVER_SCALE: f64 = 1.05;
pub const HOVER_ROTATE_DEG: f64 = 2.0;
pub const IDLE_SCALE: f64 = 1.0;
pub const IDLE_ROTATE_DEG: f64 = 0.0;
