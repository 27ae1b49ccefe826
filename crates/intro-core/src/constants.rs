//! Timing and layout constants for the intro animation.
//!
//! All positions are in viewport percent (`vw` horizontally, `vh` vertically) and all
//! times are milliseconds on the animation clock.

// Particle set
pub const HEART_COUNT: usize = 30;
pub const HEART_GLYPHS: [&str; 5] = ["❤️", "💖", "💗", "💓", "💞"];
pub const HEART_SIZE_MIN_PX: u32 = 15;
pub const HEART_SIZE_MAX_PX: u32 = 35; // exclusive
pub const HEART_SPEED_MIN: f32 = 0.5;
pub const HEART_SPEED_MAX: f32 = 1.0; // exclusive
pub const SPAWN_Y: f32 = 110.0; // just below the visible area

// Phase boundaries on the animation clock
pub const FLOAT_END_MS: f64 = 2500.0;
pub const GATHER_END_MS: f64 = 4500.0;
pub const HOLD_END_MS: f64 = 6000.0;
pub const ANIMATION_DURATION_MS: f64 = HOLD_END_MS; // failsafe end of the whole sequence

// Floating
pub const FADE_IN_MS: f64 = 500.0;
pub const FLOAT_STEP: f32 = 0.8; // vh per frame, scaled by particle speed
pub const WOBBLE_FREQ: f64 = 0.002; // radians per ms
pub const WOBBLE_AMPLITUDE: f32 = 0.5; // vw
pub const WOBBLE_ROTATION_DEG: f32 = 10.0; // degrees per unit of wobble

// Gathering into the heart silhouette
pub const HEART_CENTER_X: f32 = 50.0;
pub const HEART_CENTER_Y: f32 = 45.0;
pub const HEART_SCALE: f32 = 1.2;
pub const GATHER_PULSE: f32 = 0.2; // extra scale at full ease

// Finish sequence
pub const SCATTER_SCALE: f32 = 3.0;
pub const SCATTER_TRANSITION_MS: u32 = 800;
pub const FINISH_HIDE_DELAY_MS: u32 = 500;
pub const HIDE_REMOVE_DELAY_MS: u32 = 1000;

// Preloading
pub const VIDEO_LOAD_TIMEOUT_MS: u32 = 8000;
