// Sanity checks on the fixed timing and layout constants.

use intro_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn phase_boundaries_are_ordered() {
    assert!(0.0 < FADE_IN_MS && FADE_IN_MS < FLOAT_END_MS);
    assert!(FLOAT_END_MS < GATHER_END_MS);
    assert!(GATHER_END_MS < HOLD_END_MS);
    assert_eq!(ANIMATION_DURATION_MS, 6000.0);
    assert_eq!((FLOAT_END_MS, GATHER_END_MS, HOLD_END_MS), (2500.0, 4500.0, 6000.0));
}

#[test]
fn finish_sequence_delays() {
    assert_eq!(FINISH_HIDE_DELAY_MS, 500);
    assert_eq!(HIDE_REMOVE_DELAY_MS, 1000);
    assert_eq!(SCATTER_TRANSITION_MS, 800);
    assert_eq!(VIDEO_LOAD_TIMEOUT_MS, 8000);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn particle_ranges_are_sane() {
    assert_eq!(HEART_COUNT, 30);
    assert!(HEART_SIZE_MIN_PX < HEART_SIZE_MAX_PX);
    assert!(HEART_SPEED_MIN > 0.0 && HEART_SPEED_MIN < HEART_SPEED_MAX);
    // Spawn below the fold so hearts rise into view.
    assert!(SPAWN_Y > 100.0);
    assert!(!HEART_GLYPHS.is_empty());
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn heart_fits_in_the_viewport() {
    // Curve extents: |x| <= 16, y in [-12, 17] after flipping.
    assert!(HEART_CENTER_X - 16.0 * HEART_SCALE > 0.0);
    assert!(HEART_CENTER_X + 16.0 * HEART_SCALE < 100.0);
    assert!(HEART_CENTER_Y - 12.0 * HEART_SCALE > 0.0);
    assert!(HEART_CENTER_Y + 17.0 * HEART_SCALE < 100.0);
}
