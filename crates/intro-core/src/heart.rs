//! Parametric heart silhouette the particles gather into.

use crate::constants::{HEART_CENTER_X, HEART_CENTER_Y, HEART_SCALE};
use glam::Vec2;
use std::f32::consts::TAU;

/// Unscaled heart curve at `angle`, with y pointing down (screen space).
///
/// `x = 16 sin³(a)`, `y = -(13 cos a - 5 cos 2a - 2 cos 3a - cos 4a)`.
pub fn heart_offset(angle: f32) -> Vec2 {
    let x = 16.0 * angle.sin().powi(3);
    let y = 13.0 * angle.cos()
        - 5.0 * (2.0 * angle).cos()
        - 2.0 * (3.0 * angle).cos()
        - (4.0 * angle).cos();
    Vec2::new(x, -y)
}

/// Angle assigned to particle `index` out of `count`, evenly spread around the curve.
#[inline]
pub fn heart_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    TAU * index as f32 / count as f32
}

/// Viewport-space target for particle `index` out of `count`.
pub fn heart_target(index: usize, count: usize) -> Vec2 {
    let center = Vec2::new(HEART_CENTER_X, HEART_CENTER_Y);
    center + heart_offset(heart_angle(index, count)) * HEART_SCALE
}
