//! Particle state and the per-phase style snapshots the surface renders.

use crate::constants::*;
use crate::ease::{ease_in_out, lerp};
use crate::heart::heart_target;
use glam::Vec2;
use rand::prelude::*;
use std::f32::consts::TAU;

/// Everything the surface needs to draw one particle for one frame.
///
/// `position` is in viewport percent; `transition_ms` is set only for the
/// one-shot scatter, which the surface animates on its own.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleStyle {
    pub position: Vec2,
    pub opacity: f32,
    pub rotation_deg: f32,
    pub scale: f32,
    pub transition_ms: Option<u32>,
}

/// Randomized creation parameters, kept separate from the visual handle so
/// spawning can be tested without a surface.
#[derive(Clone, Debug)]
pub struct ParticleSeed {
    pub glyph: &'static str,
    pub size: f32,
    pub start_x: f32,
    pub speed: f32,
    pub wobble_phase: f32,
}

impl ParticleSeed {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let glyph = *HEART_GLYPHS.choose(rng).unwrap_or(&HEART_GLYPHS[0]);
        Self {
            glyph,
            size: rng.gen_range(HEART_SIZE_MIN_PX..HEART_SIZE_MAX_PX) as f32,
            start_x: rng.gen_range(0.0..100.0),
            speed: rng.gen_range(HEART_SPEED_MIN..HEART_SPEED_MAX),
            wobble_phase: rng.gen_range(0.0..TAU),
        }
    }
}

/// One animated heart. Owns its visual handle `H`; dropping the particle
/// drops the handle.
#[derive(Debug)]
pub struct Particle<H> {
    pub element: H,
    /// Floating anchor: `x` never changes, `y` drifts up while floating.
    pub position: Vec2,
    pub size: f32,
    pub speed: f32,
    pub wobble_phase: f32,
}

impl<H> Particle<H> {
    pub fn new(element: H, seed: &ParticleSeed) -> Self {
        Self {
            element,
            position: Vec2::new(seed.start_x, SPAWN_Y),
            size: seed.size,
            speed: seed.speed,
            wobble_phase: seed.wobble_phase,
        }
    }

    /// Horizontal sway at `progress_ms`.
    #[inline]
    pub fn wobble(&self, progress_ms: f64) -> f32 {
        (progress_ms * WOBBLE_FREQ + self.wobble_phase as f64).sin() as f32 * WOBBLE_AMPLITUDE
    }

    pub fn spawn_style(&self) -> ParticleStyle {
        ParticleStyle {
            position: self.position,
            opacity: 0.0,
            rotation_deg: 0.0,
            scale: 1.0,
            transition_ms: None,
        }
    }

    /// Advances one floating frame. The rise is a fixed step per frame, not
    /// scaled by frame delta.
    pub fn float_step(&mut self, progress_ms: f64) -> ParticleStyle {
        self.position.y -= self.speed * FLOAT_STEP;
        let wobble = self.wobble(progress_ms);
        ParticleStyle {
            position: Vec2::new(self.position.x + wobble, self.position.y),
            opacity: (progress_ms / FADE_IN_MS).clamp(0.0, 1.0) as f32,
            rotation_deg: wobble * WOBBLE_ROTATION_DEG,
            scale: 1.0,
            transition_ms: None,
        }
    }

    /// Where the particle sits when gathering starts: its anchor plus the
    /// sway it would have at the end of floating.
    pub fn gather_origin(&self) -> Vec2 {
        Vec2::new(self.position.x + self.wobble(FLOAT_END_MS), self.position.y)
    }

    /// Gathering frame for particle `index` of `count` at eased factor `ease`.
    pub fn gather_style(&self, index: usize, count: usize, ease: f32) -> ParticleStyle {
        let from = self.gather_origin();
        let to = heart_target(index, count);
        ParticleStyle {
            position: Vec2::new(lerp(from.x, to.x, ease), lerp(from.y, to.y, ease)),
            opacity: 1.0,
            rotation_deg: 0.0,
            scale: 1.0 + ease * GATHER_PULSE,
            transition_ms: None,
        }
    }

    pub fn scatter_style<R: Rng + ?Sized>(&self, rng: &mut R) -> ParticleStyle {
        ParticleStyle {
            position: Vec2::new(rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)),
            opacity: 0.0,
            rotation_deg: rng.gen_range(0.0..360.0),
            scale: SCATTER_SCALE,
            transition_ms: Some(SCATTER_TRANSITION_MS),
        }
    }
}

/// Normalized, eased gathering factor at `progress_ms`.
pub fn gather_ease(progress_ms: f64) -> f32 {
    let t = (progress_ms - FLOAT_END_MS) / (GATHER_END_MS - FLOAT_END_MS);
    ease_in_out(t as f32)
}
