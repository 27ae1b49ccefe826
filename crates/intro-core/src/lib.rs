//! Platform-free core of the heart intro overlay: the asset preload gate and
//! the phased particle animation it unlocks.

pub mod constants;
pub mod controller;
pub mod ease;
pub mod heart;
pub mod particle;
pub mod preload;

pub use controller::*;
pub use particle::{Particle, ParticleSeed, ParticleStyle};
pub use preload::*;
