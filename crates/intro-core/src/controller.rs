//! Phase-driven intro animation.
//!
//! The controller owns the particle set and the animation clock. The host
//! feeds it frame timestamps and fired timers; the controller answers by
//! mutating the [`Surface`] and asking the [`Scheduler`] for the next wake-up.
//! Nothing here touches a real rendering surface, so the whole sequence can be
//! driven with synthetic timestamps.

use crate::constants::*;
use crate::particle::{gather_ease, Particle, ParticleSeed, ParticleStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Animation phases in the order they are entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for preloading to finish.
    LoadingGate,
    Floating,
    Gathering,
    Holding,
    /// Scatter launched (natural end) or skip requested.
    Finishing,
    /// Overlay fading out; removal pending.
    Hiding,
    Done,
}

impl Phase {
    /// Phase for a given time on the animation clock.
    pub fn at(progress_ms: f64) -> Phase {
        if progress_ms < FLOAT_END_MS {
            Phase::Floating
        } else if progress_ms < GATHER_END_MS {
            Phase::Gathering
        } else if progress_ms < HOLD_END_MS {
            Phase::Holding
        } else {
            Phase::Finishing
        }
    }

    #[inline]
    pub fn is_animating(self) -> bool {
        matches!(self, Phase::Floating | Phase::Gathering | Phase::Holding)
    }

    #[inline]
    pub fn is_finished(self) -> bool {
        matches!(self, Phase::Finishing | Phase::Hiding | Phase::Done)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FinishCause {
    /// The hold phase ran out.
    Natural,
    /// The user dismissed the intro.
    Skipped,
}

/// Delayed steps of the finish sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    HideOverlay,
    RemoveOverlay,
}

/// Host wake-up primitives: the next animation frame and fixed delays.
pub trait Scheduler {
    fn request_frame(&mut self);
    fn request_timer(&mut self, delay_ms: u32, timer: Timer);
}

/// The visual side of the overlay.
pub trait Surface {
    type Handle;

    fn spawn_particle(&mut self, glyph: &'static str, size: f32) -> Self::Handle;
    fn apply_style(&mut self, handle: &Self::Handle, style: &ParticleStyle);
    /// Overlay is about to animate.
    fn mark_ready(&mut self);
    /// Broadcast to the rest of the page that assets are ready. Called once.
    fn announce_ready(&mut self);
    /// Start the fade-out.
    fn hide_overlay(&mut self);
    /// Take the overlay out of layout and hit-testing.
    fn remove_overlay(&mut self);
}

pub struct IntroController<H> {
    phase: Phase,
    particles: Vec<Particle<H>>,
    particle_count: usize,
    start_time: Option<f64>,
    finish_cause: Option<FinishCause>,
    ready_announced: bool,
    rng: StdRng,
}

impl<H> IntroController<H> {
    pub fn new(rng: StdRng) -> Self {
        Self {
            phase: Phase::LoadingGate,
            particles: Vec::new(),
            particle_count: HEART_COUNT,
            start_time: None,
            finish_cause: None,
            ready_announced: false,
            rng,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn particles(&self) -> &[Particle<H>] {
        &self.particles
    }

    /// Timestamp of the first animation frame, once it arrived.
    pub fn start_time(&self) -> Option<f64> {
        self.start_time
    }

    pub fn finish_cause(&self) -> Option<FinishCause> {
        self.finish_cause
    }

    /// Preloading settled: reveal the overlay, spawn particles, start framing.
    ///
    /// If the intro was already skipped this only broadcasts readiness.
    pub fn begin<S, Sch>(&mut self, surface: &mut S, scheduler: &mut Sch)
    where
        S: Surface<Handle = H>,
        Sch: Scheduler,
    {
        if !self.ready_announced {
            self.ready_announced = true;
            surface.announce_ready();
        }
        if self.phase != Phase::LoadingGate {
            log::debug!("[intro] begin ignored in {:?}", self.phase);
            return;
        }

        surface.mark_ready();
        self.particles.reserve(self.particle_count);
        for _ in 0..self.particle_count {
            let seed = ParticleSeed::random(&mut self.rng);
            let element = surface.spawn_particle(seed.glyph, seed.size);
            let particle = Particle::new(element, &seed);
            surface.apply_style(&particle.element, &particle.spawn_style());
            self.particles.push(particle);
        }
        self.enter(Phase::Floating);
        scheduler.request_frame();
    }

    /// One animation frame at host timestamp `now_ms`.
    ///
    /// Frames outside the animating phases are ignored and never reschedule,
    /// so a frame already queued when skip fired is harmless.
    pub fn on_frame<S, Sch>(&mut self, now_ms: f64, surface: &mut S, scheduler: &mut Sch)
    where
        S: Surface<Handle = H>,
        Sch: Scheduler,
    {
        if !self.phase.is_animating() {
            return;
        }
        let start = *self.start_time.get_or_insert(now_ms);
        let progress = (now_ms - start).max(0.0);

        match Phase::at(progress) {
            Phase::Floating => {
                for p in &mut self.particles {
                    let style = p.float_step(progress);
                    surface.apply_style(&p.element, &style);
                }
                scheduler.request_frame();
            }
            Phase::Gathering => {
                self.enter(Phase::Gathering);
                self.apply_gather(gather_ease(progress), surface);
                scheduler.request_frame();
            }
            Phase::Holding => {
                // The last gathering frame may have landed short of ease 1, or
                // been skipped entirely by a long frame gap.
                if self.phase != Phase::Holding {
                    self.apply_gather(1.0, surface);
                    self.enter(Phase::Holding);
                }
                scheduler.request_frame();
            }
            Phase::Finishing => {
                self.finish(FinishCause::Natural, surface, scheduler);
            }
            // `Phase::at` only yields time-driven phases.
            Phase::LoadingGate | Phase::Hiding | Phase::Done => {}
        }
    }

    fn apply_gather<S>(&self, ease: f32, surface: &mut S)
    where
        S: Surface<Handle = H>,
    {
        let count = self.particles.len();
        for (i, p) in self.particles.iter().enumerate() {
            surface.apply_style(&p.element, &p.gather_style(i, count, ease));
        }
    }

    /// User dismissal. Returns `false` if the finish sequence already started.
    pub fn skip<S, Sch>(&mut self, surface: &mut S, scheduler: &mut Sch) -> bool
    where
        S: Surface<Handle = H>,
        Sch: Scheduler,
    {
        self.finish(FinishCause::Skipped, surface, scheduler)
    }

    /// Enters the finish sequence at most once.
    ///
    /// A natural finish scatters the particles and hides the overlay after a
    /// short delay. A skip hides right away without the scatter.
    pub fn finish<S, Sch>(
        &mut self,
        cause: FinishCause,
        surface: &mut S,
        scheduler: &mut Sch,
    ) -> bool
    where
        S: Surface<Handle = H>,
        Sch: Scheduler,
    {
        if self.phase.is_finished() {
            return false;
        }
        self.finish_cause = Some(cause);
        self.enter(Phase::Finishing);
        match cause {
            FinishCause::Natural => {
                for p in &self.particles {
                    let style = p.scatter_style(&mut self.rng);
                    surface.apply_style(&p.element, &style);
                }
                scheduler.request_timer(FINISH_HIDE_DELAY_MS, Timer::HideOverlay);
            }
            FinishCause::Skipped => self.hide(surface, scheduler),
        }
        true
    }

    /// A timer requested earlier fired. Timers that no longer match the
    /// current phase are dropped.
    pub fn on_timer<S, Sch>(&mut self, timer: Timer, surface: &mut S, scheduler: &mut Sch)
    where
        S: Surface<Handle = H>,
        Sch: Scheduler,
    {
        match (timer, self.phase) {
            (Timer::HideOverlay, Phase::Finishing) => self.hide(surface, scheduler),
            (Timer::RemoveOverlay, Phase::Hiding) => {
                surface.remove_overlay();
                self.particles.clear();
                self.enter(Phase::Done);
            }
            (timer, phase) => log::debug!("[intro] stale {:?} in {:?}", timer, phase),
        }
    }

    fn hide<S, Sch>(&mut self, surface: &mut S, scheduler: &mut Sch)
    where
        S: Surface<Handle = H>,
        Sch: Scheduler,
    {
        surface.hide_overlay();
        self.enter(Phase::Hiding);
        scheduler.request_timer(HIDE_REMOVE_DELAY_MS, Timer::RemoveOverlay);
    }

    fn enter(&mut self, phase: Phase) {
        if self.phase != phase {
            log::debug!("[intro] {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }
}
