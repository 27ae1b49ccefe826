// Recording fakes for driving the controller and preloader without a page.
#![allow(dead_code)]

use futures::future::{self, FutureExt, LocalBoxFuture};
use intro_core::{
    AssetLoader, ParticleStyle, PreloadProgress, ProgressSink, Scheduler, Surface, Timer,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub spawned: Vec<(&'static str, f32)>,
    pub styles: HashMap<usize, Vec<ParticleStyle>>,
    pub ready: usize,
    pub announced: usize,
    pub hidden: usize,
    pub removed: usize,
}

impl RecordingSurface {
    pub fn last_style(&self, id: usize) -> &ParticleStyle {
        self.styles[&id].last().expect("particle has a style")
    }

    pub fn style_count(&self) -> usize {
        self.styles.values().map(Vec::len).sum()
    }
}

impl Surface for RecordingSurface {
    type Handle = usize;

    fn spawn_particle(&mut self, glyph: &'static str, size: f32) -> usize {
        self.spawned.push((glyph, size));
        self.spawned.len() - 1
    }

    fn apply_style(&mut self, handle: &usize, style: &ParticleStyle) {
        self.styles.entry(*handle).or_default().push(style.clone());
    }

    fn mark_ready(&mut self) {
        self.ready += 1;
    }

    fn announce_ready(&mut self) {
        self.announced += 1;
    }

    fn hide_overlay(&mut self) {
        self.hidden += 1;
    }

    fn remove_overlay(&mut self) {
        self.removed += 1;
    }
}

#[derive(Debug, Default)]
pub struct ManualScheduler {
    pub frames_requested: usize,
    pub timers: Vec<(u32, Timer)>,
}

impl ManualScheduler {
    /// Takes the pending frame request, if any.
    pub fn take_frame(&mut self) -> bool {
        if self.frames_requested > 0 {
            self.frames_requested -= 1;
            true
        } else {
            false
        }
    }

    pub fn take_timer(&mut self) -> Option<(u32, Timer)> {
        if self.timers.is_empty() {
            None
        } else {
            Some(self.timers.remove(0))
        }
    }
}

impl Scheduler for ManualScheduler {
    fn request_frame(&mut self) {
        self.frames_requested += 1;
    }

    fn request_timer(&mut self, delay_ms: u32, timer: Timer) {
        self.timers.push((delay_ms, timer));
    }
}

#[derive(Debug, Default)]
pub struct ProgressLog {
    pub updates: Vec<PreloadProgress>,
}

impl ProgressSink for ProgressLog {
    fn update_progress(&mut self, progress: PreloadProgress) {
        self.updates.push(progress);
    }
}

/// Per-URL scripted outcome for the fake loader.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Load,
    Fail,
}

/// Resolves every load immediately; records which primitive was used.
#[derive(Default)]
pub struct FakeLoader {
    pub outcomes: HashMap<String, Outcome>,
    pub calls: Rc<RefCell<Vec<(String, &'static str, Outcome)>>>,
}

impl FakeLoader {
    fn settle(&self, url: &str, kind: &'static str) -> LocalBoxFuture<'static, ()> {
        let outcome = self.outcomes.get(url).copied().unwrap_or(Outcome::Load);
        self.calls.borrow_mut().push((url.to_string(), kind, outcome));
        // Failures are swallowed by the loader, so both outcomes resolve.
        future::ready(()).boxed_local()
    }
}

impl AssetLoader for FakeLoader {
    fn load_image(&self, url: &str) -> LocalBoxFuture<'static, ()> {
        self.settle(url, "image")
    }

    fn load_video(&self, url: &str) -> LocalBoxFuture<'static, ()> {
        self.settle(url, "video")
    }
}

/// A page without overlay markup: particles get no element, only the
/// broadcast is observable.
#[derive(Debug, Default)]
pub struct BlankSurface {
    pub announced: usize,
}

impl Surface for BlankSurface {
    type Handle = Option<usize>;

    fn spawn_particle(&mut self, _glyph: &'static str, _size: f32) -> Option<usize> {
        None
    }

    fn apply_style(&mut self, _handle: &Option<usize>, _style: &ParticleStyle) {}

    fn mark_ready(&mut self) {}

    fn announce_ready(&mut self) {
        self.announced += 1;
    }

    fn hide_overlay(&mut self) {}

    fn remove_overlay(&mut self) {}
}
