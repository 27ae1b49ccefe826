use crate::overlay::DomSurface;
use intro_core::{IntroController, Scheduler, Timer};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Controller plus the page surface and scheduler it drives. Shared between
/// the animation-frame tick, timers and the skip button.
pub struct Intro {
    controller: IntroController<Option<web::HtmlElement>>,
    surface: DomSurface,
    scheduler: WebScheduler,
}

impl Intro {
    pub fn new_shared(
        controller: IntroController<Option<web::HtmlElement>>,
        surface: DomSurface,
    ) -> Rc<RefCell<Intro>> {
        Rc::new_cyclic(|weak| {
            RefCell::new(Intro {
                controller,
                surface,
                scheduler: WebScheduler::new(weak.clone()),
            })
        })
    }

    pub fn begin(&mut self) {
        self.controller.begin(&mut self.surface, &mut self.scheduler);
    }

    pub fn skip(&mut self) {
        if self.controller.skip(&mut self.surface, &mut self.scheduler) {
            log::info!("[intro] skipped");
        }
    }

    fn frame(&mut self, timestamp_ms: f64) {
        self.controller
            .on_frame(timestamp_ms, &mut self.surface, &mut self.scheduler);
    }

    fn timer(&mut self, timer: Timer) {
        self.controller
            .on_timer(timer, &mut self.surface, &mut self.scheduler);
    }
}

/// `requestAnimationFrame` and `setTimeout` behind the core `Scheduler`.
pub struct WebScheduler {
    intro: Weak<RefCell<Intro>>,
    tick: Closure<dyn FnMut(f64)>,
}

impl WebScheduler {
    fn new(intro: Weak<RefCell<Intro>>) -> Self {
        let target = intro.clone();
        let tick = Closure::wrap(Box::new(move |timestamp_ms: f64| {
            if let Some(intro) = target.upgrade() {
                intro.borrow_mut().frame(timestamp_ms);
            }
        }) as Box<dyn FnMut(f64)>);
        Self { intro, tick }
    }
}

impl Scheduler for WebScheduler {
    fn request_frame(&mut self) {
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(self.tick.as_ref().unchecked_ref());
        }
    }

    fn request_timer(&mut self, delay_ms: u32, timer: Timer) {
        let target = self.intro.clone();
        let fire = Closure::once_into_js(move || {
            if let Some(intro) = target.upgrade() {
                intro.borrow_mut().timer(timer);
            }
        });
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                fire.unchecked_ref(),
                delay_ms as i32,
            );
        }
    }
}
