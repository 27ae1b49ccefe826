// Preload gate followed by the animation, end to end.

mod common;

use common::{FakeLoader, ManualScheduler, Outcome, ProgressLog, RecordingSurface};
use futures::executor::block_on;
use intro_core::{preload_assets, AssetSet, IntroController, Phase, Timer};

#[test]
fn failed_image_does_not_block_the_intro() {
    let mut set = AssetSet::with_fallback("https://site/img/fallback.jpg");
    set.insert("https://site/img/gallery.png");
    set.insert("https://site/media/loop.webm");

    let mut loader = FakeLoader::default();
    loader
        .outcomes
        .insert("https://site/img/gallery.png".to_string(), Outcome::Fail);

    let mut log = ProgressLog::default();
    let done = block_on(preload_assets(set.into_urls(), &loader, &mut log));
    assert_eq!(done.total(), 3);
    assert_eq!(done.percent(), 100);
    {
        let calls = loader.calls.borrow();
        assert_eq!(calls.iter().filter(|(_, k, _)| *k == "image").count(), 2);
        assert_eq!(calls.iter().filter(|(_, k, _)| *k == "video").count(), 1);
        assert!(calls.iter().any(|(_, _, o)| *o == Outcome::Fail));
    }

    let mut ctl: IntroController<usize> = IntroController::seeded(7);
    let mut surface = RecordingSurface::default();
    let mut sched = ManualScheduler::default();
    ctl.begin(&mut surface, &mut sched);
    assert_eq!(ctl.phase(), Phase::Floating);
    assert_eq!(surface.announced, 1);
    assert_eq!(sched.frames_requested, 1);

    let mut t = 0.0;
    while sched.take_frame() {
        ctl.on_frame(t, &mut surface, &mut sched);
        t += 16.7;
    }
    assert_eq!(ctl.phase(), Phase::Finishing);
    while let Some((_, timer)) = sched.take_timer() {
        ctl.on_timer(timer, &mut surface, &mut sched);
    }
    assert_eq!(ctl.phase(), Phase::Done);
    assert_eq!(surface.hidden, 1);
    assert_eq!(surface.removed, 1);
    assert!(!matches!(sched.take_timer(), Some((_, Timer::HideOverlay))));
}

#[test]
fn empty_page_starts_without_delay() {
    let loader = FakeLoader::default();
    let mut log = ProgressLog::default();
    let done = block_on(preload_assets(Vec::new(), &loader, &mut log));
    assert_eq!(log.updates.len(), 1);
    assert_eq!(done.percent(), 100);

    let mut ctl: IntroController<usize> = IntroController::seeded(1);
    let mut surface = RecordingSurface::default();
    let mut sched = ManualScheduler::default();
    ctl.begin(&mut surface, &mut sched);
    assert_eq!(sched.frames_requested, 1);
}
