#![cfg(target_arch = "wasm32")]
use instant::Instant;
use intro_core::{preload_assets, IntroController};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod constants;
mod dom;
mod frame;
mod overlay;
mod preload;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("intro-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::document()?;
    dom::dom_ready(&document).await;

    let surface = overlay::DomSurface::from_document(&document);
    let mut progress = overlay::ProgressBar::from_document(&document);
    let intro = frame::Intro::new_shared(IntroController::new(StdRng::from_entropy()), surface);

    // Skip is live from the start, including while assets are loading.
    let intro_skip = intro.clone();
    dom::add_click_listener(&document, constants::SKIP_BUTTON_ID, move || {
        // A click dispatched synchronously from inside an intro step finds it borrowed.
        match intro_skip.try_borrow_mut() {
            Ok(mut intro) => intro.skip(),
            Err(_) => log::warn!("[intro] skip ignored while a step is running"),
        }
    });

    let assets = preload::discover_asset_urls(&document);
    let loader = preload::BrowserLoader::new(document.clone());
    let started = Instant::now();
    let settled = preload_assets(assets.into_urls(), &loader, &mut progress).await;
    log::info!(
        "[preload] {}/{} assets settled in {:?}",
        settled.loaded(),
        settled.total(),
        started.elapsed()
    );

    intro.borrow_mut().begin();
    Ok(())
}
