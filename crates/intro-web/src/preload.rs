use crate::constants::*;
use crate::dom;
use futures::future::{FutureExt, LocalBoxFuture};
use intro_core::constants::VIDEO_LOAD_TIMEOUT_MS;
use intro_core::{settle_or_timeout, AssetLoader, AssetSet, Settled};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Collects absolute URLs of every image and video source on the page, plus
/// the fallback asset.
pub fn discover_asset_urls(document: &web::Document) -> AssetSet {
    let mut assets = AssetSet::with_fallback(resolve_url(document, FALLBACK_ASSET_URL));

    let images = document.images();
    for i in 0..images.length() {
        if let Some(img) = images
            .item(i)
            .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
        {
            assets.insert(img.src());
        }
    }

    if let Ok(nodes) = document.query_selector_all(VIDEO_SOURCE_SELECTOR) {
        for i in 0..nodes.length() {
            let Some(node) = nodes.item(i) else {
                continue;
            };
            // `src` getters return the resolved URL, or "" when unset.
            if let Some(media) = node.dyn_ref::<web::HtmlMediaElement>() {
                assets.insert(media.src());
            } else if let Some(source) = node.dyn_ref::<web::HtmlSourceElement>() {
                assets.insert(source.src());
            }
        }
    }
    assets
}

fn resolve_url(document: &web::Document, raw: &str) -> String {
    let base = document.base_uri().ok().flatten().unwrap_or_default();
    web::Url::new_with_base(raw, &base)
        .map(|u| u.href())
        .unwrap_or_else(|_| raw.to_string())
}

/// Loads assets through off-tree media elements.
pub struct BrowserLoader {
    document: web::Document,
}

impl BrowserLoader {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl AssetLoader for BrowserLoader {
    fn load_image(&self, url: &str) -> LocalBoxFuture<'static, ()> {
        let url = url.to_string();
        async move { load_image(&url).await }.boxed_local()
    }

    fn load_video(&self, url: &str) -> LocalBoxFuture<'static, ()> {
        let url = url.to_string();
        let document = self.document.clone();
        async move { load_video(&document, &url).await }.boxed_local()
    }
}

async fn load_image(url: &str) {
    let img = match web::HtmlImageElement::new() {
        Ok(img) => img,
        Err(_) => return,
    };
    // Load errors resolve too: a missing image must not hold the intro.
    let settled = js_sys::Promise::new(&mut |resolve, _reject| {
        img.set_onload(Some(&resolve));
        img.set_onerror(Some(&resolve));
    });
    img.set_src(url);
    _ = JsFuture::from(settled).await;
    img.set_onload(None);
    img.set_onerror(None);
}

async fn load_video(document: &web::Document, url: &str) {
    let video = match document
        .create_element("video")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok())
    {
        Some(v) => v,
        None => return,
    };
    video.set_muted(true);
    _ = video.set_attribute("playsinline", "");
    video.set_preload("auto");

    let settled = js_sys::Promise::new(&mut |resolve, _reject| {
        for event in ["canplaythrough", "loadeddata", "error"] {
            _ = video.add_event_listener_with_callback(event, &resolve);
        }
    });
    video.set_src(url);

    let load = JsFuture::from(settled).map(|_| ());
    if settle_or_timeout(load, dom::delay(VIDEO_LOAD_TIMEOUT_MS)).await == Settled::TimedOut {
        log::debug!("[preload] video stalled, moving on: {}", url);
    }

    // Stop buffering.
    _ = video.remove_attribute("src");
    video.load();
}
