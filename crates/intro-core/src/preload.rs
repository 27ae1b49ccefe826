//! Asset preload gate: URL classification, progress accounting and the
//! concurrent "wait until everything settled" aggregate.
//!
//! Nothing here can fail. A loader resolves its future whether the asset
//! loaded or not, and a stalled asset is cut off by [`settle_or_timeout`].

use fnv::FnvHashSet;
use futures::future::{self, Either, LocalBoxFuture};
use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;

const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "avif", "svg", "bmp", "ico",
];
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogv", "ogg", "mov", "m4v"];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssetKind {
    Image,
    Video,
    Other,
}

/// Partition a URL by its file extension. Query string and fragment are
/// ignored, matching is case-insensitive.
pub fn classify_url(url: &str) -> AssetKind {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let file = path.rsplit('/').next().unwrap_or(path);
    let ext = match file.rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => return AssetKind::Other,
    };
    if IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        AssetKind::Image
    } else if VIDEO_EXTENSIONS.contains(&ext.as_str()) {
        AssetKind::Video
    } else {
        AssetKind::Other
    }
}

/// Deduplicated set of absolute asset URLs. Always holds the fallback URL.
#[derive(Clone, Debug)]
pub struct AssetSet {
    urls: FnvHashSet<String>,
}

impl AssetSet {
    pub fn with_fallback(fallback: impl Into<String>) -> Self {
        let mut urls = FnvHashSet::default();
        urls.insert(fallback.into());
        Self { urls }
    }

    /// Adds a URL; blank entries (e.g. an `<img>` without `src`) are skipped.
    pub fn insert(&mut self, url: impl Into<String>) -> bool {
        let url = url.into();
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return false;
        }
        if trimmed.len() == url.len() {
            self.urls.insert(url)
        } else {
            self.urls.insert(trimmed.to_string())
        }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn into_urls(self) -> Vec<String> {
        self.urls.into_iter().collect()
    }
}

impl Extend<String> for AssetSet {
    fn extend<I: IntoIterator<Item = String>>(&mut self, iter: I) {
        for url in iter {
            self.insert(url);
        }
    }
}

/// `(loaded, total)` with `loaded <= total`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreloadProgress {
    loaded: usize,
    total: usize,
}

impl PreloadProgress {
    pub fn new(total: usize) -> Self {
        Self { loaded: 0, total }
    }

    pub fn loaded(&self) -> usize {
        self.loaded
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Counts one more settled asset; saturates at `total`.
    pub fn record_settled(&mut self) {
        if self.loaded < self.total {
            self.loaded += 1;
        }
    }

    pub fn is_complete(&self) -> bool {
        self.loaded == self.total
    }

    /// Whole percent in `[0, 100]`; an empty set counts as done.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        let pct = (100.0 * self.loaded as f64 / self.total as f64).round();
        pct.clamp(0.0, 100.0) as u32
    }
}

/// Media-loading primitive. Returned futures must resolve on success and on
/// failure alike.
pub trait AssetLoader {
    fn load_image(&self, url: &str) -> LocalBoxFuture<'static, ()>;
    fn load_video(&self, url: &str) -> LocalBoxFuture<'static, ()>;
}

/// Presentation hook for preload progress. Must not influence control flow.
pub trait ProgressSink {
    fn update_progress(&mut self, progress: PreloadProgress);
}

/// How a load raced against its failsafe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settled {
    Loaded,
    TimedOut,
}

/// Resolves with whichever of `load` or `delay` finishes first.
pub async fn settle_or_timeout<L, D>(load: L, delay: D) -> Settled
where
    L: Future<Output = ()>,
    D: Future<Output = ()>,
{
    futures::pin_mut!(load);
    futures::pin_mut!(delay);
    match future::select(load, delay).await {
        Either::Left(_) => Settled::Loaded,
        Either::Right(_) => Settled::TimedOut,
    }
}

/// Loads every URL concurrently and resolves once all of them settled.
///
/// The sink sees the initial state once, then one update per settled asset.
/// URLs classified as [`AssetKind::Other`] settle immediately.
pub async fn preload_assets<L, P>(urls: Vec<String>, loader: &L, sink: &mut P) -> PreloadProgress
where
    L: AssetLoader + ?Sized,
    P: ProgressSink + ?Sized,
{
    let mut progress = PreloadProgress::new(urls.len());
    sink.update_progress(progress);
    if urls.is_empty() {
        log::info!("[preload] no assets to wait for");
        return progress;
    }

    let mut pending: FuturesUnordered<LocalBoxFuture<'static, ()>> = urls
        .iter()
        .map(|url| match classify_url(url) {
            AssetKind::Image => loader.load_image(url),
            AssetKind::Video => loader.load_video(url),
            AssetKind::Other => Box::pin(future::ready(())) as LocalBoxFuture<'static, ()>,
        })
        .collect();

    while pending.next().await.is_some() {
        progress.record_settled();
        sink.update_progress(progress);
    }
    log::info!("[preload] {} assets settled", progress.loaded());
    progress
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_by_extension() {
        assert_eq!(classify_url("https://a.b/img/photo.JPG"), AssetKind::Image);
        assert_eq!(classify_url("/x/y.webp?v=3"), AssetKind::Image);
        assert_eq!(classify_url("clip.mp4#t=2"), AssetKind::Video);
        assert_eq!(classify_url("https://a.b/movie.webm"), AssetKind::Video);
        assert_eq!(classify_url("https://a.b/doc.pdf"), AssetKind::Other);
        assert_eq!(classify_url("https://a.b/noext"), AssetKind::Other);
    }

    #[test]
    fn dot_in_directory_is_not_an_extension() {
        assert_eq!(classify_url("https://cdn.example.com/media"), AssetKind::Other);
        assert_eq!(classify_url("https://cdn.example.com/a.png/raw"), AssetKind::Other);
    }

    #[test]
    fn asset_set_deduplicates_and_keeps_fallback() {
        let mut set = AssetSet::with_fallback("https://site/fallback.jpg");
        assert_eq!(set.len(), 1);
        assert!(set.insert("https://site/a.png"));
        assert!(!set.insert("https://site/a.png"));
        assert!(!set.insert("https://site/fallback.jpg"));
        assert!(!set.insert("   "));
        assert!(!set.insert(""));
        set.extend(vec![" https://site/b.mp4 ".to_string()]);
        assert_eq!(set.len(), 3);
        assert!(set.contains("https://site/b.mp4"));
        assert!(set.contains("https://site/fallback.jpg"));
    }

    #[test]
    fn percent_rounds_and_handles_empty() {
        assert_eq!(PreloadProgress::new(0).percent(), 100);
        let mut p = PreloadProgress::new(3);
        assert_eq!(p.percent(), 0);
        p.record_settled();
        assert_eq!(p.percent(), 33);
        p.record_settled();
        assert_eq!(p.percent(), 67);
        p.record_settled();
        assert_eq!(p.percent(), 100);
        p.record_settled();
        assert_eq!(p.loaded(), 3);
        assert!(p.is_complete());
    }
}
