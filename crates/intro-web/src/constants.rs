// Page contract: ids, classes and names the overlay markup provides.

// Overlay structure
pub const OVERLAY_ID: &str = "intro-overlay";
pub const CONTAINER_SELECTOR: &str = ".intro-container";
pub const SKIP_BUTTON_ID: &str = "intro-skip";
pub const PROGRESS_BAR_ID: &str = "intro-progress-bar";
pub const PROGRESS_TEXT_ID: &str = "intro-progress-text";

// Classes toggled by the controller
pub const HEART_CLASS: &str = "intro-heart";
pub const READY_CLASS: &str = "is-ready";
pub const HIDDEN_CLASS: &str = "is-hidden";

// Fired on `document` once preloading settled
pub const ASSETS_READY_EVENT: &str = "intro:assets-ready";

// Always preloaded, resolved against the document base URL
pub const FALLBACK_ASSET_URL: &str = "images/intro-fallback.jpg";

// Media discovery
pub const VIDEO_SOURCE_SELECTOR: &str = "video, video source";
