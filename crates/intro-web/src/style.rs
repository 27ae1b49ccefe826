// Pure CSS formatting for particle styles and the progress indicator.
// Kept free of `web_sys` so host tests can `include!` it.

use intro_core::{ParticleStyle, PreloadProgress};

/// Inline style declarations for one particle frame, in application order.
///
/// The transition goes first so the browser animates the properties that
/// follow it.
pub fn particle_declarations(style: &ParticleStyle) -> Vec<(&'static str, String)> {
    let mut decls = Vec::with_capacity(5);
    if let Some(ms) = style.transition_ms {
        decls.push(("transition", transition_value(ms)));
    }
    decls.push(("left", format!("{:.3}vw", style.position.x)));
    decls.push(("top", format!("{:.3}vh", style.position.y)));
    decls.push(("opacity", format!("{:.3}", style.opacity.clamp(0.0, 1.0))));
    decls.push(("transform", transform_value(style.scale, style.rotation_deg)));
    decls
}

pub fn transform_value(scale: f32, rotation_deg: f32) -> String {
    format!("scale({:.3}) rotate({:.2}deg)", scale, rotation_deg)
}

pub fn transition_value(ms: u32) -> String {
    format!("all {}s ease-out", ms as f32 / 1000.0)
}

#[inline]
pub fn font_size_value(size_px: f32) -> String {
    format!("{}px", size_px.round() as u32)
}

/// Progress bar width, e.g. `"42%"`.
#[inline]
pub fn progress_width(progress: &PreloadProgress) -> String {
    format!("{}%", progress.percent())
}

/// Percent label, e.g. `"42%"`.
#[inline]
pub fn progress_label(progress: &PreloadProgress) -> String {
    format!("{}%", progress.percent())
}
