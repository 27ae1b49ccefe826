/// Symmetric quadratic ease-in-out on `[0, 1]`.
///
/// Input outside the unit interval is clamped, so callers can feed raw phase
/// progress without pre-clamping.
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
