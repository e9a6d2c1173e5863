//! Shared numeric helpers for the converters.
//!
//! Channel values cross the buffer boundary on the 0-255 scale and are
//! normalized to [0, 1] for the conversion math. Nothing here clamps:
//! out-of-gamut results stay visible to the caller.

/// Full-scale value of a boundary channel.
pub const CHANNEL_MAX: f64 = 255.0;

/// ITU-R BT.601 luma weights as `[R, G, B]`.
pub const BT601_LUMA: [f64; 3] = [0.299, 0.587, 0.114];

/// Scales a 0-255 channel value to [0, 1].
#[inline]
pub fn normalize(v: f64) -> f64 {
    v / CHANNEL_MAX
}

/// Scales a [0, 1] value back to 0-255. No clamping.
#[inline]
pub fn denormalize(v: f64) -> f64 {
    v * CHANNEL_MAX
}

/// Reduces an angle in degrees into [0, 360).
///
/// ```
/// use chromap_color::math::wrap_degrees;
///
/// assert_eq!(wrap_degrees(360.0), 0.0);
/// assert_eq!(wrap_degrees(-90.0), 270.0);
/// ```
#[inline]
pub fn wrap_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Smallest of three values.
#[inline]
pub fn min3(a: f64, b: f64, c: f64) -> f64 {
    a.min(b).min(c)
}

/// `acos` with its argument clamped to [-1, 1].
///
/// Rounding can push a ratio that is mathematically +/-1 just past the
/// domain, which would otherwise yield NaN.
#[inline]
pub fn safe_acos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}
