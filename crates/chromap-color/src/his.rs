//! RGB to HIS and HSI to RGB converters.
//!
//! The hue-intensity-saturation model splits a color into an angle on the
//! color wheel and two magnitudes:
//!
//! ```text
//! I = (r + g + b) / 3
//! S = 1 - min(r, g, b) / I                 (0 when I = 0)
//! H = acos(((r-g) + (r-b)) / (2 sqrt((r-g)^2 + (r-b)(g-b))))
//!     reflected to 360 - H when b > g
//! ```
//!
//! # Channel Layouts
//!
//! The forward converter reads channel 0 as red, channel 1 as green, and
//! channel 2 as blue, and writes `[H, I, S]` ([`His`](chromap_core::His)).
//! The inverse reads `[H, S, I]` ([`Hsi`](chromap_core::Hsi)).
//! [`his_to_hsi`] reorders between the two, and [`his_to_rgb`] chains the
//! reorder with the inverse so a forward result can be fed straight back.
//!
//! # Range
//!
//! Hue is in degrees, [0, 360). Intensity and saturation are scaled to
//! 0-255 but never clamped; the inverse likewise returns raw floats that may
//! leave [0, 255] for inputs outside the RGB gamut.
//!
//! # Example
//!
//! ```rust
//! use chromap_color::{his_to_rgb, rgb_to_his};
//! use approx::assert_abs_diff_eq;
//!
//! let his = rgb_to_his([10u8, 200, 30]);
//! let rgb = his_to_rgb(his);
//! assert_abs_diff_eq!(rgb[0], 10.0, epsilon = 1e-9);
//! assert_abs_diff_eq!(rgb[1], 200.0, epsilon = 1e-9);
//! assert_abs_diff_eq!(rgb[2], 30.0, epsilon = 1e-9);
//! ```

use crate::math::{denormalize, min3, normalize, safe_acos, wrap_degrees};
use chromap_core::Channel;
use std::f64::consts::{FRAC_PI_3, TAU};

/// Width of one hue sector of the inverse, in degrees.
const SECTOR: f64 = 120.0;

/// Converts an RGB pixel to `[hue, intensity, saturation]`.
///
/// Channel 0 is read as red and channel 2 as blue, whatever the buffer's
/// nominal layout. Hue is in degrees, [0, 360); intensity and saturation are
/// on the 0-255 scale and unclamped.
pub fn rgb_to_his<T: Channel>(pixel: [T; 3]) -> [f64; 3] {
    let r = normalize(pixel[0].to_f64());
    let g = normalize(pixel[1].to_f64());
    let b = normalize(pixel[2].to_f64());

    let intensity = (r + g + b) / 3.0;
    let saturation = if intensity != 0.0 {
        1.0 - min3(r, g, b) / intensity
    } else {
        0.0
    };

    let num = (r - g) + (r - b);
    let den = 2.0 * ((r - g).powi(2) + (r - b) * (g - b)).sqrt();
    let theta = if den != 0.0 { safe_acos(num / den) } else { 0.0 };
    let h = if b <= g { theta } else { TAU - theta };

    [
        wrap_degrees(h.to_degrees()),
        denormalize(intensity),
        denormalize(saturation),
    ]
}

/// Converts an `[hue, saturation, intensity]` pixel back to RGB.
///
/// Hue is in degrees; saturation and intensity are on the 0-255 scale.
/// Returns `[r, g, b]` on the 0-255 scale, unclamped.
///
/// Hues of 240 and above, including values past 360, use the blue-red
/// sector without wrapping.
pub fn hsi_to_rgb<T: Channel>(pixel: [T; 3]) -> [f64; 3] {
    let h = pixel[0].to_f64();
    let s = normalize(pixel[1].to_f64());
    let i = normalize(pixel[2].to_f64());

    let mut angle = h.to_radians();
    let (r, g, b);
    if h < SECTOR {
        b = i * (1.0 - s);
        r = dominant(i, s, angle);
        g = 3.0 * i - (r + b);
    } else if h < 2.0 * SECTOR {
        angle -= SECTOR.to_radians();
        r = i * (1.0 - s);
        g = dominant(i, s, angle);
        b = 3.0 * i - (r + g);
    } else {
        angle -= (2.0 * SECTOR).to_radians();
        g = i * (1.0 - s);
        b = dominant(i, s, angle);
        r = 3.0 * i - (g + b);
    }

    [denormalize(r), denormalize(g), denormalize(b)]
}

/// Reorders a forward result `[H, I, S]` into the inverse's `[H, S, I]`.
#[inline]
pub fn his_to_hsi<T: Channel>(pixel: [T; 3]) -> [T; 3] {
    [pixel[0], pixel[2], pixel[1]]
}

/// Converts a `[hue, intensity, saturation]` pixel back to RGB.
///
/// Equivalent to `hsi_to_rgb(his_to_hsi(pixel))`.
#[inline]
pub fn his_to_rgb<T: Channel>(pixel: [T; 3]) -> [f64; 3] {
    hsi_to_rgb(his_to_hsi(pixel))
}

/// Channel leading the current sector, `angle` relative to the sector start.
#[inline]
fn dominant(i: f64, s: f64, angle: f64) -> f64 {
    i * (1.0 + s * angle.cos() / (FRAC_PI_3 - angle).cos())
}
