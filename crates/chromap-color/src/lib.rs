//! # chromap-color
//!
//! Stateless single-pixel color-model converters.
//!
//! Every converter takes one pixel's three channel values and returns the
//! converted values as raw `f64`s. Converters are independent of each other
//! and of any image buffer, so they can be handed to a pixel mapper as plain
//! function values.
//!
//! | Converter | Input | Output |
//! |-----------|-------|--------|
//! | [`rgb_to_his`] | `[R, G, B]` 0-255 | `[H°, I, S]` |
//! | [`hsi_to_rgb`] | `[H°, S, I]` | `[R, G, B]` |
//! | [`his_to_rgb`] | `[H°, I, S]` | `[R, G, B]` |
//! | [`hsv_to_hsl`] | `[H, S, V]` 0-255 | `[H, S, L]` rounded |
//! | [`gray_u8`] | `[B, G, R]` u8 | luma u8, truncated |
//!
//! Hue is always in degrees. No output is clamped; see each converter for
//! when values can leave [0, 255].
//!
//! # Quick Start
//!
//! ```rust
//! use chromap_color::{rgb_to_his, hsv_to_hsl};
//!
//! let [h, i, s] = rgb_to_his([255u8, 255, 0]);
//! assert!((h - 60.0).abs() < 1e-9);
//! assert!((i - 170.0).abs() < 1e-9);
//! assert!((s - 255.0).abs() < 1e-9);
//!
//! assert_eq!(hsv_to_hsl([h, 255.0, 255.0])[2], 128.0);
//! ```
//!
//! # Dependencies
//!
//! - [`chromap_core`] - [`Channel`](chromap_core::Channel) scalar trait
//!
//! # Used By
//!
//! - `chromap-ops` - whole-image mapping and grayscale

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod his;
pub mod hsl;
pub mod luma;
pub mod math;

pub use his::{his_to_hsi, his_to_rgb, hsi_to_rgb, rgb_to_his};
pub use hsl::hsv_to_hsl;
pub use luma::{gray_u8, luma_bt601_bgr};

/// Prelude with the converters.
pub mod prelude {
    pub use crate::{gray_u8, his_to_hsi, his_to_rgb, hsi_to_rgb, hsv_to_hsl, rgb_to_his};
    pub use crate::math::{BT601_LUMA, CHANNEL_MAX};
}
