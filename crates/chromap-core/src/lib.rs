//! # chromap-core
//!
//! Core types for pixel color-model conversion.
//!
//! This crate provides the foundational types used throughout chromap:
//!
//! - [`ColorModel`] - Trait and marker types tagging what a pixel's channels mean
//! - [`Channel`] - Scalar channel types (u8, u16, f32, f64)
//! - [`Image`] - Row-major image buffer with color-model tracking
//! - [`Error`] - Shape, conversion, and domain errors
//!
//! ## Design Philosophy
//!
//! An image buffer carries its color model in the type. A grayscale buffer
//! cannot be passed where a BGR buffer is expected, and the output of each
//! conversion is labelled with the model it produced:
//!
//! ```ignore
//! let src: Image<Bgr, u8, 3> = Image::from_rows(&rows)?;
//! let his: Image<His, f64, 3> = map_pixels(&src, rgb_to_his);
//! let back: Image<Rgb, f64, 3> = map_pixels(&his, his_to_rgb);
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//! chromap-core (this crate)
//!    ^
//!    |
//!    +-- chromap-color (single-pixel converters)
//!    +-- chromap-ops (pixel mapper, grayscale)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod error;
pub mod image;
pub mod model;

pub use channel::Channel;
pub use error::*;
pub use image::*;
pub use model::*;

/// Prelude module for convenient imports.
///
/// ```
/// use chromap_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::Channel;
    pub use crate::error::{Error, Result};
    pub use crate::image::Image;
    pub use crate::model::{Bgr, ColorModel, Gray, His, Hsi, Hsl, Hsv, Rgb};
}
