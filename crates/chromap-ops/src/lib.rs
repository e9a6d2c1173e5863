//! # chromap-ops
//!
//! Whole-image color-model operations.
//!
//! # Modules
//!
//! - [`map`] - Apply any single-pixel converter across an image
//! - [`grayscale`] - BGR to single-channel luma
//! - [`options`] - Sequential/parallel execution control
//!
//! # Example
//!
//! ```rust
//! use chromap_core::prelude::*;
//! use chromap_color::{his_to_rgb, rgb_to_his};
//! use chromap_ops::{map_pixels, to_grayscale};
//!
//! let rows = vec![vec![[30u8, 60, 90], [200, 100, 50]]];
//! let src: Image<Bgr, u8, 3> = Image::from_rows(&rows)?;
//!
//! // rgb_to_his reads channel 0 as red
//! let his: Image<His, f64, 3> = map_pixels(&src, rgb_to_his);
//! let back: Image<Rgb, f64, 3> = map_pixels(&his, his_to_rgb);
//! assert!((back.pixel(1, 0)[0] - 200.0).abs() < 1e-9);
//!
//! let gray = to_grayscale(&src);
//! assert_eq!(gray.dimensions(), (2, 1));
//! # Ok::<(), chromap_core::Error>(())
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` - Split sweeps across the rayon pool (enabled by default)
//!
//! # Logging
//!
//! Operations emit `tracing` events at `trace` (entry, dimensions) and
//! `debug` (execution mode). No subscriber is installed here.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod grayscale;
pub mod map;
pub mod options;

pub use grayscale::{grayscale_rows, grayscale_rows_with, to_grayscale, to_grayscale_with};
pub use map::{
    map_pixels, map_pixels_with, map_rows, try_map_pixels, try_map_pixels_with, try_map_rows,
    try_map_rows_with,
};
pub use options::{Execution, MapOptions};
