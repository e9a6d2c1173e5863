//! Error types for chromap operations.
//!
//! A single [`Error`] enum covers every failure mode of the workspace:
//! - Buffer shape problems (ragged rows, empty grids, bad flat lengths)
//! - Failures raised by caller-supplied pixel functions
//! - Out-of-range values at explicit checked boundary conversions
//!
//! The converters themselves are total functions and never produce an error.
//! Out-of-gamut results are returned as raw floats and only surface as
//! [`Error::Domain`] when a caller asks for a checked conversion back to a
//! fixed-range channel type.
//!
//! # Usage
//!
//! ```rust
//! use chromap_core::{Error, Result};
//!
//! fn check_row(row: usize, expected: usize, got: usize) -> Result<()> {
//!     if got != expected {
//!         return Err(Error::shape(row, expected, got));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_row(1, 4, 3).unwrap_err().is_shape_error());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error raised by a fallible pixel function.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while building or converting image buffers.
///
/// # Categories
///
/// - **Shape errors**: [`Shape`](Error::Shape), [`Empty`](Error::Empty),
///   [`InvalidDimensions`](Error::InvalidDimensions)
/// - **Conversion errors**: [`Conversion`](Error::Conversion)
/// - **Domain errors**: [`Domain`](Error::Domain)
#[derive(Debug, Error)]
pub enum Error {
    /// A row of a 2D pixel grid has a different width than the first row.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chromap_core::Error;
    ///
    /// let err = Error::shape(2, 640, 639);
    /// assert!(err.to_string().contains("row 2"));
    /// ```
    #[error("row {row} has width {got}, expected {expected}")]
    Shape {
        /// Index of the first offending row
        row: usize,
        /// Width of row 0
        expected: usize,
        /// Width of the offending row
        got: usize,
    },

    /// The pixel grid has no rows or zero-width rows.
    #[error("image is empty")]
    Empty,

    /// Flat pixel data does not match the requested dimensions.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// A pixel function failed at position (x, y).
    ///
    /// The whole mapping is aborted; no partial output is returned.
    #[error("pixel conversion failed at ({x}, {y}): {source}")]
    Conversion {
        /// Column of the failing pixel
        x: u32,
        /// Row of the failing pixel
        y: u32,
        /// Error raised by the pixel function
        #[source]
        source: BoxError,
    },

    /// A channel value cannot be represented in the target channel type.
    ///
    /// Only raised by checked boundary conversions such as
    /// [`Image::try_convert_format`](crate::Image::try_convert_format).
    #[error("channel {channel} at ({x}, {y}) has value {value}, outside [{min}, {max}]")]
    Domain {
        /// Column of the offending pixel
        x: u32,
        /// Row of the offending pixel
        y: u32,
        /// Channel index within the pixel
        channel: usize,
        /// Offending value
        value: f64,
        /// Smallest representable value
        min: f64,
        /// Largest representable value
        max: f64,
    },
}

impl Error {
    /// Creates an [`Error::Shape`] error.
    #[inline]
    pub fn shape(row: usize, expected: usize, got: usize) -> Self {
        Self::Shape { row, expected, got }
    }

    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::Conversion`] error.
    #[inline]
    pub fn conversion(x: u32, y: u32, source: impl Into<BoxError>) -> Self {
        Self::Conversion {
            x,
            y,
            source: source.into(),
        }
    }

    /// Creates an [`Error::Domain`] error.
    #[inline]
    pub fn domain(x: u32, y: u32, channel: usize, value: f64, range: (f64, f64)) -> Self {
        Self::Domain {
            x,
            y,
            channel,
            value,
            min: range.0,
            max: range.1,
        }
    }

    /// Returns `true` for ragged-row, empty-grid, and flat-length errors.
    #[inline]
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::Shape { .. } | Self::Empty | Self::InvalidDimensions { .. }
        )
    }

    /// Returns `true` if a pixel function failed.
    #[inline]
    pub fn is_conversion_error(&self) -> bool {
        matches!(self, Self::Conversion { .. })
    }

    /// Returns `true` if a value was out of range at a checked boundary.
    #[inline]
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::Domain { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("bad pixel")]
    struct BadPixel;

    #[test]
    fn test_shape() {
        let err = Error::shape(3, 10, 9);
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("10"));
        assert!(msg.contains("9"));
        assert!(err.is_shape_error());
        assert!(!err.is_conversion_error());
    }

    #[test]
    fn test_empty_is_shape_error() {
        assert!(Error::Empty.is_shape_error());
    }

    #[test]
    fn test_conversion_keeps_source() {
        let err = Error::conversion(4, 7, BadPixel);
        assert!(err.is_conversion_error());
        assert!(err.to_string().contains("(4, 7)"));

        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "bad pixel");
    }

    #[test]
    fn test_domain() {
        let err = Error::domain(1, 2, 0, 300.5, (0.0, 255.0));
        assert!(err.is_domain_error());
        let msg = err.to_string();
        assert!(msg.contains("300.5"));
        assert!(msg.contains("255"));
    }
}
