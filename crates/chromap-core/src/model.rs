//! Color-model marker types.
//!
//! Color models are zero-sized marker types implementing [`ColorModel`].
//! They tag an [`Image`](crate::Image) so the compiler can tell a
//! BGR source buffer from a grayscale result or an HIS intermediate.
//!
//! # Supported Models
//!
//! - [`Bgr`] - 8-bit color source buffers, channel 0 is blue
//! - [`Rgb`] - channel 0 is red
//! - [`His`] - `[hue, intensity, saturation]` as produced by RGB to HIS
//! - [`Hsi`] - `[hue, saturation, intensity]` as consumed by HSI to RGB
//! - [`Hsv`] - `[hue, saturation, value]`
//! - [`Hsl`] - `[hue, saturation, lightness]`
//! - [`Gray`] - single luma channel
//!
//! Hue channels are in degrees. All other channels use the 0-255 scale.
//!
//! # Usage
//!
//! ```
//! use chromap_core::prelude::*;
//!
//! fn describe<M: ColorModel>(_img: &Image<M, u8, 3>) -> &'static str {
//!     M::NAME
//! }
//!
//! let img: Image<Bgr, u8, 3> = Image::new(2, 2);
//! assert_eq!(describe(&img), "BGR");
//! ```

use std::fmt;

/// Trait for color-model marker types.
///
/// # Implementing Custom Models
///
/// ```
/// use chromap_core::ColorModel;
///
/// #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
/// pub struct Lab;
///
/// impl ColorModel for Lab {
///     const NAME: &'static str = "Lab";
///     const CHANNELS: usize = 3;
///     const LABELS: &'static [&'static str] = &["L", "a", "b"];
/// }
/// ```
pub trait ColorModel: Copy + Clone + Default + Send + Sync + fmt::Debug + 'static {
    /// Human-readable name of the model.
    const NAME: &'static str;

    /// Number of channels a pixel of this model carries.
    ///
    /// [`Image`](crate::Image) requires its `N` to match.
    const CHANNELS: usize;

    /// Per-channel labels in storage order.
    const LABELS: &'static [&'static str];
}

macro_rules! color_model {
    ($(#[$meta:meta])* $ty:ident, $name:literal, [$($label:literal),+] $(,)?) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $ty;

        impl ColorModel for $ty {
            const NAME: &'static str = $name;
            const CHANNELS: usize = [$($label),+].len();
            const LABELS: &'static [&'static str] = &[$($label),+];
        }
    };
}

color_model!(
    /// Blue-green-red ordering, the layout of 8-bit color source buffers.
    ///
    /// Grayscale conversion weights channel 2 as red and channel 0 as blue.
    Bgr, "BGR", ["B", "G", "R"],
);

color_model!(
    /// Red-green-blue ordering.
    Rgb, "RGB", ["R", "G", "B"],
);

color_model!(
    /// Hue, intensity, saturation: the output layout of RGB to HIS.
    His, "HIS", ["H", "I", "S"],
);

color_model!(
    /// Hue, saturation, intensity: the input layout of HSI to RGB.
    Hsi, "HSI", ["H", "S", "I"],
);

color_model!(
    /// Hue, saturation, value.
    Hsv, "HSV", ["H", "S", "V"],
);

color_model!(
    /// Hue, saturation, lightness.
    Hsl, "HSL", ["H", "S", "L"],
);

color_model!(
    /// Single-channel luma.
    Gray, "Gray", ["Y"],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_counts() {
        assert_eq!(Bgr::CHANNELS, 3);
        assert_eq!(His::CHANNELS, 3);
        assert_eq!(Gray::CHANNELS, 1);
    }

    #[test]
    fn test_layouts_differ() {
        assert_eq!(His::LABELS, &["H", "I", "S"]);
        assert_eq!(Hsi::LABELS, &["H", "S", "I"]);
    }
}
