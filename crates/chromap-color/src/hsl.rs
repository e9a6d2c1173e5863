//! HSV to HSL converter.
//!
//! Both models share the hue channel; only saturation and the brightness
//! axis change:
//!
//! ```text
//! L   = V (1 - S_v / 2)
//! S_l = (V - L) / min(L, 1 - L)     (0 when L is exactly 0 or 1)
//! ```

use crate::math::{denormalize, normalize};
use chromap_core::Channel;

/// Converts an `[hue, saturation, value]` pixel to `[hue, saturation, lightness]`.
///
/// Hue passes through untouched and unvalidated. Saturation and lightness
/// are returned on the 0-255 scale, rounded to whole numbers.
///
/// # Example
///
/// ```rust
/// use chromap_color::hsv_to_hsl;
///
/// assert_eq!(hsv_to_hsl([200u8, 255, 255]), [200.0, 255.0, 128.0]);
/// assert_eq!(hsv_to_hsl([42u8, 0, 0]), [42.0, 0.0, 0.0]);
/// ```
pub fn hsv_to_hsl<T: Channel>(pixel: [T; 3]) -> [f64; 3] {
    let h = pixel[0].to_f64();
    let s = normalize(pixel[1].to_f64());
    let v = normalize(pixel[2].to_f64());

    let lightness = v * (1.0 - s / 2.0);
    let saturation = if lightness == 0.0 || lightness == 1.0 {
        0.0
    } else {
        (v - lightness) / lightness.min(1.0 - lightness)
    };

    [
        h,
        denormalize(saturation).round(),
        denormalize(lightness).round(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_degenerate() {
        for h in [0.0, 90.0, 359.0] {
            assert_eq!(hsv_to_hsl([h, 0.0, 0.0]), [h, 0.0, 0.0]);
        }
    }

    #[test]
    fn test_white_degenerate() {
        assert_eq!(hsv_to_hsl([17u8, 0, 255]), [17.0, 0.0, 255.0]);
    }

    #[test]
    fn test_black_with_saturation() {
        // V = 0 forces L = 0 whatever S is
        assert_eq!(hsv_to_hsl([17u8, 255, 0]), [17.0, 0.0, 0.0]);
    }

    #[test]
    fn test_mid_values() {
        assert_eq!(hsv_to_hsl([200u8, 128, 200]), [200.0, 122.0, 150.0]);
        assert_eq!(hsv_to_hsl([0u8, 255, 128]), [0.0, 255.0, 64.0]);
    }

    #[test]
    fn test_hue_is_not_validated() {
        assert_eq!(hsv_to_hsl([-720.5, 0.0, 0.0])[0], -720.5);
        assert_eq!(hsv_to_hsl([1000.0f32, 0.0, 0.0])[0], 1000.0);
    }
}
