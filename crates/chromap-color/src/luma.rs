//! BT.601 luma for BGR-ordered pixels.

use crate::math::BT601_LUMA;
use chromap_core::Channel;

/// Weighted BT.601 luma of a BGR pixel, unrounded.
///
/// Channel 2 is weighted as red and channel 0 as blue:
/// `Y = 0.299 c2 + 0.587 c1 + 0.114 c0`.
#[inline]
pub fn luma_bt601_bgr<T: Channel>(pixel: [T; 3]) -> f64 {
    let [wr, wg, wb] = BT601_LUMA;
    wr * pixel[2].to_f64() + wg * pixel[1].to_f64() + wb * pixel[0].to_f64()
}

/// Luma of an 8-bit BGR pixel, truncated toward zero.
///
/// ```
/// use chromap_color::gray_u8;
///
/// assert_eq!(gray_u8([255, 255, 255]), 255);
/// assert_eq!(gray_u8([0, 0, 255]), 76);
/// ```
#[inline]
pub fn gray_u8(pixel: [u8; 3]) -> u8 {
    // weights sum to 1, so an 8-bit input never exceeds 255
    luma_bt601_bgr(pixel) as u8
}
