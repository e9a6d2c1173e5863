//! Shared fixtures for the chromap benchmarks.

use chromap_core::{Bgr, Image, Result};

/// Deterministic BGR test pattern of the given size.
pub fn test_image(width: u32, height: u32) -> Result<Image<Bgr, u8, 3>> {
    let data = (0..width as usize * height as usize * 3)
        .map(|i| (i * 31 % 256) as u8)
        .collect();
    Image::from_data(width, height, data)
}

/// Deterministic list of 8-bit pixels.
pub fn test_pixels(count: u32) -> Vec<[u8; 3]> {
    (0..count)
        .map(|i| [(i % 256) as u8, (i * 7 % 256) as u8, (i * 13 % 256) as u8])
        .collect()
}
