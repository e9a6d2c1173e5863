//! BGR to single-channel grayscale.
//!
//! Collapses a 3-channel 8-bit BGR buffer into one luma channel with the
//! BT.601 weights, truncating each result to an integer:
//!
//! ```text
//! Y = trunc(0.299 c2 + 0.587 c1 + 0.114 c0)
//! ```
//!
//! # Example
//!
//! ```rust
//! use chromap_core::{Image, Bgr};
//! use chromap_ops::grayscale::to_grayscale;
//!
//! let img: Image<Bgr, u8, 3> = Image::filled(4, 4, [0, 0, 255]);
//! let gray = to_grayscale(&img);
//! assert_eq!(gray.pixel(3, 3), [76]);
//! ```

use crate::MapOptions;
use crate::map::{for_each_row, try_for_each_row};
use chromap_color::gray_u8;
use chromap_core::{Bgr, Gray, Image, Result, grid_dimensions};
use tracing::{debug, trace};

/// Converts a BGR image to grayscale with default [`MapOptions`].
pub fn to_grayscale(image: &Image<Bgr, u8, 3>) -> Image<Gray, u8, 1> {
    to_grayscale_with(image, &MapOptions::default())
}

/// Converts a BGR image to grayscale.
pub fn to_grayscale_with(image: &Image<Bgr, u8, 3>, opts: &MapOptions) -> Image<Gray, u8, 1> {
    let (width, height) = image.dimensions();
    trace!(width, height, "to_grayscale");

    let mut out = Image::new(width, height);
    if image.is_empty() {
        return out;
    }
    let parallel = opts.runs_parallel(image.pixel_count());
    debug!(width, height, parallel, "Converting to grayscale");

    for_each_row(out.data_mut(), width as usize, parallel, |y, dst| {
        for (s, d) in image.row(y as u32).chunks_exact(3).zip(dst.iter_mut()) {
            *d = gray_u8([s[0], s[1], s[2]]);
        }
    });
    out
}

/// Converts a 2D grid of BGR pixels, `rows[y][x]`, to grayscale with
/// default [`MapOptions`].
///
/// # Errors
///
/// - [`Error::Empty`](chromap_core::Error::Empty) if the grid has no pixels.
/// - [`Error::Shape`](chromap_core::Error::Shape) if a row's width differs
///   from row 0.
pub fn grayscale_rows<R: AsRef<[[u8; 3]]> + Sync>(rows: &[R]) -> Result<Image<Gray, u8, 1>> {
    grayscale_rows_with(rows, &MapOptions::default())
}

/// Converts a 2D grid of BGR pixels, `rows[y][x]`, to grayscale.
pub fn grayscale_rows_with<R: AsRef<[[u8; 3]]> + Sync>(
    rows: &[R],
    opts: &MapOptions,
) -> Result<Image<Gray, u8, 1>> {
    let (width, height) = grid_dimensions(rows)?;
    trace!(width, height, "grayscale_rows");

    let mut out = Image::new(width, height);
    let parallel = opts.runs_parallel(out.pixel_count());
    debug!(width, height, parallel, "Converting pixel grid to grayscale");

    try_for_each_row(out.data_mut(), width as usize, parallel, |y, dst| {
        for (&px, d) in rows[y].as_ref().iter().zip(dst.iter_mut()) {
            *d = gray_u8(px);
        }
        Ok(())
    })?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Execution;
    use chromap_core::Error;

    #[test]
    fn test_reference_pixels() {
        let rows = vec![vec![[255u8, 255, 255], [0, 0, 0], [0, 0, 255]]];
        let img: Image<Bgr, u8, 3> = Image::from_rows(&rows).unwrap();
        let gray = to_grayscale(&img);
        assert_eq!(gray.data(), &[255, 0, 76]);
    }

    #[test]
    fn test_bgr_weighting() {
        // Channel 0 carries the smallest weight
        let img: Image<Bgr, u8, 3> = Image::from_data(2, 1, vec![255, 0, 0, 0, 0, 255]).unwrap();
        let gray = to_grayscale(&img);
        assert_eq!(gray.data(), &[29, 76]);
    }

    #[test]
    fn test_dimensions_kept() {
        let img: Image<Bgr, u8, 3> = Image::new(7, 3);
        let gray = to_grayscale(&img);
        assert_eq!(gray.dimensions(), (7, 3));
        assert_eq!(gray.channels(), 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let data: Vec<u8> = (0..64 * 48 * 3).map(|i| (i * 7 % 256) as u8).collect();
        let img: Image<Bgr, u8, 3> = Image::from_data(64, 48, data).unwrap();
        let seq = to_grayscale_with(&img, &MapOptions::sequential());
        let par = to_grayscale_with(
            &img,
            &MapOptions::default().with_execution(Execution::Parallel),
        );
        assert_eq!(seq, par);
    }

    #[test]
    fn test_rows_ragged() {
        let rows = vec![vec![[0u8; 3]; 4], vec![[0u8; 3]; 5]];
        assert!(matches!(
            grayscale_rows(&rows),
            Err(Error::Shape { row: 1, expected: 4, got: 5 })
        ));
    }

    #[test]
    fn test_rows_parallel_matches_sequential() {
        let rows: Vec<Vec<[u8; 3]>> = (0..20u8)
            .map(|y| (0..33u8).map(|x| [x, y, x.wrapping_mul(y)]).collect())
            .collect();
        let seq = grayscale_rows_with(&rows, &MapOptions::sequential()).unwrap();
        let par = grayscale_rows_with(
            &rows,
            &MapOptions::default().with_execution(Execution::Parallel),
        )
        .unwrap();
        assert_eq!(seq, par);
    }

    #[test]
    fn test_rows_match_image() {
        let rows = vec![vec![[10u8, 20, 30], [40, 50, 60]], vec![[70u8, 80, 90], [1, 2, 3]]];
        let img: Image<Bgr, u8, 3> = Image::from_rows(&rows).unwrap();
        assert_eq!(grayscale_rows(&rows).unwrap(), to_grayscale(&img));
    }
}
