//! Pixel mapper: applies a single-pixel function to every position.
//!
//! The source image is only ever borrowed; every call allocates a fresh
//! output of the same width and height. The channel count and color model
//! of the output are chosen by the pixel function's return type.
//!
//! # Example
//!
//! ```rust
//! use chromap_core::{Image, Bgr, His};
//! use chromap_color::rgb_to_his;
//! use chromap_ops::map_pixels;
//!
//! let src: Image<Bgr, u8, 3> = Image::filled(2, 2, [255, 0, 0]);
//! let his: Image<His, f64, 3> = map_pixels(&src, rgb_to_his);
//!
//! assert_eq!(his.dimensions(), (2, 2));
//! assert_eq!(src.pixel(0, 0), [255, 0, 0]);
//! ```
//!
//! # Parallelism
//!
//! With the `parallel` feature, sweeps split the output by rows across the
//! rayon pool. Each worker writes only its own rows and reads the shared
//! source. See [`MapOptions`] for when that happens.

use crate::MapOptions;
use chromap_core::{BoxError, Channel, ColorModel, Error, Image, Result, grid_dimensions};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace};

/// Maps `f` over every pixel of `image` with default [`MapOptions`].
pub fn map_pixels<M, M2, T, U, const N: usize, const K: usize, F>(
    image: &Image<M, T, N>,
    f: F,
) -> Image<M2, U, K>
where
    M: ColorModel,
    M2: ColorModel,
    T: Channel,
    U: Channel,
    F: Fn([T; N]) -> [U; K] + Sync,
{
    map_pixels_with(image, f, &MapOptions::default())
}

/// Maps `f` over every pixel of `image`.
pub fn map_pixels_with<M, M2, T, U, const N: usize, const K: usize, F>(
    image: &Image<M, T, N>,
    f: F,
    opts: &MapOptions,
) -> Image<M2, U, K>
where
    M: ColorModel,
    M2: ColorModel,
    T: Channel,
    U: Channel,
    F: Fn([T; N]) -> [U; K] + Sync,
{
    let (width, height) = image.dimensions();
    trace!(
        width,
        height,
        channels = N,
        out_channels = K,
        from = M::NAME,
        to = M2::NAME,
        "map_pixels"
    );

    let mut out = Image::new(width, height);
    if image.is_empty() {
        return out;
    }
    let parallel = opts.runs_parallel(image.pixel_count());
    debug!(width, height, parallel, "Mapping pixels");

    for_each_row(out.data_mut(), width as usize * K, parallel, |y, dst| {
        let src = image.row(y as u32);
        for (s, d) in src.chunks_exact(N).zip(dst.chunks_exact_mut(K)) {
            d.copy_from_slice(&f(to_pixel(s)));
        }
    });
    out
}

/// Maps a fallible `f` over every pixel of `image` with default [`MapOptions`].
///
/// # Errors
///
/// Returns [`Error::Conversion`] for a pixel where `f` failed. No output is
/// returned on failure.
///
/// # Example
///
/// ```rust
/// use chromap_core::{Image, Hsv, Hsl};
/// use chromap_color::hsv_to_hsl;
/// use chromap_ops::try_map_pixels;
///
/// let src: Image<Hsv, f64, 3> = Image::filled(2, 1, [400.0, 10.0, 10.0]);
/// let res: chromap_core::Result<Image<Hsl, f64, 3>> = try_map_pixels(&src, |px| {
///     if px[0] < 360.0 { Ok(hsv_to_hsl(px)) } else { Err("hue out of range") }
/// });
/// assert!(res.unwrap_err().is_conversion_error());
/// ```
pub fn try_map_pixels<M, M2, T, U, E, const N: usize, const K: usize, F>(
    image: &Image<M, T, N>,
    f: F,
) -> Result<Image<M2, U, K>>
where
    M: ColorModel,
    M2: ColorModel,
    T: Channel,
    U: Channel,
    E: Into<BoxError>,
    F: Fn([T; N]) -> std::result::Result<[U; K], E> + Sync,
{
    try_map_pixels_with(image, f, &MapOptions::default())
}

/// Maps a fallible `f` over every pixel of `image`.
///
/// Sequential sweeps stop at the first failing pixel in row-major order.
/// Parallel sweeps stop as soon as any worker fails and report that pixel.
///
/// # Errors
///
/// Returns [`Error::Conversion`] carrying the failing position.
pub fn try_map_pixels_with<M, M2, T, U, E, const N: usize, const K: usize, F>(
    image: &Image<M, T, N>,
    f: F,
    opts: &MapOptions,
) -> Result<Image<M2, U, K>>
where
    M: ColorModel,
    M2: ColorModel,
    T: Channel,
    U: Channel,
    E: Into<BoxError>,
    F: Fn([T; N]) -> std::result::Result<[U; K], E> + Sync,
{
    let (width, height) = image.dimensions();
    trace!(
        width,
        height,
        channels = N,
        out_channels = K,
        from = M::NAME,
        to = M2::NAME,
        "try_map_pixels"
    );

    let mut out = Image::new(width, height);
    if image.is_empty() {
        return Ok(out);
    }
    let parallel = opts.runs_parallel(image.pixel_count());
    debug!(width, height, parallel, "Mapping pixels (fallible)");

    try_for_each_row(out.data_mut(), width as usize * K, parallel, |y, dst| {
        let src = image.row(y as u32);
        for (x, (s, d)) in src.chunks_exact(N).zip(dst.chunks_exact_mut(K)).enumerate() {
            let px = f(to_pixel(s)).map_err(|e| Error::conversion(x as u32, y as u32, e))?;
            d.copy_from_slice(&px);
        }
        Ok(())
    })?;
    Ok(out)
}

/// Maps `f` over a 2D pixel grid, `rows[y][x]`.
///
/// The grid is validated before any pixel is converted.
///
/// # Errors
///
/// - [`Error::Empty`] if the grid has no pixels.
/// - [`Error::Shape`] if a row's width differs from row 0.
///
/// # Example
///
/// ```rust
/// use chromap_core::{Hsl, Image};
/// use chromap_color::hsv_to_hsl;
/// use chromap_ops::map_rows;
///
/// let ragged = vec![vec![[0u8, 0, 0]; 2], vec![[0u8, 0, 0]; 3]];
/// let res: chromap_core::Result<Image<Hsl, f64, 3>> = map_rows(&ragged, hsv_to_hsl);
/// assert!(res.unwrap_err().is_shape_error());
/// ```
pub fn map_rows<M2, T, U, R, const N: usize, const K: usize, F>(
    rows: &[R],
    f: F,
) -> Result<Image<M2, U, K>>
where
    M2: ColorModel,
    T: Channel,
    U: Channel,
    R: AsRef<[[T; N]]> + Sync,
    F: Fn([T; N]) -> [U; K] + Sync,
{
    try_map_rows(rows, |px| Ok::<_, BoxError>(f(px)))
}

/// Maps a fallible `f` over a 2D pixel grid with default [`MapOptions`].
///
/// # Errors
///
/// - [`Error::Empty`] or [`Error::Shape`] before any conversion runs.
/// - [`Error::Conversion`] for a pixel where `f` failed.
pub fn try_map_rows<M2, T, U, E, R, const N: usize, const K: usize, F>(
    rows: &[R],
    f: F,
) -> Result<Image<M2, U, K>>
where
    M2: ColorModel,
    T: Channel,
    U: Channel,
    E: Into<BoxError>,
    R: AsRef<[[T; N]]> + Sync,
    F: Fn([T; N]) -> std::result::Result<[U; K], E> + Sync,
{
    try_map_rows_with(rows, f, &MapOptions::default())
}

/// Maps a fallible `f` over a 2D pixel grid, `rows[y][x]`.
///
/// # Errors
///
/// Same as [`try_map_rows`].
pub fn try_map_rows_with<M2, T, U, E, R, const N: usize, const K: usize, F>(
    rows: &[R],
    f: F,
    opts: &MapOptions,
) -> Result<Image<M2, U, K>>
where
    M2: ColorModel,
    T: Channel,
    U: Channel,
    E: Into<BoxError>,
    R: AsRef<[[T; N]]> + Sync,
    F: Fn([T; N]) -> std::result::Result<[U; K], E> + Sync,
{
    let (width, height) = grid_dimensions(rows)?;
    trace!(width, height, channels = N, out_channels = K, to = M2::NAME, "map_rows");

    let mut out = Image::new(width, height);
    let parallel = opts.runs_parallel(out.pixel_count());
    debug!(width, height, parallel, "Mapping pixel grid");

    try_for_each_row(out.data_mut(), width as usize * K, parallel, |y, dst| {
        let src = rows[y].as_ref();
        for (x, (&s, d)) in src.iter().zip(dst.chunks_exact_mut(K)).enumerate() {
            let px = f(s).map_err(|e| Error::conversion(x as u32, y as u32, e))?;
            d.copy_from_slice(&px);
        }
        Ok(())
    })?;
    Ok(out)
}

#[inline]
fn to_pixel<T: Channel, const N: usize>(s: &[T]) -> [T; N] {
    let mut px = [T::zero(); N];
    px.copy_from_slice(s);
    px
}

/// Runs `op(y, row)` over each `row_len`-sized output row.
pub(crate) fn for_each_row<U, F>(dst: &mut [U], row_len: usize, parallel: bool, op: F)
where
    U: Channel,
    F: Fn(usize, &mut [U]) + Sync,
{
    if row_len == 0 {
        return;
    }
    #[cfg(feature = "parallel")]
    {
        if parallel {
            dst.par_chunks_mut(row_len)
                .enumerate()
                .for_each(|(y, row)| op(y, row));
            return;
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for (y, row) in dst.chunks_mut(row_len).enumerate() {
        op(y, row);
    }
}

/// Fallible [`for_each_row`]; stops at the first error seen.
pub(crate) fn try_for_each_row<U, F>(
    dst: &mut [U],
    row_len: usize,
    parallel: bool,
    op: F,
) -> Result<()>
where
    U: Channel,
    F: Fn(usize, &mut [U]) -> Result<()> + Sync,
{
    if row_len == 0 {
        return Ok(());
    }
    #[cfg(feature = "parallel")]
    {
        if parallel {
            return dst
                .par_chunks_mut(row_len)
                .enumerate()
                .try_for_each(|(y, row)| op(y, row));
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    dst.chunks_mut(row_len)
        .enumerate()
        .try_for_each(|(y, row)| op(y, row))
}
