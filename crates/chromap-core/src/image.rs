//! Image buffer type.
//!
//! [`Image`] is an owned, row-major pixel grid tagged with a color model:
//! - `M: ColorModel` - Model marker (prevents mixing a BGR source with HSI data)
//! - `T: Channel` - Scalar type per channel (u8, u16, f32, f64)
//! - `N` - Channels per pixel (3 for color, 1 for grayscale)
//!
//! The channel count `N` must equal `M::CHANNELS`; a mismatched pairing such
//! as `Image<Gray, u8, 3>` fails to build:
//!
//! ```compile_fail
//! use chromap_core::{Image, Gray};
//!
//! let img: Image<Gray, u8, 3> = Image::new(2, 2);
//! ```
//!
//! # Memory Layout
//!
//! Pixels are stored **row-major**, top-to-bottom, channels interleaved:
//!
//! ```text
//! Memory: [B G R B G R B G R ...]  <- Row 0
//!         [B G R B G R B G R ...]  <- Row 1
//!         ...
//! ```
//!
//! # Building From a 2D Grid
//!
//! Callers that hold pixels as nested rows go through [`Image::from_rows`],
//! which rejects ragged grids before anything else happens:
//!
//! ```rust
//! use chromap_core::{Image, Bgr};
//!
//! let rows = vec![
//!     vec![[0u8, 0, 255], [0, 255, 0]],
//!     vec![[255u8, 0, 0]],
//! ];
//! let err = Image::<Bgr, u8, 3>::from_rows(&rows).unwrap_err();
//! assert!(err.is_shape_error());
//! ```

use crate::{Channel, ColorModel, Error, Result};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Owned image buffer with compile-time color model and channel type.
///
/// The pixel buffer is stored in an [`Arc<Vec<T>>`], so cloning is cheap and
/// shares storage. Writers go through [`make_mut`](Self::make_mut), which
/// copies on first write if the storage is shared.
///
/// # Example
///
/// ```rust
/// use chromap_core::{Image, Bgr};
///
/// let mut img: Image<Bgr, u8, 3> = Image::new(4, 3);
/// img.set_pixel(1, 2, [10, 20, 30]);
/// assert_eq!(img.pixel(1, 2), [10, 20, 30]);
/// assert_eq!(img.dimensions(), (4, 3));
/// ```
#[derive(Clone)]
pub struct Image<M: ColorModel, T: Channel, const N: usize> {
    data: Arc<Vec<T>>,
    width: u32,
    height: u32,
    _model: PhantomData<M>,
}

impl<M: ColorModel, T: Channel, const N: usize> Image<M, T, N> {
    /// Creates a new image filled with zeros.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize * N;
        Self::wrap(vec![T::zero(); len], width, height)
    }

    /// Creates an image from flat, interleaved pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height * N`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chromap_core::{Image, Gray};
    ///
    /// let img: Image<Gray, u8, 1> = Image::from_data(2, 2, vec![0, 64, 128, 255]).unwrap();
    /// assert_eq!(img.pixel(1, 1), [255]);
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<T>) -> Result<Self> {
        let expected = width as usize * height as usize * N;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} elements, got {}", expected, data.len()),
            ));
        }
        Ok(Self::wrap(data, width, height))
    }

    /// Creates an image from a 2D grid of pixels, `rows[y][x]`.
    ///
    /// # Errors
    ///
    /// - [`Error::Empty`] if there are no rows or row 0 has no pixels.
    /// - [`Error::Shape`] for the first row whose width differs from row 0.
    pub fn from_rows<R: AsRef<[[T; N]]>>(rows: &[R]) -> Result<Self> {
        let (width, height) = grid_dimensions(rows)?;
        let mut data = Vec::with_capacity(width as usize * height as usize * N);
        for row in rows {
            for px in row.as_ref() {
                data.extend_from_slice(px);
            }
        }
        Ok(Self::wrap(data, width, height))
    }

    /// Creates an image filled with a specific pixel value.
    pub fn filled(width: u32, height: u32, pixel: [T; N]) -> Self {
        let count = width as usize * height as usize;
        let mut data = Vec::with_capacity(count * N);
        for _ in 0..count {
            data.extend_from_slice(&pixel);
        }
        Self::wrap(data, width, height)
    }

    #[inline]
    fn wrap(data: Vec<T>, width: u32, height: u32) -> Self {
        Self::from_arc(Arc::new(data), width, height)
    }

    #[inline]
    fn from_arc(data: Arc<Vec<T>>, width: u32, height: u32) -> Self {
        const {
            assert!(M::CHANNELS > 0, "color model has no channels");
            assert!(M::CHANNELS == N, "channel count differs from the color model");
        }
        Self {
            data,
            width,
            height,
            _model: PhantomData,
        }
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the number of channels per pixel.
    #[inline]
    pub const fn channels(&self) -> usize {
        N
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns `true` if the image has no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the raw interleaved channel data.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Returns mutable access to the channel data, unsharing it first.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Ensures this image owns its storage exclusively.
    ///
    /// Copies the buffer if another clone shares it.
    pub fn make_mut(&mut self) {
        Arc::make_mut(&mut self.data);
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * N
    }

    /// Returns the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [T; N] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for image {}x{}",
            self.width,
            self.height
        );
        let i = self.offset(x, y);
        let mut px = [T::zero(); N];
        px.copy_from_slice(&self.data[i..i + N]);
        px
    }

    /// Returns the pixel at (x, y), or `None` if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<[T; N]> {
        (x < self.width && y < self.height).then(|| self.pixel(x, y))
    }

    /// Sets the pixel at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: [T; N]) {
        assert!(x < self.width && y < self.height);
        let i = self.offset(x, y);
        Arc::make_mut(&mut self.data)[i..i + N].copy_from_slice(&pixel);
    }

    /// Returns the channel data of row `y`.
    #[inline]
    pub fn row(&self, y: u32) -> &[T] {
        let start = self.offset(0, y);
        &self.data[start..start + self.width as usize * N]
    }

    /// Iterates over all pixels as `(x, y, pixel)` in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = (u32, u32, [T; N])> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y, self.pixel(x, y))))
    }

    /// Copies the pixels out as a 2D grid, `rows[y][x]`.
    pub fn to_rows(&self) -> Vec<Vec<[T; N]>> {
        (0..self.height)
            .map(|y| (0..self.width).map(|x| self.pixel(x, y)).collect())
            .collect()
    }

    /// Relabels the color model without touching pixel data.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chromap_core::{Image, Bgr, Rgb};
    ///
    /// // Hand a BGR buffer to code that reads channel 0 as red
    /// let bgr: Image<Bgr, u8, 3> = Image::filled(2, 2, [1, 2, 3]);
    /// let rgb: Image<Rgb, u8, 3> = bgr.reinterpret();
    /// assert_eq!(rgb.pixel(0, 0), [1, 2, 3]);
    /// ```
    pub fn reinterpret<M2: ColorModel>(self) -> Image<M2, T, N> {
        Image::from_arc(self.data, self.width, self.height)
    }

    /// Converts every channel to another scalar type, saturating.
    ///
    /// Integer targets round to nearest and clamp to their range.
    pub fn convert_format<T2: Channel>(&self) -> Image<M, T2, N> {
        let data = self.data.iter().map(|&v| T2::from_f64(v.to_f64())).collect();
        Image::wrap(data, self.width, self.height)
    }

    /// Converts every channel to another scalar type, failing on the first
    /// value the target cannot represent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Domain`] with the position and channel of the first
    /// NaN or out-of-range value in row-major order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chromap_core::{Image, Rgb};
    ///
    /// let img: Image<Rgb, f64, 3> = Image::filled(2, 1, [12.0, 300.0, 0.0]);
    /// let err = img.try_convert_format::<u8>().unwrap_err();
    /// assert!(err.is_domain_error());
    /// ```
    pub fn try_convert_format<T2: Channel>(&self) -> Result<Image<M, T2, N>> {
        let mut data = Vec::with_capacity(self.data.len());
        for (i, &v) in self.data.iter().enumerate() {
            let v = v.to_f64();
            match T2::try_from_f64(v) {
                Some(c) => data.push(c),
                None => {
                    let px = i / N;
                    let x = (px % self.width as usize) as u32;
                    let y = (px / self.width as usize) as u32;
                    return Err(Error::domain(
                        x,
                        y,
                        i % N,
                        v,
                        (T2::MIN_VALUE, T2::MAX_VALUE),
                    ));
                }
            }
        }
        Ok(Image::wrap(data, self.width, self.height))
    }
}

impl<M: ColorModel, T: Channel + PartialEq, const N: usize> PartialEq for Image<M, T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.data == other.data
    }
}

impl<M: ColorModel, T: Channel, const N: usize> fmt::Debug for Image<M, T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("model", &M::NAME)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("channels", &M::LABELS)
            .finish()
    }
}

/// Validates a 2D pixel grid and returns its (width, height).
///
/// # Errors
///
/// - [`Error::Empty`] if there are no rows or row 0 has no pixels.
/// - [`Error::Shape`] for the first row whose width differs from row 0.
pub fn grid_dimensions<P, R: AsRef<[P]>>(rows: &[R]) -> Result<(u32, u32)> {
    let expected = match rows.first() {
        Some(row) if !row.as_ref().is_empty() => row.as_ref().len(),
        _ => return Err(Error::Empty),
    };
    for (y, row) in rows.iter().enumerate().skip(1) {
        let got = row.as_ref().len();
        if got != expected {
            return Err(Error::shape(y, expected, got));
        }
    }
    let width = u32::try_from(expected)
        .map_err(|_| Error::invalid_dimensions(u32::MAX, 0, "width exceeds u32"))?;
    let height = u32::try_from(rows.len())
        .map_err(|_| Error::invalid_dimensions(width, u32::MAX, "height exceeds u32"))?;
    Ok((width, height))
}
