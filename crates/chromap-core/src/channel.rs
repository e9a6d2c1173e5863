//! Channel value types.
//!
//! [`Channel`] abstracts the scalar stored per channel in an
//! [`Image`](crate::Image). Unlike a normalized pixel format, channel values
//! keep their buffer-boundary scale: an 8-bit red of 200 is `200.0` when
//! widened to `f64`, not `0.784`. Converters normalize internally.
//!
//! Implemented for:
//! - `u8` - 8-bit buffers (0-255)
//! - `u16` - 16-bit buffers (0-65535)
//! - `f32`, `f64` - unclamped float buffers for converter outputs
//!
//! # Example
//!
//! ```
//! use chromap_core::Channel;
//!
//! assert_eq!(200u8.to_f64(), 200.0);
//! assert_eq!(u8::from_f64(300.0), 255);
//! assert_eq!(u8::from_f64(76.6), 77);
//! assert!(u8::try_from_f64(-1.0).is_none());
//! ```

/// Trait for per-channel scalar types.
pub trait Channel: Copy + Clone + Default + Send + Sync + PartialOrd + std::fmt::Debug + 'static {
    /// Smallest representable value.
    const MIN_VALUE: f64;

    /// Largest representable value.
    const MAX_VALUE: f64;

    /// Widens to `f64` without rescaling.
    fn to_f64(self) -> f64;

    /// Narrows from `f64`, saturating to the representable range.
    ///
    /// Integer types round to nearest; NaN maps to zero.
    fn from_f64(v: f64) -> Self;

    /// Narrows from `f64`, returning `None` if `v` is NaN or outside
    /// [`MIN_VALUE`](Channel::MIN_VALUE)..=[`MAX_VALUE`](Channel::MAX_VALUE).
    #[inline]
    fn try_from_f64(v: f64) -> Option<Self> {
        if v.is_nan() || v < Self::MIN_VALUE || v > Self::MAX_VALUE {
            None
        } else {
            Some(Self::from_f64(v))
        }
    }

    /// Zero value.
    fn zero() -> Self;
}

macro_rules! int_channel {
    ($ty:ty) => {
        impl Channel for $ty {
            const MIN_VALUE: f64 = <$ty>::MIN as f64;
            const MAX_VALUE: f64 = <$ty>::MAX as f64;

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(v: f64) -> Self {
                // `as` saturates and maps NaN to 0
                v.round() as $ty
            }

            #[inline]
            fn zero() -> Self {
                0
            }
        }
    };
}

int_channel!(u8);
int_channel!(u16);

impl Channel for f32 {
    const MIN_VALUE: f64 = f32::MIN as f64;
    const MAX_VALUE: f64 = f32::MAX as f64;

    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

impl Channel for f64 {
    const MIN_VALUE: f64 = f64::MIN;
    const MAX_VALUE: f64 = f64::MAX;

    #[inline]
    fn to_f64(self) -> f64 {
        self
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }

    #[inline]
    fn zero() -> Self {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u8_saturates() {
        assert_eq!(u8::from_f64(-12.0), 0);
        assert_eq!(u8::from_f64(255.4), 255);
        assert_eq!(u8::from_f64(1e9), 255);
        assert_eq!(u8::from_f64(f64::NAN), 0);
    }

    #[test]
    fn test_u8_rounds() {
        assert_eq!(u8::from_f64(127.5), 128);
        assert_eq!(u8::from_f64(127.49), 127);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(u8::try_from_f64(255.0), Some(255));
        assert_eq!(u8::try_from_f64(255.01), None);
        assert_eq!(u16::try_from_f64(300.0), Some(300));
        assert_eq!(f32::try_from_f64(f64::NAN), None);
    }

    #[test]
    fn test_float_passthrough() {
        assert_eq!(f64::from_f64(-3.5), -3.5);
        assert_eq!((-3.5f32).to_f64(), -3.5);
    }
}
