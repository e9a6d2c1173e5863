//! Round-trip and range properties of the HIS converters.
//!
//! Sweeps a lattice over the 8-bit RGB cube:
//! - RGB -> HIS -> RGB recovers the input to well under one unit
//! - hue stays in [0, 360)
//! - saturation and intensity stay on the 0-255 scale for valid inputs

use chromap_color::{his_to_hsi, his_to_rgb, hsi_to_rgb, rgb_to_his};

/// Lattice step; 52 samples per axis, both ends included.
const STEP: usize = 5;

fn lattice() -> impl Iterator<Item = [u8; 3]> {
    (0..=255usize).step_by(STEP).flat_map(|r| {
        (0..=255usize).step_by(STEP).flat_map(move |g| {
            (0..=255usize)
                .step_by(STEP)
                .map(move |b| [r as u8, g as u8, b as u8])
        })
    })
}

#[test]
fn roundtrip_recovers_rgb() {
    let mut worst = 0.0f64;
    for rgb in lattice() {
        let back = his_to_rgb(rgb_to_his(rgb));
        for c in 0..3 {
            let err = (back[c] - rgb[c] as f64).abs();
            worst = worst.max(err);
            assert!(err < 1e-6, "{rgb:?} -> {back:?}");
        }
    }
    assert!(worst < 1.0);
}

#[test]
fn roundtrip_through_explicit_reorder() {
    for rgb in [[12u8, 34, 56], [250, 5, 5], [5, 250, 5], [5, 5, 250]] {
        let via_hsi = hsi_to_rgb(his_to_hsi(rgb_to_his(rgb)));
        assert_eq!(via_hsi, his_to_rgb(rgb_to_his(rgb)));
    }
}

#[test]
fn hue_in_range() {
    for rgb in lattice() {
        let h = rgb_to_his(rgb)[0];
        assert!((0.0..360.0).contains(&h), "{rgb:?} gave hue {h}");
    }
}

#[test]
fn hue_defined_near_gray_axis() {
    // g == b makes the acos ratio exactly +/-1 in theory
    for v in 0..=255u8 {
        for r in [0u8, 1, 127, 254, 255] {
            let h = rgb_to_his([r, v, v])[0];
            assert!(!h.is_nan(), "[{r}, {v}, {v}] gave NaN hue");
            assert!((0.0..360.0).contains(&h));
        }
    }
}

#[test]
fn intensity_and_saturation_on_byte_scale() {
    for rgb in lattice() {
        let [_, i, s] = rgb_to_his(rgb);
        assert!((0.0..=255.0 + 1e-9).contains(&i), "{rgb:?} intensity {i}");
        assert!((-1e-9..=255.0 + 1e-9).contains(&s), "{rgb:?} saturation {s}");
    }
}
