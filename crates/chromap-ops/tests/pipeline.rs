//! End-to-end checks of the mapper and grayscale routine with the real
//! converters, in both execution modes.

use approx::assert_abs_diff_eq;
use chromap_color::{his_to_rgb, hsv_to_hsl, rgb_to_his};
use chromap_core::prelude::*;
use chromap_ops::{
    Execution, MapOptions, grayscale_rows, map_pixels, map_pixels_with, map_rows, to_grayscale,
    try_map_rows, try_map_rows_with,
};

fn gradient(width: u32, height: u32) -> Image<Bgr, u8, 3> {
    let data = (0..width * height)
        .flat_map(|i| {
            let x = i % width;
            let y = i / width;
            [(x * 255 / width.max(1)) as u8, (y * 255 / height.max(1)) as u8, ((x ^ y) % 256) as u8]
        })
        .collect();
    Image::from_data(width, height, data).unwrap()
}

#[test]
fn two_by_two_identical_pixels() {
    let rows = vec![vec![[40u8, 90, 200]; 2]; 2];
    let before = rows.clone();
    let out: Image<His, f64, 3> = map_rows(&rows, rgb_to_his).unwrap();

    let want = rgb_to_his([40u8, 90, 200]);
    assert_eq!(out.dimensions(), (2, 2));
    for (_, _, px) in out.pixels() {
        assert_eq!(px, want);
    }
    assert_eq!(rows, before);
}

#[test]
fn ragged_rows_rejected() {
    let rows = vec![vec![[0u8; 3]; 3], vec![[0u8; 3]; 4]];
    let err = map_rows::<His, _, f64, _, 3, 3, _>(&rows, rgb_to_his).unwrap_err();
    assert!(err.is_shape_error());
    assert!(matches!(err, Error::Shape { row: 1, .. }));
}

#[test]
fn failure_aborts_whole_mapping() {
    let rows = vec![vec![[0.0f64, 0.0, 0.0]; 8]; 8];
    let res: Result<Image<Hsl, f64, 3>> =
        try_map_rows(&rows, |px: [f64; 3]| -> std::result::Result<[f64; 3], String> {
            Err(format!("rejected {px:?}"))
        });
    let err = res.unwrap_err();
    assert!(err.is_conversion_error());
}

#[test]
fn failure_aborts_parallel_mapping() {
    let mut rows = vec![vec![[0.0f64, 0.0, 0.0]; 64]; 64];
    rows[40][5] = [f64::NAN, 0.0, 0.0];
    let opts = MapOptions::default().with_execution(Execution::Parallel);
    let res: Result<Image<Hsl, f64, 3>> = try_map_rows_with(
        &rows,
        |px: [f64; 3]| if px[0].is_nan() { Err("nan hue") } else { Ok(hsv_to_hsl(px)) },
        &opts,
    );
    match res {
        Err(Error::Conversion { x, y, .. }) => assert_eq!((x, y), (5, 40)),
        other => panic!("expected conversion error, got {other:?}"),
    }
}

#[test]
fn image_roundtrip_through_his() {
    let src = gradient(37, 23);
    let his: Image<His, f64, 3> = map_pixels(&src, rgb_to_his);
    let back: Image<Rgb, f64, 3> = map_pixels(&his, his_to_rgb);

    for ((_, _, a), (_, _, b)) in src.pixels().zip(back.pixels()) {
        for c in 0..3 {
            assert_abs_diff_eq!(a[c] as f64, b[c], epsilon = 1e-6);
        }
    }
    assert_eq!(back.convert_format::<u8>().reinterpret::<Bgr>(), src);
}

#[test]
fn parallel_matches_sequential() {
    let src = gradient(301, 97);
    let seq: Image<His, f64, 3> = map_pixels_with(&src, rgb_to_his, &MapOptions::sequential());
    let par: Image<His, f64, 3> = map_pixels_with(
        &src,
        rgb_to_his,
        &MapOptions::default().with_execution(Execution::Parallel),
    );
    assert_eq!(seq, par);
}

#[test]
fn hsl_degenerate_cases_across_image() {
    let rows = vec![vec![[123u8, 0, 0], [45, 0, 255]]];
    let out: Image<Hsl, f64, 3> = map_rows(&rows, hsv_to_hsl).unwrap();
    assert_eq!(out.pixel(0, 0), [123.0, 0.0, 0.0]);
    assert_eq!(out.pixel(1, 0), [45.0, 0.0, 255.0]);
}

#[test]
fn grayscale_reference_values() {
    let rows = vec![vec![[255u8, 255, 255], [0, 0, 0], [0, 0, 255], [128, 128, 128]]];
    let gray = grayscale_rows(&rows).unwrap();
    assert_eq!(gray.data(), &[255, 0, 76, 127]);

    let img: Image<Bgr, u8, 3> = Image::from_rows(&rows).unwrap();
    assert_eq!(to_grayscale(&img), gray);
    assert_eq!(img.to_rows(), rows);
}

#[test]
fn out_of_gamut_surfaces_at_checked_boundary() {
    let hsi: Image<Hsi, f64, 3> = Image::filled(2, 2, [0.0, 255.0, 255.0]);
    let rgb: Image<Rgb, f64, 3> = map_pixels(&hsi, chromap_color::hsi_to_rgb);
    let err = rgb.try_convert_format::<u8>().unwrap_err();
    assert!(err.is_domain_error());
    assert_eq!(rgb.convert_format::<u8>().pixel(0, 0)[0], 255);
}
