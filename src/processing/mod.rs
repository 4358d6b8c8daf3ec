// SPDX-License-Identifier: MPL-2.0
//! Pure pixel transforms: grayscale conversion, 3x3 convolution, and
//! brightness/contrast adjustment.
//!
//! Every function allocates a new [`RasterImage`] and never mutates its
//! input, so a history snapshot can never be altered by a later edit.

pub mod color;
pub mod kernel;

pub use kernel::Kernel;

use crate::raster::{PixelFormat, RasterImage};
use rayon::prelude::*;

/// Converts an image to single-channel grayscale using BT.601 luma
/// (0.299 R + 0.587 G + 0.114 B), rounded to the nearest value.
///
/// Grayscale input copies through unchanged, which makes the conversion
/// idempotent. Skipping the call for already-gray images is the caller's
/// optimization, not a requirement.
#[must_use]
pub fn to_grayscale(img: &RasterImage) -> RasterImage {
    if img.is_gray() {
        return img.clone();
    }

    let mut out = Vec::with_capacity(img.width() as usize * img.height() as usize);
    for px in img.as_bytes().chunks_exact(3) {
        let luma =
            0.299 * f32::from(px[0]) + 0.587 * f32::from(px[1]) + 0.114 * f32::from(px[2]);
        out.push(luma.round() as u8);
    }
    RasterImage::from_raw(img.width(), img.height(), PixelFormat::Gray8, out)
}

/// Applies a 3x3 kernel via discrete 2-D convolution over each channel
/// independently.
///
/// Border policy: nearest-edge clamp. Reads outside the image replicate the
/// closest border pixel, so the output has identical dimensions and channel
/// count to the input. Weights are assumed already normalized by [`Kernel`];
/// no normalization happens here.
///
/// Rows are processed in parallel; the transform is pure, so this is a
/// speedup with no observable effect.
#[must_use]
pub fn convolve(img: &RasterImage, kernel: &Kernel) -> RasterImage {
    let channels = img.channels();
    let row_len = img.width() as usize * channels;
    let mut out = vec![0u8; row_len * img.height() as usize];

    out.par_chunks_mut(row_len).enumerate().for_each(|(y, row)| {
        let y = y as i64;
        for x in 0..i64::from(img.width()) {
            for c in 0..channels {
                let mut acc = 0.0f32;
                for dy in -1..=1 {
                    for dx in -1..=1 {
                        acc += kernel.weight(dx, dy)
                            * f32::from(img.sample_clamped(x + dx, y + dy, c));
                    }
                }
                row[x as usize * channels + c] = acc.round().clamp(0.0, 255.0) as u8;
            }
        }
    });

    RasterImage::from_raw(img.width(), img.height(), img.format(), out)
}

/// Adjusts brightness and contrast in one pass.
///
/// `offset` (brightness) is added to every channel first, clamped to
/// `[0, 255]`. `scale` (contrast) then multiplies grayscale values directly,
/// while RGB pixels are moved through HSB space:
/// `brightness' = clamp(scale * (brightness - 0.5) + 0.5, 0, 1)` with hue and
/// saturation fixed, so contrast pivots around mid-brightness.
///
/// Identity arguments (`offset == 0`, `scale == 1.0`) return a cheap clone.
#[must_use]
pub fn adjust_color(img: &RasterImage, offset: i32, scale: f32) -> RasterImage {
    let mut result = img.clone();
    if offset != 0 {
        result = change_brightness(&result, offset);
    }
    if scale != 1.0 {
        result = change_contrast(&result, scale);
    }
    result
}

fn change_brightness(img: &RasterImage, offset: i32) -> RasterImage {
    let out = img
        .as_bytes()
        .iter()
        .map(|&v| (i32::from(v) + offset).clamp(0, 255) as u8)
        .collect();
    RasterImage::from_raw(img.width(), img.height(), img.format(), out)
}

fn change_contrast(img: &RasterImage, scale: f32) -> RasterImage {
    let out = match img.format() {
        PixelFormat::Gray8 => img
            .as_bytes()
            .iter()
            .map(|&v| (f32::from(v) * scale + 0.5).clamp(0.0, 255.0) as u8)
            .collect(),
        PixelFormat::Rgb8 => {
            let mut out = Vec::with_capacity(img.as_bytes().len());
            for px in img.as_bytes().chunks_exact(3) {
                let (hue, saturation, brightness) = color::rgb_to_hsb(px[0], px[1], px[2]);
                let brightness = (scale * (brightness - 0.5) + 0.5).clamp(0.0, 1.0);
                let (r, g, b) = color::hsb_to_rgb(hue, saturation, brightness);
                out.extend_from_slice(&[r, g, b]);
            }
            out
        }
    };
    RasterImage::from_raw(img.width(), img.height(), img.format(), out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(width: u32, height: u32, pixels: &[(u8, u8, u8)]) -> RasterImage {
        let bytes = pixels.iter().flat_map(|&(r, g, b)| [r, g, b]).collect();
        RasterImage::from_pixels(width, height, PixelFormat::Rgb8, bytes).expect("pixel count")
    }

    fn gray(width: u32, height: u32, pixels: &[u8]) -> RasterImage {
        RasterImage::from_pixels(width, height, PixelFormat::Gray8, pixels.to_vec())
            .expect("pixel count")
    }

    #[test]
    fn to_grayscale_is_idempotent() {
        let img = rgb(2, 2, &[(10, 20, 30), (200, 100, 50), (0, 0, 0), (255, 255, 255)]);
        let once = to_grayscale(&img);
        let twice = to_grayscale(&once);
        assert_eq!(once.format(), PixelFormat::Gray8);
        assert_eq!(once, twice);
    }

    #[test]
    fn to_grayscale_maps_extremes() {
        let img = rgb(2, 1, &[(0, 0, 0), (255, 255, 255)]);
        assert_eq!(to_grayscale(&img).as_bytes(), &[0, 255]);
    }

    #[test]
    fn identity_kernel_preserves_pixels() {
        let img = rgb(2, 2, &[(10, 20, 30), (200, 100, 50), (7, 8, 9), (128, 0, 255)]);
        let filtered = convolve(&img, &Kernel::identity());
        assert_eq!(filtered, img);

        let grayscale = gray(3, 1, &[0, 100, 255]);
        assert_eq!(convolve(&grayscale, &Kernel::identity()), grayscale);
    }

    #[test]
    fn laplace_on_flat_region_is_zero_everywhere() {
        // Constant 3x3 image: the second derivative is zero in the interior,
        // and with edge-clamp borders every sample is the same constant, so
        // the border pixels are zero as well.
        let img = gray(3, 3, &[100; 9]);
        let filtered = convolve(&img, &Kernel::laplace());
        assert_eq!(filtered.as_bytes(), &[0; 9]);
    }

    #[test]
    fn low_pass_averages_neighborhood() {
        // Single white pixel in black surroundings: the center becomes the
        // kernel's center weight (2/10 of 255).
        let mut pixels = [0u8; 9];
        pixels[4] = 255;
        let filtered = convolve(&gray(3, 3, &pixels), &Kernel::low_pass());
        assert_eq!(filtered.as_bytes()[4], (255.0f32 * 0.2).round() as u8);
    }

    #[test]
    fn convolve_handles_single_pixel_images() {
        // Smallest constructible image: every neighborhood sample resolves
        // to the one pixel via edge clamping.
        let img = gray(1, 1, &[100]);
        assert_eq!(convolve(&img, &Kernel::identity()), img);
        assert_eq!(convolve(&img, &Kernel::laplace()).as_bytes(), &[0]);
    }

    #[test]
    fn convolve_does_not_mutate_input() {
        let img = gray(3, 3, &[100; 9]);
        let before = img.as_bytes().to_vec();
        let _ = convolve(&img, &Kernel::high_pass());
        assert_eq!(img.as_bytes(), &before[..]);
    }

    #[test]
    fn adjust_color_identity_returns_equal_image() {
        let img = rgb(2, 1, &[(1, 2, 3), (200, 100, 0)]);
        assert_eq!(adjust_color(&img, 0, 1.0), img);
    }

    #[test]
    fn brightness_offset_scenario() {
        let img = rgb(
            2,
            2,
            &[(10, 10, 10), (250, 250, 250), (0, 0, 0), (128, 128, 128)],
        );
        let adjusted = adjust_color(&img, 20, 1.0);
        let expected = rgb(
            2,
            2,
            &[(30, 30, 30), (255, 255, 255), (20, 20, 20), (148, 148, 148)],
        );
        assert_eq!(adjusted, expected);
    }

    #[test]
    fn negative_offset_clamps_at_zero() {
        let img = gray(2, 1, &[10, 200]);
        assert_eq!(adjust_color(&img, -50, 1.0).as_bytes(), &[0, 150]);
    }

    #[test]
    fn brightness_round_trips_when_unsaturated() {
        let img = rgb(2, 1, &[(50, 60, 70), (100, 120, 140)]);
        let round_trip = adjust_color(&adjust_color(&img, 40, 1.0), -40, 1.0);
        assert_eq!(round_trip, img);
    }

    #[test]
    fn contrast_scales_grayscale_values_directly() {
        let img = gray(3, 1, &[0, 100, 200]);
        let adjusted = adjust_color(&img, 0, 1.5);
        assert_eq!(adjusted.as_bytes(), &[0, 150, 255]);
    }

    #[test]
    fn contrast_pivots_rgb_brightness_around_midpoint() {
        // Mid-brightness gray (HSB brightness 0.5 is 127.5/255; use 128).
        let img = rgb(3, 1, &[(64, 64, 64), (128, 128, 128), (192, 192, 192)]);
        let adjusted = adjust_color(&img, 0, 2.0);
        let bytes = adjusted.as_bytes();

        // Dark pixels get darker, bright pixels brighter; near-mid stays put.
        assert!(bytes[0] < 64);
        assert!((i32::from(bytes[3]) - 128).abs() <= 2);
        assert!(bytes[6] > 192);
    }

    #[test]
    fn contrast_keeps_hue_and_saturation() {
        let img = rgb(1, 1, &[(200, 100, 100)]);
        let adjusted = adjust_color(&img, 0, 1.3);
        let (h0, s0, _) = color::rgb_to_hsb(200, 100, 100);
        let px = adjusted.as_bytes();
        let (h1, s1, _) = color::rgb_to_hsb(px[0], px[1], px[2]);
        assert!((h0 - h1).abs() < 0.02);
        assert!((s0 - s1).abs() < 0.02);
    }

    #[test]
    fn offset_applies_before_scale() {
        // offset lifts 0 to 100, then the grayscale contrast multiply gives
        // 150. Applying scale first would leave the pixel at 0 before the
        // offset, producing 100 instead.
        let img = gray(1, 1, &[0]);
        let adjusted = adjust_color(&img, 100, 1.5);
        assert_eq!(adjusted.as_bytes(), &[150]);
    }
}
