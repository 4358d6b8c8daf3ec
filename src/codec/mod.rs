// SPDX-License-Identifier: MPL-2.0
//! Decoding and encoding of image files on top of the `image` crate.
//!
//! The engine accepts 8-bit RGB and 8-bit grayscale rasters only.
//! Indexed-color sources (paletted PNG, GIF, low-depth BMP) are rejected
//! with [`Error::UnsupportedFormat`] *before* decoding. The `image` crate
//! silently expands palettes, so the container is inspected directly. This
//! guarantees an indexed image can never reach the edit session.

use crate::error::{Error, Result};
use crate::raster::{PixelFormat, RasterImage};
use image_rs::{DynamicImage, ImageFormat};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Decodes the image at `path` into a [`RasterImage`].
///
/// Grayscale sources map to [`PixelFormat::Gray8`]; everything else is
/// converted to [`PixelFormat::Rgb8`] (alpha, if present, is dropped).
pub fn decode<P: AsRef<Path>>(path: P) -> Result<RasterImage> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let format = image_rs::guess_format(&bytes)?;

    if is_indexed(&bytes, format) {
        debug!("rejecting indexed-color source: {}", path.display());
        return Err(Error::UnsupportedFormat);
    }

    let dynamic = image_rs::load_from_memory_with_format(&bytes, format)?;
    Ok(from_dynamic(dynamic))
}

/// Encodes `image` to disk in the format named by `format_name`
/// (`"jpg"`, `"png"`, `"bmp"`, ...).
///
/// The file extension is set to match the format, and the path actually
/// written is returned. Unknown format names fail with
/// [`Error::UnsupportedFormat`].
pub fn encode<P: AsRef<Path>>(
    image: &RasterImage,
    path: P,
    format_name: &str,
) -> Result<PathBuf> {
    let format = ImageFormat::from_extension(format_name).ok_or(Error::UnsupportedFormat)?;
    let path = path.as_ref().with_extension(format_name);

    let dynamic = to_dynamic(image)?;
    dynamic
        .save_with_format(&path, format)
        .map_err(|e| Error::Encode(e.to_string()))?;

    debug!("encoded {} image to {}", format_name, path.display());
    Ok(path)
}

fn from_dynamic(dynamic: DynamicImage) -> RasterImage {
    match dynamic {
        DynamicImage::ImageLuma8(buf) => {
            let (width, height) = buf.dimensions();
            RasterImage::from_raw(width, height, PixelFormat::Gray8, buf.into_raw())
        }
        other => {
            let rgb = other.to_rgb8();
            let (width, height) = rgb.dimensions();
            RasterImage::from_raw(width, height, PixelFormat::Rgb8, rgb.into_raw())
        }
    }
}

fn to_dynamic(image: &RasterImage) -> Result<DynamicImage> {
    let pixels = image.as_bytes().to_vec();
    match image.format() {
        PixelFormat::Gray8 => image_rs::GrayImage::from_raw(image.width(), image.height(), pixels)
            .map(DynamicImage::ImageLuma8)
            .ok_or_else(|| Error::Encode("pixel buffer does not match dimensions".into())),
        PixelFormat::Rgb8 => image_rs::RgbImage::from_raw(image.width(), image.height(), pixels)
            .map(DynamicImage::ImageRgb8)
            .ok_or_else(|| Error::Encode("pixel buffer does not match dimensions".into())),
    }
}

/// Container-level check for indexed-color (palette) encodings.
fn is_indexed(bytes: &[u8], format: ImageFormat) -> bool {
    match format {
        // GIF pixel data is always palette indices.
        ImageFormat::Gif => true,
        ImageFormat::Png => png_color_type(bytes) == Some(3),
        ImageFormat::Bmp => matches!(bmp_bit_depth(bytes), Some(depth) if depth <= 8),
        _ => false,
    }
}

/// PNG color type from the IHDR chunk: 8-byte signature, 4-byte length,
/// 4-byte `IHDR` tag, then 13 data bytes of which the color type is the
/// tenth (file offset 25). Color type 3 means palette.
fn png_color_type(bytes: &[u8]) -> Option<u8> {
    bytes.get(25).copied()
}

/// BMP bits-per-pixel. The DIB header starts at offset 14; the legacy
/// 12-byte core header keeps the bit count at offset 24, every later header
/// at offset 28. Depths of 8 and below use a color palette.
fn bmp_bit_depth(bytes: &[u8]) -> Option<u16> {
    let dib_size = u32::from_le_bytes(bytes.get(14..18)?.try_into().ok()?);
    let at = if dib_size == 12 { 24 } else { 28 };
    Some(u16::from_le_bytes(bytes.get(at..at + 2)?.try_into().ok()?))
}
