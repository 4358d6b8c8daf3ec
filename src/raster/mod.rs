// SPDX-License-Identifier: MPL-2.0
//! The raster image value type shared by every layer of the engine.
//!
//! A [`RasterImage`] is immutable once constructed: transforms allocate a new
//! image instead of mutating in place, which is the invariant that keeps
//! undo/redo snapshots honest. Pixel bytes live behind an `Arc`, so cloning
//! an image (for the history stacks or a preview buffer) is O(1).

use std::sync::Arc;

/// Supported pixel layouts. Channel values are 8-bit in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Three channels per pixel: red, green, blue.
    Rgb8,
    /// One luminance channel per pixel.
    Gray8,
}

impl PixelFormat {
    /// Number of bytes per pixel for this format.
    #[must_use]
    pub fn channels(self) -> usize {
        match self {
            PixelFormat::Rgb8 => 3,
            PixelFormat::Gray8 => 1,
        }
    }
}

/// An immutable width x height grid of 8-bit pixels, row-major packed.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    format: PixelFormat,
    data: Arc<Vec<u8>>,
}

impl RasterImage {
    /// Creates an image from packed pixel bytes.
    ///
    /// Returns `None` when either dimension is zero or the buffer length
    /// does not match `width * height * channels`. Every image in the
    /// engine has at least one pixel, which is what lets the transforms
    /// assume a non-empty neighborhood.
    #[must_use]
    pub fn from_pixels(
        width: u32,
        height: u32,
        format: PixelFormat,
        pixels: Vec<u8>,
    ) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let expected = width as usize * height as usize * format.channels();
        if pixels.len() != expected {
            return None;
        }
        Some(Self {
            width,
            height,
            format,
            data: Arc::new(pixels),
        })
    }

    /// Internal constructor for transform outputs whose buffer size is
    /// computed from the input image and therefore already correct.
    pub(crate) fn from_raw(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Self {
        debug_assert!(width > 0 && height > 0);
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * format.channels()
        );
        Self {
            width,
            height,
            format,
            data: Arc::new(pixels),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Bytes per pixel.
    #[must_use]
    pub fn channels(&self) -> usize {
        self.format.channels()
    }

    /// Returns `true` for single-channel grayscale images.
    #[must_use]
    pub fn is_gray(&self) -> bool {
        self.format == PixelFormat::Gray8
    }

    /// Packed pixel bytes, row-major, `channels()` bytes per pixel.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Byte offset of the pixel at `(x, y)`.
    #[inline]
    pub(crate) fn pixel_index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.channels()
    }

    /// Channel value at `(x, y)` with coordinates clamped to the nearest
    /// edge. This is the border policy used by convolution: reads outside
    /// the image replicate the closest border pixel.
    #[inline]
    pub(crate) fn sample_clamped(&self, x: i64, y: i64, channel: usize) -> u8 {
        let x = x.clamp(0, i64::from(self.width) - 1) as u32;
        let y = y.clamp(0, i64::from(self.height) - 1) as u32;
        self.data[self.pixel_index(x, y) + channel]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pixels_rejects_wrong_buffer_length() {
        assert!(RasterImage::from_pixels(2, 2, PixelFormat::Rgb8, vec![0; 11]).is_none());
        assert!(RasterImage::from_pixels(2, 2, PixelFormat::Rgb8, vec![0; 12]).is_some());
        assert!(RasterImage::from_pixels(2, 2, PixelFormat::Gray8, vec![0; 4]).is_some());
    }

    #[test]
    fn from_pixels_rejects_zero_dimensions() {
        // An empty buffer would satisfy the length check for a 0xN image,
        // but downstream transforms assume at least one pixel per axis.
        assert!(RasterImage::from_pixels(0, 2, PixelFormat::Gray8, vec![]).is_none());
        assert!(RasterImage::from_pixels(2, 0, PixelFormat::Gray8, vec![]).is_none());
        assert!(RasterImage::from_pixels(0, 0, PixelFormat::Rgb8, vec![]).is_none());
        assert!(RasterImage::from_pixels(1, 1, PixelFormat::Gray8, vec![9]).is_some());
    }

    #[test]
    fn clone_shares_pixel_storage() {
        let img = RasterImage::from_pixels(2, 1, PixelFormat::Gray8, vec![7, 9]).unwrap();
        let copy = img.clone();
        assert!(Arc::ptr_eq(&img.data, &copy.data));
        assert_eq!(img, copy);
    }

    #[test]
    fn sample_clamped_replicates_border_pixels() {
        // 2x2 gray image:
        //   10 20
        //   30 40
        let img = RasterImage::from_pixels(2, 2, PixelFormat::Gray8, vec![10, 20, 30, 40]).unwrap();

        assert_eq!(img.sample_clamped(0, 0, 0), 10);
        assert_eq!(img.sample_clamped(-1, -1, 0), 10);
        assert_eq!(img.sample_clamped(2, 0, 0), 20);
        assert_eq!(img.sample_clamped(5, 5, 0), 40);
        assert_eq!(img.sample_clamped(0, 9, 0), 30);
    }

    #[test]
    fn pixel_index_accounts_for_channel_count() {
        let img = RasterImage::from_pixels(3, 2, PixelFormat::Rgb8, vec![0; 18]).unwrap();
        assert_eq!(img.pixel_index(0, 0), 0);
        assert_eq!(img.pixel_index(1, 0), 3);
        assert_eq!(img.pixel_index(0, 1), 9);
    }
}
