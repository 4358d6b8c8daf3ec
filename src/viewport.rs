// SPDX-License-Identifier: MPL-2.0
//! Pan/zoom view state for the rendering collaborator.
//!
//! The engine itself never draws; this module only carries the coordinate
//! math between screen space and image space so any renderer can position
//! the raster. The mapping is `screen = pan + zoom * image`, the same affine
//! chain a canvas applies when it translates by the drag offset and then
//! scales.

use crate::config::defaults::{DEFAULT_ZOOM, DEFAULT_ZOOM_STEP_FACTOR, MAX_ZOOM, MIN_ZOOM};

/// Current pan offset and zoom of the displayed image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    zoom: f32,
    pan_x: f32,
    pan_y: f32,
    step_factor: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    #[must_use]
    pub fn new() -> Self {
        Self::with_step_factor(DEFAULT_ZOOM_STEP_FACTOR)
    }

    /// A viewport with a configured zoom step (see
    /// [`Config::zoom_step_factor`](crate::config::Config)).
    #[must_use]
    pub fn with_step_factor(step_factor: f32) -> Self {
        Self {
            zoom: DEFAULT_ZOOM,
            pan_x: 0.0,
            pan_y: 0.0,
            step_factor: if step_factor > 1.0 {
                step_factor
            } else {
                DEFAULT_ZOOM_STEP_FACTOR
            },
        }
    }

    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> (f32, f32) {
        (self.pan_x, self.pan_y)
    }

    /// One wheel step in: multiplies the zoom by the step factor, clamped.
    pub fn zoom_in(&mut self) {
        self.zoom = (self.zoom * self.step_factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// One wheel step out: divides the zoom by the step factor, clamped.
    pub fn zoom_out(&mut self) {
        self.zoom = (self.zoom / self.step_factor).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Translates the image by a drag delta in screen pixels.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Resets pan and zoom, as happens when a new image is displayed.
    pub fn reset(&mut self) {
        self.zoom = DEFAULT_ZOOM;
        self.pan_x = 0.0;
        self.pan_y = 0.0;
    }

    /// Maps an image-space point to screen space.
    #[must_use]
    pub fn image_to_screen(&self, x: f32, y: f32) -> (f32, f32) {
        (self.pan_x + self.zoom * x, self.pan_y + self.zoom * y)
    }

    /// Maps a screen-space point (e.g. a cursor position) back to image
    /// space. Inverse of [`image_to_screen`](Self::image_to_screen).
    #[must_use]
    pub fn screen_to_image(&self, x: f32, y: f32) -> (f32, f32) {
        ((x - self.pan_x) / self.zoom, (y - self.pan_y) / self.zoom)
    }
}

/// Offset that centers an image inside a viewport, in image-space units
/// before zoom. Negative when the image is larger than the viewport.
#[must_use]
pub fn centering_offset(
    viewport_width: f32,
    viewport_height: f32,
    image_width: f32,
    image_height: f32,
) -> (f32, f32) {
    (
        (viewport_width - image_width) / 2.0,
        (viewport_height - image_height) / 2.0,
    )
}
