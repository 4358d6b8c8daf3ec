// SPDX-License-Identifier: MPL-2.0
//! The dual-buffer edit session: a committed image plus a live preview.

use crate::processing;
use crate::raster::RasterImage;

/// Pending brightness/contrast parameters, relative to the committed image.
///
/// `offset` is added to every channel (expected range `[-255, 255]`);
/// `scale` multiplies brightness (expected `> 0`). The identity pair is
/// `(0, 1.0)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorAdjustment {
    pub offset: i32,
    pub scale: f32,
}

impl Default for ColorAdjustment {
    fn default() -> Self {
        Self {
            offset: 0,
            scale: 1.0,
        }
    }
}

impl ColorAdjustment {
    /// Returns `true` when applying this adjustment would change nothing.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.offset == 0 && self.scale == 1.0
    }
}

/// Holds the committed image, the in-progress preview, and the adjustment
/// that produced the preview.
///
/// Invariant: `preview` is always derivable from
/// `(committed, adjustment)` and is never itself pushed to history. The
/// preview is recomputed from `committed` on every change, never
/// incrementally from the previous preview, so repeated slider ticks cannot
/// accumulate drift.
#[derive(Debug, Clone)]
pub struct EditSession {
    committed: RasterImage,
    preview: RasterImage,
    adjustment: ColorAdjustment,
}

impl EditSession {
    /// Starts a session on a freshly loaded image.
    #[must_use]
    pub fn new(image: RasterImage) -> Self {
        Self {
            preview: image.clone(),
            committed: image,
            adjustment: ColorAdjustment::default(),
        }
    }

    /// Replaces the committed image, resetting any pending adjustment.
    pub fn set_committed(&mut self, image: RasterImage) {
        self.committed = image;
        self.adjustment = ColorAdjustment::default();
        self.preview = self.committed.clone();
    }

    /// The last confirmed image; what undo/redo and save operate on.
    #[must_use]
    pub fn committed(&self) -> &RasterImage {
        &self.committed
    }

    /// The image to display while an adjustment is pending. Equals
    /// `committed` when the adjustment is identity.
    #[must_use]
    pub fn preview(&self) -> &RasterImage {
        &self.preview
    }

    /// The pending adjustment parameters.
    #[must_use]
    pub fn adjustment(&self) -> ColorAdjustment {
        self.adjustment
    }

    /// Updates the brightness half of the pending adjustment, keeping the
    /// contrast half. Drives the live preview on every slider tick.
    pub fn preview_offset(&mut self, offset: i32) {
        self.adjustment.offset = offset;
        self.refresh_preview();
    }

    /// Updates the contrast half of the pending adjustment, keeping the
    /// brightness half.
    pub fn preview_scale(&mut self, scale: f32) {
        self.adjustment.scale = scale;
        self.refresh_preview();
    }

    /// Replaces both halves of the pending adjustment at once.
    pub fn preview_adjustment(&mut self, adjustment: ColorAdjustment) {
        self.adjustment = adjustment;
        self.refresh_preview();
    }

    /// Promotes the preview to committed and resets the adjustment.
    ///
    /// Pushing the pre-commit image to history is the caller's job; the
    /// session holds no history.
    pub fn commit_preview(&mut self) {
        self.committed = self.preview.clone();
        self.adjustment = ColorAdjustment::default();
    }

    /// Abandons the pending adjustment (dialog cancelled) and restores the
    /// preview to the committed image.
    pub fn discard_preview(&mut self) {
        self.adjustment = ColorAdjustment::default();
        self.preview = self.committed.clone();
    }

    fn refresh_preview(&mut self) {
        self.preview =
            processing::adjust_color(&self.committed, self.adjustment.offset, self.adjustment.scale);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::PixelFormat;

    fn gray(pixels: &[u8]) -> RasterImage {
        RasterImage::from_pixels(pixels.len() as u32, 1, PixelFormat::Gray8, pixels.to_vec())
            .expect("pixel count")
    }

    #[test]
    fn new_session_previews_the_committed_image() {
        let session = EditSession::new(gray(&[1, 2, 3]));
        assert_eq!(session.preview(), session.committed());
        assert!(session.adjustment().is_identity());
    }

    #[test]
    fn preview_offset_recomputes_from_committed() {
        let mut session = EditSession::new(gray(&[100]));

        session.preview_offset(10);
        assert_eq!(session.preview().as_bytes(), &[110]);

        // A second tick replaces the first rather than stacking on it.
        session.preview_offset(20);
        assert_eq!(session.preview().as_bytes(), &[120]);
        assert_eq!(session.committed().as_bytes(), &[100]);
    }

    #[test]
    fn offset_and_scale_combine_in_one_preview() {
        let mut session = EditSession::new(gray(&[100]));
        session.preview_offset(20);
        session.preview_scale(0.5);
        assert_eq!(session.adjustment(), ColorAdjustment { offset: 20, scale: 0.5 });
        assert_eq!(session.preview().as_bytes(), &[60]);
    }

    #[test]
    fn commit_preview_promotes_and_resets() {
        let mut session = EditSession::new(gray(&[100]));
        session.preview_offset(50);
        session.commit_preview();

        assert_eq!(session.committed().as_bytes(), &[150]);
        assert!(session.adjustment().is_identity());
    }

    #[test]
    fn discard_preview_restores_committed() {
        let mut session = EditSession::new(gray(&[100]));
        session.preview_scale(2.0);
        session.discard_preview();

        assert_eq!(session.preview(), session.committed());
        assert!(session.adjustment().is_identity());
    }

    #[test]
    fn set_committed_clears_pending_adjustment() {
        let mut session = EditSession::new(gray(&[100]));
        session.preview_offset(30);

        session.set_committed(gray(&[7]));
        assert_eq!(session.committed().as_bytes(), &[7]);
        assert_eq!(session.preview().as_bytes(), &[7]);
        assert!(session.adjustment().is_identity());
    }
}
