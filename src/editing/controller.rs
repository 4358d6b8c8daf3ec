// SPDX-License-Identifier: MPL-2.0
//! The request/response facade the UI layer talks to.
//!
//! The controller is a state machine over two modes: no image loaded
//! (initial) and image loaded. Every mutating operation runs to completion
//! before the next is accepted and either fully succeeds or leaves the
//! session and history untouched.

use log::debug;

use crate::editing::history::HistoryStack;
use crate::editing::session::EditSession;
use crate::error::{Error, Result};
use crate::processing::{self, Kernel};
use crate::raster::RasterImage;

/// What the UI needs after every operation: the image to render and the
/// current enable/disable state for the undo/redo controls.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderUpdate {
    pub image: RasterImage,
    pub can_undo: bool,
    pub can_redo: bool,
}

struct Document {
    session: EditSession,
    history: HistoryStack,
}

impl Document {
    /// Pushes the current committed image to history, then commits `next`.
    fn commit(&mut self, next: RasterImage) {
        self.history.push_edit(self.session.committed().clone());
        self.session.set_committed(next);
    }

    fn committed_update(&self) -> RenderUpdate {
        RenderUpdate {
            image: self.session.committed().clone(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }

    fn preview_update(&self) -> RenderUpdate {
        RenderUpdate {
            image: self.session.preview().clone(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        }
    }
}

/// Orchestrates transforms, the edit session, and the history stacks for a
/// single open document. One instance per document; no concurrent access.
#[derive(Default)]
pub struct EditController {
    document: Option<Document>,
}

impl EditController {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once an image has been loaded.
    #[must_use]
    pub fn is_image_loaded(&self) -> bool {
        self.document.is_some()
    }

    /// Installs a freshly decoded image, discarding any previous document
    /// and its history entirely. Valid in either mode.
    ///
    /// Indexed-color sources never reach this point: the codec rejects them
    /// during decode.
    pub fn load(&mut self, decoded: RasterImage) -> RenderUpdate {
        debug!(
            "loading image {}x{} ({:?})",
            decoded.width(),
            decoded.height(),
            decoded.format()
        );
        let document = Document {
            session: EditSession::new(decoded),
            history: HistoryStack::new(),
        };
        let update = document.committed_update();
        self.document = Some(document);
        update
    }

    /// The committed image, for the I/O collaborator to encode. Does not
    /// touch history.
    pub fn committed_image(&self) -> Result<&RasterImage> {
        Ok(self.document()?.session.committed())
    }

    /// Converts the committed image to grayscale. No-op (with a fresh
    /// [`RenderUpdate`]) if it is already single-channel.
    pub fn to_grayscale(&mut self) -> Result<RenderUpdate> {
        let document = self.document_mut()?;
        if document.session.committed().is_gray() {
            return Ok(document.committed_update());
        }
        let gray = processing::to_grayscale(document.session.committed());
        document.commit(gray);
        Ok(document.committed_update())
    }

    /// Convolves the committed image with `kernel` and commits the result.
    /// The kernel is assumed well-formed and normalized (see
    /// [`Kernel`]); malformed kernel text is caught at parse time.
    pub fn apply_filter(&mut self, kernel: &Kernel) -> Result<RenderUpdate> {
        let document = self.document_mut()?;
        let filtered = processing::convolve(document.session.committed(), kernel);
        document.commit(filtered);
        Ok(document.committed_update())
    }

    /// Live brightness preview: updates the pending offset and returns the
    /// preview image. No history change until the adjustment is applied.
    pub fn preview_brightness(&mut self, offset: i32) -> Result<RenderUpdate> {
        let document = self.document_mut()?;
        document.session.preview_offset(offset);
        Ok(document.preview_update())
    }

    /// Live contrast preview: updates the pending scale and returns the
    /// preview image.
    pub fn preview_contrast(&mut self, scale: f32) -> Result<RenderUpdate> {
        let document = self.document_mut()?;
        document.session.preview_scale(scale);
        Ok(document.preview_update())
    }

    /// Commits the pending color adjustment, pushing the pre-commit image to
    /// history.
    pub fn apply_color_adjustment(&mut self) -> Result<RenderUpdate> {
        let document = self.document_mut()?;
        document
            .history
            .push_edit(document.session.committed().clone());
        document.session.commit_preview();
        Ok(document.committed_update())
    }

    /// Abandons the pending color adjustment (dialog closed without
    /// applying). No history change.
    pub fn cancel_color_adjustment(&mut self) -> Result<RenderUpdate> {
        let document = self.document_mut()?;
        document.session.discard_preview();
        Ok(document.committed_update())
    }

    /// Restores the previous committed image, if any. A no-op update when
    /// there is nothing to undo.
    pub fn undo(&mut self) -> Result<RenderUpdate> {
        let document = self.document_mut()?;
        let current = document.session.committed().clone();
        if let Some(previous) = document.history.undo(current) {
            document.session.set_committed(previous);
        }
        Ok(document.committed_update())
    }

    /// Re-applies the most recently undone edit, if any.
    pub fn redo(&mut self) -> Result<RenderUpdate> {
        let document = self.document_mut()?;
        let current = document.session.committed().clone();
        if let Some(next) = document.history.redo(current) {
            document.session.set_committed(next);
        }
        Ok(document.committed_update())
    }

    fn document(&self) -> Result<&Document> {
        self.document.as_ref().ok_or(Error::NoImageLoaded)
    }

    fn document_mut(&mut self) -> Result<&mut Document> {
        self.document.as_mut().ok_or(Error::NoImageLoaded)
    }
}
