// SPDX-License-Identifier: MPL-2.0
//! Linear undo/redo history over committed images.

use crate::raster::RasterImage;

/// Two LIFO stacks of committed images.
///
/// An image enters the undo stack exactly once, when an edit is committed
/// (capturing the pre-edit state). It moves to the redo stack on undo and
/// back on redo; a fresh committing edit clears the redo stack entirely, so
/// the history stays linear. Each entry is owned by whichever stack
/// currently holds it.
#[derive(Debug, Default)]
pub struct HistoryStack {
    undo: Vec<RasterImage>,
    redo: Vec<RasterImage>,
}

impl HistoryStack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the pre-edit image for a committing edit. Any redoable edits
    /// are discarded: there is no redo after a fresh branch.
    pub fn push_edit(&mut self, pre_edit: RasterImage) {
        self.undo.push(pre_edit);
        self.redo.clear();
    }

    /// Pops the most recent pre-edit image, parking `current` on the redo
    /// stack. Returns `None` when there is nothing to undo.
    pub fn undo(&mut self, current: RasterImage) -> Option<RasterImage> {
        let previous = self.undo.pop()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Pops the most recently undone image, parking `current` on the undo
    /// stack. Returns `None` when there is nothing to redo.
    pub fn redo(&mut self, current: RasterImage) -> Option<RasterImage> {
        let next = self.redo.pop()?;
        self.undo.push(current);
        Some(next)
    }

    /// Whether an undo operation is currently possible.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// Whether a redo operation is currently possible.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Drops both stacks. A fresh load starts a fresh history.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}
