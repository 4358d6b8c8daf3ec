// SPDX-License-Identifier: MPL-2.0
//! The editing engine: session buffers, undo/redo history, and the
//! controller facade that orchestrates them.

pub mod controller;
pub mod history;
pub mod session;

pub use controller::{EditController, RenderUpdate};
pub use history::HistoryStack;
pub use session::{ColorAdjustment, EditSession};
