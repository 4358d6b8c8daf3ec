// SPDX-License-Identifier: MPL-2.0
//! `rasterlab` is the editing engine of a small raster-image editor.
//!
//! It covers the pixel-transform algorithms (grayscale conversion, 3x3
//! convolution, brightness/contrast adjustment), the dual-buffer
//! preview/commit session, a linear undo/redo history, and the controller
//! facade a UI layer drives, plus the image codec, pan/zoom viewport math,
//! and persisted preferences. Windowing, dialogs, and the render loop are
//! left to the hosting application.
//!
//! ```
//! use rasterlab::editing::EditController;
//! use rasterlab::processing::Kernel;
//! use rasterlab::raster::{PixelFormat, RasterImage};
//!
//! let image = RasterImage::from_pixels(1, 1, PixelFormat::Gray8, vec![100]).unwrap();
//!
//! let mut controller = EditController::new();
//! controller.load(image);
//! let update = controller.apply_filter(&Kernel::gaussian()).unwrap();
//! assert!(update.can_undo);
//! ```

pub mod codec;
pub mod config;
pub mod editing;
pub mod error;
pub mod processing;
pub mod raster;
pub mod viewport;
