// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for the engine's tunable constants.
//!
//! # Categories
//!
//! - **Zoom**: viewport zoom factor and bounds
//! - **Color adjustment**: slider ranges for brightness and contrast
//! - **Saving**: default encode format

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom applied when an image is first displayed (1.0 = original size).
pub const DEFAULT_ZOOM: f32 = 1.0;

/// Multiplier applied per zoom-in/zoom-out step.
pub const DEFAULT_ZOOM_STEP_FACTOR: f32 = 1.2;

/// Minimum allowed zoom.
pub const MIN_ZOOM: f32 = 0.3;

/// Maximum allowed zoom.
pub const MAX_ZOOM: f32 = 5.0;

// ==========================================================================
// Color Adjustment Defaults
// ==========================================================================

/// Minimum brightness offset a UI should offer.
pub const MIN_BRIGHTNESS_OFFSET: i32 = -255;

/// Maximum brightness offset a UI should offer.
pub const MAX_BRIGHTNESS_OFFSET: i32 = 255;

/// Neutral brightness offset.
pub const DEFAULT_BRIGHTNESS_OFFSET: i32 = 0;

/// Smallest contrast scale a UI should offer.
pub const MIN_CONTRAST_SCALE: f32 = 0.0;

/// Largest contrast scale a UI should offer.
pub const MAX_CONTRAST_SCALE: f32 = 10.0;

/// Neutral contrast scale.
pub const DEFAULT_CONTRAST_SCALE: f32 = 1.0;

// ==========================================================================
// Saving Defaults
// ==========================================================================

/// Encode format used when the user has not picked one.
pub const DEFAULT_SAVE_FORMAT: &str = "jpg";
