// SPDX-License-Identifier: MPL-2.0
//! 3x3 convolution kernels.
//!
//! Construction normalizes the nine weights so they sum to 1; a raw sum of 0
//! (edge detectors like Laplace or Sobel) is left unscaled. [`convolve`]
//! assumes its kernel is already normalized, so all construction paths go
//! through [`Kernel::new`].
//!
//! [`convolve`]: crate::processing::convolve

use crate::error::{Error, Result};

/// A normalized 3x3 kernel, stored in row-major reading order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    weights: [f32; 9],
}

/// Names of the bundled preset kernels, in menu order.
pub const PRESET_NAMES: [&str; 7] = [
    "Identity",
    "Low Pass",
    "Gaussian Filter",
    "High Pass",
    "Sobel Vertical Filter",
    "Sobel Horizontal Filter",
    "Laplace Filter",
];

impl Kernel {
    /// Builds a kernel from nine raw weights, normalizing them so they sum
    /// to 1. A zero sum is treated as scale factor 1, not a division.
    #[must_use]
    pub fn new(mut weights: [f32; 9]) -> Self {
        let mut sum: f32 = weights.iter().sum();
        if sum == 0.0 {
            sum = 1.0;
        }
        for w in &mut weights {
            *w /= sum;
        }
        Self { weights }
    }

    /// Builds a kernel from a slice, failing unless it has exactly nine
    /// elements.
    pub fn from_slice(weights: &[f32]) -> Result<Self> {
        let weights: [f32; 9] = weights
            .try_into()
            .map_err(|_| Error::InvalidKernel(format!("expected 9 weights, got {}", weights.len())))?;
        Ok(Self::new(weights))
    }

    /// Parses nine text cells (e.g. the fields of a kernel input grid) into
    /// a kernel. This is where malformed kernel input is caught; downstream
    /// filtering assumes a well-formed kernel.
    pub fn parse_cells<S: AsRef<str>>(cells: &[S]) -> Result<Self> {
        if cells.len() != 9 {
            return Err(Error::InvalidKernel(format!(
                "expected 9 cells, got {}",
                cells.len()
            )));
        }
        let mut weights = [0.0f32; 9];
        for (w, cell) in weights.iter_mut().zip(cells) {
            let text = cell.as_ref().trim();
            *w = text
                .parse()
                .map_err(|_| Error::InvalidKernel(format!("not a number: {:?}", text)))?;
        }
        Ok(Self::new(weights))
    }

    /// The normalized weights in row-major reading order.
    #[must_use]
    pub fn weights(&self) -> &[f32; 9] {
        &self.weights
    }

    /// Weight for the neighborhood offset `(dx, dy)`, each in `-1..=1`.
    #[inline]
    pub(crate) fn weight(&self, dx: i64, dy: i64) -> f32 {
        self.weights[((dy + 1) * 3 + (dx + 1)) as usize]
    }

    /// Looks up a bundled preset by name (see [`PRESET_NAMES`]).
    #[must_use]
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "Identity" => Some(Self::identity()),
            "Low Pass" => Some(Self::low_pass()),
            "Gaussian Filter" => Some(Self::gaussian()),
            "High Pass" => Some(Self::high_pass()),
            "Sobel Vertical Filter" => Some(Self::sobel_vertical()),
            "Sobel Horizontal Filter" => Some(Self::sobel_horizontal()),
            "Laplace Filter" => Some(Self::laplace()),
            _ => None,
        }
    }

    /// The identity kernel: convolution with it leaves the image unchanged.
    #[must_use]
    pub fn identity() -> Self {
        Self::new([0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0])
    }

    /// Mild blur.
    #[must_use]
    pub fn low_pass() -> Self {
        Self::new([1.0, 1.0, 1.0, 1.0, 2.0, 1.0, 1.0, 1.0, 1.0])
    }

    /// 3x3 Gaussian blur.
    #[must_use]
    pub fn gaussian() -> Self {
        Self::new([1.0, 2.0, 1.0, 2.0, 4.0, 2.0, 1.0, 2.0, 1.0])
    }

    /// Sharpening kernel.
    #[must_use]
    pub fn high_pass() -> Self {
        Self::new([-1.0, -1.0, -1.0, -1.0, 9.0, -1.0, -1.0, -1.0, -1.0])
    }

    /// Vertical-edge response (zero sum, no normalization applied).
    #[must_use]
    pub fn sobel_vertical() -> Self {
        Self::new([1.0, 0.0, -1.0, 2.0, 0.0, -2.0, 1.0, 0.0, -1.0])
    }

    /// Horizontal-edge response (zero sum, no normalization applied).
    #[must_use]
    pub fn sobel_horizontal() -> Self {
        Self::new([1.0, 2.0, 1.0, 0.0, 0.0, 0.0, -1.0, -2.0, -1.0])
    }

    /// Discrete Laplace operator (zero sum, no normalization applied).
    #[must_use]
    pub fn laplace() -> Self {
        Self::new([0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0])
    }
}
