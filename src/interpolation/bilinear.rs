//! Bilinear interpolation.
//!
//! Linear interpolation in two dimensions using the four nearest grid
//! points. This is what the contour fill samples the density grid with.

use super::Interpolator;
use crate::error::Result;
use crate::interpolation::common;

/// Bilinear interpolator
pub struct BilinearInterpolator;

impl Interpolator for BilinearInterpolator {
    fn interpolate(&self, data: &[f32], shape: &[usize], indices: &[f64]) -> Result<f32> {
        if indices.len() != 2 || shape.len() != 2 {
            return Err(crate::error::DensmapError::Interpolation {
                message: format!(
                    "Bilinear interpolation requires 2-D data, got {} indices over {} dimensions",
                    indices.len(),
                    shape.len()
                ),
            });
        }

        let (rows, cols) = (shape[0], shape[1]);
        let y = common::clamp_index(indices[0], rows);
        let x = common::clamp_index(indices[1], cols);

        let y0 = y.floor() as usize;
        let x0 = x.floor() as usize;
        let y1 = (y0 + 1).min(rows - 1);
        let x1 = (x0 + 1).min(cols - 1);

        let (wy0, wy1) = common::linear_weight(y - y0 as f64);
        let (wx0, wx1) = common::linear_weight(x - x0 as f64);

        let v00 = data[common::flat_index(&[y0, x0], shape)?] as f64;
        let v01 = data[common::flat_index(&[y0, x1], shape)?] as f64;
        let v10 = data[common::flat_index(&[y1, x0], shape)?] as f64;
        let v11 = data[common::flat_index(&[y1, x1], shape)?] as f64;

        let value = wy0 * (wx0 * v00 + wx1 * v01) + wy1 * (wx0 * v10 + wx1 * v11);
        Ok(value as f32)
    }

    fn name(&self) -> &str {
        "bilinear"
    }
}
