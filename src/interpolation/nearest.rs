//! Nearest neighbor interpolation.
//!
//! Selects the value of the nearest grid point. Fastest method, used by
//! tests that want exact grid values back.

use super::Interpolator;
use crate::error::Result;
use crate::interpolation::common;

/// Nearest neighbor interpolator
pub struct NearestInterpolator;

impl Interpolator for NearestInterpolator {
    fn interpolate(&self, data: &[f32], shape: &[usize], indices: &[f64]) -> Result<f32> {
        if indices.len() != shape.len() {
            return Err(crate::error::DensmapError::Interpolation {
                message: format!(
                    "Dimension mismatch: indices has {} dimensions but shape has {} dimensions",
                    indices.len(),
                    shape.len()
                ),
            });
        }

        // Round each index to the nearest integer and clamp to valid range
        let mut nearest_indices = Vec::with_capacity(indices.len());
        for (i, &index) in indices.iter().enumerate() {
            let nearest = common::clamp_index(index.round(), shape[i]) as usize;
            nearest_indices.push(nearest);
        }

        let flat_idx = common::flat_index(&nearest_indices, shape)?;

        if flat_idx >= data.len() {
            return Err(crate::error::DensmapError::Interpolation {
                message: format!(
                    "Index out of bounds: calculated index {} exceeds data length {}",
                    flat_idx,
                    data.len()
                ),
            });
        }

        Ok(data[flat_idx])
    }

    fn name(&self) -> &str {
        "nearest"
    }
}
