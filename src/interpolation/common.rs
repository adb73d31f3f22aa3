//! Common utilities for interpolation algorithms.

use crate::error::{DensmapError, Result};

/// Map a coordinate value to a fractional grid index.
///
/// `coord_values` must be monotonically increasing. Values outside the
/// coordinate range clamp to the first/last index.
pub fn coord_to_index(coord: f64, coord_values: &[f64]) -> Result<f64> {
    if coord_values.is_empty() {
        return Err(DensmapError::Interpolation {
            message: "Cannot map a coordinate onto an empty axis".to_string(),
        });
    }
    if coord_values.len() == 1 {
        return Ok(0.0);
    }

    let last = coord_values.len() - 1;
    if coord <= coord_values[0] {
        return Ok(0.0);
    }
    if coord >= coord_values[last] {
        return Ok(last as f64);
    }

    // partition_point gives the first index with value > coord
    let upper = coord_values.partition_point(|&v| v <= coord);
    let lower = upper - 1;
    let span = coord_values[upper] - coord_values[lower];
    if span <= 0.0 {
        return Ok(lower as f64);
    }

    Ok(lower as f64 + (coord - coord_values[lower]) / span)
}

/// Clamp an index to valid bounds
pub fn clamp_index(index: f64, size: usize) -> f64 {
    index.max(0.0).min((size - 1) as f64)
}

/// Get the weights for linear interpolation
pub fn linear_weight(fraction: f64) -> (f64, f64) {
    (1.0 - fraction, fraction)
}

/// Compute the flat index for multi-dimensional indices in row-major order
pub fn flat_index(indices: &[usize], shape: &[usize]) -> Result<usize> {
    if indices.len() != shape.len() {
        return Err(DensmapError::Interpolation {
            message: format!(
                "Dimension mismatch: {} indices for {} dimensions",
                indices.len(),
                shape.len()
            ),
        });
    }

    let mut flat = 0;
    for (&idx, &dim) in indices.iter().zip(shape.iter()) {
        if idx >= dim {
            return Err(DensmapError::Interpolation {
                message: format!("Index {} out of bounds for dimension of size {}", idx, dim),
            });
        }
        flat = flat * dim + idx;
    }

    Ok(flat)
}
