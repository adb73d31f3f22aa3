//! Error types for the densmap application.
//!
//! This module defines a comprehensive error enum that covers all possible
//! error conditions in the application. None of these are ever recovered
//! from: they propagate out of `run` and terminate the process non-zero,
//! before any output file has been written.

use thiserror::Error;

/// The main error type for densmap operations.
#[derive(Error, Debug)]
pub enum DensmapError {
    /// NetCDF file operation errors
    #[error("NetCDF error: {0}")]
    NetCdf(#[from] netcdf::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Required variable missing from the input file
    #[error("Data not found: {message}")]
    DataNotFound { message: String },

    /// Coordinate arrays inconsistent with the density grid
    #[error("Shape mismatch: {message}")]
    ShapeMismatch { message: String },

    /// ndarray construction errors
    #[error("Array shape error: {0}")]
    ArrayShape(#[from] ndarray::ShapeError),

    /// Invalid parameter errors
    #[error("Invalid parameter: {param} - {message}")]
    InvalidParameter { param: String, message: String },

    /// Interpolation errors
    #[error("Interpolation error: {message}")]
    Interpolation { message: String },

    /// Figure rendering errors
    #[error("Render error: {message}")]
    Render { message: String },

    /// Image encoding/saving errors
    #[error("Image generation error: {message}")]
    ImageGeneration { message: String },
}

/// Convenience type alias for Results with DensmapError
pub type Result<T> = std::result::Result<T, DensmapError>;
