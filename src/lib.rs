//! # densmap
//!
//! Render filled-contour density maps from NetCDF files.
//!
//! densmap reads a gridded density field (`lon`, `lat`, `dens`) from a
//! NetCDF file, draws it as filled contour bands over a full-globe
//! cylindrical-equidistant map with coastlines, gridlines, a color legend
//! and a title, and writes the result as a PNG named after the input file.
//!
//! The pipeline is a single linear pass:
//!
//! - **Loader**: reads the three variables fully into memory, then
//!   releases the file handle.
//! - **Renderer**: composes the figure as an ordered list of draw
//!   operations with fixed layout choices.
//! - **Writer**: trims the canvas to its drawn content and saves the PNG.

pub mod colormaps;
pub mod config;
pub mod data_loader;
pub mod error;
pub mod field;
pub mod interpolation;
pub mod logging;
pub mod render;

use std::path::PathBuf;
use tracing::info;

pub use config::Args;
pub use error::{DensmapError, Result};
pub use field::DensityField;
pub use logging::{init_tracing, log_error, log_timed_operation};

/// Run the full pipeline: load, render, save.
///
/// Returns the path of the written PNG. Any failure propagates before the
/// output file is created.
pub fn run(args: &Args) -> Result<PathBuf> {
    let field = log_timed_operation("load", || data_loader::load_density(&args.netcdf_file))?;

    info!(
        lon_len = field.lon().len(),
        lat_len = field.lat().len(),
        "Density field loaded"
    );

    let title = args.title();
    let figure = log_timed_operation("render", || render::render_figure(&field, &title))?;

    let output = args.output_path();
    log_timed_operation("save", || figure.save(&output))?;

    Ok(output)
}
