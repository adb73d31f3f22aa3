//! Command-line interface for densmap.
//!
//! The tool takes four positional arguments: the input NetCDF file and the
//! three free-text strings that make up the plot title. The output path is
//! not configurable; it is always derived from the input file name.

use clap::Parser;
use std::path::{Path, PathBuf};

/// Command-line arguments for densmap
#[derive(Parser, Debug, Clone)]
#[command(name = "densmap")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the NetCDF file containing lon, lat and dens variables
    pub netcdf_file: PathBuf,

    /// First descriptive token, used verbatim in the title
    pub token1: String,

    /// Second descriptive token, used verbatim in the title
    pub token2: String,

    /// Quantity name, used verbatim in the title
    pub quantity: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The exact title drawn on the figure.
    pub fn title(&self) -> String {
        format!(
            "{} density for {} {}",
            self.quantity, self.token1, self.token2
        )
    }

    /// Derive the output path from the input path.
    pub fn output_path(&self) -> PathBuf {
        output_path_for(&self.netcdf_file)
    }
}

/// Strip the final `.`-delimited extension from the input path and append
/// `_plot.png`. Only the last extension is removed, so `a.b.nc` maps to
/// `a.b_plot.png`. A path with no extension keeps its full name.
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input.with_extension("");
    let mut name = stem.into_os_string();
    name.push("_plot.png");
    PathBuf::from(name)
}
