//! densmap - render filled-contour density maps from NetCDF files
//!
//! This is the main entry point for the densmap command-line tool.

use clap::Parser;
use tracing::info;

use densmap::{init_tracing, log_error, run, Args, Result};

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(&args.log_level);

    info!("Starting densmap v{}", env!("CARGO_PKG_VERSION"));
    info!("Input file: {}", args.netcdf_file.display());

    let output = run(&args).map_err(|e| {
        log_error(&e, "pipeline");
        e
    })?;

    info!("Wrote {}", output.display());
    Ok(())
}
