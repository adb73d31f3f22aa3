//! Test data generation utilities.
//!
//! Builds NetCDF fixture files with known density patterns for the
//! end-to-end tests.

use std::path::Path;

use netcdf::Error;
type Result<T> = std::result::Result<T, Error>;

/// Create a well-formed global density file.
///
/// The grid spans lon [0, 360) and lat [-90, 90] with a smooth bump
/// centered on the equator whose maximum is `peak`.
pub fn create_global_density_nc(path: &Path, cols: usize, rows: usize, peak: f32) -> Result<()> {
    let mut file = netcdf::create(path)?;

    file.add_dimension("lon", cols)?;
    file.add_dimension("lat", rows)?;

    file.add_attribute("title", "densmap test fixture")?;

    let lon_values: Vec<f64> = (0..cols).map(|i| i as f64 * 360.0 / cols as f64).collect();
    let lat_values: Vec<f64> = (0..rows)
        .map(|i| -90.0 + i as f64 * 180.0 / (rows - 1) as f64)
        .collect();

    let mut dens_values = Vec::with_capacity(rows * cols);
    for y in 0..rows {
        for x in 0..cols {
            // Bump centered at (180E, 0N)
            let lon = lon_values[x];
            let lat = lat_values[y];
            let d_lon = (lon - 180.0) / 90.0;
            let d_lat = lat / 45.0;
            let value = peak as f64 * (-(d_lon * d_lon + d_lat * d_lat)).exp();
            dens_values.push(value as f32);
        }
    }

    {
        let mut lon_var = file.add_variable::<f64>("lon", &["lon"])?;
        lon_var.put_attribute("units", "degrees_east")?;
        lon_var.put_values(&lon_values, &[..])?;
    }
    {
        let mut lat_var = file.add_variable::<f64>("lat", &["lat"])?;
        lat_var.put_attribute("units", "degrees_north")?;
        lat_var.put_values(&lat_values, &[..])?;
    }
    {
        let mut dens_var = file.add_variable::<f32>("dens", &["lat", "lon"])?;
        dens_var.put_values(&dens_values, &[.., ..])?;
    }

    Ok(())
}

/// Create the same bump as [`create_global_density_nc`], but with the
/// latitude axis stored north-to-south.
pub fn create_descending_lat_density_nc(
    path: &Path,
    cols: usize,
    rows: usize,
    peak: f32,
) -> Result<()> {
    let mut file = netcdf::create(path)?;

    file.add_dimension("lon", cols)?;
    file.add_dimension("lat", rows)?;

    let lon_values: Vec<f64> = (0..cols).map(|i| i as f64 * 360.0 / cols as f64).collect();
    let lat_values: Vec<f64> = (0..rows)
        .map(|i| 90.0 - i as f64 * 180.0 / (rows - 1) as f64)
        .collect();

    let mut dens_values = Vec::with_capacity(rows * cols);
    for y in 0..rows {
        for x in 0..cols {
            let lon = lon_values[x];
            let lat = lat_values[y];
            let d_lon = (lon - 180.0) / 90.0;
            let d_lat = lat / 45.0;
            let value = peak as f64 * (-(d_lon * d_lon + d_lat * d_lat)).exp();
            dens_values.push(value as f32);
        }
    }

    {
        let mut lon_var = file.add_variable::<f64>("lon", &["lon"])?;
        lon_var.put_values(&lon_values, &[..])?;
    }
    {
        let mut lat_var = file.add_variable::<f64>("lat", &["lat"])?;
        lat_var.put_values(&lat_values, &[..])?;
    }
    {
        let mut dens_var = file.add_variable::<f32>("dens", &["lat", "lon"])?;
        dens_var.put_values(&dens_values, &[.., ..])?;
    }

    Ok(())
}

/// Create a file whose `lon` length disagrees with the density grid's
/// column count (5 longitudes against 4 columns).
pub fn create_shape_mismatch_nc(path: &Path) -> Result<()> {
    let mut file = netcdf::create(path)?;

    file.add_dimension("lon", 5)?;
    file.add_dimension("lat", 3)?;
    file.add_dimension("col", 4)?;

    {
        let mut lon_var = file.add_variable::<f64>("lon", &["lon"])?;
        lon_var.put_values(&[0.0, 72.0, 144.0, 216.0, 288.0], &[..])?;
    }
    {
        let mut lat_var = file.add_variable::<f64>("lat", &["lat"])?;
        lat_var.put_values(&[-60.0, 0.0, 60.0], &[..])?;
    }
    {
        let mut dens_var = file.add_variable::<f32>("dens", &["lat", "col"])?;
        dens_var.put_values(&[0.05f32; 12], &[.., ..])?;
    }

    Ok(())
}

/// Create a file with coordinates but no `dens` variable.
pub fn create_missing_dens_nc(path: &Path) -> Result<()> {
    let mut file = netcdf::create(path)?;

    file.add_dimension("lon", 4)?;
    file.add_dimension("lat", 3)?;

    {
        let mut lon_var = file.add_variable::<f64>("lon", &["lon"])?;
        lon_var.put_values(&[0.0, 90.0, 180.0, 270.0], &[..])?;
    }
    {
        let mut lat_var = file.add_variable::<f64>("lat", &["lat"])?;
        lat_var.put_values(&[-60.0, 0.0, 60.0], &[..])?;
    }

    Ok(())
}
