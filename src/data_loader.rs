//! NetCDF data loading functionality.
//!
//! This module reads the three named variables (`lon`, `lat`, `dens`) from
//! a NetCDF file fully into memory. The file handle is scoped to the load
//! call and released before any rendering starts.

use ndarray::{Array1, Array2};
use netcdf::Variable as NetCDFVariable;
use std::path::Path;
use tracing::{debug, info};

use crate::error::{DensmapError, Result};
use crate::field::DensityField;

/// Name of the longitude coordinate variable
const LON_VAR: &str = "lon";
/// Name of the latitude coordinate variable
const LAT_VAR: &str = "lat";
/// Name of the density variable
const DENS_VAR: &str = "dens";

/// Load a density field from a NetCDF file.
///
/// Fails if the file cannot be opened, if any of the three variables is
/// absent, or if the coordinate lengths do not match the grid shape.
pub fn load_density(path: &Path) -> Result<DensityField> {
    if !path.exists() {
        return Err(DensmapError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        )));
    }

    let file = netcdf::open(path)?;

    info!("Opened NetCDF file: {}", path.display());
    debug!("File has {} variables", file.variables().count());
    debug!("File has {} dimensions", file.dimensions().count());

    let lon = read_coordinate(&file, LON_VAR)?;
    let lat = read_coordinate(&file, LAT_VAR)?;
    let dens = read_grid(&file, DENS_VAR)?;

    // Release the handle before the field (and later the figure) is built
    drop(file);

    debug!(
        lon_len = lon.len(),
        lat_len = lat.len(),
        dens_shape = ?dens.shape(),
        "Variables read into memory"
    );

    DensityField::new(lon, lat, dens)
}

/// Look up a variable by name, failing with a descriptive error if absent.
fn get_variable<'f>(file: &'f netcdf::File, name: &str) -> Result<NetCDFVariable<'f>> {
    file.variable(name).ok_or_else(|| DensmapError::DataNotFound {
        message: format!("Variable '{}' not found in NetCDF file", name),
    })
}

/// Read a 1-D coordinate variable as f64 values.
fn read_coordinate(file: &netcdf::File, name: &str) -> Result<Array1<f64>> {
    let var = get_variable(file, name)?;

    if var.dimensions().len() != 1 {
        return Err(DensmapError::ShapeMismatch {
            message: format!(
                "Variable '{}' must be 1-D, found {} dimensions",
                name,
                var.dimensions().len()
            ),
        });
    }

    let values = read_values_f64(&var, name)?;
    Ok(Array1::from_vec(values))
}

/// Read the 2-D density variable as an f32 grid, shape (lat, lon).
fn read_grid(file: &netcdf::File, name: &str) -> Result<Array2<f32>> {
    let var = get_variable(file, name)?;

    let dims = var.dimensions();
    if dims.len() != 2 {
        return Err(DensmapError::ShapeMismatch {
            message: format!(
                "Variable '{}' must be 2-D, found {} dimensions",
                name,
                dims.len()
            ),
        });
    }

    let rows = dims[0].len();
    let cols = dims[1].len();
    let values = read_values_f32(&var, name)?;
    let grid = Array2::from_shape_vec((rows, cols), values)?;
    Ok(grid)
}

/// Read a variable's values as f64, converting from any basic numeric type.
fn read_values_f64(var: &NetCDFVariable, name: &str) -> Result<Vec<f64>> {
    use netcdf::types::{BasicType, VariableType};

    match var.vartype() {
        VariableType::Basic(BasicType::Byte) => {
            let values: Vec<i8> = var.get_values::<i8, _>(..)?;
            Ok(values.into_iter().map(|v| v as f64).collect())
        }
        VariableType::Basic(BasicType::Short) => {
            let values: Vec<i16> = var.get_values::<i16, _>(..)?;
            Ok(values.into_iter().map(|v| v as f64).collect())
        }
        VariableType::Basic(BasicType::Int) => {
            let values: Vec<i32> = var.get_values::<i32, _>(..)?;
            Ok(values.into_iter().map(|v| v as f64).collect())
        }
        VariableType::Basic(BasicType::Float) => {
            let values: Vec<f32> = var.get_values::<f32, _>(..)?;
            Ok(values.into_iter().map(|v| v as f64).collect())
        }
        VariableType::Basic(BasicType::Double) => Ok(var.get_values::<f64, _>(..)?),
        other => Err(DensmapError::DataNotFound {
            message: format!("Variable '{}' has unsupported type: {:?}", name, other),
        }),
    }
}

/// Read a variable's values as f32, converting from any basic numeric type.
fn read_values_f32(var: &NetCDFVariable, name: &str) -> Result<Vec<f32>> {
    use netcdf::types::{BasicType, VariableType};

    match var.vartype() {
        VariableType::Basic(BasicType::Byte) => {
            let values: Vec<i8> = var.get_values::<i8, _>(..)?;
            Ok(values.into_iter().map(|v| v as f32).collect())
        }
        VariableType::Basic(BasicType::Short) => {
            let values: Vec<i16> = var.get_values::<i16, _>(..)?;
            Ok(values.into_iter().map(|v| v as f32).collect())
        }
        VariableType::Basic(BasicType::Int) => {
            let values: Vec<i32> = var.get_values::<i32, _>(..)?;
            Ok(values.into_iter().map(|v| v as f32).collect())
        }
        VariableType::Basic(BasicType::Float) => Ok(var.get_values::<f32, _>(..)?),
        VariableType::Basic(BasicType::Double) => {
            let values: Vec<f64> = var.get_values::<f64, _>(..)?;
            Ok(values.into_iter().map(|v| v as f32).collect())
        }
        other => Err(DensmapError::DataNotFound {
            message: format!("Variable '{}' has unsupported type: {:?}", name, other),
        }),
    }
}
