//! The in-memory density field.
//!
//! Holds the three arrays read from the input file. Construction is
//! shape-checked and the coordinate axes are normalized to ascending
//! order, so every later consumer can index without re-validating.

use ndarray::{s, Array1, Array2};

use crate::error::{DensmapError, Result};

/// A gridded density field with its coordinate axes.
///
/// `dens` is indexed `[lat, lon]`: rows are latitudes, columns longitudes.
#[derive(Debug, Clone)]
pub struct DensityField {
    lon: Array1<f64>,
    lat: Array1<f64>,
    dens: Array2<f32>,
}

/// Direction of a coordinate axis.
#[derive(Debug, PartialEq)]
enum AxisOrder {
    Ascending,
    Descending,
}

/// Classify an axis, rejecting anything that is not strictly monotonic.
fn axis_order(name: &str, values: &Array1<f64>) -> Result<AxisOrder> {
    let ascending = values.windows(2).into_iter().all(|w| w[0] < w[1]);
    if ascending {
        return Ok(AxisOrder::Ascending);
    }

    let descending = values.windows(2).into_iter().all(|w| w[0] > w[1]);
    if descending {
        return Ok(AxisOrder::Descending);
    }

    Err(DensmapError::InvalidParameter {
        param: name.to_string(),
        message: format!(
            "coordinate axis '{}' must be strictly monotonic (all increasing or all decreasing)",
            name
        ),
    })
}

impl DensityField {
    /// Create a field, checking that the coordinate arrays are non-empty
    /// and consistent with the grid shape.
    ///
    /// Axes stored in descending order are reversed (together with the
    /// matching grid dimension) so the field always holds ascending
    /// coordinates. Non-monotonic axes are rejected.
    pub fn new(lon: Array1<f64>, lat: Array1<f64>, dens: Array2<f32>) -> Result<Self> {
        if lon.is_empty() || lat.is_empty() {
            return Err(DensmapError::ShapeMismatch {
                message: format!(
                    "coordinate arrays must be non-empty: lon has {} values, lat has {}",
                    lon.len(),
                    lat.len()
                ),
            });
        }

        if lon.len() != dens.ncols() {
            return Err(DensmapError::ShapeMismatch {
                message: format!(
                    "lon has {} values but dens has {} columns",
                    lon.len(),
                    dens.ncols()
                ),
            });
        }

        if lat.len() != dens.nrows() {
            return Err(DensmapError::ShapeMismatch {
                message: format!(
                    "lat has {} values but dens has {} rows",
                    lat.len(),
                    dens.nrows()
                ),
            });
        }

        let mut lon = lon;
        let mut lat = lat;
        let mut dens = dens;

        if axis_order("lon", &lon)? == AxisOrder::Descending {
            lon = lon.slice(s![..;-1]).to_owned();
            dens = dens.slice(s![.., ..;-1]).to_owned();
        }
        if axis_order("lat", &lat)? == AxisOrder::Descending {
            lat = lat.slice(s![..;-1]).to_owned();
            dens = dens.slice(s![..;-1, ..]).to_owned();
        }

        Ok(Self { lon, lat, dens })
    }

    /// Longitude coordinates, one per grid column (degrees, [0, 360))
    pub fn lon(&self) -> &Array1<f64> {
        &self.lon
    }

    /// Latitude coordinates, one per grid row (degrees, [-90, 90])
    pub fn lat(&self) -> &Array1<f64> {
        &self.lat
    }

    /// The density grid, shape (lat, lon)
    pub fn dens(&self) -> &Array2<f32> {
        &self.dens
    }

    /// Grid shape as (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.dens.nrows(), self.dens.ncols())
    }
}
