//! Filled contour bands.
//!
//! The density grid is drawn as discrete color bands at fixed levels
//! 0.0, 0.025, ..., 0.275 with "extend both" behavior: values below the
//! first level fall into the lowest band and values at or above the last
//! level into the highest band, so no data value can fail to render.

use image::RgbaImage;
use tracing::debug;

use crate::colormaps::Colormap;
use crate::error::Result;
use crate::field::DensityField;
use crate::interpolation::{common, get_interpolator};
use crate::render::Projection;

/// Spacing between contour levels
pub const LEVEL_STEP: f32 = 0.025;
/// Number of contour levels (0.0 through 0.275 inclusive)
pub const LEVEL_COUNT: usize = 12;

/// The fixed contour levels.
pub fn levels() -> Vec<f32> {
    (0..LEVEL_COUNT).map(|i| i as f32 * LEVEL_STEP).collect()
}

/// Index of the color band a value falls into.
///
/// With N levels there are N+1 bands: band 0 below the first level, bands
/// 1..N between consecutive levels, and band N at or above the last level.
pub fn band_index(value: f32, levels: &[f32]) -> usize {
    let mut band = 0;
    for &level in levels {
        if value >= level {
            band += 1;
        } else {
            break;
        }
    }
    band
}

/// One opaque color per band, sampled at band midpoints of the colormap.
pub fn band_colors(colormap: &dyn Colormap, band_count: usize) -> Vec<[u8; 4]> {
    (0..band_count)
        .map(|i| colormap.map_normalized((i as f32 + 0.5) / band_count as f32))
        .collect()
}

/// Fill the map axes with contour bands of the density field.
///
/// Each pixel center is projected back to (lon, lat), mapped to fractional
/// grid indices along the coordinate axes (clamping outside the grid), and
/// the density is sampled bilinearly before being classified into a band.
pub fn draw_filled_contours(
    img: &mut RgbaImage,
    proj: &Projection,
    field: &DensityField,
    colormap: &dyn Colormap,
) -> Result<()> {
    let levels = levels();
    let colors = band_colors(colormap, levels.len() + 1);
    let interpolator = get_interpolator("bilinear")?;

    let lon_coords = field.lon().to_vec();
    let lat_coords = field.lat().to_vec();
    let (rows, cols) = field.shape();
    let shape = vec![rows, cols];
    let flat: Vec<f32> = field.dens().iter().cloned().collect();

    debug!(
        levels = levels.len(),
        bands = colors.len(),
        grid_rows = rows,
        grid_cols = cols,
        "Drawing filled contours"
    );

    for py in proj.top()..proj.bottom() {
        let lat = proj.lat_at(py);
        let row_idx = common::coord_to_index(lat, &lat_coords)?;
        for px in proj.left()..proj.right() {
            let lon = proj.lon_at(px);
            let col_idx = common::coord_to_index(lon, &lon_coords)?;

            let value = interpolator.interpolate(&flat, &shape, &[row_idx, col_idx])?;
            let color = if value.is_finite() {
                colors[band_index(value, &levels)]
            } else {
                super::BACKGROUND
            };

            img.put_pixel(px, py, image::Rgba(color));
        }
    }

    Ok(())
}
