//! Figure composition and output.
//!
//! Draw order is fixed: filled contours, gridlines, coastlines, the map
//! boundary, the color legend, then the title. Saving trims the canvas to
//! the bounding box of the drawn content before encoding the PNG.

use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use std::path::Path;
use tracing::{debug, info};

use crate::colormaps::get_colormap;
use crate::error::{DensmapError, Result};
use crate::field::DensityField;
use crate::render::contours::{band_colors, draw_filled_contours, levels};
use crate::render::text::{draw_label, font, text_width};
use crate::render::{
    coastlines, gridlines, Projection, BACKGROUND, FIG_HEIGHT, FIG_WIDTH, GRID_INK, INK,
    MARGIN_BOTTOM, MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP,
};

/// Title font size in pixels
const TITLE_SIZE: f32 = 34.0;
/// Padding kept around the content when trimming
const TRIM_PAD: u32 = 10;

/// A completed in-memory figure.
pub struct Figure {
    image: RgbaImage,
}

/// Render the full contour map figure for a density field.
pub fn render_figure(field: &DensityField, title: &str) -> Result<Figure> {
    let mut img = RgbaImage::from_pixel(FIG_WIDTH, FIG_HEIGHT, Rgba(BACKGROUND));
    let proj = Projection::new(
        MARGIN_LEFT,
        MARGIN_TOP,
        FIG_WIDTH - MARGIN_LEFT - MARGIN_RIGHT,
        FIG_HEIGHT - MARGIN_TOP - MARGIN_BOTTOM,
    );
    let font = font()?;
    let colormap = get_colormap("viridis")?;

    debug!(
        width = FIG_WIDTH,
        height = FIG_HEIGHT,
        grid_shape = ?field.shape(),
        "Rendering figure"
    );

    draw_filled_contours(&mut img, &proj, field, colormap.as_ref())?;
    gridlines::draw_gridlines(&mut img, &proj, &font, GRID_INK, INK);
    coastlines::draw_coastlines(&mut img, &proj, INK);

    // Map boundary frame
    draw_hollow_rect_mut(
        &mut img,
        Rect::at(proj.left() as i32, proj.top() as i32).of_size(proj.width(), proj.height()),
        Rgba(INK),
    );

    let contour_levels = levels();
    let colors = band_colors(colormap.as_ref(), contour_levels.len() + 1);
    crate::render::colorbar::draw_colorbar(&mut img, &proj, &font, &contour_levels, &colors, INK);

    // Title, centered over the map axes
    let title_w = text_width(&font, title, TITLE_SIZE);
    let title_x = proj.left() as i32 + (proj.width() as f32 / 2.0 - title_w / 2.0) as i32;
    let title_y = (MARGIN_TOP as f32 / 2.0 - TITLE_SIZE / 2.0) as i32;
    draw_label(&mut img, &font, title, title_x, title_y, TITLE_SIZE, INK);

    Ok(Figure { image: img })
}

impl Figure {
    /// The composed canvas, untrimmed.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// The canvas cropped to the bounding box of its non-background
    /// content, with a small pad.
    pub fn trimmed(&self) -> RgbaImage {
        let (width, height) = self.image.dimensions();
        let mut min_x = width;
        let mut min_y = height;
        let mut max_x = 0u32;
        let mut max_y = 0u32;

        for (x, y, pixel) in self.image.enumerate_pixels() {
            if pixel.0 != BACKGROUND {
                min_x = min_x.min(x);
                min_y = min_y.min(y);
                max_x = max_x.max(x);
                max_y = max_y.max(y);
            }
        }

        if min_x > max_x || min_y > max_y {
            // Nothing was drawn; keep the canvas as-is
            return self.image.clone();
        }

        let x0 = min_x.saturating_sub(TRIM_PAD);
        let y0 = min_y.saturating_sub(TRIM_PAD);
        let x1 = (max_x + TRIM_PAD + 1).min(width);
        let y1 = (max_y + TRIM_PAD + 1).min(height);

        imageops::crop_imm(&self.image, x0, y0, x1 - x0, y1 - y0).to_image()
    }

    /// Trim and write the figure as a PNG.
    pub fn save(&self, path: &Path) -> Result<()> {
        let trimmed = self.trimmed();

        debug!(
            trimmed_width = trimmed.width(),
            trimmed_height = trimmed.height(),
            "Saving figure"
        );

        trimmed
            .save(path)
            .map_err(|e| DensmapError::ImageGeneration {
                message: format!("Failed to write {}: {}", path.display(), e),
            })?;

        info!(path = %path.display(), "Figure written");
        Ok(())
    }
}
