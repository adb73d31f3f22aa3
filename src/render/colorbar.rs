//! The color legend.
//!
//! A vertical bar right of the map with one cell per contour band, lowest
//! band at the bottom, and a tick label at each contour level.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;
use imageproc::rect::Rect;
use rusttype::Font;

use crate::render::text::draw_label;
use crate::render::Projection;

/// Horizontal gap between the map axes and the bar
const BAR_OFFSET: u32 = 60;
/// Bar width in pixels
const BAR_WIDTH: u32 = 45;
/// Tick mark length in pixels
const TICK: f32 = 6.0;
/// Tick label font size
const LABEL_SIZE: f32 = 22.0;

/// Draw the legend keyed to the contour levels.
///
/// `colors` holds one entry per band (levels.len() + 1, including the two
/// extend bands); the boundaries between cells line up with `levels`.
pub fn draw_colorbar(
    img: &mut RgbaImage,
    proj: &Projection,
    font: &Font,
    levels: &[f32],
    colors: &[[u8; 4]],
    ink: [u8; 4],
) {
    let x0 = proj.right() + BAR_OFFSET;
    let y0 = proj.top();
    let height = proj.height();
    let bands = colors.len() as u32;

    // Cells, bottom band first
    for (i, color) in colors.iter().enumerate() {
        let top_frac = 1.0 - (i as f64 + 1.0) / bands as f64;
        let cell_top = y0 + (top_frac * height as f64) as u32;
        let cell_bottom = y0 + ((top_frac + 1.0 / bands as f64) * height as f64) as u32;
        let cell_height = (cell_bottom - cell_top).max(1);

        imageproc::drawing::draw_filled_rect_mut(
            img,
            Rect::at(x0 as i32, cell_top as i32).of_size(BAR_WIDTH, cell_height),
            Rgba(*color),
        );
    }

    // Frame
    imageproc::drawing::draw_hollow_rect_mut(
        img,
        Rect::at(x0 as i32, y0 as i32).of_size(BAR_WIDTH, height),
        Rgba(ink),
    );

    // Ticks and labels at the band boundaries that carry level values
    for (i, level) in levels.iter().enumerate() {
        let boundary_frac = 1.0 - (i as f64 + 1.0) / bands as f64;
        let y = y0 as f32 + (boundary_frac * height as f64) as f32;
        let tick_x = (x0 + BAR_WIDTH) as f32;
        draw_line_segment_mut(img, (tick_x, y), (tick_x + TICK, y), Rgba(ink));

        draw_label(
            img,
            font,
            &format!("{:.3}", level),
            (tick_x + TICK) as i32 + 6,
            y as i32 - (LABEL_SIZE / 2.0) as i32,
            LABEL_SIZE,
            ink,
        );
    }
}
