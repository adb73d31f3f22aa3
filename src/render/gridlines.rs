//! Latitude/longitude gridlines with edge labels.
//!
//! Parallels every 30 degrees from -90 and meridians every 30 degrees from
//! 0, drawn dashed across the map. Each family is labeled on one edge
//! only: parallels on the left, meridians on the bottom.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_line_segment_mut;
use rusttype::Font;

use crate::render::text::{draw_label, text_width};
use crate::render::Projection;

/// Spacing between gridlines in degrees
pub const GRID_STEP: f64 = 30.0;
/// Dash length in pixels
const DASH: f32 = 6.0;
/// Gap between dashes in pixels
const GAP: f32 = 6.0;
/// Label font size
const LABEL_SIZE: f32 = 22.0;

/// The parallels drawn on the map: -90, -60, ..., 60 (the 90N edge gets
/// no line of its own).
pub fn parallels() -> Vec<f64> {
    let mut out = Vec::new();
    let mut lat = -90.0;
    while lat < 90.0 {
        out.push(lat);
        lat += GRID_STEP;
    }
    out
}

/// The meridians drawn on the map: 0, 30, ..., 330.
pub fn meridians() -> Vec<f64> {
    let mut out = Vec::new();
    let mut lon = 0.0;
    while lon < 360.0 {
        out.push(lon);
        lon += GRID_STEP;
    }
    out
}

/// Draw a horizontal dashed line at pixel row `y` across the axes.
fn dashed_horizontal(img: &mut RgbaImage, proj: &Projection, y: f32, color: [u8; 4]) {
    let mut x = proj.left() as f32;
    let end = proj.right() as f32;
    while x < end {
        let x1 = (x + DASH).min(end);
        draw_line_segment_mut(img, (x, y), (x1, y), Rgba(color));
        x += DASH + GAP;
    }
}

/// Draw a vertical dashed line at pixel column `x` down the axes.
fn dashed_vertical(img: &mut RgbaImage, proj: &Projection, x: f32, color: [u8; 4]) {
    let mut y = proj.top() as f32;
    let end = proj.bottom() as f32;
    while y < end {
        let y1 = (y + DASH).min(end);
        draw_line_segment_mut(img, (x, y), (x, y1), Rgba(color));
        y += DASH + GAP;
    }
}

/// Draw all parallels and meridians with their edge labels.
pub fn draw_gridlines(
    img: &mut RgbaImage,
    proj: &Projection,
    font: &Font,
    line_color: [u8; 4],
    label_color: [u8; 4],
) {
    for lat in parallels() {
        let (_, y) = proj.to_pixel(0.0, lat);
        dashed_horizontal(img, proj, y, line_color);

        // Right-aligned label just left of the axes
        let label = format_degrees(lat);
        let w = text_width(font, &label, LABEL_SIZE);
        draw_label(
            img,
            font,
            &label,
            proj.left() as i32 - w as i32 - 8,
            y as i32 - (LABEL_SIZE / 2.0) as i32,
            LABEL_SIZE,
            label_color,
        );
    }

    for lon in meridians() {
        let (x, _) = proj.to_pixel(lon, 0.0);
        dashed_vertical(img, proj, x, line_color);

        // Centered label just below the axes
        let label = format_degrees(lon);
        let w = text_width(font, &label, LABEL_SIZE);
        draw_label(
            img,
            font,
            &label,
            x as i32 - (w / 2.0) as i32,
            proj.bottom() as i32 + 8,
            LABEL_SIZE,
            label_color,
        );
    }
}

/// Degree value as a tick label, without a trailing `.0`.
fn format_degrees(value: f64) -> String {
    format!("{}", value as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parallel_positions() {
        assert_eq!(parallels(), vec![-90.0, -60.0, -30.0, 0.0, 30.0, 60.0]);
    }

    #[test]
    fn test_meridian_positions() {
        let m = meridians();
        assert_eq!(m.len(), 12);
        assert_eq!(m[0], 0.0);
        assert_eq!(m[11], 330.0);
    }

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(-60.0), "-60");
        assert_eq!(format_degrees(0.0), "0");
        assert_eq!(format_degrees(330.0), "330");
    }

    #[test]
    fn test_draw_gridlines_marks_pixels() {
        let font = crate::render::text::font().unwrap();
        let mut img = RgbaImage::from_pixel(500, 300, Rgba([255, 255, 255, 255]));
        let proj = Projection::new(60, 20, 400, 240);

        draw_gridlines(&mut img, &proj, &font, [110, 110, 110, 255], [0, 0, 0, 255]);

        let gridded = img.pixels().filter(|p| p.0 == [110, 110, 110, 255]).count();
        assert!(gridded > 0);
    }
}
