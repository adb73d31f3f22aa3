//! Text drawing for titles and axis labels.
//!
//! Uses an embedded DejaVu Sans Mono face so the figure renders the same
//! everywhere, with no runtime font discovery.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use rusttype::{point, Font, Scale};

use crate::error::{DensmapError, Result};

/// Embedded font data - DejaVu Sans Mono
const FONT_DATA: &[u8] = include_bytes!("../../assets/DejaVuSansMono.ttf");

/// Parse the embedded font.
pub fn font() -> Result<Font<'static>> {
    Font::try_from_bytes(FONT_DATA).ok_or_else(|| DensmapError::Render {
        message: "Failed to parse embedded font".to_string(),
    })
}

/// Draw a label with its top-left corner at (x, y).
pub fn draw_label(
    img: &mut RgbaImage,
    font: &Font,
    text: &str,
    x: i32,
    y: i32,
    size: f32,
    color: [u8; 4],
) {
    draw_text_mut(img, Rgba(color), x, y, Scale::uniform(size), font, text);
}

/// Advance width of a string at the given size, for centering and
/// right-aligning labels.
pub fn text_width(font: &Font, text: &str, size: f32) -> f32 {
    let scale = Scale::uniform(size);
    font.layout(text, scale, point(0.0, 0.0))
        .map(|g| g.unpositioned().h_metrics().advance_width)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_font_parses() {
        assert!(font().is_ok());
    }

    #[test]
    fn test_text_width_scales_with_length() {
        let font = font().unwrap();
        let short = text_width(&font, "0", 14.0);
        let long = text_width(&font, "0000", 14.0);
        assert!(short > 0.0);
        // Monospace: four glyphs are four times one glyph
        assert!((long - 4.0 * short).abs() < 0.01);
    }

    #[test]
    fn test_draw_label_changes_pixels() {
        let font = font().unwrap();
        let mut img = RgbaImage::from_pixel(60, 30, Rgba([255, 255, 255, 255]));
        draw_label(&mut img, &font, "42", 5, 5, 20.0, [0, 0, 0, 255]);

        let touched = img.pixels().any(|p| p.0 != [255, 255, 255, 255]);
        assert!(touched);
    }
}
