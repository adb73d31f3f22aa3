//! Figure rendering.
//!
//! Builds the contour map as an ordered list of draw operations against a
//! mutable RGBA canvas: filled contour bands, coastlines, the map boundary,
//! gridlines with edge labels, the color legend, and the title. All layout
//! choices (surface size, contour levels, tick spacing) are fixed.

pub mod coastlines;
pub mod colorbar;
pub mod contours;
pub mod figure;
pub mod gridlines;
pub mod projection;
pub mod text;

pub use figure::{render_figure, Figure};
pub use projection::Projection;

/// Drawing surface width in pixels (24 in at 100 dpi)
pub const FIG_WIDTH: u32 = 2400;
/// Drawing surface height in pixels (12 in at 100 dpi)
pub const FIG_HEIGHT: u32 = 1200;

/// Margin left of the map axes, reserved for parallel labels
pub const MARGIN_LEFT: u32 = 100;
/// Margin right of the map axes, reserved for the color legend
pub const MARGIN_RIGHT: u32 = 280;
/// Margin above the map axes, reserved for the title
pub const MARGIN_TOP: u32 = 90;
/// Margin below the map axes, reserved for meridian labels
pub const MARGIN_BOTTOM: u32 = 80;

/// White figure background
pub const BACKGROUND: [u8; 4] = [255, 255, 255, 255];
/// Black ink for lines and text
pub const INK: [u8; 4] = [0, 0, 0, 255];
/// Gray ink for gridlines
pub const GRID_INK: [u8; 4] = [110, 110, 110, 255];
