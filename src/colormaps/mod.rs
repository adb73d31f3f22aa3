//! Colormap implementations for the contour fill.
//!
//! Matplotlib-inspired colormaps; viridis is the default used for the
//! filled contour bands and the legend.

pub mod colormap;
pub mod sequential;

pub use colormap::{get_colormap, Colormap};
pub use sequential::Viridis;
