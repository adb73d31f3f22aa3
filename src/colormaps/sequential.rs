//! Sequential colormaps (single-hue progression).
//!
//! Suitable for data that progresses from low to high, such as densities.

use super::colormap::Colormap;

/// Viridis colormap - perceptually uniform, colorblind-friendly.
///
/// Anchor colors sampled evenly from matplotlib's viridis, interpolated
/// linearly in RGB.
pub struct Viridis;

impl Colormap for Viridis {
    fn map_normalized(&self, value: f32) -> [u8; 4] {
        let colors = [
            [68, 1, 84],    // Dark purple
            [71, 45, 123],
            [59, 82, 139],
            [44, 114, 142],
            [33, 145, 140], // Teal in the middle
            [39, 173, 129],
            [93, 200, 99],
            [170, 220, 50],
            [253, 231, 37], // Yellow
        ];

        let value = value.clamp(0.0, 1.0);
        let position = value * (colors.len() - 1) as f32;
        let index = position.floor() as usize;

        if index >= colors.len() - 1 {
            let last = colors[colors.len() - 1];
            return [last[0], last[1], last[2], 255];
        }

        let t = position - index as f32;
        let rgb = super::colormap::lerp_color(colors[index], colors[index + 1], t);
        [rgb[0], rgb[1], rgb[2], 255]
    }

    fn name(&self) -> &str {
        "viridis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viridis_endpoints() {
        assert_eq!(Viridis.map_normalized(0.0), [68, 1, 84, 255]);
        assert_eq!(Viridis.map_normalized(1.0), [253, 231, 37, 255]);
    }

    #[test]
    fn test_viridis_clamps_input() {
        assert_eq!(Viridis.map_normalized(-0.5), Viridis.map_normalized(0.0));
        assert_eq!(Viridis.map_normalized(1.5), Viridis.map_normalized(1.0));
    }

    #[test]
    fn test_viridis_is_opaque() {
        for i in 0..=10 {
            let color = Viridis.map_normalized(i as f32 / 10.0);
            assert_eq!(color[3], 255);
        }
    }

    #[test]
    fn test_colormap_name() {
        assert_eq!(Viridis.name(), "viridis");
    }
}
