//! The cylindrical-equidistant map projection.
//!
//! A linear mapping from (longitude, latitude) degrees to pixel positions
//! inside the map axes rectangle. North is at the top, longitude runs
//! left to right across [0, 359].

/// Longitude at the left edge of the map
pub const LON_MIN: f64 = 0.0;
/// Longitude at the right edge of the map
pub const LON_MAX: f64 = 359.0;
/// Latitude at the bottom edge of the map
pub const LAT_MIN: f64 = -90.0;
/// Latitude at the top edge of the map
pub const LAT_MAX: f64 = 90.0;

/// Cylindrical-equidistant projection over a pixel rectangle.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    x0: u32,
    y0: u32,
    width: u32,
    height: u32,
}

impl Projection {
    /// A full-globe projection drawn into the given axes rectangle.
    pub fn new(x0: u32, y0: u32, width: u32, height: u32) -> Self {
        Self {
            x0,
            y0,
            width,
            height,
        }
    }

    /// Project (lon, lat) in degrees to pixel coordinates.
    pub fn to_pixel(&self, lon: f64, lat: f64) -> (f32, f32) {
        let fx = (lon - LON_MIN) / (LON_MAX - LON_MIN);
        let fy = (LAT_MAX - lat) / (LAT_MAX - LAT_MIN);
        (
            self.x0 as f32 + (fx * self.width as f64) as f32,
            self.y0 as f32 + (fy * self.height as f64) as f32,
        )
    }

    /// Longitude at the center of pixel column `px`. Columns outside the
    /// axes extrapolate linearly.
    pub fn lon_at(&self, px: u32) -> f64 {
        let fx = px as f64 - self.x0 as f64 + 0.5;
        LON_MIN + fx / self.width as f64 * (LON_MAX - LON_MIN)
    }

    /// Latitude at the center of pixel row `py`. Rows outside the axes
    /// extrapolate linearly.
    pub fn lat_at(&self, py: u32) -> f64 {
        let fy = py as f64 - self.y0 as f64 + 0.5;
        LAT_MAX - fy / self.height as f64 * (LAT_MAX - LAT_MIN)
    }

    /// Left edge of the axes rectangle
    pub fn left(&self) -> u32 {
        self.x0
    }

    /// Top edge of the axes rectangle
    pub fn top(&self) -> u32 {
        self.y0
    }

    /// Right edge of the axes rectangle (exclusive)
    pub fn right(&self) -> u32 {
        self.x0 + self.width
    }

    /// Bottom edge of the axes rectangle (exclusive)
    pub fn bottom(&self) -> u32 {
        self.y0 + self.height
    }

    /// Axes width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Axes height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proj() -> Projection {
        Projection::new(100, 50, 718, 360)
    }

    #[test]
    fn test_corners() {
        let p = proj();

        let (x, y) = p.to_pixel(0.0, 90.0);
        assert_eq!((x, y), (100.0, 50.0));

        let (x, y) = p.to_pixel(359.0, -90.0);
        assert_eq!((x, y), (818.0, 410.0));
    }

    #[test]
    fn test_equator_is_vertical_midpoint() {
        let p = proj();
        let (_, y) = p.to_pixel(180.0, 0.0);
        assert_eq!(y, 230.0);
    }

    #[test]
    fn test_pixel_inverse_roundtrip() {
        let p = proj();
        // Pixel centers map back into the axes rectangle
        for px in [p.left(), p.left() + 300, p.right() - 1] {
            let lon = p.lon_at(px);
            let (x, _) = p.to_pixel(lon, 0.0);
            assert!((x - (px as f32 + 0.5)).abs() < 1.0);
        }

        assert!(p.lat_at(p.top()) <= 90.0);
        assert!(p.lat_at(p.bottom() - 1) >= -90.0);
    }

    #[test]
    fn test_pixels_outside_axes_extrapolate() {
        let p = proj();
        // Columns left of the axes and rows above them still map to finite
        // coordinates instead of wrapping
        assert!(p.lon_at(0) < LON_MIN);
        assert!(p.lat_at(0) > LAT_MAX);
    }

    #[test]
    fn test_latitude_decreases_downward() {
        let p = proj();
        assert!(p.lat_at(p.top()) > p.lat_at(p.bottom() - 1));
    }
}
