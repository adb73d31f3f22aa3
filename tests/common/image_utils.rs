//! Image verification helpers for the end-to-end tests.

use image::{DynamicImage, GenericImageView, ImageError};
use std::path::Path;

/// Load an image from a file
pub fn load_image(path: &Path) -> Result<DynamicImage, ImageError> {
    image::open(path)
}

/// Assert an image decodes to non-trivial dimensions.
pub fn assert_image_nonempty(image: &DynamicImage) {
    let (width, height) = image.dimensions();
    assert!(
        width > 0 && height > 0,
        "image is empty: {}x{}",
        width,
        height
    );
}
