//! Common test utilities for densmap.

pub mod image_utils;
pub mod test_data;
