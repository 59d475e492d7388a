//! Shared test helpers.

use std::path::{Path, PathBuf};

use image_button::config::AppConfig;

/// Write a solid-color JPEG of the given size into `dir`.
pub fn write_test_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::from_pixel(width, height, image::Rgb([200, 40, 40]))
        .save(&path)
        .expect("Failed to write test image");
    path
}

/// Default config pointing at `image_path`.
pub fn config_for(image_path: PathBuf) -> AppConfig {
    AppConfig {
        image_path,
        ..AppConfig::default()
    }
}
