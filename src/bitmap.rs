//! Image loading for the button face.

use std::path::Path;

use iced::widget::image::Handle as ImageHandle;
use image::imageops::FilterType;

use crate::error::{Error, Result};

/// Size the button image is resampled to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSize {
    pub width: u32,
    pub height: u32,
}

impl TargetSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for TargetSize {
    fn default() -> Self {
        Self::new(150, 100)
    }
}

/// Decoded RGBA pixels ready to hand to iced.
#[derive(Debug, Clone)]
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>, // RGBA
}

impl Bitmap {
    /// Hand the pixel data over to an iced image handle.
    pub fn into_handle(self) -> ImageHandle {
        ImageHandle::from_rgba(self.width, self.height, self.pixels)
    }
}

/// Open `path` and resample it to exactly `size` with a Lanczos filter.
///
/// The aspect ratio is not preserved. A missing file maps to
/// [`Error::ImageNotFound`]; anything else the decoder rejects maps to
/// [`Error::ImageLoad`].
pub fn load(path: &Path, size: TargetSize) -> Result<Bitmap> {
    if size.width == 0 || size.height == 0 {
        return Err(Error::InvalidSize {
            width: size.width,
            height: size.height,
        });
    }

    let img = image::open(path).map_err(|e| classify(path, e))?;
    let resized = img.resize_exact(size.width, size.height, FilterType::Lanczos3);
    let rgba = resized.to_rgba8();
    let (width, height) = rgba.dimensions();

    tracing::debug!("Loaded {} -> {}x{}", path.display(), width, height);

    Ok(Bitmap {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}

fn classify(path: &Path, err: image::ImageError) -> Error {
    match err {
        image::ImageError::IoError(ref io) if io.kind() == std::io::ErrorKind::NotFound => {
            Error::ImageNotFound {
                path: path.to_path_buf(),
            }
        }
        source => Error::ImageLoad {
            path: path.to_path_buf(),
            source,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_rejected_before_touching_disk() {
        let err = load(Path::new("does-not-matter.png"), TargetSize::new(0, 10)).unwrap_err();
        assert!(matches!(err, Error::InvalidSize { width: 0, height: 10 }));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load(Path::new("no/such/HelloWorld1.jpg"), TargetSize::default()).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("HelloWorld1.jpg"));
    }

    #[test]
    fn test_handle_keeps_dimensions_and_pixels() {
        let bitmap = Bitmap {
            width: 2,
            height: 1,
            pixels: vec![255, 0, 0, 255, 0, 255, 0, 255],
        };
        match bitmap.into_handle() {
            ImageHandle::Rgba { width, height, pixels, .. } => {
                assert_eq!((width, height), (2, 1));
                assert_eq!(pixels.len(), 8);
                assert_eq!(&pixels[4..8], &[0, 255, 0, 255]);
            }
            other => panic!("expected an RGBA handle, got {other:?}"),
        }
    }
}
