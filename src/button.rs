//! The image-backed button and its text fallback.

use std::path::Path;

use iced::widget::image::Handle as ImageHandle;

use crate::bitmap::{self, Bitmap, TargetSize};
use crate::error::Error;

/// Label shown when the button image cannot be loaded.
pub const FALLBACK_LABEL: &str = "Image Not Found - Click Me!";

/// Console line printed for every click.
pub const CLICK_MESSAGE: &str = "HWbutton1 was clicked!";

/// What the button draws.
#[derive(Debug, Clone)]
pub enum ButtonFace {
    Image {
        handle: ImageHandle,
        width: u32,
        height: u32,
    },
    Text(String),
}

#[derive(Debug)]
pub struct ImageButton {
    face: ButtonFace,
    clicks: u64,
}

impl ImageButton {
    /// Load the button image, falling back to a text face on any load error.
    ///
    /// The failure is reported on the console and returned alongside the
    /// button so callers can inspect it.
    pub fn load_or_fallback(path: &Path, size: TargetSize) -> (Self, Option<Error>) {
        match bitmap::load(path, size) {
            Ok(bitmap) => (Self::with_image(bitmap), None),
            Err(err) => {
                report_load_error(&err);
                (Self::with_text(FALLBACK_LABEL), Some(err))
            }
        }
    }

    pub fn with_image(bitmap: Bitmap) -> Self {
        let (width, height) = (bitmap.width, bitmap.height);
        Self {
            face: ButtonFace::Image {
                handle: bitmap.into_handle(),
                width,
                height,
            },
            clicks: 0,
        }
    }

    pub fn with_text(label: impl Into<String>) -> Self {
        Self {
            face: ButtonFace::Text(label.into()),
            clicks: 0,
        }
    }

    pub fn face(&self) -> &ButtonFace {
        &self.face
    }

    pub fn has_image(&self) -> bool {
        matches!(self.face, ButtonFace::Image { .. })
    }

    /// Number of clicks handled so far.
    pub fn clicks(&self) -> u64 {
        self.clicks
    }

    /// Handle a click: one console line per call.
    pub fn on_click(&mut self) {
        self.clicks += 1;
        println!("{CLICK_MESSAGE}");
        tracing::debug!("click #{}", self.clicks);
    }
}

fn report_load_error(err: &Error) {
    match err {
        Error::ImageNotFound { path } => println!(
            "Error: {} not found. Make sure it's in the same directory.",
            path.display()
        ),
        other => println!("An error occurred loading the image: {other}"),
    }
    println!("Using a text button instead of image due to load error.");
    tracing::warn!("Falling back to text button: {}", err);
}
