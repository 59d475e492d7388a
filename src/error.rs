use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{} not found", .path.display())]
    ImageNotFound { path: PathBuf },

    #[error("failed to load image {}: {source}", .path.display())]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid image size: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// True for the file-not-found kind, false for every other load failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::ImageNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
