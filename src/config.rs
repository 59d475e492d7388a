//! Application configuration.
//!
//! Read once at startup from `<config_dir>/image-button/config.json`. Any
//! missing field takes its default; a missing or unreadable file yields the
//! defaults. Command-line flags are layered on top by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::bitmap::TargetSize;
use crate::error::Result;

/// Default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("image-button")
        .join("config.json")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_title")]
    pub window_title: String,
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    #[serde(default = "default_window_height")]
    pub window_height: f32,
    #[serde(default = "default_image_path")]
    pub image_path: PathBuf,
    #[serde(default = "default_image_width")]
    pub image_width: u32,
    #[serde(default = "default_image_height")]
    pub image_height: u32,
    /// Vertical space above and below the button.
    #[serde(default = "default_button_padding")]
    pub button_padding: f32,
}

fn default_title() -> String { "Image Button Example".into() }
fn default_window_width() -> f32 { 400.0 }
fn default_window_height() -> f32 { 300.0 }
fn default_image_path() -> PathBuf { PathBuf::from("HelloWorld1.jpg") }
fn default_image_width() -> u32 { 150 }
fn default_image_height() -> u32 { 100 }
fn default_button_padding() -> f32 { 50.0 }

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: default_title(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            image_path: default_image_path(),
            image_width: default_image_width(),
            image_height: default_image_height(),
            button_padding: default_button_padding(),
        }
    }
}

impl AppConfig {
    /// Load from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        Self::load_or_default(&default_path())
    }

    /// Load from `path`, falling back to defaults on any error.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("Using default config ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Strict load: IO and JSON errors are returned.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn target_size(&self) -> TargetSize {
        TargetSize::new(self.image_width, self.image_height)
    }
}
