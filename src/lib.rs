//! Image Button
//!
//! A single window holding one image-backed button. Clicking prints a line to
//! the console; hovering shows a small tooltip next to the cursor.

pub mod bitmap;
pub mod button;
pub mod config;
pub mod error;
pub mod iced_app;
pub mod tooltip;

pub use error::{Error, Result};
pub use iced_app::run_iced_ui;
