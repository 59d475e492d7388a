//! Iced-based UI for the image button window.
//!
//! This module is split into several submodules:
//! - `app`: App struct and initialization
//! - `styles`: UI styling functions and color palette
//! - `view`: App::view()
//! - `update`: App::update() and message handling

mod app;
mod styles;
mod update;
mod view;

use iced::Point;

use crate::config::AppConfig;

pub use app::App;
pub use styles::palette;

use app::INIT_CONFIG;

/// Application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// The button was pressed and released.
    ButtonClicked,
    /// Cursor crossed into the button.
    ButtonEntered,
    /// Cursor crossed out of the button.
    ButtonLeft,
    /// Cursor moved, in window coordinates.
    CursorMoved(Point),
}

/// Run the iced UI with the given configuration.
pub fn run_iced_ui(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let window_size = (config.window_width, config.window_height);

    // Store in thread-local for the boot function
    INIT_CONFIG.with(|cell| *cell.borrow_mut() = Some(config));

    iced::application(App::boot, App::update, App::view)
        .title(App::title)
        .window_size(window_size)
        .run()?;

    Ok(())
}
