//! App struct definition and core initialization.

use std::cell::RefCell;

use iced::Task;

use crate::button::ImageButton;
use crate::config::AppConfig;
use crate::tooltip::TooltipController;

use super::Message;

// Thread-local storage for init params
thread_local! {
    pub static INIT_CONFIG: RefCell<Option<AppConfig>> = const { RefCell::new(None) };
}

/// Application state.
pub struct App {
    pub(crate) config: AppConfig,
    pub(crate) button: ImageButton,
    pub(crate) tooltip: TooltipController,
    /// Set on hover-enter; the popup is placed on the next cursor update.
    pub(crate) hover_pending: bool,
    /// Load error shown in the console at startup, kept for inspection.
    pub(crate) load_error: Option<String>,
}

impl App {
    pub fn title(state: &Self) -> String {
        state.config.window_title.clone()
    }

    pub fn boot() -> (Self, Task<Message>) {
        let config = INIT_CONFIG
            .with(|cell| cell.borrow_mut().take())
            .unwrap_or_default();
        (Self::new(config), Task::none())
    }

    /// Load the button image and build the initial state.
    pub fn new(config: AppConfig) -> Self {
        let (button, err) = ImageButton::load_or_fallback(&config.image_path, config.target_size());

        App {
            config,
            button,
            tooltip: TooltipController::new(),
            hover_pending: false,
            load_error: err.map(|e| e.to_string()),
        }
    }

    pub fn button(&self) -> &ImageButton {
        &self.button
    }

    pub fn tooltip(&self) -> &TooltipController {
        &self.tooltip
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }
}
