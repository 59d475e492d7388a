//! App::update() method and related logic.

use iced::{Point, Task};

use super::app::App;
use super::Message;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ButtonClicked => self.button.on_click(),
            Message::ButtonEntered => self.handle_enter(),
            Message::ButtonLeft => self.handle_leave(),
            Message::CursorMoved(pos) => self.handle_cursor_moved(pos),
        }

        Task::none()
    }

    // ── Event handlers ──────────────────────────────────────────────────

    fn handle_enter(&mut self) {
        // The text fallback carries no tooltip.
        if !self.button.has_image() {
            return;
        }
        // Enter is published before the window-level move for the same
        // event, so wait for that move to learn the cursor position.
        self.hover_pending = true;
    }

    fn handle_leave(&mut self) {
        self.hover_pending = false;
        self.tooltip.on_leave();
    }

    fn handle_cursor_moved(&mut self, pos: Point) {
        self.tooltip.cursor_moved(pos);
        if std::mem::take(&mut self.hover_pending) {
            self.tooltip.on_enter();
        }
    }
}
