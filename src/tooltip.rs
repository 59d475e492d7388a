//! Hover tooltip: a single borderless popup placed next to the cursor.

use iced::{Color, Point, Vector};

/// Distance from the cursor to the popup's top-left corner.
pub const CURSOR_OFFSET: Vector = Vector::new(10.0, 10.0);

pub const TOOLTIP_TEXT: &str = "Would you like to know what '#' means?";

/// Fixed look of the tooltip label.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipStyle {
    pub text: &'static str,
    pub background: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub font_family: &'static str,
    pub font_size: f32,
    pub padding: f32,
}

impl Default for TooltipStyle {
    fn default() -> Self {
        Self {
            text: TOOLTIP_TEXT,
            // lightyellow
            background: Color::from_rgb(1.0, 1.0, 224.0 / 255.0),
            border_color: Color::BLACK,
            border_width: 1.0,
            font_family: "Arial",
            font_size: 9.0,
            padding: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PopupId(pub u64);

/// A live tooltip popup.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub id: PopupId,
    pub position: Point,
    pub style: TooltipStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TooltipPhase {
    Hidden,
    Shown,
}

/// Owns the (at most one) tooltip popup.
#[derive(Debug, Default)]
pub struct TooltipController {
    popup: Option<Popup>,
    cursor: Point,
    next_id: u64,
    style: TooltipStyle,
}

impl TooltipController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TooltipPhase {
        if self.popup.is_some() {
            TooltipPhase::Shown
        } else {
            TooltipPhase::Hidden
        }
    }

    pub fn popup(&self) -> Option<&Popup> {
        self.popup.as_ref()
    }

    /// Number of popups currently alive (0 or 1).
    pub fn popup_count(&self) -> usize {
        usize::from(self.popup.is_some())
    }

    pub fn cursor(&self) -> Point {
        self.cursor
    }

    /// Record the last-known cursor position. A shown popup stays put.
    pub fn cursor_moved(&mut self, position: Point) {
        self.cursor = position;
    }

    /// Hover-enter: replace any existing popup with a fresh one at the cursor.
    pub fn on_enter(&mut self) -> &Popup {
        self.destroy();

        let id = PopupId(self.next_id);
        self.next_id += 1;
        let position = self.cursor + CURSOR_OFFSET;
        tracing::debug!("tooltip {:?} shown at ({}, {})", id, position.x, position.y);

        self.popup.insert(Popup {
            id,
            position,
            style: self.style,
        })
    }

    /// Hover-enter at an explicit cursor position.
    pub fn on_enter_at(&mut self, position: Point) -> &Popup {
        self.cursor_moved(position);
        self.on_enter()
    }

    /// Hover-leave: drop the popup if there is one. Safe to call when hidden.
    pub fn on_leave(&mut self) {
        self.destroy();
    }

    fn destroy(&mut self) {
        if let Some(old) = self.popup.take() {
            tracing::debug!("tooltip {:?} destroyed", old.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let tooltip = TooltipController::new();
        assert_eq!(tooltip.phase(), TooltipPhase::Hidden);
        assert!(tooltip.popup().is_none());
    }

    #[test]
    fn test_popup_offset_from_cursor() {
        let mut tooltip = TooltipController::new();
        let popup = tooltip.on_enter_at(Point::new(120.0, 45.0));
        assert_eq!(popup.position, Point::new(130.0, 55.0));
    }

    #[test]
    fn test_reenter_replaces_popup() {
        let mut tooltip = TooltipController::new();
        let first = tooltip.on_enter().id;
        let second = tooltip.on_enter().id;
        assert_ne!(first, second);
        assert_eq!(tooltip.popup_count(), 1);
    }

    #[test]
    fn test_default_style_matches_label() {
        let style = TooltipStyle::default();
        assert_eq!(style.text, TOOLTIP_TEXT);
        assert_eq!(style.font_family, "Arial");
        assert_eq!(style.font_size, 9.0);
        assert_eq!(style.border_width, 1.0);
    }
}
