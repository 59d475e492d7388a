//! UI style functions for iced widgets.

use iced::widget::{button, container};
use iced::{Border, Color, Theme};

use crate::tooltip::TooltipStyle;

pub mod palette {
    use iced::Color;

    pub const BG_WINDOW: Color = Color::from_rgb(0.94, 0.94, 0.94);
    pub const BG_BUTTON: Color = Color::from_rgb(0.88, 0.88, 0.88);
    pub const BG_BUTTON_HOVER: Color = Color::from_rgb(0.92, 0.92, 0.92);
    pub const BG_BUTTON_PRESSED: Color = Color::from_rgb(0.80, 0.80, 0.80);
    pub const BORDER: Color = Color::from_rgb(0.55, 0.55, 0.55);
    pub const TEXT_PRIMARY: Color = Color::BLACK;
    pub const TEXT_MUTED: Color = Color::from_rgb(0.45, 0.45, 0.45);
}

/// Image-backed button: no border, no background, no focus ring.
pub fn image_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Pressed => Some(iced::Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.1))),
        _ => None,
    };

    button::Style {
        background,
        text_color: palette::TEXT_PRIMARY,
        border: Border::default(),
        ..Default::default()
    }
}

/// Plain raised button used when the image could not be loaded.
pub fn text_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, text_color) = match status {
        button::Status::Active => (palette::BG_BUTTON, palette::TEXT_PRIMARY),
        button::Status::Hovered => (palette::BG_BUTTON_HOVER, palette::TEXT_PRIMARY),
        button::Status::Pressed => (palette::BG_BUTTON_PRESSED, palette::TEXT_PRIMARY),
        button::Status::Disabled => (palette::BG_BUTTON, palette::TEXT_MUTED),
    };

    button::Style {
        background: Some(iced::Background::Color(bg)),
        text_color,
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: 2.0.into(),
        },
        ..Default::default()
    }
}

/// Solid-bordered label box for the hover tooltip.
pub fn tooltip_style(style: &TooltipStyle) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(style.background)),
        text_color: Some(palette::TEXT_PRIMARY),
        border: Border {
            color: style.border_color,
            width: style.border_width,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tooltip_style_uses_label_colors() {
        let style = TooltipStyle::default();
        let applied = tooltip_style(&style);
        assert_eq!(applied.border.width, 1.0);
        assert_eq!(applied.border.color, Color::BLACK);
        assert_eq!(applied.background, Some(iced::Background::Color(style.background)));
    }
}
