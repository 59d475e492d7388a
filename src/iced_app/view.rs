//! App::view() plus UI building helpers.

use iced::widget::{button, container, image, mouse_area, stack, text, Space};
use iced::{Element, Font, Length, Padding};

use crate::button::ButtonFace;
use crate::tooltip::Popup;

use super::app::App;
use super::styles::{image_button_style, palette, text_button_style, tooltip_style};
use super::Message;

impl App {
    /// Build the button, wrapped for hover tracking when it shows an image.
    fn build_button(&self) -> Element<'_, Message> {
        match self.button.face() {
            ButtonFace::Image { handle, width, height } => {
                let face = image(handle.clone())
                    .width(Length::Fixed(*width as f32))
                    .height(Length::Fixed(*height as f32));
                let btn = button(face)
                    .on_press(Message::ButtonClicked)
                    .padding(0)
                    .style(image_button_style);
                mouse_area(btn)
                    .on_enter(Message::ButtonEntered)
                    .on_exit(Message::ButtonLeft)
                    .into()
            }
            ButtonFace::Text(label) => button(text(label.as_str()))
                .on_press(Message::ButtonClicked)
                .padding([4, 8])
                .style(text_button_style)
                .into(),
        }
    }

    /// Build the floating tooltip layer, positioned at the popup origin.
    fn build_tooltip_layer<'a>(&self, popup: &'a Popup) -> Element<'a, Message> {
        let style = popup.style;
        let label = container(
            text(style.text)
                .size(style.font_size)
                .font(Font::with_name(style.font_family)),
        )
        .padding(style.padding)
        .style(move |_| tooltip_style(&style));

        container(label)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding {
                top: popup.position.y,
                left: popup.position.x,
                right: 0.0,
                bottom: 0.0,
            })
            .into()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let body = container(self.build_button())
            .center_x(Length::Fill)
            .padding([self.config.button_padding, 0.0]);

        // Keep the layer count fixed so the button's hover state survives
        // the popup appearing.
        let layer: Element<'_, Message> = match self.tooltip.popup() {
            Some(popup) => self.build_tooltip_layer(popup),
            None => Space::new().width(Length::Fill).height(Length::Fill).into(),
        };
        let content = stack![body, layer]
            .width(Length::Fill)
            .height(Length::Fill);

        // Root-level area reports cursor moves in window coordinates.
        let root = mouse_area(
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .style(|_| container::Style {
                    background: Some(iced::Background::Color(palette::BG_WINDOW)),
                    ..Default::default()
                }),
        )
        .on_move(Message::CursorMoved);

        root.into()
    }
}
