use iced::widget::{container, text, tooltip};
use iced::{Element, Length};

use crate::message::Message;
use crate::theme::styles;

pub fn styled_tooltip<'a>(
    content: impl Into<Element<'a, Message>>,
    label: &'a str,
    position: tooltip::Position,
) -> Element<'a, Message> {
    tooltip(
        content,
        container(text(label).size(12))
            .padding([4, 8])
            .style(styles::tooltip_container),
        position,
    )
    .gap(4.0)
    .into()
}

pub fn divider<'a>() -> Element<'a, Message> {
    container(iced::widget::Space::new())
        .width(Length::Fill)
        .height(1)
        .style(styles::divider)
        .into()
}

pub fn bold() -> iced::Font {
    iced::Font {
        weight: iced::font::Weight::Semibold,
        ..iced::Font::DEFAULT
    }
}
