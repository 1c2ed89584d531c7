use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;

pub fn view<'a>() -> Element<'a, Message> {
    container(
        column![
            text("Loading releases...").size(16),
            text("Fetching the latest builds")
                .size(13)
                .color(crate::theme::tokens::TEXT_MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
