use iced::widget::{Space, button, column, container, text};
use iced::{Alignment, Element, Length};

use crate::error::AppError;
use crate::message::Message;
use crate::theme::styles;

pub fn view(error: &AppError) -> Element<'_, Message> {
    container(
        column![
            text("Could not load releases").size(16),
            text(error.to_string())
                .size(13)
                .color(crate::theme::tokens::TEXT_MUTED),
            Space::new().height(16),
            button(text("Retry"))
                .on_press(Message::ReloadCatalog)
                .style(styles::primary_button)
                .padding([8, 16]),
        ]
        .spacing(8)
        .max_width(crate::theme::tokens::CONTENT_MAX_WIDTH)
        .align_x(Alignment::Center),
    )
    .padding(24)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
