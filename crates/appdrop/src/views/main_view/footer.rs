use iced::widget::{column, container, text};
use iced::{Alignment, Element, Length};

use appdrop_core::CatalogSource;

use crate::message::Message;
use crate::theme::tokens;

pub(super) fn footer_view(source: &CatalogSource) -> Element<'_, Message> {
    let mut content = column![text("Internal Distribution").size(10).color(tokens::TEXT_MUTED)]
        .spacing(2)
        .align_x(Alignment::Center);

    // Only non-default sources are worth pointing out.
    if !matches!(source, CatalogSource::Embedded) {
        content = content.push(text(source.to_string()).size(10).color(tokens::TEXT_MUTED));
    }

    container(content).padding(16).center_x(Length::Fill).into()
}
