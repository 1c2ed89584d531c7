mod changelog;
mod item;

use iced::widget::{column, container, scrollable, text};
use iced::{Alignment, Element, Length};

use crate::message::Message;
use crate::state::MainState;
use crate::widgets::helpers::divider;

/// The release rows in catalog order, each bound to the session's tracker.
pub fn view(state: &MainState) -> Element<'_, Message> {
    let catalog = &state.catalog;
    if catalog.is_empty() {
        return empty_view();
    }

    let mut rows: Vec<Element<Message>> = Vec::with_capacity(catalog.len() * 2);
    for (idx, row) in catalog.rows(&state.expanded).enumerate() {
        if idx > 0 {
            rows.push(divider());
        }
        let is_hovered = state.is_hovered(&row.record.id);
        rows.push(item::release_item_view(row, is_hovered));
    }

    scrollable(column(rows))
        .height(Length::Fill)
        .width(Length::Fill)
        .into()
}

fn empty_view<'a>() -> Element<'a, Message> {
    container(
        column![
            text("No releases available").size(16),
            text("New builds will show up here once they are published.")
                .size(13)
                .color(crate::theme::tokens::TEXT_MUTED),
        ]
        .spacing(8)
        .align_x(Alignment::Center),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .height(Length::Fill)
    .into()
}
