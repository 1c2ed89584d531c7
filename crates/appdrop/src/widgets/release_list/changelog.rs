use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::theme::{styles, tokens};
use crate::widgets::helpers::bold;

pub(super) fn changelog_view(changelog: &[String]) -> Element<'_, Message> {
    let mut entries = column![].spacing(6);

    if changelog.is_empty() {
        entries = entries.push(
            text("No changes listed")
                .size(12)
                .color(tokens::TEXT_MUTED),
        );
    }

    for entry in changelog {
        let bullet = container(
            container(Space::new())
                .width(4)
                .height(4)
                .style(styles::changelog_bullet),
        )
        .padding(iced::Padding::new(0.0).top(6.0));

        entries = entries.push(
            row![bullet, text(entry).size(12).width(Length::Fill)].spacing(8),
        );
    }

    let panel = container(column![text("What's New").size(12).font(bold()), entries].spacing(8))
        .padding(16)
        .width(Length::Fill)
        .style(styles::changelog_panel);

    container(panel)
        .padding(
            iced::Padding::new(0.0)
                .right(20.0)
                .bottom(20.0)
                .left(tokens::CHANGELOG_INDENT),
        )
        .into()
}
