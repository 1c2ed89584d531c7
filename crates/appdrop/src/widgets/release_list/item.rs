use iced::widget::{button, column, container, mouse_area, row, text, tooltip};
use iced::{Alignment, Element, Length, Theme};

use appdrop_core::{ReleaseRecord, ReleaseRow};

use crate::icon;
use crate::message::Message;
use crate::theme::{platform_badge, styles};
use crate::widgets::helpers::{bold, styled_tooltip};

use super::changelog::changelog_view;

pub(super) fn release_item_view(row: ReleaseRow<'_>, is_hovered: bool) -> Element<'_, Message> {
    let record = row.record;
    let toggle = Message::ReleaseToggled(record.id.clone());

    let summary_button = button(release_summary(record))
        .on_press(toggle.clone())
        .style(styles::row_toggle_button)
        .padding(0)
        .width(Length::Fill);

    let chevron = if row.is_expanded {
        icon::chevron_up(20.0)
    } else {
        icon::chevron_down(20.0)
    };
    let chevron_button = styled_tooltip(
        button(chevron.style(styles::muted_icon))
            .on_press(toggle)
            .style(styles::ghost_button)
            .padding(6),
        toggle_label(row.is_expanded),
        tooltip::Position::Left,
    );

    let header = row![
        summary_button,
        download_button(record),
        chevron_button
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .padding(20);

    let mut content = column![header];
    if row.is_expanded {
        content = content.push(changelog_view(&record.changelog));
    }

    let row_style: fn(&Theme) -> container::Style = if is_hovered {
        styles::release_row_hovered
    } else {
        |_| container::Style::default()
    };

    mouse_area(container(content).style(row_style).width(Length::Fill))
        .on_enter(Message::ReleaseRowHovered(Some(record.id.clone())))
        .on_exit(Message::ReleaseRowHovered(None))
        .into()
}

fn release_summary(record: &ReleaseRecord) -> Element<'_, Message> {
    let badge = platform_badge(record.platform);

    let platform_tile = styled_tooltip(
        container((badge.icon)(13.0).style(styles::platform_icon(record.platform)))
            .center_x(20)
            .center_y(20)
            .style(styles::platform_badge_container(record.platform)),
        badge.label,
        tooltip::Position::Top,
    );

    column![
        row![platform_tile, text(&record.name).size(14).font(bold())]
            .spacing(8)
            .align_y(Alignment::Center),
        text(&record.date)
            .size(12)
            .color(crate::theme::tokens::TEXT_MUTED),
    ]
    .spacing(4)
    .width(Length::Fill)
    .into()
}

/// Opens the artifact externally. Kept outside the summary button so a
/// press never reaches the row toggle.
fn download_button(record: &ReleaseRecord) -> Element<'_, Message> {
    button(
        row![
            icon::download(14.0).style(styles::text_icon),
            text("Download").size(12),
        ]
        .spacing(6)
        .align_y(Alignment::Center),
    )
    .on_press(Message::OpenDownload(record.download_url.clone()))
    .style(styles::download_button)
    .padding([6, 12])
    .into()
}

fn toggle_label(is_expanded: bool) -> &'static str {
    if is_expanded {
        "Hide details"
    } else {
        "Show details"
    }
}
