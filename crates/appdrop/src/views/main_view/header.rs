use iced::widget::{Space, button, column, container, row, text, tooltip};
use iced::{Alignment, Element, Length};

use crate::icon;
use crate::message::Message;
use crate::settings::ThemeSetting;
use crate::state::MainState;
use crate::theme::styles;
use crate::widgets::helpers::{bold, styled_tooltip};

pub(super) fn header_view(state: &MainState, theme: ThemeSetting) -> Element<'_, Message> {
    let monogram = container(text("pz").size(14).font(bold()))
        .center_x(40)
        .center_y(40)
        .style(styles::monogram_tile);

    let title = column![
        text("App Downloads").size(16).font(bold()),
        text(release_count_label(state.catalog.len()))
            .size(12)
            .color(crate::theme::tokens::TEXT_MUTED),
    ]
    .spacing(2);

    let theme_button = styled_tooltip(
        button(text(theme_label(theme)).size(12))
            .on_press(Message::ThemeChanged(next_theme(theme)))
            .style(styles::ghost_button)
            .padding([6, 10]),
        "Change theme",
        tooltip::Position::Bottom,
    );

    let refresh_button = styled_tooltip(
        button(icon::refresh(16.0).style(styles::muted_icon))
            .on_press(Message::ReloadCatalog)
            .style(styles::ghost_button)
            .padding(6),
        "Reload releases",
        tooltip::Position::Bottom,
    );

    container(
        row![
            monogram,
            title,
            Space::new().width(Length::Fill),
            theme_button,
            refresh_button,
        ]
        .spacing(16)
        .align_y(Alignment::Center),
    )
    .padding([20, 20])
    .into()
}

fn release_count_label(count: usize) -> String {
    match count {
        0 => "No releases".to_string(),
        1 => "1 release".to_string(),
        n => format!("{n} releases"),
    }
}

fn next_theme(current: ThemeSetting) -> ThemeSetting {
    match current {
        ThemeSetting::System => ThemeSetting::Light,
        ThemeSetting::Light => ThemeSetting::Dark,
        ThemeSetting::Dark => ThemeSetting::System,
    }
}

fn theme_label(current: ThemeSetting) -> &'static str {
    match current {
        ThemeSetting::System => "Auto",
        ThemeSetting::Light => "Light",
        ThemeSetting::Dark => "Dark",
    }
}
