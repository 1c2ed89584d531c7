use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

use crate::theme::tokens;

pub fn divider(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(tokens::divider(tokens::is_dark(theme)))),
        ..Default::default()
    }
}

pub fn release_row_hovered(theme: &Theme) -> container::Style {
    let is_dark = tokens::is_dark(theme);

    container::Style {
        background: Some(Background::Color(if is_dark {
            Color::from_rgba8(255, 255, 255, 0.03)
        } else {
            Color::from_rgba8(249, 250, 251, 0.6)
        })),
        ..Default::default()
    }
}

pub fn changelog_panel(theme: &Theme) -> container::Style {
    let is_dark = tokens::is_dark(theme);

    container::Style {
        background: Some(Background::Color(tokens::panel_bg(is_dark))),
        border: Border {
            radius: tokens::RADIUS_MD.into(),
            width: 1.0,
            color: tokens::divider(is_dark),
        },
        shadow: Shadow::default(),
        text_color: None,
        snap: false,
    }
}

pub fn changelog_bullet(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: 0.45,
            ..theme.palette().text
        })),
        border: Border {
            radius: 2.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

pub fn tooltip_container(theme: &Theme) -> container::Style {
    let is_dark = tokens::is_dark(theme);

    container::Style {
        background: Some(Background::Color(if is_dark {
            Color::from_rgb8(55, 65, 81)
        } else {
            Color::from_rgb8(31, 41, 55)
        })),
        text_color: Some(Color::WHITE),
        border: Border {
            radius: tokens::RADIUS_SM.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}
