use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme};

use super::{darken, lighten};
use crate::theme::tokens;

#[derive(Clone, Copy)]
struct TintedStyle {
    text: Color,
    bg: Color,
    bg_hovered: Color,
    bg_pressed: Color,
    border: Color,
    radius: f32,
}

fn tinted_button(tint: TintedStyle, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(tint.bg)),
        text_color: tint.text,
        border: Border {
            radius: tint.radius.into(),
            width: if tint.border.a > 0.0 { 1.0 } else { 0.0 },
            color: tint.border,
        },
        shadow: Shadow::default(),
        snap: false,
    };
    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(tint.bg_hovered)),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(tint.bg_pressed)),
            ..base
        },
        button::Status::Disabled => button::Style {
            text_color: Color {
                a: 0.4,
                ..tint.text
            },
            ..base
        },
    }
}

pub fn primary_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();

    let base = button::Style {
        background: Some(Background::Color(palette.primary)),
        text_color: Color::WHITE,
        border: Border {
            radius: tokens::RADIUS_MD.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        shadow: Shadow {
            color: Color {
                a: 0.15,
                ..palette.primary
            },
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        snap: false,
    };

    match status {
        button::Status::Active => base,
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(lighten(palette.primary, 0.05))),
            ..base
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(darken(palette.primary, 0.05))),
            shadow: Shadow::default(),
            ..base
        },
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color {
                a: 0.4,
                ..palette.primary
            })),
            shadow: Shadow::default(),
            ..base
        },
    }
}

/// Bordered pill used for the per-row download action.
pub fn download_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();
    let is_dark = tokens::is_dark(theme);
    tinted_button(
        TintedStyle {
            text: Color {
                a: 0.8,
                ..palette.text
            },
            bg: tokens::panel_bg(is_dark),
            bg_hovered: if is_dark {
                Color::from_rgba8(255, 255, 255, 0.1)
            } else {
                Color::from_rgb8(243, 244, 246)
            },
            bg_pressed: if is_dark {
                Color::from_rgba8(255, 255, 255, 0.15)
            } else {
                Color::from_rgb8(229, 231, 235)
            },
            border: if is_dark {
                Color::from_rgba8(255, 255, 255, 0.12)
            } else {
                Color::from_rgb8(229, 231, 235)
            },
            radius: tokens::RADIUS_SM,
        },
        status,
    )
}

pub fn ghost_button(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.palette();
    tinted_button(
        TintedStyle {
            text: Color {
                a: 0.6,
                ..palette.text
            },
            bg: Color::TRANSPARENT,
            bg_hovered: Color {
                a: 0.05,
                ..palette.text
            },
            bg_pressed: Color {
                a: 0.1,
                ..palette.text
            },
            border: Color::TRANSPARENT,
            radius: tokens::RADIUS_SM,
        },
        status,
    )
}

/// Invisible button wrapping the clickable body of a release row.
pub fn row_toggle_button(theme: &Theme, status: button::Status) -> button::Style {
    let mut style = button::text(theme, status);
    style.text_color = theme.palette().text;
    style
}
