use appdrop_core::Platform;
use iced::widget::{container, svg};
use iced::{Background, Border, Color, Theme};

use crate::theme::{platform_badge, tokens};

pub fn platform_badge_container(platform: Platform) -> impl Fn(&Theme) -> container::Style {
    move |theme| {
        let tint = platform_badge(platform).tint(tokens::is_dark(theme));

        container::Style {
            background: Some(Background::Color(Color { a: 0.12, ..tint })),
            text_color: Some(tint),
            border: Border {
                radius: tokens::RADIUS_XS.into(),
                width: 0.0,
                color: Color::TRANSPARENT,
            },
            ..Default::default()
        }
    }
}

pub fn platform_icon(platform: Platform) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |theme, _status| svg::Style {
        color: Some(platform_badge(platform).tint(tokens::is_dark(theme))),
    }
}

pub fn monogram_tile(theme: &Theme) -> container::Style {
    let palette = theme.palette();

    container::Style {
        background: Some(Background::Color(Color {
            a: 0.1,
            ..palette.primary
        })),
        text_color: Some(palette.primary),
        border: Border {
            radius: tokens::RADIUS_LG.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
        ..Default::default()
    }
}

pub fn muted_icon(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(Color {
            a: 0.5,
            ..theme.palette().text
        }),
    }
}

pub fn text_icon(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(Color {
            a: 0.75,
            ..theme.palette().text
        }),
    }
}
