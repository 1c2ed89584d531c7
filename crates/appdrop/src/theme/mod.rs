mod platform;
pub mod styles;

pub use platform::platform_badge;

use iced::theme::Palette;
use iced::{Theme, color};

pub mod tokens {
    pub const RADIUS_XS: f32 = 4.0;
    pub const RADIUS_SM: f32 = 6.0;
    pub const RADIUS_MD: f32 = 8.0;
    pub const RADIUS_LG: f32 = 12.0;

    pub const CONTENT_MAX_WIDTH: f32 = 448.0;
    pub const CHANGELOG_INDENT: f32 = 52.0;

    pub const TEXT_MUTED: iced::Color =
        iced::Color::from_rgb(107.0 / 255.0, 114.0 / 255.0, 128.0 / 255.0);

    pub fn is_dark(theme: &iced::Theme) -> bool {
        theme.palette().background.r < 0.5
    }

    pub fn divider(is_dark: bool) -> iced::Color {
        if is_dark {
            iced::Color::from_rgba8(255, 255, 255, 0.06)
        } else {
            iced::Color::from_rgb8(243, 244, 246)
        }
    }

    pub fn panel_bg(is_dark: bool) -> iced::Color {
        if is_dark {
            iced::Color::from_rgba8(255, 255, 255, 0.04)
        } else {
            iced::Color::from_rgb8(249, 250, 251)
        }
    }
}

pub fn light_theme() -> Theme {
    Theme::custom(
        "AppDrop Light".to_string(),
        Palette {
            background: color!(0x00ff_ffff),
            text: color!(0x001f_2937),
            primary: color!(0x00ea_580c),
            success: color!(0x0015_803d),
            danger: color!(0x00dc_2626),
            warning: color!(0x00d9_7706),
        },
    )
}

pub fn dark_theme() -> Theme {
    Theme::custom(
        "AppDrop Dark".to_string(),
        Palette {
            background: color!(0x0011_1827),
            text: color!(0x00f3_f4f6),
            primary: color!(0x00fb_923c),
            success: color!(0x004a_de80),
            danger: color!(0x00f8_7171),
            warning: color!(0x00fb_bf24),
        },
    )
}

#[cfg(test)]
mod tests {
    use super::{dark_theme, light_theme, tokens};

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 0.0001,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn tokens_radius_constants_are_ordered() {
        assert!(tokens::RADIUS_XS < tokens::RADIUS_SM);
        assert!(tokens::RADIUS_SM < tokens::RADIUS_MD);
        assert!(tokens::RADIUS_MD < tokens::RADIUS_LG);
    }

    #[test]
    fn light_primary_matches_brand_orange() {
        let primary = light_theme().palette().primary;

        assert_close(primary.r, 234.0 / 255.0);
        assert_close(primary.g, 88.0 / 255.0);
        assert_close(primary.b, 12.0 / 255.0);
    }

    #[test]
    fn is_dark_distinguishes_palettes() {
        assert!(!tokens::is_dark(&light_theme()));
        assert!(tokens::is_dark(&dark_theme()));
    }

    #[test]
    fn panel_background_uses_expected_light_color() {
        let color = tokens::panel_bg(false);

        assert_close(color.r, 249.0 / 255.0);
        assert_close(color.g, 250.0 / 255.0);
        assert_close(color.b, 251.0 / 255.0);
        assert_close(color.a, 1.0);
    }
}
