use appdrop_core::Platform;
use iced::Color;
use iced::widget::Svg;

use crate::icon;

/// How a platform is presented in a release row.
#[derive(Clone, Copy)]
pub struct PlatformBadge {
    pub label: &'static str,
    pub icon: fn(f32) -> Svg<'static>,
    pub light: Color,
    pub dark: Color,
}

impl PlatformBadge {
    pub fn tint(&self, is_dark: bool) -> Color {
        if is_dark { self.dark } else { self.light }
    }
}

/// Indexed by [`Platform::index`].
const PLATFORM_BADGES: [PlatformBadge; Platform::ALL.len()] = [
    PlatformBadge {
        label: "Android",
        icon: icon::android,
        light: Color::from_rgb(21.0 / 255.0, 128.0 / 255.0, 61.0 / 255.0),
        dark: Color::from_rgb(74.0 / 255.0, 222.0 / 255.0, 128.0 / 255.0),
    },
    PlatformBadge {
        label: "iOS",
        icon: icon::apple,
        light: Color::from_rgb(31.0 / 255.0, 41.0 / 255.0, 55.0 / 255.0),
        dark: Color::from_rgb(229.0 / 255.0, 231.0 / 255.0, 235.0 / 255.0),
    },
];

pub fn platform_badge(platform: Platform) -> &'static PlatformBadge {
    &PLATFORM_BADGES[platform.index()]
}

#[cfg(test)]
mod tests {
    use appdrop_core::Platform;

    use super::platform_badge;

    #[test]
    fn every_platform_has_a_badge() {
        assert_eq!(platform_badge(Platform::Android).label, "Android");
        assert_eq!(platform_badge(Platform::Ios).label, "iOS");
    }

    #[test]
    fn badge_tint_depends_on_theme_brightness() {
        let badge = platform_badge(Platform::Ios);

        assert!(badge.tint(false).r < 0.5);
        assert!(badge.tint(true).r > 0.5);
    }

    #[test]
    fn platforms_have_distinct_tints() {
        let android = platform_badge(Platform::Android).tint(false);
        let ios = platform_badge(Platform::Ios).tint(false);

        assert!(android != ios);
    }
}
