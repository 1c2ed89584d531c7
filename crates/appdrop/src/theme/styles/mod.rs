mod badges;
mod buttons;
mod containers;

pub use badges::*;
pub use buttons::*;
pub use containers::*;

pub(crate) fn lighten(color: iced::Color, amount: f32) -> iced::Color {
    iced::Color {
        r: (color.r + amount).min(1.0),
        g: (color.g + amount).min(1.0),
        b: (color.b + amount).min(1.0),
        a: color.a,
    }
}

pub(crate) fn darken(color: iced::Color, amount: f32) -> iced::Color {
    iced::Color {
        r: (color.r - amount).max(0.0),
        g: (color.g - amount).max(0.0),
        b: (color.b - amount).max(0.0),
        a: color.a,
    }
}

#[cfg(test)]
mod tests {
    use super::{darken, lighten};

    #[test]
    fn lighten_and_darken_clamp_channels() {
        let white = lighten(iced::Color::from_rgb(0.95, 0.5, 0.0), 0.1);
        assert!((white.r - 1.0).abs() < f32::EPSILON);
        assert!((white.g - 0.6).abs() < 0.0001);

        let black = darken(iced::Color::from_rgba(0.05, 0.5, 1.0, 0.3), 0.1);
        assert!(black.r.abs() < f32::EPSILON);
        assert!((black.b - 0.9).abs() < 0.0001);
        assert!((black.a - 0.3).abs() < f32::EPSILON);
    }
}
