#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod error;
mod icon;
mod logging;
mod message;
mod settings;
mod state;
mod theme;
mod views;
mod widgets;

use iced::{Point, Size};

use app::AppDrop;
use settings::AppSettings;

const DEFAULT_WINDOW_SIZE: Size = Size::new(480.0, 720.0);
const MIN_WINDOW_SIZE: Size = Size::new(360.0, 420.0);

fn main() -> iced::Result {
    let settings = AppSettings::load();
    logging::init(&settings);
    log::info!("Starting appdrop {}", env!("CARGO_PKG_VERSION"));

    let geometry = settings
        .window_geometry
        .as_ref()
        .filter(|geometry| geometry.is_likely_visible());

    let (size, position) = match geometry {
        Some(geometry) => (
            Size::new(geometry.width, geometry.height),
            iced::window::Position::Specific(Point::new(geometry.x, geometry.y)),
        ),
        None => (DEFAULT_WINDOW_SIZE, iced::window::Position::Centered),
    };

    let window = iced::window::Settings {
        size,
        position,
        min_size: Some(MIN_WINDOW_SIZE),
        exit_on_close_request: false,
        ..Default::default()
    };

    iced::application(
        move || AppDrop::new(settings.clone()),
        AppDrop::update,
        AppDrop::view,
    )
    .title(AppDrop::title)
    .theme(AppDrop::theme)
    .subscription(AppDrop::subscription)
    .window(window)
    .run()
}
