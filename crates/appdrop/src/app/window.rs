//! Window geometry persistence and theme preference changes.
//!
//! Handles messages: `WindowEvent`, `ThemeChanged`

use log::info;

use iced::Task;

use crate::message::Message;
use crate::settings::{ThemeSetting, WindowGeometry};

use super::AppDrop;

impl AppDrop {
    pub(super) fn handle_window_event(&mut self, event: iced::window::Event) -> Task<Message> {
        match event {
            iced::window::Event::Moved(position) => {
                self.window_position = Some(position);
                Task::none()
            }
            iced::window::Event::Resized(size) => {
                self.window_size = Some(size);
                Task::none()
            }
            iced::window::Event::CloseRequested => {
                info!("Window close requested, exiting");
                self.save_window_geometry();
                iced::exit()
            }
            _ => Task::none(),
        }
    }

    pub(super) fn save_window_geometry(&mut self) {
        if let Some(geometry) = self.current_geometry() {
            self.settings.window_geometry = Some(geometry);
            self.persist_settings();
        }
    }

    fn current_geometry(&self) -> Option<WindowGeometry> {
        let (size, position) = (self.window_size?, self.window_position?);
        Some(WindowGeometry {
            width: size.width,
            height: size.height,
            x: position.x,
            y: position.y,
        })
    }

    pub(super) fn handle_theme_changed(&mut self, theme: ThemeSetting) {
        if self.settings.theme == theme {
            return;
        }
        info!("Theme changed to {theme:?}");
        self.settings.theme = theme;
        self.persist_settings();
    }
}
