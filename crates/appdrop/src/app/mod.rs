mod catalog;
mod releases;
mod update;
mod window;

use iced::{Element, Subscription, Task, Theme};

use crate::message::Message;
use crate::settings::{AppSettings, ThemeSetting};
use crate::state::AppState;
use crate::theme::{dark_theme, light_theme};
use crate::views;

const APP_TITLE: &str = "App Downloads";

pub struct AppDrop {
    pub(crate) state: AppState,
    pub(crate) settings: AppSettings,
    pub(crate) http_client: reqwest::Client,
    pub(crate) window_size: Option<iced::Size>,
    pub(crate) window_position: Option<iced::Point>,
    pub(crate) system_theme_mode: iced::theme::Mode,
}

impl AppDrop {
    pub fn new(settings: AppSettings) -> (Self, Task<Message>) {
        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(settings.http_timeout_secs))
            .user_agent(format!("appdrop/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_default();

        let app = Self::with_settings(settings, http_client);

        let load_task = app.load_catalog_task();
        let theme_task = iced::system::theme().map(Message::SystemThemeChanged);

        (app, Task::batch([load_task, theme_task]))
    }

    fn with_settings(settings: AppSettings, http_client: reqwest::Client) -> Self {
        Self {
            state: AppState::Loading,
            settings,
            http_client,
            window_size: None,
            window_position: None,
            system_theme_mode: iced::theme::Mode::None,
        }
    }

    pub fn title(&self) -> String {
        match &self.state {
            AppState::Main(state) if !state.catalog.is_empty() => {
                let count = state.catalog.len();
                let noun = if count == 1 { "release" } else { "releases" };
                format!("{APP_TITLE} ({count} {noun})")
            }
            _ => APP_TITLE.to_string(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.state {
            AppState::Loading => views::loading::view(),
            AppState::Failed(error) => views::error_view::view(error),
            AppState::Main(state) => views::main_view::view(state, self.settings.theme),
        }
    }

    pub fn theme(&self) -> Theme {
        match self.settings.theme {
            ThemeSetting::System => {
                if self.is_system_dark() {
                    dark_theme()
                } else {
                    light_theme()
                }
            }
            ThemeSetting::Light => light_theme(),
            ThemeSetting::Dark => dark_theme(),
        }
    }

    pub fn is_system_dark(&self) -> bool {
        self.system_theme_mode == iced::theme::Mode::Dark
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard = iced::event::listen_with(|event, _status, _id| {
            if let iced::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                key, modifiers, ..
            }) = event
            {
                #[cfg(target_os = "macos")]
                let cmd = modifiers.command();
                #[cfg(not(target_os = "macos"))]
                let cmd = modifiers.control();

                if cmd
                    && let iced::keyboard::Key::Character(c) = &key
                    && c.as_str() == "r"
                {
                    return Some(Message::ReloadCatalog);
                }
            }
            None
        });

        let window_events = iced::event::listen_with(|event, _status, _id| {
            if let iced::Event::Window(window_event) = event {
                Some(Message::WindowEvent(window_event))
            } else {
                None
            }
        });

        let theme_changes = iced::system::theme_changes().map(Message::SystemThemeChanged);

        Subscription::batch([keyboard, window_events, theme_changes])
    }
}

#[cfg(test)]
pub(crate) fn test_app() -> AppDrop {
    AppDrop::with_settings(AppSettings::default(), reqwest::Client::new())
}

#[cfg(test)]
pub(crate) fn test_app_with_releases(ids: &[&str]) -> AppDrop {
    use appdrop_core::{Catalog, CatalogSource, Platform, ReleaseRecord};

    let releases = ids
        .iter()
        .enumerate()
        .map(|(idx, id)| ReleaseRecord {
            id: (*id).to_string(),
            name: format!("App {id}"),
            date: "2025-06-12".to_string(),
            download_url: format!("https://example.com/{id}"),
            platform: Platform::ALL[idx % Platform::ALL.len()],
            changelog: vec!["Initial build".to_string()],
        })
        .collect();

    let mut app = test_app();
    app.state = AppState::Main(crate::state::MainState::new(
        Catalog::new(releases),
        CatalogSource::Embedded,
    ));
    app
}
