use iced::Task;

use crate::error::AppError;
use crate::message::Message;

use super::AppDrop;

type DispatchResult = Result<Task<Message>, Box<Message>>;

impl AppDrop {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let message = match self.dispatch_catalog(message) {
            Ok(task) => return task,
            Err(message) => *message,
        };
        let message = match self.dispatch_releases(message) {
            Ok(task) => return task,
            Err(message) => *message,
        };
        match self.dispatch_system(message) {
            Ok(task) => task,
            Err(message) => {
                log::debug!("Unhandled message: {message:?}");
                Task::none()
            }
        }
    }

    fn dispatch_catalog(&mut self, message: Message) -> DispatchResult {
        match message {
            Message::CatalogLoaded { source, result } => {
                self.handle_catalog_loaded(source, result);
                Ok(Task::none())
            }
            Message::ReloadCatalog => Ok(self.handle_reload_catalog()),
            other => Err(Box::new(other)),
        }
    }

    fn dispatch_releases(&mut self, message: Message) -> DispatchResult {
        match message {
            Message::ReleaseToggled(id) => {
                self.handle_release_toggled(&id);
                Ok(Task::none())
            }
            Message::ReleaseRowHovered(id) => {
                self.handle_release_row_hovered(id);
                Ok(Task::none())
            }
            Message::OpenDownload(url) => Ok(open_url_task(url)),
            Message::LinkOpened(result) => {
                if let Err(error) = result {
                    log::error!("{error}");
                }
                Ok(Task::none())
            }
            other => Err(Box::new(other)),
        }
    }

    fn dispatch_system(&mut self, message: Message) -> DispatchResult {
        match message {
            Message::ThemeChanged(theme) => {
                self.handle_theme_changed(theme);
                Ok(Task::none())
            }
            Message::SystemThemeChanged(mode) => {
                self.system_theme_mode = mode;
                Ok(Task::none())
            }
            Message::WindowEvent(event) => Ok(self.handle_window_event(event)),
            other => Err(Box::new(other)),
        }
    }

    pub(super) fn persist_settings(&self) {
        if let Err(e) = self.settings.save() {
            log::error!("{}", AppError::settings_save_failed(e));
        }
    }
}

pub(super) fn open_url_task(url: String) -> Task<Message> {
    log::info!("Opening download link {url}");
    Task::perform(
        async move { open::that(&url).map_err(|e| AppError::link_open_failed(url, e)) },
        Message::LinkOpened,
    )
}
