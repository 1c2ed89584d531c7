use appdrop_core::{Catalog, CatalogSource};

use crate::error::AppError;
use crate::settings::ThemeSetting;

#[derive(Debug, Clone)]
pub enum Message {
    CatalogLoaded {
        source: CatalogSource,
        result: Result<Catalog, AppError>,
    },
    ReloadCatalog,

    ReleaseToggled(String),
    ReleaseRowHovered(Option<String>),
    OpenDownload(String),
    LinkOpened(Result<(), AppError>),

    ThemeChanged(ThemeSetting),
    SystemThemeChanged(iced::theme::Mode),
    WindowEvent(iced::window::Event),
}
