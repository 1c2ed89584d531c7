//! Catalog loading: the initial load, retries, and the resulting state.
//!
//! Handles messages: `CatalogLoaded`, `ReloadCatalog`

use iced::Task;

use appdrop_core::{Catalog, CatalogSource, load_catalog};

use crate::error::AppError;
use crate::message::Message;
use crate::state::{AppState, MainState};

use super::AppDrop;

impl AppDrop {
    pub(super) fn load_catalog_task(&self) -> Task<Message> {
        let source = self.settings.catalog_source();
        let client = self.http_client.clone();

        Task::perform(
            async move {
                let result = load_catalog(&source, &client)
                    .await
                    .map_err(|e| AppError::catalog_load_failed(&source, e));
                (source, result)
            },
            |(source, result)| Message::CatalogLoaded { source, result },
        )
    }

    pub(super) fn handle_catalog_loaded(
        &mut self,
        source: CatalogSource,
        result: Result<Catalog, AppError>,
    ) {
        match result {
            Ok(catalog) => {
                log::info!("Showing {} releases from {source}", catalog.len());
                self.state = AppState::Main(MainState::new(catalog, source));
            }
            Err(error) => {
                log::error!("{error}");
                self.state = AppState::Failed(error);
            }
        }
    }

    pub(super) fn handle_reload_catalog(&mut self) -> Task<Message> {
        if matches!(self.state, AppState::Loading) {
            return Task::none();
        }
        log::debug!("Reloading catalog");
        self.state = AppState::Loading;
        self.load_catalog_task()
    }
}

#[cfg(test)]
mod tests {
    use appdrop_core::{Catalog, CatalogError, CatalogSource, EMBEDDED_CATALOG};

    use super::super::{test_app, test_app_with_releases};
    use crate::error::AppError;
    use crate::state::AppState;

    #[test]
    fn successful_load_starts_a_collapsed_session() {
        let mut app = test_app();
        let catalog = Catalog::from_json(EMBEDDED_CATALOG).expect("bundled catalog should parse");
        let expected_len = catalog.len();

        app.handle_catalog_loaded(CatalogSource::Embedded, Ok(catalog));

        let AppState::Main(state) = &app.state else {
            panic!("expected main state");
        };
        assert_eq!(state.catalog.len(), expected_len);
        assert_eq!(state.source, CatalogSource::Embedded);
        assert!(state.expanded.is_empty());
    }

    #[test]
    fn failed_load_moves_to_failed_state() {
        let mut app = test_app();
        let source = CatalogSource::Remote("https://example.com/apps.json".to_string());
        let error = AppError::catalog_load_failed(
            &source,
            CatalogError::Status {
                url: "https://example.com/apps.json".to_string(),
                status: 500,
            },
        );

        app.handle_catalog_loaded(source, Err(error.clone()));

        assert!(matches!(app.state, AppState::Failed(ref e) if *e == error));
    }

    #[test]
    fn reload_discards_expansion_state() {
        let mut app = test_app_with_releases(&["a", "b"]);
        if let AppState::Main(state) = &mut app.state {
            state.toggle_release("a");
        }

        let _ = app.handle_reload_catalog();
        assert!(matches!(app.state, AppState::Loading));

        app.handle_catalog_loaded(
            CatalogSource::Embedded,
            Ok(Catalog::from_json(EMBEDDED_CATALOG).expect("bundled catalog should parse")),
        );
        let AppState::Main(state) = &app.state else {
            panic!("expected main state");
        };
        assert!(state.expanded.is_empty());
    }

    #[test]
    fn reload_is_ignored_while_loading() {
        let mut app = test_app();
        assert!(matches!(app.state, AppState::Loading));

        let _ = app.handle_reload_catalog();

        assert!(matches!(app.state, AppState::Loading));
    }
}
