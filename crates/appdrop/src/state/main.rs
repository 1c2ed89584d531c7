use appdrop_core::{Catalog, CatalogSource, ExpansionTracker};

/// State of one browsing session over a loaded catalog.
///
/// Views receive it by reference; `expanded` is only mutated through
/// [`MainState::toggle_release`].
#[derive(Debug)]
pub struct MainState {
    pub catalog: Catalog,
    pub source: CatalogSource,
    pub expanded: ExpansionTracker,
    pub hovered_release: Option<String>,
}

impl MainState {
    pub fn new(catalog: Catalog, source: CatalogSource) -> Self {
        Self {
            catalog,
            source,
            expanded: ExpansionTracker::new(),
            hovered_release: None,
        }
    }

    pub fn toggle_release(&mut self, id: &str) -> bool {
        self.expanded.toggle(id)
    }

    pub fn is_hovered(&self, id: &str) -> bool {
        self.hovered_release.as_deref() == Some(id)
    }
}
