use crate::state::AppState;

use super::AppDrop;

impl AppDrop {
    pub(super) fn handle_release_toggled(&mut self, id: &str) {
        if let AppState::Main(state) = &mut self.state {
            let expanded = state.toggle_release(id);
            log::debug!(
                "Release {id} {}",
                if expanded { "expanded" } else { "collapsed" }
            );
        }
    }

    pub(super) fn handle_release_row_hovered(&mut self, id: Option<String>) {
        if let AppState::Main(state) = &mut self.state {
            state.hovered_release = id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{test_app, test_app_with_releases};
    use crate::state::AppState;

    #[test]
    fn toggling_unknown_id_tracks_it_without_expanding_rows() {
        let mut app = test_app_with_releases(&["a", "b"]);

        app.handle_release_toggled("unknown-id");

        let AppState::Main(state) = &app.state else {
            panic!("expected main state");
        };
        assert!(state.expanded.is_expanded("unknown-id"));
        assert!(state.catalog.rows(&state.expanded).all(|row| !row.is_expanded));
    }

    #[test]
    fn toggle_outside_main_state_is_ignored() {
        let mut app = test_app();

        app.handle_release_toggled("a");

        assert!(matches!(app.state, AppState::Loading));
    }

    #[test]
    fn hover_updates_without_touching_expansion() {
        let mut app = test_app_with_releases(&["a", "b"]);

        app.handle_release_row_hovered(Some("a".to_string()));

        let AppState::Main(state) = &app.state else {
            panic!("expected main state");
        };
        assert!(state.is_hovered("a"));
        assert!(state.expanded.is_empty());
    }
}
