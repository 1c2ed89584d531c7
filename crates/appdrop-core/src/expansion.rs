use std::collections::HashSet;

/// Which release rows currently show their changelog.
///
/// Every row starts collapsed. The only mutation is [`toggle`](Self::toggle),
/// which is total over all ids: an id that matches no catalog record is
/// tracked like any other and simply never lines up with a rendered row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionTracker {
    expanded: HashSet<String>,
}

impl ExpansionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip `id` between collapsed and expanded, returning the new state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    #[must_use]
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }
}
