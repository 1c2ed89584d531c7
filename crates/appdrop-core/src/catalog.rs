use crate::error::CatalogError;
use crate::expansion::ExpansionTracker;
use crate::release::ReleaseRecord;

/// Ordered, read-only list of releases.
///
/// Order is the source order and is what the list displays top to bottom.
/// Ids are expected to be unique; duplicates are not detected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    releases: Vec<ReleaseRecord>,
}

/// One rendered row: the record plus whether its changelog is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseRow<'a> {
    pub record: &'a ReleaseRecord,
    pub is_expanded: bool,
}

impl Catalog {
    #[must_use]
    pub fn new(releases: Vec<ReleaseRecord>) -> Self {
        Self { releases }
    }

    /// Parse a catalog from a JSON array of release records.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] if the document is not an array of
    /// well-formed records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let releases: Vec<ReleaseRecord> = serde_json::from_str(json)?;
        Ok(Self::new(releases))
    }

    #[must_use]
    pub fn releases(&self) -> &[ReleaseRecord] {
        &self.releases
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ReleaseRecord> {
        self.releases.iter().find(|release| release.id == id)
    }

    pub fn rows<'a>(
        &'a self,
        tracker: &'a ExpansionTracker,
    ) -> impl Iterator<Item = ReleaseRow<'a>> + 'a {
        self.releases.iter().map(move |record| ReleaseRow {
            record,
            is_expanded: tracker.is_expanded(&record.id),
        })
    }
}
