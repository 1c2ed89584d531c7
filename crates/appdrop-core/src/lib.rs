//! Core model for appdrop.
//!
//! This crate holds everything that does not depend on the UI toolkit:
//! - Release records and the closed platform enumeration.
//! - The ordered, read-only release catalog and its per-row projection.
//! - The expansion tracker that records which rows show their changelog.
//! - Catalog sources (bundled, local file, remote URL) and their loader.

mod catalog;
mod error;
mod expansion;
mod release;
mod source;

/// Ordered release catalog and the `(record, is_expanded)` row projection.
pub use catalog::{Catalog, ReleaseRow};
/// Errors raised while reading or parsing a catalog.
pub use error::CatalogError;
/// Set of currently expanded release ids.
pub use expansion::ExpansionTracker;
/// Release record model.
pub use release::{Platform, ReleaseRecord};
/// Where a catalog comes from and how to load it.
pub use source::{CatalogSource, EMBEDDED_CATALOG, load_catalog};
