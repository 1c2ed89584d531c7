use std::fmt;
use std::path::PathBuf;

use crate::catalog::Catalog;
use crate::error::CatalogError;

/// Catalog bundled into the binary.
pub const EMBEDDED_CATALOG: &str = include_str!("../data/apps.json");

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogSource {
    #[default]
    Embedded,
    File(PathBuf),
    Remote(String),
}

impl CatalogSource {
    /// Interpret a user-supplied location.
    ///
    /// `http://` and `https://` values are fetched remotely, any other
    /// non-blank value is a local path and a blank value selects the bundled
    /// catalog.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            Self::Embedded
        } else if value.starts_with("http://") || value.starts_with("https://") {
            Self::Remote(value.to_string())
        } else {
            Self::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Embedded => f.write_str("bundled catalog"),
            Self::File(path) => write!(f, "{}", path.display()),
            Self::Remote(url) => f.write_str(url),
        }
    }
}

/// Load and parse a catalog. The result is handed over whole; nothing here
/// keeps a reference to it.
///
/// # Errors
/// Returns a [`CatalogError`] when the file cannot be read, the request
/// fails or returns a non-success status, or the body is not a valid
/// catalog.
pub async fn load_catalog(
    source: &CatalogSource,
    client: &reqwest::Client,
) -> Result<Catalog, CatalogError> {
    log::debug!("Loading catalog from {source}");

    let catalog = match source {
        CatalogSource::Embedded => Catalog::from_json(EMBEDDED_CATALOG)?,
        CatalogSource::File(path) => {
            let content = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| CatalogError::read(path, &e))?;
            Catalog::from_json(&content)?
        }
        CatalogSource::Remote(url) => {
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| CatalogError::request_from(url, e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(CatalogError::Status {
                    url: url.clone(),
                    status: status.as_u16(),
                });
            }

            let body = response
                .text()
                .await
                .map_err(|e| CatalogError::request_from(url, e))?;
            Catalog::from_json(&body)?
        }
    };

    log::info!("Loaded {} releases from {source}", catalog.len());
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::{CatalogSource, EMBEDDED_CATALOG};
    use crate::Catalog;

    #[test]
    fn parse_recognises_remote_urls() {
        assert_eq!(
            CatalogSource::parse("https://example.com/apps.json"),
            CatalogSource::Remote("https://example.com/apps.json".to_string())
        );
        assert_eq!(
            CatalogSource::parse(" http://intranet/apps.json "),
            CatalogSource::Remote("http://intranet/apps.json".to_string())
        );
    }

    #[test]
    fn parse_treats_other_values_as_paths() {
        assert_eq!(
            CatalogSource::parse("/srv/builds/apps.json"),
            CatalogSource::File(PathBuf::from("/srv/builds/apps.json"))
        );
    }

    #[test]
    fn parse_blank_selects_embedded() {
        assert_eq!(CatalogSource::parse(""), CatalogSource::Embedded);
        assert_eq!(CatalogSource::parse("   "), CatalogSource::Embedded);
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let catalog = Catalog::from_json(EMBEDDED_CATALOG).expect("bundled catalog should parse");

        assert!(!catalog.is_empty());
    }

    #[test]
    fn display_describes_source() {
        assert_eq!(CatalogSource::Embedded.to_string(), "bundled catalog");
        assert_eq!(
            CatalogSource::Remote("https://example.com/a.json".to_string()).to_string(),
            "https://example.com/a.json"
        );
    }
}
