use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Could not read {path} ({kind}): {message}")]
    Read {
        path: String,
        kind: std::io::ErrorKind,
        message: String,
    },

    #[error("Request to {url} failed: {details}")]
    Request { url: String, details: String },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Invalid catalog data: {details}")]
    Parse { details: String },
}

impl CatalogError {
    pub fn read(path: &std::path::Path, error: &std::io::Error) -> Self {
        Self::Read {
            path: path.display().to_string(),
            kind: error.kind(),
            message: error.to_string(),
        }
    }

    pub fn request_from<E>(url: &str, error: E) -> Self
    where
        E: std::fmt::Display,
    {
        Self::Request {
            url: url.to_string(),
            details: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse {
            details: error.to_string(),
        }
    }
}
