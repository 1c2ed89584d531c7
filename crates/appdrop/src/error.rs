use appdrop_core::CatalogError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppErrorDetail {
    Message(String),
    Io {
        kind: std::io::ErrorKind,
        message: String,
    },
    Catalog(CatalogError),
}

impl std::fmt::Display for AppErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => write!(f, "{message}"),
            Self::Io { kind, message } => write!(f, "{kind}: {message}"),
            Self::Catalog(error) => write!(f, "{error}"),
        }
    }
}

impl From<String> for AppErrorDetail {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<&str> for AppErrorDetail {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

impl From<std::io::Error> for AppErrorDetail {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            kind: error.kind(),
            message: error.to_string(),
        }
    }
}

impl From<CatalogError> for AppErrorDetail {
    fn from(value: CatalogError) -> Self {
        Self::Catalog(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    Message(String),
    CatalogLoadFailed {
        source: String,
        details: AppErrorDetail,
    },
    LinkOpenFailed {
        url: String,
        details: AppErrorDetail,
    },
    SettingsSaveFailed {
        details: AppErrorDetail,
    },
}

impl AppError {
    pub fn catalog_load_failed(
        source: impl std::fmt::Display,
        details: impl Into<AppErrorDetail>,
    ) -> Self {
        Self::CatalogLoadFailed {
            source: source.to_string(),
            details: details.into(),
        }
    }

    pub fn link_open_failed(url: impl Into<String>, details: impl Into<AppErrorDetail>) -> Self {
        Self::LinkOpenFailed {
            url: url.into(),
            details: details.into(),
        }
    }

    pub fn settings_save_failed(details: impl Into<AppErrorDetail>) -> Self {
        Self::SettingsSaveFailed {
            details: details.into(),
        }
    }
}

impl From<String> for AppError {
    fn from(value: String) -> Self {
        Self::Message(value)
    }
}

impl From<&str> for AppError {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Message(message) => write!(f, "{message}"),
            Self::CatalogLoadFailed { source, details } => {
                write!(f, "Failed to load releases from {source}: {details}")
            }
            Self::LinkOpenFailed { url, details } => {
                write!(f, "Could not open {url}: {details}")
            }
            Self::SettingsSaveFailed { details } => {
                write!(f, "Failed to save settings: {details}")
            }
        }
    }
}

impl std::error::Error for AppError {}
