use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Validation error on {field}: {message}")]
    Validation { field: &'static str, message: String },
    #[error("Empty catalog: {0} requires at least one item")]
    EmptyCatalog(&'static str),
    #[error("Missing argument: {0}")]
    NullArgument(&'static str),
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(String),
    #[error("JSON error: {0}")]
    Json(String),
}

impl CatalogError {
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation { field, message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

// Helper conversions
impl From<config::ConfigError> for CatalogError {
    fn from(e: config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self { Self::Json(e.to_string()) }
}
impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self { Self::Io(e.to_string()) }
}
