use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Platform API errors surfaced by the HTTP adapter.
///
/// Transport failures (connection, TLS, status codes) come through as
/// [`Error::Http`]; these variants cover responses that arrived but could
/// not be used.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The platform answered with `success: false`.
    #[error("request rejected by platform: {message}")]
    Rejected { message: String },

    /// A successful envelope was missing an expected section.
    #[error("response missing expected field: {field}")]
    MissingData { field: &'static str },

    /// A response field arrived but could not be interpreted.
    #[error("invalid response field {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
