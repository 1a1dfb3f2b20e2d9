use std::io;

use thiserror::Error;

/// Library-wide error type for sauce-agent operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Required sauce feature parameter is not set.
    #[error("Required sauce parameter '{0}' is not set")]
    MissingParameter(&'static str),

    /// Sauce Connect port value is present but not a valid port number.
    #[error("Invalid Sauce Connect port '{value}': {details}")]
    InvalidPort { value: String, details: String },

    /// Tunnel manager failed to open or close a connection.
    #[error("Sauce Connect error: {0}")]
    Tunnel(String),

    /// Browser catalog request or decode failure.
    #[error("Browser catalog request failed: {message}")]
    Catalog { message: String, status: Option<u16> },

    /// Embedded asset failed to load.
    #[error("Asset error: {0}")]
    Asset(String),

    /// Preview configuration file has an invalid shape.
    #[error("Malformed preview config: {0}")]
    PreviewConfig(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
