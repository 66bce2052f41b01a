//! Error types for the Siteforge core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Siteforge.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or parsing error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Malformed site document.
    #[error("Document error: {0}")]
    Document(String),

    /// File system I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic configuration crate error.
    #[error("Config crate error: {0}")]
    ConfigCrate(#[from] config::ConfigError),
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new document error.
    pub fn document(message: impl Into<String>) -> Self {
        Self::Document(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("missing field");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("missing field"));
    }

    #[test]
    fn test_document_error() {
        let err = CoreError::document("duplicate section id");
        assert!(err.to_string().contains("Document error"));
        assert!(err.to_string().contains("duplicate section id"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CoreError = io_err.into();
        assert!(err.to_string().contains("IO error"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(err.to_string().contains("JSON parse error"));
    }
}
