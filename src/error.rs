//! Error types for pagekit
//!
//! This module defines the error hierarchy for the entire crate.
//! The pure derivation functions never fail; errors come from configuration
//! loading, data sources, and the CLI.

use thiserror::Error;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Data Source Errors
    // ============================================================================
    #[error("Data source failed: {message}")]
    DataSource { message: String },

    #[error("List '{list}' not found in configuration")]
    ListNotFound { list: String },

    // ============================================================================
    // Location Errors
    // ============================================================================
    #[error("Invalid filter '{input}': expected key=value")]
    InvalidFilter { input: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a data source error
    pub fn data_source(message: impl Into<String>) -> Self {
        Self::DataSource {
            message: message.into(),
        }
    }

    /// Create a list-not-found error
    pub fn list_not_found(list: impl Into<String>) -> Self {
        Self::ListNotFound { list: list.into() }
    }

    /// Check if this error is retryable
    ///
    /// Data source failures are treated as transient: the controller keeps the
    /// last good page and the UI is expected to offer a retry.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::DataSource { .. })
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_field("default_page_size");
        assert_eq!(
            err.to_string(),
            "Missing required config field: default_page_size"
        );

        let err = Error::data_source("connection reset");
        assert_eq!(err.to_string(), "Data source failed: connection reset");

        let err = Error::list_not_found("sold");
        assert_eq!(err.to_string(), "List 'sold' not found in configuration");
    }

    #[test]
    fn test_is_retryable() {
        assert!(Error::data_source("timeout").is_retryable());

        assert!(!Error::config("bad").is_retryable());
        assert!(!Error::invalid_value("mode", "unknown").is_retryable());
        assert!(!Error::Other("x".to_string()).is_retryable());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }

    #[test]
    fn test_result_with_context_from_io() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = result
            .with_context(|| "reading items.json".to_string())
            .unwrap_err();
        assert!(err.to_string().starts_with("reading items.json: IO error"));
    }
}
