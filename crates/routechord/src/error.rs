//! Error types for routechord.
//!
//! This module defines all error types used throughout the routechord crate,
//! providing detailed context for debugging and user-friendly error messages.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for routechord operations.
#[derive(Error, Debug)]
pub enum Error {
    // === Dataset Errors ===
    /// Failed to open a dataset file.
    #[error("failed to open dataset at {path}: {source}")]
    DatasetOpen {
        /// Path to the dataset file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a dataset file.
    #[error("failed to parse dataset at {path}: {source}")]
    DatasetParse {
        /// Path to the dataset file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// A required dataset was not supplied.
    #[error("missing dataset '{name}': {message}")]
    DatasetMissing {
        /// Name of the missing dataset.
        name: &'static str,
        /// How to supply it.
        message: String,
    },

    // === Configuration Errors ===
    /// Failed to load configuration.
    #[error("failed to load configuration: {0}")]
    ConfigLoad(Box<figment::Error>),

    /// Configuration validation failed.
    #[error("invalid configuration: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    // === Render Errors ===
    /// Failed to write rendered output.
    #[error("failed to write output to {path}: {source}")]
    OutputWrite {
        /// Path that couldn't be written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The renderer rejected its input.
    #[error("render failed in backend '{backend}': {message}")]
    Render {
        /// Name of the rendering backend.
        backend: &'static str,
        /// Description of what went wrong.
        message: String,
    },

    // === I/O Errors ===
    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // === Serialization Errors ===
    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // === Generic Errors ===
    /// An internal error occurred (bug).
    #[error("internal error: {0}")]
    Internal(String),
}

/// A specialized Result type for routechord operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::ConfigLoad(Box::new(err))
    }
}

impl Error {
    /// Create a new internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Create a missing-dataset error with instructions.
    #[must_use]
    pub fn dataset_missing(name: &'static str, message: impl Into<String>) -> Self {
        Self::DatasetMissing {
            name,
            message: message.into(),
        }
    }

    /// Create a render error for the named backend.
    #[must_use]
    pub fn render(backend: &'static str, message: impl Into<String>) -> Self {
        Self::Render {
            backend,
            message: message.into(),
        }
    }

    /// Check if this error is a configuration problem.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigLoad(_) | Self::ConfigValidation { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::internal("test error");
        assert_eq!(err.to_string(), "internal error: test error");
    }

    #[test]
    fn test_dataset_missing_display() {
        let err = Error::dataset_missing("routes", "pass --routes or --sample");
        let msg = err.to_string();
        assert!(msg.contains("routes"));
        assert!(msg.contains("--sample"));
    }

    #[test]
    fn test_render_error_display() {
        let err = Error::render("svg", "graph has no nodes");
        let msg = err.to_string();
        assert!(msg.contains("svg"));
        assert!(msg.contains("no nodes"));
    }

    #[test]
    fn test_is_config_error() {
        let err = Error::ConfigValidation {
            message: "top_n must be greater than 0".to_string(),
        };
        assert!(err.is_config_error());
        assert!(!Error::internal("test").is_config_error());
    }

    #[test]
    fn test_config_validation_display() {
        let err = Error::ConfigValidation {
            message: "invalid size".to_string(),
        };
        assert!(err.to_string().contains("invalid size"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_from_json_error() {
        let json_result: std::result::Result<i32, serde_json::Error> =
            serde_json::from_str("not valid json");
        if let Err(json_err) = json_result {
            let err: Error = json_err.into();
            assert!(matches!(err, Error::Json(_)));
        }
    }

    #[test]
    fn test_dataset_open_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = Error::DatasetOpen {
            path: PathBuf::from("/data/routes.json"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/data/routes.json"));
    }

    #[test]
    fn test_output_write_display() {
        let io_err = std::io::Error::other("disk full");
        let err = Error::OutputWrite {
            path: PathBuf::from("/out/chord.svg"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/out/chord.svg"));
    }

    #[test]
    fn test_dataset_parse_display() {
        let json_err = serde_json::from_str::<i32>("oops").unwrap_err();
        let err = Error::DatasetParse {
            path: PathBuf::from("/data/airports.json"),
            source: json_err,
        };
        assert!(err.to_string().contains("/data/airports.json"));
    }
}
