//! Error types for arshowcase

use thiserror::Error;

use crate::model::ModelId;

/// Main error type for arshowcase operations
///
/// Every variant is recoverable by a later user action. Source-level errors
/// (`UnsupportedFormat`, `InvalidAddress`) are raised before anything reaches
/// the library; viewer-level errors (`LoadFailed`, `ArActivationFailed`) are
/// surfaced as notices and leave the library untouched.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Model load failed ({kind}): {detail}")]
    LoadFailed { kind: String, detail: String },

    #[error("AR activation failed: {0}")]
    ArActivationFailed(String),

    #[error("Model not found: {0}")]
    NotFound(ModelId),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the error was raised while resolving a source, before any load attempt
    pub fn is_source_error(&self) -> bool {
        matches!(self, Error::UnsupportedFormat(_) | Error::InvalidAddress(_))
    }

    /// Whether the error was reported by the external viewer
    pub fn is_viewer_error(&self) -> bool {
        matches!(self, Error::LoadFailed { .. } | Error::ArActivationFailed(_))
    }
}

/// Result type alias for arshowcase operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classification() {
        assert!(Error::UnsupportedFormat("model.txt".into()).is_source_error());
        assert!(Error::InvalidAddress("not a url".into()).is_source_error());
        assert!(!Error::NotFound(ModelId::new(3)).is_source_error());

        let load = Error::LoadFailed { kind: "loadfailed".into(), detail: "bad header".into() };
        assert!(load.is_viewer_error());
        assert!(Error::ArActivationFailed("session".into()).is_viewer_error());
        assert!(!Error::Config("x".into()).is_viewer_error());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::NotFound(ModelId::new(7));
        assert_eq!(err.to_string(), "Model not found: #7");

        let err = Error::LoadFailed { kind: "loadfailed".into(), detail: "truncated".into() };
        assert_eq!(err.to_string(), "Model load failed (loadfailed): truncated");
    }
}
