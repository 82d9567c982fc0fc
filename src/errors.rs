//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for bpcomplexity operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error: {message}")]
    FileSystem {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    /// An explicitly requested configuration file does not exist
    #[error("Configuration missing: {}", path.display())]
    ConfigurationMissing { path: PathBuf },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Project snapshot errors
    #[error("Snapshot error in {}: {message}", path.display())]
    Snapshot { path: PathBuf, message: String },

    /// Generic errors with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a file system error with path context
    pub fn file_system(
        message: impl Into<String>,
        path: impl Into<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystem {
            message: message.into(),
            path: Some(path.into()),
            source: Some(source),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn snapshot(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Snapshot {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        Self::WithContext {
            context: context.into(),
            message: self.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_context_prefixes_message() {
        let err = Error::validation("percent_scale must be >= 1").with_context("loading config");
        assert_eq!(
            err.to_string(),
            "loading config: Validation error: percent_scale must be >= 1"
        );
    }

    #[test]
    fn test_configuration_missing_names_path() {
        let err = Error::ConfigurationMissing {
            path: PathBuf::from("/tmp/none.toml"),
        };
        assert!(err.to_string().contains("/tmp/none.toml"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(Error::validation("bad"));
        let err = result.context("outer").unwrap_err();
        assert!(matches!(err, Error::WithContext { .. }));
    }
}
