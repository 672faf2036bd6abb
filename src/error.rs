//! Error handling for the Tea Break Notes reader
//!
//! This module defines custom error types and a Result alias for use
//! throughout the application.

use thiserror::Error;

/// Main error type for reader operations
#[derive(Error, Debug)]
pub enum NotesError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// Errors related to the bundled content set
    #[error("Content error: {0}")]
    Content(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<NotesError>,
    },
}

impl NotesError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        NotesError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for reader operations
pub type Result<T> = std::result::Result<T, NotesError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_wraps_error() {
        let err: Result<()> = Err(NotesError::Config("bad state file".to_string()));
        let wrapped = err.context("loading preferences");
        let msg = wrapped.unwrap_err().to_string();
        assert_eq!(msg, "loading preferences: Configuration error: bad state file");
    }
}
