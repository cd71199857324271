//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::config::ConfigError;
pub use crate::session::SessionError;
pub use crate::state::StateError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application. It uses `thiserror` for automatic error derivation
/// and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Credential store errors
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    /// State management errors
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    #[allow(dead_code)]
    Terminal(String),

    /// Logger initialization errors
    #[error("Logger error: {0}")]
    #[allow(dead_code)]
    Logger(String),

    /// Generic error with context
    #[error("{0}")]
    #[allow(dead_code)]
    Other(String),
}

/// Convenience type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let config_error = ConfigError::FilePathNotSet;
        let app_error: AppError = config_error.into();
        assert!(matches!(app_error, AppError::Config(_)));
        assert!(app_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_app_error_from_session_error() {
        let session_error = SessionError::HomeDirectoryNotFound;
        let app_error: AppError = session_error.into();
        assert!(matches!(app_error, AppError::Session(_)));
        assert!(app_error.to_string().contains("Session error"));
    }

    #[test]
    fn test_app_error_from_state_error() {
        let state_error = StateError::Other("test".to_string());
        let app_error: AppError = state_error.into();
        assert!(matches!(app_error, AppError::State(_)));
        assert!(app_error.to_string().contains("State error"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert!(app_error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_app_error_other() {
        let error = AppError::Other("Generic error".to_string());
        assert_eq!(error.to_string(), "Generic error");
    }
}
