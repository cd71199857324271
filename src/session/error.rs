//! Credential store error types.

use std::path::PathBuf;

/// Errors that can occur while persisting credentials.
///
/// Reads never produce these: malformed or unreadable persisted data is
/// treated as an absent session. Only mutations report failures, and the
/// session layer logs and absorbs them.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Failed to find home directory
    #[error("Failed to find home directory")]
    #[allow(dead_code)]
    HomeDirectoryNotFound,

    /// Failed to write the credential store file
    #[error("Failed to write credential store at {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to encode the credential store contents
    #[error("Failed to encode credentials: {0}")]
    Serialization(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        let error = SessionError::HomeDirectoryNotFound;
        assert!(error.to_string().contains("home directory"));

        let error = SessionError::Serialization("bad value".to_string());
        assert!(error.to_string().contains("bad value"));

        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = SessionError::WriteFailed {
            path: PathBuf::from("/tmp/credentials.json"),
            source: io_error,
        };
        assert!(error.to_string().contains("/tmp/credentials.json"));
    }
}
