//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Section not registered with the router
    #[error("Section not registered: {0}")]
    #[allow(dead_code)]
    SectionNotRegistered(String),

    /// Notification no longer present
    #[error("Notification no longer present")]
    #[allow(dead_code)]
    NotificationGone,

    /// Generic state error
    #[error("State error: {0}")]
    #[allow(dead_code)]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::SectionNotRegistered("goals".to_string());
        assert!(error.to_string().contains("not registered"));
        assert!(error.to_string().contains("goals"));

        let error = StateError::NotificationGone;
        assert!(error.to_string().contains("no longer present"));

        let error = StateError::Other("Generic error".to_string());
        assert!(error.to_string().contains("Generic error"));
    }
}
