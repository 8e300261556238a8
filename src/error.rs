//! Error taxonomy for the browser engine.
//!
//! Two categories cover everything the crate can fail with: configuration
//! problems caught before any network call, and failures reported by the
//! storage backend. The session controller converts both into notifications
//! at its boundary; nothing is propagated past it.

use thiserror::Error;

/// Errors surfaced by the storage gateway and the session controller.
#[derive(Debug, Error)]
pub enum ExplorerError {
    /// Missing or incomplete credentials, or a malformed credentials file.
    #[error("{0}")]
    Config(String),

    /// A storage backend call failed (network, auth, signing).
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

impl ExplorerError {
    /// Create a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        ExplorerError::Config(message.into())
    }

    /// Check whether this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, ExplorerError::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_classification() {
        let err = ExplorerError::config("missing bucketName");
        assert!(err.is_config());
        assert_eq!(err.to_string(), "missing bucketName");

        let err: ExplorerError = anyhow::anyhow!("connection refused").into();
        assert!(!err.is_config());
    }
}
