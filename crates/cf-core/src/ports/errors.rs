use thiserror::Error;

use crate::ids::ClipId;

/// Failures of calls across the backend boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    /// Process or transport failure.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),

    /// The id is stale: the backend no longer knows it.
    #[error("clip not found: {0}")]
    NotFound(ClipId),

    #[error("backend call timed out")]
    Timeout,

    /// Malformed payload or event.
    #[error("decode failure: {0}")]
    DecodeFailure(String),

    #[error("clipboard access denied: {0}")]
    ClipboardAccessDenied(String),
}

impl BackendError {
    /// Whether retrying the same call later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            BackendError::BackendUnavailable(_) | BackendError::Timeout
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_transient_errors_survive_context() {
        let err = Err::<(), _>(BackendError::Timeout)
            .context("Failed to load clipboard history")
            .unwrap_err();

        let inner = err.downcast_ref::<BackendError>().unwrap();
        assert!(inner.is_transient());
        assert!(!BackendError::NotFound(ClipId::from_str("x")).is_transient());
        assert!(!BackendError::DecodeFailure("bad".into()).is_transient());
    }
}
