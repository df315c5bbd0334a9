use thiserror::Error;

/// Result of every store operation. `Ok` is the `Done` status.
pub type StoreResult<T> = Result<T, StoreError>;

/// Non-success statuses returned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Insert-only path hit an existing key.
    #[error("record already exists")]
    AlreadyExists,

    #[error("record not found")]
    NotFound,

    /// Regressing progress values, or the record changed between read and swap.
    /// The caller is expected to re-read and resubmit.
    #[error("expected state mismatch")]
    ExpectedStateMismatch,

    #[error("unknown error: {0}")]
    Unknown(String),
}

impl StoreError {
    /// Stable status name for the request-handling layer.
    pub fn status(&self) -> &'static str {
        match self {
            StoreError::AlreadyExists => "AlreadyExists",
            StoreError::NotFound => "NotFound",
            StoreError::ExpectedStateMismatch => "ExpectedStateMismatch",
            StoreError::Unknown(_) => "UnknownError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_names() {
        assert_eq!(StoreError::AlreadyExists.status(), "AlreadyExists");
        assert_eq!(StoreError::NotFound.status(), "NotFound");
        assert_eq!(StoreError::ExpectedStateMismatch.status(), "ExpectedStateMismatch");
        assert_eq!(StoreError::Unknown("boom".into()).status(), "UnknownError");
    }

    #[test]
    fn test_unknown_keeps_message() {
        assert_eq!(StoreError::Unknown("boom".into()).to_string(), "unknown error: boom");
    }
}
