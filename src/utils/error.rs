use thiserror::Error;

/// Failures raised at the document-store seam.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Unique key already taken (e.g. `users.username`)
    #[error("duplicate key")]
    Duplicate,
    #[error("store backend error: {0}")]
    Backend(String),
}

impl From<mongodb::error::Error> for StoreError {
    fn from(err: mongodb::error::Error) -> Self {
        use mongodb::error::{ErrorKind, WriteFailure};

        // 11000 = duplicate key
        if let ErrorKind::Write(WriteFailure::WriteError(ref write_error)) = *err.kind {
            if write_error.code == 11000 {
                return StoreError::Duplicate;
            }
        }
        StoreError::Backend(err.to_string())
    }
}

/// Outcome taxonomy shared by the user, list and search services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("user already exists")]
    AlreadyExists,
    #[error("destination already in list")]
    AlreadyPresent,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("not logged in")]
    NotLoggedIn,
    #[error("backend error: {0}")]
    Backend(String),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => ServiceError::AlreadyExists,
            StoreError::Backend(msg) => ServiceError::Backend(msg),
        }
    }
}
