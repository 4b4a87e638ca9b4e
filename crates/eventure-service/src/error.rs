use thiserror::Error;

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    StoreError(#[from] eventure_store::StoreError),

    #[error(transparent)]
    CoreError(#[from] eventure_core::error::CoreError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl ServiceError {
    /// Returns `true` for failures caused by the caller's request rather than the backend.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::Forbidden(_))
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
