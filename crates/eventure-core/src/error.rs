use thiserror::Error;

/// Errors raised while loading or validating shared settings
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
