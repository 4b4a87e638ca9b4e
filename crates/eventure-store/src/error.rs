use thiserror::Error;

/// Persistence layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Row not found: {table} id={id}")]
    MissingRow { table: &'static str, id: i64 },

    #[error("Referenced row not found: {table} id={id}")]
    MissingReference { table: &'static str, id: i64 },

    #[error("Write rejected: {0}")]
    Rejected(String),

    #[error("Invalid seed data: {0}")]
    InvalidSeed(String),

    #[error("Seed parse error: {0}")]
    SeedParse(#[from] serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
