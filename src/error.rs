use thiserror::Error;

pub type Result<T> = std::result::Result<T, SalesError>;

#[derive(Error, Debug)]
pub enum SalesError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Duplicate {entity}: {key}")]
    DuplicateKey { entity: &'static str, key: String },
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: u32 },
}

impl SalesError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    pub fn duplicate(entity: &'static str, key: impl Into<String>) -> Self {
        Self::DuplicateKey {
            entity,
            key: key.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: u32) -> Self {
        Self::NotFound { entity, id }
    }
}
