use thiserror::Error;

/// Error for reference-data id parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReferenceIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Top-level error for reference-data operations
#[derive(Debug, Clone, Error)]
pub enum ReferenceDataError {
    #[error("Invalid id: {0}")]
    InvalidId(#[from] ReferenceIdError),

    #[error("State not found: {0}")]
    StateNotFound(String),

    #[error("City not found: {0}")]
    CityNotFound(String),

    #[error("Address not found: {0}")]
    AddressNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for ReferenceDataError {
    fn from(err: anyhow::Error) -> Self {
        ReferenceDataError::Unknown(err.to_string())
    }
}
