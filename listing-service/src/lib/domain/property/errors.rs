use thiserror::Error;

/// Error for PropertyId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PropertyIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for property type parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unrecognized property type: {0}")]
pub struct UnknownPropertyType(pub String);

/// Error for listing status parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unrecognized property status: {0}")]
pub struct UnknownPropertyStatus(pub String);

/// Top-level error for all property-related operations
#[derive(Debug, Clone, Error)]
pub enum PropertyError {
    #[error("Invalid property ID: {0}")]
    InvalidPropertyId(#[from] PropertyIdError),

    #[error("Invalid property type: {0}")]
    InvalidType(#[from] UnknownPropertyType),

    #[error("Invalid property status: {0}")]
    InvalidStatus(#[from] UnknownPropertyStatus),

    /// Also returned on ownership mismatches: a listing owned by another
    /// agent is reported as missing, never as forbidden, so non-owners
    /// cannot probe for its existence.
    #[error("Property not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for PropertyError {
    fn from(err: anyhow::Error) -> Self {
        PropertyError::Unknown(err.to_string())
    }
}
