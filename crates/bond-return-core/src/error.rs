use thiserror::Error;

#[derive(Debug, Error)]
pub enum BondReturnError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BondReturnError {
    fn from(e: serde_json::Error) -> Self {
        BondReturnError::SerializationError(e.to_string())
    }
}
