use thiserror::Error;

use crate::validation::ValidationErrors;

#[derive(Debug, Error)]
pub enum BondCalcError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for BondCalcError {
    fn from(e: serde_json::Error) -> Self {
        BondCalcError::SerializationError(e.to_string())
    }
}

/// Fold the field-error map into a single error for callers that want one
/// failure value rather than per-field messages. Field names and messages
/// keep the map's order.
impl From<ValidationErrors> for BondCalcError {
    fn from(errors: ValidationErrors) -> Self {
        let field = errors.0.keys().cloned().collect::<Vec<_>>().join(", ");
        let reason = errors.0.values().cloned().collect::<Vec<_>>().join("; ");
        BondCalcError::InvalidInput { field, reason }
    }
}
