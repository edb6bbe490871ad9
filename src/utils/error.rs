use crate::core::ledger::EntryId;
use crate::core::MAX_INGREDIENTS;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MixError {
    #[error("{field} out of range: {value} (allowed {min}..={max})")]
    Range {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("snapshot validation failed: {reason}")]
    Validation { reason: String },

    #[error("ingredient limit reached ({MAX_INGREDIENTS} max)")]
    IngredientLimit,

    #[error("no ingredient with id {0}")]
    UnknownIngredient(EntryId),

    #[error("volume of ingredient {0} is derived from the container fill")]
    DerivedVolume(EntryId),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl MixError {
    pub fn validation(reason: impl Into<String>) -> Self {
        MixError::Validation {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MixError>;
