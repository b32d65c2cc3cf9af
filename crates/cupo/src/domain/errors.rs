//! Domain Errors
//!
//! Error types for domain operations.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::value_objects::IdType;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    /// A numeric input to the quota evaluation was negative. Never retried,
    /// never clamped.
    #[error("Invalid quota input: {field} must not be negative, got {value}")]
    InvalidQuotaInput { field: &'static str, value: Decimal },

    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    /// More than one record matched a supposedly-unique identifier pair.
    /// Signals a broken invariant in the store, always fatal.
    #[error("Ambiguous lookup: {0}")]
    LookupAmbiguous(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("External service error: {0}")]
    ExternalService(String),
}

impl DomainError {
    pub fn invalid_quota_input(field: &'static str, value: Decimal) -> Self {
        Self::InvalidQuotaInput { field, value }
    }

    pub fn already_exists(id_type: IdType, id_value: &str) -> Self {
        Self::AlreadyExists(format!("client [{}, {}]", id_type, id_value))
    }

    pub fn ambiguous_client(id_type: IdType, id_value: &str) -> Self {
        Self::LookupAmbiguous(format!(
            "more than one client matches [{}, {}]",
            id_type, id_value
        ))
    }
}
