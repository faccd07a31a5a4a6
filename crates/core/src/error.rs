//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// invariants, missing records). Transport concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was absent or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A raw value could not be coerced to its field type.
    #[error("invalid value for {field}: {reason}")]
    TypeCoercion { field: &'static str, reason: String },

    /// Quantity below zero.
    #[error("quantity cannot be negative")]
    NegativeQuantity,

    /// Price at or below zero.
    #[error("price must be positive")]
    NonPositivePrice,

    /// A requested record was not found.
    #[error("not found")]
    NotFound,

    /// The persistence layer failed; the active transaction was rolled back.
    #[error("storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField(field)
    }

    pub fn coercion(field: &'static str, reason: impl Into<String>) -> Self {
        Self::TypeCoercion {
            field,
            reason: reason.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// True for errors caused by client input rather than the system.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_)
                | Self::TypeCoercion { .. }
                | Self::NegativeQuantity
                | Self::NonPositivePrice
        )
    }
}
