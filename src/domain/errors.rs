//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.

use std::fmt;

#[derive(Debug)]
pub enum DomainError {
    /// Referenced id does not exist
    NotFound,
    /// Caller-supplied data fails a business rule; the caller can correct
    /// and retry
    InvalidInput(String),
    /// Inventory is already at zero. Callers validate availability before
    /// decrementing, so hitting this means the guard was skipped.
    NoStock,
    /// Database/persistence error; any open transaction has been rolled
    /// back, no partial writes are visible
    Storage(String),
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::NotFound => write!(f, "Resource not found"),
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            DomainError::NoStock => write!(f, "No copies available"),
            DomainError::Storage(msg) => write!(f, "Storage error: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}

// Conversion from SeaORM errors (used in the services layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Storage(e.to_string())
    }
}
