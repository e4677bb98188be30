//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic business failures (validation,
/// invariants, missing references). Storage concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An operation referenced an entity that does not exist.
    #[error("unknown {entity} id: {id}")]
    UnknownReference {
        entity: &'static str,
        id: String,
    },

    /// An order line requested more units than the product has in stock.
    ///
    /// Carries the available quantity so the caller can adjust and resubmit.
    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock {
        requested: i64,
        available: i64,
    },

    /// The audit ledger could not record a title change.
    ///
    /// Fatal to the enclosing transaction: a title change without its audit
    /// entry must never become durable.
    #[error("audit write failed: {0}")]
    AuditWrite(String),

    /// A conflict occurred (e.g. duplicate key).
    #[error("conflict: {0}")]
    Conflict(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn unknown(entity: &'static str, id: impl ToString) -> Self {
        Self::UnknownReference {
            entity,
            id: id.to_string(),
        }
    }

    pub fn insufficient_stock(requested: i64, available: i64) -> Self {
        Self::InsufficientStock {
            requested,
            available,
        }
    }

    pub fn audit_write(msg: impl Into<String>) -> Self {
        Self::AuditWrite(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }
}
