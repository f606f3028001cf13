//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable: callers report it and carry on. None of them
/// leave stock or cart state partially modified.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No stock entry (or handle) matches the requested name.
    #[error("not found: {0}")]
    NotFound(String),

    /// The requested quantity exceeds what is currently on hand.
    #[error("insufficient stock for {name}: requested {requested}, available {available}")]
    InsufficientStock {
        name: String,
        requested: u32,
        available: u32,
    },

    /// A value failed validation (e.g. a negative price).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A money amount left the representable decimal range.
    #[error("amount out of range: {0}")]
    Overflow(String),
}

impl DomainError {
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn insufficient_stock(name: impl Into<String>, requested: u32, available: u32) -> Self {
        Self::InsufficientStock {
            name: name.into(),
            requested,
            available,
        }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        Self::Overflow(msg.into())
    }

    /// True for the two outcomes a failed add-to-cart can report.
    pub fn is_add_rejection(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InsufficientStock { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insufficient_stock_message_names_both_quantities() {
        let err = DomainError::insufficient_stock("telefone", 9999, 30);
        assert_eq!(
            err.to_string(),
            "insufficient stock for telefone: requested 9999, available 30"
        );
    }

    #[test]
    fn validation_is_not_an_add_rejection() {
        assert!(DomainError::not_found("x").is_add_rejection());
        assert!(DomainError::insufficient_stock("x", 2, 1).is_add_rejection());
        assert!(!DomainError::validation("negative price").is_add_rejection());
        assert!(!DomainError::overflow("cart total").is_add_rejection());
    }
}
