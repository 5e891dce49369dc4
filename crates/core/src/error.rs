//! Domain error model.

use thiserror::Error;

/// Result type used across the analytics layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is detected synchronously from the input and configuration
/// alone, so none of them is worth retrying without changing either.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No records were supplied to an operation that needs at least one.
    #[error("dataset is empty")]
    EmptyDataset,

    /// A policy parameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A single input record failed validation.
    #[error("invalid record {sku:?}: {reason}")]
    InvalidRecord { sku: String, reason: String },

    /// A ratio was requested whose denominator is zero for this record.
    #[error("division by zero for {sku:?}: {what}")]
    DivisionByZero { sku: String, what: String },
}

impl DomainError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub fn record(sku: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            sku: sku.into(),
            reason: reason.into(),
        }
    }

    pub fn division_by_zero(sku: impl Into<String>, what: impl Into<String>) -> Self {
        Self::DivisionByZero {
            sku: sku.into(),
            what: what.into(),
        }
    }
}
