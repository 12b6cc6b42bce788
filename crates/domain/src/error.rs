//! Unified error type for the domain layer
//!
//! Every validation and derivation in this crate fails with [`DomainError`],
//! so adapters never have to fall back to `String` or `anyhow`.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A die size or roll count was rejected (non-numeric, zero, negative,
    /// too small, or too large)
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Statistics were requested for a sequence with no rolls
    #[error("Cannot compute statistics for an empty roll sequence")]
    EmptySequence,
}

impl DomainError {
    /// Creates an invalid configuration error.
    ///
    /// Use this when user-supplied parameters break a value object invariant:
    /// - Die sizes below 2 or that are not integers
    /// - Roll counts below 1 or above the configured ceiling
    ///
    /// # Example
    /// ```ignore
    /// if sides < 2 {
    ///     return Err(DomainError::invalid_configuration("Die must have at least 2 sides"));
    /// }
    /// ```
    pub fn invalid_configuration(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    /// Returns true for errors caused by user input rather than misuse.
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(self, Self::InvalidConfiguration(_))
    }
}
