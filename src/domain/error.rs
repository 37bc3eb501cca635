//! Ledger error model.

use thiserror::Error;

use crate::domain::types::Money;

/// Result type used across the ledger domain.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Recoverable ledger failures. A failed operation never leaves partial
/// effects behind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Deposit or withdrawal of a zero or negative amount.
    #[error("invalid amount: {amount} (must be greater than zero)")]
    InvalidAmount { amount: Money },

    /// Withdrawal larger than the current balance.
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// An account could not be assembled from the supplied parts.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Statement lookup outside `1..=count`.
    #[error("index {index} out of range (statement has {count} transactions)")]
    IndexOutOfRange { index: usize, count: usize },
}

impl LedgerError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
