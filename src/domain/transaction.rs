use serde::Serialize;

use crate::domain::clock::Instant;
use crate::domain::error::{LedgerError, LedgerResult};
use crate::domain::types::{Money, TransactionKind};

/// One accepted ledger event. The amount is always strictly positive; the
/// kind carries the direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Transaction {
    kind: TransactionKind,
    amount: Money,
    timestamp: Instant,
}

impl Transaction {
    pub fn new(kind: TransactionKind, amount: Money, timestamp: Instant) -> LedgerResult<Self> {
        if !amount.is_positive() {
            return Err(LedgerError::InvalidAmount { amount });
        }
        Ok(Transaction {
            kind,
            amount,
            timestamp,
        })
    }

    pub fn deposit(amount: Money, timestamp: Instant) -> LedgerResult<Self> {
        Self::new(TransactionKind::Deposit, amount, timestamp)
    }

    pub fn withdrawal(amount: Money, timestamp: Instant) -> LedgerResult<Self> {
        Self::new(TransactionKind::Withdrawal, amount, timestamp)
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn timestamp(&self) -> Instant {
        self.timestamp
    }

    /// Effect of this transaction on the balance.
    pub fn signed_amount(&self) -> Money {
        self.kind.signed(self.amount)
    }
}
