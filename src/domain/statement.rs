use chrono::{DateTime, Utc};

use crate::domain::account::Account;
use crate::domain::clock::Instant;
use crate::domain::error::{LedgerError, LedgerResult};
use crate::domain::transaction::Transaction;
use crate::domain::types::{Money, TransactionKind};

/// Read-only snapshot of an account's transactions within `[from, to]`.
///
/// Holds copies, so the account can keep changing after the statement is
/// taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    from: Instant,
    to: Instant,
    opening_balance: Money,
    transactions: Vec<Transaction>,
}

impl Statement {
    /// Transactions of `account` stamped within `[from, to]` inclusive, in
    /// chronological order.
    pub fn for_account(account: &Account, from: Instant, to: Instant) -> Self {
        Self::from_transactions(account.balance(), account.transactions(), from, to)
    }

    /// Every transaction of `account`.
    pub fn full(account: &Account) -> Self {
        Self::for_account(account, DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC)
    }

    /// Builds a statement from a history that ends at `current_balance`.
    ///
    /// Entries are stably sorted by timestamp first, so equal timestamps keep
    /// their recorded order.
    pub fn from_transactions(
        current_balance: Money,
        history: &[Transaction],
        from: Instant,
        to: Instant,
    ) -> Self {
        let mut sorted = history.to_vec();
        sorted.sort_by_key(Transaction::timestamp);

        let since_from: Money = sorted
            .iter()
            .filter(|tx| tx.timestamp() >= from)
            .map(Transaction::signed_amount)
            .sum();

        let transactions = sorted
            .into_iter()
            .filter(|tx| tx.timestamp() >= from && tx.timestamp() <= to)
            .collect();

        Statement {
            from,
            to,
            opening_balance: current_balance - since_from,
            transactions,
        }
    }

    pub fn from(&self) -> Instant {
        self.from
    }

    pub fn to(&self) -> Instant {
        self.to
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// 1-based lookup.
    pub fn transaction_at(&self, index: usize) -> LedgerResult<&Transaction> {
        index
            .checked_sub(1)
            .and_then(|i| self.transactions.get(i))
            .ok_or(LedgerError::IndexOutOfRange {
                index,
                count: self.transactions.len(),
            })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Balance immediately before `from`.
    pub fn opening_balance(&self) -> Money {
        self.opening_balance
    }

    /// Balance at the end of the statement period.
    pub fn closing_balance(&self) -> Money {
        self.opening_balance + self.net_change()
    }

    /// Sum of every deposit in the period.
    ///
    /// # Panics
    ///
    /// Panics if the sum does not fit in an `i64`. The balance never
    /// overflows, but a history that deposits, withdraws and deposits again
    /// near `i64::MAX` can still overflow this gross total.
    pub fn total_deposits(&self) -> Money {
        self.total_of(TransactionKind::Deposit)
    }

    /// Sum of every withdrawal in the period.
    ///
    /// # Panics
    ///
    /// Panics if the sum does not fit in an `i64`, as with
    /// [`Statement::total_deposits`].
    pub fn total_withdrawals(&self) -> Money {
        self.total_of(TransactionKind::Withdrawal)
    }

    pub fn net_change(&self) -> Money {
        self.iter().map(Transaction::signed_amount).sum()
    }

    fn total_of(&self, kind: TransactionKind) -> Money {
        self.iter()
            .filter(|tx| tx.kind() == kind)
            .map(Transaction::amount)
            .sum()
    }
}

impl<'a> IntoIterator for &'a Statement {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
