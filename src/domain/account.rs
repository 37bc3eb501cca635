use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::domain::clock::{Clock, SharedClock};
use crate::domain::error::{LedgerError, LedgerResult};
use crate::domain::transaction::Transaction;
use crate::domain::types::{Money, TransactionKind};

/// A balance plus the append-only history of transactions that moved it.
///
/// The seed balance passed at construction is not recorded as a
/// transaction. Every later change goes through [`Account::deposit`] or
/// [`Account::withdraw`], each stamped by the account's clock. The clock is
/// fixed for the lifetime of the account.
///
/// Cloning yields an independent account: the history is copied and only
/// the (stateless) clock handle is shared.
#[derive(Clone)]
pub struct Account {
    balance: Money,
    transactions: Vec<Transaction>,
    clock: SharedClock,
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("balance", &self.balance)
            .field("transactions", &self.transactions)
            .finish_non_exhaustive()
    }
}

impl Account {
    /// A new account seeded with `initial_balance`. The seed is not
    /// validated; a negative opening balance is accepted as given.
    pub fn with_balance<C>(initial_balance: Money, clock: C) -> Self
    where
        C: Clock + Send + Sync + 'static,
    {
        Self::with_shared_clock(initial_balance, Arc::new(clock))
    }

    pub fn with_shared_clock(initial_balance: Money, clock: SharedClock) -> Self {
        Account {
            balance: initial_balance,
            transactions: Vec::new(),
            clock,
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// History in the order operations were accepted.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn deposit(&mut self, amount: Money) -> LedgerResult<()> {
        ensure_positive(amount)?;

        let balance = self.balance + amount;
        let tx = Transaction::deposit(amount, self.clock.now())?;
        self.record(tx, balance);
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Money) -> LedgerResult<()> {
        ensure_positive(amount)?;

        if amount > self.balance {
            debug!(
                amount = %amount,
                balance = %self.balance,
                "withdrawal rejected: insufficient funds"
            );
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        let balance = self.balance - amount;
        let tx = Transaction::withdrawal(amount, self.clock.now())?;
        self.record(tx, balance);
        Ok(())
    }

    /// Dispatches to [`Account::deposit`] or [`Account::withdraw`].
    pub fn apply(&mut self, kind: TransactionKind, amount: Money) -> LedgerResult<()> {
        match kind {
            TransactionKind::Deposit => self.deposit(amount),
            TransactionKind::Withdrawal => self.withdraw(amount),
        }
    }

    fn record(&mut self, tx: Transaction, balance: Money) {
        debug!(
            kind = %tx.kind(),
            amount = %tx.amount(),
            balance = %balance,
            "transaction recorded"
        );
        self.balance = balance;
        self.transactions.push(tx);
    }
}

fn ensure_positive(amount: Money) -> LedgerResult<()> {
    if amount.is_positive() {
        Ok(())
    } else {
        debug!(amount = %amount, "operation rejected: amount must be positive");
        Err(LedgerError::InvalidAmount { amount })
    }
}
