use std::sync::Arc;

use crate::domain::account::Account;
use crate::domain::clock::{Clock, SharedClock};
use crate::domain::error::{LedgerError, LedgerResult};
use crate::domain::types::Money;

/// Fluent construction of an [`Account`]. A clock is mandatory.
///
/// ```
/// use bank_ledger::domain::{AccountBuilder, FixedClock, Money};
/// use chrono::Utc;
///
/// let account = AccountBuilder::an_account()
///     .with_balance(Money::amount_of(500))
///     .with_clock(FixedClock::at(Utc::now()))
///     .build()
///     .expect("clock was supplied");
/// assert_eq!(account.balance(), Money::amount_of(500));
/// ```
#[derive(Clone, Default)]
pub struct AccountBuilder {
    balance: Money,
    clock: Option<SharedClock>,
}

impl AccountBuilder {
    pub fn an_account() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, balance: Money) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_clock<C>(self, clock: C) -> Self
    where
        C: Clock + Send + Sync + 'static,
    {
        self.with_shared_clock(Arc::new(clock))
    }

    pub fn with_shared_clock(mut self, clock: SharedClock) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn build(self) -> LedgerResult<Account> {
        let clock = self
            .clock
            .ok_or_else(|| LedgerError::configuration("Clock must be provided to build an Account."))?;
        Ok(Account::with_shared_clock(self.balance, clock))
    }
}
