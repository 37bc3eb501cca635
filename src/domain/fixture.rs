//! Deterministic accounts for tests and worked examples.
//!
//! Everything here is built fresh on each call from constant inputs; there
//! is no shared base account to contaminate between callers.

use std::sync::Arc;

use chrono::{TimeZone, Utc};

use crate::domain::account::Account;
use crate::domain::clock::{FixedClock, Instant, SharedClock};
use crate::domain::error::LedgerResult;
use crate::domain::types::{Money, TransactionKind};

/// Opening balance of the canonical base account, in minor units.
pub const BASE_BALANCE: Money = Money::amount_of(12345);

/// Instant every fixture transaction is stamped with: 2019-02-03T10:15:30Z.
pub fn fixed_instant() -> Instant {
    Utc.with_ymd_and_hms(2019, 2, 3, 10, 15, 30)
        .single()
        .expect("valid timestamp")
}

/// Operations applied on top of the base account by [`AccountFixture::new`].
pub const CANONICAL_SCRIPT: [(TransactionKind, Money); 3] = [
    (TransactionKind::Deposit, Money::amount_of(1000)),
    (TransactionKind::Withdrawal, Money::amount_of(250)),
    (TransactionKind::Deposit, Money::amount_of(500)),
];

/// Definition of a base account: an opening balance and a clock. Every
/// [`BaseAccount::instantiate`] call yields a new, independent account.
#[derive(Clone)]
pub struct BaseAccount {
    balance: Money,
    clock: SharedClock,
}

impl BaseAccount {
    pub fn new(balance: Money, clock: SharedClock) -> Self {
        BaseAccount { balance, clock }
    }

    /// 12345 minor units under a clock fixed at [`fixed_instant`].
    pub fn canonical() -> Self {
        Self::new(BASE_BALANCE, Arc::new(FixedClock::at(fixed_instant())))
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn instantiate(&self) -> Account {
        Account::with_shared_clock(self.balance, Arc::clone(&self.clock))
    }

    /// A fresh account with `script` applied in order.
    pub fn scripted(&self, script: &[(TransactionKind, Money)]) -> LedgerResult<Account> {
        let mut account = self.instantiate();
        for &(kind, amount) in script {
            account.apply(kind, amount)?;
        }
        Ok(account)
    }
}

/// Fresh copy of the canonical base account, with no transactions.
pub fn clone_base_account() -> Account {
    BaseAccount::canonical().instantiate()
}

/// The canonical account after [`CANONICAL_SCRIPT`]: balance 13595 with a
/// deposit, a withdrawal and a deposit on record.
///
/// `Clone` produces a separate account with equal contents; changes to one
/// copy are never visible through the other.
#[derive(Debug, Clone)]
pub struct AccountFixture {
    account: Account,
}

impl AccountFixture {
    pub fn new() -> Self {
        let mut account = clone_base_account();
        for (kind, amount) in CANONICAL_SCRIPT {
            // The script only withdraws less than it has deposited.
            if let Err(err) = account.apply(kind, amount) {
                unreachable!("canonical fixture script rejected: {err}");
            }
        }
        AccountFixture { account }
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    pub fn into_account(self) -> Account {
        self.account
    }
}

impl Default for AccountFixture {
    fn default() -> Self {
        Self::new()
    }
}
