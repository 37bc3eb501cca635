use proptest::prelude::*;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Duration;

use bank_ledger::domain::fixture::fixed_instant;
use bank_ledger::domain::{
    Account, FixedClock, LedgerError, Money, Statement, Transaction, TransactionKind,
};

fn operation() -> impl Strategy<Value = (TransactionKind, i64)> {
    (
        prop_oneof![Just(TransactionKind::Deposit), Just(TransactionKind::Withdrawal)],
        -1_000i64..100_000i64,
    )
}

fn net_of(account: &Account) -> Money {
    account
        .transactions()
        .iter()
        .map(Transaction::signed_amount)
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    /// Property: balance always equals the seed plus deposits minus
    /// withdrawals, and only successful operations grow the history.
    #[test]
    fn balance_matches_history_after_every_operation(
        seed in 0i64..1_000_000i64,
        ops in prop::collection::vec(operation(), 0..40)
    ) {
        let seed = Money::amount_of(seed);
        let mut account = Account::with_balance(seed, FixedClock::at(fixed_instant()));

        for (kind, amount) in ops {
            let before_balance = account.balance();
            let before_count = account.transactions().len();

            match account.apply(kind, Money::amount_of(amount)) {
                Ok(()) => {
                    prop_assert_eq!(account.transactions().len(), before_count + 1);
                }
                Err(err) => {
                    prop_assert!(
                        matches!(
                            err,
                            LedgerError::InvalidAmount { .. }
                                | LedgerError::InsufficientFunds { .. }
                        ),
                        "unexpected error: {:?}",
                        err
                    );
                    prop_assert_eq!(account.balance(), before_balance);
                    prop_assert_eq!(account.transactions().len(), before_count);
                }
            }

            prop_assert_eq!(account.balance(), seed + net_of(&account));
            prop_assert!(!account.balance().is_negative());
        }
    }

    /// Property: withdrawals larger than the balance are always rejected.
    #[test]
    fn overdraft_is_rejected(balance in 0i64..10_000i64, excess in 1i64..10_000i64) {
        let mut account =
            Account::with_balance(Money::amount_of(balance), FixedClock::at(fixed_instant()));
        let result = account.withdraw(Money::amount_of(balance + excess));

        prop_assert!(
            matches!(result, Err(LedgerError::InsufficientFunds { .. })),
            "expected insufficient funds, got {:?}",
            result
        );
        prop_assert_eq!(account.balance(), Money::amount_of(balance));
        prop_assert!(account.transactions().is_empty());
    }

    /// Property: deposit(x) then withdraw(x) restores the balance and adds
    /// exactly two transactions.
    #[test]
    fn deposit_then_withdraw_round_trips(seed in 0i64..1_000_000i64, x in 1i64..1_000_000i64) {
        let mut account =
            Account::with_balance(Money::amount_of(seed), FixedClock::at(fixed_instant()));
        account.deposit(Money::amount_of(x)).expect("deposit should succeed");
        account.withdraw(Money::amount_of(x)).expect("withdrawal should succeed");

        prop_assert_eq!(account.balance(), Money::amount_of(seed));
        prop_assert_eq!(account.transactions().len(), 2);
    }

    /// Property: under a monotonic clock the history is in timestamp order,
    /// and a full statement lists it unchanged.
    #[test]
    fn history_is_chronological(amounts in prop::collection::vec(1i64..1_000i64, 1..30)) {
        let ticks = AtomicI64::new(0);
        let start = fixed_instant();
        let clock = move || start + Duration::seconds(ticks.fetch_add(1, Ordering::SeqCst));
        let mut account = Account::with_balance(Money::ZERO, clock);

        for amount in &amounts {
            account.deposit(Money::amount_of(*amount)).expect("deposit should succeed");
        }

        let stamps: Vec<_> = account.transactions().iter().map(|tx| tx.timestamp()).collect();
        prop_assert!(stamps.windows(2).all(|w| w[0] <= w[1]));

        let statement = Statement::full(&account);
        prop_assert_eq!(statement.transaction_count(), amounts.len());
        let listed: Vec<_> = statement.iter().copied().collect();
        prop_assert_eq!(listed, account.transactions().to_vec());
    }
}
