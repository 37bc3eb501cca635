use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::str::FromStr;
use thiserror::Error;

/// Number of decimal places between minor and major currency units.
const MINOR_UNIT_SCALE: u32 = 2;

/// Monetary amount held as an integer count of minor units (e.g. cents).
///
/// Values are immutable; arithmetic produces new values. Equality and
/// ordering compare the minor-unit amount only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid money amount: '{0}'")]
pub struct ParseMoneyError(String);

impl Money {
    pub const ZERO: Money = Money(0);

    /// Money from an integer number of minor units. Any sign is accepted.
    pub const fn amount_of(minor_units: i64) -> Self {
        Money(minor_units)
    }

    pub const fn minor_units(&self) -> i64 {
        self.0
    }

    /// The amount in major units, e.g. `12345` minor units is `123.45`.
    pub fn to_decimal(&self) -> Decimal {
        Decimal::new(self.0, MINOR_UNIT_SCALE)
    }

    /// # Panics
    ///
    /// Panics if the sum does not fit in an `i64`.
    pub fn add(self, other: Money) -> Money {
        match self.0.checked_add(other.0) {
            Some(sum) => Money(sum),
            None => panic!("money overflow: {} + {}", self.0, other.0),
        }
    }

    /// # Panics
    ///
    /// Panics if the difference does not fit in an `i64`.
    pub fn subtract(self, other: Money) -> Money {
        match self.0.checked_sub(other.0) {
            Some(difference) => Money(difference),
            None => panic!("money overflow: {} - {}", self.0, other.0),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl std::ops::Add for Money {
    type Output = Money;
    fn add(self, rhs: Self) -> Self::Output {
        Money::add(self, rhs)
    }
}

impl std::ops::Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Self) -> Self::Output {
        self.subtract(rhs)
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = Money::add(*self, rhs);
    }
}

impl std::ops::SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        *self = self.subtract(rhs);
    }
}

impl std::ops::Neg for Money {
    type Output = Money;
    fn neg(self) -> Self::Output {
        Money::ZERO.subtract(self)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Money::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

/// Parses a major-unit amount such as `"10.50"`. Excess precision is
/// rounded half-to-even to whole minor units.
impl FromStr for Money {
    type Err = ParseMoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ParseMoneyError(trimmed.to_string());

        let major = Decimal::from_str(trimmed).map_err(|_| invalid())?;
        let minor = major
            .round_dp(MINOR_UNIT_SCALE)
            .checked_mul(Decimal::ONE_HUNDRED)
            .and_then(|d| d.to_i64())
            .ok_or_else(invalid)?;
        Ok(Money(minor))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

impl TransactionKind {
    /// Effect of an amount of this kind on a balance.
    pub fn signed(&self, amount: Money) -> Money {
        match self {
            TransactionKind::Deposit => amount,
            TransactionKind::Withdrawal => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("deposit"),
            TransactionKind::Withdrawal => f.write_str("withdrawal"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(TransactionKind::Deposit),
            "withdrawal" | "withdraw" => Ok(TransactionKind::Withdrawal),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_equality_is_by_value() {
        assert_eq!(Money::amount_of(1000), Money::amount_of(1000));
        assert_ne!(Money::amount_of(1000), Money::amount_of(1001));
        assert_eq!(Money::amount_of(0), Money::ZERO);
    }

    #[test]
    fn test_money_ordering() {
        assert!(Money::amount_of(-1) < Money::ZERO);
        assert!(Money::amount_of(250) < Money::amount_of(1000));
        assert_eq!(
            Money::amount_of(7).max(Money::amount_of(3)),
            Money::amount_of(7)
        );
    }

    #[test]
    fn test_add_and_subtract_produce_new_values() {
        let a = Money::amount_of(1000);
        let b = Money::amount_of(250);
        assert_eq!(a.add(b), Money::amount_of(1250));
        assert_eq!(a.subtract(b), Money::amount_of(750));
        assert_eq!(b - a, Money::amount_of(-750));
        assert_eq!(a, Money::amount_of(1000));
    }

    #[test]
    #[should_panic(expected = "money overflow")]
    fn test_add_overflow_panics() {
        let _ = Money::amount_of(i64::MAX).add(Money::amount_of(1));
    }

    #[test]
    #[should_panic(expected = "money overflow")]
    fn test_subtract_overflow_panics() {
        let _ = Money::amount_of(i64::MIN) - Money::amount_of(1);
    }

    #[test]
    fn test_sum_of_amounts() {
        let total: Money = [1000, -250, 500].into_iter().map(Money::amount_of).sum();
        assert_eq!(total, Money::amount_of(1250));
    }

    #[test]
    fn test_display_in_major_units() {
        assert_eq!(Money::amount_of(12345).to_string(), "123.45");
        assert_eq!(Money::amount_of(-80).to_string(), "-0.80");
        assert_eq!(Money::ZERO.to_string(), "0.00");
    }

    #[test]
    fn test_parse_major_units() {
        assert_eq!("10.50".parse::<Money>(), Ok(Money::amount_of(1050)));
        assert_eq!(" 7 ".parse::<Money>(), Ok(Money::amount_of(700)));
        assert_eq!("-1.25".parse::<Money>(), Ok(Money::amount_of(-125)));
    }

    #[test]
    fn test_parse_rounds_excess_precision_half_to_even() {
        assert_eq!("0.125".parse::<Money>(), Ok(Money::amount_of(12)));
        assert_eq!("0.135".parse::<Money>(), Ok(Money::amount_of(14)));
    }

    #[test]
    fn test_parse_rejects_garbage_and_out_of_range() {
        assert!("ten".parse::<Money>().is_err());
        assert!("".parse::<Money>().is_err());
        assert!("100000000000000000000".parse::<Money>().is_err());
    }

    #[test]
    fn test_transaction_kind_parsing() {
        assert_eq!(
            TransactionKind::from_str("deposit"),
            Ok(TransactionKind::Deposit)
        );
        assert_eq!(
            TransactionKind::from_str(" WITHDRAWAL "),
            Ok(TransactionKind::Withdrawal)
        );
        assert_eq!(
            TransactionKind::from_str("Withdraw"),
            Ok(TransactionKind::Withdrawal)
        );
        assert!(TransactionKind::from_str("transfer").is_err());
    }

    #[test]
    fn test_signed_amount() {
        let amount = Money::amount_of(250);
        assert_eq!(TransactionKind::Deposit.signed(amount), amount);
        assert_eq!(
            TransactionKind::Withdrawal.signed(amount),
            Money::amount_of(-250)
        );
    }
}
