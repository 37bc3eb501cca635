pub mod account;
pub mod builder;
pub mod clock;
pub mod error;
pub mod fixture;
pub mod statement;
pub mod transaction;
pub mod types;

pub use account::Account;
pub use builder::AccountBuilder;
pub use clock::{Clock, FixedClock, Instant, SharedClock, SystemClock};
pub use error::{LedgerError, LedgerResult};
pub use fixture::{clone_base_account, AccountFixture, BaseAccount};
pub use statement::Statement;
pub use transaction::Transaction;
pub use types::{Money, TransactionKind};
