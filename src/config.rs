use chrono::{DateTime, Utc};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::clock::{FixedClock, Instant, SharedClock, SystemClock};
use crate::domain::types::Money;

/// Replay settings taken from the command line.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "bank-ledger",
    version,
    about = "Replay deposits and withdrawals against an account and print its statement"
)]
pub struct Config {
    /// CSV file with `type,amount` rows
    pub input: PathBuf,

    /// Opening balance in major units, e.g. 123.45
    #[arg(long, default_value = "0", allow_hyphen_values = true)]
    pub opening_balance: Money,

    /// Pin every timestamp to this RFC 3339 instant (wall-clock time otherwise)
    #[arg(long = "clock", value_parser = parse_instant)]
    pub fixed_time: Option<Instant>,

    /// First instant included in the statement (RFC 3339)
    #[arg(long, value_parser = parse_instant)]
    pub from: Option<Instant>,

    /// Last instant included in the statement (RFC 3339)
    #[arg(long, value_parser = parse_instant)]
    pub to: Option<Instant>,
}

impl Config {
    pub fn clock(&self) -> SharedClock {
        match self.fixed_time {
            Some(instant) => Arc::new(FixedClock::at(instant)),
            None => Arc::new(SystemClock),
        }
    }

    pub fn statement_range(&self) -> (Instant, Instant) {
        (
            self.from.unwrap_or(DateTime::<Utc>::MIN_UTC),
            self.to.unwrap_or(DateTime::<Utc>::MAX_UTC),
        )
    }
}

fn parse_instant(value: &str) -> Result<Instant, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {}", e))
}
