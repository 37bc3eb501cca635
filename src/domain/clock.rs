//! Injectable time source.
//!
//! Accounts never read the wall clock directly; they ask the [`Clock`] they
//! were built with. Tests and fixtures pass a [`FixedClock`] so every
//! transaction timestamp is reproducible.

use chrono::{DateTime, Utc};
use std::fmt;
use std::sync::Arc;

pub type Instant = DateTime<Utc>;

/// A zero-argument capability returning the current instant.
///
/// `now` is evaluated on every call; implementations must not cache.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Clock handle shared between an account and the builders or fixtures
/// that produced it.
pub type SharedClock = Arc<dyn Clock + Send + Sync>;

impl<F> Clock for F
where
    F: Fn() -> Instant,
{
    fn now(&self) -> Instant {
        self()
    }
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Utc::now()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    instant: Instant,
}

impl FixedClock {
    pub fn at(instant: Instant) -> Self {
        FixedClock { instant }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.instant
    }
}

impl fmt::Display for FixedClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fixed@{}", self.instant.to_rfc3339())
    }
}
