//! Clock abstraction so draft timestamps are reproducible in tests.

use chrono::{DateTime, Utc};

/// Source of the `rolled_at` timestamp stamped on every draft.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time, used by the running service.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
