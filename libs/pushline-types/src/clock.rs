use chrono::{DateTime, Utc};

/// Time source for expiration conversion.
///
/// Providers never read process time directly; tests substitute a fixed
/// clock so time-to-live conversion stays deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
