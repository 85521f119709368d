use chrono::{DateTime, Utc};

/// Time source for issuance and expiry checks.
///
/// Production code uses [`SystemClock`]; tests inject a controllable clock
/// through `TokenService::with_clock` to exercise expiry boundaries.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
