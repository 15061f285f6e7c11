// tests/support/mocks/time.rs
use ai_journal::application::ports::time::Clock;
use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use std::sync::Mutex;

static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());

pub fn fixed_now() -> DateTime<Utc> {
    *FIXED_NOW
}

/// Starts at `fixed_now()` and only moves when a test advances it.
#[derive(Debug)]
pub struct TestClock {
    now: Mutex<DateTime<Utc>>,
}

impl Default for TestClock {
    fn default() -> Self {
        Self {
            now: Mutex::new(fixed_now()),
        }
    }
}

impl TestClock {
    pub fn advance(&self, seconds: i64) -> DateTime<Utc> {
        let mut now = self.now.lock().unwrap();
        *now += Duration::seconds(seconds);
        *now
    }
}

impl Clock for TestClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}
