//! Wall-clock seam used to stamp feedback ids and dates.

use std::cell::Cell;

use time::{Date, OffsetDateTime};

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

pub trait Clock {
    /// Milliseconds since the Unix epoch.
    fn now_millis(&self) -> i64;
    /// Today's calendar date in UTC.
    fn today(&self) -> Date;
}

/// The real clock. In the browser this reads `Date.now()` through `time`'s
/// wasm-bindgen support.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_millis(&self) -> i64 {
        (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
    }

    fn today(&self) -> Date {
        OffsetDateTime::now_utc().date()
    }
}

/// A clock frozen at a given instant, advanced manually.
#[derive(Debug, Clone)]
pub struct FixedClock {
    millis: Cell<i64>,
    today: Cell<Date>,
}

impl FixedClock {
    #[must_use]
    pub fn new(millis: i64, today: Date) -> Self {
        Self { millis: Cell::new(millis), today: Cell::new(today) }
    }

    pub fn advance_millis(&self, delta: i64) {
        self.millis.set(self.millis.get() + delta);
    }

    pub fn set_today(&self, today: Date) {
        self.today.set(today);
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.millis.get()
    }

    fn today(&self) -> Date {
        self.today.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }

    fn today(&self) -> Date {
        (**self).today()
    }
}
