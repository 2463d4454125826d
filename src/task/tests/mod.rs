//! Unit tests for the task module.


use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::{Mutex, PoisonError};

/// Clock that returns a scripted sequence of instants, advancing by a fixed
/// step on every read.
pub(super) struct SteppingClock {
    next: Mutex<DateTime<Utc>>,
    step: TimeDelta,
}

impl SteppingClock {
    pub(super) fn starting_at(start: DateTime<Utc>, step: TimeDelta) -> Self {
        Self {
            next: Mutex::new(start),
            step,
        }
    }

    /// A clock that never moves.
    pub(super) fn frozen(at: DateTime<Utc>) -> Self {
        Self::starting_at(at, TimeDelta::zero())
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let now = *next;
        *next = now + self.step;
        now
    }
}

/// Midnight UTC on the given calendar day.
pub(super) fn day(year: i32, month: u32, date: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, date, 0, 0, 0)
        .single()
        .expect("valid calendar date")
}
