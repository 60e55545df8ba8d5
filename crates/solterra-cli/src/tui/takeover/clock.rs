//! Clock abstraction for transition timing
//!
//! Settle windows are plain deadlines compared against a caller-supplied
//! `Instant`, so the choreography itself never reads the wall clock. The
//! trait exists for the app loop, which stamps each event once per
//! iteration; tests fabricate instants directly.

use std::time::Instant;

pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
