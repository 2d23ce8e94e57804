use chrono::{DateTime, Duration, Local};
use std::cell::Cell;

/// Shortest elapsed time a round can report; clocks may read the same
/// instant twice (or step backwards) when input is already buffered.
pub const MIN_ELAPSED_SECS: f64 = 1e-9;

/// Source of wall-clock time for timing typed paragraphs
pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Seconds between `start` and now, never less than `MIN_ELAPSED_SECS`
    fn elapsed_secs(&self, start: DateTime<Local>) -> f64 {
        let secs = (self.now() - start)
            .to_std()
            .map(|d| d.as_secs_f64())
            .unwrap_or(0.0);
        secs.max(MIN_ELAPSED_SECS)
    }
}

/// Production clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Test clock that moves forward a fixed step every time it is read
#[derive(Debug)]
pub struct SteppingClock {
    current: Cell<DateTime<Local>>,
    step: Duration,
}

impl SteppingClock {
    pub fn new(step: Duration) -> Self {
        Self {
            current: Cell::new(Local::now()),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> DateTime<Local> {
        let t = self.current.get();
        self.current.set(t + self.step);
        t
    }
}
