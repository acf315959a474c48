use chrono::{DateTime, Local, Timelike};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Failure to read the system time source.
///
/// Fatal for the renderer: hand positions are undefined without a time
/// base, so callers propagate this instead of retrying.
#[derive(Debug, Error)]
pub enum ClockError {
    #[error("system real-time clock unavailable: {0}")]
    Unavailable(String),
}

/// One wall-clock reading, local time, split into dial components.
///
/// `hours` is reduced to the 12-hour dial, so noon and midnight are both
/// hour 0. `millis` carries the sub-second fraction for smooth sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockSample {
    /// Hour on the dial, 0..12.
    pub hours: u32,
    /// Minute, 0..60.
    pub minutes: u32,
    /// Second, 0..60.
    pub seconds: u32,
    /// Milliseconds into the current second, 0..1000.
    pub millis: u32,
}

impl ClockSample {
    /// Reads the system clock once.
    ///
    /// A clock reading before the Unix epoch (the only failure the OS time
    /// source surfaces through std) maps to [`ClockError::Unavailable`].
    pub fn now() -> Result<Self, ClockError> {
        let now = SystemTime::now();
        now.duration_since(UNIX_EPOCH)
            .map_err(|e| ClockError::Unavailable(e.to_string()))?;

        let local: DateTime<Local> = now.into();
        Ok(Self {
            hours: local.hour() % 12,
            minutes: local.minute(),
            seconds: local.second() % 60, // chrono reports 60 during a leap second
            millis: local.timestamp_subsec_millis().min(999),
        })
    }

    /// Fraction of the current second, in [0, 1).
    pub fn subsecond(&self) -> f64 {
        f64::from(self.millis) / 1000.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_yields_in_range_components() {
        let s = ClockSample::now().expect("system clock readable");
        assert!(s.hours < 12);
        assert!(s.minutes < 60);
        assert!(s.seconds < 60);
        assert!(s.millis < 1000);
    }

    #[test]
    fn subsecond_is_a_proper_fraction() {
        let s = ClockSample {
            hours: 0,
            minutes: 0,
            seconds: 0,
            millis: 999,
        };
        assert!(s.subsecond() < 1.0);
        assert_eq!(s.subsecond(), 0.999);
    }
}
