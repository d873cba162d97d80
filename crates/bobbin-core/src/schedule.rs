//! Periodic auto-refresh trigger.
//!
//! The engine never schedules itself. Whoever owns the clock (a CLI loop,
//! an editor tick) asks [`AutoRefresh::is_due`] and calls the engine.

use std::time::{Duration, Instant};

use crate::config::Settings;

/// Tracks when the next automatic run is due.
#[derive(Debug, Clone)]
pub struct AutoRefresh {
    interval: Duration,
    last_refresh: Option<Instant>,
}

impl AutoRefresh {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_refresh: None,
        }
    }

    /// Interval taken from settings, clamped to the supported range.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(Duration::from_secs_f64(settings.effective_interval()))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn last_refresh(&self) -> Option<Instant> {
        self.last_refresh
    }

    /// True before the first run and once a full interval has passed since the last.
    pub fn is_due(&self, now: Instant) -> bool {
        match self.last_refresh {
            None => true,
            Some(last) => now.saturating_duration_since(last) > self.interval,
        }
    }

    /// Record that a run was started at `now`.
    pub fn mark(&mut self, now: Instant) {
        self.last_refresh = Some(now);
    }

    /// If due, record the run and return true.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.mark(now);
            true
        } else {
            false
        }
    }

    /// Time left until the next run; zero when already due.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last_refresh {
            None => Duration::ZERO,
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
        }
    }

    /// Fraction of the interval elapsed, in `[0, 1]`.
    pub fn progress(&self, now: Instant) -> f64 {
        match self.last_refresh {
            None => 1.0,
            Some(_) if self.interval.is_zero() => 1.0,
            Some(last) => {
                let elapsed = now.saturating_duration_since(last).as_secs_f64();
                (elapsed / self.interval.as_secs_f64()).clamp(0.0, 1.0)
            }
        }
    }

    /// Countdown text such as `Auto refresh in 42`.
    pub fn countdown(&self, now: Instant) -> String {
        format!("Auto refresh in {:.0}", self.remaining(now).as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_poll_fires_immediately() {
        let mut schedule = AutoRefresh::new(Duration::from_secs(60));
        let start = Instant::now();

        assert!(schedule.poll(start));
        assert!(!schedule.poll(start + Duration::from_secs(30)));
        assert!(!schedule.poll(start + Duration::from_secs(60)));
        assert!(schedule.poll(start + Duration::from_secs(61)));
    }

    #[test]
    fn remaining_and_progress_track_elapsed_time() {
        let mut schedule = AutoRefresh::new(Duration::from_secs(60));
        let start = Instant::now();
        schedule.mark(start);

        let later = start + Duration::from_secs(15);
        assert_eq!(schedule.remaining(later), Duration::from_secs(45));
        assert!((schedule.progress(later) - 0.25).abs() < 1e-9);
        assert_eq!(schedule.countdown(later), "Auto refresh in 45");

        let overdue = start + Duration::from_secs(120);
        assert_eq!(schedule.remaining(overdue), Duration::ZERO);
        assert_eq!(schedule.progress(overdue), 1.0);
    }

    #[test]
    fn interval_from_settings_is_clamped() {
        let settings = Settings {
            refresh_interval: 1.0,
            ..Settings::default()
        };
        assert_eq!(
            AutoRefresh::from_settings(&settings).interval(),
            Duration::from_secs(5)
        );
    }
}
