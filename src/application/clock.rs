//! Two independently clocked triggers driven by frame time.
//!
//! The host loop feeds elapsed time into `SimulationClock::advance`; each
//! trigger decides on its own whether it fired. Neither is tied to v-sync or
//! to the other.

use std::ops::RangeInclusive;
use std::time::Duration;

/// Accepted step frequencies in Hz
pub const STEP_FREQUENCY_RANGE: RangeInclusive<u32> = 1..=60;
/// Buffer refresh period
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_millis(10);

/// A repeating timer polled with elapsed time.
///
/// Fires at most once per poll and restarts its phase when it fires, so two
/// firings are never closer than one interval.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodicTrigger {
    interval: Duration,
    elapsed: Duration,
}

impl PeriodicTrigger {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            elapsed: Duration::ZERO,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Reprogram and restart, like starting a running timer again
    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.max(Duration::from_millis(1));
        self.elapsed = Duration::ZERO;
    }

    /// Add `dt` and report whether the trigger fired
    pub fn poll(&mut self, dt: Duration) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = Duration::ZERO;
            true
        } else {
            false
        }
    }
}

/// Which triggers fired during one `advance`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClockTicks {
    pub step: bool,
    pub refresh: bool,
}

/// Step trigger (variable, 1-60 Hz) and refresh trigger (fixed short interval)
#[derive(Clone, Copy, Debug)]
pub struct SimulationClock {
    step: PeriodicTrigger,
    refresh: PeriodicTrigger,
    step_frequency_hz: u32,
}

impl SimulationClock {
    pub fn new(step_frequency_hz: u32, refresh_interval: Duration) -> Self {
        let hz = clamp_frequency(step_frequency_hz);
        Self {
            step: PeriodicTrigger::new(step_interval(hz)),
            refresh: PeriodicTrigger::new(refresh_interval),
            step_frequency_hz: hz,
        }
    }

    pub fn step_frequency(&self) -> u32 {
        self.step_frequency_hz
    }

    pub fn step_interval(&self) -> Duration {
        self.step.interval()
    }

    pub fn refresh_interval(&self) -> Duration {
        self.refresh.interval()
    }

    /// Reprogram the step trigger. Out-of-range values are clamped; returns the applied Hz.
    pub fn set_step_frequency(&mut self, hz: u32) -> u32 {
        self.step_frequency_hz = clamp_frequency(hz);
        self.step.set_interval(step_interval(self.step_frequency_hz));
        self.step_frequency_hz
    }

    pub fn advance(&mut self, dt: Duration) -> ClockTicks {
        ClockTicks {
            step: self.step.poll(dt),
            refresh: self.refresh.poll(dt),
        }
    }
}

fn clamp_frequency(hz: u32) -> u32 {
    hz.clamp(*STEP_FREQUENCY_RANGE.start(), *STEP_FREQUENCY_RANGE.end())
}

/// `1000 / hz` milliseconds
fn step_interval(hz: u32) -> Duration {
    Duration::from_millis(1000 / u64::from(hz))
}
