//! # Trial Timing
//!
//! Per-trial elapsed durations and their reduction to a mean.

use std::time::{Duration, Instant};

/// Clock-resolution floor. Anything shorter is treated as noise.
pub const MIN_TRIAL_DURATION: Duration = Duration::from_micros(1);

/// Elapsed duration of one operation instance, never below one microsecond.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrialTiming(Duration);

impl TrialTiming {
    /// Floor a raw measurement to [`MIN_TRIAL_DURATION`].
    pub fn from_raw(raw: Duration) -> Self {
        Self(raw.max(MIN_TRIAL_DURATION))
    }

    /// Time `op` and return its output with the floored timing.
    pub fn measure<T>(op: impl FnOnce() -> T) -> (T, TrialTiming) {
        let start = Instant::now();
        let output = op();
        (output, Self::from_raw(start.elapsed()))
    }

    /// Floored duration.
    pub fn duration(&self) -> Duration {
        self.0
    }

    /// Keep the longer of two measurements of the same work.
    ///
    /// Equal measurements keep `self`.
    pub fn longer(self, other: TrialTiming) -> TrialTiming {
        if other.0 > self.0 {
            other
        } else {
            self
        }
    }
}

impl From<TrialTiming> for Duration {
    fn from(timing: TrialTiming) -> Self {
        timing.0
    }
}

/// Arithmetic mean of a sequence of durations (nanosecond precision,
/// truncating). An empty sequence yields zero.
pub fn mean_duration<I>(durations: I) -> Duration
where
    I: IntoIterator<Item = Duration>,
{
    let (total, count) = durations
        .into_iter()
        .fold((0u128, 0u128), |(total, count), d| {
            (total + d.as_nanos(), count + 1)
        });

    if count == 0 {
        return Duration::ZERO;
    }

    let mean = total / count;
    Duration::from_nanos(u64::try_from(mean).unwrap_or(u64::MAX))
}

/// Mean of floored trial timings.
pub fn mean_trial(timings: &[TrialTiming]) -> Duration {
    mean_duration(timings.iter().map(TrialTiming::duration))
}

/// Milliseconds as a float, the unit every record reports in.
pub fn duration_to_ms(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1e6
}
