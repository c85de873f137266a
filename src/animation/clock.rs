//! Timing collaborator for the tick loop.

use std::time::Duration;

/// Suspends the loop between frames.
pub trait Clock {
    fn sleep(&mut self, duration: Duration);
}

/// Sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Records requested sleeps without waiting. For headless runs.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    pub sleeps: Vec<Duration>,
}

impl ManualClock {
    /// Total time the loop asked to sleep.
    pub fn elapsed(&self) -> Duration {
        self.sleeps.iter().sum()
    }
}

impl Clock for ManualClock {
    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_accumulates() {
        let mut clock = ManualClock::default();
        clock.sleep(Duration::from_micros(100));
        clock.sleep(Duration::from_micros(250));
        assert_eq!(clock.sleeps.len(), 2);
        assert_eq!(clock.elapsed(), Duration::from_micros(350));
    }

    #[test]
    fn system_clock_sleeps_at_least_requested() {
        let start = std::time::Instant::now();
        SystemClock.sleep(Duration::from_millis(5));
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}
