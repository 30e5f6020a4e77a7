// src/animation/clock.rs
//
// Periodic ticker. The frame loop feeds it elapsed time and it hands back
// how many ticks fell due. Idle -> Running -> Idle.

use log::trace;
use std::time::Duration;

pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(60);

#[derive(Debug, Clone)]
pub struct Clock {
    interval: Duration,
    pending: Duration,
    running: bool,
}

impl Default for Clock {
    fn default() -> Self {
        Self::new(DEFAULT_TICK_INTERVAL)
    }
}

impl Clock {
    pub fn new(interval: Duration) -> Self {
        Self {
            // a zero interval would never drain
            interval: interval.max(Duration::from_millis(1)),
            pending: Duration::ZERO,
            running: false,
        }
    }

    /// Returns true if the clock was idle and is now running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.pending = Duration::ZERO;
        trace!("clock started, interval {:?}", self.interval);
        true
    }

    /// Returns true if the clock was running and is now idle.
    pub fn stop(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.running = false;
        self.pending = Duration::ZERO;
        trace!("clock stopped");
        true
    }

    /// Accumulates elapsed time and returns the number of ticks now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if !self.running {
            return 0;
        }

        let pending = (self.pending + elapsed).as_nanos();
        let interval = self.interval.as_nanos();
        let remainder = pending % interval;
        // remainder < interval, so it always fits back into a Duration
        self.pending = Duration::from_nanos(remainder as u64);
        u32::try_from(pending / interval).unwrap_or(u32::MAX)
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}
