//! Fixed-cadence tick pacing
//!
//! Hosts call `poll` with a monotonic timestamp in milliseconds (the
//! `requestAnimationFrame` time on the web, `Instant` elapsed natively). At
//! most one tick is due per poll; time beyond one interval is dropped rather
//! than replayed, so a stalled host never fast-forwards the maze.

/// Paces simulation ticks
#[derive(Debug, Clone)]
pub struct TickClock {
    interval_ms: f64,
    last: Option<f64>,
    /// Intervals dropped because the host fell behind
    skipped: u64,
}

impl TickClock {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1) as f64,
            last: None,
            skipped: 0,
        }
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Whether a tick is due at `now_ms`
    ///
    /// The first poll only anchors the clock.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        let Some(last) = self.last else {
            self.last = Some(now_ms);
            return false;
        };
        let elapsed = now_ms - last;
        if elapsed < self.interval_ms {
            return false;
        }
        let behind = (elapsed / self.interval_ms).floor() as u64;
        if behind > 1 {
            self.skipped += behind - 1;
        }
        self.last = Some(now_ms);
        true
    }

    /// Forget the anchor, e.g. after a pause, so resuming starts a fresh interval
    pub fn reset(&mut self) {
        self.last = None;
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_poll_anchors() {
        let mut clock = TickClock::new(50);
        assert!(!clock.poll(1000.0));
        assert!(!clock.poll(1049.9));
        assert!(clock.poll(1050.0));
        assert!(!clock.poll(1060.0));
        assert!(clock.poll(1100.0));
    }

    #[test]
    fn test_surplus_is_discarded() {
        let mut clock = TickClock::new(50);
        clock.poll(0.0);
        // Host stalls for a quarter second: one tick, not five
        assert!(clock.poll(250.0));
        assert!(!clock.poll(260.0));
        assert_eq!(clock.skipped(), 4);
    }

    #[test]
    fn test_reset_restarts_interval() {
        let mut clock = TickClock::new(50);
        clock.poll(0.0);
        clock.reset();
        assert!(!clock.poll(500.0));
        assert!(clock.poll(550.0));
    }
}
