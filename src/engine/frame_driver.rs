/// Frame timing driver
///
/// Sequences the per-refresh tick. The host hands in a monotonically
/// increasing millisecond timestamp once per display refresh; the driver
/// answers with the elapsed time the simulation should advance by, or
/// `None` on the very first tick when no previous timestamp exists yet.
use log::debug;

/// Timing state: either waiting for the first timestamp or running with a
/// recorded previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
enum DriverState {
    /// No timestamp seen yet; the first tick only primes the clock.
    Priming,
    /// Normal operation.
    Running { start: f64, previous: f64 },
}

/// Frame driver state machine.
#[derive(Debug)]
pub struct FrameDriver {
    state: DriverState,
    frame_count: u64,
}

impl FrameDriver {
    /// Create a driver in the priming state.
    pub fn new() -> Self {
        Self {
            state: DriverState::Priming,
            frame_count: 0,
        }
    }

    /// Advance the driver with the host's refresh timestamp (milliseconds).
    ///
    /// Returns the elapsed time since the previous tick, or `None` on the
    /// priming tick (the caller must skip update/draw — there is no valid
    /// elapsed time yet). The delta is raw: no clamping, no scaling. After
    /// the host throttles a backgrounded window the next delta can be huge
    /// and will propagate as one large movement jump.
    pub fn tick(&mut self, timestamp: f64) -> Option<f64> {
        self.frame_count += 1;
        match self.state {
            DriverState::Priming => {
                debug!("Frame driver primed at t={}ms", timestamp);
                self.state = DriverState::Running {
                    start: timestamp,
                    previous: timestamp,
                };
                None
            }
            DriverState::Running { start, previous } => {
                let delta = timestamp - previous;
                self.state = DriverState::Running {
                    start,
                    previous: timestamp,
                };
                Some(delta)
            }
        }
    }

    /// Whether the driver has seen its first timestamp.
    pub fn is_running(&self) -> bool {
        matches!(self.state, DriverState::Running { .. })
    }

    /// Milliseconds between the priming tick and the most recent one.
    pub fn elapsed_ms(&self) -> f64 {
        match self.state {
            DriverState::Priming => 0.0,
            DriverState::Running { start, previous } => previous - start,
        }
    }

    /// Total ticks observed, the priming tick included.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_driver_creation() {
        let driver = FrameDriver::new();
        assert!(!driver.is_running());
        assert_eq!(driver.frame_count(), 0);
        assert_eq!(driver.elapsed_ms(), 0.0);
    }

    #[test]
    fn test_first_tick_primes_without_delta() {
        let mut driver = FrameDriver::new();
        assert_eq!(driver.tick(1000.0), None);
        assert!(driver.is_running());
        assert_eq!(driver.frame_count(), 1);
    }

    #[test]
    fn test_second_tick_reports_elapsed() {
        let mut driver = FrameDriver::new();
        driver.tick(1000.0);
        assert_eq!(driver.tick(1016.0), Some(16.0));
    }

    #[test]
    fn test_consecutive_deltas() {
        let mut driver = FrameDriver::new();
        driver.tick(0.0);
        assert_eq!(driver.tick(16.0), Some(16.0));
        assert_eq!(driver.tick(33.0), Some(17.0));
        assert_eq!(driver.tick(50.0), Some(17.0));
        assert_eq!(driver.elapsed_ms(), 50.0);
    }

    #[test]
    fn test_large_gap_is_not_clamped() {
        let mut driver = FrameDriver::new();
        driver.tick(0.0);
        driver.tick(16.0);
        // e.g. the window was backgrounded for five seconds
        assert_eq!(driver.tick(5016.0), Some(5000.0));
    }

    #[test]
    fn test_frame_counting() {
        let mut driver = FrameDriver::new();
        driver.tick(0.0);
        driver.tick(16.0);
        driver.tick(32.0);
        assert_eq!(driver.frame_count(), 3);
    }
}
