use std::time::Duration;

use log::debug;

struct TimerHandle {
    elapsed: Duration,
}

/// Repeating timer driving automatic advancement. Time only moves through
/// [`AutoplayTimer::tick`], so a stopped timer can never fire.
pub struct AutoplayTimer {
    interval: Duration,
    handle: Option<TimerHandle>,
}

impl AutoplayTimer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, handle: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Starts the timer unless one is already live or there is nothing to rotate.
    pub fn start(&mut self, real_len: usize) {
        if self.handle.is_some() || real_len <= 1 {
            return;
        }
        debug!("Autoplay started ({:?})", self.interval);
        self.handle = Some(TimerHandle { elapsed: Duration::ZERO });
    }

    pub fn stop(&mut self) {
        if self.handle.take().is_some() {
            debug!("Autoplay stopped");
        }
    }

    /// Restarts the cadence from now.
    pub fn reset(&mut self, real_len: usize) {
        self.stop();
        self.start(real_len);
    }

    /// Advances the live timer and returns how many intervals elapsed.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        let Some(handle) = self.handle.as_mut() else {
            return 0;
        };
        if self.interval.is_zero() {
            return 0;
        }

        handle.elapsed += dt;
        let mut fired = 0;
        while handle.elapsed >= self.interval {
            handle.elapsed -= self.interval;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn fires_once_per_interval() {
        let mut timer = AutoplayTimer::new(SECOND);
        timer.start(3);

        assert_eq!(timer.tick(Duration::from_millis(999)), 0);
        assert_eq!(timer.tick(Duration::from_millis(1)), 1);
        assert_eq!(timer.tick(Duration::from_millis(2500)), 2);
        assert_eq!(timer.tick(Duration::from_millis(500)), 1);
    }

    #[test]
    fn needs_two_slides() {
        let mut timer = AutoplayTimer::new(SECOND);
        timer.start(0);
        assert!(!timer.is_running());
        timer.start(1);
        assert!(!timer.is_running());
        assert_eq!(timer.tick(SECOND * 10), 0);
    }

    #[test]
    fn repeated_start_keeps_one_timer() {
        let mut timer = AutoplayTimer::new(SECOND);
        timer.stop();
        timer.start(2);
        timer.tick(Duration::from_millis(600));
        timer.start(2);

        // A second start must not restart or double the cadence.
        assert_eq!(timer.tick(Duration::from_millis(400)), 1);
        assert_eq!(timer.tick(SECOND), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut timer = AutoplayTimer::new(SECOND);
        timer.start(2);
        timer.stop();
        timer.stop();
        assert!(!timer.is_running());
        assert_eq!(timer.tick(SECOND * 5), 0);
    }

    #[test]
    fn reset_restarts_cadence() {
        let mut timer = AutoplayTimer::new(SECOND);
        timer.start(2);
        timer.tick(Duration::from_millis(900));
        timer.reset(2);

        assert_eq!(timer.tick(Duration::from_millis(900)), 0);
        assert_eq!(timer.tick(Duration::from_millis(100)), 1);
    }
}
