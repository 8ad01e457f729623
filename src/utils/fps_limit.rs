use std::time::{Duration, Instant};

/// Paces simulation steps to a target rate without blocking the UI thread.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    pub fn new(max_fps: u32) -> Self {
        let mut limiter = Self {
            target_frametime: Duration::ZERO,
            frame_timer: Instant::now(),
            frametime_smoothed: 0.,
        };
        limiter.set_max_fps(max_fps);
        limiter
    }

    /// Measured rate of consumed ticks.
    pub fn fps(&self) -> f64 {
        if self.frametime_smoothed == 0. {
            return 0.;
        }
        1. / self.frametime_smoothed
    }

    pub fn set_max_fps(&mut self, max_fps: u32) {
        self.target_frametime = Duration::from_secs_f64(1. / max_fps.max(1) as f64);
    }

    /// Time left until the next tick is due.
    pub fn remaining(&self) -> Duration {
        self.target_frametime
            .saturating_sub(self.frame_timer.elapsed())
    }

    /// Consumes a tick if one is due.
    pub fn tick(&mut self) -> bool {
        let frametime = self.frame_timer.elapsed();
        if frametime < self.target_frametime {
            return false;
        }
        let frametime = frametime.as_secs_f64();
        if self.frametime_smoothed == 0. {
            self.frametime_smoothed = frametime;
        } else {
            self.frametime_smoothed += (frametime - self.frametime_smoothed) * 0.1;
        }
        self.frame_timer = Instant::now();
        true
    }

    /// Restarts the interval, e.g. after a pause.
    pub fn reset(&mut self) {
        self.frame_timer = Instant::now();
        self.frametime_smoothed = 0.;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_waits_for_interval() {
        let mut limiter = FpsLimiter::new(1);
        assert!(!limiter.tick());
        assert!(limiter.remaining() > Duration::ZERO);
        assert_eq!(limiter.fps(), 0.);

        limiter.set_max_fps(1000);
        std::thread::sleep(Duration::from_millis(5));
        assert!(limiter.tick());
        assert!(limiter.fps() > 0.);
    }
}
