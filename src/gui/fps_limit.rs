use std::{
    thread::sleep,
    time::{Duration, Instant},
};

/// Caps the frame rate and measures the one actually achieved.
pub struct FpsLimiter {
    target_frametime: Duration,
    frame_timer: Instant,
    frametime_smoothed: f64,
}

impl FpsLimiter {
    const SMOOTHING: f64 = 0.1;

    pub fn new(max_fps: f64) -> Self {
        Self {
            target_frametime: Duration::from_secs_f64(1. / max_fps),
            frame_timer: Instant::now(),
            frametime_smoothed: 1. / max_fps,
        }
    }

    pub fn fps(&self) -> f64 {
        1. / self.frametime_smoothed
    }

    /// Sleeps for the rest of the current frame and starts the next one.
    pub fn delay(&mut self) {
        let before_wait = self.frame_timer.elapsed();
        if let Some(rest) = self.target_frametime.checked_sub(before_wait) {
            sleep(rest);
        }

        let frametime = self.frame_timer.elapsed().as_secs_f64();
        self.frametime_smoothed += (frametime - self.frametime_smoothed) * Self::SMOOTHING;
        self.frame_timer = Instant::now();
    }
}
