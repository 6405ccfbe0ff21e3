//! # Frame Timing
//!
//! Wall-clock frame timing and frame rate capping for the game loop.
//!
//! Native builds measure time with [`Instant`] and sleep off the rest of each
//! frame. On wasm32 `Instant` and thread sleeps are unavailable, so time comes
//! from macroquad's clock and the browser's frame pacing caps the rate.

use std::time::Duration;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;

/// Seconds on a monotonic clock.
#[cfg(not(target_arch = "wasm32"))]
pub fn now_seconds() -> f64 {
    static EPOCH: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();
    EPOCH.get_or_init(Instant::now).elapsed().as_secs_f64()
}

/// Seconds since the window opened, from macroquad's clock.
#[cfg(target_arch = "wasm32")]
pub fn now_seconds() -> f64 {
    macroquad::time::get_time()
}

#[cfg(not(target_arch = "wasm32"))]
fn sleep_for(duration: Duration) {
    std::thread::sleep(duration);
}

#[cfg(target_arch = "wasm32")]
fn sleep_for(_duration: Duration) {}

/// Measures wall-clock time between loop iterations.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Starts the clock now.
    pub fn new() -> Self {
        Self::starting_at(now_seconds())
    }

    /// Starts the clock at a given reading, in seconds.
    pub fn starting_at(seconds: f64) -> Self {
        Self { last_tick: seconds }
    }

    /// Seconds since the previous tick (or since creation).
    pub fn tick(&mut self) -> f32 {
        self.tick_at(now_seconds())
    }

    /// Seconds between the previous reading and `now`; never negative.
    pub fn tick_at(&mut self, now: f64) -> f32 {
        let elapsed = (now - self.last_tick).max(0.0);
        self.last_tick = now;
        elapsed as f32
    }
}

/// Caps the loop at a target frame rate by sleeping off the remaining budget.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    frame_budget: Duration,
    frame_start: f64,
}

impl FrameLimiter {
    /// Creates a limiter for `target_fps` frames per second.
    ///
    /// # Examples
    ///
    /// ```
    /// use make_ten::FrameLimiter;
    /// use std::time::Duration;
    ///
    /// let limiter = FrameLimiter::new(50);
    /// assert_eq!(limiter.frame_budget(), Duration::from_millis(20));
    /// ```
    pub fn new(target_fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs(1) / target_fps.max(1),
            frame_start: now_seconds(),
        }
    }

    pub fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// How long to sleep after a frame that took `elapsed`.
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.frame_budget
            .checked_sub(elapsed)
            .filter(|remaining| !remaining.is_zero())
    }

    /// Sleeps until the current frame's budget is used, then starts the next frame.
    ///
    /// A no-op on wasm32, where the browser paces frames.
    pub fn wait(&mut self) {
        let elapsed = Duration::from_secs_f64((now_seconds() - self.frame_start).max(0.0));
        if let Some(remaining) = self.remaining(elapsed) {
            sleep_for(remaining);
        }
        self.frame_start = now_seconds();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixty_fps_budget() {
        let limiter = FrameLimiter::new(60);
        assert_eq!(limiter.frame_budget(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_remaining_budget() {
        let limiter = FrameLimiter::new(50);
        assert_eq!(
            limiter.remaining(Duration::from_millis(5)),
            Some(Duration::from_millis(15))
        );
        assert_eq!(limiter.remaining(Duration::from_millis(20)), None);
        assert_eq!(limiter.remaining(Duration::from_millis(35)), None);
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        assert_eq!(FrameLimiter::new(0).frame_budget(), Duration::from_secs(1));
    }

    #[test]
    fn test_tick_at_uses_given_readings() {
        let mut clock = FrameClock::starting_at(10.0);
        assert_eq!(clock.tick_at(10.5), 0.5);
        assert_eq!(clock.tick_at(10.75), 0.25);
        // A reading from before the last tick yields no time.
        assert_eq!(clock.tick_at(10.0), 0.0);
        assert_eq!(clock.tick_at(11.0), 1.0);
    }

    #[test]
    fn test_frame_clock_measures_sleep() {
        let mut clock = FrameClock::new();
        std::thread::sleep(Duration::from_millis(10));
        let elapsed = clock.tick();
        assert!(elapsed >= 0.01, "elapsed {}", elapsed);
        assert!(clock.tick() < elapsed);
    }

    #[test]
    fn test_wait_fills_the_frame_budget() {
        let mut limiter = FrameLimiter::new(50);
        let start = now_seconds();
        limiter.wait();
        assert!(now_seconds() - start >= 0.019);
    }

    #[test]
    fn test_now_seconds_is_monotonic() {
        let first = now_seconds();
        let second = now_seconds();
        assert!(second >= first);
    }
}
