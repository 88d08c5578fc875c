//! Fixed-rate frame clock
//!
//! Converts elapsed wall-clock time into a whole number of simulation frames.

use std::time::Duration;

use crate::consts::{MAX_FRAME_GAP, MAX_SUBSTEPS};

/// Accumulates elapsed time and releases it one fixed frame at a time
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Seconds per frame
    step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FrameClock {
    /// Clock ticking `frame_rate` times per second (at least once)
    pub fn new(frame_rate: u32) -> Self {
        Self {
            step: 1.0 / frame_rate.max(1) as f32,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Add `elapsed` seconds and return how many frames are due.
    ///
    /// Gaps longer than `MAX_FRAME_GAP` are clamped, and at most
    /// `MAX_SUBSTEPS` frames are released per call.
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_GAP);

        let mut frames = 0;
        while self.accumulator >= self.step && frames < self.max_substeps {
            self.accumulator -= self.step;
            frames += 1;
        }
        frames
    }

    /// Time left until the next frame is due
    pub fn until_next_frame(&self) -> Duration {
        Duration::from_secs_f32((self.step - self.accumulator).max(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_frames_with_carry() {
        // 1/16 s frames are exact in binary
        let mut clock = FrameClock::new(16);
        assert_eq!(clock.advance(0.09375), 1);
        // Half a frame carried over
        assert_eq!(clock.advance(0.03125), 1);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_long_gap_is_capped() {
        let mut clock = FrameClock::new(32);
        // 5 seconds clamps to 0.1s, a bit over 3 frames
        assert_eq!(clock.advance(5.0), 3);

        let mut fast = FrameClock::new(1000);
        assert_eq!(fast.advance(0.1), MAX_SUBSTEPS);
    }

    #[test]
    fn test_until_next_frame() {
        let mut clock = FrameClock::new(50);
        clock.advance(0.005);
        let wait = clock.until_next_frame().as_secs_f32();
        assert!((wait - 0.015).abs() < 1e-4);
    }

    #[test]
    fn test_zero_rate_is_clamped() {
        // One frame per second
        assert_eq!(FrameClock::new(0).until_next_frame(), Duration::from_secs(1));
    }
}
