use std::time::{Duration, Instant};

/// Timing of the frame being rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameState {
    /// Seconds since the sample started.
    pub time: f32,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Frames presented before this one.
    pub frame_count: u64,
}

/// Produces the [`FrameState`] of each frame and the presented-frame rate
/// once per second.
///
/// The host calls [`begin`](Self::begin) before updating the sample and
/// [`presented`](Self::presented) after a frame reaches the screen. Frames
/// skipped for want of a swap-chain image still advance the clock but are
/// not counted.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
    presented: u64,
    window_frames: u32,
    window_time: Duration,
}

impl FrameClock {
    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            start: now,
            last: now,
            presented: 0,
            window_frames: 0,
            window_time: Duration::ZERO,
        }
    }

    /// Starts timing from `now`, e.g. once initialization has finished.
    pub fn restart(&mut self, now: Instant) {
        *self = Self::new(now);
    }

    /// Starts a frame at `now`.
    pub fn begin(&mut self, now: Instant) -> FrameState {
        let dt = now.saturating_duration_since(self.last);
        self.last = now;
        self.window_time += dt;

        FrameState {
            time: now.saturating_duration_since(self.start).as_secs_f32(),
            dt: dt.as_secs_f32(),
            frame_count: self.presented,
        }
    }

    /// Counts a presented frame; returns frames per second when at least a
    /// second has passed since the last report.
    pub fn presented(&mut self) -> Option<f32> {
        self.presented += 1;
        self.window_frames += 1;

        if self.window_time.as_secs_f32() < 1.0 {
            return None;
        }
        let fps = self.window_frames as f32 / self.window_time.as_secs_f32();
        self.window_frames = 0;
        self.window_time = Duration::ZERO;
        Some(fps)
    }

    /// Frames presented so far.
    #[inline]
    #[must_use]
    pub fn presented_frames(&self) -> u64 {
        self.presented
    }
}
