use web_time::{Duration, Instant};

/// Starting FPS estimate before any frame has been measured.
const INITIAL_FPS: f32 = 60.0;

/// Frame timing with FPS smoothing and optional frame limiting.
pub struct FrameTiming {
    /// Minimum frame duration (zero = unlimited).
    min_frame_duration: Duration,
    /// Last frame timestamp.
    last_frame: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Weight of the newest sample (0.0-1.0).
    smoothing: f32,
    /// Frames recorded so far.
    frames: u64,
}

impl FrameTiming {
    /// Create a new frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            min_frame_duration,
            last_frame: Instant::now(),
            smoothed_fps: INITIAL_FPS,
            smoothing: 0.05,
            frames: 0,
        }
    }

    /// Whether enough time has passed since the last frame to draw another.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Record the end of a frame now.
    pub fn end_frame(&mut self) {
        self.end_frame_at(Instant::now());
    }

    /// Record the end of a frame at `now`.
    pub fn end_frame_at(&mut self, now: Instant) {
        let frame_time = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frames += 1;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps =
                self.smoothed_fps * (1.0 - self.smoothing) + instant_fps * self.smoothing;
        }
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames recorded so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}
