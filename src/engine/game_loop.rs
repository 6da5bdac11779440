//! Frame timing for the game loop
//!
//! Every frame measures the wall-clock time since the previous one and hands
//! it to the update step unchanged (variable timestep). Frame pacing is done
//! by scheduling the next redraw no earlier than `1 / frame_rate_limit`
//! seconds after the last one.
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Frame clock and pacing state
pub struct FrameClock {
    /// Time of last frame
    last_frame_time: Instant,

    /// Time when the clock was created
    start_time: Instant,

    /// Minimum time between frames (None = uncapped)
    frame_duration: Option<Duration>,

    /// Frame timing history for FPS calculation
    frame_times: VecDeque<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f32,
}

impl FrameClock {
    /// Create a new clock capped at `frame_rate_limit` frames per second (0 = uncapped)
    pub fn new(frame_rate_limit: u32) -> Self {
        Self::starting_at(Instant::now(), frame_rate_limit)
    }

    fn starting_at(now: Instant, frame_rate_limit: u32) -> Self {
        let frame_duration =
            (frame_rate_limit > 0).then(|| Duration::from_secs_f64(1.0 / frame_rate_limit as f64));
        Self {
            last_frame_time: now,
            start_time: now,
            frame_duration,
            frame_times: VecDeque::with_capacity(FPS_WINDOW_SIZE + 1),
            frame_count: 0,
            current_fps: 0.0,
        }
    }

    /// Return the seconds elapsed since the previous call and start timing a new frame
    pub fn restart(&mut self) -> f32 {
        self.restart_at(Instant::now())
    }

    fn restart_at(&mut self, now: Instant) -> f32 {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        // Store frame time for FPS calculation
        self.frame_times.push_back(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.pop_front();
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        frame_time.as_secs_f32()
    }

    /// Earliest instant the next frame should start, if capped
    pub fn next_frame_deadline(&self) -> Option<Instant> {
        self.frame_duration.map(|d| self.last_frame_time + d)
    }

    /// Whether enough time has passed to start another frame
    pub fn frame_due(&self, now: Instant) -> bool {
        self.next_frame_deadline().map_or(true, |deadline| now >= deadline)
    }

    /// Get current FPS
    pub fn fps(&self) -> f32 {
        self.current_fps
    }

    /// Get total elapsed time since start
    pub fn elapsed(&self) -> Duration {
        Instant::now().duration_since(self.start_time)
    }

    /// Get total number of frames timed
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Update FPS calculation
    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total / self.frame_times.len() as u32;

        self.current_fps = if avg_frame_time.as_secs_f32() > 0.0 {
            1.0 / avg_frame_time.as_secs_f32()
        } else {
            0.0
        };
    }
}
