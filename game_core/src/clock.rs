use crate::Config;

/// Frame-rate independent tick driver
///
/// Converts display-refresh timestamps into a delta measured in reference
/// frames, so 60 Hz yields 1.0 per tick and 120 Hz yields 0.5.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_time_ms: f64,
    max_delta: f32,
    last_ms: Option<f64>,
    running: bool,
}

impl FrameClock {
    pub fn new(config: &Config) -> Self {
        Self {
            frame_time_ms: config.frame_time_ms,
            max_delta: config.max_delta,
            last_ms: None,
            running: false,
        }
    }

    /// Start (or resume) with a fresh baseline so no time debt carries over
    pub fn start(&mut self) {
        self.running = true;
        self.last_ms = None;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.last_ms = None;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Delta for a frame at `now_ms`, or `None` while stopped. The first
    /// frame after a start returns 0.
    pub fn advance(&mut self, now_ms: f64) -> Option<f32> {
        if !self.running {
            return None;
        }
        let last = self.last_ms.unwrap_or(now_ms);
        self.last_ms = Some(now_ms);
        let delta = ((now_ms - last) / self.frame_time_ms) as f32;
        Some(delta.clamp(0.0, self.max_delta))
    }
}
