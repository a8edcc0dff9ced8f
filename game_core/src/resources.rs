use crate::components::Side;
use crate::input::{InputEvent, Key};

/// Time resource for the current tick
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub delta: f32,  // Elapsed time in reference frames (1.0 at 60 Hz)
    pub now_ms: f64, // Wall-clock timestamp of this tick
}

impl Time {
    pub fn new(delta: f32, now_ms: f64) -> Self {
        Self { delta, now_ms }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            delta: 1.0,
            now_ms: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // Player score
    pub right: u8, // Computer score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Winner once either side reaches `win_score`: the side with the
    /// strictly higher score, otherwise the right side.
    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score || self.right >= win_score {
            if self.left > self.right {
                Some(Side::Left)
            } else {
                Some(Side::Right)
            }
        } else {
            None
        }
    }

    /// True when a side sits one point from winning and nobody has won yet
    pub fn is_match_point(&self, win_score: u8) -> bool {
        let point = win_score.saturating_sub(1);
        self.left < win_score
            && self.right < win_score
            && (self.left == point || self.right == point)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub match_over: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.match_over = None;
    }

    pub fn scored(&self) -> bool {
        self.left_scored || self.right_scored
    }
}

/// Arrow-key intent waiting for the next tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Steer {
    Up,
    Down,
    Stop,
}

/// Latest player intent, written by the input adapter and consumed once per
/// tick. A newer event overwrites an older one of the same kind, so the record
/// never grows while the game is stopped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub steer: Option<Steer>,
    /// Pointer y in surface units
    pub pointer_y: Option<f32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn record(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown(Key::Up) => self.steer = Some(Steer::Up),
            InputEvent::KeyDown(Key::Down) => self.steer = Some(Steer::Down),
            InputEvent::KeyUp(_) => self.steer = Some(Steer::Stop),
            InputEvent::PointerMove { y } => self.pointer_y = Some(y),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.steer.is_none() && self.pointer_y.is_none()
    }

    /// Hand over the pending intent and reset the record
    pub fn take(&mut self) -> InputState {
        std::mem::take(self)
    }
}
