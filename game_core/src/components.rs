use glam::Vec2;

use crate::config::Config;

/// Table side a paddle guards (and the side credited with a point)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,  // Player
    Right, // Computer
}

impl Side {
    /// Horizontal direction pointing away from this side's paddle
    pub fn outward(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Display name used in the end-of-match announcement
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "Player",
            Side::Right => "Computer",
        }
    }
}

/// Who drives a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    Player,
    Ai,
}

/// Paddle component
///
/// Position is the top-left corner. Only `y` and `dy` change after spawn.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub controller: Controller,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub dy: f32, // Vertical velocity
}

impl Paddle {
    pub fn new(side: Side, controller: Controller, config: &Config) -> Self {
        let speed = match controller {
            Controller::Player => config.player_paddle_speed,
            Controller::Ai => config.ai_paddle_speed,
        };
        Self {
            side,
            controller,
            x: config.paddle_x(side),
            y: config.paddle_home_y(),
            width: config.paddle_width,
            height: config.paddle_height,
            speed,
            dy: 0.0,
        }
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Ball component
///
/// `pos` is the centre; `size` is the half-extent of the drawn square.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub visible: bool,
    pub respawning: bool, // Motion frozen between a point and the end of the countdown
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self {
            pos,
            vel,
            size,
            visible: true,
            respawning: false,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Disintegration particle
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32, // 1.0 at spawn, removed at <= 0
    pub size: f32,
}

impl Particle {
    pub fn alpha(&self) -> f32 {
        self.life.clamp(0.0, 1.0)
    }

    pub fn is_expired(&self) -> bool {
        self.life <= 0.0
    }
}
