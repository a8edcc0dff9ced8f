use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub table_width: f32,
    pub table_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub player_paddle_speed: f32,
    pub ai_paddle_speed: f32,
    pub ai_dead_zone: f32,
    pub ball_size: f32,
    pub ball_speed_x: f32,
    pub ball_speed_y: f32,
    pub ball_speed_variation: f32,
    pub paddle_hit_speed_boost: f32,
    pub paddle_speed_increase: f32,
    pub paddle_edge_damping: f32,
    pub max_ball_speed: f32,
    pub win_score: u8,
    pub respawn_delay_ms: f64,
    pub countdown_start: u8,
    pub countdown_step_ms: f64,
    pub particle_burst_count: usize,
    pub particle_speed_min: f32,
    pub particle_speed_range: f32,
    pub particle_size_min: f32,
    pub particle_size_range: f32,
    pub particle_damping: f32,
    pub particle_life_decay: f32,
    pub frame_time_ms: f64,
    pub max_delta: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table_width: Params::TABLE_WIDTH,
            table_height: Params::TABLE_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            player_paddle_speed: Params::PLAYER_PADDLE_SPEED,
            ai_paddle_speed: Params::AI_PADDLE_SPEED,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            ball_size: Params::BALL_SIZE,
            ball_speed_x: Params::BALL_INITIAL_SPEED_X,
            ball_speed_y: Params::BALL_INITIAL_SPEED_Y,
            ball_speed_variation: Params::BALL_INITIAL_SPEED_VARIATION,
            paddle_hit_speed_boost: Params::PADDLE_HIT_SPEED_BOOST,
            paddle_speed_increase: Params::PADDLE_SPEED_INCREASE,
            paddle_edge_damping: Params::PADDLE_EDGE_DAMPING,
            max_ball_speed: Params::MAX_BALL_SPEED,
            win_score: Params::WIN_SCORE,
            respawn_delay_ms: Params::RESPAWN_DELAY_MS,
            countdown_start: Params::COUNTDOWN_START,
            countdown_step_ms: Params::COUNTDOWN_STEP_MS,
            particle_burst_count: Params::PARTICLE_BURST_COUNT,
            particle_speed_min: Params::PARTICLE_SPEED_MIN,
            particle_speed_range: Params::PARTICLE_SPEED_RANGE,
            particle_size_min: Params::PARTICLE_SIZE_MIN,
            particle_size_range: Params::PARTICLE_SIZE_RANGE,
            particle_damping: Params::PARTICLE_DAMPING,
            particle_life_decay: Params::PARTICLE_LIFE_DECAY,
            frame_time_ms: Params::FRAME_TIME_MS,
            max_delta: Params::MAX_DELTA,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left edge X of the paddle on the given side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.table_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Top edge Y that centres a paddle vertically
    pub fn paddle_home_y(&self) -> f32 {
        self.table_height / 2.0 - self.paddle_height / 2.0
    }

    /// Clamp a paddle's top edge into `[0, table_height - paddle_height]`
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.table_height - self.paddle_height)
    }

    pub fn table_center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.table_width / 2.0, self.table_height / 2.0)
    }
}
