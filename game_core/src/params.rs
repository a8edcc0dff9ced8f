/// Game tuning parameters for Pong
///
/// Distances are logical surface units. Speeds are units per reference frame
/// (1/60 s), so a delta of 1.0 advances by exactly one velocity step.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table
    pub const TABLE_WIDTH: f32 = 800.0;
    pub const TABLE_HEIGHT: f32 = 500.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 12.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 20.0; // Gap between table edge and paddle
    pub const PLAYER_PADDLE_SPEED: f32 = 7.0;
    pub const AI_PADDLE_SPEED: f32 = 5.5;
    pub const AI_DEAD_ZONE: f32 = 10.0;

    // Ball
    pub const BALL_SIZE: f32 = 10.0; // Half-extent of the ball square
    pub const BALL_INITIAL_SPEED_X: f32 = 3.0;
    pub const BALL_INITIAL_SPEED_Y: f32 = 2.0;
    pub const BALL_INITIAL_SPEED_VARIATION: f32 = 1.5;
    pub const PADDLE_HIT_SPEED_BOOST: f32 = 1.08;
    pub const PADDLE_SPEED_INCREASE: f32 = 1.05;
    pub const PADDLE_EDGE_DAMPING: f32 = 0.65;
    pub const MAX_BALL_SPEED: f32 = 9.5;

    // Score
    pub const WIN_SCORE: u8 = 10; // First to 10 wins

    // Match pacing (wall clock)
    pub const RESPAWN_DELAY_MS: f64 = 3000.0;
    pub const COUNTDOWN_START: u8 = 3;
    pub const COUNTDOWN_STEP_MS: f64 = 1000.0;

    // Particles
    pub const PARTICLE_BURST_COUNT: usize = 20;
    pub const PARTICLE_SPEED_MIN: f32 = 2.0;
    pub const PARTICLE_SPEED_RANGE: f32 = 2.5;
    pub const PARTICLE_SIZE_MIN: f32 = 2.0;
    pub const PARTICLE_SIZE_RANGE: f32 = 2.0;
    pub const PARTICLE_DAMPING: f32 = 0.92; // Velocity kept per reference frame
    pub const PARTICLE_LIFE_DECAY: f32 = 0.05; // Life lost per reference frame

    // Timing
    pub const FRAME_TIME_MS: f64 = 1000.0 / 60.0;
    pub const MAX_DELTA: f32 = 6.0; // Clamp to prevent large jumps (100 ms)
}
