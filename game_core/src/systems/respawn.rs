use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::systems::collision::clamp_speed;
use crate::{Ball, Config, GameRng, Paddle};

/// Fresh serve velocity heading in `direction` (+1 right, -1 left) with a
/// random vertical sign.
pub fn serve_velocity(direction: f32, config: &Config, rng: &mut GameRng) -> Vec2 {
    let speed_x = config.ball_speed_x + rng.0.gen::<f32>() * config.ball_speed_variation;
    let speed_y = config.ball_speed_y + rng.0.gen::<f32>() * config.ball_speed_variation;
    let sign_y = if rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
    clamp_speed(
        Vec2::new(direction * speed_x, sign_y * speed_y),
        config.max_ball_speed,
    )
}

/// Put the ball back in the centre, visible and in play
pub fn reset_ball(world: &mut World, direction: f32, config: &Config, rng: &mut GameRng) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = config.table_center();
        ball.vel = serve_velocity(direction, config, rng);
        ball.visible = true;
        ball.respawning = false;
    }
}

/// Hide the ball and freeze it until the next serve
pub fn retire_ball(world: &mut World) -> Option<Vec2> {
    let mut last_pos = None;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.visible = false;
        ball.respawning = true;
        last_pos = Some(ball.pos);
    }
    last_pos
}

/// Re-centre both paddles and stop the player's paddle
pub fn reset_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.y = config.paddle_home_y();
        paddle.dy = 0.0;
    }
}
