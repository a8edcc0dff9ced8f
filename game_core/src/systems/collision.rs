use crate::{Ball, Config, Events, Paddle, Side};
use glam::Vec2;
use hecs::World;

/// Scale `vel` down to `max_speed` when it is faster, preserving direction.
pub fn clamp_speed(vel: Vec2, max_speed: f32) -> Vec2 {
    let speed = vel.length();
    if speed > max_speed {
        vel * (max_speed / speed)
    } else {
        vel
    }
}

/// Where on the paddle the ball struck, from -1 (top edge) to 1 (bottom edge)
pub fn hit_offset(ball: &Ball, paddle: &Paddle) -> f32 {
    let collide_point = ball.pos.y - paddle.center_y();
    (collide_point / (paddle.height / 2.0)).clamp(-1.0, 1.0)
}

/// Velocity after the ball leaves `paddle` heading in `direction` (+1 right, -1 left).
///
/// Centre hits gain the most speed and leave flat; edge hits gain less speed
/// but take a damped vertical kick in the direction of the offset.
pub fn paddle_bounce(ball: &Ball, paddle: &Paddle, direction: f32, config: &Config) -> Vec2 {
    let base_speed = ball.vel.x.abs() * config.paddle_hit_speed_boost;
    let normalized = hit_offset(ball, paddle);
    let influence = normalized.abs();
    let speed_multiplier = 1.0 + (1.0 - influence) * (config.paddle_speed_increase - 1.0);
    let edge_damping = 1.0 - influence * (1.0 - config.paddle_edge_damping);

    let vel = Vec2::new(
        direction * base_speed * speed_multiplier,
        normalized * base_speed * speed_multiplier * edge_damping,
    );
    clamp_speed(vel, config.max_ball_speed)
}

/// Leading-edge test: the ball's near edge has reached the paddle's facing
/// edge while its centre lies strictly within the paddle's height.
///
/// Only one axis is bounded, so a ball already behind the paddle still counts,
/// and a very fast ball can step over the facing edge between ticks.
pub fn touches_paddle(ball: &Ball, paddle: &Paddle) -> bool {
    let within_height = ball.pos.y > paddle.y && ball.pos.y < paddle.bottom();
    let crossed = match paddle.side {
        Side::Left => ball.pos.x - ball.size <= paddle.x + paddle.width,
        Side::Right => ball.pos.x + ball.size >= paddle.x,
    };
    crossed && within_height
}

/// Check ball collisions with the top/bottom walls and both paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    // Collect paddle data without holding borrows
    let mut paddles: Vec<Paddle> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| *paddle)
        .collect();
    paddles.sort_by_key(|p| p.side != Side::Left);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.respawning {
            continue;
        }

        if ball.pos.y - ball.size < 0.0 || ball.pos.y + ball.size > config.table_height {
            ball.vel.y = -ball.vel.y;
            ball.vel = clamp_speed(ball.vel, config.max_ball_speed);
            events.ball_hit_wall = true;
        }

        // Both paddles are tested against the same position
        let current = *ball;
        for paddle in paddles.iter().filter(|p| touches_paddle(&current, p)) {
            ball.vel = paddle_bounce(ball, paddle, paddle.side.outward(), config);
            events.ball_hit_paddle = true;
        }
    }
}
