use crate::{Ball, Config, Controller, Paddle, Time};
use hecs::World;

/// Move player paddles by their vertical velocity
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.controller == Controller::Player {
            paddle.y = config.clamp_paddle_y(paddle.y + paddle.dy * time.delta);
        }
    }
}

/// Track the ball with AI paddles, holding still inside the dead-zone
pub fn move_ai_paddles(world: &mut World, time: &Time, config: &Config) {
    let ball_y = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.y,
        None => return,
    };

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.controller != Controller::Ai {
            continue;
        }
        let center = paddle.center_y();
        if center < ball_y - config.ai_dead_zone {
            paddle.y += paddle.speed * time.delta;
        } else if center > ball_y + config.ai_dead_zone {
            paddle.y -= paddle.speed * time.delta;
        }
        paddle.y = config.clamp_paddle_y(paddle.y);
    }
}

/// Integrate ball position; frozen while a respawn is pending
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.respawning {
            continue;
        }
        ball.pos += ball.vel * time.delta;
    }
}
