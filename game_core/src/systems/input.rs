use hecs::World;

use crate::components::*;
use crate::resources::*;
use crate::Config;

/// Apply the pending input intent to the player-controlled paddle
pub fn ingest_inputs(world: &mut World, input: &mut InputState, config: &Config) {
    let pending = input.take();
    if pending.is_empty() {
        return;
    }
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.controller == Controller::Player {
            apply_input(paddle, &pending, config);
        }
    }
}

fn apply_input(paddle: &mut Paddle, pending: &InputState, config: &Config) {
    match pending.steer {
        Some(Steer::Up) => paddle.dy = -paddle.speed,
        Some(Steer::Down) => paddle.dy = paddle.speed,
        Some(Steer::Stop) => paddle.dy = 0.0,
        None => {}
    }
    if let Some(y) = pending.pointer_y {
        paddle.y = config.clamp_paddle_y(y - paddle.height / 2.0);
    }
}
