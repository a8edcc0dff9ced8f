pub mod audio;
pub mod clock;
pub mod components;
pub mod config;
pub mod game;
pub mod input;
pub mod match_state;
pub mod params;
pub mod render;
pub mod resources;
pub mod systems;
pub mod timers;

pub use audio::*;
pub use clock::*;
pub use components::*;
pub use config::*;
pub use game::*;
pub use input::*;
pub use match_state::*;
pub use params::*;
pub use resources::*;
pub use timers::*;

use hecs::World;
use systems::*;

/// Run one tick of paddle and ball physics.
///
/// Returns the side that scored, if the ball left the table this tick. The
/// caller owns what happens next (see [`Game`]).
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    events: &mut Events,
    input: &mut InputState,
) -> Option<Side> {
    // 1. Ingest inputs (player paddle velocity / pointer target)
    ingest_inputs(world, input, config);

    // 2. Move paddles
    move_paddles(world, time, config);
    move_ai_paddles(world, time, config);

    // 3. Move ball
    move_ball(world, time);

    // 4. Check collisions (walls, paddles)
    check_collisions(world, config, events);

    // 5. Check scoring (ball left the table)
    check_scoring(world, config, events)
}

/// Helper to create a paddle entity
pub fn create_paddle(
    world: &mut World,
    side: Side,
    controller: Controller,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Paddle::new(side, controller, config),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2, size: f32) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, size),))
}
