use crate::{Ball, Config, Events, Side};
use hecs::World;

/// Check if the ball's leading edge left the table. Returns the side that
/// earned the point; the caller hands it to the match state.
pub fn check_scoring(world: &World, config: &Config, events: &mut Events) -> Option<Side> {
    for (_entity, ball) in world.query::<&Ball>().iter() {
        if ball.respawning {
            continue;
        }

        if ball.pos.x - ball.size < 0.0 {
            // Computer scores
            events.right_scored = true;
            return Some(Side::Right);
        } else if ball.pos.x + ball.size > config.table_width {
            // Player scores
            events.left_scored = true;
            return Some(Side::Left);
        }
    }
    None
}
