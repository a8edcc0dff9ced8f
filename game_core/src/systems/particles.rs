use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::{Config, GameRng, Particle, Time};

/// Spawn a radial disintegration burst at `origin`
pub fn spawn_burst(world: &mut World, origin: Vec2, config: &Config, rng: &mut GameRng) {
    let particles: Vec<(Particle,)> = (0..config.particle_burst_count)
        .map(|_| {
            let angle = rng.0.gen_range(0.0..std::f32::consts::TAU);
            let speed =
                config.particle_speed_min + rng.0.gen::<f32>() * config.particle_speed_range;
            let size = config.particle_size_min + rng.0.gen::<f32>() * config.particle_size_range;
            (Particle {
                pos: origin,
                vel: Vec2::from_angle(angle) * speed,
                life: 1.0,
                size,
            },)
        })
        .collect();
    world.spawn_batch(particles);
}

/// Advance particles, damp their velocity and despawn the ones that burned out.
///
/// Damping is `particle_damping^delta`, so the decay per unit of time does not
/// depend on the frame rate.
pub fn integrate_particles(world: &mut World, time: &Time, config: &Config) {
    let damping = config.particle_damping.powf(time.delta);
    let mut to_remove = Vec::new();

    for (entity, particle) in world.query_mut::<&mut Particle>() {
        particle.pos += particle.vel * time.delta;
        particle.vel *= damping;
        particle.life -= config.particle_life_decay * time.delta;

        if particle.is_expired() {
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
    }
}

/// Remove every particle
pub fn clear_particles(world: &mut World) {
    let all: Vec<_> = world.query::<&Particle>().iter().map(|(e, _)| e).collect();
    for entity in all {
        let _ = world.despawn(entity);
    }
}

pub fn particle_count(world: &World) -> usize {
    world.query::<&Particle>().iter().count()
}
