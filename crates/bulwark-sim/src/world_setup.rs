//! Entity spawn helpers for setting up the simulation world.
//!
//! The enemy model itself (movement, path following) is the session
//! owner's concern; these helpers only create entities satisfying the
//! attribute contract towers consume.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use bulwark_core::components::{BodySize, Enemy, EnemyId, Health, PathProgress};
use bulwark_core::types::Point;

/// Default enemy body diameter for demo waves.
const WAVE_ENEMY_SIZE: f64 = 10.0;

/// Default enemy health for demo waves.
const WAVE_ENEMY_HEALTH: i32 = 3;

/// Spawn a single enemy with explicit attributes.
pub fn spawn_enemy(
    world: &mut World,
    id: EnemyId,
    x: f64,
    y: f64,
    size: f64,
    health: i32,
    distance: f64,
) -> Entity {
    world.spawn((
        Enemy { id },
        Point::new(x, y),
        BodySize { size },
        Health { hp: health },
        PathProgress { distance },
    ))
}

/// Spawn a demo wave: `count` enemies scattered around the origin with
/// jittered positions and increasing path progress. Seeded rng keeps the
/// layout reproducible.
pub fn spawn_enemy_wave(world: &mut World, rng: &mut ChaCha8Rng, next_id: &mut u32, count: usize) {
    for i in 0..count {
        let id = EnemyId(*next_id);
        *next_id += 1;

        let x = rng.gen_range(-100.0..100.0);
        let y = rng.gen_range(-100.0..100.0);
        let _ = spawn_enemy(
            world,
            id,
            x,
            y,
            WAVE_ENEMY_SIZE,
            WAVE_ENEMY_HEALTH,
            i as f64,
        );
    }
}
