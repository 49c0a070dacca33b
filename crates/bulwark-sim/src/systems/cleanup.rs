//! Cleanup system: despawns dead enemies and clears target handles that
//! point at them.

use hecs::{Entity, World};

use bulwark_core::components::{Enemy, EnemyId, Health, Tower};

/// Remove enemies whose health has reached zero. Uses a pre-allocated
/// buffer to avoid per-frame allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();
    let mut dead_ids: Vec<EnemyId> = Vec::new();

    for (entity, (enemy, health)) in world.query_mut::<(&Enemy, &Health)>() {
        if health.hp <= 0 {
            despawn_buffer.push(entity);
            dead_ids.push(enemy.id);
        }
    }

    // Target handles naming a dead enemy are cleared here rather than left
    // to dangle through the cooldown phase.
    if !dead_ids.is_empty() {
        for (_entity, tower) in world.query_mut::<&mut Tower>() {
            if let Some(target) = tower.current_target {
                if dead_ids.contains(&target) {
                    tower.current_target = None;
                }
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
