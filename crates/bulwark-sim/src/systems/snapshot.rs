//! Snapshot system: queries the ECS world and builds a complete
//! `FrameSnapshot`.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use bulwark_core::components::{BodySize, Enemy, Health, PathProgress, Tower, TowerId};
use bulwark_core::enums::HighlightColor;
use bulwark_core::events::{AttackEmission, AudioEvent, ParticleEffect};
use bulwark_core::state::{EnemyView, FrameSnapshot, TowerView};
use bulwark_core::types::{Point, SimTime};

/// Build a complete `FrameSnapshot` from the current world state. The
/// per-frame buffers are moved in; the engine has already drained them.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    selected_tower: Option<TowerId>,
    emissions: Vec<AttackEmission>,
    particles: Vec<ParticleEffect>,
    audio_events: Vec<AudioEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        towers: build_towers(world),
        enemies: build_enemies(world),
        emissions,
        particles,
        audio_events,
        selected_tower,
    }
}

/// Build TowerView list from all tower entities, sorted by id.
fn build_towers(world: &World) -> Vec<TowerView> {
    let mut towers: Vec<TowerView> = world
        .query::<(&Tower, &Point)>()
        .iter()
        .map(|(_, (tower, pos))| TowerView {
            id: tower.id,
            kind: tower.kind,
            position: *pos,
            theta: tower.theta,
            range: tower.attack.range,
            fire_rate: tower.attack.fire_rate,
            cooldown_remaining: tower.cooldown_remaining,
            targeting: tower.targeting,
            color: if tower.is_hovered || tower.is_selected {
                HighlightColor::UltraBright
            } else {
                HighlightColor::Solid
            },
            is_hovered: tower.is_hovered,
            is_selected: tower.is_selected,
            current_target: tower.current_target,
        })
        .collect();

    towers.sort_by_key(|t| t.id);
    towers
}

/// Build EnemyView list from all enemy entities, sorted by id.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Point, &BodySize, &Health, &PathProgress)>()
        .iter()
        .map(|(_, (enemy, pos, body, health, progress))| EnemyView {
            id: enemy.id,
            position: *pos,
            size: body.size,
            health: health.hp,
            distance: progress.distance,
        })
        .collect();

    enemies.sort_by_key(|e| e.id);
    enemies
}
