//! Fire control system — runs each tower's cooldown and fire-decision
//! phases and dispatches the kind-specific fire behavior.

use hecs::{Entity, World};
use tracing::trace;

use bulwark_core::components::{Health, Tower};
use bulwark_core::constants::{LASER_BURST_COUNT, LASER_BURST_SIZE};
use bulwark_core::enums::TowerKind;
use bulwark_core::events::{AttackEmission, AudioEvent, ParticleEffect, ProjectilePayload};
use bulwark_core::types::Point;

use crate::systems::targeting::{self, EnemySnapshot};

/// Run the fire control system for one frame.
///
/// Each tower either counts down its cooldown or makes a fire decision:
/// filter the enemy set to candidates within `(range + size/2)²`, select a
/// target, orient toward it, fire, and reset the cooldown. A tower fires
/// at most once per frame. Emissions land in buffers, never in the enemy
/// collection, so no tower observes another's same-frame shots.
pub fn run(
    world: &mut World,
    enemy_scratch: &mut Vec<EnemySnapshot>,
    candidate_scratch: &mut Vec<EnemySnapshot>,
    emissions: &mut Vec<AttackEmission>,
    particles: &mut Vec<ParticleEffect>,
    audio_events: &mut Vec<AudioEvent>,
) {
    targeting::collect_enemies(world, enemy_scratch);

    // Beam damage is recorded during the tower pass and applied after it,
    // once the tower query borrow is released.
    let mut direct_hits: Vec<(Entity, i32)> = Vec::new();

    for (_entity, (tower, pos)) in world.query_mut::<(&mut Tower, &Point)>() {
        if tower.cooldown_remaining > 0 {
            tower.cooldown_remaining -= 1;
            continue;
        }

        candidate_scratch.clear();
        for enemy in enemy_scratch.iter() {
            let effective_range = tower.attack.range + enemy.size / 2.0;
            if pos.squared_distance_to(&enemy.position) < effective_range * effective_range {
                candidate_scratch.push(*enemy);
            }
        }

        if candidate_scratch.is_empty() {
            tower.current_target = None;
            continue;
        }

        let target = *targeting::select_target(*pos, candidate_scratch, tower.targeting);
        tower.theta = pos.angle_to(&target.position);
        tower.current_target = Some(target.id);

        trace!(
            tower = tower.id.0,
            target = target.id.0,
            kind = ?tower.kind,
            "tower fired"
        );
        fire(
            tower,
            *pos,
            &target,
            emissions,
            particles,
            audio_events,
            &mut direct_hits,
        );

        tower.cooldown_remaining = tower.attack.fire_rate;
    }

    for (entity, damage) in direct_hits {
        if let Ok(mut health) = world.get::<&mut Health>(entity) {
            health.hp -= damage;
        }
    }
}

/// Dispatch the kind-specific fire behavior for a tower that has a live
/// target this frame.
fn fire(
    tower: &Tower,
    origin: Point,
    target: &EnemySnapshot,
    emissions: &mut Vec<AttackEmission>,
    particles: &mut Vec<ParticleEffect>,
    audio_events: &mut Vec<AudioEvent>,
    direct_hits: &mut Vec<(Entity, i32)>,
) {
    let payload = ProjectilePayload {
        speed: tower.attack.projectile_speed,
        pierce: tower.attack.projectile_pierce,
        damage: tower.attack.projectile_damage,
        lifespan: tower.attack.projectile_lifespan,
        size: tower.attack.projectile_size,
    };

    match tower.kind {
        TowerKind::Shoot | TowerKind::Monkey => {
            emissions.push(AttackEmission::Projectile {
                origin,
                theta: tower.theta,
                payload,
            });
            audio_events.push(AudioEvent::Shoot);
        }
        TowerKind::Laser | TowerKind::Sniper => {
            // Instantaneous beam: damage bypasses projectile travel and
            // collision entirely.
            particles.push(ParticleEffect::LaserBeam {
                from: origin,
                to: target.position,
            });
            particles.push(ParticleEffect::Explosion {
                at: target.position,
                size: LASER_BURST_SIZE,
                count: LASER_BURST_COUNT,
            });
            audio_events.push(AudioEvent::ShootLaser);
            direct_hits.push((target.entity, tower.attack.projectile_damage));
        }
        TowerKind::Bomb => {
            emissions.push(AttackEmission::Bomb {
                origin,
                theta: tower.theta,
                payload,
                explosion_size: tower.attack.explosion_size,
            });
            audio_events.push(AudioEvent::Shoot);
        }
        TowerKind::Missile => {
            // The policy is read here, at fire time, so in-flight
            // re-targeting follows whatever the player last set.
            emissions.push(AttackEmission::Missile {
                origin,
                theta: tower.theta,
                payload,
                explosion_size: tower.attack.explosion_size,
                target: target.id,
                policy: tower.targeting,
            });
            audio_events.push(AudioEvent::Shoot);
        }
    }
}
