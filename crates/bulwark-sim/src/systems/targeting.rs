//! Targeting selector: picks one enemy from an in-range candidate set.

use hecs::{Entity, World};

use bulwark_core::components::{BodySize, Enemy, EnemyId, Health, PathProgress};
use bulwark_core::enums::TargetingPolicy;
use bulwark_core::types::Point;

/// Per-frame view of one enemy, copied out of the world so the tower pass
/// never holds an enemy query borrow.
#[derive(Debug, Clone, Copy)]
pub struct EnemySnapshot {
    pub entity: Entity,
    pub id: EnemyId,
    pub position: Point,
    pub size: f64,
    pub health: i32,
    /// Progress along the enemy's path.
    pub distance: f64,
}

/// Collects all live enemies into `out`, sorted by id. Id order defines
/// the candidate sequence, which makes tie-breaks deterministic.
pub fn collect_enemies(world: &World, out: &mut Vec<EnemySnapshot>) {
    out.clear();
    for (entity, (enemy, pos, body, health, progress)) in world
        .query::<(&Enemy, &Point, &BodySize, &Health, &PathProgress)>()
        .iter()
    {
        out.push(EnemySnapshot {
            entity,
            id: enemy.id,
            position: *pos,
            size: body.size,
            health: health.hp,
            distance: progress.distance,
        });
    }
    out.sort_by_key(|e| e.id);
}

/// Chooses the best candidate under `policy`. Linear scan with strict
/// comparisons, so ties keep the earlier candidate.
///
/// `First` takes the candidate furthest along the path (highest
/// `distance`), `Last` the least advanced; `Strong` the lowest health;
/// `Close` the smallest squared distance to `origin`.
///
/// `candidates` must be non-empty. The fire-decision phase filters for
/// range and skips empty sets before getting here.
pub fn select_target<'a>(
    origin: Point,
    candidates: &'a [EnemySnapshot],
    policy: TargetingPolicy,
) -> &'a EnemySnapshot {
    let mut best = &candidates[0];
    for candidate in candidates {
        let better = match policy {
            TargetingPolicy::First => candidate.distance > best.distance,
            TargetingPolicy::Last => candidate.distance < best.distance,
            TargetingPolicy::Strong => candidate.health < best.health,
            TargetingPolicy::Close => {
                origin.squared_distance_to(&candidate.position)
                    < origin.squared_distance_to(&best.position)
            }
        };
        if better {
            best = candidate;
        }
    }
    best
}
