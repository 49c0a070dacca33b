//! ECS components for the simulation world.
//!
//! Components are plain data structs with no game logic.
//! Behavior lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{TargetingPolicy, TowerKind};

/// Stable tower handle, assigned at placement. Never reused.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TowerId(pub u32);

/// Stable enemy handle, assigned at spawn. Never reused, so a stale id
/// held across frames dereferences to nothing rather than to a new enemy.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct EnemyId(pub u32);

/// Fixed attack parameters for one tower kind, set at construction.
/// Also serves as the catalog prototype for static range/price queries.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttackProfile {
    /// Nominal targeting radius (world units). Effective range is inflated
    /// by half the enemy's body size.
    pub range: f64,
    /// Frames between shots.
    pub fire_rate: u32,
    pub projectile_speed: f64,
    pub projectile_pierce: u32,
    pub projectile_damage: i32,
    pub projectile_lifespan: u32,
    pub projectile_size: f64,
    /// Blast radius carried by area-effect payloads. Zero for the rest.
    pub explosion_size: f64,
}

impl Default for AttackProfile {
    fn default() -> Self {
        Self {
            range: DEFAULT_RANGE,
            fire_rate: DEFAULT_FIRE_RATE,
            projectile_speed: 0.0,
            projectile_pierce: 0,
            projectile_damage: 0,
            projectile_lifespan: 0,
            projectile_size: 0.0,
            explosion_size: 0.0,
        }
    }
}

/// A placed tower. Position lives in a separate `Point` component and is
/// immutable after placement; towers do not move.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tower {
    pub id: TowerId,
    pub kind: TowerKind,
    /// Orientation in radians. Updated every frame a target is chosen;
    /// not wrapped to `[0, 2π)`.
    pub theta: f64,
    /// Frames until the next permitted shot. Zero means ready.
    pub cooldown_remaining: u32,
    pub attack: AttackProfile,
    /// Externally settable; defaults to `Close` so the first fire decision
    /// is always well-defined.
    pub targeting: TargetingPolicy,
    /// Weak reference to the enemy chosen by the last fire decision.
    /// Recomputed whenever the tower is ready to fire; cleared when the
    /// enemy dies or no candidate is in range.
    pub current_target: Option<EnemyId>,
    /// Cursor is inside the bounding box this frame. UI emphasis only.
    pub is_hovered: bool,
    /// This tower holds the session's selection focus. UI emphasis only.
    pub is_selected: bool,
}

impl Tower {
    pub fn new(id: TowerId, kind: TowerKind, attack: AttackProfile) -> Self {
        Self {
            id,
            kind,
            theta: 0.0,
            cooldown_remaining: 0,
            attack,
            targeting: TargetingPolicy::default(),
            current_target: None,
            is_hovered: false,
            is_selected: false,
        }
    }
}

/// Marks an entity as an enemy and carries its stable id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub id: EnemyId,
}

/// Remaining hit points. Enemies at or below zero are despawned by the
/// cleanup system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub hp: i32,
}

/// Progress along the enemy's path. Higher means more advanced.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PathProgress {
    pub distance: f64,
}

/// Enemy body diameter. Half of it inflates a tower's effective range so
/// large enemies are engageable before their center crosses the nominal
/// radius.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodySize {
    pub size: f64,
}
