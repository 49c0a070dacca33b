//! Events emitted by the simulation for the session's audio, particle, and
//! projectile registries. The session appends them; nothing in the core
//! ever reads them back.

use serde::{Deserialize, Serialize};

use crate::components::EnemyId;
use crate::enums::TargetingPolicy;
use crate::types::Point;

/// Audio cues for the session's sound system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A projectile-emitting tower fired.
    Shoot,
    /// A beam tower fired.
    ShootLaser,
    /// A tower was clicked and took selection focus.
    Open,
}

/// Visual effects appended to the session's particle registry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParticleEffect {
    /// Instantaneous beam from a laser tower to its target.
    LaserBeam { from: Point, to: Point },
    /// Burst effect at a point of impact.
    Explosion { at: Point, size: f64, count: u32 },
}

/// Damage/travel parameters carried by every emitted attack.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectilePayload {
    pub speed: f64,
    pub pierce: u32,
    pub damage: i32,
    pub lifespan: u32,
    pub size: f64,
}

/// An attack appended to the session's projectile registry. The projectile
/// flight model itself is external; these records are the full handoff.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AttackEmission {
    /// Straight-line projectile along the tower's orientation.
    Projectile {
        origin: Point,
        theta: f64,
        payload: ProjectilePayload,
    },
    /// Area-effect projectile with a blast radius.
    Bomb {
        origin: Point,
        theta: f64,
        payload: ProjectilePayload,
        explosion_size: f64,
    },
    /// Homing attack. Carries a live reference to the target and the
    /// firing tower's targeting policy as read at fire time, for the
    /// missile's own in-flight re-targeting.
    Missile {
        origin: Point,
        theta: f64,
        payload: ProjectilePayload,
        explosion_size: f64,
        target: EnemyId,
        policy: TargetingPolicy,
    },
}
