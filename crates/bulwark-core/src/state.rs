//! Frame snapshot — the complete visible state handed to the session/UI
//! after each frame.

use serde::{Deserialize, Serialize};

use crate::components::{EnemyId, TowerId};
use crate::enums::{HighlightColor, TargetingPolicy, TowerKind};
use crate::events::{AttackEmission, AudioEvent, ParticleEffect};
use crate::types::{Point, SimTime};

/// Complete frame state. Views are sorted by id so serialized snapshots
/// are byte-stable for a given world state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub towers: Vec<TowerView>,
    pub enemies: Vec<EnemyView>,
    /// Attacks emitted this frame, for the session's projectile registry.
    pub emissions: Vec<AttackEmission>,
    /// Visual effects emitted this frame.
    pub particles: Vec<ParticleEffect>,
    /// Audio cues emitted this frame.
    pub audio_events: Vec<AudioEvent>,
    /// The tower currently holding selection focus, if any.
    pub selected_tower: Option<TowerId>,
}

/// One tower as visible to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerView {
    pub id: TowerId,
    pub kind: TowerKind,
    pub position: Point,
    /// Orientation in radians.
    pub theta: f64,
    pub range: f64,
    pub fire_rate: u32,
    pub cooldown_remaining: u32,
    pub targeting: TargetingPolicy,
    /// Derived emphasis: `UltraBright` when hovered or selected.
    pub color: HighlightColor,
    pub is_hovered: bool,
    pub is_selected: bool,
    /// Target chosen by the last fire decision. May name an enemy that
    /// died this frame; consumers must treat it as a weak reference.
    pub current_target: Option<EnemyId>,
}

/// One enemy as visible to the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: EnemyId,
    pub position: Point,
    pub size: f64,
    pub health: i32,
    /// Progress along the path.
    pub distance: f64,
}
