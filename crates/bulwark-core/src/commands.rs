//! Player commands sent from the UI to the simulation.
//!
//! Commands are queued and processed at the next frame boundary.

use serde::{Deserialize, Serialize};

use crate::components::TowerId;
use crate::enums::{TargetingPolicy, TowerKind};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Place a new tower of the given kind. Purchase validation is the
    /// caller's concern; the catalog only exposes the base price.
    PlaceTower { kind: TowerKind, x: f64, y: f64 },
    /// Change a tower's targeting policy.
    SetTargetingPolicy {
        tower: TowerId,
        policy: TargetingPolicy,
    },
    /// Give a tower the session's selection focus.
    SelectTower { tower: TowerId },
    /// Clear the selection focus.
    Deselect,
}
