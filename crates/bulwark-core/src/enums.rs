//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// The closed set of tower kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TowerKind {
    /// Standard projectile tower, medium range.
    Shoot,
    /// Slow area-effect projectile, short range.
    Bomb,
    /// Instantaneous beam, damage applied directly to the target.
    Laser,
    /// Rapid-fire projectile tower.
    Monkey,
    /// Long-range, high-damage beam.
    Sniper,
    /// Homing area-effect projectile carrying its own targeting data.
    Missile,
}

/// Rule used to pick one enemy from the in-range candidate set.
///
/// `First` selects the candidate with the *highest* path progress (the one
/// furthest along the path, i.e. most advanced) and `Last` the lowest.
/// The naming is inverted from plain English and is kept that way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetingPolicy {
    /// Highest path progress.
    First,
    /// Lowest path progress.
    Last,
    /// Smallest squared distance to the tower.
    #[default]
    Close,
    /// Lowest remaining health.
    Strong,
}

/// Visual emphasis for a tower. Derived each frame, never authoritative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HighlightColor {
    /// Normal appearance.
    #[default]
    Solid,
    /// Hovered or selected.
    UltraBright,
}

/// Stroke cap style for draw primitives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineCap {
    #[default]
    Butt,
    Square,
    Round,
}
