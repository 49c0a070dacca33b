//! Tower catalog — the immutable table mapping tower kinds to construction
//! metadata.
//!
//! Built once at session start and read-only thereafter. Registration
//! order defines the listing order exposed to the UI. Each entry holds a
//! prototype `AttackProfile` so static queries (range, price) never touch
//! a live tower.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::components::{AttackProfile, Tower, TowerId};
use crate::constants::*;
use crate::enums::TowerKind;
use crate::types::Point;

/// Querying a kind that was never registered is a catalog/config mismatch,
/// not a runtime game condition, so it fails loudly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("tower kind {0:?} is not registered in the catalog")]
    UnknownKind(TowerKind),
}

/// One catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TowerEntry {
    pub kind: TowerKind,
    pub base_price: u32,
    prototype: AttackProfile,
}

/// Registration-ordered catalog of tower kinds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TowerCatalog {
    entries: Vec<TowerEntry>,
}

impl TowerCatalog {
    /// An empty catalog. Only useful for tests building partial tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard catalog with all six kinds, in the canonical listing
    /// order.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register(TowerKind::Shoot, SHOOT_PRICE);
        catalog.register(TowerKind::Bomb, BOMB_PRICE);
        catalog.register(TowerKind::Laser, LASER_PRICE);
        catalog.register(TowerKind::Monkey, MONKEY_PRICE);
        catalog.register(TowerKind::Sniper, SNIPER_PRICE);
        catalog.register(TowerKind::Missile, MISSILE_PRICE);
        catalog
    }

    /// Register a kind with its base price. Re-registering a kind replaces
    /// its entry without changing its listing position.
    pub fn register(&mut self, kind: TowerKind, base_price: u32) {
        let entry = TowerEntry {
            kind,
            base_price,
            prototype: attack_profile(kind),
        };
        match self.entries.iter_mut().find(|e| e.kind == kind) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    /// Construct a fresh live tower of the given kind at (x, y). The
    /// caller supplies the id; the session allocates them.
    pub fn instantiate(
        &self,
        kind: TowerKind,
        id: TowerId,
        x: f64,
        y: f64,
    ) -> Result<(Point, Tower), CatalogError> {
        let entry = self.entry(kind)?;
        Ok((Point::new(x, y), Tower::new(id, kind, entry.prototype)))
    }

    /// Nominal range of the given kind, via the prototype.
    pub fn range(&self, kind: TowerKind) -> Result<f64, CatalogError> {
        Ok(self.entry(kind)?.prototype.range)
    }

    /// Base purchase price of the given kind.
    pub fn base_price(&self, kind: TowerKind) -> Result<u32, CatalogError> {
        Ok(self.entry(kind)?.base_price)
    }

    /// Registered kinds in listing order.
    pub fn kinds(&self) -> impl Iterator<Item = TowerKind> + '_ {
        self.entries.iter().map(|e| e.kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, kind: TowerKind) -> Result<&TowerEntry, CatalogError> {
        self.entries
            .iter()
            .find(|e| e.kind == kind)
            .ok_or(CatalogError::UnknownKind(kind))
    }
}

/// Fixed attack parameters for each kind. Beam kinds leave the projectile
/// travel fields at their zero defaults; they never emit a projectile.
fn attack_profile(kind: TowerKind) -> AttackProfile {
    match kind {
        TowerKind::Shoot => AttackProfile {
            range: SHOOT_RANGE,
            fire_rate: SHOOT_FIRE_RATE,
            projectile_speed: SHOOT_PROJECTILE_SPEED,
            projectile_pierce: SHOOT_PROJECTILE_PIERCE,
            projectile_damage: SHOOT_PROJECTILE_DAMAGE,
            projectile_lifespan: SHOOT_PROJECTILE_LIFESPAN,
            projectile_size: SHOOT_PROJECTILE_SIZE,
            ..AttackProfile::default()
        },
        TowerKind::Monkey => AttackProfile {
            range: MONKEY_RANGE,
            fire_rate: MONKEY_FIRE_RATE,
            projectile_speed: MONKEY_PROJECTILE_SPEED,
            projectile_pierce: MONKEY_PROJECTILE_PIERCE,
            projectile_damage: MONKEY_PROJECTILE_DAMAGE,
            projectile_lifespan: MONKEY_PROJECTILE_LIFESPAN,
            projectile_size: MONKEY_PROJECTILE_SIZE,
            ..AttackProfile::default()
        },
        TowerKind::Laser => AttackProfile {
            range: LASER_RANGE,
            fire_rate: LASER_FIRE_RATE,
            projectile_damage: LASER_DAMAGE,
            ..AttackProfile::default()
        },
        TowerKind::Sniper => AttackProfile {
            range: SNIPER_RANGE,
            fire_rate: SNIPER_FIRE_RATE,
            projectile_damage: SNIPER_DAMAGE,
            ..AttackProfile::default()
        },
        TowerKind::Bomb => AttackProfile {
            range: BOMB_RANGE,
            fire_rate: BOMB_FIRE_RATE,
            projectile_speed: BOMB_PROJECTILE_SPEED,
            projectile_pierce: BOMB_PROJECTILE_PIERCE,
            projectile_damage: BOMB_PROJECTILE_DAMAGE,
            projectile_lifespan: BOMB_PROJECTILE_LIFESPAN,
            projectile_size: BOMB_PROJECTILE_SIZE,
            explosion_size: BOMB_EXPLOSION_SIZE,
        },
        TowerKind::Missile => AttackProfile {
            range: MISSILE_RANGE,
            fire_rate: MISSILE_FIRE_RATE,
            projectile_speed: MISSILE_PROJECTILE_SPEED,
            projectile_pierce: MISSILE_PROJECTILE_PIERCE,
            projectile_damage: MISSILE_PROJECTILE_DAMAGE,
            projectile_lifespan: MISSILE_PROJECTILE_LIFESPAN,
            projectile_size: MISSILE_PROJECTILE_SIZE,
            explosion_size: MISSILE_EXPLOSION_SIZE,
        },
    }
}
