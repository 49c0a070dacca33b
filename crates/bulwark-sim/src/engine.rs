//! Session engine — the per-frame driver.
//!
//! `SessionEngine` owns the hecs ECS world, processes player commands,
//! runs all systems in a fixed order, and produces `FrameSnapshot`s.
//! Completely headless (no rendering or audio backend), enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use bulwark_core::catalog::{CatalogError, TowerCatalog};
use bulwark_core::commands::PlayerCommand;
use bulwark_core::components::{Enemy, EnemyId, Tower, TowerId};
use bulwark_core::enums::TowerKind;
use bulwark_core::events::{AttackEmission, AudioEvent, ParticleEffect};
use bulwark_core::state::FrameSnapshot;
use bulwark_core::types::{CursorState, SimTime};

use crate::systems;
use crate::systems::targeting::EnemySnapshot;
use crate::world_setup;

/// Configuration for starting a new session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for demo-wave spawning. Same seed = same layout.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The session engine. Owns the ECS world and all per-frame state.
pub struct SessionEngine {
    world: World,
    time: SimTime,
    catalog: TowerCatalog,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    next_tower_id: u32,
    next_enemy_id: u32,
    selected_tower: Option<TowerId>,
    emissions: Vec<AttackEmission>,
    particles: Vec<ParticleEffect>,
    audio_events: Vec<AudioEvent>,
    despawn_buffer: Vec<Entity>,
    enemy_scratch: Vec<EnemySnapshot>,
    candidate_scratch: Vec<EnemySnapshot>,
}

impl SessionEngine {
    /// Create a new session engine with the standard tower catalog.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            catalog: TowerCatalog::standard(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            next_tower_id: 0,
            next_enemy_id: 0,
            selected_tower: None,
            emissions: Vec::new(),
            particles: Vec::new(),
            audio_events: Vec::new(),
            despawn_buffer: Vec::new(),
            enemy_scratch: Vec::new(),
            candidate_scratch: Vec::new(),
        }
    }

    /// Queue a player command for processing at the next frame boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one frame and return the resulting
    /// snapshot.
    pub fn step(&mut self, cursor: CursorState) -> FrameSnapshot {
        self.process_commands();

        // 1. Hover + click selection; the engine arbitrates focus.
        if let Some(clicked) =
            systems::selection::run(&mut self.world, cursor, &mut self.audio_events)
        {
            debug!(tower = clicked.0, "tower selected");
            self.selected_tower = Some(clicked);
        }
        systems::selection::apply_focus(&mut self.world, self.selected_tower);

        // 2. Cooldown, targeting, and fire for every tower.
        systems::fire_control::run(
            &mut self.world,
            &mut self.enemy_scratch,
            &mut self.candidate_scratch,
            &mut self.emissions,
            &mut self.particles,
            &mut self.audio_events,
        );

        // 3. Despawn dead enemies, clear handles naming them.
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        // 4. Snapshot; buffers drain into it.
        let emissions = std::mem::take(&mut self.emissions);
        let particles = std::mem::take(&mut self.particles);
        let audio_events = std::mem::take(&mut self.audio_events);
        let snapshot = systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.selected_tower,
            emissions,
            particles,
            audio_events,
        );

        self.time.advance();
        snapshot
    }

    /// Place a tower of the given kind via the catalog. Returns its id.
    pub fn place_tower(&mut self, kind: TowerKind, x: f64, y: f64) -> Result<TowerId, CatalogError> {
        let id = TowerId(self.next_tower_id);
        let (pos, tower) = self.catalog.instantiate(kind, id, x, y)?;
        self.next_tower_id += 1;
        let _ = self.world.spawn((tower, pos));
        debug!(?kind, tower = id.0, x, y, "tower placed");
        Ok(id)
    }

    /// Spawn an enemy with explicit attributes. Returns its id. Ids are
    /// never reused, so stale references dereference to nothing.
    pub fn spawn_enemy(&mut self, x: f64, y: f64, size: f64, health: i32, distance: f64) -> EnemyId {
        let id = EnemyId(self.next_enemy_id);
        self.next_enemy_id += 1;
        let _ = world_setup::spawn_enemy(&mut self.world, id, x, y, size, health, distance);
        id
    }

    /// Despawn the enemy with the given id. Returns whether it existed.
    pub fn despawn_enemy(&mut self, id: EnemyId) -> bool {
        let entity = {
            let mut query = self.world.query::<&Enemy>();
            query
                .iter()
                .find(|(_, enemy)| enemy.id == id)
                .map(|(entity, _)| entity)
        };
        match entity {
            Some(entity) => {
                let _ = self.world.despawn(entity);
                true
            }
            None => false,
        }
    }

    /// Spawn a seeded demo wave of enemies (scenarios and tests).
    pub fn spawn_enemy_wave(&mut self, count: usize) {
        world_setup::spawn_enemy_wave(
            &mut self.world,
            &mut self.rng,
            &mut self.next_enemy_id,
            count,
        );
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the tower catalog.
    pub fn catalog(&self) -> &TowerCatalog {
        &self.catalog
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The tower currently holding selection focus, if any.
    pub fn selected_tower(&self) -> Option<TowerId> {
        self.selected_tower
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::PlaceTower { kind, x, y } => {
                if let Err(err) = self.place_tower(kind, x, y) {
                    warn!(%err, "tower placement rejected");
                }
            }
            PlayerCommand::SetTargetingPolicy { tower, policy } => {
                for (_entity, t) in self.world.query_mut::<&mut Tower>() {
                    if t.id == tower {
                        t.targeting = policy;
                    }
                }
            }
            PlayerCommand::SelectTower { tower } => {
                let exists = {
                    let mut query = self.world.query::<&Tower>();
                    query.iter().any(|(_, t)| t.id == tower)
                };
                if exists {
                    self.selected_tower = Some(tower);
                }
            }
            PlayerCommand::Deselect => {
                self.selected_tower = None;
            }
        }
    }
}
