//! Simulation constants and per-kind tuning parameters.

/// Side length of a tower's bounding box (world units). Hover detection
/// and the body circle both derive from this.
pub const TOWER_SIZE: f64 = 10.0;

// --- Base tower defaults ---

/// Nominal range before any kind-specific override (world units).
pub const DEFAULT_RANGE: f64 = 50.0;

/// Nominal frames between shots before any kind-specific override.
pub const DEFAULT_FIRE_RATE: u32 = 10;

// --- Shoot tower ---

pub const SHOOT_RANGE: f64 = 80.0;
pub const SHOOT_FIRE_RATE: u32 = 25;
pub const SHOOT_PROJECTILE_SPEED: f64 = 9.0;
pub const SHOOT_PROJECTILE_PIERCE: u32 = 2;
pub const SHOOT_PROJECTILE_DAMAGE: i32 = 1;
pub const SHOOT_PROJECTILE_LIFESPAN: u32 = 30;
pub const SHOOT_PROJECTILE_SIZE: f64 = 8.0;
pub const SHOOT_PRICE: u32 = 200;

// --- Monkey tower ---

pub const MONKEY_RANGE: f64 = 60.0;
pub const MONKEY_FIRE_RATE: u32 = 2;
pub const MONKEY_PROJECTILE_SPEED: f64 = 9.0;
pub const MONKEY_PROJECTILE_PIERCE: u32 = 1;
pub const MONKEY_PROJECTILE_DAMAGE: i32 = 1;
pub const MONKEY_PROJECTILE_LIFESPAN: u32 = 20;
pub const MONKEY_PROJECTILE_SIZE: f64 = 8.0;
pub const MONKEY_PRICE: u32 = 1000;

// --- Laser tower ---

pub const LASER_RANGE: f64 = 60.0;
pub const LASER_FIRE_RATE: u32 = 15;
pub const LASER_DAMAGE: i32 = 3;
pub const LASER_PRICE: u32 = 600;

/// Burst effect size at the beam's point of impact.
pub const LASER_BURST_SIZE: f64 = 10.0;

/// Number of burst effect fragments.
pub const LASER_BURST_COUNT: u32 = 5;

// --- Sniper (long-range laser) tower ---

pub const SNIPER_RANGE: f64 = 300.0;
pub const SNIPER_FIRE_RATE: u32 = 45;
pub const SNIPER_DAMAGE: i32 = 8;
pub const SNIPER_PRICE: u32 = 1000;

// --- Bomb tower ---

pub const BOMB_RANGE: f64 = 45.0;
pub const BOMB_FIRE_RATE: u32 = 60;
pub const BOMB_PROJECTILE_SPEED: f64 = 2.0;
pub const BOMB_PROJECTILE_PIERCE: u32 = 25;
pub const BOMB_PROJECTILE_DAMAGE: i32 = 1;
pub const BOMB_PROJECTILE_LIFESPAN: u32 = 90;
pub const BOMB_PROJECTILE_SIZE: f64 = 10.0;
pub const BOMB_EXPLOSION_SIZE: f64 = 30.0;
pub const BOMB_PRICE: u32 = 400;

// --- Missile tower ---

pub const MISSILE_RANGE: f64 = 110.0;
pub const MISSILE_FIRE_RATE: u32 = 30;
pub const MISSILE_PROJECTILE_SPEED: f64 = 8.0;
pub const MISSILE_PROJECTILE_PIERCE: u32 = 35;
pub const MISSILE_PROJECTILE_DAMAGE: i32 = 3;
pub const MISSILE_PROJECTILE_LIFESPAN: u32 = 240;
pub const MISSILE_PROJECTILE_SIZE: f64 = 10.0;
pub const MISSILE_EXPLOSION_SIZE: f64 = 40.0;
pub const MISSILE_PRICE: u32 = 1000;
