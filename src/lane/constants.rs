//! Lane battle constants - reference tuning in one place
//!
//! `MatchConfig::default()` is built from these values.

// Playfield
pub const PLAYFIELD_WIDTH: i32 = 800;
pub const PLAYFIELD_HEIGHT: i32 = 600;

// Entity sizes
pub const UNIT_SIZE: i32 = 50;
pub const BASE_SIZE: i32 = 100;
pub const BASE_EDGE_MARGIN: i32 = 50; // gap between a base and its screen edge
pub const PROJECTILE_WIDTH: i32 = 30;
pub const PROJECTILE_HEIGHT: i32 = 10;

// Bases
pub const BASE_MAX_HEALTH: i32 = 1000;

// Unit profiles: friendlies are tanky and slow, hostiles fast and weak
pub const FRIENDLY_HEALTH: i32 = 100;
pub const FRIENDLY_ATTACK: i32 = 10;
pub const FRIENDLY_VELOCITY: i32 = 2;
pub const HOSTILE_HEALTH: i32 = 100;
pub const HOSTILE_ATTACK: i32 = 5;
pub const HOSTILE_VELOCITY: i32 = -5;

// Projectiles (pixels per tick)
pub const PROJECTILE_VELOCITY_X: i32 = 5;
pub const PROJECTILE_VELOCITY_Y: i32 = 0;

// Rules
pub const TICK_RATE: u32 = 60;
pub const HOSTILE_SPAWN_INTERVAL_TICKS: u32 = 60; // one per second at TICK_RATE
pub const FRIENDLY_SPAWN_COST: u32 = 100;
pub const KILL_BONUS: u32 = 20;

// Economy
pub const ECONOMY_INITIAL_RATE: u32 = 1;
pub const ECONOMY_INITIAL_BALANCE: u32 = 0;
pub const ECONOMY_INITIAL_CAP: u32 = 500;
pub const ECONOMY_CAP_STEP: u32 = 500;
pub const ECONOMY_MAX_LEVEL: u32 = 5;
pub const LEVEL_UP_COST_PERCENT: u32 = 80; // cost = 0.8 x cap
