//! Shared numeric constants for the cube crate.

// ── Config defaults ─────────────────────────────────────────────

pub const DEFAULT_SEED: u64 = 1;
pub const DEFAULT_OBSTACLES: usize = 40;
pub const DEFAULT_WORLD_WIDTH: f64 = 2000.0;
pub const DEFAULT_WORLD_HEIGHT: f64 = 2000.0;
/// Cube speed in world pixels per second.
pub const DEFAULT_SPEED: f64 = 240.0;

/// Smallest world edge accepted from configuration.
pub const MIN_WORLD_SIZE: f64 = 400.0;
/// Largest obstacle count accepted from configuration.
pub const MAX_OBSTACLES: usize = 500;

// ── World ───────────────────────────────────────────────────────

/// Edge length of the player cube.
pub const PLAYER_SIZE: f64 = 32.0;

/// Obstacle edge lengths are drawn uniformly from this range.
pub const OBSTACLE_MIN_SIZE: f64 = 20.0;
pub const OBSTACLE_MAX_SIZE: f64 = 120.0;

/// Free space kept around the spawn point on every side.
pub const SPAWN_CLEARANCE: f64 = 64.0;

/// Longest single move during a step. Below both the cube and the smallest
/// obstacle, so collisions are never skipped.
pub const MAX_SUBSTEP_PX: f64 = 10.0;

/// Placement attempts per requested obstacle before giving up.
pub const PLACEMENT_ATTEMPTS: usize = 20;

// ── Camera ──────────────────────────────────────────────────────

pub const ZOOM_MIN: f64 = 0.25;
pub const ZOOM_MAX: f64 = 4.0;

/// Zoom levels toggled by double-tap.
pub const ZOOM_NEAR: f64 = 2.0;
pub const ZOOM_FAR: f64 = 1.0;

/// Exponential follow rate, per second.
pub const FOLLOW_RATE: f64 = 8.0;

/// Rate at which the free-look offset returns to zero, per second.
pub const LOOK_RETURN_RATE: f64 = 6.0;

/// Frames longer than this are clamped so a backgrounded tab does not
/// teleport the cube through walls.
pub const MAX_FRAME_SECONDS: f64 = 0.1;

// ── Rendering ───────────────────────────────────────────────────

pub const GRID_SPACING: f64 = 100.0;
