//! Shooter kernel: authoritative game state and the per-frame simulation step.
//!
//! # Invariants
//! - Exactly one player; it is repositioned, never destroyed.
//! - Ground tile count is constant.
//! - Enemy speed changes only at score milestones or on restart.
//! - No enemy or projectile survives a restart.
//! - All state mutations flow through explicit `World` operations.

pub mod camera;
pub mod collision;
pub mod config;
pub mod entity;
pub mod lifecycle;
pub mod score;
pub mod spawner;
pub mod world;

pub use camera::ChaseCamera;
pub use config::{ConfigError, GameConfig};
pub use entity::{Enemy, GROUND_TILE_COUNT, GroundTile, Player, Projectile};
pub use lifecycle::{Lifecycle, Phase};
pub use score::Scoreboard;
pub use spawner::Spawner;
pub use world::{StepOutcome, World, WorldEvent};

pub fn crate_info() -> &'static str {
    "cubeshot-kernel v0.1.0"
}
