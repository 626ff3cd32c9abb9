//! Tuning constants for the simulation, loadable from YAML.

use cubeshot_input::KeyBindings;
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Errors from loading or validating a [`GameConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Every tunable number the simulation reads.
///
/// Missing fields in a YAML document fall back to the defaults, so a config
/// file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Distance the player moves per frame per held direction.
    pub player_step: f32,
    /// Player x and z are clamped to `[-arena_bound, arena_bound]`.
    pub arena_bound: f32,
    /// Player position at start and after every restart.
    pub player_spawn: Vec3,
    /// Projectile forward speed, in units per frame.
    pub projectile_speed: f32,
    /// Projectiles past this z are removed.
    pub projectile_max_z: f32,
    /// New projectiles appear this far in front of the player along z.
    pub muzzle_offset: f32,
    pub fire_cooldown_ms: u64,
    /// Enemy speed at the start of every round, in units per frame.
    pub enemy_initial_speed: f32,
    pub spawn_interval_ms: u64,
    /// Spawned enemies get x uniform in `[-spawn_half_width, spawn_half_width)`.
    pub spawn_half_width: f32,
    pub spawn_z: f32,
    pub spawn_height: f32,
    /// Two entities closer than this collide.
    pub hit_radius: f32,
    /// Enemy speed doubles each time the score reaches a multiple of this.
    pub score_milestone: u32,
    pub ground_spacing: f32,
    /// A tile further than this behind the player is moved forward.
    pub ground_recycle_distance: f32,
    pub camera_height: f32,
    /// How far behind the player (along -z) the chase camera sits.
    pub camera_distance: f32,
    /// Restart inside the collision that ended the game instead of halting.
    pub auto_restart: bool,
    pub keys: KeyBindings,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_step: 0.1,
            arena_bound: 100.0,
            player_spawn: Vec3::new(0.0, 0.5, 0.0),
            projectile_speed: 0.5,
            projectile_max_z: 10.0,
            muzzle_offset: 1.0,
            fire_cooldown_ms: 300,
            enemy_initial_speed: 0.02,
            spawn_interval_ms: 2000,
            spawn_half_width: 20.0,
            spawn_z: 10.0,
            spawn_height: 0.5,
            hit_radius: 1.0,
            score_milestone: 10,
            ground_spacing: 200.0,
            ground_recycle_distance: 100.0,
            camera_height: 2.0,
            camera_distance: 5.0,
            auto_restart: false,
            keys: KeyBindings::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a YAML document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a YAML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&yaml)?;
        tracing::debug!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn fire_cooldown(&self) -> Duration {
        Duration::from_millis(self.fire_cooldown_ms)
    }

    pub fn spawn_interval(&self) -> Duration {
        Duration::from_millis(self.spawn_interval_ms)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("player_step", self.player_step),
            ("arena_bound", self.arena_bound),
            ("projectile_speed", self.projectile_speed),
            ("enemy_initial_speed", self.enemy_initial_speed),
            ("spawn_half_width", self.spawn_half_width),
            ("hit_radius", self.hit_radius),
            ("ground_spacing", self.ground_spacing),
            ("ground_recycle_distance", self.ground_recycle_distance),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must be a finite number greater than zero",
                });
            }
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "spawn_interval_ms",
                reason: "must be at least 1",
            });
        }
        if self.score_milestone == 0 {
            return Err(ConfigError::Invalid {
                field: "score_milestone",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}
