use cubeshot_common::EntityId;
use cubeshot_input::{Action, InputState};
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use crate::camera::ChaseCamera;
use crate::collision;
use crate::config::{ConfigError, GameConfig};
use crate::entity::{Enemy, GROUND_TILE_COUNT, GroundTile, Player, Projectile};
use crate::lifecycle::{Lifecycle, Phase};
use crate::score::Scoreboard;
use crate::spawner::Spawner;

/// An event record produced by every gameplay mutation.
///
/// Display collaborators (score line, game-over notice) and logs are driven
/// from these rather than by polling the world. The log keeps growing until
/// [`World::drain_events`] is called, so whoever drives the world drains it
/// once per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum WorldEvent {
    EnemySpawned { id: EntityId, position: Vec3 },
    ProjectileFired { id: EntityId, position: Vec3 },
    /// Projectile flew past the forward bound.
    ProjectileExpired { id: EntityId },
    EnemyDestroyed { enemy: EntityId, projectile: EntityId },
    ScoreChanged { score: u32 },
    /// A score milestone doubled the enemy speed.
    DifficultyRaised { score: u32, enemy_speed: f32 },
    GroundRecycled { tile: usize, z: f32 },
    GameOver { final_score: u32 },
    Restarted { round: u32 },
}

/// What the frame driver should do after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Schedule the next frame.
    Continue,
    /// The game is over; stop scheduling frames until a restart.
    GameOver { final_score: u32 },
}

/// The authoritative game state.
///
/// Everything the simulation touches lives here and is passed explicitly to
/// the frame driver; there is no global state. A seeded world reproduces the
/// same spawn positions and entity ids for the same sequence of inputs and
/// timestamps.
#[derive(Debug, Clone)]
pub struct World {
    config: GameConfig,
    player: Player,
    enemies: Vec<Enemy>,
    projectiles: Vec<Projectile>,
    ground: [GroundTile; GROUND_TILE_COUNT],
    camera: ChaseCamera,
    scoreboard: Scoreboard,
    lifecycle: Lifecycle,
    spawner: Spawner,
    last_shot: Option<Duration>,
    frame: u64,
    seed: u64,
    rng: SmallRng,
    event_log: Vec<WorldEvent>,
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl World {
    /// Default tuning, seed 0.
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    /// Build a world from `config`, rejecting values the simulation cannot
    /// run with (see [`GameConfig::validate`]).
    pub fn with_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: GameConfig, seed: u64) -> Self {
        Self {
            player: Player::new(config.player_spawn),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            ground: GroundTile::initial_pool(config.ground_spacing),
            camera: ChaseCamera::new(config.camera_height, config.camera_distance),
            scoreboard: Scoreboard::new(config.enemy_initial_speed, config.score_milestone),
            lifecycle: Lifecycle::default(),
            spawner: Spawner::new(&config),
            last_shot: None,
            frame: 0,
            seed,
            rng: SmallRng::seed_from_u64(seed),
            event_log: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn ground_tiles(&self) -> &[GroundTile; GROUND_TILE_COUNT] {
        &self.ground
    }

    pub fn camera(&self) -> &ChaseCamera {
        &self.camera
    }

    pub fn score(&self) -> u32 {
        self.scoreboard.score()
    }

    pub fn enemy_speed(&self) -> f32 {
        self.scoreboard.enemy_speed()
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    pub fn is_game_over(&self) -> bool {
        self.lifecycle.is_game_over()
    }

    pub fn round(&self) -> u32 {
        self.lifecycle.round()
    }

    /// Number of steps actually simulated (skipped steps do not count).
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Timestamp of the last successful shot, if any this round.
    pub fn last_shot(&self) -> Option<Duration> {
        self.last_shot
    }

    /// Drain and return the event log.
    pub fn drain_events(&mut self) -> Vec<WorldEvent> {
        std::mem::take(&mut self.event_log)
    }

    /// Read-only access to the event log.
    pub fn events(&self) -> &[WorldEvent] {
        &self.event_log
    }

    /// Place the player directly, bypassing input (clamped to the arena).
    pub fn set_player_position(&mut self, position: Vec3) {
        let bound = self.config.arena_bound;
        self.player.position = Vec3::new(
            position.x.clamp(-bound, bound),
            position.y,
            position.z.clamp(-bound, bound),
        );
    }

    /// Add an enemy at `position`. Returns its id.
    pub fn spawn_enemy_at(&mut self, position: Vec3) -> EntityId {
        let id = self.mint_id();
        self.enemies.push(Enemy { id, position });
        tracing::debug!(%id, x = position.x, z = position.z, "enemy spawned");
        self.emit(WorldEvent::EnemySpawned { id, position });
        id
    }

    /// Add a projectile at `position`, ignoring the cooldown. Returns its id.
    pub fn spawn_projectile_at(&mut self, position: Vec3) -> EntityId {
        let id = self.mint_id();
        self.projectiles.push(Projectile { id, position });
        self.emit(WorldEvent::ProjectileFired { id, position });
        id
    }

    /// Spawn one enemy for every spawn interval elapsed by `now`.
    ///
    /// Intervals that elapse while the game is over are consumed without
    /// spawning. Returns the number of enemies spawned.
    pub fn update_spawner(&mut self, now: Duration) -> u32 {
        let due = self.spawner.take_due(now);
        if due == 0 {
            return 0;
        }
        if self.is_game_over() {
            tracing::trace!(due, "spawner idle while game over");
            return 0;
        }
        for _ in 0..due {
            let position = self.spawner.spawn_position(&mut self.rng);
            self.spawn_enemy_at(position);
        }
        due
    }

    /// Fire from the player's muzzle if the cooldown has elapsed.
    ///
    /// The cooldown clock only restarts on a successful shot, so holding fire
    /// yields one projectile per cooldown regardless of frame rate.
    pub fn try_fire(&mut self, now: Duration) -> Option<EntityId> {
        if self.is_game_over() {
            return None;
        }
        if let Some(last) = self.last_shot {
            if now.saturating_sub(last) < self.config.fire_cooldown() {
                return None;
            }
        }
        self.last_shot = Some(now);
        let position = self.player.position + Vec3::new(0.0, 0.0, self.config.muzzle_offset);
        let id = self.spawn_projectile_at(position);
        tracing::debug!(%id, "projectile fired");
        Some(id)
    }

    /// Advance the simulation by one frame.
    ///
    /// `now` is wall-clock time since the session started; it only feeds the
    /// fire cooldown. Does nothing while the game is over.
    pub fn step(&mut self, input: &InputState, now: Duration) -> StepOutcome {
        if let Phase::GameOver { final_score } = self.phase() {
            return StepOutcome::GameOver { final_score };
        }
        let _span = tracing::info_span!("step", frame = self.frame + 1).entered();
        self.frame += 1;

        let bound = self.config.arena_bound;
        self.player.drive(input, self.config.player_step, bound);
        debug_assert!(
            self.player.position.x.abs() <= bound && self.player.position.z.abs() <= bound
        );

        if input.is_pressed(Action::Fire) {
            self.try_fire(now);
        }

        self.camera.follow(
            self.player.position,
            self.config.camera_height,
            self.config.camera_distance,
        );

        self.advance_projectiles();
        self.advance_enemies();
        self.recycle_ground();
        self.resolve_collisions();

        tracing::trace!(
            enemies = self.enemies.len(),
            projectiles = self.projectiles.len(),
            score = self.score(),
            "step complete"
        );

        match self.phase() {
            Phase::Playing => StepOutcome::Continue,
            Phase::GameOver { final_score } => StepOutcome::GameOver { final_score },
        }
    }

    /// Start a new round.
    ///
    /// Clears every enemy and projectile, returns the player to its spawn
    /// point and resets score, difficulty and the fire cooldown. Ground tiles
    /// and the spawn schedule carry over.
    pub fn restart(&mut self) {
        let cleared = self.enemies.len() + self.projectiles.len();
        self.enemies.clear();
        self.projectiles.clear();
        self.player = Player::new(self.config.player_spawn);
        self.scoreboard.reset();
        self.last_shot = None;
        self.lifecycle.restart();

        let round = self.lifecycle.round();
        tracing::info!(round, cleared, "game restarted");
        self.emit(WorldEvent::ScoreChanged { score: 0 });
        self.emit(WorldEvent::Restarted { round });
    }

    /// Compute a deterministic hash of the simulation state for comparison.
    pub fn state_hash(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325; // FNV offset basis
        let mix = |h: &mut u64, bytes: &[u8]| {
            for &b in bytes {
                *h ^= b as u64;
                *h = h.wrapping_mul(0x0100_0000_01b3);
            }
        };
        let mix_vec = |h: &mut u64, v: Vec3| {
            for c in v.to_array() {
                mix(h, &c.to_le_bytes());
            }
        };
        mix(&mut h, &self.frame.to_le_bytes());
        mix(&mut h, &self.seed.to_le_bytes());
        mix(&mut h, &self.scoreboard.score().to_le_bytes());
        mix(&mut h, &self.scoreboard.enemy_speed().to_le_bytes());
        mix(&mut h, &self.lifecycle.round().to_le_bytes());
        mix(&mut h, &[u8::from(self.is_game_over())]);
        mix_vec(&mut h, self.player.position);
        for enemy in &self.enemies {
            mix(&mut h, enemy.id.0.as_bytes());
            mix_vec(&mut h, enemy.position);
        }
        for projectile in &self.projectiles {
            mix(&mut h, projectile.id.0.as_bytes());
            mix_vec(&mut h, projectile.position);
        }
        for tile in &self.ground {
            mix(&mut h, &tile.position.z.to_le_bytes());
        }
        h
    }

    fn emit(&mut self, event: WorldEvent) {
        self.event_log.push(event);
    }

    fn mint_id(&mut self) -> EntityId {
        EntityId::from_random_bytes(self.rng.random())
    }

    fn advance_projectiles(&mut self) {
        let speed = self.config.projectile_speed;
        let max_z = self.config.projectile_max_z;
        let events = &mut self.event_log;
        self.projectiles.retain_mut(|projectile| {
            projectile.advance(speed);
            if projectile.position.z > max_z {
                events.push(WorldEvent::ProjectileExpired { id: projectile.id });
                false
            } else {
                true
            }
        });
    }

    fn advance_enemies(&mut self) {
        let target = self.player.position;
        let speed = self.scoreboard.enemy_speed();
        for enemy in &mut self.enemies {
            enemy.home_toward(target, speed);
        }
    }

    fn recycle_ground(&mut self) {
        let player_z = self.player.position.z;
        let distance = self.config.ground_recycle_distance;
        let spacing = self.config.ground_spacing;
        for (tile, ground) in self.ground.iter_mut().enumerate() {
            if ground.recycle(player_z, distance, spacing) {
                let z = ground.position.z;
                tracing::debug!(tile, z, "ground tile recycled");
                self.event_log.push(WorldEvent::GroundRecycled { tile, z });
            }
        }
    }

    fn resolve_collisions(&mut self) {
        let radius = self.config.hit_radius;
        let hits =
            collision::resolve_projectile_hits(&mut self.projectiles, &mut self.enemies, radius);
        for hit in hits {
            tracing::debug!(
                enemy = %hit.enemy.id,
                projectile = %hit.projectile.id,
                "enemy destroyed"
            );
            self.emit(WorldEvent::EnemyDestroyed {
                enemy: hit.enemy.id,
                projectile: hit.projectile.id,
            });
            let raised = self.scoreboard.record_hit();
            let score = self.scoreboard.score();
            self.emit(WorldEvent::ScoreChanged { score });
            if let Some(enemy_speed) = raised {
                tracing::info!(score, enemy_speed, "difficulty raised");
                self.emit(WorldEvent::DifficultyRaised { score, enemy_speed });
            }
        }

        let contact = collision::first_player_contact(self.player.position, &self.enemies, radius)
            .map(|enemy| enemy.id);
        if let Some(enemy) = contact {
            self.end_game(enemy);
        }
    }

    fn end_game(&mut self, enemy: EntityId) {
        let final_score = self.scoreboard.score();
        if !self.lifecycle.end(final_score) {
            return;
        }
        tracing::info!(final_score, %enemy, "game over");
        self.emit(WorldEvent::GameOver { final_score });
        if self.config.auto_restart {
            self.restart();
        }
    }
}
