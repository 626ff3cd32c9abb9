//! Entities of the shooter and their per-frame motion rules.

use cubeshot_common::EntityId;
use cubeshot_input::{Action, InputState};
use glam::Vec3;

/// Size of the ground tile pool.
pub const GROUND_TILE_COUNT: usize = 3;

/// The player cube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    pub position: Vec3,
}

impl Player {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    /// Apply held directional actions, then clamp x and z to the arena.
    ///
    /// `Left` (bound to `KeyA`) moves toward +x and `Right` toward -x, which
    /// matches the chase camera looking down +z.
    pub fn drive(&mut self, input: &InputState, step: f32, bound: f32) {
        if input.is_pressed(Action::Forward) {
            self.position.z += step;
        }
        if input.is_pressed(Action::Back) {
            self.position.z -= step;
        }
        if input.is_pressed(Action::Left) {
            self.position.x += step;
        }
        if input.is_pressed(Action::Right) {
            self.position.x -= step;
        }
        self.position.x = self.position.x.clamp(-bound, bound);
        self.position.z = self.position.z.clamp(-bound, bound);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Enemy {
    pub id: EntityId,
    pub position: Vec3,
}

impl Enemy {
    /// Move `speed` units straight toward `target`.
    ///
    /// The direction is recomputed from the current positions on every call.
    /// An enemy already sitting on the target stays put.
    pub fn home_toward(&mut self, target: Vec3, speed: f32) {
        let direction = (target - self.position).normalize_or_zero();
        self.position += direction * speed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub id: EntityId,
    pub position: Vec3,
}

impl Projectile {
    pub fn advance(&mut self, speed: f32) {
        self.position.z += speed;
    }
}

/// One slab of the scrolling ground plane. Only z moves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundTile {
    pub position: Vec3,
}

impl GroundTile {
    /// The initial pool: tiles centred at `-spacing`, `0` and `+spacing`.
    pub fn initial_pool(spacing: f32) -> [GroundTile; GROUND_TILE_COUNT] {
        [-1.0, 0.0, 1.0].map(|i| GroundTile {
            position: Vec3::new(0.0, 0.0, i * spacing),
        })
    }

    /// Move the tile forward by `spacing` if it fell more than
    /// `recycle_distance` behind `player_z`. Returns whether it moved.
    pub fn recycle(&mut self, player_z: f32, recycle_distance: f32, spacing: f32) -> bool {
        if self.position.z < player_z - recycle_distance {
            self.position.z += spacing;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_and_back_move_along_z() {
        let mut input = InputState::new();
        let mut p = Player::new(Vec3::new(0.0, 0.5, 0.0));
        input.press(Action::Forward);
        p.drive(&input, 0.1, 100.0);
        assert!((p.position.z - 0.1).abs() < 1e-6);

        input.release(Action::Forward);
        input.press(Action::Back);
        p.drive(&input, 0.1, 100.0);
        p.drive(&input, 0.1, 100.0);
        assert!((p.position.z + 0.1).abs() < 1e-6);
    }

    #[test]
    fn strafe_keys_keep_arcade_mapping() {
        let mut input = InputState::new();
        let mut p = Player::new(Vec3::ZERO);
        input.set_key("KeyA", true);
        p.drive(&input, 0.1, 100.0);
        assert!(p.position.x > 0.0);

        input.set_key("KeyA", false);
        input.set_key("KeyD", true);
        p.drive(&input, 0.1, 100.0);
        p.drive(&input, 0.1, 100.0);
        assert!(p.position.x < 0.0);
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut input = InputState::new();
        input.press(Action::Left);
        input.press(Action::Right);
        let mut p = Player::new(Vec3::ZERO);
        p.drive(&input, 0.1, 100.0);
        assert_eq!(p.position.x, 0.0);
    }

    #[test]
    fn drive_clamps_to_arena() {
        let mut input = InputState::new();
        input.press(Action::Forward);
        input.press(Action::Right);
        let mut p = Player::new(Vec3::new(-99.95, 0.5, 99.95));
        p.drive(&input, 0.1, 100.0);
        assert_eq!(p.position.x, -100.0);
        assert_eq!(p.position.z, 100.0);
        assert_eq!(p.position.y, 0.5);
    }

    #[test]
    fn homing_moves_exactly_speed_toward_target() {
        let mut e = Enemy {
            id: EntityId::new(),
            position: Vec3::new(3.0, 0.5, 4.0),
        };
        e.home_toward(Vec3::new(0.0, 0.5, 0.0), 0.5);
        assert!(e.position.abs_diff_eq(Vec3::new(2.7, 0.5, 3.6), 1e-5));
    }

    #[test]
    fn homing_on_target_does_not_produce_nan() {
        let mut e = Enemy {
            id: EntityId::new(),
            position: Vec3::ONE,
        };
        e.home_toward(Vec3::ONE, 0.02);
        assert_eq!(e.position, Vec3::ONE);
    }

    #[test]
    fn initial_pool_is_spaced_along_z() {
        let tiles = GroundTile::initial_pool(200.0);
        let zs: Vec<f32> = tiles.iter().map(|t| t.position.z).collect();
        assert_eq!(zs, vec![-200.0, 0.0, 200.0]);
    }

    #[test]
    fn recycle_moves_tile_once_per_crossing() {
        let mut tile = GroundTile {
            position: Vec3::new(0.0, 0.0, -200.0),
        };
        assert!(!tile.recycle(-100.0, 100.0, 200.0));
        assert!(tile.recycle(-99.0, 100.0, 200.0));
        assert_eq!(tile.position.z, 0.0);
        assert!(!tile.recycle(-99.0, 100.0, 200.0));
        assert_eq!(tile.position.z, 0.0);
    }
}
