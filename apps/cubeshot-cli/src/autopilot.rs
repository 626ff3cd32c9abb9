use cubeshot_input::{Action, InputState};
use cubeshot_kernel::World;

/// Scripted input source for headless runs.
///
/// Holds fire and strafes to line up with the nearest enemy.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Horizontal misalignment tolerated before strafing.
    pub tolerance: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { tolerance: 0.25 }
    }
}

impl Autopilot {
    pub fn drive(&self, world: &World, input: &mut InputState) {
        input.press(Action::Fire);
        input.release(Action::Left);
        input.release(Action::Right);

        let player = world.player().position;
        let nearest = world
            .enemies()
            .iter()
            .min_by(|a, b| {
                a.position
                    .distance_squared(player)
                    .total_cmp(&b.position.distance_squared(player))
            });
        let Some(enemy) = nearest else {
            return;
        };
        // Left moves toward +x.
        if enemy.position.x > player.x + self.tolerance {
            input.press(Action::Left);
        } else if enemy.position.x < player.x - self.tolerance {
            input.press(Action::Right);
        }
    }
}
