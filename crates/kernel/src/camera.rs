use glam::Vec3;

/// Third-person chase camera driven by the simulation step.
///
/// The eye sits `distance` behind the player along -z at a fixed `height`;
/// the view direction never changes, so the target is a fixed offset from the
/// eye that lands on the ground directly under the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaseCamera {
    pub eye: Vec3,
    pub target: Vec3,
}

impl ChaseCamera {
    pub fn new(height: f32, distance: f32) -> Self {
        let mut camera = Self {
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
        };
        camera.follow(Vec3::ZERO, height, distance);
        camera
    }

    pub fn follow(&mut self, player: Vec3, height: f32, distance: f32) {
        self.eye = Vec3::new(player.x, height, player.z - distance);
        self.target = self.eye + Vec3::new(0.0, -height, distance);
    }
}
