use cubeshot_kernel::{ChaseCamera, Phase, World};
use glam::Vec3;

/// Camera/view configuration for rendering.
#[derive(Debug, Clone, Copy)]
pub struct RenderView {
    /// Camera position in world space.
    pub eye: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
}

impl Default for RenderView {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 2.0, -5.0),
            target: Vec3::ZERO,
            fov_degrees: 75.0,
        }
    }
}

impl From<&ChaseCamera> for RenderView {
    fn from(camera: &ChaseCamera) -> Self {
        Self {
            eye: camera.eye,
            target: camera.target,
            ..Self::default()
        }
    }
}

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// The renderer reads world state and a view, then produces output. It never
/// mutates the world.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame from the given world state and view.
    fn render(&self, world: &World, view: &RenderView) -> Self::Output;
}

/// Text renderer for headless runs, logs and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn fmt_vec(v: Vec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z)
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, world: &World, view: &RenderView) -> String {
        let phase = match world.phase() {
            Phase::Playing => "playing".to_string(),
            Phase::GameOver { final_score } => format!("game over ({final_score})"),
        };
        let mut out = String::new();
        out.push_str(&format!(
            "=== Frame {} (round {}, seed {}) ===\n",
            world.frame(),
            world.round(),
            world.seed()
        ));
        out.push_str(&format!(
            "Score: {}  enemy_speed={:.3}  phase={phase}\n",
            world.score(),
            world.enemy_speed()
        ));
        out.push_str(&format!(
            "Camera: eye={} target={} fov={:.0}\n",
            fmt_vec(view.eye),
            fmt_vec(view.target),
            view.fov_degrees
        ));
        out.push_str(&format!("Player: pos={}\n", fmt_vec(world.player().position)));

        out.push_str(&format!("Enemies: {}\n", world.enemies().len()));
        for enemy in world.enemies() {
            out.push_str(&format!("  [{}] pos={}\n", enemy.id, fmt_vec(enemy.position)));
        }
        out.push_str(&format!("Projectiles: {}\n", world.projectiles().len()));
        for projectile in world.projectiles() {
            out.push_str(&format!(
                "  [{}] pos={}\n",
                projectile.id,
                fmt_vec(projectile.position)
            ));
        }

        let ground: Vec<String> = world
            .ground_tiles()
            .iter()
            .map(|t| format!("{:.1}", t.position.z))
            .collect();
        out.push_str(&format!("Ground z: {}\n", ground.join(", ")));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeshot_input::InputState;
    use std::time::Duration;

    #[test]
    fn debug_renderer_empty_world() {
        let world = World::new();
        let output = DebugTextRenderer::new().render(&world, &RenderView::default());

        assert!(output.contains("Frame 0"));
        assert!(output.contains("Score: 0"));
        assert!(output.contains("Enemies: 0"));
        assert!(output.contains("Projectiles: 0"));
        assert!(output.contains("phase=playing"));
        assert!(output.contains("Ground z: -200.0, 0.0, 200.0"));
    }

    #[test]
    fn debug_renderer_lists_entities() {
        let mut world = World::new();
        let id = world.spawn_enemy_at(Vec3::new(1.0, 0.5, 9.0));
        world.spawn_projectile_at(Vec3::new(0.0, 0.5, 1.0));

        let output = DebugTextRenderer::new().render(&world, &RenderView::default());
        assert!(output.contains("Enemies: 1"));
        assert!(output.contains(&format!("[{id}] pos=(1.00, 0.50, 9.00)")));
        assert!(output.contains("Projectiles: 1"));
    }

    #[test]
    fn debug_renderer_shows_game_over() {
        let mut world = World::new();
        world.spawn_enemy_at(Vec3::new(0.0, 0.5, 0.2));
        world.step(&InputState::new(), Duration::ZERO);
        let output = DebugTextRenderer::new().render(&world, &RenderView::default());
        assert!(output.contains("phase=game over (0)"));
    }

    #[test]
    fn view_from_chase_camera() {
        let camera = ChaseCamera::new(2.0, 5.0);
        let view = RenderView::from(&camera);
        assert_eq!(view.eye, Vec3::new(0.0, 2.0, -5.0));
        assert_eq!(view.target, Vec3::ZERO);
        assert_eq!(view.fov_degrees, 75.0);
    }
}
