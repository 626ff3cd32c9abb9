use cubeshot_input::InputState;
use cubeshot_kernel::{StepOutcome, World, WorldEvent};
use cubeshot_render::{Hud, RenderView, Renderer, route_events};
use serde::Serialize;
use std::time::Duration;

/// A game that ended, as seen by the frame driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FinishedGame {
    pub round: u32,
    pub final_score: u32,
    /// World frame on which the game ended.
    pub frame: u64,
}

/// Self-scheduling frame driver.
///
/// Each frame polls the spawner, steps the world, renders, and forwards
/// events to the HUD. A frame only schedules its successor while the game is
/// running; after a game over nothing runs until `restart`.
pub struct FrameLoop<R: Renderer, H: Hud> {
    world: World,
    input: InputState,
    renderer: R,
    hud: H,
    scheduled: bool,
    finished: Vec<FinishedGame>,
}

impl<R: Renderer, H: Hud> FrameLoop<R, H> {
    pub fn new(world: World, input: InputState, renderer: R, mut hud: H) -> Self {
        hud.show_score(world.score());
        Self {
            scheduled: !world.is_game_over(),
            world,
            input,
            renderer,
            hud,
            finished: Vec::new(),
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn hud(&self) -> &H {
        &self.hud
    }

    /// Whether the next frame has been requested.
    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    /// Run the scheduled frame at wall-clock time `now`.
    ///
    /// Returns the rendered output, or `None` if no frame was scheduled.
    pub fn run_frame(&mut self, now: Duration) -> Option<R::Output> {
        if !self.scheduled {
            return None;
        }
        self.world.update_spawner(now);
        let outcome = self.world.step(&self.input, now);
        let view = RenderView::from(self.world.camera());
        let output = self.renderer.render(&self.world, &view);
        self.flush_events();
        self.scheduled = outcome == StepOutcome::Continue;
        if !self.scheduled {
            tracing::debug!(frame = self.world.frame(), "frame loop halted");
        }
        Some(output)
    }

    /// External restart trigger: reset the world and schedule frames again.
    pub fn restart(&mut self) {
        self.world.restart();
        self.flush_events();
        self.scheduled = true;
    }

    /// Games that ended since the last call.
    pub fn take_finished(&mut self) -> Vec<FinishedGame> {
        std::mem::take(&mut self.finished)
    }

    fn flush_events(&mut self) {
        let events = self.world.drain_events();
        let restarts = events
            .iter()
            .filter(|e| matches!(e, WorldEvent::Restarted { .. }))
            .count() as u32;
        let mut round = self.world.round() - restarts;
        for event in &events {
            match event {
                WorldEvent::GameOver { final_score } => self.finished.push(FinishedGame {
                    round,
                    final_score: *final_score,
                    frame: self.world.frame(),
                }),
                WorldEvent::Restarted { round: next } => round = *next,
                _ => {}
            }
        }
        route_events(&mut self.hud, &events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeshot_input::Action;
    use cubeshot_kernel::GameConfig;
    use cubeshot_render::{DebugTextRenderer, TextHud};
    use glam::Vec3;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn frame_loop(world: World) -> FrameLoop<DebugTextRenderer, TextHud> {
        FrameLoop::new(world, InputState::new(), DebugTextRenderer::new(), TextHud::new())
    }

    #[test]
    fn frames_keep_scheduling_while_playing() {
        let mut game = frame_loop(World::new());
        for f in 0..10 {
            let out = game.run_frame(ms(f * 16));
            assert!(out.is_some_and(|o| o.contains("Score: 0")));
        }
        assert!(game.is_scheduled());
        assert_eq!(game.world().frame(), 10);
    }

    #[test]
    fn spawner_runs_from_frame_timestamps() {
        let mut game = frame_loop(World::with_seed(3));
        game.run_frame(ms(1990));
        assert!(game.world().enemies().is_empty());
        game.run_frame(ms(2006));
        assert_eq!(game.world().enemies().len(), 1);
    }

    #[test]
    fn game_over_stops_scheduling_until_restart() {
        let mut world = World::new();
        world.spawn_enemy_at(Vec3::new(0.0, 0.5, 0.3));
        let mut game = frame_loop(world);

        assert!(game.run_frame(ms(0)).is_some());
        assert!(!game.is_scheduled());
        assert_eq!(game.hud().notices(), ["Game Over! Your score: 0"]);
        assert_eq!(
            game.take_finished(),
            vec![FinishedGame {
                round: 1,
                final_score: 0,
                frame: 1
            }]
        );

        assert!(game.run_frame(ms(16)).is_none());
        assert_eq!(game.world().frame(), 1);

        game.restart();
        assert!(game.is_scheduled());
        assert_eq!(game.world().round(), 2);
        assert!(game.run_frame(ms(32)).is_some());
    }

    #[test]
    fn hud_tracks_score_changes() {
        let mut world = World::new();
        world.spawn_enemy_at(Vec3::new(4.0, 0.5, 6.0));
        world.spawn_projectile_at(Vec3::new(4.0, 0.5, 5.6));
        let mut game = frame_loop(world);
        game.run_frame(ms(0));
        assert_eq!(game.hud().score_line(), "Score: 1");
    }

    #[test]
    fn auto_restart_reports_the_round_that_ended() {
        let config = GameConfig {
            auto_restart: true,
            ..GameConfig::default()
        };
        let mut world = World::with_config(config, 0).unwrap();
        world.spawn_enemy_at(Vec3::new(0.0, 0.5, 0.3));
        let mut game = frame_loop(world);
        game.input_mut().press(Action::Fire);

        game.run_frame(ms(0));
        assert!(game.is_scheduled());
        let finished = game.take_finished();
        assert_eq!(finished.len(), 1);
        assert_eq!(finished[0].round, 1);
        assert_eq!(game.world().round(), 2);
        assert_eq!(game.hud().score_line(), "Score: 0");
    }
}
