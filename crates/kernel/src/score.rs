/// Score and the difficulty it drives.
///
/// Enemy speed doubles once per milestone (every `milestone` points). Hits are
/// always worth one point, so each milestone is reached exactly, but the check
/// compares against the last milestone passed rather than testing equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scoreboard {
    score: u32,
    enemy_speed: f32,
    initial_speed: f32,
    milestone: u32,
    last_milestone: u32,
}

impl Scoreboard {
    pub fn new(initial_speed: f32, milestone: u32) -> Self {
        debug_assert!(initial_speed > 0.0, "enemy speed must be positive");
        debug_assert!(milestone > 0, "milestone must be non-zero");
        Self {
            score: 0,
            enemy_speed: initial_speed,
            initial_speed,
            milestone,
            last_milestone: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Shared speed of every enemy, in units per frame.
    pub fn enemy_speed(&self) -> f32 {
        self.enemy_speed
    }

    /// The most recent milestone that raised the difficulty (0 if none).
    pub fn last_milestone(&self) -> u32 {
        self.last_milestone
    }

    /// Add one point. Returns the new enemy speed if a milestone was reached.
    pub fn record_hit(&mut self) -> Option<f32> {
        self.score += 1;
        let reached = self.score / self.milestone * self.milestone;
        if reached > self.last_milestone {
            self.enemy_speed *= 2.0;
            self.last_milestone = reached;
            Some(self.enemy_speed)
        } else {
            None
        }
    }

    /// Back to zero score and the initial speed.
    pub fn reset(&mut self) {
        self.score = 0;
        self.enemy_speed = self.initial_speed;
        self.last_milestone = 0;
    }
}
