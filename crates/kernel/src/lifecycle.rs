/// Whether the simulation step runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Playing,
    /// Terminal until an explicit restart.
    GameOver { final_score: u32 },
}

/// Lifecycle state: the current phase plus how many rounds have started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    phase: Phase,
    round: u32,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self {
            phase: Phase::Playing,
            round: 1,
        }
    }
}

impl Lifecycle {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    /// 1-based index of the current round.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Playing -> GameOver. Returns false if the game was already over.
    pub fn end(&mut self, final_score: u32) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.phase = Phase::GameOver { final_score };
        true
    }

    /// Start the next round.
    pub fn restart(&mut self) {
        self.phase = Phase::Playing;
        self.round += 1;
    }
}
