//! Display collaborator: the score line and the game-over notice.

use cubeshot_kernel::WorldEvent;

pub fn score_text(score: u32) -> String {
    format!("Score: {score}")
}

pub fn game_over_text(final_score: u32) -> String {
    format!("Game Over! Your score: {final_score}")
}

/// Anything that can show the score and announce the end of a game.
pub trait Hud {
    /// Replace the displayed score.
    fn show_score(&mut self, score: u32);

    /// Tell the player the game ended. Backends may block until dismissed.
    fn notify_game_over(&mut self, final_score: u32);
}

/// Forward the display-relevant events to `hud`, in order.
pub fn route_events<H: Hud + ?Sized>(hud: &mut H, events: &[WorldEvent]) {
    for event in events {
        match event {
            WorldEvent::ScoreChanged { score } => hud.show_score(*score),
            WorldEvent::GameOver { final_score } => hud.notify_game_over(*final_score),
            _ => {}
        }
    }
}

/// HUD that keeps its state as text and mirrors it to the log.
#[derive(Debug, Clone)]
pub struct TextHud {
    score_line: String,
    notices: Vec<String>,
}

impl Default for TextHud {
    fn default() -> Self {
        Self {
            score_line: score_text(0),
            notices: Vec::new(),
        }
    }
}

impl TextHud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn score_line(&self) -> &str {
        &self.score_line
    }

    /// Game-over notices not yet taken.
    pub fn notices(&self) -> &[String] {
        &self.notices
    }

    pub fn take_notices(&mut self) -> Vec<String> {
        std::mem::take(&mut self.notices)
    }
}

impl Hud for TextHud {
    fn show_score(&mut self, score: u32) {
        self.score_line = score_text(score);
        tracing::debug!(score, "score updated");
    }

    fn notify_game_over(&mut self, final_score: u32) {
        let notice = game_over_text(final_score);
        tracing::info!("{notice}");
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn texts_match_display_format() {
        assert_eq!(score_text(12), "Score: 12");
        assert_eq!(game_over_text(7), "Game Over! Your score: 7");
    }

    #[test]
    fn text_hud_starts_at_zero() {
        let hud = TextHud::new();
        assert_eq!(hud.score_line(), "Score: 0");
        assert!(hud.notices().is_empty());
    }

    #[test]
    fn routes_score_and_game_over_only() {
        let mut hud = TextHud::new();
        route_events(
            &mut hud,
            &[
                WorldEvent::ScoreChanged { score: 3 },
                WorldEvent::Restarted { round: 2 },
                WorldEvent::GameOver { final_score: 3 },
                WorldEvent::ScoreChanged { score: 0 },
            ],
        );
        assert_eq!(hud.score_line(), "Score: 0");
        assert_eq!(hud.take_notices(), vec!["Game Over! Your score: 3"]);
        assert!(hud.notices().is_empty());
    }
}
