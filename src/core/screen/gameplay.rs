//=========================================================================
// Gameplay Screen
//=========================================================================
//
// Drives the gameplay simulation one frame at a time and handles the
// end of a round: submit the score to the ladder, show the player where
// they placed, hand control back to the screen below.
//
// The simulation itself lives behind the GameplaySession seam; this
// screen owns nothing but the round's progression state.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::context::{GameContext, SessionStatus};
use super::{HighscoresScreen, Screen, ScreenFault};

//=== GameplayScreen ======================================================

/// The playing screen. Pointer is captured while it is on top.
pub struct GameplayScreen {
    finished: bool,
}

impl GameplayScreen {
    pub fn new() -> Self {
        Self { finished: false }
    }

    /// Round ended: record the score and queue the placement screen.
    fn complete_round(&mut self, context: &mut GameContext, points: u32, level: &str) {
        let player = context.settings.player_name().to_string();
        info!("Round complete: {} scored {} on '{}'", player, points, level);

        let rank = context
            .highscores
            .submit(points, level, &player, &mut context.settings);

        match rank {
            Some(rank) => context.audio.play(if rank == 0 { "new_record" } else { "placed" }),
            None => context.audio.play("game_over"),
        }

        context.push_screen(Box::new(HighscoresScreen::with_highlight(rank)));
        context.session.reset();
        self.finished = true;
    }

    /// Live HUD: current score against the ladder's leading score.
    fn draw_hud(&self, context: &mut GameContext) {
        let line = format!(
            "SCORE {:>6}   BEST {:>6}",
            context.session.score(),
            context.highscores.top_score()
        );
        context.text.draw_text(8, 8, &line);
    }
}

impl Default for GameplayScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameplayScreen {
    fn name(&self) -> &str {
        "gameplay"
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn run_frame(&mut self, context: &mut GameContext) -> Result<(), ScreenFault> {
        let status = context
            .session
            .advance(&context.input, context.surface)
            .map_err(ScreenFault::Subsystem)?;

        match status {
            SessionStatus::Running => self.draw_hud(context),
            SessionStatus::Complete { points, level } => {
                self.complete_round(context, points, &level);
            }
        }

        Ok(())
    }

    fn captures_pointer(&self) -> bool {
        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
