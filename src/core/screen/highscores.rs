//=========================================================================
// Highscores Screen
//=========================================================================
//
// Displays the ranked ladder, optionally highlighting a rank the player
// just earned. Dismissed with the confirm or cancel key.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::context::GameContext;
use crate::core::input::KeyCode;
use super::{Screen, ScreenFault};

//=== HighscoresScreen ====================================================

/// Modal ladder display.
pub struct HighscoresScreen {
    highlight: Option<usize>,
    finished: bool,
}

impl HighscoresScreen {
    /// Plain ladder view, reached from the menu.
    pub fn new() -> Self {
        Self { highlight: None, finished: false }
    }

    /// Ladder view after a round: highlights the rank the player placed
    /// at, if any.
    pub fn with_highlight(highlight: Option<usize>) -> Self {
        Self { highlight, finished: false }
    }

    fn draw(&self, context: &mut GameContext) {
        let x = context.surface.width as i32 / 2 - 120;
        let mut y = context.surface.height as i32 / 6;

        context.text.draw_text(x, y, "HIGHSCORES");
        y += 24;

        for (rank, entry) in context.highscores.entries().iter().enumerate() {
            let marker = if self.highlight == Some(rank) { ">" } else { " " };
            let line = format!(
                "{}{:>2}. {:<12} {:<12} {:>6}",
                marker,
                rank + 1,
                entry.name,
                entry.level,
                entry.points
            );
            context.text.draw_text(x, y, &line);
            y += 16;
        }

        if self.highlight.is_none() {
            y += 8;
            context.text.draw_text(x, y, "PRESS ENTER");
        }
    }
}

impl Default for HighscoresScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for HighscoresScreen {
    fn name(&self) -> &str {
        "highscores"
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn run_frame(&mut self, context: &mut GameContext) -> Result<(), ScreenFault> {
        if context.input.is_key_pressed(KeyCode::Enter)
            || context.input.is_key_pressed(KeyCode::Space)
            || context.input.is_key_pressed(KeyCode::Escape)
        {
            context.audio.play("menu_select");
            self.finished = true;
        }

        self.draw(context);
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
