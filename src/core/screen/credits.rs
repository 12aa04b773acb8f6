//=========================================================================
// Credits Screen
//=========================================================================
//
// Frame-counted credits roll. Lines scroll up from the bottom of the
// surface; the screen finishes when the roll has fully scrolled past or
// when the player dismisses it.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::context::GameContext;
use crate::core::input::KeyCode;
use super::{Screen, ScreenFault};

//=== Credits Content =====================================================

const CREDITS: [&str; 7] = [
    "APOCRYPT",
    "",
    "code        tungsten protocol",
    "levels      Apocalypse / Crypt",
    "sound       the Waii collective",
    "",
    "thanks for playing",
];

/// Vertical pixels the roll climbs per frame.
const SCROLL_PER_FRAME: i32 = 1;

/// Pixel spacing between credit lines.
const LINE_HEIGHT: i32 = 20;

//=== CreditsScreen =======================================================

/// The credits roll.
pub struct CreditsScreen {
    frame: i32,
    finished: bool,
}

impl CreditsScreen {
    pub fn new() -> Self {
        Self { frame: 0, finished: false }
    }

    /// Total scroll distance after which the roll is over: surface
    /// height plus the height of the text block.
    fn roll_length(&self, context: &GameContext) -> i32 {
        context.surface.height as i32 + CREDITS.len() as i32 * LINE_HEIGHT
    }

    fn draw(&self, context: &mut GameContext) {
        let x = context.surface.width as i32 / 2 - 100;
        let base = context.surface.height as i32 - self.frame * SCROLL_PER_FRAME;

        for (i, line) in CREDITS.iter().enumerate() {
            let y = base + i as i32 * LINE_HEIGHT;
            if y > -LINE_HEIGHT && y < context.surface.height as i32 + LINE_HEIGHT {
                context.text.draw_text(x, y, line);
            }
        }
    }
}

impl Default for CreditsScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for CreditsScreen {
    fn name(&self) -> &str {
        "credits"
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn run_frame(&mut self, context: &mut GameContext) -> Result<(), ScreenFault> {
        let dismissed = context.input.is_key_pressed(KeyCode::Enter)
            || context.input.is_key_pressed(KeyCode::Space)
            || context.input.is_key_pressed(KeyCode::Escape);

        if dismissed || self.frame * SCROLL_PER_FRAME >= self.roll_length(context) {
            self.finished = true;
            return Ok(());
        }

        self.draw(context);
        self.frame += 1;
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
