//=========================================================================
// Menu Screen
//=========================================================================
//
// Main menu: entry point of the application and the bottom of the
// screen stack. Quitting here empties the stack, which is the designed
// termination signal.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::context::GameContext;
use crate::core::input::KeyCode;
use super::{CreditsScreen, GameplayScreen, HighscoresScreen, Screen, ScreenFault};

//=== Menu Items ==========================================================

/// Selectable menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Play,
    Highscores,
    Credits,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 4] = [Self::Play, Self::Highscores, Self::Credits, Self::Quit];

    fn label(self) -> &'static str {
        match self {
            Self::Play => "PLAY",
            Self::Highscores => "HIGHSCORES",
            Self::Credits => "CREDITS",
            Self::Quit => "QUIT",
        }
    }

    /// Direct-select shortcut key, if any.
    fn hotkey(self) -> Option<KeyCode> {
        match self {
            Self::Play => Some(KeyCode::KeyP),
            Self::Highscores => Some(KeyCode::KeyH),
            Self::Credits => Some(KeyCode::KeyC),
            Self::Quit => Some(KeyCode::KeyQ),
        }
    }
}

//=== MenuScreen ==========================================================

/// The main menu.
///
/// Up/down moves the selection, Enter/Space activates it. Play,
/// Highscores, and Credits push the corresponding screen; Quit (or
/// Escape) marks the menu finished so the stack can empty.
pub struct MenuScreen {
    selected: usize,
    finished: bool,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { selected: 0, finished: false }
    }

    fn move_selection(&mut self, context: &mut GameContext, delta: isize) {
        let len = MenuItem::ALL.len() as isize;
        self.selected = ((self.selected as isize + delta + len) % len) as usize;
        context.audio.play("menu_move");
    }

    fn activate(&mut self, context: &mut GameContext, item: MenuItem) {
        debug!("Menu activated: {:?}", item);
        context.audio.play("menu_select");

        match item {
            MenuItem::Play => context.push_screen(Box::new(GameplayScreen::new())),
            MenuItem::Highscores => context.push_screen(Box::new(HighscoresScreen::new())),
            MenuItem::Credits => context.push_screen(Box::new(CreditsScreen::new())),
            MenuItem::Quit => self.finished = true,
        }
    }

    fn draw(&self, context: &mut GameContext) {
        let x = context.surface.width as i32 / 2 - 60;
        let mut y = context.surface.height as i32 / 3;

        context.text.draw_text(x, y - 40, "APOCRYPT");
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            let marker = if i == self.selected { "> " } else { "  " };
            context.text.draw_text(x, y, &format!("{}{}", marker, item.label()));
            y += 20;
        }
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for MenuScreen {
    fn name(&self) -> &str {
        "menu"
    }

    fn is_finished(&self) -> bool {
        self.finished
    }

    fn run_frame(&mut self, context: &mut GameContext) -> Result<(), ScreenFault> {
        if context.input.is_key_pressed(KeyCode::ArrowUp) {
            self.move_selection(context, -1);
        }
        if context.input.is_key_pressed(KeyCode::ArrowDown) {
            self.move_selection(context, 1);
        }

        if context.input.is_key_pressed(KeyCode::Enter)
            || context.input.is_key_pressed(KeyCode::Space)
        {
            self.activate(context, MenuItem::ALL[self.selected]);
        } else if context.input.is_key_pressed(KeyCode::Escape) {
            self.activate(context, MenuItem::Quit);
        } else {
            for item in MenuItem::ALL {
                if item.hotkey().is_some_and(|key| context.input.is_key_pressed(key)) {
                    self.activate(context, item);
                    break;
                }
            }
        }

        self.draw(context);
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::InputEvent;

    //--- Test Helpers -----------------------------------------------------

    fn press(context: &mut GameContext, key: KeyCode) {
        context.input.begin_frame();
        context.input.process_events(&[
            InputEvent::KeyDown { key },
            InputEvent::KeyUp { key },
        ]);
        context.input.finalize_frame();
    }

    fn idle_frame(context: &mut GameContext) {
        context.input.begin_frame();
        context.input.finalize_frame();
    }

    #[test]
    fn selection_wraps_both_directions() {
        let mut menu = MenuScreen::new();
        let mut context = GameContext::headless();

        press(&mut context, KeyCode::ArrowUp);
        menu.run_frame(&mut context).unwrap();
        assert_eq!(menu.selected, MenuItem::ALL.len() - 1);

        press(&mut context, KeyCode::ArrowDown);
        menu.run_frame(&mut context).unwrap();
        assert_eq!(menu.selected, 0);
    }

    #[test]
    fn enter_on_play_queues_the_gameplay_screen() {
        let mut menu = MenuScreen::new();
        let mut context = GameContext::headless();

        press(&mut context, KeyCode::Enter);
        menu.run_frame(&mut context).unwrap();

        assert_eq!(context.screens.len(), 1);
        assert!(!menu.is_finished());
    }

    #[test]
    fn quit_marks_the_menu_finished_without_pushing() {
        let mut menu = MenuScreen::new();
        let mut context = GameContext::headless();

        press(&mut context, KeyCode::KeyQ);
        menu.run_frame(&mut context).unwrap();

        assert!(menu.is_finished());
        assert!(context.screens.is_empty());
    }

    #[test]
    fn escape_quits_from_anywhere_in_the_menu() {
        let mut menu = MenuScreen::new();
        let mut context = GameContext::headless();

        press(&mut context, KeyCode::ArrowDown);
        menu.run_frame(&mut context).unwrap();
        press(&mut context, KeyCode::Escape);
        menu.run_frame(&mut context).unwrap();

        assert!(menu.is_finished());
    }

    #[test]
    fn idle_frames_change_nothing() {
        let mut menu = MenuScreen::new();
        let mut context = GameContext::headless();

        idle_frame(&mut context);
        menu.run_frame(&mut context).unwrap();

        assert_eq!(menu.selected, 0);
        assert!(!menu.is_finished());
        assert!(context.screens.is_empty());
    }
}
