//=========================================================================
// Screen System
//=========================================================================
//
// Stack-based sequencing of full-focus application modes.
//
// Architecture:
//   ScreenDirector
//     └─ stack: Vec<Box<dyn Screen>>  (sole owner, top = active)
//
// Flow:
//   step() → pop-if-finished → exit-if-empty → Screen::run_frame()
//          → drain ScreenQueue pushes
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::context::GameContext;

//=== Module Declarations =================================================

mod credits;
mod director;
mod gameplay;
mod highscores;
mod menu;
mod queue;

//=== Public API ==========================================================

pub use credits::CreditsScreen;
pub use director::{FrameControl, ScreenDirector};
pub use gameplay::GameplayScreen;
pub use highscores::HighscoresScreen;
pub use menu::MenuScreen;
pub use queue::ScreenQueue;

//=== ScreenFault =========================================================

/// Unrecoverable fault raised by a screen's frame.
///
/// The director catches these at the top level, logs them with the
/// screen's name, and keeps the screen on top; a single bad frame never
/// takes the process down. The cost is that the fault may repeat every
/// frame until the user forces a transition.
#[derive(Debug)]
pub enum ScreenFault {
    /// A gameplay subsystem failed mid-frame.
    Subsystem(String),

    /// A presentation collaborator (text/rendering) failed.
    Presentation(String),
}

impl std::fmt::Display for ScreenFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Subsystem(e) => write!(f, "Subsystem fault: {}", e),
            Self::Presentation(e) => write!(f, "Presentation fault: {}", e),
        }
    }
}

impl std::error::Error for ScreenFault {}

//=== PointerMode =========================================================

/// Host pointer policy derived from whatever screen is on top.
///
/// Not controller-owned state: the director computes it on demand and the
/// app loop relays it to the host every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMode {
    /// Pointer visible and free (menus, credits, highscores).
    Visible,

    /// Pointer hidden and recentred every frame (gameplay).
    Captured,
}

//=== Screen Trait ========================================================

/// One discrete full-focus mode of the application.
///
/// Screens are created when pushed onto the director's stack and
/// destroyed when popped. A screen signals a backward transition by
/// setting its own finished flag; it requests forward transitions by
/// queueing new screens on the context. Both may happen in the same
/// frame.
///
/// # Minimal Implementation
///
/// Only `name`, `is_finished`, and `run_frame` are required;
/// `captures_pointer` defaults to a visible pointer:
///
/// ```
/// use apocrypt::prelude::*;
///
/// struct SplashScreen { done: bool }
///
/// impl Screen for SplashScreen {
///     fn name(&self) -> &str {
///         "splash"
///     }
///
///     fn is_finished(&self) -> bool {
///         self.done
///     }
///
///     fn run_frame(&mut self, context: &mut GameContext) -> Result<(), ScreenFault> {
///         if context.input.is_key_pressed(KeyCode::Enter) {
///             self.done = true;
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Screen {
    /// Display name, for diagnostics and logging only.
    fn name(&self) -> &str;

    /// Whether this screen has finished and should be popped at the
    /// start of the next step. Mutable only by the screen itself during
    /// its own frame.
    fn is_finished(&self) -> bool;

    /// Executes one frame of the screen's behavior.
    ///
    /// A returned fault is logged by the director and otherwise
    /// swallowed; the screen stays on top.
    fn run_frame(&mut self, context: &mut GameContext) -> Result<(), ScreenFault>;

    /// Whether the host pointer should be captured while this screen is
    /// on top. Gameplay returns `true`; everything else keeps the
    /// default.
    fn captures_pointer(&self) -> bool {
        false
    }
}
