//=========================================================================
// Game Context
//=========================================================================
//
// Shared data container threaded through every screen frame.
//
// Explicit state object constructed once at startup, never ambient
// globals: the app owns one GameContext and passes it `&mut` down the
// frame-update call path, which keeps the core testable without a
// running host framework.
//
// External collaborators (audio device, text renderer, the gameplay
// simulation itself) sit behind narrow trait seams with no-op
// implementations for tests and headless runs.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::highscore::HighscoreTable;
use crate::core::input::InputSnapshot;
use crate::core::screen::{Screen, ScreenQueue};
use crate::settings::SettingsStore;

//=== SurfaceSize =========================================================

/// Host drawable dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self { width: 640, height: 480 }
    }
}

//=== AudioCategory =======================================================

/// Volume category the settings store carries a level for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCategory {
    Music,
    Effects,
}

//=== Collaborator Seams ==================================================

/// Fire-and-forget audio notifications.
///
/// The core never consumes a return value from these calls; failures are
/// swallowed inside the implementation, not surfaced here.
pub trait AudioSink {
    /// Plays a named cue ("menu_move", "menu_select", "highscore", ...).
    fn play(&mut self, cue: &str);

    /// Applies a category volume (0.0..=1.0), typically mirrored from
    /// the settings store at startup.
    fn set_volume(&mut self, category: AudioCategory, volume: f32) {
        let _ = (category, volume);
    }
}

/// Minimal text/rendering primitives the screens draw with.
///
/// Positions are pixels, top-left origin. Like [`AudioSink`], calls are
/// fire-and-forget.
pub trait TextSurface {
    /// Draws one line of text at the given position.
    fn draw_text(&mut self, x: i32, y: i32, text: &str);
}

/// Current status of the running gameplay simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// The round is still in progress.
    Running,

    /// The round ended with the given result.
    Complete { points: u32, level: String },
}

/// The actual game simulation, advanced one frame at a time.
///
/// Everything behind this seam (3D scene, physics, enemies) is outside
/// this crate; the screen layer only needs to drive it forward and learn
/// when a round ends.
pub trait GameplaySession {
    /// Advances the simulation by one frame.
    fn advance(&mut self, input: &InputSnapshot, surface: SurfaceSize)
        -> Result<SessionStatus, String>;

    /// Current score, for the live HUD.
    fn score(&self) -> u32;

    /// Resets the simulation for a fresh round.
    fn reset(&mut self);
}

//=== No-op Collaborators =================================================

/// Audio sink that discards every call (tests, headless runs).
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: &str) {}
}

/// Text surface that discards every call (tests, headless runs).
pub struct NullText;

impl TextSurface for NullText {
    fn draw_text(&mut self, _x: i32, _y: i32, _text: &str) {}
}

/// Session that never completes (tests, headless runs).
pub struct IdleSession;

impl GameplaySession for IdleSession {
    fn advance(
        &mut self,
        _input: &InputSnapshot,
        _surface: SurfaceSize,
    ) -> Result<SessionStatus, String> {
        Ok(SessionStatus::Running)
    }

    fn score(&self) -> u32 {
        0
    }

    fn reset(&mut self) {}
}

//=== GameContext =========================================================

/// Shared context data accessible to screens during updates.
///
/// Screens receive `&mut GameContext` for their frame. This separates
/// screen-accessible data from the director itself, whose stack is
/// mutably borrowed while the frame runs (forward transitions go through
/// [`push_screen`](Self::push_screen) instead).
pub struct GameContext {
    /// Current frame's input state (edge-triggered and held).
    pub input: InputSnapshot,

    /// Host drawable dimensions, updated on resize events.
    pub surface: SurfaceSize,

    /// The ranked persistent ladder.
    pub highscores: HighscoreTable,

    /// The configuration store backing the ladder and player settings.
    pub settings: SettingsStore,

    /// Fire-and-forget audio collaborator.
    pub audio: Box<dyn AudioSink>,

    /// Text/rendering collaborator.
    pub text: Box<dyn TextSurface>,

    /// The gameplay simulation behind its seam.
    pub session: Box<dyn GameplaySession>,

    /// Screens queued for a push at the end of the current step.
    pub(crate) screens: ScreenQueue,
}

impl GameContext {
    /// Creates a context around the given collaborators, loading the
    /// highscore ladder from the settings store.
    pub fn new(
        mut settings: SettingsStore,
        audio: Box<dyn AudioSink>,
        text: Box<dyn TextSurface>,
        session: Box<dyn GameplaySession>,
    ) -> Self {
        let highscores = HighscoreTable::load(&mut settings);

        Self {
            input: InputSnapshot::new(),
            surface: SurfaceSize::default(),
            highscores,
            settings,
            audio,
            text,
            session,
            screens: ScreenQueue::new(),
        }
    }

    /// Creates a context with in-memory settings and no-op collaborators.
    ///
    /// The default for tests and headless tooling.
    pub fn headless() -> Self {
        Self::new(
            SettingsStore::in_memory(),
            Box::new(NullAudio),
            Box::new(NullText),
            Box::new(IdleSession),
        )
    }

    /// Queues a screen to become active starting next frame-step.
    pub fn push_screen(&mut self, screen: Box<dyn Screen>) {
        self.screens.push(screen);
    }
}
