//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use apocrypt::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// App facade
pub use crate::app::{App, AppBuilder};

// Screen system
pub use crate::core::screen::{
    CreditsScreen, FrameControl, GameplayScreen, HighscoresScreen, MenuScreen, PointerMode,
    Screen, ScreenDirector, ScreenFault,
};

// Highscore system
pub use crate::core::highscore::{HighscoreRecord, HighscoreTable, TABLE_SIZE};

// Game context and collaborator seams
pub use crate::core::context::{
    AudioCategory, AudioSink, GameContext, GameplaySession, SessionStatus, SurfaceSize,
    TextSurface,
};

// Input
pub use crate::core::input::{InputEvent, InputSnapshot, KeyCode, MouseButton};

// Host bridge
pub use crate::core::host_bridge::{HostDirective, HostEvent};

// Settings
pub use crate::settings::SettingsStore;
