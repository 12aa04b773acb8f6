//=========================================================================
// Input
//
// Portable input types and the per-frame input snapshot.
//
// The host translates its native events into `InputEvent`s and ships them
// over the host bridge. The app loop feeds them into the `InputSnapshot`,
// which screens query for edge-triggered (pressed/released) and held state.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;
mod snapshot;

//=== Public API ==========================================================

pub use event::{InputEvent, KeyCode, MouseButton};
pub use snapshot::InputSnapshot;
