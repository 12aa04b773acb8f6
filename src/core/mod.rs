//=========================================================================
// Core Systems
//
// The parts of the game with actual invariants: the screen stack that
// sequences full-focus modes and decides process lifetime, the ranked
// persistent highscore ladder, and the context threaded through every
// frame. The host multimedia layer stays outside, behind the bridge.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod context;
pub mod highscore;
pub mod host_bridge;
pub mod input;
pub mod screen;
