//=========================================================================
// Host Bridge Interface
//=========================================================================
//
// Host-to-core contract types (events and directives).
//
// The host multimedia layer (window, renderer, input polling) lives
// outside this crate; it ships events in over one channel and receives
// directives back over another. Swapping host backends never touches
// core code.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::context::SurfaceSize;
use crate::core::input::InputEvent;
use crate::core::screen::PointerMode;

//=== HostEvent ===========================================================

/// Events sent from the host to the core loop.
#[derive(Debug, Clone)]
pub enum HostEvent {
    /// Batched input events for a frame.
    Inputs(Vec<InputEvent>),

    /// The drawable surface changed size.
    Resized(SurfaceSize),

    /// The host window is closing.
    Quit,
}

//=== HostDirective =======================================================

/// Directives sent from the core loop back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostDirective {
    /// Apply the given pointer policy (sent on change).
    Pointer(PointerMode),

    /// Warp the pointer back to the surface centre (sent every frame
    /// while the pointer is captured).
    RecentrePointer,
}
