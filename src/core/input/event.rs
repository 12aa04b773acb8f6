//=========================================================================
// Input Event Types
//
// Defines the internal representation of low-level input events.
//
// This module abstracts away host-specific input (e.g. SDL, Winit) into
// a unified, portable format consumed by the input snapshot.
//
// Responsibilities:
// - Represent keyboard and pointer inputs in a stable, portable way
// - Provide equality and hashing semantics for deduplication
// - Enable event coalescing (e.g., multiple MouseMoved → last position)
//
// Event Flow:
// ```text
// Host Layer (SDL, Winit, ...)
//         ↓
//    InputEvent (this module)
//         ↓
//    InputSnapshot (processes events)
//         ↓
//    Screens (query edge/held state)
// ```
//
//=========================================================================

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// Abstracts host-specific button representations (e.g., SDL's button
/// codes, Winit's `MouseButton`) into a stable, portable enum. The
/// `Other` variant covers side buttons and any non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons, macro keys).
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// Covers the keys the menu, credits, and highscore screens actually
/// react to; additional keys can be added as needed without breaking
/// existing code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Arrow Keys -------------------------------------------------------

    /// Directional navigation keys
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    /// Spacebar
    Space,

    /// Return/Enter key
    Enter,

    /// Escape key
    Escape,

    //--- Alphabetic Keys --------------------------------------------------

    /// Letter keys used by screen shortcuts (physical location)
    KeyH,
    KeyC,
    KeyP,
    KeyQ,
}

//=== InputEvent ==========================================================

/// A single low-level input event delivered by the host.
///
/// Clone-cheap (no heap allocations), so batches can be freely buffered
/// and coalesced on the bridge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A key transitioned to the down state.
    KeyDown { key: KeyCode },

    /// A key transitioned to the up state.
    KeyUp { key: KeyCode },

    /// A mouse button transitioned to the down state.
    MouseButtonDown { button: MouseButton },

    /// A mouse button transitioned to the up state.
    MouseButtonUp { button: MouseButton },

    /// The pointer moved to a new position (screen coordinates).
    MouseMoved { x: f32, y: f32 },

    /// An event the host could not map to a known input.
    Unidentified,
}
