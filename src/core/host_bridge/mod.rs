//=========================================================================
// Host Bridge
//=========================================================================
//
// Bridges the host multimedia layer (SDL/winit/etc.) with the core loop.
//
// This module defines the contract between host implementations and
// core logic, enabling host backends to be swapped without changing
// core code.
//
// Components:
// - `interface`: Event and directive types (the contract)
// - `event_collector`: Core-side event collection and buffering
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
mod interface;

//=== Public API ==========================================================

pub use interface::{HostDirective, HostEvent};

//=== Internal API ========================================================

pub(crate) use event_collector::{EventCollector, TickControl};
