//=========================================================================
// Screen Director
//=========================================================================
//
// Owns the screen stack and decides process lifetime.
//
// Screens are owned, boxed, and stored last-in-first-out: the topmost
// screen is the active one, everything beneath it is dormant until it is
// on top again. Reaching an empty stack is the designed termination
// signal, not an error.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::context::GameContext;
use super::{PointerMode, Screen};

//=== FrameControl ========================================================

/// Outcome of one director step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    /// Keep stepping next frame.
    Continue,

    /// The stack emptied; the application should terminate. Terminal —
    /// no further steps occur.
    Exit,
}

//=== ScreenDirector ======================================================

/// Sequences which screen owns input/render focus.
///
/// The director is the sole owner of every screen: pushed screens move
/// into the stack and are destroyed when popped. Exactly one screen (the
/// top) executes per [`step`](Self::step); completion is observed through
/// the screen's own finished flag at the start of the *next* step, so a
/// newly pushed screen always gets at least one full frame before any
/// pop logic examines the stack again.
pub struct ScreenDirector {
    stack: Vec<Box<dyn Screen>>,
}

impl ScreenDirector {
    //--- Construction -----------------------------------------------------

    /// Creates a director with an empty stack.
    ///
    /// Push at least one screen before stepping; an empty stack exits on
    /// the first step.
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    //--- Stack Operations -------------------------------------------------

    /// Pushes a screen on top; it becomes the active screen starting
    /// next frame-step. Always succeeds. The previously active screen
    /// goes dormant until it is again on top.
    pub fn push(&mut self, screen: Box<dyn Screen>) {
        debug!("Pushing screen '{}' onto stack", screen.name());
        self.stack.push(screen);
    }

    /// Returns the number of resident screens.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns true if no screens are resident.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Returns the active screen's name, for diagnostics.
    pub fn active_name(&self) -> Option<&str> {
        self.stack.last().map(|screen| screen.name())
    }

    //--- Derived Properties -----------------------------------------------

    /// Host pointer policy for whatever is currently on top.
    ///
    /// Read-only and derived: captured during gameplay, visible for
    /// every other screen and for an empty stack.
    pub fn pointer_mode(&self) -> PointerMode {
        match self.stack.last() {
            Some(screen) if screen.captures_pointer() => PointerMode::Captured,
            _ => PointerMode::Visible,
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Executes exactly one frame.
    ///
    /// 1. Pops the top screen iff its finished flag is set.
    /// 2. Returns [`FrameControl::Exit`] if the stack is now empty.
    /// 3. Runs the top screen's frame; a fault is logged with the
    ///    screen's name and the screen stays on top (its rendering for
    ///    this frame is simply skipped).
    ///
    /// Screens queued on the context during the frame are pushed
    /// afterwards, in queue order.
    pub fn step(&mut self, context: &mut GameContext) -> FrameControl {
        if self.stack.last().is_some_and(|screen| screen.is_finished()) {
            if let Some(popped) = self.stack.pop() {
                debug!("Popping finished screen '{}'", popped.name());
            }
        }

        let Some(top) = self.stack.last_mut() else {
            info!("Screen stack exhausted, terminating");
            return FrameControl::Exit;
        };

        if let Err(fault) = top.run_frame(context) {
            warn!("Screen '{}' faulted this frame: {}", top.name(), fault);
        }

        for screen in context.screens.take() {
            self.push(screen);
        }

        FrameControl::Continue
    }
}

impl Default for ScreenDirector {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
