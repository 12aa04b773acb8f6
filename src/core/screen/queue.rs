//=========================================================================
// Screen Queue
//=========================================================================
//
// Deferred-push queue for forward screen transitions.
//
// Screens queue new screens here during their frame (the director holds
// the stack mutably while the frame runs). The director drains the queue
// at the end of each step, so a pushed screen becomes active on the next
// frame-step.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use super::Screen;

//=== Screen Queue ========================================================

/// Queue of screens awaiting a push onto the director's stack.
///
/// Order-preserving: screens are pushed in the order they were queued,
/// so the last queued screen ends up on top.
pub struct ScreenQueue {
    queue: Vec<Box<dyn Screen>>,
}

impl ScreenQueue {
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    /// Queues a screen to be pushed at the end of the current step.
    pub fn push(&mut self, screen: Box<dyn Screen>) {
        self.queue.push(screen);
    }

    /// Returns true if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns the number of queued screens.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Takes all queued screens, leaving the queue empty.
    ///
    /// Efficient operation using mem::take internally. Used by the
    /// director to apply all queued pushes.
    pub fn take(&mut self) -> Vec<Box<dyn Screen>> {
        std::mem::take(&mut self.queue)
    }
}

impl Default for ScreenQueue {
    fn default() -> Self {
        Self::new()
    }
}
