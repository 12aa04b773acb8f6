//=========================================================================
// Event Collector
//=========================================================================
//
// Host event collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<HostEvent> → collect_frame() → input_batches → TickControl
//
// Bounded polling prevents starvation. Idle sleep reduces CPU usage.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::Duration;

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::HostEvent;
use crate::core::context::SurfaceSize;
use crate::core::input::InputEvent;

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Collects host events with bounded polling and batch extraction.
pub(crate) struct EventCollector {
    receiver: Receiver<HostEvent>,
    input_batches: Vec<Vec<InputEvent>>,
    resized: Option<SurfaceSize>,
}

impl EventCollector {
    pub(crate) fn new(receiver: Receiver<HostEvent>) -> Self {
        Self {
            receiver,
            input_batches: Vec::with_capacity(4),
            resized: None,
        }
    }

    /// Collects pending host events (bounded to prevent starvation).
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        const MAX_EVENTS_PER_FRAME: usize = 100;
        const IDLE_SLEEP_MS: u64 = 10;

        self.input_batches.clear();
        self.resized = None;
        let mut had_event = false;
        let mut drained = 0;

        while drained < MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    had_event = true;
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= MAX_EVENTS_PER_FRAME {
            warn!("Event queue backlog: drained {} events this frame", drained);
        }

        if !had_event {
            thread::sleep(Duration::from_millis(IDLE_SLEEP_MS));
        }

        TickControl::Continue
    }

    /// Returns collected input batches for this frame.
    pub(crate) fn batches(&self) -> &[Vec<InputEvent>] {
        &self.input_batches
    }

    /// Returns the last resize observed this frame, if any (multiple
    /// resizes coalesce to the final size).
    pub(crate) fn resized(&self) -> Option<SurfaceSize> {
        self.resized
    }

    fn handle_event(&mut self, event: HostEvent) -> TickControl {
        match event {
            HostEvent::Inputs(batch) => {
                if !batch.is_empty() {
                    self.input_batches.push(batch);
                }
                TickControl::Continue
            }
            HostEvent::Resized(size) => {
                self.resized = Some(size);
                TickControl::Continue
            }
            HostEvent::Quit => TickControl::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
