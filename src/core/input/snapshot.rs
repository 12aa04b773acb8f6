//=========================================================================
// Input Snapshot
//=========================================================================
//
// Low-level input state tracking with per-frame delta tracking.
//
// Architecture:
//   InputEvent → process_events() → HashSet (keys/buttons held) → query
//
// Frame lifecycle: begin_frame() → process_events() → finalize_frame() → query
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== Internal Dependencies ===============================================

use super::event::{InputEvent, KeyCode, MouseButton};

//=== InputSnapshot =======================================================

/// Tracks persistent state (keys held) and per-frame deltas (keys pressed/released).
/// Frame lifecycle: begin_frame() → process_events() → finalize_frame() → query.
///
/// Screens receive this through the game context and only ever query it;
/// the app loop owns the frame lifecycle.
pub struct InputSnapshot {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<KeyCode>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: (f32, f32),

    //--- Frame Deltas (reset each frame via begin_frame()) ---------------
    keys_pressed_this_frame: HashSet<KeyCode>,
    keys_released_this_frame: HashSet<KeyCode>,
    mouse_buttons_pressed_this_frame: HashSet<MouseButton>,
    mouse_buttons_released_this_frame: HashSet<MouseButton>,

    //--- Continuous Input (accumulated/calculated) -----------------------
    mouse_delta: (f32, f32),
    last_mouse_position: (f32, f32),
}

impl InputSnapshot {
    /// Creates a new snapshot with empty state.
    pub fn new() -> Self {
        Self {
            keys_down: HashSet::new(),
            mouse_buttons_down: HashSet::new(),
            mouse_position: (0.0, 0.0),
            keys_pressed_this_frame: HashSet::new(),
            keys_released_this_frame: HashSet::new(),
            mouse_buttons_pressed_this_frame: HashSet::new(),
            mouse_buttons_released_this_frame: HashSet::new(),
            mouse_delta: (0.0, 0.0),
            last_mouse_position: (0.0, 0.0),
        }
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas (pressed/released flags).
    pub(crate) fn begin_frame(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
        self.mouse_buttons_pressed_this_frame.clear();
        self.mouse_buttons_released_this_frame.clear();
        self.last_mouse_position = self.mouse_position;
    }

    /// Processes input events, updating internal state.
    pub(crate) fn process_events(&mut self, events: &[InputEvent]) {
        for event in events {
            self.process_event(event);
        }
    }

    /// Finalizes frame calculations (calculates mouse delta).
    pub(crate) fn finalize_frame(&mut self) {
        self.mouse_delta = (
            self.mouse_position.0 - self.last_mouse_position.0,
            self.mouse_position.1 - self.last_mouse_position.1,
        );
    }

    //--- Internal Helpers -------------------------------------------------
    fn process_event(&mut self, event: &InputEvent) {
        match event {
            InputEvent::KeyDown { key } => {
                // Only mark as pressed if it wasn't already down
                if self.keys_down.insert(*key) {
                    self.keys_pressed_this_frame.insert(*key);
                }
            }

            InputEvent::KeyUp { key } => {
                // Only mark as released if it was actually down
                if self.keys_down.remove(key) {
                    self.keys_released_this_frame.insert(*key);
                }
            }

            InputEvent::MouseButtonDown { button } => {
                if self.mouse_buttons_down.insert(*button) {
                    self.mouse_buttons_pressed_this_frame.insert(*button);
                }
            }

            InputEvent::MouseButtonUp { button } => {
                if self.mouse_buttons_down.remove(button) {
                    self.mouse_buttons_released_this_frame.insert(*button);
                }
            }

            InputEvent::MouseMoved { x, y } => {
                self.mouse_position = (*x, *y);
            }

            InputEvent::Unidentified => {
                // Ignore unrecognized events
            }
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN (one frame only).
    ///
    /// Use for discrete actions like menu selection or dismissing a screen.
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while key is held.
    ///
    /// Use for continuous actions like movement.
    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP.
    pub fn is_key_released(&self, key: KeyCode) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    //=====================================================================
    // Query API - Mouse Buttons
    //=====================================================================

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed_this_frame.contains(&button)
    }

    /// Like [`is_key_down`](Self::is_key_down) but for mouse buttons.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Like [`is_key_released`](Self::is_key_released) but for mouse buttons.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.mouse_buttons_released_this_frame.contains(&button)
    }

    //=====================================================================
    // Query API - Pointer Position & Movement
    //=====================================================================

    /// Returns pointer position in screen coordinates (pixels, top-left origin).
    pub fn mouse_position(&self) -> (f32, f32) {
        self.mouse_position
    }

    /// Returns pointer movement delta (0,0 if no movement).
    ///
    /// Useful for aiming during gameplay while the pointer is captured.
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }
}

//--- Trait Implementations -----------------------------------------------

impl Default for InputSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //--- Test Helpers -----------------------------------------------------

    fn key_down(key: KeyCode) -> InputEvent {
        InputEvent::KeyDown { key }
    }

    fn key_up(key: KeyCode) -> InputEvent {
        InputEvent::KeyUp { key }
    }

    fn mouse_down(btn: MouseButton) -> InputEvent {
        InputEvent::MouseButtonDown { button: btn }
    }

    fn mouse_up(btn: MouseButton) -> InputEvent {
        InputEvent::MouseButtonUp { button: btn }
    }

    fn mouse_move(x: f32, y: f32) -> InputEvent {
        InputEvent::MouseMoved { x, y }
    }

    //=====================================================================
    // Keyboard Tests
    //=====================================================================

    /// Tests that is_key_pressed only returns true on transition frame.
    #[test]
    fn key_pressed_only_on_transition_frame() {
        let mut snapshot = InputSnapshot::new();

        // Frame 1: Key down
        snapshot.begin_frame();
        snapshot.process_events(&[key_down(KeyCode::Enter)]);
        snapshot.finalize_frame();
        assert!(snapshot.is_key_pressed(KeyCode::Enter));
        assert!(snapshot.is_key_down(KeyCode::Enter));

        // Frame 2: Key still held, no new event
        snapshot.begin_frame();
        snapshot.finalize_frame();
        assert!(!snapshot.is_key_pressed(KeyCode::Enter));
        assert!(snapshot.is_key_down(KeyCode::Enter));
    }

    /// Tests that is_key_released only returns true on transition frame.
    #[test]
    fn key_released_only_on_transition_frame() {
        let mut snapshot = InputSnapshot::new();

        snapshot.begin_frame();
        snapshot.process_events(&[key_down(KeyCode::Space)]);
        snapshot.finalize_frame();

        snapshot.begin_frame();
        snapshot.process_events(&[key_up(KeyCode::Space)]);
        snapshot.finalize_frame();
        assert!(snapshot.is_key_released(KeyCode::Space));
        assert!(!snapshot.is_key_down(KeyCode::Space));

        snapshot.begin_frame();
        snapshot.finalize_frame();
        assert!(!snapshot.is_key_released(KeyCode::Space));
    }

    /// Tests that a release without a prior press is ignored.
    #[test]
    fn spurious_release_is_ignored() {
        let mut snapshot = InputSnapshot::new();

        snapshot.begin_frame();
        snapshot.process_events(&[key_up(KeyCode::Escape)]);
        snapshot.finalize_frame();

        assert!(!snapshot.is_key_released(KeyCode::Escape));
        assert!(!snapshot.is_key_down(KeyCode::Escape));
    }

    /// Tests that repeated down events do not re-trigger the edge.
    #[test]
    fn auto_repeat_does_not_retrigger_press() {
        let mut snapshot = InputSnapshot::new();

        snapshot.begin_frame();
        snapshot.process_events(&[key_down(KeyCode::ArrowDown)]);
        snapshot.finalize_frame();

        snapshot.begin_frame();
        snapshot.process_events(&[key_down(KeyCode::ArrowDown)]);
        snapshot.finalize_frame();

        assert!(!snapshot.is_key_pressed(KeyCode::ArrowDown));
        assert!(snapshot.is_key_down(KeyCode::ArrowDown));
    }

    //=====================================================================
    // Mouse Tests
    //=====================================================================

    /// Tests button edge tracking mirrors key edge tracking.
    #[test]
    fn button_press_and_release_edges() {
        let mut snapshot = InputSnapshot::new();

        snapshot.begin_frame();
        snapshot.process_events(&[mouse_down(MouseButton::Left)]);
        snapshot.finalize_frame();
        assert!(snapshot.is_button_pressed(MouseButton::Left));
        assert!(snapshot.is_button_down(MouseButton::Left));

        snapshot.begin_frame();
        snapshot.process_events(&[mouse_up(MouseButton::Left)]);
        snapshot.finalize_frame();
        assert!(snapshot.is_button_released(MouseButton::Left));
        assert!(!snapshot.is_button_down(MouseButton::Left));
    }

    /// Tests mouse delta is computed across a frame.
    #[test]
    fn mouse_delta_across_frame() {
        let mut snapshot = InputSnapshot::new();

        snapshot.begin_frame();
        snapshot.process_events(&[mouse_move(100.0, 50.0)]);
        snapshot.finalize_frame();
        assert_eq!(snapshot.mouse_position(), (100.0, 50.0));

        snapshot.begin_frame();
        snapshot.process_events(&[mouse_move(110.0, 45.0)]);
        snapshot.finalize_frame();
        assert_eq!(snapshot.mouse_delta(), (10.0, -5.0));
    }

    /// Tests multiple moves in one frame coalesce to the last position.
    #[test]
    fn mouse_moves_coalesce_within_frame() {
        let mut snapshot = InputSnapshot::new();

        snapshot.begin_frame();
        snapshot.process_events(&[mouse_move(10.0, 10.0), mouse_move(30.0, 40.0)]);
        snapshot.finalize_frame();

        assert_eq!(snapshot.mouse_position(), (30.0, 40.0));
        assert_eq!(snapshot.mouse_delta(), (30.0, 40.0));
    }
}
