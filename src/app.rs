//=========================================================================
// Apocrypt App
//
// Main entry point and coordinator for the game core.
//
// Architecture:
// ```text
//     AppBuilder  ──build()──>  App  ──run()──>  [Frame Loop]
//         │                      │
//         ├─ with_tps()          └─ collects host events
//         ├─ with_settings()        steps the screen director
//         └─ collaborators          exits when the stack empties
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::context::{
    AudioCategory, AudioSink, GameContext, GameplaySession, IdleSession, NullAudio, NullText,
    TextSurface,
};
use crate::core::host_bridge::{EventCollector, HostDirective, HostEvent, TickControl};
use crate::core::screen::{FrameControl, PointerMode, ScreenDirector};
use crate::settings::SettingsStore;

//=== AppBuilder ==========================================================

/// Builder for configuring and constructing an [`App`].
///
/// Provides a fluent API for setting loop parameters and injecting the
/// external collaborators before construction.
///
/// # Default Values
///
/// - **TPS**: 60.0 (frame steps per second)
/// - **Settings**: platform default location
/// - **Collaborators**: no-ops (headless)
///
/// # Examples
///
/// ```no_run
/// use apocrypt::prelude::*;
/// use crossbeam_channel::unbounded;
///
/// let (_host_tx, events) = unbounded();
/// let (directives, _host_rx) = unbounded();
///
/// AppBuilder::new()
///     .with_tps(60.0)
///     .build()
///     .init(|director, _context| {
///         director.push(Box::new(MenuScreen::new()));
///     })
///     .run(events, directives);
/// ```
pub struct AppBuilder {
    tps: f64,
    settings: Option<SettingsStore>,
    audio: Box<dyn AudioSink>,
    text: Box<dyn TextSurface>,
    session: Box<dyn GameplaySession>,
}

impl AppBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            settings: None,
            audio: Box::new(NullAudio),
            text: Box::new(NullText),
            session: Box::new(IdleSession),
        }
    }

    /// Sets the target frame steps per second.
    ///
    /// The loop maintains this rate with a fixed timestep; one director
    /// step and at most one active screen frame happen per tick.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Uses the given settings store instead of the platform default.
    ///
    /// Tests and portable installs pass [`SettingsStore::in_memory`] or
    /// [`SettingsStore::open`] with an explicit path.
    pub fn with_settings(mut self, settings: SettingsStore) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Installs the audio collaborator.
    pub fn with_audio(mut self, audio: Box<dyn AudioSink>) -> Self {
        self.audio = audio;
        self
    }

    /// Installs the text/rendering collaborator.
    pub fn with_text(mut self, text: Box<dyn TextSurface>) -> Self {
        self.text = text;
        self
    }

    /// Installs the gameplay simulation.
    pub fn with_session(mut self, session: Box<dyn GameplaySession>) -> Self {
        self.session = session;
        self
    }

    /// Builds the app, loading settings and the highscore ladder.
    pub fn build(self) -> App {
        info!("Building app (TPS: {})", self.tps);

        let settings = self.settings.unwrap_or_else(SettingsStore::open_default);
        let mut context = GameContext::new(settings, self.audio, self.text, self.session);

        // Mirror the persisted audio preferences into the sink.
        let (music, effects) = if context.settings.audio_enabled() {
            (context.settings.music_volume(), context.settings.effects_volume())
        } else {
            (0.0, 0.0)
        };
        context.audio.set_volume(AudioCategory::Music, music);
        context.audio.set_volume(AudioCategory::Effects, effects);

        App {
            director: ScreenDirector::new(),
            context,
            tps: self.tps,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== App =================================================================

/// The game core runtime.
///
/// Owns the screen director and the game context, and runs the
/// single-threaded frame loop: everything (event collection, input
/// snapshot, director step, pointer policy) happens on the calling
/// thread within one tick, driven by a fixed timestep.
///
/// Create via [`AppBuilder`], push the initial screen(s) in
/// [`init`](Self::init), then [`run`](Self::run).
pub struct App {
    director: ScreenDirector,
    context: GameContext,
    tps: f64,
}

impl App {
    //--- Initialization ---------------------------------------------------

    /// Initializes the app before execution.
    ///
    /// Provides mutable access to the director and context for pushing
    /// the initial screen(s) and adjusting settings. With no screen
    /// pushed, [`run`](Self::run) exits on its first step.
    pub fn init(mut self, setup: impl FnOnce(&mut ScreenDirector, &mut GameContext)) -> Self {
        setup(&mut self.director, &mut self.context);
        self
    }

    //--- Execution --------------------------------------------------------

    /// Runs the frame loop until the screen stack empties or the host
    /// quits/disconnects.
    ///
    /// `events` carries host input/resize/quit events in; `directives`
    /// carries pointer policy back out. A closed directive channel is
    /// treated like a host disconnect.
    pub fn run(mut self, events: Receiver<HostEvent>, directives: Sender<HostDirective>) {
        info!(
            "Starting frame loop at {} TPS, initial screen: {:?}",
            self.tps,
            self.director.active_name()
        );

        let frame_duration = Duration::from_secs_f64(1.0 / self.tps);
        let mut collector = EventCollector::new(events);
        let mut pointer = self.director.pointer_mode();
        let _ = directives.send(HostDirective::Pointer(pointer));

        loop {
            let frame_start = Instant::now();

            //--- Step 1: Gather host events ----------------------------
            if collector.collect_frame() == TickControl::Exit {
                info!("Host quit, leaving frame loop");
                break;
            }

            if let Some(size) = collector.resized() {
                self.context.surface = size;
            }

            //--- Step 2: Advance the input snapshot --------------------
            self.context.input.begin_frame();
            for batch in collector.batches() {
                self.context.input.process_events(batch);
            }
            self.context.input.finalize_frame();

            //--- Step 3: One director step -----------------------------
            if self.director.step(&mut self.context) == FrameControl::Exit {
                break;
            }

            //--- Step 4: Apply pointer policy --------------------------
            if !self.apply_pointer_policy(&directives, &mut pointer) {
                warn!("Directive channel closed, leaving frame loop");
                break;
            }

            //--- Step 5: Maintain fixed pacing -------------------------
            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                std::thread::sleep(frame_duration - elapsed);
            }
        }

        info!("Frame loop ended");
    }

    //--- Internal Helpers -------------------------------------------------

    /// Relays the derived pointer policy to the host. Returns false when
    /// the host side is gone.
    fn apply_pointer_policy(
        &self,
        directives: &Sender<HostDirective>,
        pointer: &mut PointerMode,
    ) -> bool {
        let mode = self.director.pointer_mode();
        if mode != *pointer {
            *pointer = mode;
            if directives.send(HostDirective::Pointer(mode)).is_err() {
                return false;
            }
        }

        // Captured pointer is recentred every frame.
        if mode == PointerMode::Captured
            && directives.send(HostDirective::RecentrePointer).is_err()
        {
            return false;
        }

        true
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::screen::{Screen, ScreenFault};
    use crossbeam_channel::unbounded;

    //--- Test Helpers -----------------------------------------------------

    /// Screen that finishes after a fixed number of frames.
    struct CountdownScreen {
        frames_left: u32,
        captures: bool,
    }

    impl Screen for CountdownScreen {
        fn name(&self) -> &str {
            "countdown"
        }

        fn is_finished(&self) -> bool {
            self.frames_left == 0
        }

        fn run_frame(&mut self, _context: &mut GameContext) -> Result<(), ScreenFault> {
            self.frames_left = self.frames_left.saturating_sub(1);
            Ok(())
        }

        fn captures_pointer(&self) -> bool {
            self.captures
        }
    }

    fn fast_app() -> App {
        AppBuilder::new()
            .with_tps(1000.0)
            .with_settings(SettingsStore::in_memory())
            .build()
    }

    //--- Builder Tests ----------------------------------------------------

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_rejects_zero_tps() {
        let _ = AppBuilder::new().with_tps(0.0);
    }

    //--- Run Loop Tests ---------------------------------------------------

    #[test]
    fn run_returns_when_the_stack_empties() {
        let (_host_tx, events) = unbounded();
        let (directives, host_rx) = unbounded();

        fast_app()
            .init(|director, _context| {
                director.push(Box::new(CountdownScreen { frames_left: 2, captures: false }));
            })
            .run(events, directives);

        // Initial pointer policy was announced.
        assert_eq!(host_rx.try_recv(), Ok(HostDirective::Pointer(PointerMode::Visible)));
    }

    #[test]
    fn run_with_no_screens_exits_immediately() {
        let (_host_tx, events) = unbounded();
        let (directives, _host_rx) = unbounded();

        fast_app().run(events, directives);
    }

    #[test]
    fn host_quit_ends_a_running_loop() {
        let (host_tx, events) = unbounded();
        let (directives, _host_rx) = unbounded();

        host_tx.send(HostEvent::Quit).unwrap();

        fast_app()
            .init(|director, _context| {
                director.push(Box::new(CountdownScreen {
                    frames_left: u32::MAX,
                    captures: false,
                }));
            })
            .run(events, directives);
    }

    #[test]
    fn captured_pointer_is_recentred_every_frame() {
        let (host_tx, events) = unbounded();
        let (directives, host_rx) = unbounded();

        host_tx
            .send(HostEvent::Resized(crate::core::context::SurfaceSize {
                width: 800,
                height: 600,
            }))
            .unwrap();

        fast_app()
            .init(|director, _context| {
                director.push(Box::new(CountdownScreen { frames_left: 3, captures: true }));
            })
            .run(events, directives);

        let sent: Vec<HostDirective> = host_rx.try_iter().collect();
        // Gameplay was already on top when the loop started.
        assert_eq!(sent[0], HostDirective::Pointer(PointerMode::Captured));
        assert!(
            sent.iter()
                .filter(|d| **d == HostDirective::RecentrePointer)
                .count()
                >= 2
        );
    }
}
