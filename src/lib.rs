//=========================================================================
// Apocrypt — Library Root
//
// This crate is the screen-management and progression core of the
// Apocrypt action game: the stack-based screen director that sequences
// full-focus modes (menu, gameplay, credits, highscores) and the ranked
// persistent highscore ladder.
//
// Responsibilities:
// - Expose the app facade (`App`/`AppBuilder`) and the core types
// - Keep the host multimedia layer outside, behind the host bridge
// - Provide clean separation between the high-level facade and the
//   subsystems (screens, highscores, input, settings)
//
// Typical usage:
// ```no_run
// use apocrypt::prelude::*;
// use crossbeam_channel::unbounded;
//
// fn main() {
//     let (_host_tx, events) = unbounded();
//     let (directives, _host_rx) = unbounded();
//
//     AppBuilder::new()
//         .build()
//         .init(|director, _context| {
//             director.push(Box::new(MenuScreen::new()));
//         })
//         .run(events, directives);
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` contains the screen, highscore, input, and bridge subsystems.
// It is exposed publicly for extensibility (games define their own
// screens against the `Screen` trait), but application code will mostly
// use the top-level `App` facade.
//
// `settings` is the key-value configuration store the ladder and player
// preferences persist through.
//
pub mod core;
pub mod settings;

//--- Internal Modules ----------------------------------------------------
//
// `app` defines the main entry point and the frame loop.
//
mod app;

//--- Public Exports ------------------------------------------------------
//
// Re-exports the facade as the main entry point for applications, so
// users can simply `use apocrypt::{App, AppBuilder};`.
//
pub use app::{App, AppBuilder};

pub mod prelude;
