//=========================================================================
// Casino Lobby — Library Root
//
// This crate defines the public API surface of the casino lobby launcher.
//
// Responsibilities:
// - Expose the launcher entry point (`LauncherBuilder`, `Launcher`)
// - Expose the scene orchestration core and the lobby screens so they
//   can be driven headless
// - Keep the window/presentation layer (`platform`) hidden
//
// Typical usage:
// ```no_run
// use casino_lobby::LauncherBuilder;
//
// fn main() -> Result<(), casino_lobby::LobbyError> {
//     LauncherBuilder::new().build().run()
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the window-independent systems (render surface, assets,
// input, UI elements, scenes). `screens` holds the concrete lobby scenes.
//
pub mod core;
pub mod prelude;
pub mod screens;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the Winit/pixels integration and is kept private,
// as it is not part of the public API surface.
//
mod error;
mod launcher;
mod lobby;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use error::LobbyError;
pub use launcher::{Launcher, LauncherBuilder, MAX_FPS, MIN_FPS};
pub use lobby::{FrameControl, Lobby};
pub use platform::PlatformError;
