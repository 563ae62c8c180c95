//=========================================================================
// Lobby Errors
//=========================================================================
//
// Start-up failures that propagate to the binary. Everything recoverable
// at runtime (missing assets, rejected transitions, blit failures) is
// logged where it happens instead.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::platform::PlatformError;

//=== LobbyError ==========================================================

#[derive(Debug, Error)]
pub enum LobbyError {
    /// The game selection screen was built without any games.
    #[error("game catalog is empty")]
    EmptyCatalog,

    /// The render viewport has a zero dimension.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error(transparent)]
    Platform(#[from] PlatformError),
}
