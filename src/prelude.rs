//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use casino_lobby::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Launcher
pub use crate::launcher::{Launcher, LauncherBuilder};
pub use crate::lobby::{FrameControl, Lobby};

// Geometry and rendering
pub use crate::core::geometry::{Color, Position, Rect, Size};
pub use crate::core::render::{Canvas, Surface, Visual};

// Assets
pub use crate::core::assets::{AssetManager, AssetProvider};

// Input
pub use crate::core::input::{InputBatch, InputEvent, KeyCode, MouseButton};

// Scene system
pub use crate::core::scene::{NextScene, Scene, SceneKey, SceneManager};

// Lobby screens
pub use crate::screens::ScreenId;
