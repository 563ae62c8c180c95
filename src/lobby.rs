//=========================================================================
// Lobby
//=========================================================================
//
// Frame loop of the launcher, independent of any window system.
//
// Each call to `frame` runs exactly one pass:
// ```text
//   InputBatch ──► quit? ──yes──► FrameControl::Exit
//                    │ no
//                    ▼
//   SceneManager::handle_events → update(dt) → draw(canvas)
// ```
//
// The platform layer presents the canvas afterwards; tests read it back.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::assets::AssetProvider;
use crate::core::geometry::Size;
use crate::core::input::{InputBatch, KeyCode};
use crate::core::render::{Canvas, Visual};
use crate::core::scene::{LoadingOverlay, SceneManager};
use crate::error::LobbyError;
use crate::screens::{self, ScreenId};

//=== FrameControl ========================================================

/// Whether the frame loop keeps running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameControl {
    Continue,
    Exit,
}

//=== Lobby ===============================================================

pub struct Lobby {
    scenes: SceneManager<ScreenId>,
    canvas: Canvas,
}

impl Lobby {
    /// Builds every screen for `viewport` and activates the main menu.
    pub fn new(
        assets: &dyn AssetProvider,
        viewport: Size,
        loading_duration: Duration,
    ) -> Result<Self, LobbyError> {
        let loading_backdrop: Option<Visual> = assets
            .contains("loading_screen_bg")
            .then(|| assets.image("loading_screen_bg"));

        let mut scenes = SceneManager::new()
            .with_loading_duration(loading_duration)
            .with_loading_overlay(LoadingOverlay::new(loading_backdrop));
        screens::register_screens(&mut scenes, assets, viewport)?;
        scenes.start();

        Ok(Self {
            scenes,
            canvas: Canvas::new(viewport),
        })
    }

    /// Runs one frame. Returns [`FrameControl::Exit`] on quit or Escape.
    pub fn frame(&mut self, input: &InputBatch, dt: Duration) -> FrameControl {
        if input.quit_requested() || input.keys_pressed().any(|key| key == KeyCode::Escape) {
            info!(target: "lobby", "Quit requested");
            return FrameControl::Exit;
        }

        self.scenes.handle_events(input);
        self.scenes.update(dt);
        self.scenes.draw(&mut self.canvas);

        FrameControl::Continue
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn scenes(&self) -> &SceneManager<ScreenId> {
        &self.scenes
    }

    pub fn active_screen(&self) -> Option<ScreenId> {
        self.scenes.active_key()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::AssetManager;
    use crate::core::geometry::Position;
    use crate::core::input::InputEvent;
    use crate::core::render::Surface;

    const VIEWPORT: Size = Size::new(320, 180);
    const FRAME: Duration = Duration::from_millis(16);

    fn lobby() -> Lobby {
        Lobby::new(&AssetManager::placeholders(), VIEWPORT, Duration::from_millis(50)).unwrap()
    }

    #[test]
    fn starts_on_main_menu() {
        let lobby = lobby();
        assert_eq!(lobby.active_screen(), Some(ScreenId::MainMenu));
        assert!(!lobby.scenes().is_loading());
        assert_eq!(lobby.canvas().size(), VIEWPORT);
    }

    #[test]
    fn quit_request_exits() {
        let mut lobby = lobby();
        let input = InputBatch::default().with_event(InputEvent::QuitRequested);
        assert_eq!(lobby.frame(&input, FRAME), FrameControl::Exit);
    }

    #[test]
    fn escape_exits() {
        let mut lobby = lobby();
        let input = InputBatch::default().with_key(KeyCode::Escape);
        assert_eq!(lobby.frame(&input, FRAME), FrameControl::Exit);
    }

    #[test]
    fn enter_reaches_selection_after_loading() {
        let mut lobby = lobby();

        let control = lobby.frame(&InputBatch::default().with_key(KeyCode::Enter), FRAME);
        assert_eq!(control, FrameControl::Continue);
        assert_eq!(lobby.scenes().state().target(), Some(ScreenId::GameSelection));

        for _ in 0..4 {
            lobby.frame(&InputBatch::new(Position::ORIGIN), FRAME);
        }

        assert_eq!(lobby.active_screen(), Some(ScreenId::GameSelection));
        assert!(!lobby.scenes().is_loading());
    }

    #[test]
    fn empty_viewport_is_rejected() {
        let result = Lobby::new(&AssetManager::placeholders(), Size::new(0, 0), FRAME);
        assert!(matches!(result, Err(LobbyError::InvalidViewport { .. })));
    }
}
