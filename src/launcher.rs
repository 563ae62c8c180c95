//=========================================================================
// Launcher
//
// Main entry point and coordinator for the casino lobby.
//
// Architecture:
// ```text
//     LauncherBuilder  ──build()──>  Launcher  ──run()──>  [Runtime]
//         │                             │
//         ├─ with_title()               ├─ loads assets
//         ├─ with_viewport()            ├─ builds the lobby
//         ├─ with_fps()                 └─ runs platform,
//         ├─ with_loading_duration()       blocks until exit
//         └─ with_asset_root()
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::PathBuf;
use std::time::Duration;

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::assets::AssetManager;
use crate::core::geometry::Size;
use crate::core::scene::DEFAULT_LOADING_DURATION;
use crate::error::LobbyError;
use crate::lobby::Lobby;
use crate::platform::{Platform, PlatformConfig};

//=== Defaults ============================================================

pub const DEFAULT_TITLE: &str = "Let's Play The Game";
pub const DEFAULT_VIEWPORT: Size = Size::new(1280, 720);
pub const DEFAULT_FPS: f64 = 60.0;
pub const MIN_FPS: f64 = 1.0;
pub const MAX_FPS: f64 = 1000.0;
pub const DEFAULT_ASSET_ROOT: &str = "assets";

//=== LauncherBuilder =====================================================

/// Builder for configuring and constructing a [`Launcher`].
///
/// # Default Values
///
/// - **Title**: "Let's Play The Game"
/// - **Viewport**: 1280×720 canvas pixels
/// - **FPS**: 60.0
/// - **Loading duration**: 850 ms
/// - **Asset root**: `assets/`
///
/// # Examples
///
/// Simple usage with defaults:
/// ```no_run
/// use casino_lobby::LauncherBuilder;
///
/// LauncherBuilder::new().build().run()?;
/// # Ok::<(), casino_lobby::LobbyError>(())
/// ```
///
/// Advanced configuration:
/// ```no_run
/// # use casino_lobby::LauncherBuilder;
/// use std::time::Duration;
///
/// LauncherBuilder::new()
///     .with_viewport(1920, 1080)
///     .with_fps(120.0)
///     .with_loading_duration(Duration::from_millis(400))
///     .with_asset_root("/opt/lobby/assets")
///     .build()
///     .run()?;
/// # Ok::<(), casino_lobby::LobbyError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LauncherBuilder {
    title: String,
    viewport: Size,
    fps: f64,
    loading_duration: Duration,
    asset_root: PathBuf,
}

impl LauncherBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            title: DEFAULT_TITLE.to_owned(),
            viewport: DEFAULT_VIEWPORT,
            fps: DEFAULT_FPS,
            loading_duration: DEFAULT_LOADING_DURATION,
            asset_root: PathBuf::from(DEFAULT_ASSET_ROOT),
        }
    }

    /// Sets the window title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the canvas resolution every screen is laid out for.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        assert!(
            width > 0 && height > 0,
            "Viewport must be non-empty, got {}x{}",
            width,
            height
        );
        self.viewport = Size::new(width, height);
        self
    }

    /// Sets the target frames per second.
    ///
    /// Default: 60.0
    ///
    /// # Panics
    ///
    /// Panics if `fps` is outside [`MIN_FPS`]..=[`MAX_FPS`].
    pub fn with_fps(mut self, fps: f64) -> Self {
        assert!(
            (MIN_FPS..=MAX_FPS).contains(&fps),
            "FPS must be within {}..={}, got {}",
            MIN_FPS,
            MAX_FPS,
            fps
        );
        self.fps = fps;
        self
    }

    /// Sets how long the loading overlay is shown per transition.
    pub fn with_loading_duration(mut self, duration: Duration) -> Self {
        self.loading_duration = duration;
        self
    }

    /// Sets the directory image files are loaded from.
    pub fn with_asset_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.asset_root = root.into();
        self
    }

    /// Builds the launcher instance.
    pub fn build(self) -> Launcher {
        info!(
            "Building launcher ({}x{}, FPS: {}, loading: {:?})",
            self.viewport.width, self.viewport.height, self.fps, self.loading_duration
        );

        Launcher { config: self }
    }
}

impl Default for LauncherBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Launcher ============================================================

/// Casino lobby runtime.
///
/// Create via [`LauncherBuilder`] with `LauncherBuilder::new().build()`.
#[derive(Debug, Clone)]
pub struct Launcher {
    config: LauncherBuilder,
}

impl Launcher {
    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn viewport(&self) -> Size {
        self.config.viewport
    }

    pub fn fps(&self) -> f64 {
        self.config.fps
    }

    pub fn loading_duration(&self) -> Duration {
        self.config.loading_duration
    }

    pub fn asset_root(&self) -> &std::path::Path {
        &self.config.asset_root
    }

    //--- Execution --------------------------------------------------------

    /// Loads assets, builds the lobby and blocks until the window closes.
    ///
    /// # Lifecycle
    ///
    /// 1. Loads the image manifest (missing files become placeholders)
    /// 2. Builds every screen and activates the main menu
    /// 3. Runs the platform event loop (blocks here)
    ///
    /// # Errors
    ///
    /// Returns [`LobbyError`] if the lobby cannot be built or the platform
    /// fails to start.
    pub fn run(self) -> Result<(), LobbyError> {
        info!("Starting launcher runtime (FPS: {})", self.config.fps);

        //--- 1. Assets ----------------------------------------------------
        let assets = AssetManager::load(&self.config.asset_root);

        //--- 2. Lobby -----------------------------------------------------
        let lobby = Lobby::new(&assets, self.config.viewport, self.config.loading_duration)?;
        info!("Lobby ready, entering event loop");

        //--- 3. Platform --------------------------------------------------
        let platform = Platform::new(
            lobby,
            PlatformConfig {
                title: self.config.title,
                viewport: self.config.viewport,
                fps: self.config.fps,
            },
        );
        platform.run()?;

        info!("Launcher shutdown complete");
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    //=====================================================================
    // LauncherBuilder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let launcher = LauncherBuilder::new().build();
        assert_eq!(launcher.title(), "Let's Play The Game");
        assert_eq!(launcher.viewport(), Size::new(1280, 720));
        assert_eq!(launcher.fps(), 60.0);
        assert_eq!(launcher.loading_duration(), Duration::from_millis(850));
        assert_eq!(launcher.asset_root(), std::path::Path::new("assets"));
    }

    #[test]
    fn builder_with_fps() {
        let launcher = LauncherBuilder::new().with_fps(120.0).build();
        assert_eq!(launcher.fps(), 120.0);
    }

    #[test]
    #[should_panic(expected = "FPS must be within")]
    fn builder_with_fps_panics_on_zero() {
        LauncherBuilder::new().with_fps(0.0);
    }

    #[test]
    #[should_panic(expected = "FPS must be within")]
    fn builder_with_fps_panics_on_negative() {
        LauncherBuilder::new().with_fps(-60.0);
    }

    #[test]
    #[should_panic(expected = "FPS must be within")]
    fn builder_with_fps_panics_on_vanishing_rate() {
        LauncherBuilder::new().with_fps(1e-30);
    }

    #[test]
    #[should_panic(expected = "FPS must be within")]
    fn builder_with_fps_panics_on_nan() {
        LauncherBuilder::new().with_fps(f64::NAN);
    }

    #[test]
    #[should_panic(expected = "Viewport must be non-empty")]
    fn builder_with_viewport_panics_on_zero() {
        LauncherBuilder::new().with_viewport(0, 720);
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let launcher = LauncherBuilder::new()
            .with_title("Lobby")
            .with_viewport(1920, 1080)
            .with_loading_duration(Duration::from_millis(200))
            .with_asset_root("/tmp/lobby")
            .build();

        assert_eq!(launcher.title(), "Lobby");
        assert_eq!(launcher.viewport(), Size::new(1920, 1080));
        assert_eq!(launcher.loading_duration(), Duration::from_millis(200));
        assert_eq!(launcher.asset_root(), std::path::Path::new("/tmp/lobby"));
    }
}
