//=========================================================================
// Asset Provider
//=========================================================================
//
// Image lookup consumed by screens through a narrow trait.
//
// Architecture:
// ```text
//   AssetProvider (trait)         AssetManager (implementation)
//     ├─ image(key)                 ├─ IMAGE_MANIFEST: key → file
//     ├─ scaled_image(key, size)    ├─ PNG decode via `image`
//     └─ contains(key)              └─ placeholder per missing key
// ```
//
// Lookups never fail: a missing or undecodable file is replaced by a
// placeholder at load time, and unknown keys resolve to one shared
// fallback visual so repeated lookups return the same handle.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Color, Size};
use crate::core::render::Visual;

//=== AssetProvider Trait =================================================

/// Read-only image source shared by every screen.
pub trait AssetProvider {
    /// Returns the image for `key`, or a stable placeholder if none exists.
    fn image(&self, key: &str) -> Visual;

    /// True if a real asset (not a placeholder) was loaded for `key`.
    fn contains(&self, key: &str) -> bool;

    /// Returns the image for `key` resized to `size`.
    ///
    /// A degenerate size is logged and the unscaled image is returned.
    fn scaled_image(&self, key: &str, size: Size) -> Visual {
        let image = self.image(key);
        match image.scaled(size) {
            Ok(scaled) => scaled,
            Err(e) => {
                warn!(target: "assets", "Cannot scale '{}': {}", key, e);
                image
            }
        }
    }
}

//=== AssetError ==========================================================

/// Reasons an image could not be loaded from disk.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("asset file not found: {}", .0.display())]
    Missing(PathBuf),

    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

//=== Manifest ============================================================

/// One image the launcher expects under the asset root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageSpec {
    pub key: &'static str,
    pub file: &'static str,
    /// Size of the placeholder generated when the file is unavailable.
    pub placeholder: Size,
}

const BACKGROUND: Size = Size::new(1920, 1080);
const ICON: Size = Size::new(300, 300);
const ARROW: Size = Size::new(100, 100);
const BUTTON: Size = Size::new(235, 99);
const DEFAULT_PLACEHOLDER: Size = Size::new(200, 100);

const fn spec(key: &'static str, file: &'static str, placeholder: Size) -> ImageSpec {
    ImageSpec { key, file, placeholder }
}

/// Every image loaded at start-up.
pub const IMAGE_MANIFEST: &[ImageSpec] = &[
    //--- Main menu --------------------------------------------------------
    spec("main_menu_bg", "images/menu-complete.png", BACKGROUND),
    spec("start_button", "images/start-button-menu.png", BUTTON),
    spec("menu_button", "images/menu_button-menu.png", BUTTON),
    spec("options_button", "images/option_button-menu.png", BUTTON),
    //--- Game selection ---------------------------------------------------
    spec("selection_menu_bg", "images/poker-menu-background.png", BACKGROUND),
    spec("poker_icon", "images/poker-icon.png", ICON),
    spec("solitaire_icon", "images/solitaire-icon.png", ICON),
    spec("tictactoe_icon", "images/tictactoe-icon.png", ICON),
    spec("blackjack_icon", "images/blackjack-icon.png", ICON),
    spec("arrow_left", "images/arrow-left.png", ARROW),
    spec("arrow_right", "images/arrow-right.png", ARROW),
    spec("back_arrow", "images/back-arrow.png", ARROW),
    //--- Game tables ------------------------------------------------------
    spec("poker_table_bg", "images/poker-table.png", BACKGROUND),
    spec("solitaire_table_bg", "images/solitaire-table.png", BACKGROUND),
    spec("tictactoe_board_bg", "images/tictactoe-board.png", BACKGROUND),
    spec("blackjack_table_bg", "images/blackjack-table.png", BACKGROUND),
    //--- Loading ----------------------------------------------------------
    spec("loading_screen_bg", "images/loading-screen.png", BACKGROUND),
];

//=== Placeholder =========================================================

const PLACEHOLDER_FILL: Color = Color::rgba(255, 0, 255, 180);
const PLACEHOLDER_BORDER: u32 = 3;

/// Translucent magenta rectangle with a white border.
pub fn placeholder(size: Size) -> Visual {
    let fill = Rgba(PLACEHOLDER_FILL.to_array());
    let border = Rgba(Color::WHITE.to_array());

    let image = RgbaImage::from_fn(size.width, size.height, |x, y| {
        let edge = x < PLACEHOLDER_BORDER
            || y < PLACEHOLDER_BORDER
            || x + PLACEHOLDER_BORDER >= size.width
            || y + PLACEHOLDER_BORDER >= size.height;
        if edge {
            border
        } else {
            fill
        }
    });

    Visual::from_image(image)
}

//=== AssetManager ========================================================

/// Loads the image manifest once and serves lookups from memory.
pub struct AssetManager {
    images: HashMap<String, Visual>,
    loaded: HashSet<String>,
    fallback: Visual,
}

impl AssetManager {
    //--- Construction -----------------------------------------------------

    /// Loads every manifest entry from `root`.
    ///
    /// Missing or undecodable files are logged and replaced by
    /// placeholders; loading itself never fails.
    pub fn load(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        info!(target: "assets", "Loading {} images from {}", IMAGE_MANIFEST.len(), root.display());

        let mut manager = Self::empty();
        for spec in IMAGE_MANIFEST {
            match load_image(&root.join(spec.file)) {
                Ok(visual) => {
                    let size = visual.size();
                    debug!(target: "assets", "Loaded {} ({}x{})", spec.file, size.width, size.height);
                    manager.insert(spec.key, visual);
                }
                Err(e) => {
                    warn!(target: "assets", "{}; using placeholder for '{}'", e, spec.key);
                    manager.images.insert(spec.key.to_owned(), placeholder(spec.placeholder));
                }
            }
        }

        info!(
            target: "assets",
            "Asset loading complete: {} loaded, {} placeholders",
            manager.loaded.len(),
            IMAGE_MANIFEST.len() - manager.loaded.len()
        );
        manager
    }

    /// Creates a manager where every manifest key resolves to a placeholder.
    ///
    /// Useful for headless runs and tests.
    pub fn placeholders() -> Self {
        let mut manager = Self::empty();
        for spec in IMAGE_MANIFEST {
            manager
                .images
                .insert(spec.key.to_owned(), placeholder(spec.placeholder));
        }
        manager
    }

    fn empty() -> Self {
        Self {
            images: HashMap::new(),
            loaded: HashSet::new(),
            fallback: placeholder(DEFAULT_PLACEHOLDER),
        }
    }

    //--- Mutation ---------------------------------------------------------

    /// Registers a real image under `key`, replacing any placeholder.
    pub fn insert(&mut self, key: impl Into<String>, visual: Visual) {
        let key = key.into();
        self.loaded.insert(key.clone());
        self.images.insert(key, visual);
    }
}

impl AssetProvider for AssetManager {
    fn image(&self, key: &str) -> Visual {
        match self.images.get(key) {
            Some(visual) => visual.clone(),
            None => {
                debug!(target: "assets", "Unknown image key '{}', using fallback", key);
                self.fallback.clone()
            }
        }
    }

    fn contains(&self, key: &str) -> bool {
        self.loaded.contains(key)
    }
}

//=== Internal Helpers ====================================================

fn load_image(path: &Path) -> Result<Visual, AssetError> {
    if !path.exists() {
        return Err(AssetError::Missing(path.to_path_buf()));
    }

    let image = image::open(path).map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Visual::from_image(image.to_rgba8()))
}

//=========================================================================
// Unit Tests
//=========================================================================
