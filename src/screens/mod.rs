//=========================================================================
// Lobby Screens
//=========================================================================
//
// Concrete scenes of the casino lobby and the identity enum keying them.
//
// Navigation graph:
// ```text
//   MainMenu ──start/menu──► GameSelection ──icon──► Poker | Solitaire
//      ▲                        │      ▲              TicTacToe | Blackjack
//      └────────back────────────┘      └─────────back──────┘
// ```
//
// Screens are laid out against a 1920×1080 design resolution and scaled
// uniformly by the viewport height.
//
//=========================================================================

//=== Module Declarations =================================================

mod game_selection;
mod game_table;
mod main_menu;

//=== Public API ==========================================================

pub use game_selection::{GameEntry, GameSelection, GAME_CATALOG, SLIDE_DURATION};
pub use game_table::GameTable;
pub use main_menu::{MainMenu, MenuAction};

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::assets::AssetProvider;
use crate::core::geometry::{Color, Position, Size};
use crate::core::scene::{SceneKey, SceneManager};
use crate::error::LobbyError;

//=== ScreenId ============================================================

/// Identity of every screen in the lobby.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenId {
    MainMenu,
    GameSelection,
    Poker,
    Solitaire,
    TicTacToe,
    Blackjack,
}

impl SceneKey for ScreenId {}

impl ScreenId {
    /// Screens hosting a mini-game table.
    pub const GAMES: [ScreenId; 4] = [
        ScreenId::Poker,
        ScreenId::Solitaire,
        ScreenId::TicTacToe,
        ScreenId::Blackjack,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::MainMenu => "Main Menu",
            Self::GameSelection => "Game Selection",
            Self::Poker => "Poker",
            Self::Solitaire => "Solitaire",
            Self::TicTacToe => "Tic-Tac-Toe",
            Self::Blackjack => "Blackjack",
        }
    }

    /// Asset key of the full-screen background.
    pub fn backdrop_key(self) -> &'static str {
        match self {
            Self::MainMenu => "main_menu_bg",
            Self::GameSelection => "selection_menu_bg",
            Self::Poker => "poker_table_bg",
            Self::Solitaire => "solitaire_table_bg",
            Self::TicTacToe => "tictactoe_board_bg",
            Self::Blackjack => "blackjack_table_bg",
        }
    }

    /// Solid color drawn when the background cannot be.
    pub fn fallback_color(self) -> Color {
        match self {
            Self::MainMenu => Color::rgb(75, 45, 135),
            Self::GameSelection => Color::rgb(120, 80, 200),
            Self::TicTacToe => Color::rgb(40, 40, 70),
            Self::Poker | Self::Solitaire | Self::Blackjack => Color::rgb(20, 90, 40),
        }
    }

    pub fn is_game(self) -> bool {
        Self::GAMES.contains(&self)
    }
}

//=== Layout ==============================================================

/// Design-resolution height every screen is authored against.
const DESIGN_HEIGHT: f32 = 1080.0;

/// Maps design coordinates onto the actual viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Layout {
    viewport: Size,
    scale: f32,
}

impl Layout {
    pub(crate) fn new(viewport: Size) -> Self {
        Self {
            viewport,
            scale: viewport.height as f32 / DESIGN_HEIGHT,
        }
    }

    pub(crate) fn center(&self) -> Position {
        Position::new(
            (self.viewport.width / 2) as i32,
            (self.viewport.height / 2) as i32,
        )
    }

    /// Scales a design length to viewport pixels.
    pub(crate) fn px(&self, design: u32) -> u32 {
        (design as f32 * self.scale) as u32
    }

    /// Scales a design size, keeping at least one pixel per side.
    pub(crate) fn size(&self, design: Size) -> Size {
        Size::new(self.px(design.width).max(1), self.px(design.height).max(1))
    }

    /// Scales a design coordinate to viewport pixels.
    pub(crate) fn coord(&self, design: i32) -> i32 {
        (design as f32 * self.scale) as i32
    }
}

//=== Registration ========================================================

/// Builds every lobby screen and registers it, Main Menu as default.
pub fn register_screens(
    manager: &mut SceneManager<ScreenId>,
    assets: &dyn AssetProvider,
    viewport: Size,
) -> Result<(), LobbyError> {
    if viewport.is_empty() {
        return Err(LobbyError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }

    manager.register_default(MainMenu::new(assets, viewport));
    manager.register_scene(GameSelection::new(assets, viewport)?);
    for game in ScreenId::GAMES {
        manager.register_scene(GameTable::new(game, assets, viewport));
    }

    debug!(target: "lobby", "Registered {} screens for {}x{}", manager.len(), viewport.width, viewport.height);
    Ok(())
}

//=========================================================================
// Unit Tests
//=========================================================================
