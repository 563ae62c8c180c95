//=========================================================================
// Game Selection
//=========================================================================
//
// Carousel over the playable games.
//
// Layout (1080p design units, scaled by viewport height):
// ```text
//   [back]                                   back:  80×80 at (80, 80)
//
//                     SELECT GAME            title: centered at y 120,
//                   three instruction lines         4 px drop shadow
//                                            lines: y 180, 35 apart
//        [<]        [ selected icon ]        [>]
//                                            icon:  15% of width, centered
//                                                   50 above screen center
//                                            arrows: 8% of width, icon + 80
//                                                   away from the center
// ```
//
// The selected icon is a button rebuilt whenever the index changes. A short
// slide offsets its drawing (never its hit rectangle) in the direction of
// travel. Text is rendered once at construction and drawn above
// everything else.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::{Layout, ScreenId};
use crate::core::assets::AssetProvider;
use crate::core::geometry::{Color, Position, Rect, Size};
use crate::core::input::{InputBatch, InputEvent, KeyCode, MouseButton};
use crate::core::render::{Backdrop, Surface, TextRenderer, Visual};
use crate::core::scene::{NextScene, Scene};
use crate::core::ui::{Button, Carousel};
use crate::error::LobbyError;

//=== Constants ===========================================================

/// Time the selected icon takes to slide into place.
pub const SLIDE_DURATION: Duration = Duration::from_millis(180);

const ICON_WIDTH_RATIO: f32 = 0.15;
const ARROW_WIDTH_RATIO: f32 = 0.08;
const ICON_RAISE: i32 = 50;
const ARROW_GAP: u32 = 80;
const BACK_SIZE: u32 = 80;
const BACK_CENTER: i32 = 80;

const TITLE: &str = "SELECT GAME";
const INSTRUCTIONS: [&str; 3] = [
    "Click the center icon to start game",
    "Use arrows to browse games",
    "Back button to return to menu",
];
const TITLE_PX: u32 = 64;
const TITLE_Y: i32 = 120;
const INSTRUCTION_PX: u32 = 26;
const INSTRUCTION_Y: i32 = 180;
const INSTRUCTION_SPACING: i32 = 35;
const SHADOW_OFFSET: i32 = 4;

const TITLE_COLOR: Color = Color::WHITE;
const SHADOW_COLOR: Color = Color::rgb(80, 40, 120);
const INSTRUCTION_COLOR: Color = Color::rgb(220, 220, 255);

//=== GameEntry ===========================================================

/// One carousel entry: display name, icon asset, and destination screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameEntry {
    pub name: &'static str,
    pub icon_key: &'static str,
    pub destination: ScreenId,
}

/// Games offered by the lobby, in carousel order.
pub const GAME_CATALOG: [GameEntry; 4] = [
    GameEntry {
        name: "Poker",
        icon_key: "poker_icon",
        destination: ScreenId::Poker,
    },
    GameEntry {
        name: "Solitaire",
        icon_key: "solitaire_icon",
        destination: ScreenId::Solitaire,
    },
    GameEntry {
        name: "Tic-Tac-Toe",
        icon_key: "tictactoe_icon",
        destination: ScreenId::TicTacToe,
    },
    GameEntry {
        name: "Blackjack",
        icon_key: "blackjack_icon",
        destination: ScreenId::Blackjack,
    },
];

//=== Slide ===============================================================

/// Remaining slide time and direction (+1 from the right, -1 from the left).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slide {
    remaining: Duration,
    direction: i32,
}

//=== Caption =============================================================

/// Pre-rendered line of text and where its top-left corner goes.
struct Caption {
    visual: Visual,
    origin: Position,
}

impl Caption {
    fn centered(
        text: &TextRenderer,
        line: &str,
        px: u32,
        color: Color,
        center: Position,
    ) -> Option<Self> {
        match text.render(line, px.max(1) as f32, color) {
            Ok(visual) => {
                let origin = Rect::from_center(center, visual.size()).origin();
                Some(Self { visual, origin })
            }
            Err(e) => {
                warn!(target: "render", "Cannot render '{}': {}", line, e);
                None
            }
        }
    }
}

/// Title with its drop shadow, then the instruction lines.
fn captions(layout: &Layout) -> Vec<Caption> {
    let text = match TextRenderer::embedded() {
        Ok(text) => text,
        Err(e) => {
            warn!(target: "render", "Game selection text disabled: {}", e);
            return Vec::new();
        }
    };

    let center_x = layout.center().x;
    let title_center = Position::new(center_x, layout.coord(TITLE_Y));
    let shadow = layout.coord(SHADOW_OFFSET);
    let title_px = layout.px(TITLE_PX);

    let mut lines = vec![
        (TITLE, title_px, SHADOW_COLOR, title_center.offset(shadow, shadow)),
        (TITLE, title_px, TITLE_COLOR, title_center),
    ];
    for (i, line) in INSTRUCTIONS.into_iter().enumerate() {
        let y = INSTRUCTION_Y + i as i32 * INSTRUCTION_SPACING;
        lines.push((
            line,
            layout.px(INSTRUCTION_PX),
            INSTRUCTION_COLOR,
            Position::new(center_x, layout.coord(y)),
        ));
    }

    lines
        .into_iter()
        .filter_map(|(line, px, color, center)| Caption::centered(&text, line, px, color, center))
        .collect()
}

//=== GameSelection =======================================================

pub struct GameSelection {
    backdrop: Backdrop,
    games: Carousel<(GameEntry, Visual)>,
    selected: Button,
    arrow_left: Button,
    arrow_right: Button,
    back: Button,
    captions: Vec<Caption>,
    icon_center: Position,
    icon_size: u32,
    slide: Option<Slide>,
    next: NextScene<ScreenId>,
}

impl GameSelection {
    //--- Construction -----------------------------------------------------

    /// Builds the screen over [`GAME_CATALOG`].
    pub fn new(assets: &dyn AssetProvider, viewport: Size) -> Result<Self, LobbyError> {
        Self::with_catalog(assets, viewport, &GAME_CATALOG)
    }

    /// Builds the screen over `catalog`, which must not be empty.
    pub fn with_catalog(
        assets: &dyn AssetProvider,
        viewport: Size,
        catalog: &[GameEntry],
    ) -> Result<Self, LobbyError> {
        let layout = Layout::new(viewport);
        let center = layout.center();
        let width = viewport.width as f32;

        let icon_size = ((width * ICON_WIDTH_RATIO) as u32).max(1);
        let arrow_size = ((width * ARROW_WIDTH_RATIO) as u32).max(1);
        let icon_center = center.offset(0, -layout.coord(ICON_RAISE));
        let arrow_distance = (icon_size + layout.px(ARROW_GAP)) as i32;

        let icon_dimensions = Size::new(icon_size, icon_size);
        let games = Carousel::new(
            catalog
                .iter()
                .map(|entry| (*entry, assets.scaled_image(entry.icon_key, icon_dimensions)))
                .collect(),
        )
        .ok_or(LobbyError::EmptyCatalog)?;

        let arrow = Size::new(arrow_size, arrow_size);
        let back_center = Position::new(layout.coord(BACK_CENTER), layout.coord(BACK_CENTER));

        let (entry, icon) = games.current();
        let selected = Button::new(icon.clone(), icon_center, entry.name);

        Ok(Self {
            backdrop: Backdrop::new(
                Some(assets.image(ScreenId::GameSelection.backdrop_key())),
                ScreenId::GameSelection.fallback_color(),
            ),
            selected,
            arrow_left: Button::new(
                assets.scaled_image("arrow_left", arrow),
                icon_center.offset(-arrow_distance, 0),
                "arrow_left",
            ),
            arrow_right: Button::new(
                assets.scaled_image("arrow_right", arrow),
                icon_center.offset(arrow_distance, 0),
                "arrow_right",
            ),
            back: Button::new(
                assets.scaled_image("back_arrow", layout.size(Size::new(BACK_SIZE, BACK_SIZE))),
                back_center,
                "back",
            ),
            captions: captions(&layout),
            games,
            icon_center,
            icon_size,
            slide: None,
            next: NextScene::new(),
        })
    }

    //--- Accessors --------------------------------------------------------

    /// Index of the selected game.
    pub fn index(&self) -> usize {
        self.games.index()
    }

    pub fn current_entry(&self) -> &GameEntry {
        &self.games.current().0
    }

    pub fn game_count(&self) -> usize {
        self.games.len()
    }

    pub fn selected_button(&self) -> &Button {
        &self.selected
    }

    pub fn arrow_left(&self) -> &Button {
        &self.arrow_left
    }

    pub fn arrow_right(&self) -> &Button {
        &self.arrow_right
    }

    pub fn back_button(&self) -> &Button {
        &self.back
    }

    /// Horizontal draw offset of the selected icon this frame.
    pub fn slide_offset(&self) -> i32 {
        match self.slide {
            None => 0,
            Some(slide) => {
                let fraction = slide.remaining.as_secs_f32() / SLIDE_DURATION.as_secs_f32();
                (slide.direction as f32 * fraction * self.icon_size as f32) as i32
            }
        }
    }

    //--- Navigation -------------------------------------------------------

    /// Selects the following game, wrapping to the first.
    pub fn next_game(&mut self) {
        self.games.next();
        self.rebuild_selected(1);
    }

    /// Selects the preceding game, wrapping to the last.
    pub fn previous_game(&mut self) {
        self.games.previous();
        self.rebuild_selected(-1);
    }

    /// Requests the selected game's screen.
    pub fn start_selected(&mut self) {
        let entry = *self.current_entry();
        info!(target: "lobby", "Starting {}", entry.name);
        self.next.request(entry.destination);
    }

    pub fn back(&mut self) {
        debug!(target: "ui", "Game selection: back to main menu");
        self.next.request(ScreenId::MainMenu);
    }

    //--- Internal Helpers -------------------------------------------------

    fn rebuild_selected(&mut self, direction: i32) {
        let (entry, icon) = self.games.current();
        debug!(target: "ui", "Selected game {} ({})", self.games.index(), entry.name);

        self.selected = Button::new(icon.clone(), self.icon_center, entry.name);
        self.slide = Some(Slide {
            remaining: SLIDE_DURATION,
            direction,
        });
    }

    fn on_click(&mut self, pointer: Position) {
        if self.arrow_left.is_clicked(pointer) {
            self.previous_game();
        } else if self.arrow_right.is_clicked(pointer) {
            self.next_game();
        } else if self.back.is_clicked(pointer) {
            self.back();
        } else if self.selected.is_clicked(pointer) {
            self.start_selected();
        }
    }

    fn on_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::ArrowLeft => self.previous_game(),
            KeyCode::ArrowRight => self.next_game(),
            KeyCode::Enter => self.start_selected(),
            KeyCode::Backspace => self.back(),
            _ => {}
        }
    }

    fn buttons_mut(&mut self) -> [&mut Button; 4] {
        [
            &mut self.arrow_left,
            &mut self.arrow_right,
            &mut self.back,
            &mut self.selected,
        ]
    }
}

impl Scene<ScreenId> for GameSelection {
    fn key(&self) -> ScreenId {
        ScreenId::GameSelection
    }

    fn handle_events(&mut self, input: &InputBatch) {
        for button in self.buttons_mut() {
            button.update_hover(input.pointer);
        }

        for event in &input.events {
            match *event {
                InputEvent::PointerPressed {
                    button: MouseButton::Left,
                    position,
                } => self.on_click(position),
                InputEvent::KeyPressed(key) => self.on_key(key),
                _ => {}
            }
        }
    }

    fn update(&mut self, dt: Duration) {
        if let Some(slide) = &mut self.slide {
            slide.remaining = slide.remaining.saturating_sub(dt);
            if slide.remaining.is_zero() {
                self.slide = None;
            }
        }
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        self.backdrop.draw(surface);

        self.selected.draw_offset(surface, self.slide_offset(), 0);
        self.arrow_left.draw(surface);
        self.arrow_right.draw(surface);
        self.back.draw(surface);

        for caption in &self.captions {
            if let Err(e) = surface.blit(&caption.visual, caption.origin) {
                warn!(target: "render", "Caption blit failed: {}", e);
            }
        }
    }

    fn on_enter(&mut self) {
        info!(
            target: "lobby",
            "Screen active: {} ({} games, showing {})",
            ScreenId::GameSelection.title(),
            self.games.len(),
            self.current_entry().name
        );
    }

    fn on_exit(&mut self) {
        for button in self.buttons_mut() {
            button.reset_hover();
        }
        self.slide = None;
        debug!(target: "lobby", "Leaving {}", ScreenId::GameSelection.title());
    }

    fn next_scene(&mut self) -> &mut NextScene<ScreenId> {
        &mut self.next
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
