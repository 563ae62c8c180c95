//=========================================================================
// Navigation Integration Tests
//=========================================================================
//
// Drives the real lobby screens through the scene manager frame by frame,
// the way the platform layer does, and checks what the user would see.
//
//=========================================================================

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use casino_lobby::core::render::RenderError;
use casino_lobby::prelude::*;
use casino_lobby::screens::{self, GameSelection, MainMenu, MenuAction};

const VIEWPORT: Size = Size::new(1920, 1080);
const LOADING: Duration = Duration::from_millis(100);
const FRAME: Duration = Duration::from_millis(16);

//=== Test Doubles ========================================================

type Journal = Rc<RefCell<Vec<(ScreenId, &'static str)>>>;

/// Wraps a real screen and records its lifecycle calls.
struct Probe<T> {
    inner: T,
    journal: Journal,
}

impl<T: Scene<ScreenId>> Probe<T> {
    fn new(inner: T, journal: &Journal) -> Self {
        Self {
            inner,
            journal: Rc::clone(journal),
        }
    }

    fn record(&self, what: &'static str) {
        self.journal.borrow_mut().push((self.inner.key(), what));
    }
}

impl<T: Scene<ScreenId>> Scene<ScreenId> for Probe<T> {
    fn key(&self) -> ScreenId {
        self.inner.key()
    }

    fn handle_events(&mut self, input: &InputBatch) {
        self.inner.handle_events(input);
    }

    fn update(&mut self, dt: Duration) {
        self.inner.update(dt);
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        self.record("draw");
        self.inner.draw(surface);
    }

    fn on_enter(&mut self) {
        self.record("enter");
        self.inner.on_enter();
    }

    fn on_exit(&mut self) {
        self.record("exit");
        self.inner.on_exit();
    }

    fn next_scene(&mut self) -> &mut NextScene<ScreenId> {
        self.inner.next_scene()
    }
}

/// Surface that counts operations instead of storing pixels.
#[derive(Default)]
struct RecordingSurface {
    fills: Vec<Color>,
    blits: usize,
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        VIEWPORT
    }

    fn fill(&mut self, color: Color) {
        self.fills.push(color);
    }

    fn blit(&mut self, _visual: &Visual, _origin: Position) -> Result<(), RenderError> {
        self.blits += 1;
        Ok(())
    }
}

//=== Helpers =============================================================

struct Harness {
    manager: SceneManager<ScreenId>,
    journal: Journal,
}

impl Harness {
    fn new() -> Self {
        let assets = AssetManager::placeholders();
        let journal = Journal::default();

        let mut manager = SceneManager::new().with_loading_duration(LOADING);
        manager.register_default(Probe::new(MainMenu::new(&assets, VIEWPORT), &journal));
        manager.register_scene(Probe::new(
            GameSelection::new(&assets, VIEWPORT).unwrap(),
            &journal,
        ));
        manager.start();

        Self { manager, journal }
    }

    /// One frame in platform order.
    fn frame(&mut self, input: &InputBatch, dt: Duration) {
        self.manager.handle_events(input);
        self.manager.update(dt);
    }

    fn lifecycle(&self) -> Vec<(ScreenId, &'static str)> {
        self.journal
            .borrow()
            .iter()
            .copied()
            .filter(|(_, what)| *what != "draw")
            .collect()
    }
}

fn click(position: Position) -> InputBatch {
    InputBatch::new(position).with_click(position)
}

fn layout() -> (MainMenu, GameSelection) {
    let assets = AssetManager::placeholders();
    (
        MainMenu::new(&assets, VIEWPORT),
        GameSelection::new(&assets, VIEWPORT).unwrap(),
    )
}

//=========================================================================
// Main Menu → Game Selection
//=========================================================================

#[test]
fn start_click_loads_game_selection() {
    let (menu, _) = layout();
    let start = menu.button(MenuAction::Start).unwrap().center();
    let mut harness = Harness::new();

    harness.frame(&click(start), FRAME);
    assert_eq!(harness.manager.state().target(), Some(ScreenId::GameSelection));
    assert_eq!(harness.manager.active_key(), Some(ScreenId::MainMenu));

    // 6 × 16 ms = 96 ms: still loading
    for _ in 0..6 {
        harness.frame(&InputBatch::new(start), FRAME);
    }
    assert!(harness.manager.is_loading());

    harness.frame(&InputBatch::new(start), FRAME);
    assert_eq!(harness.manager.active_key(), Some(ScreenId::GameSelection));
    assert!(!harness.manager.is_loading());

    assert_eq!(
        harness.lifecycle(),
        vec![
            (ScreenId::MainMenu, "enter"),
            (ScreenId::MainMenu, "exit"),
            (ScreenId::GameSelection, "enter"),
        ]
    );
}

#[test]
fn clicks_while_loading_are_ignored() {
    let (menu, selection) = layout();
    let start = menu.button(MenuAction::Start).unwrap().center();
    let back = selection.back_button().center();
    let mut harness = Harness::new();

    harness.frame(&click(start), FRAME);
    // Would hit Game Selection's back arrow if it were forwarded.
    harness.frame(&click(back), FRAME);
    harness.frame(&InputBatch::default(), LOADING);

    assert_eq!(harness.manager.active_key(), Some(ScreenId::GameSelection));
    harness.frame(&InputBatch::default(), FRAME);
    assert!(!harness.manager.is_loading(), "Back click was not queued");
}

#[test]
fn loading_overlay_replaces_scene_drawing() {
    let (menu, _) = layout();
    let start = menu.button(MenuAction::Start).unwrap().center();
    let mut harness = Harness::new();

    harness.frame(&click(start), FRAME);
    let mut surface = RecordingSurface::default();
    harness.manager.draw(&mut surface);

    assert!(!harness.journal.borrow().iter().any(|(_, what)| *what == "draw"));
    assert!(!surface.fills.is_empty(), "Overlay fills the surface");
}

//=========================================================================
// Game Selection → Game
//=========================================================================

#[test]
fn right_arrow_then_icon_requests_second_game() {
    let (menu, selection) = layout();
    let start = menu.button(MenuAction::Start).unwrap().center();
    let right = selection.arrow_right().center();
    let icon = selection.selected_button().center();

    let assets = AssetManager::placeholders();
    let mut manager = SceneManager::new().with_loading_duration(LOADING);
    screens::register_screens(&mut manager, &assets, VIEWPORT).unwrap();
    manager.start();

    for input in [click(start), InputBatch::default()] {
        manager.handle_events(&input);
        manager.update(LOADING);
    }
    assert_eq!(manager.active_key(), Some(ScreenId::GameSelection));

    manager.handle_events(&click(right));
    manager.update(FRAME);
    manager.handle_events(&click(icon));
    manager.update(FRAME);

    assert_eq!(manager.state().target(), Some(ScreenId::Solitaire));

    manager.update(LOADING);
    assert_eq!(manager.active_key(), Some(ScreenId::Solitaire));
}

#[test]
fn game_table_back_returns_to_selection() {
    let assets = AssetManager::placeholders();
    let mut lobby = Lobby::new(&assets, VIEWPORT, LOADING).unwrap();

    let steps = [
        InputBatch::default().with_key(KeyCode::Enter),
        InputBatch::default(),
        InputBatch::default().with_key(KeyCode::Enter),
        InputBatch::default(),
    ];
    for input in &steps {
        lobby.frame(input, LOADING);
    }
    assert_eq!(lobby.active_screen(), Some(ScreenId::Poker));

    lobby.frame(&InputBatch::default().with_key(KeyCode::Backspace), FRAME);
    lobby.frame(&InputBatch::default(), LOADING);

    assert_eq!(lobby.active_screen(), Some(ScreenId::GameSelection));
}
