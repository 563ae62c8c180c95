//=========================================================================
// Main Menu
//=========================================================================
//
// Entry screen: full-screen background and a column of three buttons.
// Start and Menu both lead to game selection; Options is reserved.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{Layout, ScreenId};
use crate::core::assets::AssetProvider;
use crate::core::geometry::{Position, Size};
use crate::core::input::{InputBatch, InputEvent, KeyCode, MouseButton};
use crate::core::render::{Backdrop, Surface};
use crate::core::scene::{NextScene, Scene};
use crate::core::ui::Button;

//=== Constants ===========================================================

const BUTTON_SIZE: Size = Size::new(235, 99);

//=== MenuAction ==========================================================

/// Buttons on the main menu, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Start,
    Menu,
    Options,
}

impl MenuAction {
    pub const ALL: [MenuAction; 3] = [MenuAction::Start, MenuAction::Menu, MenuAction::Options];

    fn asset_key(self) -> &'static str {
        match self {
            Self::Start => "start_button",
            Self::Menu => "menu_button",
            Self::Options => "options_button",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Menu => "menu",
            Self::Options => "options",
        }
    }

    /// Vertical center at the 1080p design height.
    fn design_y(self) -> i32 {
        match self {
            Self::Start => 695,
            Self::Menu => 800,
            Self::Options => 905,
        }
    }
}

//=== MainMenu ============================================================

pub struct MainMenu {
    backdrop: Backdrop,
    buttons: Vec<(MenuAction, Button)>,
    next: NextScene<ScreenId>,
}

impl MainMenu {
    pub fn new(assets: &dyn AssetProvider, viewport: Size) -> Self {
        let layout = Layout::new(viewport);
        let size = layout.size(BUTTON_SIZE);
        let center_x = layout.center().x;

        let buttons = MenuAction::ALL
            .into_iter()
            .map(|action| {
                let visual = assets.scaled_image(action.asset_key(), size);
                let center = Position::new(center_x, layout.coord(action.design_y()));
                (action, Button::new(visual, center, action.name()))
            })
            .collect();

        Self {
            backdrop: Backdrop::new(
                Some(assets.image(ScreenId::MainMenu.backdrop_key())),
                ScreenId::MainMenu.fallback_color(),
            ),
            buttons,
            next: NextScene::new(),
        }
    }

    pub fn button(&self, action: MenuAction) -> Option<&Button> {
        self.buttons
            .iter()
            .find(|(candidate, _)| *candidate == action)
            .map(|(_, button)| button)
    }

    /// Performs the action bound to a button.
    pub fn activate(&mut self, action: MenuAction) {
        match action {
            MenuAction::Start | MenuAction::Menu => {
                debug!(target: "ui", "Main menu: '{}' pressed", action.name());
                self.next.request(ScreenId::GameSelection);
            }
            MenuAction::Options => {
                debug!(target: "ui", "Main menu: options not available yet");
            }
        }
    }

    fn clicked(&self, pointer: Position) -> Option<MenuAction> {
        self.buttons
            .iter()
            .find(|(_, button)| button.is_clicked(pointer))
            .map(|(action, _)| *action)
    }
}

impl Scene<ScreenId> for MainMenu {
    fn key(&self) -> ScreenId {
        ScreenId::MainMenu
    }

    fn handle_events(&mut self, input: &InputBatch) {
        for (_, button) in &mut self.buttons {
            button.update_hover(input.pointer);
        }

        for event in &input.events {
            let action = match *event {
                InputEvent::PointerPressed {
                    button: MouseButton::Left,
                    position,
                } => self.clicked(position),
                InputEvent::KeyPressed(KeyCode::Enter) => Some(MenuAction::Start),
                _ => None,
            };

            if let Some(action) = action {
                self.activate(action);
            }
        }
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        self.backdrop.draw(surface);
        for (_, button) in &self.buttons {
            button.draw(surface);
        }
    }

    fn on_enter(&mut self) {
        info!(target: "lobby", "Screen active: {}", ScreenId::MainMenu.title());
    }

    fn on_exit(&mut self) {
        for (_, button) in &mut self.buttons {
            button.reset_hover();
        }
        debug!(target: "lobby", "Leaving {}", ScreenId::MainMenu.title());
    }

    fn next_scene(&mut self) -> &mut NextScene<ScreenId> {
        &mut self.next
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::assets::AssetManager;
    use crate::core::geometry::Color;
    use crate::core::render::Canvas;

    const VIEWPORT: Size = Size::new(1920, 1080);

    fn menu() -> MainMenu {
        MainMenu::new(&AssetManager::placeholders(), VIEWPORT)
    }

    fn center_of(menu: &MainMenu, action: MenuAction) -> Position {
        menu.button(action).unwrap().rect().center()
    }

    #[test]
    fn buttons_laid_out_in_column() {
        let menu = menu();
        let start = menu.button(MenuAction::Start).unwrap();

        assert_eq!(start.center(), Position::new(960, 695));
        assert_eq!(start.rect().size(), BUTTON_SIZE);
        assert_eq!(menu.button(MenuAction::Options).unwrap().center(), Position::new(960, 905));
    }

    #[test]
    fn buttons_scale_with_viewport() {
        let menu = MainMenu::new(&AssetManager::placeholders(), Size::new(960, 540));
        let menu_button = menu.button(MenuAction::Menu).unwrap();

        assert_eq!(menu_button.center(), Position::new(480, 400));
        assert_eq!(menu_button.rect().size(), Size::new(117, 49));
    }

    #[test]
    fn start_click_requests_selection() {
        let mut menu = menu();
        let target = center_of(&menu, MenuAction::Start);

        menu.handle_events(&InputBatch::new(target).with_click(target));

        assert_eq!(menu.next_scene().peek(), Some(ScreenId::GameSelection));
    }

    #[test]
    fn menu_click_requests_selection() {
        let mut menu = menu();
        let target = center_of(&menu, MenuAction::Menu);

        menu.handle_events(&InputBatch::new(target).with_click(target));

        assert_eq!(menu.next_scene().peek(), Some(ScreenId::GameSelection));
    }

    #[test]
    fn options_click_is_reserved() {
        let mut menu = menu();
        let target = center_of(&menu, MenuAction::Options);

        menu.handle_events(&InputBatch::new(target).with_click(target));

        assert!(!menu.next_scene().is_pending());
    }

    #[test]
    fn click_outside_buttons_does_nothing() {
        let mut menu = menu();
        let empty = Position::new(10, 10);

        menu.handle_events(&InputBatch::new(empty).with_click(empty));

        assert!(!menu.next_scene().is_pending());
    }

    #[test]
    fn enter_starts() {
        let mut menu = menu();
        menu.handle_events(&InputBatch::default().with_key(KeyCode::Enter));
        assert_eq!(menu.next_scene().peek(), Some(ScreenId::GameSelection));
    }

    #[test]
    fn hover_follows_pointer() {
        let mut menu = menu();
        let target = center_of(&menu, MenuAction::Start);

        menu.handle_events(&InputBatch::new(target));
        assert!(menu.button(MenuAction::Start).unwrap().is_hovered());
        assert!(!menu.button(MenuAction::Menu).unwrap().is_hovered());

        menu.on_exit();
        assert!(!menu.button(MenuAction::Start).unwrap().is_hovered());
    }

    #[test]
    fn draw_covers_surface() {
        let mut menu = MainMenu::new(&AssetManager::placeholders(), Size::new(64, 36));
        let mut canvas = Canvas::new(Size::new(64, 36));
        canvas.fill(Color::WHITE);

        menu.draw(&mut canvas);

        assert_ne!(canvas.pixel(32, 18), Some(Color::WHITE));
    }
}
