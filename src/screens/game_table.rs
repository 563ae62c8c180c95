//=========================================================================
// Game Table
//=========================================================================
//
// Placeholder table for one mini-game: its own backdrop and a back button
// returning to game selection. Game rules live elsewhere.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{Layout, ScreenId};
use crate::core::assets::AssetProvider;
use crate::core::geometry::{Position, Size};
use crate::core::input::{InputBatch, KeyCode};
use crate::core::render::{Backdrop, Surface};
use crate::core::scene::{NextScene, Scene};
use crate::core::ui::Button;

//=== Constants ===========================================================

const BACK_SIZE: u32 = 80;
const BACK_CENTER: i32 = 80;

//=== GameTable ===========================================================

pub struct GameTable {
    id: ScreenId,
    backdrop: Backdrop,
    back: Button,
    next: NextScene<ScreenId>,
}

impl GameTable {
    pub fn new(id: ScreenId, assets: &dyn AssetProvider, viewport: Size) -> Self {
        let layout = Layout::new(viewport);
        let back_center = Position::new(layout.coord(BACK_CENTER), layout.coord(BACK_CENTER));

        Self {
            id,
            backdrop: Backdrop::new(Some(assets.image(id.backdrop_key())), id.fallback_color()),
            back: Button::new(
                assets.scaled_image("back_arrow", layout.size(Size::new(BACK_SIZE, BACK_SIZE))),
                back_center,
                "back",
            ),
            next: NextScene::new(),
        }
    }

    pub fn back_button(&self) -> &Button {
        &self.back
    }

    fn leave(&mut self) {
        debug!(target: "ui", "{}: back to game selection", self.id.title());
        self.next.request(ScreenId::GameSelection);
    }
}

impl Scene<ScreenId> for GameTable {
    fn key(&self) -> ScreenId {
        self.id
    }

    fn handle_events(&mut self, input: &InputBatch) {
        self.back.update_hover(input.pointer);

        let clicked = input.primary_clicks().any(|pointer| self.back.is_clicked(pointer));
        let backspace = input.keys_pressed().any(|key| key == KeyCode::Backspace);
        if clicked || backspace {
            self.leave();
        }
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        self.backdrop.draw(surface);
        self.back.draw(surface);
    }

    fn on_enter(&mut self) {
        info!(target: "lobby", "Screen active: {} table", self.id.title());
    }

    fn on_exit(&mut self) {
        self.back.reset_hover();
        debug!(target: "lobby", "Leaving {} table", self.id.title());
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
    use crate::core::render::{Canvas, Visual};

    fn table(id: ScreenId) -> GameTable {
        GameTable::new(id, &AssetManager::placeholders(), Size::new(1280, 720))
    }

    #[test]
    fn key_is_its_game() {
        for game in ScreenId::GAMES {
            assert_eq!(table(game).key(), game);
        }
    }

    #[test]
    fn back_button_scaled_to_viewport() {
        let table = table(ScreenId::Poker);
        assert_eq!(table.back_button().center(), Position::new(53, 53));
        assert_eq!(table.back_button().rect().size(), Size::new(53, 53));
    }

    #[test]
    fn back_click_requests_selection() {
        let mut table = table(ScreenId::Blackjack);
        let back = table.back_button().center();

        table.handle_events(&InputBatch::new(back).with_click(back));

        assert_eq!(table.next_scene().peek(), Some(ScreenId::GameSelection));
    }

    #[test]
    fn backspace_requests_selection() {
        let mut table = table(ScreenId::TicTacToe);
        table.handle_events(&InputBatch::default().with_key(KeyCode::Backspace));
        assert_eq!(table.next_scene().peek(), Some(ScreenId::GameSelection));
    }

    #[test]
    fn click_elsewhere_stays() {
        let mut table = table(ScreenId::Solitaire);
        let elsewhere = Position::new(640, 360);

        table.handle_events(&InputBatch::new(elsewhere).with_click(elsewhere));

        assert!(!table.next_scene().is_pending());
    }

    #[test]
    fn draws_own_backdrop() {
        let felt = Color::rgb(0, 128, 0);
        let mut assets = AssetManager::placeholders();
        assets.insert("poker_table_bg", Visual::solid(Size::new(4, 4), felt));
        let mut table = GameTable::new(ScreenId::Poker, &assets, Size::new(200, 100));
        let mut canvas = Canvas::new(Size::new(200, 100));

        table.draw(&mut canvas);

        assert_eq!(canvas.pixel(150, 80), Some(felt));
    }
}
