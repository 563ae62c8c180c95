//=========================================================================
// Button
//=========================================================================
//
// Hoverable, clickable rectangular control bound to a visual.
//
// The center never moves. The hit rectangle is always derived from the
// visual currently shown, so while hovered (scaled up) the clickable
// area grows with it.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Position, Rect};
use crate::core::render::{Surface, Visual};

//=== Constants ===========================================================

/// Scale applied to a button's visual while hovered.
pub const HOVER_SCALE: f32 = 1.1;

//=== Button ==============================================================

/// Interactive element with edge-triggered hover and pure hit testing.
pub struct Button {
    name: String,
    base: Visual,
    visual: Visual,
    center: Position,
    rect: Rect,
    hovered: bool,
}

impl Button {
    //--- Construction -----------------------------------------------------

    /// Creates a button showing `visual` centered on `center`.
    pub fn new(visual: Visual, center: Position, name: impl Into<String>) -> Self {
        let rect = Rect::from_center(center, visual.size());
        Self {
            name: name.into(),
            base: visual.clone(),
            visual,
            center,
            rect,
            hovered: false,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn center(&self) -> Position {
        self.center
    }

    /// Current hit rectangle (grows while hovered).
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Visual currently drawn (scaled while hovered).
    pub fn visual(&self) -> &Visual {
        &self.visual
    }

    //--- Interaction ------------------------------------------------------

    /// Re-evaluates hover against `pointer`.
    ///
    /// Returns true only on the frame hover begins.
    pub fn update_hover(&mut self, pointer: Position) -> bool {
        let was_hovered = self.hovered;
        self.hovered = self.rect.contains(pointer);

        if was_hovered != self.hovered {
            if self.hovered {
                self.grow();
            } else {
                self.restore();
            }
        }

        self.hovered && !was_hovered
    }

    /// Pure hit test against the current rectangle.
    pub fn is_clicked(&self, pointer: Position) -> bool {
        self.rect.contains(pointer)
    }

    /// Drops hover state and restores the base size.
    pub fn reset_hover(&mut self) {
        if self.hovered {
            self.hovered = false;
            self.restore();
        }
    }

    //--- Rendering --------------------------------------------------------

    pub fn draw(&self, surface: &mut dyn Surface) {
        self.draw_offset(surface, 0, 0);
    }

    /// Draws shifted by `dx`, `dy` without moving the hit rectangle.
    pub fn draw_offset(&self, surface: &mut dyn Surface, dx: i32, dy: i32) {
        let origin = self.rect.origin().offset(dx, dy);
        if let Err(e) = surface.blit(&self.visual, origin) {
            warn!(target: "ui", "Failed to draw button '{}': {}", self.name, e);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn grow(&mut self) {
        let size = self.base.size().scaled(HOVER_SCALE);
        self.visual = match self.base.scaled(size) {
            Ok(visual) => visual,
            Err(e) => {
                debug!(target: "ui", "Hover scale skipped for '{}': {}", self.name, e);
                self.base.clone()
            }
        };
        self.rect = Rect::from_center(self.center, self.visual.size());
    }

    fn restore(&mut self) {
        self.visual = self.base.clone();
        self.rect = Rect::from_center(self.center, self.visual.size());
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::{Color, Size};
    use crate::core::render::Canvas;

    const INSIDE: Position = Position::new(200, 100);
    const OUTSIDE: Position = Position::new(0, 0);

    /// 100x50 button centered at (200, 100): rect (150, 75) .. (250, 125).
    fn button() -> Button {
        Button::new(
            Visual::solid(Size::new(100, 50), Color::WHITE),
            Position::new(200, 100),
            "start",
        )
    }

    //=====================================================================
    // Construction Tests
    //=====================================================================

    #[test]
    fn rect_is_centered_on_position() {
        let button = button();
        assert_eq!(button.rect(), Rect::new(150, 75, 100, 50));
        assert_eq!(button.name(), "start");
        assert!(!button.is_hovered());
    }

    //=====================================================================
    // Hover Tests
    //=====================================================================

    #[test]
    fn hover_is_edge_triggered() {
        let mut button = button();

        assert!(button.update_hover(INSIDE), "Hover begins");
        assert!(!button.update_hover(INSIDE), "Continuous hover is not an edge");
        assert!(button.is_hovered());
    }

    #[test]
    fn hover_retriggers_after_leaving() {
        let mut button = button();

        assert!(button.update_hover(INSIDE));
        assert!(!button.update_hover(OUTSIDE));
        assert!(button.update_hover(INSIDE), "Re-entry is a new edge");
    }

    #[test]
    fn never_hovered_outside() {
        let mut button = button();
        assert!(!button.update_hover(OUTSIDE));
        assert!(!button.update_hover(OUTSIDE));
        assert!(!button.is_hovered());
    }

    #[test]
    fn hover_scales_around_fixed_center() {
        let mut button = button();

        button.update_hover(INSIDE);

        assert_eq!(button.visual().size(), Size::new(110, 55));
        assert_eq!(button.rect(), Rect::new(145, 73, 110, 55));
        assert_eq!(button.center(), Position::new(200, 100));
    }

    #[test]
    fn leaving_restores_base_size() {
        let mut button = button();

        button.update_hover(INSIDE);
        button.update_hover(OUTSIDE);

        assert_eq!(button.visual().size(), Size::new(100, 50));
        assert_eq!(button.rect(), Rect::new(150, 75, 100, 50));
    }

    #[test]
    fn reset_hover_restores_base_size() {
        let mut button = button();

        button.update_hover(INSIDE);
        button.reset_hover();

        assert!(!button.is_hovered());
        assert_eq!(button.rect(), Rect::new(150, 75, 100, 50));
        assert!(button.update_hover(INSIDE), "Hover can begin again after reset");
    }

    //=====================================================================
    // Click Tests
    //=====================================================================

    #[test]
    fn is_clicked_without_hover_update() {
        let button = button();

        assert!(button.is_clicked(INSIDE));
        assert!(button.is_clicked(Position::new(150, 75)), "Top-left corner is inside");
        assert!(!button.is_clicked(Position::new(250, 100)), "Right edge is outside");
        assert!(!button.is_clicked(OUTSIDE));
    }

    #[test]
    fn is_clicked_uses_current_rect() {
        let mut button = button();
        let grown_edge = Position::new(147, 100);

        assert!(!button.is_clicked(grown_edge));
        button.update_hover(INSIDE);
        assert!(button.is_clicked(grown_edge), "Hovered rect is larger");
    }

    #[test]
    fn is_clicked_has_no_side_effects() {
        let button = button();
        button.is_clicked(INSIDE);
        assert!(!button.is_hovered());
        assert_eq!(button.visual().size(), Size::new(100, 50));
    }

    //=====================================================================
    // Rendering Tests
    //=====================================================================

    #[test]
    fn draw_blits_at_rect_origin() {
        let mut canvas = Canvas::new(Size::new(300, 200));
        let button = button();

        button.draw(&mut canvas);

        assert_eq!(canvas.pixel(150, 75), Some(Color::WHITE));
        assert_eq!(canvas.pixel(149, 75), Some(Color::BLACK));
    }

    #[test]
    fn draw_offset_does_not_move_hit_rect() {
        let mut canvas = Canvas::new(Size::new(300, 200));
        let button = button();

        button.draw_offset(&mut canvas, 10, 0);

        assert_eq!(canvas.pixel(150, 75), Some(Color::BLACK));
        assert_eq!(canvas.pixel(160, 75), Some(Color::WHITE));
        assert_eq!(button.rect().origin(), Position::new(150, 75));
    }
}
