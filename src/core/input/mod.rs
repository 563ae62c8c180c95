//=========================================================================
// Input Event Types
//
// Defines the engine-level representation of per-frame input.
//
// This module abstracts away platform-specific input (Winit) into a small,
// portable vocabulary consumed by the scene manager and screens.
//
// Responsibilities:
// - Represent discrete keyboard and pointer events
// - Carry an independently sampled pointer position with every batch
// - Provide convenience queries screens use while handling a batch
//
// Event Flow:
// ```text
// Platform Layer (Winit)
//         ↓
//    InputBatch (this module)
//         ↓
//    SceneManager::handle_events
//         ↓
//    Active Scene
// ```
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::geometry::Position;

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The `Other` variant covers side buttons, macro buttons, and any
/// non-standard inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button.
    Other,
}

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Only keys the launcher reacts to are listed; everything else maps to
/// `Unidentified` and is filtered by the platform layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    //--- Arrow Keys -------------------------------------------------------

    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------

    Space,
    Enter,
    Escape,
    Tab,
    Backspace,

    /// Fallback for keys not explicitly mapped by the input layer.
    Unidentified,
}

//=== InputEvent ==========================================================

/// A discrete input event collected during one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user or OS asked the application to close.
    QuitRequested,

    /// A key went down (OS auto-repeat is filtered out).
    KeyPressed(KeyCode),

    /// A pointer button went down at `position` (buffer pixels).
    PointerPressed {
        button: MouseButton,
        position: Position,
    },
}

//=== InputBatch ==========================================================

/// All input for a single frame.
///
/// `events` keeps arrival order. `pointer` is the last sampled cursor
/// position and is valid even when `events` is empty, so hover state can
/// be refreshed every frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBatch {
    pub events: Vec<InputEvent>,
    pub pointer: Position,
}

impl InputBatch {
    /// Creates an empty batch with the pointer at `pointer`.
    pub fn new(pointer: Position) -> Self {
        Self {
            events: Vec::new(),
            pointer,
        }
    }

    /// Appends `event`, builder style.
    pub fn with_event(mut self, event: InputEvent) -> Self {
        self.events.push(event);
        self
    }

    /// Appends a primary-button press at `position`, builder style.
    pub fn with_click(self, position: Position) -> Self {
        self.with_event(InputEvent::PointerPressed {
            button: MouseButton::Left,
            position,
        })
    }

    /// Appends a key press, builder style.
    pub fn with_key(self, key: KeyCode) -> Self {
        self.with_event(InputEvent::KeyPressed(key))
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// True if a quit request arrived this frame.
    pub fn quit_requested(&self) -> bool {
        self.events.contains(&InputEvent::QuitRequested)
    }

    /// Positions of primary-button presses, in arrival order.
    pub fn primary_clicks(&self) -> impl Iterator<Item = Position> + '_ {
        self.events.iter().filter_map(|event| match event {
            InputEvent::PointerPressed {
                button: MouseButton::Left,
                position,
            } => Some(*position),
            _ => None,
        })
    }

    /// Keys pressed this frame, in arrival order.
    pub fn keys_pressed(&self) -> impl Iterator<Item = KeyCode> + '_ {
        self.events.iter().filter_map(|event| match event {
            InputEvent::KeyPressed(key) => Some(*key),
            _ => None,
        })
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_batch_is_empty() {
        let batch = InputBatch::default();
        assert!(batch.is_empty());
        assert_eq!(batch.pointer, Position::ORIGIN);
        assert!(!batch.quit_requested());
    }

    #[test]
    fn primary_clicks_ignore_other_buttons() {
        let batch = InputBatch::new(Position::new(1, 1))
            .with_click(Position::new(10, 20))
            .with_event(InputEvent::PointerPressed {
                button: MouseButton::Right,
                position: Position::new(30, 40),
            })
            .with_click(Position::new(50, 60));

        let clicks: Vec<_> = batch.primary_clicks().collect();
        assert_eq!(clicks, vec![Position::new(10, 20), Position::new(50, 60)]);
    }

    #[test]
    fn keys_pressed_keep_order() {
        let batch = InputBatch::default()
            .with_key(KeyCode::ArrowRight)
            .with_click(Position::ORIGIN)
            .with_key(KeyCode::Enter);

        let keys: Vec<_> = batch.keys_pressed().collect();
        assert_eq!(keys, vec![KeyCode::ArrowRight, KeyCode::Enter]);
        assert_eq!(batch.len(), 3);
    }

    #[test]
    fn quit_requested_detected() {
        let batch = InputBatch::default().with_event(InputEvent::QuitRequested);
        assert!(batch.quit_requested());
    }
}
