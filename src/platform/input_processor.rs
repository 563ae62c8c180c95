//=========================================================================
// Input Processor
//=========================================================================
//
// Converts platform-specific Winit events into launcher InputEvents.
//
// Architecture:
//   Winit Events → InputProcessor → InputEvent (launcher type) → InputBuffer
//
// Stateful pointer tracking: caches the last cursor position (already
// mapped to canvas pixels) and stamps it onto every button press. Only
// presses matter to the lobby, so releases, OS key repeat and unmapped
// keys are filtered (returns None).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::{
    event::{ElementState, KeyEvent, MouseButton as WinitMouseButton},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use crate::core::geometry::Position;
use crate::core::input::{InputEvent, KeyCode, MouseButton};

//=== InputProcessor ======================================================

/// Converts Winit events to launcher InputEvents with stateful pointer tracking.
pub(crate) struct InputProcessor {
    pointer: Position,
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self {
            pointer: Position::ORIGIN,
        }
    }

    //--- Pointer State Management -----------------------------------------

    /// Updates the cached pointer (applied to subsequent presses).
    pub(crate) fn update_pointer(&mut self, position: Position) {
        self.pointer = position;
    }

    pub(crate) fn pointer(&self) -> Position {
        self.pointer
    }

    //--- Event Processing -------------------------------------------------

    /// Converts a Winit KeyEvent (filters releases, repeats, unmapped keys).
    pub(crate) fn process_key_event(&self, key_event: &KeyEvent) -> Option<InputEvent> {
        self.process_key(key_event.physical_key, key_event.state, key_event.repeat)
    }

    pub(crate) fn process_key(
        &self,
        physical_key: PhysicalKey,
        state: ElementState,
        repeat: bool,
    ) -> Option<InputEvent> {
        if state != ElementState::Pressed || repeat {
            return None;
        }

        let key_code = match physical_key {
            PhysicalKey::Code(code) => KeyCode::from(code),
            _ => return None,
        };

        if matches!(key_code, KeyCode::Unidentified) {
            return None;
        }

        Some(InputEvent::KeyPressed(key_code))
    }

    /// Converts a Winit mouse button press at the cached pointer.
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
    ) -> Option<InputEvent> {
        match state {
            ElementState::Pressed => Some(InputEvent::PointerPressed {
                button: MouseButton::from(button),
                position: self.pointer,
            }),
            ElementState::Released => None,
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts Winit physical key codes to launcher key codes.
///
/// Maps arrows and the few special keys the lobby reacts to. Everything
/// else returns `KeyCode::Unidentified`.
impl From<WinitKeyCode> for KeyCode {
    fn from(code: WinitKeyCode) -> Self {
        use WinitKeyCode::*;
        match code {
            //--- Arrows -------------------------------------------------------

            ArrowUp => KeyCode::ArrowUp,
            ArrowDown => KeyCode::ArrowDown,
            ArrowLeft => KeyCode::ArrowLeft,
            ArrowRight => KeyCode::ArrowRight,

            //--- Special ------------------------------------------------------

            Space => KeyCode::Space,
            Enter | NumpadEnter => KeyCode::Enter,
            Escape => KeyCode::Escape,
            Tab => KeyCode::Tab,
            Backspace => KeyCode::Backspace,

            //--- Unmapped (return Unidentified) -------------------------------

            _ => KeyCode::Unidentified,
        }
    }
}

/// Converts Winit mouse buttons to launcher buttons.
///
/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
