//=========================================================================
// Scene System
//=========================================================================
//
// Manages scene lifecycle and timed switching between scenes.
//
// Architecture:
//   SceneManager
//     ├─ scenes: HashMap<S, Box<dyn Scene<S>>>
//     ├─ active: Option<S>
//     └─ state: TransitionState<S>  (Idle | Loading)
//
// Flow (one frame):
//   handle_events() → update() → draw()
//
// Scenes never switch themselves. They leave a request in their
// `NextScene` outbox; the manager reads and clears it on its next update.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::input::InputBatch;
use crate::core::render::Surface;

//=== Module Declarations =================================================

mod loading;
mod scene_manager;
mod transition;

//=== Public API ==========================================================

pub use loading::LoadingOverlay;
pub use scene_manager::SceneManager;
pub use transition::{TransitionState, DEFAULT_LOADING_DURATION};

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Scene keys uniquely identify scenes in the SceneManager's HashMap and
/// are the payload of transition requests. Typically implemented by a
/// closed, game-specific enum.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + 'static {}

//=== NextScene ===========================================================

/// Single-slot outbox a scene uses to ask for a transition.
///
/// Holds at most one pending request. A second request before the
/// manager clears the slot is dropped, so the first click of a frame wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextScene<S: SceneKey> {
    pending: Option<S>,
}

impl<S: SceneKey> NextScene<S> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Records a request for `key` unless one is already pending.
    pub fn request(&mut self, key: S) {
        match self.pending {
            Some(pending) => {
                debug!(
                    target: "scene",
                    "Request for {:?} dropped, {:?} already pending",
                    key,
                    pending
                );
            }
            None => self.pending = Some(key),
        }
    }

    /// Pending request, if any, without clearing it.
    pub fn peek(&self) -> Option<S> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Removes and returns the pending request.
    pub fn take(&mut self) -> Option<S> {
        self.pending.take()
    }
}

impl<S: SceneKey> Default for NextScene<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=== Scene Trait =========================================================

/// Defines scene behavior with lifecycle hooks, input, update and draw.
///
/// Scenes are registered once in the [`SceneManager`] and live for the
/// whole run; they keep their state between activations.
///
/// # Minimal Implementation
///
/// `key`, `handle_events`, `draw` and `next_scene` are required.
/// `update` and the lifecycle hooks default to doing nothing:
///
/// ```rust
/// # use casino_lobby::prelude::*;
/// # use casino_lobby::core::scene::NextScene;
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Screen { Title }
/// impl SceneKey for Screen {}
///
/// struct Title {
///     next: NextScene<Screen>,
/// }
///
/// impl Scene<Screen> for Title {
///     fn key(&self) -> Screen {
///         Screen::Title
///     }
///
///     fn handle_events(&mut self, _input: &InputBatch) {}
///
///     fn draw(&mut self, surface: &mut dyn Surface) {
///         surface.fill(Color::BLACK);
///     }
///
///     fn next_scene(&mut self) -> &mut NextScene<Screen> {
///         &mut self.next
///     }
/// }
/// ```
pub trait Scene<S: SceneKey> {
    /// Identity used as the registry key.
    fn key(&self) -> S;

    /// Consumes one frame of input.
    ///
    /// Only called while the scene is active and no transition is loading.
    fn handle_events(&mut self, input: &InputBatch);

    /// Advances time-based state. Default implementation does nothing.
    fn update(&mut self, _dt: Duration) {}

    /// Renders the full scene. Must clear or fill the surface first.
    fn draw(&mut self, surface: &mut dyn Surface);

    /// Called once when the scene becomes active.
    fn on_enter(&mut self) {}

    /// Called once when the scene stops being active.
    fn on_exit(&mut self) {}

    /// Transition outbox, read and cleared by the manager.
    fn next_scene(&mut self) -> &mut NextScene<S>;
}

//=========================================================================
// Unit Tests
//=========================================================================
