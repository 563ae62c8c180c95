//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, the active scene, and timed transitions.
//
// Scenes are stored in a HashMap by key so they keep their state between
// activations. Exactly one scene is active at a time. Switching goes
// through a Loading phase of fixed duration during which input is
// discarded and the loading overlay is drawn instead of any scene.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::time::Duration;

use log::{debug, info, trace, warn};

//=== Internal Dependencies ===============================================

use super::{LoadingOverlay, Scene, SceneKey, TransitionState, DEFAULT_LOADING_DURATION};
use crate::core::geometry::Color;
use crate::core::input::InputBatch;
use crate::core::render::Surface;

//=== Scene Manager =======================================================

/// Owns every scene and decides which one receives input and draws.
///
/// # Lifecycle
///
/// 1. Register scenes with [`register_scene`](Self::register_scene) and
///    mark the initial one with [`register_default`](Self::register_default)
/// 2. Call [`start`](Self::start) once: the default scene's `on_enter` runs
/// 3. Each frame: `handle_events` → `update` → `draw`
///
/// # Transitions
///
/// ```text
///   Idle ── active scene outbox / request_transition ──► Loading
///    ▲      (on_exit of outgoing scene)                    │
///    └──────── elapsed >= loading duration ◄───────────────┘
///              (on_enter of incoming scene)
/// ```
pub struct SceneManager<S: SceneKey> {
    scenes: HashMap<S, Box<dyn Scene<S>>>,
    default: Option<S>,
    active: Option<S>,
    state: TransitionState<S>,
    loading_duration: Duration,
    loading: LoadingOverlay,
}

impl<S: SceneKey> SceneManager<S> {
    //--- Construction -----------------------------------------------------

    /// Creates an empty manager with the default loading duration.
    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            default: None,
            active: None,
            state: TransitionState::Idle,
            loading_duration: DEFAULT_LOADING_DURATION,
            loading: LoadingOverlay::default(),
        }
    }

    /// Sets how long the loading overlay stays up per transition.
    pub fn with_loading_duration(mut self, duration: Duration) -> Self {
        self.loading_duration = duration;
        self
    }

    /// Replaces the loading presentation.
    pub fn with_loading_overlay(mut self, overlay: LoadingOverlay) -> Self {
        self.loading = overlay;
        self
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene under its own key.
    ///
    /// A scene registered twice under the same key replaces the first.
    pub fn register_scene<T>(&mut self, scene: T)
    where
        T: Scene<S> + 'static,
    {
        let key = scene.key();
        if self.scenes.insert(key, Box::new(scene)).is_some() {
            warn!(target: "scene", "Scene {:?} was already registered and has been replaced", key);
        }
    }

    /// Registers a scene and marks it as the one activated by [`start`](Self::start).
    pub fn register_default<T>(&mut self, scene: T)
    where
        T: Scene<S> + 'static,
    {
        let key = scene.key();
        self.register_scene(scene);
        debug!(target: "scene", "Registered scene {:?} as default", key);
        self.default = Some(key);
    }

    /// Activates the default scene and calls its `on_enter`.
    ///
    /// Calling `start` again after a scene is active does nothing.
    pub fn start(&mut self) {
        if let Some(active) = self.active {
            warn!(target: "scene", "Scene manager already started with {:?}", active);
            return;
        }

        let Some(initial) = self.default else {
            warn!(target: "scene", "No default scene registered, nothing to start");
            return;
        };

        match self.scenes.get_mut(&initial) {
            Some(scene) => {
                info!(target: "scene", "Starting with scene {:?}", initial);
                self.active = Some(initial);
                scene.on_enter();
            }
            None => warn!(target: "scene", "Default scene {:?} not registered", initial),
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn active_key(&self) -> Option<S> {
        self.active
    }

    pub fn state(&self) -> &TransitionState<S> {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn loading_duration(&self) -> Duration {
        self.loading_duration
    }

    pub fn contains(&self, key: S) -> bool {
        self.scenes.contains_key(&key)
    }

    /// Number of registered scenes.
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    //--- Transitions ------------------------------------------------------

    /// Starts a timed switch to `target`.
    ///
    /// Ignored while another transition is loading (requests are not
    /// queued) and for keys that were never registered. Otherwise the
    /// active scene's `on_exit` runs and the manager enters Loading.
    pub fn request_transition(&mut self, target: S) {
        if let TransitionState::Loading { target: current, .. } = self.state {
            debug!(
                target: "scene",
                "Transition to {:?} in flight, dropping request for {:?}",
                current,
                target
            );
            return;
        }

        if !self.scenes.contains_key(&target) {
            warn!(target: "scene", "Attempted transition to unregistered scene {:?}", target);
            return;
        }

        if let Some(scene) = self.active.and_then(|key| self.scenes.get_mut(&key)) {
            if let Some(stale) = scene.next_scene().take() {
                debug!(target: "scene", "Discarding stale request for {:?} on exit", stale);
            }
            scene.on_exit();
        }

        info!(target: "scene", "Loading scene {:?} ({:?})", target, self.loading_duration);
        self.state = TransitionState::begin(target);
    }

    //--- Frame Loop -------------------------------------------------------

    /// Forwards input to the active scene, or drops it while loading.
    pub fn handle_events(&mut self, input: &InputBatch) {
        if self.state.is_loading() {
            if !input.is_empty() {
                trace!(target: "scene", "Loading: discarding {} input events", input.len());
            }
            return;
        }

        if let Some(scene) = self.active_scene_mut() {
            scene.handle_events(input);
        }
    }

    /// Advances the transition timer or the active scene.
    ///
    /// While loading, the transition completes within this call once the
    /// accumulated time reaches the loading duration. While idle, a
    /// pending outbox request starts a transition instead of updating
    /// the scene.
    pub fn update(&mut self, dt: Duration) {
        if self.state.is_loading() {
            let (next, completed) = self.state.advance(dt, self.loading_duration);
            self.state = next;
            if let Some(target) = completed {
                self.complete_transition(target);
            }
            return;
        }

        let Some(scene) = self.active_scene_mut() else {
            return;
        };

        match scene.next_scene().take() {
            Some(target) => {
                debug!(target: "scene", "Active scene requested {:?}", target);
                self.request_transition(target);
            }
            None => scene.update(dt),
        }
    }

    /// Draws the loading overlay or the active scene.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        if self.state.is_loading() {
            let progress = self.state.progress(self.loading_duration);
            self.loading.draw(surface, progress);
            return;
        }

        match self.active.and_then(|key| self.scenes.get_mut(&key)) {
            Some(scene) => scene.draw(surface),
            None => surface.fill(Color::BLACK),
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn active_scene_mut(&mut self) -> Option<&mut Box<dyn Scene<S>>> {
        let key = self.active?;
        self.scenes.get_mut(&key)
    }

    fn complete_transition(&mut self, target: S) {
        self.active = Some(target);

        match self.scenes.get_mut(&target) {
            Some(scene) => {
                info!(target: "scene", "Scene {:?} active", target);
                scene.on_enter();
            }
            None => warn!(target: "scene", "Scene {:?} vanished during loading", target),
        }
    }
}

impl<S: SceneKey> Default for SceneManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
