//=========================================================================
// Transition State
//=========================================================================
//
// Pure Idle/Loading state machine driving timed scene switches.
//
// ```text
//   Idle ──begin(target)──► Loading { target, elapsed: 0 }
//                               │ advance(dt): elapsed += dt
//                               ▼ elapsed >= duration
//   Idle ◄──────────────── completes with `target`
// ```
//
// No rendering or scene access happens here, so the timing rules are
// testable in isolation.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use super::SceneKey;

//=== Constants ===========================================================

/// Default time spent on the loading overlay.
///
/// Matches a fade of 255 alpha steps of 5 per frame at 60 FPS.
pub const DEFAULT_LOADING_DURATION: Duration = Duration::from_millis(850);

//=== TransitionState =====================================================

/// Scene manager transition state.
///
/// `Loading` always carries a target; `Idle` never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState<S: SceneKey> {
    /// No transition in flight.
    Idle,

    /// Waiting `elapsed` so far before activating `target`.
    Loading { target: S, elapsed: Duration },
}

impl<S: SceneKey> Default for TransitionState<S> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<S: SceneKey> TransitionState<S> {
    /// Starts loading `target` with a zero accumulator.
    pub fn begin(target: S) -> Self {
        Self::Loading {
            target,
            elapsed: Duration::ZERO,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }

    pub fn target(&self) -> Option<S> {
        match self {
            Self::Idle => None,
            Self::Loading { target, .. } => Some(*target),
        }
    }

    pub fn elapsed(&self) -> Duration {
        match self {
            Self::Idle => Duration::ZERO,
            Self::Loading { elapsed, .. } => *elapsed,
        }
    }

    /// Fraction of `duration` already spent loading, clamped to `0.0..=1.0`.
    pub fn progress(&self, duration: Duration) -> f32 {
        match self {
            Self::Idle => 0.0,
            Self::Loading { .. } if duration.is_zero() => 1.0,
            Self::Loading { elapsed, .. } => {
                (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    /// Adds `dt` to the accumulator.
    ///
    /// Returns the next state and, when the accumulator reaches `duration`,
    /// the target to activate. Idle is left unchanged.
    pub fn advance(self, dt: Duration, duration: Duration) -> (Self, Option<S>) {
        match self {
            Self::Idle => (Self::Idle, None),
            Self::Loading { target, elapsed } => {
                let elapsed = elapsed.saturating_add(dt);
                if elapsed >= duration {
                    (Self::Idle, Some(target))
                } else {
                    (Self::Loading { target, elapsed }, None)
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
    enum TestScene {
        A,
    }

    impl SceneKey for TestScene {}

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn default_is_idle() {
        let state: TransitionState<TestScene> = TransitionState::default();
        assert_eq!(state, TransitionState::Idle);
        assert_eq!(state.target(), None);
        assert!(!state.is_loading());
    }

    #[test]
    fn begin_starts_with_zero_elapsed() {
        let state = TransitionState::begin(TestScene::A);
        assert!(state.is_loading());
        assert_eq!(state.target(), Some(TestScene::A));
        assert_eq!(state.elapsed(), Duration::ZERO);
    }

    #[test]
    fn idle_advance_is_noop() {
        let (state, done) = TransitionState::<TestScene>::Idle.advance(SECOND, SECOND);
        assert_eq!(state, TransitionState::Idle);
        assert_eq!(done, None);
    }

    #[test]
    fn advance_accumulates_below_threshold() {
        let state = TransitionState::begin(TestScene::A);
        let (state, done) = state.advance(Duration::from_millis(400), SECOND);
        let (state, done2) = state.advance(Duration::from_millis(500), SECOND);

        assert_eq!(done, None);
        assert_eq!(done2, None);
        assert_eq!(state.elapsed(), Duration::from_millis(900));
    }

    #[test]
    fn completes_exactly_at_threshold() {
        let state = TransitionState::begin(TestScene::A);
        let (state, done) = state.advance(SECOND, SECOND);

        assert_eq!(state, TransitionState::Idle);
        assert_eq!(done, Some(TestScene::A));
    }

    #[test]
    fn completes_when_overshooting() {
        let state = TransitionState::begin(TestScene::A);
        let (state, _) = state.advance(Duration::from_millis(999), SECOND);
        let (state, done) = state.advance(Duration::from_millis(16), SECOND);

        assert_eq!(state, TransitionState::Idle);
        assert_eq!(done, Some(TestScene::A));
    }

    #[test]
    fn zero_duration_completes_on_first_advance() {
        let state = TransitionState::begin(TestScene::A);
        let (_, done) = state.advance(Duration::ZERO, Duration::ZERO);
        assert_eq!(done, Some(TestScene::A));
    }

    #[test]
    fn progress_is_fraction_of_duration() {
        let state = TransitionState::Loading {
            target: TestScene::A,
            elapsed: Duration::from_millis(250),
        };
        assert!((state.progress(SECOND) - 0.25).abs() < 1e-6);
        assert_eq!(TransitionState::<TestScene>::Idle.progress(SECOND), 0.0);
        assert_eq!(state.progress(Duration::ZERO), 1.0);
    }
}
