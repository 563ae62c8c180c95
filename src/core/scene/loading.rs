//=========================================================================
// Loading Overlay
//=========================================================================
//
// Presentation drawn instead of any scene while a transition is loading:
// background fill, optional backdrop stretched over the surface, and a
// progress bar. Rendering failures fall back to a solid fill.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Color, Position, Size};
use crate::core::render::{Backdrop, Surface, Visual};

//=== Constants ===========================================================

const FALLBACK: Color = Color::rgb(20, 12, 40);
const TRACK: Color = Color::rgb(60, 60, 60);
const BAR: Color = Color::rgb(255, 200, 40);
const BAR_HEIGHT: u32 = 8;

//=== LoadingOverlay ======================================================

/// Interstitial shown between scenes.
pub struct LoadingOverlay {
    backdrop: Backdrop,
    show_progress: bool,
}

impl LoadingOverlay {
    /// Creates an overlay with an optional backdrop image.
    pub fn new(backdrop: Option<Visual>) -> Self {
        Self {
            backdrop: Backdrop::new(backdrop, FALLBACK),
            show_progress: true,
        }
    }

    /// Enables or disables the progress bar.
    pub fn with_progress_bar(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Draws the overlay for `progress` in `0.0..=1.0`.
    pub fn draw(&mut self, surface: &mut dyn Surface, progress: f32) {
        self.backdrop.draw(surface);

        if self.show_progress {
            Self::draw_progress(surface, progress);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn draw_progress(surface: &mut dyn Surface, progress: f32) {
        let size = surface.size();
        let track_width = size.width / 2;
        if track_width == 0 || size.height <= BAR_HEIGHT {
            return;
        }

        let origin = Position::new(
            (size.width / 4) as i32,
            (size.height as f32 * 0.85) as i32,
        );
        let filled = (track_width as f32 * progress.clamp(0.0, 1.0)) as u32;

        let track = Visual::solid(Size::new(track_width, BAR_HEIGHT), TRACK);
        let mut result = surface.blit(&track, origin);

        if filled > 0 {
            let bar = Visual::solid(Size::new(filled, BAR_HEIGHT), BAR);
            result = result.and_then(|_| surface.blit(&bar, origin));
        }

        if let Err(e) = result {
            warn!(target: "scene", "Loading progress bar not drawn: {}", e);
        }
    }
}

impl Default for LoadingOverlay {
    fn default() -> Self {
        Self::new(None)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
