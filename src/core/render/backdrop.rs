//=========================================================================
// Backdrop
//=========================================================================
//
// Full-surface background used by screens and the loading overlay.
//
// Every draw clears the surface first so stale frames never bleed
// through. The source image is scaled to the surface and cached until
// the surface size changes. Any composition failure is logged and
// replaced by a solid fallback fill.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::{RenderError, Surface, Visual};
use crate::core::geometry::{Color, Position, Size};

//=== Backdrop ============================================================

/// Background image stretched over the whole surface.
pub struct Backdrop {
    source: Option<Visual>,
    scaled: Option<Visual>,
    fallback: Color,
}

impl Backdrop {
    /// Creates a backdrop that clears to black before compositing.
    ///
    /// `fallback` is used when there is no source image or when scaling
    /// or blitting the image fails.
    pub fn new(source: Option<Visual>, fallback: Color) -> Self {
        Self {
            source,
            scaled: None,
            fallback,
        }
    }

    /// Clears the surface and composites the background.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        surface.fill(Color::BLACK);

        let Some(source) = &self.source else {
            surface.fill(self.fallback);
            return;
        };

        let target = surface.size();
        let result = Self::scaled_for(source, &mut self.scaled, target)
            .and_then(|scaled| surface.blit(&scaled, Position::ORIGIN));

        if let Err(e) = result {
            warn!(target: "render", "Backdrop composition failed, using fallback fill: {}", e);
            surface.fill(self.fallback);
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn scaled_for(
        source: &Visual,
        cache: &mut Option<Visual>,
        target: Size,
    ) -> Result<Visual, RenderError> {
        if let Some(scaled) = cache {
            if scaled.size() == target {
                return Ok(scaled.clone());
            }
        }

        let scaled = source.scaled(target)?;
        *cache = Some(scaled.clone());
        Ok(scaled)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render::Canvas;

    const BLUE: Color = Color::rgb(0, 0, 255);
    const PURPLE: Color = Color::rgb(120, 80, 200);

    /// Surface whose blits always fail.
    struct BrokenSurface {
        canvas: Canvas,
    }

    impl Surface for BrokenSurface {
        fn size(&self) -> Size {
            self.canvas.size()
        }

        fn fill(&mut self, color: Color) {
            self.canvas.fill(color);
        }

        fn blit(&mut self, _visual: &Visual, _origin: Position) -> Result<(), RenderError> {
            Err(RenderError::DegenerateSize { width: 0, height: 0 })
        }
    }

    #[test]
    fn image_is_stretched_over_surface() {
        let mut canvas = Canvas::new(Size::new(8, 6));
        let mut backdrop = Backdrop::new(Some(Visual::solid(Size::new(2, 2), BLUE)), PURPLE);

        backdrop.draw(&mut canvas);

        assert_eq!(canvas.pixel(0, 0), Some(BLUE));
        assert_eq!(canvas.pixel(7, 5), Some(BLUE));
    }

    #[test]
    fn missing_image_uses_fallback() {
        let mut canvas = Canvas::new(Size::new(4, 4));
        let mut backdrop = Backdrop::new(None, PURPLE);

        backdrop.draw(&mut canvas);

        assert_eq!(canvas.pixel(2, 2), Some(PURPLE));
    }

    #[test]
    fn blit_failure_falls_back_to_solid_fill() {
        let mut surface = BrokenSurface {
            canvas: Canvas::new(Size::new(4, 4)),
        };
        let mut backdrop = Backdrop::new(Some(Visual::solid(Size::new(2, 2), BLUE)), PURPLE);

        backdrop.draw(&mut surface);

        assert_eq!(surface.canvas.pixel(1, 1), Some(PURPLE));
    }

    #[test]
    fn degenerate_surface_falls_back_without_panicking() {
        let mut canvas = Canvas::new(Size::new(0, 0));
        let mut backdrop = Backdrop::new(Some(Visual::solid(Size::new(2, 2), BLUE)), PURPLE);

        backdrop.draw(&mut canvas);
    }

    #[test]
    fn scaled_image_is_cached_per_size() {
        let mut canvas = Canvas::new(Size::new(8, 8));
        let mut backdrop = Backdrop::new(Some(Visual::solid(Size::new(2, 2), BLUE)), PURPLE);

        backdrop.draw(&mut canvas);
        let first = backdrop.scaled.clone().unwrap();
        backdrop.draw(&mut canvas);
        let second = backdrop.scaled.clone().unwrap();

        assert!(first.ptr_eq(&second), "Same surface size should reuse the scaled image");
    }

    #[test]
    fn translucent_image_is_composited_over_black() {
        let mut canvas = Canvas::new(Size::new(2, 2));
        canvas.fill(BLUE);
        let image = Visual::solid(Size::new(2, 2), Color::rgba(255, 255, 255, 0));
        let mut backdrop = Backdrop::new(Some(image), PURPLE);

        backdrop.draw(&mut canvas);

        assert_eq!(canvas.pixel(0, 0), Some(Color::BLACK));
    }
}
