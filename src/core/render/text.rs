//=========================================================================
// Text
//=========================================================================
//
// Rasterizes single-line strings into transparent visuals with
// `ab_glyph`. Screens render their labels once and blit the result.
//
// Glyphs are placed on a baseline at the font's ascent, advanced by
// their horizontal advance plus pair kerning. Coverage becomes alpha;
// overlapping glyph pixels keep the stronger coverage.
//
//=========================================================================

//=== External Dependencies ===============================================

use ab_glyph::{point, Font, FontArc, Glyph, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use log::trace;

//=== Internal Dependencies ===============================================

use super::{RenderError, Visual};
use crate::core::geometry::{Color, Size};

/// DejaVu Sans, shipped with the crate.
const EMBEDDED_FONT: &[u8] = include_bytes!("../../../assets/fonts/DejaVuSans.ttf");

//=== TextRenderer ========================================================

/// Font handle that turns strings into [`Visual`]s.
///
/// Cloning shares the parsed font.
#[derive(Clone)]
pub struct TextRenderer {
    font: FontArc,
}

impl TextRenderer {
    /// Parses the bundled font.
    pub fn embedded() -> Result<Self, RenderError> {
        let font = FontArc::try_from_slice(EMBEDDED_FONT)?;
        Ok(Self { font })
    }

    /// Pixel size `text` occupies at a line height of `px`.
    pub fn measure(&self, text: &str, px: f32) -> Size {
        self.layout(text, PxScale::from(px)).1
    }

    /// Renders `text` at a line height of `px` in `color`.
    ///
    /// The visual is exactly [`measure`](Self::measure) sized; pixels
    /// outside the glyph outlines stay fully transparent.
    pub fn render(&self, text: &str, px: f32, color: Color) -> Result<Visual, RenderError> {
        let (glyphs, size) = self.layout(text, PxScale::from(px));
        if size.is_empty() {
            return Err(RenderError::DegenerateSize {
                width: size.width,
                height: size.height,
            });
        }

        let mut image = RgbaImage::new(size.width, size.height);
        for glyph in glyphs {
            let Some(outlined) = self.font.outline_glyph(glyph) else {
                continue;
            };

            let bounds = outlined.px_bounds();
            outlined.draw(|x, y, coverage| {
                let gx = bounds.min.x as i32 + x as i32;
                let gy = bounds.min.y as i32 + y as i32;
                if gx < 0 || gy < 0 || gx as u32 >= size.width || gy as u32 >= size.height {
                    return;
                }

                let alpha = (coverage.clamp(0.0, 1.0) * color.a as f32).round() as u8;
                let pixel = image.get_pixel_mut(gx as u32, gy as u32);
                if alpha > pixel.0[3] {
                    *pixel = Rgba([color.r, color.g, color.b, alpha]);
                }
            });
        }

        trace!(target: "render", "Rendered '{}' at {}px into {}x{}", text, px, size.width, size.height);
        Ok(Visual::from_image(image))
    }

    //--- Internal Helpers -------------------------------------------------

    fn layout(&self, text: &str, scale: PxScale) -> (Vec<Glyph>, Size) {
        let font = self.font.as_scaled(scale);
        let mut caret = point(0.0, font.ascent());
        let mut previous: Option<GlyphId> = None;
        let mut glyphs = Vec::with_capacity(text.len());

        for c in text.chars() {
            let mut glyph = font.scaled_glyph(c);
            if let Some(previous) = previous {
                caret.x += font.kern(previous, glyph.id);
            }
            glyph.position = caret;
            caret.x += font.h_advance(glyph.id);
            previous = Some(glyph.id);
            glyphs.push(glyph);
        }

        let size = Size::new(caret.x.ceil().max(0.0) as u32, font.height().ceil().max(0.0) as u32);
        (glyphs, size)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn text() -> TextRenderer {
        TextRenderer::embedded().unwrap()
    }

    fn opaque_pixels(visual: &Visual) -> usize {
        visual.image().pixels().filter(|p| p.0[3] > 0).count()
    }

    #[test]
    fn bundled_font_parses() {
        assert!(TextRenderer::embedded().is_ok());
    }

    #[test]
    fn render_matches_measure() {
        let text = text();
        let visual = text.render("SELECT GAME", 40.0, Color::WHITE).unwrap();

        assert_eq!(visual.size(), text.measure("SELECT GAME", 40.0));
        assert!(visual.size().height >= 40);
    }

    #[test]
    fn glyphs_are_drawn_in_requested_color() {
        let purple = Color::rgb(80, 40, 120);
        let visual = text().render("H", 48.0, purple).unwrap();

        assert!(opaque_pixels(&visual) > 0);
        let solid = visual.image().pixels().find(|p| p.0[3] == 255).unwrap();
        assert_eq!(solid.0, [80, 40, 120, 255]);
    }

    #[test]
    fn spaces_have_width_but_no_ink() {
        let text = text();
        let visual = text.render("   ", 30.0, Color::WHITE).unwrap();

        assert!(visual.size().width > 0);
        assert_eq!(opaque_pixels(&visual), 0);
    }

    #[test]
    fn longer_text_is_wider() {
        let text = text();
        assert!(text.measure("Back button", 30.0).width > text.measure("Back", 30.0).width);
    }

    #[test]
    fn empty_text_cannot_be_rendered() {
        let result = text().render("", 30.0, Color::WHITE);
        assert!(matches!(result, Err(RenderError::DegenerateSize { width: 0, .. })));
    }
}
