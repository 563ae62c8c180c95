//=========================================================================
// Canvas
//=========================================================================
//
// Software RGBA8 framebuffer implementing `Surface`.
//
// The platform copies the finished frame into the window's pixel buffer
// after each draw. Blits are clipped to the canvas and alpha-blended over
// the existing contents; the canvas itself is always opaque.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::warn;

//=== Internal Dependencies ===============================================

use super::{RenderError, Surface, Visual};
use crate::core::geometry::{Color, Position, Size};

//=== Canvas ==============================================================

/// Opaque RGBA8 pixel buffer, row-major, top-left origin.
pub struct Canvas {
    size: Size,
    pixels: Vec<u8>,
}

impl Canvas {
    //--- Construction -----------------------------------------------------

    /// Creates a black canvas of `size`.
    pub fn new(size: Size) -> Self {
        let mut canvas = Self {
            size,
            pixels: vec![0; Self::byte_len(size)],
        };
        canvas.fill(Color::BLACK);
        canvas
    }

    //--- Accessors --------------------------------------------------------

    /// Raw RGBA8 bytes.
    pub fn frame(&self) -> &[u8] {
        &self.pixels
    }

    /// Reads a single pixel, or `None` outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let i = self.index(x, y);
        let p = &self.pixels[i..i + 4];
        Some(Color::rgba(p[0], p[1], p[2], p[3]))
    }

    /// Copies the frame into `target`, which must be exactly the same length.
    ///
    /// Returns false (and leaves `target` untouched) on a length mismatch.
    pub fn copy_to(&self, target: &mut [u8]) -> bool {
        if target.len() != self.pixels.len() {
            warn!(
                target: "render",
                "Frame size mismatch: canvas {} bytes, target {} bytes",
                self.pixels.len(),
                target.len()
            );
            return false;
        }
        target.copy_from_slice(&self.pixels);
        true
    }

    //--- Internal Helpers -------------------------------------------------

    fn byte_len(size: Size) -> usize {
        size.width as usize * size.height as usize * 4
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.size.width as usize + x as usize) * 4
    }
}

//=== Surface Implementation ==============================================

impl Surface for Canvas {
    fn size(&self) -> Size {
        self.size
    }

    fn fill(&mut self, color: Color) {
        let rgba = Color { a: 255, ..color }.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk.copy_from_slice(&rgba);
        }
    }

    fn blit(&mut self, visual: &Visual, origin: Position) -> Result<(), RenderError> {
        let src = visual.image();
        let (src_w, src_h) = (src.width() as i64, src.height() as i64);
        let (dst_w, dst_h) = (self.size.width as i64, self.size.height as i64);

        // Clip against the canvas bounds
        let x0 = (origin.x as i64).max(0);
        let y0 = (origin.y as i64).max(0);
        let x1 = (origin.x as i64 + src_w).min(dst_w);
        let y1 = (origin.y as i64 + src_h).min(dst_h);

        if x0 >= x1 || y0 >= y1 {
            return Ok(());
        }

        for y in y0..y1 {
            for x in x0..x1 {
                let sx = (x - origin.x as i64) as u32;
                let sy = (y - origin.y as i64) as u32;
                let [r, g, b, a] = src.get_pixel(sx, sy).0;
                if a == 0 {
                    continue;
                }

                let i = self.index(x as u32, y as u32);
                let dst = &mut self.pixels[i..i + 4];
                if a == 255 {
                    dst.copy_from_slice(&[r, g, b, 255]);
                } else {
                    let alpha = a as u32;
                    let inv = 255 - alpha;
                    dst[0] = ((r as u32 * alpha + dst[0] as u32 * inv) / 255) as u8;
                    dst[1] = ((g as u32 * alpha + dst[1] as u32 * inv) / 255) as u8;
                    dst[2] = ((b as u32 * alpha + dst[2] as u32 * inv) / 255) as u8;
                    dst[3] = 255;
                }
            }
        }

        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
