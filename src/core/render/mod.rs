//=========================================================================
// Render Subsystem
//=========================================================================
//
// Narrow rendering interface consumed by screens and the scene manager.
//
// Architecture:
// ```text
//   Visual (immutable RGBA image, cheap to clone)
//     └─ scaled() → new Visual (pure transform)
//
//   Surface (trait)
//     ├─ size()
//     ├─ fill(color)
//     └─ blit(visual, origin)
//
//   Canvas       — software framebuffer implementing Surface
//   Backdrop     — full-surface background with solid-color fallback
//   TextRenderer — rasterizes strings into Visuals
// ```
//
//=========================================================================

//=== Module Declarations =================================================

mod backdrop;
mod canvas;
mod text;

//=== External Dependencies ===============================================

use std::fmt;
use std::sync::Arc;

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Color, Position, Size};

//=== Public API ==========================================================

pub use backdrop::Backdrop;
pub use canvas::Canvas;
pub use text::TextRenderer;

//=== RenderError =========================================================

/// Failures while composing a frame.
///
/// None of these are fatal: callers log them and fall back to a solid
/// fill so a frame is always produced.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A visual cannot be scaled to a size with a zero dimension.
    #[error("cannot scale visual to degenerate size {width}x{height}")]
    DegenerateSize { width: u32, height: u32 },

    /// Font data could not be parsed.
    #[error("invalid font data: {0}")]
    InvalidFont(#[from] ab_glyph::InvalidFont),
}

//=== Visual ==============================================================

/// Immutable RGBA image handle.
///
/// Cloning shares the underlying pixels. Scaling never mutates the source;
/// it returns a fresh visual.
#[derive(Clone)]
pub struct Visual {
    image: Arc<RgbaImage>,
}

impl Visual {
    /// Wraps a decoded RGBA image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    /// Creates a visual of `size` filled with `color`.
    pub fn solid(size: Size, color: Color) -> Self {
        Self::from_image(RgbaImage::from_pixel(
            size.width,
            size.height,
            Rgba(color.to_array()),
        ))
    }

    pub fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }

    /// Returns the underlying pixels.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Returns a copy of this visual resized to `size`.
    ///
    /// Resizing to the current size returns a shared clone.
    pub fn scaled(&self, size: Size) -> Result<Visual, RenderError> {
        if size.is_empty() {
            return Err(RenderError::DegenerateSize {
                width: size.width,
                height: size.height,
            });
        }

        if size == self.size() {
            return Ok(self.clone());
        }

        let resized = imageops::resize(&*self.image, size.width, size.height, FilterType::Triangle);
        Ok(Self::from_image(resized))
    }

    /// True if both handles share the same pixel storage.
    pub fn ptr_eq(&self, other: &Visual) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

impl fmt::Debug for Visual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Visual")
            .field("width", &self.image.width())
            .field("height", &self.image.height())
            .finish()
    }
}

//=== Surface Trait =======================================================

/// Render target shared by the scene manager and all screens.
///
/// Only the application loop creates or resizes a surface; everything in
/// the core receives it as `&mut dyn Surface` for the duration of a draw.
pub trait Surface {
    /// Current pixel dimensions.
    fn size(&self) -> Size;

    /// Overwrites every pixel with `color`.
    fn fill(&mut self, color: Color);

    /// Composites `visual` with its top-left corner at `origin`.
    ///
    /// Pixels falling outside the surface are clipped.
    fn blit(&mut self, visual: &Visual, origin: Position) -> Result<(), RenderError>;
}

//=========================================================================
// Unit Tests
//=========================================================================
