//=========================================================================
// UI Building Blocks
//=========================================================================
//
// Interactive elements shared by every screen.
//
//=========================================================================

//=== Module Declarations =================================================

mod button;
mod carousel;

//=== Public API ==========================================================

pub use button::{Button, HOVER_SCALE};
pub use carousel::Carousel;
