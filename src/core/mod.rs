//=========================================================================
// Core Systems
//
// Window-independent building blocks of the lobby.
//
// Responsibilities:
// - Geometry and color primitives shared by every subsystem
// - Software rendering surface and image handles
// - Image loading with placeholder fallback
// - Per-frame input vocabulary
// - Interactive elements (buttons, carousel)
// - Scene registry and timed transitions
//
// Notes:
// Nothing in here touches Winit or the GPU. The platform layer feeds
// input batches in and presents the canvas out, so every subsystem can be
// driven headless from tests.
//
//=========================================================================

pub mod assets;
pub mod geometry;
pub mod input;
pub mod render;
pub mod scene;
pub mod ui;
