//! Rendering Adapter: renderer-agnostic frame and HUD interfaces.
//!
//! # Invariants
//! - Renderers and HUDs never mutate the world.
//! - Render state derives from world state and the chase camera.
//!
//! Ships a text renderer and a text HUD for headless runs; a GPU or browser
//! backend implements the same traits without touching the kernel.

mod hud;
mod renderer;

pub use hud::{Hud, TextHud, game_over_text, route_events, score_text};
pub use renderer::{DebugTextRenderer, RenderView, Renderer};

pub fn crate_info() -> &'static str {
    "cubeshot-render v0.1.0"
}
