//! Input state: held-key tracking mapped to logical shooter actions.
//!
//! # Invariants
//! - Level-state semantics: consumers poll "is held now", never "was pressed".
//! - Unknown key codes are stored and ignored by action queries.

pub mod action;
mod state;

pub use action::{Action, KeyBindings};
pub use state::InputState;

pub fn crate_info() -> &'static str {
    "cubeshot-input v0.1.0"
}
