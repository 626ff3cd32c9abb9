//! Shared types used across the cubeshot crates.

mod types;

pub use types::EntityId;

/// World-space position and direction type used by every crate.
pub use glam::Vec3;
