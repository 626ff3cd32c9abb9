use serde::{Deserialize, Serialize};

/// A logical action the simulation polls every frame.
///
/// The kernel consumes actions, never raw key codes, so any input source
/// (keyboard, scripted autopilot) drives the same game logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Move toward +z (toward the enemy spawn line).
    Forward,
    /// Move toward -z.
    Back,
    /// Strafe key bound to `KeyA`. Moves toward +x.
    Left,
    /// Strafe key bound to `KeyD`. Moves toward -x.
    Right,
    /// Fire a projectile, subject to the cooldown.
    Fire,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Forward,
        Action::Back,
        Action::Left,
        Action::Right,
        Action::Fire,
    ];
}

/// Key codes bound to each action. Codes follow the DOM `KeyboardEvent.code`
/// naming (`KeyW`, `Space`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub forward: String,
    pub back: String,
    pub left: String,
    pub right: String,
    pub fire: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: "KeyW".into(),
            back: "KeyS".into(),
            left: "KeyA".into(),
            right: "KeyD".into(),
            fire: "Space".into(),
        }
    }
}

impl KeyBindings {
    /// The key code bound to `action`.
    pub fn key_for(&self, action: Action) -> &str {
        match action {
            Action::Forward => &self.forward,
            Action::Back => &self.back,
            Action::Left => &self.left,
            Action::Right => &self.right,
            Action::Fire => &self.fire,
        }
    }
}
