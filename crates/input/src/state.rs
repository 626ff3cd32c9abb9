use std::collections::HashMap;

use crate::action::{Action, KeyBindings};

/// Current held/released status of every key the input collaborator reported.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
    bindings: KeyBindings,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bindings(bindings: KeyBindings) -> Self {
        Self {
            keys: HashMap::new(),
            bindings,
        }
    }

    /// Record a key-down (`pressed = true`) or key-up event.
    pub fn set_key(&mut self, code: &str, pressed: bool) {
        tracing::trace!(code, pressed, "key");
        self.keys.insert(code.to_owned(), pressed);
    }

    pub fn is_key_down(&self, code: &str) -> bool {
        self.keys.get(code).copied().unwrap_or(false)
    }

    /// Whether the key bound to `action` is currently held.
    pub fn is_pressed(&self, action: Action) -> bool {
        self.is_key_down(self.bindings.key_for(action))
    }

    /// Hold the key bound to `action`.
    pub fn press(&mut self, action: Action) {
        let code = self.bindings.key_for(action).to_owned();
        self.set_key(&code, true);
    }

    /// Release the key bound to `action`.
    pub fn release(&mut self, action: Action) {
        let code = self.bindings.key_for(action).to_owned();
        self.set_key(&code, false);
    }

    /// Release every key, e.g. when the window loses focus.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}
