// Typed key-binding table, built and validated once at startup

use super::action::{Button, PlayerId};
use std::collections::HashMap;
use thiserror::Error;
use winit::keyboard::KeyCode;

/// Error raised while constructing a binding table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BindingError {
    /// The same physical key was bound to two targets.
    #[error("key {0:?} is bound more than once")]
    DuplicateKey(KeyCode),
}

/// Immutable mapping from physical keys to (player, logical button) pairs.
///
/// Built once at startup and never mutated afterwards. Construction fails
/// if a key appears twice; lookups for unbound keys return `None` and are
/// expected — unrecognized keys are simply not ours to handle.
#[derive(Debug)]
pub struct BindingTable {
    bindings: HashMap<KeyCode, (PlayerId, Button)>,
}

impl BindingTable {
    /// Build a table from explicit (key, player, button) triples.
    pub fn from_bindings(
        entries: impl IntoIterator<Item = (KeyCode, PlayerId, Button)>,
    ) -> Result<Self, BindingError> {
        let mut bindings = HashMap::new();
        for (key, player, button) in entries {
            if bindings.insert(key, (player, button)).is_some() {
                return Err(BindingError::DuplicateKey(key));
            }
        }
        Ok(Self { bindings })
    }

    /// Build the default two-player layout (arrows + space, WASD + Q).
    pub fn default_layout() -> Result<Self, BindingError> {
        let p0 = super::action::player0_layout()
            .into_iter()
            .map(|(key, button)| (key, 0, button));
        let p1 = super::action::player1_layout()
            .into_iter()
            .map(|(key, button)| (key, 1, button));
        Self::from_bindings(p0.chain(p1))
    }

    /// Look up the binding for a physical key, if any.
    pub fn lookup(&self, key: KeyCode) -> Option<(PlayerId, Button)> {
        self.bindings.get(&key).copied()
    }

    /// Number of bound keys.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table has no bindings at all.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
