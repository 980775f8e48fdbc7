use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::PlanetscapeError;
use crate::input::{KeyAction, KeyChord, Modifiers};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key chords.
pub struct KeybindingOptions {
    /// Maps action → chord string (e.g. `ToggleDebug` → `"Shift+KeyD"`).
    pub bindings: HashMap<KeyAction, String>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings =
            HashMap::from([(KeyAction::ToggleDebug, "Shift+KeyD".into())]);
        Self { bindings }
    }
}

impl KeybindingOptions {
    /// Check that every binding parses as a key chord.
    ///
    /// # Errors
    ///
    /// Returns [`PlanetscapeError::InvalidKeyChord`] for the first binding
    /// that does not parse.
    pub fn validate(&self) -> Result<(), PlanetscapeError> {
        for chord in self.bindings.values() {
            let _ = chord.parse::<KeyChord>()?;
        }
        Ok(())
    }

    /// Look up the action for a physical key pressed with the given
    /// modifiers held.
    ///
    /// Unparseable bindings never match.
    #[must_use]
    pub fn lookup(&self, key: &str, modifiers: Modifiers) -> Option<KeyAction> {
        self.bindings.iter().find_map(|(action, chord)| {
            chord
                .parse::<KeyChord>()
                .ok()
                .filter(|chord| chord.matches(key, modifiers))
                .map(|_| *action)
        })
    }
}
