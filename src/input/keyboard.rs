use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::event::Modifiers;
use crate::error::PlanetscapeError;

/// Engine-level actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML stays readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_debug = "Shift+KeyD"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Switch between scroll-driven and orbit-controlled camera.
    ToggleDebug,
}

/// A physical key plus the modifiers that must be held with it.
///
/// Written as `+`-separated segments with the key last, e.g.
/// `"Shift+KeyD"` or `"Ctrl+Alt+F12"`. Key names use the
/// `winit::keyboard::KeyCode` debug format.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyChord {
    /// Modifiers that must be held.
    pub modifiers: Modifiers,
    /// Physical key name.
    pub key: String,
}

impl KeyChord {
    /// Whether pressing `key` with `held` modifiers triggers this chord.
    ///
    /// Every modifier the chord names must be held; additional held
    /// modifiers do not prevent a match.
    #[must_use]
    pub fn matches(&self, key: &str, held: Modifiers) -> bool {
        self.key == key
            && (!self.modifiers.shift || held.shift)
            && (!self.modifiers.ctrl || held.ctrl)
            && (!self.modifiers.alt || held.alt)
    }
}

impl FromStr for KeyChord {
    type Err = PlanetscapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || PlanetscapeError::InvalidKeyChord(s.to_owned());
        let mut segments: Vec<&str> = s.split('+').map(str::trim).collect();
        let key = segments.pop().filter(|k| !k.is_empty()).ok_or_else(invalid)?;

        let mut modifiers = Modifiers::default();
        for segment in segments {
            match segment.to_ascii_lowercase().as_str() {
                "shift" => modifiers.shift = true,
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "option" => modifiers.alt = true,
                _ => return Err(invalid()),
            }
        }

        Ok(Self {
            modifiers,
            key: key.to_owned(),
        })
    }
}

impl fmt::Display for KeyChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.modifiers.ctrl {
            f.write_str("Ctrl+")?;
        }
        if self.modifiers.alt {
            f.write_str("Alt+")?;
        }
        if self.modifiers.shift {
            f.write_str("Shift+")?;
        }
        f.write_str(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modifiers_in_any_case() {
        let chord: KeyChord = "shift+KeyD".parse().unwrap();
        assert!(chord.modifiers.shift);
        assert!(!chord.modifiers.ctrl);
        assert_eq!(chord.key, "KeyD");

        let chord: KeyChord = "Control + Alt + F12".parse().unwrap();
        assert!(chord.modifiers.ctrl && chord.modifiers.alt);
        assert_eq!(chord.key, "F12");
    }

    #[test]
    fn rejects_empty_key_and_unknown_modifier() {
        assert!("".parse::<KeyChord>().is_err());
        assert!("Shift+".parse::<KeyChord>().is_err());
        assert!("Hyper+KeyD".parse::<KeyChord>().is_err());
    }

    #[test]
    fn extra_modifiers_still_match() {
        let chord: KeyChord = "Shift+KeyD".parse().unwrap();
        let held = Modifiers {
            shift: true,
            ctrl: true,
            alt: false,
        };
        assert!(chord.matches("KeyD", held));
        assert!(!chord.matches("KeyD", Modifiers::default()));
        assert!(!chord.matches("KeyF", held));
    }

    #[test]
    fn display_is_parseable() {
        let chord: KeyChord = "alt+shift+KeyP".parse().unwrap();
        assert_eq!(chord.to_string(), "Alt+Shift+KeyP");
        assert_eq!(chord.to_string().parse::<KeyChord>().unwrap(), chord);
    }
}
