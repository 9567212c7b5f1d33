//! Keyboard sampling
//!
//! Hosts report which keys are held; the sampler maps them through the key
//! bindings into a [`TickInput`]. Pause is turned into a press edge here,
//! unless [`PauseTrigger::Held`] asks for the raw level.

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::settings::PauseTrigger;
use crate::sim::TickInput;

/// Keys a binding can name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    A,
    D,
    ArrowUp,
    ArrowDown,
    Space,
    Escape,
    P,
}

impl Key {
    /// Parse a key name as written in settings files or DOM `KeyboardEvent.code`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "W" | "w" | "KeyW" => Some(Key::W),
            "S" | "s" | "KeyS" => Some(Key::S),
            "A" | "a" | "KeyA" => Some(Key::A),
            "D" | "d" | "KeyD" => Some(Key::D),
            "ArrowUp" | "Up" => Some(Key::ArrowUp),
            "ArrowDown" | "Down" => Some(Key::ArrowDown),
            "Space" | " " => Some(Key::Space),
            "Escape" | "Esc" => Some(Key::Escape),
            "P" | "p" | "KeyP" => Some(Key::P),
            _ => None,
        }
    }
}

/// Parse a recorded tape: one JSON array of key names per tick
///
/// e.g. `[["W"], ["KeyW", "Space"], []]`. Names go through [`Key::from_name`].
pub fn parse_tape(json: &str) -> Result<Vec<Vec<Key>>, SettingsError> {
    let frames: Vec<Vec<String>> = serde_json::from_str(json)?;
    frames
        .iter()
        .map(|names| {
            names
                .iter()
                .map(|name| {
                    Key::from_name(name).ok_or_else(|| SettingsError::UnknownKey(name.clone()))
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

/// Which key drives each control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left_up: Key,
    pub left_down: Key,
    pub right_up: Key,
    pub right_down: Key,
    pub pause: Key,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: Key::W,
            left_down: Key::S,
            right_up: Key::ArrowUp,
            right_down: Key::ArrowDown,
            pause: Key::Space,
        }
    }
}

/// Builds one [`TickInput`] per tick from held keys
#[derive(Debug, Clone)]
pub struct InputSampler {
    bindings: KeyBindings,
    trigger: PauseTrigger,
    /// Pause key state at the previous sample
    pause_was_held: bool,
}

impl InputSampler {
    pub fn new(bindings: KeyBindings, trigger: PauseTrigger) -> Self {
        Self {
            bindings,
            trigger,
            pause_was_held: false,
        }
    }

    /// Sample the keyboard; `is_held` reports whether a key is down right now
    pub fn sample(&mut self, is_held: impl Fn(Key) -> bool) -> TickInput {
        let b = &self.bindings;
        let pause_held = is_held(b.pause);
        let pause = match self.trigger {
            PauseTrigger::Press => pause_held && !self.pause_was_held,
            PauseTrigger::Held => pause_held,
        };
        let input = TickInput {
            left_up: is_held(b.left_up),
            left_down: is_held(b.left_down),
            right_up: is_held(b.right_up),
            right_down: is_held(b.right_down),
            pause,
        };
        self.pause_was_held = pause_held;
        input
    }

    /// Sample from a list of held keys
    pub fn sample_keys(&mut self, held: &[Key]) -> TickInput {
        self.sample(|key| held.contains(&key))
    }
}
