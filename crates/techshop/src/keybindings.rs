//! Keybinding system
//!
//! Maps keyboard input to commands. A binding is written as a textual key
//! pattern and parsed once when the keymap is built:
//!
//! - single keys: `"q"`, `"G"`, `"+"`
//! - modifier combinations: `"ctrl+c"`
//! - named keys: `"enter"`, `"esc"`, `"up"`, `"delete"`
//! - two-key sequences: `"g g"`, `"d d"`

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::command_id::CommandId;

/// How long the first key of a sequence waits for the second
const SEQUENCE_TIMEOUT: Duration = Duration::from_secs(2);

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual key pattern, e.g. "ctrl+c", "d d", "enter"
    pub keys: String,
    /// Display hint for footers, e.g. "Ctrl+C", "dd", "Enter"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedKeyPattern {
    /// Single key with modifiers
    Single {
        code: KeyCode,
        modifiers: KeyModifiers,
    },
    /// Two-key sequence (e.g. "g g": press 'g', then 'g' again)
    Sequence { first: char, second: char },
}

/// Parse a textual key pattern into a matchable form
///
/// Returns `None` for patterns that cannot be matched (unknown key names,
/// sequences longer than two keys).
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    if pattern.contains(' ') {
        let mut parts = pattern.split_whitespace();
        let first = single_char(parts.next()?)?;
        let second = single_char(parts.next()?)?;
        if parts.next().is_some() {
            return None;
        }
        return Some(ParsedKeyPattern::Sequence { first, second });
    }

    // Single characters keep their case, "G" is shift+g
    if let Some(c) = single_char(pattern) {
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern::Single {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    let lower = pattern.to_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = lower.as_str();

    while let Some((modifier, rest)) = key_part.split_once('+') {
        match modifier {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "shift" => modifiers |= KeyModifiers::SHIFT,
            "alt" => modifiers |= KeyModifiers::ALT,
            _ => break,
        }
        key_part = rest;
    }

    Some(ParsedKeyPattern::Single {
        code: parse_key_code(key_part)?,
        modifiers,
    })
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    let c = chars.next()?;
    chars.next().is_none().then_some(c)
}

fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "home" => Some(KeyCode::Home),
        "end" => Some(KeyCode::End),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),
        s => single_char(s).map(KeyCode::Char),
    }
}

/// First key of a two-key sequence, waiting for its partner
#[derive(Debug, Clone)]
pub struct PendingKey {
    pub key: char,
    pub timestamp: Instant,
}

impl PendingKey {
    pub fn new(key: char) -> Self {
        Self {
            key,
            timestamp: Instant::now(),
        }
    }

    fn is_expired(&self) -> bool {
        self.timestamp.elapsed() >= SEQUENCE_TIMEOUT
    }
}

/// Outcome of matching one key event against the keymap
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyMatch {
    /// Commands bound to this key, in keymap order
    pub commands: Vec<CommandId>,
    /// The key started a sequence; wait for the next key
    pub pending: Option<char>,
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Build a keymap, dropping bindings whose pattern does not parse
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed = bindings
            .into_iter()
            .filter_map(|binding| match parse_key_pattern(&binding.keys) {
                Some(pattern) => Some((binding, pattern)),
                None => {
                    log::warn!("Ignoring unparseable key pattern {:?}", binding.keys);
                    None
                }
            })
            .collect();

        Self { bindings: parsed }
    }

    /// Match a key event, taking a pending sequence key into account
    ///
    /// Single-key bindings win over sequence starts. A pending key that does
    /// not complete a sequence is dropped and the key is matched on its own.
    pub fn match_key(&self, key: &KeyEvent, pending: Option<&PendingKey>) -> KeyMatch {
        let current_char = plain_char(key);

        if let (Some(pending), Some(current)) =
            (pending.filter(|p| !p.is_expired()), current_char)
        {
            let completed = self.bindings.iter().find_map(|(binding, pattern)| {
                matches!(pattern, ParsedKeyPattern::Sequence { first, second }
                    if *first == pending.key && *second == current)
                .then_some(binding.command)
            });
            if let Some(command) = completed {
                return KeyMatch {
                    commands: vec![command],
                    pending: None,
                };
            }
        }

        let commands: Vec<CommandId> = self
            .bindings
            .iter()
            .filter(|(_, pattern)| single_matches(pattern, key))
            .map(|(binding, _)| binding.command)
            .collect();

        if !commands.is_empty() {
            return KeyMatch {
                commands,
                pending: None,
            };
        }

        let starts_sequence = current_char.filter(|c| {
            self.bindings.iter().any(|(_, pattern)| {
                matches!(pattern, ParsedKeyPattern::Sequence { first, .. } if first == c)
            })
        });

        KeyMatch {
            commands: Vec::new(),
            pending: starts_sequence,
        }
    }

    /// All bindings, in declaration order
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// Hint of the first binding for a command
    pub fn hint_for_command(&self, command: CommandId) -> Option<&str> {
        self.bindings()
            .find(|b| b.command == command)
            .map(|b| b.hint.as_str())
    }

    /// All distinct hints for a command joined with "/" (e.g. "j/↓")
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let mut hints: Vec<&str> = Vec::new();
        for binding in self.bindings().filter(|b| b.command == command) {
            if !hints.contains(&binding.hint.as_str()) {
                hints.push(&binding.hint);
            }
        }

        (!hints.is_empty()).then(|| hints.join("/"))
    }
}

/// Character of a key press without Ctrl/Alt
fn plain_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn single_matches(pattern: &ParsedKeyPattern, key: &KeyEvent) -> bool {
    let ParsedKeyPattern::Single { code, modifiers } = pattern else {
        return false;
    };
    if key.code != *code {
        return false;
    }
    match code {
        // Terminals disagree on whether shifted symbols ("+", "?") carry SHIFT
        KeyCode::Char(c) if !c.is_ascii_alphabetic() => {
            key.modifiers - KeyModifiers::SHIFT == *modifiers - KeyModifiers::SHIFT
        }
        _ => key.modifiers == *modifiers,
    }
}
