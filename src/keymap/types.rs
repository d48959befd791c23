//! Core key types: Keystroke, Modifiers, KeyCode

use std::fmt;
use std::str::FromStr;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const CTRL: Modifiers = Modifiers(0b0001);
    pub const SHIFT: Modifiers = Modifiers(0b0010);
    pub const ALT: Modifiers = Modifiers(0b0100);
    pub const META: Modifiers = Modifiers(0b1000); // Cmd on macOS, Win on Windows

    /// Create modifiers from individual flags
    pub const fn new(ctrl: bool, shift: bool, alt: bool, meta: bool) -> Self {
        let mut bits = 0u8;
        if ctrl {
            bits |= 0b0001;
        }
        if shift {
            bits |= 0b0010;
        }
        if alt {
            bits |= 0b0100;
        }
        if meta {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0001 != 0
    }

    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b0010 != 0
    }

    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0100 != 0
    }

    #[inline]
    pub const fn meta(self) -> bool {
        self.0 & 0b1000 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.shift() {
            parts.push("Shift");
        }
        if self.alt() {
            parts.push("Alt");
        }
        if self.meta() {
            parts.push("Meta");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code as delivered by the host's key events
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    Up,
    Down,
    Left,
    Right,

    Home,
    End,
    PageUp,
    PageDown,
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(c) => write!(f, "{}", c.to_uppercase()),
            KeyCode::Enter => write!(f, "Enter"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Space => write!(f, "Space"),
            KeyCode::Up => write!(f, "Up"),
            KeyCode::Down => write!(f, "Down"),
            KeyCode::Left => write!(f, "Left"),
            KeyCode::Right => write!(f, "Right"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::PageUp => write!(f, "PageUp"),
            KeyCode::PageDown => write!(f, "PageDown"),
        }
    }
}

/// A single keystroke: a key with modifiers
///
/// The state machine compares whole keystrokes, so `Shift+Down` never opens
/// the popup and `Shift+Tab` never inserts an indent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Keystroke {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Keystroke {
    /// Create a new keystroke
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a keystroke with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Create a keystroke with a character key
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c.to_ascii_lowercase()))
    }

    /// True when this is `key` pressed without modifiers
    #[inline]
    pub fn is(&self, key: KeyCode) -> bool {
        self.mods.is_empty() && self.key == key
    }

    /// Parse a key string like "shift+tab" or "down"
    pub fn parse(s: &str) -> Result<Self, KeyParseError> {
        let mut mods = Modifiers::NONE;
        let mut key_part = None;

        for part in s.split('+') {
            let part_lower = part.trim().to_lowercase();
            match part_lower.as_str() {
                "" => return Err(KeyParseError::Empty(s.to_string())),
                "ctrl" | "control" => mods = mods | Modifiers::CTRL,
                "shift" => mods = mods | Modifiers::SHIFT,
                "alt" | "option" | "opt" => mods = mods | Modifiers::ALT,
                "meta" | "super" | "win" | "cmd" => mods = mods | Modifiers::META,
                _ => {
                    if key_part.is_some() {
                        return Err(KeyParseError::MultipleKeys(s.to_string()));
                    }
                    key_part = Some(parse_key_code(&part_lower)?);
                }
            }
        }

        let key = key_part.ok_or_else(|| KeyParseError::Empty(s.to_string()))?;
        Ok(Keystroke::new(key, mods))
    }
}

impl FromStr for Keystroke {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Keystroke::parse(s)
    }
}

impl fmt::Display for Keystroke {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.mods.is_empty() {
            write!(f, "{}+{}", self.mods, self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

/// Parse a key code from a lowercase name
fn parse_key_code(key: &str) -> Result<KeyCode, KeyParseError> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c.to_ascii_lowercase()));
    }

    match key {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Escape),
        "tab" => Ok(KeyCode::Tab),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "delete" | "del" => Ok(KeyCode::Delete),
        "space" => Ok(KeyCode::Space),
        "up" | "arrowup" => Ok(KeyCode::Up),
        "down" | "arrowdown" => Ok(KeyCode::Down),
        "left" | "arrowleft" => Ok(KeyCode::Left),
        "right" | "arrowright" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" | "pgup" => Ok(KeyCode::PageUp),
        "pagedown" | "pgdown" | "pgdn" => Ok(KeyCode::PageDown),
        _ => Err(KeyParseError::UnknownKey(key.to_string())),
    }
}

/// Error from parsing a key string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyParseError {
    /// No key in the string (only modifiers, or an empty segment)
    Empty(String),
    /// More than one non-modifier key
    MultipleKeys(String),
    UnknownKey(String),
}

impl fmt::Display for KeyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyParseError::Empty(s) => write!(f, "No key found in: {}", s),
            KeyParseError::MultipleKeys(s) => write!(f, "Multiple keys in: {}", s),
            KeyParseError::UnknownKey(s) => write!(f, "Unknown key: {}", s),
        }
    }
}

impl std::error::Error for KeyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers_empty() {
        let mods = Modifiers::NONE;
        assert!(mods.is_empty());
        assert!(!mods.ctrl());
        assert!(!mods.shift());
        assert!(!mods.alt());
        assert!(!mods.meta());
    }

    #[test]
    fn test_modifiers_combined() {
        let mods = Modifiers::CTRL | Modifiers::SHIFT;
        assert!(mods.ctrl());
        assert!(mods.shift());
        assert!(!mods.alt());
        assert_eq!(mods, Modifiers::new(true, true, false, false));
    }

    #[test]
    fn test_keystroke_char_lowercase() {
        assert_eq!(Keystroke::char('A'), Keystroke::char('a'));
    }

    #[test]
    fn test_keystroke_is_ignores_modified_keys() {
        assert!(Keystroke::key(KeyCode::Down).is(KeyCode::Down));
        assert!(!Keystroke::new(KeyCode::Down, Modifiers::SHIFT).is(KeyCode::Down));
    }

    #[test]
    fn test_parse_named_and_modified() {
        assert_eq!(Keystroke::parse("down").unwrap(), Keystroke::key(KeyCode::Down));
        assert_eq!(
            Keystroke::parse("Shift+Tab").unwrap(),
            Keystroke::new(KeyCode::Tab, Modifiers::SHIFT)
        );
        assert_eq!(Keystroke::parse("x").unwrap(), Keystroke::char('x'));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Keystroke::parse("ctrl+"),
            Err(KeyParseError::Empty("ctrl+".to_string()))
        );
        assert!(matches!(
            Keystroke::parse("a+b"),
            Err(KeyParseError::MultipleKeys(_))
        ));
        assert!(matches!(
            Keystroke::parse("hyper"),
            Err(KeyParseError::UnknownKey(_))
        ));
        assert!(matches!(Keystroke::parse("shift"), Err(KeyParseError::Empty(_))));
    }

    #[test]
    fn test_keystroke_display() {
        let stroke = Keystroke::new(KeyCode::Tab, Modifiers::SHIFT);
        assert_eq!(stroke.to_string(), "Shift+Tab");
        assert_eq!(Keystroke::key(KeyCode::Escape).to_string(), "Escape");
    }
}
