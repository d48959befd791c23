//! Colors, fonts and widget theme
//!
//! These are opaque values from the analysis engine's point of view: it copies
//! them into style spans and hands them to the host surface, it never draws.
//!
//! Colors are written as `"#RRGGBB"` or `"#RRGGBBAA"` in YAML.

use serde::{Deserialize, Serialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(0xFF, 0xFF, 0xFF);

    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let hex = s.trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|e| format!("Invalid color {}: {}", s, e))
        };
        match hex.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// Format as "#RRGGBB", or "#RRGGBBAA" when not fully opaque
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

/// Font descriptor carried by highlight rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub family: String,
    /// Size in points
    pub size: f32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self {
            family: "Consolas".to_string(),
            size: 9.75,
            bold: false,
            italic: false,
            underline: false,
        }
    }
}

impl Font {
    /// Bold variant of this font (builder pattern)
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Italic variant of this font (builder pattern)
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// Widget colors handed to the host renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    /// Default text color of the text surface
    pub foreground: Color,
    /// Background behind the text surface
    pub background: Color,
    /// Gutter background
    pub code_background: Color,
    /// Outer border of the widget
    pub code_border: Color,
    /// Separator between gutter and text
    pub gutter_separator: Color,
    /// Current-line band fill in the gutter
    pub line_background: Color,
    /// Current-line band border in the gutter
    pub line_border: Color,
    /// Selected popup row fill
    pub selection_background: Color,
    /// Selected popup row border
    pub selection_border: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            foreground: Color::BLACK,
            background: Color::WHITE,
            code_background: Color::rgb(244, 244, 244),
            code_border: Color::rgb(160, 160, 160),
            gutter_separator: Color::rgb(230, 230, 230),
            line_background: Color::rgb(158, 206, 255),
            line_border: Color::rgb(51, 153, 255),
            selection_background: Color::rgb(230, 230, 230),
            selection_border: Color::rgb(216, 216, 216),
        }
    }
}

impl Theme {
    /// Parse a theme from YAML, missing colors fall back to defaults
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        serde_yaml::from_str(yaml).map_err(|e| format!("Failed to parse theme: {}", e))
    }
}
