use crate::error::PaletteError;
use std::str::FromStr;

/// Reset to default color
pub const RESET: &str = "\x1b[0m";

/// The standard 8-color terminal palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
    ];

    /// Foreground escape sequence (30-37)
    pub fn foreground(self) -> &'static str {
        match self {
            Color::Black => "\x1b[30m",
            Color::Red => "\x1b[31m",
            Color::Green => "\x1b[32m",
            Color::Yellow => "\x1b[33m",
            Color::Blue => "\x1b[34m",
            Color::Magenta => "\x1b[35m",
            Color::Cyan => "\x1b[36m",
            Color::White => "\x1b[37m",
        }
    }

    /// Background escape sequence (40-47)
    pub fn background(self) -> &'static str {
        match self {
            Color::Black => "\x1b[40m",
            Color::Red => "\x1b[41m",
            Color::Green => "\x1b[42m",
            Color::Yellow => "\x1b[43m",
            Color::Blue => "\x1b[44m",
            Color::Magenta => "\x1b[45m",
            Color::Cyan => "\x1b[46m",
            Color::White => "\x1b[47m",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "BLACK",
            Color::Red => "RED",
            Color::Green => "GREEN",
            Color::Yellow => "YELLOW",
            Color::Blue => "BLUE",
            Color::Magenta => "MAGENTA",
            Color::Cyan => "CYAN",
            Color::White => "WHITE",
        }
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PaletteError::UnknownColor(s.to_string()))
    }
}

/// Look up a background by palette name. Fails with `UnknownBackground`
/// rather than `UnknownColor` so callers can tell which half was bad.
pub fn background_by_name(name: &str) -> Result<&'static str, PaletteError> {
    Color::from_str(name)
        .map(Color::background)
        .map_err(|_| PaletteError::UnknownBackground(name.to_string()))
}

/// Escape codes applied around a line of text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorWrap {
    pub prefix: String, // fg (+ bg) codes
    pub suffix: &'static str,
}

impl ColorWrap {
    /// Build the wrapper for the given colors, or an empty one when colors are off
    pub fn new(use_colors: bool, fg: Color, bg: Option<Color>) -> Self {
        if !use_colors {
            return Self::plain();
        }

        let mut prefix = fg.foreground().to_string();
        if let Some(bg) = bg {
            prefix.push_str(bg.background());
        }

        Self {
            prefix,
            suffix: RESET,
        }
    }

    pub fn plain() -> Self {
        Self {
            prefix: String::new(),
            suffix: "",
        }
    }

    pub fn is_plain(&self) -> bool {
        self.prefix.is_empty()
    }

    pub fn apply(&self, text: &str) -> String {
        if self.is_plain() {
            text.to_string()
        } else {
            format!("{}{}{}", self.prefix, text, self.suffix)
        }
    }
}
