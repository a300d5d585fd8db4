//! Color — ANSI color assignment for level tokens.

use std::borrow::Cow;

use super::Level;

/// The eight basic ANSI foreground colors (SGR codes 30–37).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    White = 37,
}

/// Color used for level names that are not one of the seven known tokens.
pub const FALLBACK_COLOR: Color = Color::Red;

impl Color {
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Wrap `text` in this color's CSI sequence.
    pub fn wrap(self, text: &str) -> String {
        format!("\x1b[{}m{}\x1b[0m", self as u8, text)
    }
}

/// Severity → color. The three most severe levels share Error's red.
pub fn color_of(level: Level) -> Color {
    match level {
        Level::Debug => Color::Magenta,
        Level::Info => Color::Blue,
        Level::Warn => Color::Yellow,
        Level::Error | Level::Dpanic | Level::Panic | Level::Fatal => Color::Red,
    }
}

// Color-wrapped `[TOKEN]` labels for the seven known tokens, rendered at
// compile time so the encoder never formats them per record.
const PRERENDERED_LABELS: [(&str, &str); 7] = [
    ("DEBUG", "\x1b[35m[DEBUG]\x1b[0m"),
    ("INFO", "\x1b[34m[INFO]\x1b[0m"),
    ("WARN", "\x1b[33m[WARN]\x1b[0m"),
    ("ERROR", "\x1b[31m[ERROR]\x1b[0m"),
    ("DPANIC", "\x1b[31m[DPANIC]\x1b[0m"),
    ("PANIC", "\x1b[31m[PANIC]\x1b[0m"),
    ("FATAL", "\x1b[31m[FATAL]\x1b[0m"),
];

/// Color-wrapped `[name]` label for a level token.
///
/// Known tokens return a pre-rendered static label (no allocation); any
/// other name is wrapped in [`FALLBACK_COLOR`] with its text unchanged.
pub fn colored_label(name: &str) -> Cow<'static, str> {
    for (token, label) in PRERENDERED_LABELS {
        if token == name {
            return Cow::Borrowed(label);
        }
    }
    Cow::Owned(FALLBACK_COLOR.wrap(&format!("[{name}]")))
}
