//! ANSI styling for reports.
//!
//! Styling is applied only when the caller asks for it, independently of
//! whatever output stream the text ends up on.

/// Styles used in a report, each mapped to a fixed escape sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Bold,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl Paint {
    pub const RESET: &'static str = "\x1b[0m";

    pub const fn code(self) -> &'static str {
        match self {
            Paint::Bold => "\x1b[1m",
            Paint::Red => "\x1b[91m",
            Paint::Green => "\x1b[92m",
            Paint::Yellow => "\x1b[93m",
            Paint::Blue => "\x1b[94m",
            Paint::Magenta => "\x1b[95m",
            Paint::Cyan => "\x1b[96m",
            Paint::White => "\x1b[97m",
        }
    }

    /// 200 is green, the common redirects are yellow, anything else is red
    pub const fn for_status(status: u16) -> Self {
        match status {
            200 => Paint::Green,
            301 | 302 | 307 | 308 => Paint::Yellow,
            _ => Paint::Red,
        }
    }
}

/// Wraps `text` in `paint`, or returns it untouched when `enabled` is false
pub fn paint(text: &str, paint: Paint, enabled: bool) -> String {
    if enabled {
        format!("{}{}{}", paint.code(), text, Paint::RESET)
    } else {
        text.to_string()
    }
}

/// Removes CSI escape sequences (`ESC [ ... final-byte`)
pub fn strip_ansi(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        } else {
            plain.push(c);
        }
    }
    plain
}
