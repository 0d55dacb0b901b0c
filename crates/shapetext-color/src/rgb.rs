//! Literal RGB colors and their text forms.
//!
//! Two literal spellings appear in extracted output:
//!
//! - Function form: `RGB(255, 128, 64)`
//! - Hex form: `FF8040` (uppercase, no `#`)
//!
//! Parsing is lenient about whitespace and hex case but strict about
//! everything else. Malformed input yields `None` rather than an error, so a
//! bad color in a document degrades to "no color" instead of aborting the
//! extraction.
//!
//! ```rust
//! use shapetext_color::{format_rgb, parse_rgb, parse_rgb_to_hex, Rgb};
//!
//! let rgb = Rgb(255, 128, 64);
//! assert_eq!(format_rgb(rgb), "RGB(255, 128, 64)");
//! assert_eq!(parse_rgb("RGB(255, 128, 64)"), Some(rgb));
//! assert_eq!(parse_rgb_to_hex("RGB(255, 128, 64)").as_deref(), Some("FF8040"));
//! assert_eq!(parse_rgb("255,128,64"), None);
//! ```

use std::fmt;

/// An 8-bit-per-channel sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Channels as an array, red first.
    pub fn channels(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }

    /// Builds a color from a channel array, red first.
    pub fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Rgb(r, g, b)
    }

    /// Formats as six uppercase hex digits without a `#` prefix.
    pub fn to_hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Parses six hex digits, with or without a leading `#`.
    ///
    /// Three-digit shorthand is not accepted: documents always spell the full
    /// six digits, so a short value indicates corruption.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Rgb(r, g, b))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RGB({}, {}, {})", self.0, self.1, self.2)
    }
}

/// Formats a color in function form: `RGB(r, g, b)`.
pub fn format_rgb(rgb: Rgb) -> String {
    rgb.to_string()
}

/// Parses the function form `RGB(r, g, b)`.
///
/// Each component must be a decimal integer in `0..=255`. Returns `None` for
/// anything else, including bare comma lists and out-of-range channels.
pub fn parse_rgb(s: &str) -> Option<Rgb> {
    let s = s.trim();
    let inner = s.strip_prefix("RGB(")?.strip_suffix(')')?;

    let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }

    let mut channels = [0u8; 3];
    for (i, part) in parts.iter().enumerate() {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        // u8 parsing rejects anything above 255
        channels[i] = part.parse::<u8>().ok()?;
    }

    Some(Rgb::from_channels(channels))
}

/// Converts the function form straight to hex: `RGB(255, 128, 64)` → `FF8040`.
pub fn parse_rgb_to_hex(s: &str) -> Option<String> {
    parse_rgb(s).map(Rgb::to_hex)
}
