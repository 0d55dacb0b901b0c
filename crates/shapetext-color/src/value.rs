//! The resolved color type shared by serialization and style comparison.

use crate::palette::{resolve_slot, SchemeSlot, ThemePalette};
use crate::rgb::Rgb;
use crate::transform::{apply_transforms, ColorTransforms};

/// Which of the two representations a [`ColorValue`] carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorKind {
    Literal,
    Theme,
}

/// Where a color came from, kept so it can be written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSource {
    /// A literal color. `original_hex` is the source text verbatim, when the
    /// color was read from hex.
    Literal { original_hex: Option<String> },
    /// A theme palette reference plus its modifier chain.
    Theme {
        slot: SchemeSlot,
        transforms: ColorTransforms,
    },
}

/// A single resolved color.
///
/// `rgb` is always populated, for theme references too: it holds the palette
/// color after the transform pipeline has run, ready for rendering and for
/// direct comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorValue {
    rgb: Rgb,
    transparent: bool,
    source: ColorSource,
}

impl ColorValue {
    /// A literal color with no recorded source text.
    pub fn literal(rgb: Rgb) -> Self {
        Self {
            rgb,
            transparent: false,
            source: ColorSource::Literal { original_hex: None },
        }
    }

    /// Parses a literal hex color, keeping its six digits for write-back.
    ///
    /// Surrounding whitespace and a leading `#` are dropped from the kept
    /// text; digit case is preserved.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let rgb = Rgb::from_hex(hex)?;
        let trimmed = hex.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        Some(Self {
            rgb,
            transparent: false,
            source: ColorSource::Literal {
                original_hex: Some(digits.to_string()),
            },
        })
    }

    /// A theme reference resolved against `palette` (or the defaults).
    pub fn theme(slot: SchemeSlot, transforms: ColorTransforms, palette: Option<&ThemePalette>) -> Self {
        let base = resolve_slot(slot, palette);
        Self {
            rgb: apply_transforms(base, &transforms),
            transparent: false,
            source: ColorSource::Theme { slot, transforms },
        }
    }

    /// The fully transparent color.
    pub fn transparent() -> Self {
        Self {
            rgb: Rgb::BLACK,
            transparent: true,
            source: ColorSource::Literal { original_hex: None },
        }
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    pub fn kind(&self) -> ColorKind {
        match self.source {
            ColorSource::Literal { .. } => ColorKind::Literal,
            ColorSource::Theme { .. } => ColorKind::Theme,
        }
    }

    pub fn source(&self) -> &ColorSource {
        &self.source
    }

    /// The palette slot, for theme references.
    pub fn slot(&self) -> Option<SchemeSlot> {
        match self.source {
            ColorSource::Theme { slot, .. } => Some(slot),
            ColorSource::Literal { .. } => None,
        }
    }

    /// The modifier chain, for theme references with at least one modifier.
    pub fn transforms(&self) -> Option<&ColorTransforms> {
        match &self.source {
            ColorSource::Theme { transforms, .. } if !transforms.is_empty() => Some(transforms),
            _ => None,
        }
    }

    /// The literal hex text this color was read from, if any.
    pub fn original_hex(&self) -> Option<&str> {
        match &self.source {
            ColorSource::Literal { original_hex } => original_hex.as_deref(),
            ColorSource::Theme { .. } => None,
        }
    }

    /// Hex for writing back: the source text when there was one, otherwise
    /// the resolved value.
    pub fn write_back_hex(&self) -> String {
        self.original_hex()
            .map(str::to_string)
            .unwrap_or_else(|| self.rgb.to_hex())
    }

    /// True when both colors render identically.
    ///
    /// Compares resolved values only: `accent1` and a literal `4472C4` are the
    /// same color. Any two transparent colors are the same color.
    pub fn renders_same(&self, other: &ColorValue) -> bool {
        match (self.transparent, other.transparent) {
            (true, true) => true,
            (false, false) => self.rgb == other.rgb,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_has_no_slot_or_transforms() {
        let c = ColorValue::literal(Rgb(1, 2, 3));
        assert_eq!(c.kind(), ColorKind::Literal);
        assert_eq!(c.slot(), None);
        assert_eq!(c.transforms(), None);
        assert_eq!(c.original_hex(), None);
        assert_eq!(c.write_back_hex(), "010203");
    }

    #[test]
    fn from_hex_preserves_source_text() {
        let c = ColorValue::from_hex("#ff8040").unwrap();
        assert_eq!(c.rgb(), Rgb(255, 128, 64));
        assert_eq!(c.original_hex(), Some("ff8040"));
        assert_eq!(c.write_back_hex(), "ff8040");
        assert!(ColorValue::from_hex("ff80").is_none());
    }

    #[test]
    fn from_hex_keeps_only_the_digits() {
        let c = ColorValue::from_hex(" FF8040 ").unwrap();
        assert_eq!(c.original_hex(), Some("FF8040"));
        assert_eq!(c.write_back_hex(), "FF8040");

        let c = ColorValue::from_hex("  #a1B2c3\n").unwrap();
        assert_eq!(c.original_hex(), Some("a1B2c3"));
    }

    #[test]
    fn theme_color_is_resolved() {
        let c = ColorValue::theme(
            SchemeSlot::Accent1,
            ColorTransforms::new().with_lum_mod(75000),
            None,
        );
        assert_eq!(c.kind(), ColorKind::Theme);
        assert_eq!(c.slot(), Some(SchemeSlot::Accent1));
        assert_eq!(c.rgb().to_hex(), "2F5597");
        assert_eq!(c.transforms(), Some(&ColorTransforms::new().with_lum_mod(75000)));
    }

    #[test]
    fn theme_color_without_transforms_reports_none() {
        let c = ColorValue::theme(SchemeSlot::Dk1, ColorTransforms::new(), None);
        assert_eq!(c.transforms(), None);
        assert_eq!(c.rgb(), Rgb::BLACK);
    }

    #[test]
    fn theme_color_uses_palette() {
        let palette = ThemePalette::new().with_color(SchemeSlot::Accent2, Rgb(10, 20, 30));
        let c = ColorValue::theme(SchemeSlot::Accent2, ColorTransforms::new(), Some(&palette));
        assert_eq!(c.rgb(), Rgb(10, 20, 30));
    }

    #[test]
    fn renders_same_ignores_source() {
        let theme = ColorValue::theme(SchemeSlot::Accent1, ColorTransforms::new(), None);
        let literal = ColorValue::from_hex("4472C4").unwrap();
        assert!(theme.renders_same(&literal));
        assert!(literal.renders_same(&theme));
        assert_ne!(theme, literal);
    }

    #[test]
    fn transparency_is_part_of_identity() {
        let black = ColorValue::literal(Rgb::BLACK);
        assert!(!black.renders_same(&ColorValue::transparent()));
        assert!(ColorValue::transparent().renders_same(&ColorValue::transparent()));
    }
}
