//! Theme palette slots and their resolution to literal colors.
//!
//! A presentation theme defines twelve named colors. Document content refers
//! to them by slot name (`accent1`, `dk2`, ...) instead of embedding a literal.
//! Four extra names are aliases used by shape text: `tx1`/`tx2` for the dark
//! slots and `bg1`/`bg2` for the light ones.
//!
//! | Slot       | Alias | Office default |
//! |------------|-------|----------------|
//! | `dk1`      | `tx1` | `000000`       |
//! | `lt1`      | `bg1` | `FFFFFF`       |
//! | `dk2`      | `tx2` | `44546A`       |
//! | `lt2`      | `bg2` | `E7E6E6`       |
//! | `accent1`  |       | `4472C4`       |
//! | `accent2`  |       | `ED7D31`       |
//! | `accent3`  |       | `A5A5A5`       |
//! | `accent4`  |       | `FFC000`       |
//! | `accent5`  |       | `5B9BD5`       |
//! | `accent6`  |       | `70AD47`       |
//! | `hlink`    |       | `0563C1`       |
//! | `folHlink` |       | `954F72`       |
//!
//! Resolution never fails. A missing palette, or a palette missing one slot,
//! falls back to the Office default for that slot.
//!
//! ```rust
//! use shapetext_color::{resolve_slot, Rgb, SchemeSlot, ThemePalette};
//!
//! let slot = SchemeSlot::parse("tx1").unwrap();
//! assert_eq!(slot, SchemeSlot::Dk1);
//! assert_eq!(resolve_slot(slot, None), Rgb(0, 0, 0));
//!
//! let palette = ThemePalette::new().with_color(SchemeSlot::Accent1, Rgb(1, 2, 3));
//! assert_eq!(resolve_slot(SchemeSlot::Accent1, Some(&palette)), Rgb(1, 2, 3));
//! assert_eq!(resolve_slot(SchemeSlot::Accent2, Some(&palette)), Rgb(0xED, 0x7D, 0x31));
//! ```

use std::collections::BTreeMap;
use std::fmt;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde::{Deserialize, Serialize};

use crate::error::{PaletteError, Result};
use crate::rgb::Rgb;

// ─── SchemeSlot ─────────────────────────────────────────────────────────────

/// One of the twelve theme palette slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SchemeSlot {
    #[serde(rename = "dk1")]
    Dk1,
    #[serde(rename = "lt1")]
    Lt1,
    #[serde(rename = "dk2")]
    Dk2,
    #[serde(rename = "lt2")]
    Lt2,
    #[serde(rename = "accent1")]
    Accent1,
    #[serde(rename = "accent2")]
    Accent2,
    #[serde(rename = "accent3")]
    Accent3,
    #[serde(rename = "accent4")]
    Accent4,
    #[serde(rename = "accent5")]
    Accent5,
    #[serde(rename = "accent6")]
    Accent6,
    #[serde(rename = "hlink")]
    Hlink,
    #[serde(rename = "folHlink")]
    FolHlink,
}

impl SchemeSlot {
    /// All slots in theme order.
    pub const ALL: [SchemeSlot; 12] = [
        SchemeSlot::Dk1,
        SchemeSlot::Lt1,
        SchemeSlot::Dk2,
        SchemeSlot::Lt2,
        SchemeSlot::Accent1,
        SchemeSlot::Accent2,
        SchemeSlot::Accent3,
        SchemeSlot::Accent4,
        SchemeSlot::Accent5,
        SchemeSlot::Accent6,
        SchemeSlot::Hlink,
        SchemeSlot::FolHlink,
    ];

    /// Parses a slot name, normalizing the text/background aliases.
    ///
    /// Returns `None` for names outside the palette (`phClr`, typos).
    pub fn parse(name: &str) -> Option<Self> {
        let canonical = match name.trim() {
            "tx1" => "dk1",
            "bg1" => "lt1",
            "tx2" => "dk2",
            "bg2" => "lt2",
            "folhlink" => "folHlink",
            other => other,
        };
        Self::from_element_name(canonical)
    }

    /// Matches the exact element name used inside `<a:clrScheme>`.
    fn from_element_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.as_str() == name)
    }

    /// The canonical slot name.
    pub fn as_str(self) -> &'static str {
        match self {
            SchemeSlot::Dk1 => "dk1",
            SchemeSlot::Lt1 => "lt1",
            SchemeSlot::Dk2 => "dk2",
            SchemeSlot::Lt2 => "lt2",
            SchemeSlot::Accent1 => "accent1",
            SchemeSlot::Accent2 => "accent2",
            SchemeSlot::Accent3 => "accent3",
            SchemeSlot::Accent4 => "accent4",
            SchemeSlot::Accent5 => "accent5",
            SchemeSlot::Accent6 => "accent6",
            SchemeSlot::Hlink => "hlink",
            SchemeSlot::FolHlink => "folHlink",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for SchemeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Default table ──────────────────────────────────────────────────────────

/// The Office 2013+ default theme, in [`SchemeSlot::ALL`] order.
const DEFAULT_SLOT_COLORS: [Rgb; 12] = [
    Rgb(0x00, 0x00, 0x00), // dk1
    Rgb(0xFF, 0xFF, 0xFF), // lt1
    Rgb(0x44, 0x54, 0x6A), // dk2
    Rgb(0xE7, 0xE6, 0xE6), // lt2
    Rgb(0x44, 0x72, 0xC4), // accent1
    Rgb(0xED, 0x7D, 0x31), // accent2
    Rgb(0xA5, 0xA5, 0xA5), // accent3
    Rgb(0xFF, 0xC0, 0x00), // accent4
    Rgb(0x5B, 0x9B, 0xD5), // accent5
    Rgb(0x70, 0xAD, 0x47), // accent6
    Rgb(0x05, 0x63, 0xC1), // hlink
    Rgb(0x95, 0x4F, 0x72), // folHlink
];

/// Returns the built-in default color for a slot.
pub fn default_slot_color(slot: SchemeSlot) -> Rgb {
    DEFAULT_SLOT_COLORS[slot.index()]
}

// ─── ThemePalette ───────────────────────────────────────────────────────────

/// The twelve literal colors a document theme assigns to its slots.
///
/// Slots that were never set (or failed to parse) resolve to the built-in
/// default, so a partially populated palette is always usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePalette {
    name: Option<String>,
    colors: [Option<Rgb>; 12],
}

impl ThemePalette {
    /// Creates a palette with no slots set; every lookup uses the defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a palette with every slot set to the Office default.
    pub fn office() -> Self {
        Self {
            name: Some("Office".to_string()),
            colors: DEFAULT_SLOT_COLORS.map(Some),
        }
    }

    /// Sets the palette name, returning `self` for chaining.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets one slot, returning `self` for chaining.
    pub fn with_color(mut self, slot: SchemeSlot, rgb: Rgb) -> Self {
        self.set(slot, rgb);
        self
    }

    /// Sets one slot in place.
    pub fn set(&mut self, slot: SchemeSlot, rgb: Rgb) {
        self.colors[slot.index()] = Some(rgb);
    }

    /// The palette name, when the source carried one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The color recorded for `slot`, if the source defined one.
    pub fn get(&self, slot: SchemeSlot) -> Option<Rgb> {
        self.colors[slot.index()]
    }

    /// The color for `slot`, falling back to the default table.
    pub fn color(&self, slot: SchemeSlot) -> Rgb {
        self.get(slot).unwrap_or_else(|| {
            log::debug!("theme palette has no {} entry, using default", slot);
            default_slot_color(slot)
        })
    }

    /// Builds a palette from `(slot name, hex)` pairs.
    ///
    /// Aliases are accepted. Unknown names and malformed hex values are
    /// skipped, leaving the default in force for that slot.
    pub fn from_hex_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut palette = Self::new();
        for (name, hex) in entries {
            let (name, hex) = (name.as_ref(), hex.as_ref());
            let Some(slot) = SchemeSlot::parse(name) else {
                log::debug!("ignoring unknown palette slot '{}'", name);
                continue;
            };
            match Rgb::from_hex(hex) {
                Some(rgb) => palette.set(slot, rgb),
                None => log::debug!("ignoring malformed color '{}' for slot {}", hex, slot),
            }
        }
        palette
    }

    /// Loads a palette from a YAML mapping of slot name to hex color.
    ///
    /// ```rust
    /// use shapetext_color::{Rgb, SchemeSlot, ThemePalette};
    ///
    /// let palette = ThemePalette::from_yaml(r##"
    /// accent1: "156082"
    /// tx2: "#0E2841"
    /// "##).unwrap();
    /// assert_eq!(palette.color(SchemeSlot::Accent1), Rgb(0x15, 0x60, 0x82));
    /// assert_eq!(palette.color(SchemeSlot::Dk2), Rgb(0x0E, 0x28, 0x41));
    /// ```
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let entries: BTreeMap<String, String> = serde_yaml::from_str(yaml)?;
        Ok(Self::from_hex_entries(entries))
    }

    /// Loads a palette from a DrawingML theme part (`ppt/theme/theme1.xml`).
    ///
    /// Reads the first `<a:clrScheme>`. Each slot takes its color from an
    /// `<a:srgbClr val>` child, or from `<a:sysClr lastClr>` for system colors.
    pub fn from_theme_xml(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.config_mut().trim_text(true);

        let mut palette = Self::new();
        let mut in_scheme = false;
        let mut found_scheme = false;
        let mut current: Option<SchemeSlot> = None;

        loop {
            let event = reader.read_event().map_err(|e| PaletteError::Xml {
                position: reader.buffer_position() as u64,
                message: e.to_string(),
            })?;

            let is_start = matches!(event, Event::Start(_));
            match event {
                Event::Start(ref e) | Event::Empty(ref e) => {
                    let local = e.local_name();
                    let local = std::str::from_utf8(local.as_ref()).unwrap_or_default();
                    if local == "clrScheme" {
                        in_scheme = true;
                        found_scheme = true;
                        if let Some(name) = attribute(e, "name") {
                            palette.name = Some(name);
                        }
                    } else if in_scheme {
                        if let Some(slot) = SchemeSlot::from_element_name(local) {
                            // a self-closing slot has no End event to clear it
                            current = is_start.then_some(slot);
                        } else if let Some(slot) = current {
                            let value = match local {
                                "srgbClr" => attribute(e, "val"),
                                "sysClr" => attribute(e, "lastClr"),
                                _ => None,
                            };
                            if let Some(rgb) = value.as_deref().and_then(Rgb::from_hex) {
                                palette.set(slot, rgb);
                            }
                        }
                    }
                }
                Event::End(ref e) => {
                    let local = e.local_name();
                    let local = local.as_ref();
                    if local == b"clrScheme" {
                        break;
                    }
                    if current.is_some_and(|slot| slot.as_str().as_bytes() == local) {
                        current = None;
                    }
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !found_scheme {
            return Err(PaletteError::MissingColorScheme);
        }
        Ok(palette)
    }
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Option<String> {
    element
        .try_get_attribute(name)
        .ok()
        .flatten()
        .and_then(|attr| attr.unescape_value().ok())
        .map(|value| value.into_owned())
}

/// Resolves a slot to its literal color.
///
/// Uses the palette when one is available and it defines the slot; otherwise
/// the built-in default.
pub fn resolve_slot(slot: SchemeSlot, palette: Option<&ThemePalette>) -> Rgb {
    match palette {
        Some(palette) => palette.color(slot),
        None => default_slot_color(slot),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_normalize() {
        assert_eq!(SchemeSlot::parse("tx1"), Some(SchemeSlot::Dk1));
        assert_eq!(SchemeSlot::parse("bg1"), Some(SchemeSlot::Lt1));
        assert_eq!(SchemeSlot::parse("tx2"), Some(SchemeSlot::Dk2));
        assert_eq!(SchemeSlot::parse("bg2"), Some(SchemeSlot::Lt2));
    }

    #[test]
    fn canonical_names_pass_through() {
        for slot in SchemeSlot::ALL {
            assert_eq!(SchemeSlot::parse(slot.as_str()), Some(slot));
        }
        assert_eq!(SchemeSlot::parse("folhlink"), Some(SchemeSlot::FolHlink));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(SchemeSlot::parse("phClr"), None);
        assert_eq!(SchemeSlot::parse("accent7"), None);
        assert_eq!(SchemeSlot::parse(""), None);
    }

    #[test]
    fn defaults_cover_every_slot() {
        assert_eq!(default_slot_color(SchemeSlot::Dk1), Rgb::BLACK);
        assert_eq!(default_slot_color(SchemeSlot::Lt1), Rgb::WHITE);
        assert_eq!(default_slot_color(SchemeSlot::Accent1).to_hex(), "4472C4");
        assert_eq!(default_slot_color(SchemeSlot::FolHlink).to_hex(), "954F72");
        assert_eq!(ThemePalette::office().get(SchemeSlot::Hlink), Some(Rgb(0x05, 0x63, 0xC1)));
    }

    #[test]
    fn resolve_without_palette_uses_defaults() {
        for slot in SchemeSlot::ALL {
            assert_eq!(resolve_slot(slot, None), default_slot_color(slot));
        }
    }

    #[test]
    fn partial_palette_falls_back_per_slot() {
        let palette = ThemePalette::new().with_color(SchemeSlot::Accent1, Rgb(1, 2, 3));
        assert_eq!(resolve_slot(SchemeSlot::Accent1, Some(&palette)), Rgb(1, 2, 3));
        assert_eq!(
            resolve_slot(SchemeSlot::Accent3, Some(&palette)),
            default_slot_color(SchemeSlot::Accent3)
        );
    }

    #[test]
    fn hex_entries_skip_bad_values() {
        let palette = ThemePalette::from_hex_entries([
            ("accent1", "112233"),
            ("bg2", "#AABBCC"),
            ("accent2", "not-a-color"),
            ("bogus", "FFFFFF"),
        ]);
        assert_eq!(palette.get(SchemeSlot::Accent1), Some(Rgb(0x11, 0x22, 0x33)));
        assert_eq!(palette.get(SchemeSlot::Lt2), Some(Rgb(0xAA, 0xBB, 0xCC)));
        assert_eq!(palette.get(SchemeSlot::Accent2), None);
        assert_eq!(palette.color(SchemeSlot::Accent2), default_slot_color(SchemeSlot::Accent2));
    }

    #[test]
    fn yaml_rejects_non_mapping() {
        assert!(matches!(
            ThemePalette::from_yaml("- accent1\n- accent2\n"),
            Err(PaletteError::Yaml(_))
        ));
    }

    const THEME_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">
  <a:themeElements>
    <a:clrScheme name="Office 2023">
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="0E2841"/></a:dk2>
      <a:lt2><a:srgbClr val="E8E8E8"/></a:lt2>
      <a:accent1><a:srgbClr val="156082"/></a:accent1>
      <a:accent2><a:srgbClr val="E97132"/></a:accent2>
      <a:accent3><a:srgbClr val="196B24"/></a:accent3>
      <a:accent4><a:srgbClr val="0F9ED5"/></a:accent4>
      <a:accent5><a:srgbClr val="A02B93"/></a:accent5>
      <a:accent6><a:srgbClr val="4EA72E"/></a:accent6>
      <a:hlink><a:srgbClr val="467886"/></a:hlink>
      <a:folHlink><a:srgbClr val="96607D"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="Office"><a:majorFont><a:latin typeface="Aptos Display"/></a:majorFont></a:fontScheme>
  </a:themeElements>
</a:theme>"#;

    #[test]
    fn theme_xml_reads_every_slot() {
        let palette = ThemePalette::from_theme_xml(THEME_XML).unwrap();
        assert_eq!(palette.name(), Some("Office 2023"));
        assert_eq!(palette.get(SchemeSlot::Dk1), Some(Rgb::BLACK));
        assert_eq!(palette.get(SchemeSlot::Lt1), Some(Rgb::WHITE));
        assert_eq!(palette.get(SchemeSlot::Dk2).map(Rgb::to_hex).as_deref(), Some("0E2841"));
        assert_eq!(palette.get(SchemeSlot::Accent1).map(Rgb::to_hex).as_deref(), Some("156082"));
        assert_eq!(palette.get(SchemeSlot::FolHlink).map(Rgb::to_hex).as_deref(), Some("96607D"));
        assert!(SchemeSlot::ALL.iter().all(|slot| palette.get(*slot).is_some()));
    }

    #[test]
    fn theme_xml_without_scheme_is_an_error() {
        let xml = r#"<a:theme xmlns:a="urn:a"><a:themeElements/></a:theme>"#;
        assert!(matches!(
            ThemePalette::from_theme_xml(xml),
            Err(PaletteError::MissingColorScheme)
        ));
    }

    #[test]
    fn theme_xml_partial_scheme_keeps_defaults() {
        let xml = r#"<a:theme xmlns:a="urn:a"><a:clrScheme name="x">
            <a:accent1><a:srgbClr val="123456"/></a:accent1>
            <a:accent2><a:prstClr val="red"/></a:accent2>
        </a:clrScheme></a:theme>"#;
        let palette = ThemePalette::from_theme_xml(xml).unwrap();
        assert_eq!(palette.get(SchemeSlot::Accent1), Some(Rgb(0x12, 0x34, 0x56)));
        assert_eq!(palette.get(SchemeSlot::Accent2), None);
        assert_eq!(palette.color(SchemeSlot::Accent2), default_slot_color(SchemeSlot::Accent2));
    }

    #[test]
    fn self_closing_slot_does_not_capture_following_colors() {
        let xml = r#"<a:theme xmlns:a="urn:a"><a:clrScheme name="x">
            <a:dk1/>
            <a:srgbClr val="FF0000"/>
            <a:lt1><a:srgbClr val="FEFEFE"/></a:lt1>
        </a:clrScheme></a:theme>"#;
        let palette = ThemePalette::from_theme_xml(xml).unwrap();
        assert_eq!(palette.get(SchemeSlot::Dk1), None);
        assert_eq!(palette.get(SchemeSlot::Lt1), Some(Rgb(0xFE, 0xFE, 0xFE)));
    }

    #[test]
    fn malformed_theme_xml_is_an_error() {
        let xml = r#"<a:theme><a:clrScheme name="x"><a:dk1></a:lt1></a:clrScheme></a:theme>"#;
        assert!(matches!(
            ThemePalette::from_theme_xml(xml),
            Err(PaletteError::Xml { .. })
        ));
    }
}
